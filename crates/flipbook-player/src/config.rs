//! Controller options and serializable animation descriptions.

use crate::animation::FrameAnimation;
use crate::{FlipbookError, Result};
use flipbook_common::{InitialState, PlayMode};
use serde::{Deserialize, Serialize};

/// Default frame rate for descriptions that omit one.
pub const DEFAULT_FRAME_RATE: f64 = 12.0;

/// Per-controller settings that are not part of the frame sequence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControllerOptions {
    /// Initial play mode.
    pub mode: PlayMode,
    /// State entered right after construction.
    pub initial_state: InitialState,
    /// Default direction override. `None` derives it from the frame-rate sign.
    pub reversed: Option<bool>,
    /// Whether the target starts visible.
    pub visible: bool,
}

impl Default for ControllerOptions {
    fn default() -> Self {
        Self {
            mode: PlayMode::default(),
            initial_state: InitialState::default(),
            reversed: None,
            visible: true,
        }
    }
}

impl ControllerOptions {
    /// Options with the given mode and defaults elsewhere.
    pub fn with_mode(mode: PlayMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }
}

/// Animation description as stored in a JSON file.
///
/// All fields are optional; missing ones use their defaults so partial
/// descriptions (e.g. only `frames`) work.
///
/// ```json
/// {
///   "frames": ["(o  )", "( o )", "(  o)"],
///   "frame_rate": 8.0,
///   "mode": "ping_pong_looped",
///   "initial_state": "playing"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    /// Frame identifiers (for the terminal player: text blocks).
    pub frames: Vec<String>,
    /// Signed frames per second.
    pub frame_rate: f64,
    /// Offset a plain `play()` starts from.
    pub start_offset: usize,
    /// Initial play mode.
    pub mode: PlayMode,
    /// State entered after construction.
    pub initial_state: InitialState,
    /// Default direction override.
    pub reversed: Option<bool>,
    /// Whether the frame starts visible.
    pub visible: bool,
    /// One-shot sessions end on the first frame.
    pub reset_to_first_frame_on_complete: bool,
    /// Random sessions may repeat frames back to back.
    pub allow_duplicate_random_frames: bool,
    /// Frame shown while inactive.
    pub inactive_frame: Option<String>,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            frames: Vec::new(),
            frame_rate: DEFAULT_FRAME_RATE,
            start_offset: 0,
            mode: PlayMode::default(),
            initial_state: InitialState::default(),
            reversed: None,
            visible: true,
            reset_to_first_frame_on_complete: false,
            allow_duplicate_random_frames: false,
            inactive_frame: None,
        }
    }
}

impl AnimationConfig {
    /// Reject values no controller could make sense of.
    ///
    /// An empty frame list is accepted: the controller built from it simply
    /// stays inert.
    pub fn validate(&self) -> Result<()> {
        if !self.frame_rate.is_finite() {
            return Err(FlipbookError::config(format!(
                "frame_rate must be finite, got {}",
                self.frame_rate
            )));
        }
        Ok(())
    }

    /// Controller options described by this config.
    pub fn options(&self) -> ControllerOptions {
        ControllerOptions {
            mode: self.mode,
            initial_state: self.initial_state,
            reversed: self.reversed,
            visible: self.visible,
        }
    }

    /// Split into the frame sequence and the controller options.
    pub fn into_parts(self) -> (FrameAnimation<String>, ControllerOptions) {
        let options = self.options();
        let mut animation = FrameAnimation::new(self.frames, self.frame_rate)
            .with_start_offset(self.start_offset)
            .with_reset_on_complete(self.reset_to_first_frame_on_complete)
            .with_duplicate_random_frames(self.allow_duplicate_random_frames);
        if let Some(frame) = self.inactive_frame {
            animation = animation.with_inactive_frame(frame);
        }
        (animation, options)
    }
}
