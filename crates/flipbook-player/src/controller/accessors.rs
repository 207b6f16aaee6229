//! Property accessors
//!
//! Setters never fail loudly: a rejected value is logged and reported through
//! the `bool` return, and the controller is left unchanged.

use super::PlaybackController;
use crate::animation::FrameAnimation;
use flipbook_common::{FrameTarget, PlayMode, PlaybackState, RandomSource};
use tracing::debug;

impl<F, T: FrameTarget<F>, R: RandomSource> PlaybackController<F, T, R> {
    /// Current lifecycle state.
    pub fn state(&self) -> PlaybackState {
        self.state
    }

    /// Check if currently playing.
    pub fn is_playing(&self) -> bool {
        self.state == PlaybackState::Playing
    }

    /// Whether the controller has frames and a target to play on.
    pub fn can_play(&self) -> bool {
        self.can_play
    }

    /// The frame sequence being played.
    pub fn animation(&self) -> &FrameAnimation<F> {
        &self.animation
    }

    /// Number of frames.
    pub fn frame_count(&self) -> usize {
        self.animation.frame_count()
    }

    /// Current play mode.
    pub fn mode(&self) -> PlayMode {
        self.mode
    }

    /// Change the play mode. Rejected while playing.
    pub fn set_mode(&mut self, mode: PlayMode) -> bool {
        if self.state == PlaybackState::Playing {
            debug!(requested = %mode, current = %self.mode, "mode change rejected while playing");
            return false;
        }
        self.mode = mode;
        true
    }

    /// Change the play mode by numeric index. Undefined indices are rejected.
    pub fn set_mode_index(&mut self, index: i64) -> bool {
        match PlayMode::from_index(index) {
            Some(mode) => self.set_mode(mode),
            None => {
                debug!(index, "mode change rejected: undefined mode");
                false
            }
        }
    }

    /// Index of the displayed frame, `None` when inactive.
    pub fn current_frame(&self) -> Option<usize> {
        self.current_frame
    }

    /// Identifier of the displayed frame, `None` when inactive.
    pub fn current_frame_id(&self) -> Option<&F> {
        self.current_frame.and_then(|index| self.animation.frame(index))
    }

    /// Show `index` right away, without waiting for the next due time.
    ///
    /// Rejected when out of range or while inactive. The playback timer is
    /// left untouched, so a running session continues from the new frame on
    /// its usual schedule.
    pub fn set_current_frame(&mut self, index: usize) -> bool {
        if self.state == PlaybackState::Inactive {
            debug!(index, "frame change rejected while inactive");
            return false;
        }
        if index >= self.animation.frame_count() {
            debug!(
                index,
                frame_count = self.animation.frame_count(),
                "frame change rejected: out of range"
            );
            return false;
        }
        self.display(index);
        true
    }

    /// Direction of travel in the current session.
    pub fn is_forward(&self) -> bool {
        self.forward
    }

    /// Default direction applied by the next `play()`.
    pub fn is_reversed(&self) -> bool {
        self.reversed
    }

    /// Set the default direction. Takes effect on the next `play()`.
    pub fn set_reversed(&mut self, reversed: bool) {
        self.reversed = reversed;
    }

    /// Whether the current frame is rendered.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Show or hide the current frame. Playback is unaffected.
    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
        if let Some(target) = self.target.as_mut() {
            target.set_visible(visible);
        }
    }

    /// Signed frame rate in frames per second.
    pub fn frame_rate(&self) -> f64 {
        self.animation.frame_rate()
    }

    /// Change the frame rate for later sessions. Rejected while playing.
    ///
    /// The sign becomes the new default direction, as at construction. A
    /// paused session picks up the new rate when resumed.
    pub fn set_frame_rate(&mut self, frame_rate: f64) -> bool {
        if self.state == PlaybackState::Playing {
            debug!(frame_rate, "frame rate change rejected while playing");
            return false;
        }
        if frame_rate.is_nan() {
            debug!("frame rate change rejected: NaN");
            return false;
        }
        self.animation.set_frame_rate(frame_rate);
        self.reversed = frame_rate < 0.0;
        true
    }

    /// Seconds between frames in the running or last session.
    pub fn frame_interval(&self) -> f64 {
        self.frame_interval
    }

    /// Time at which the next frame step is due.
    pub fn next_due_time(&self) -> f64 {
        self.next_due
    }

    /// Latest time passed to `advance`.
    pub fn clock(&self) -> f64 {
        self.clock
    }

    /// Time one pass over every frame takes at the current rate.
    pub fn duration_seconds(&self) -> f64 {
        self.animation.duration_seconds()
    }
}
