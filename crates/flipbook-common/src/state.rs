//! Playback state, play modes and per-tick results.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lifecycle state of a frame player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlaybackState {
    /// Not advancing. A later `play()` restarts from the beginning.
    #[default]
    Stopped,
    /// Suspended mid-session (can resume).
    Paused,
    /// Consuming ticks.
    Playing,
    /// No current frame; the inactive frame (if any) is displayed.
    Inactive,
}

impl PlaybackState {
    /// Lowercase name used in logs and status lines.
    pub fn as_str(self) -> &'static str {
        match self {
            PlaybackState::Stopped => "stopped",
            PlaybackState::Paused => "paused",
            PlaybackState::Playing => "playing",
            PlaybackState::Inactive => "inactive",
        }
    }
}

impl fmt::Display for PlaybackState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How the frame index moves once the end of the sequence is reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlayMode {
    /// Play through once, then complete and stop.
    OneShot,
    /// Wrap around to the first frame forever.
    #[default]
    Looped,
    /// Play out and back once, then complete and stop.
    PingPong,
    /// Play out and back forever.
    PingPongLooped,
    /// Show a uniformly random frame on every tick.
    Random,
}

impl PlayMode {
    /// Every mode, in index order.
    pub const ALL: [PlayMode; 5] = [
        PlayMode::OneShot,
        PlayMode::Looped,
        PlayMode::PingPong,
        PlayMode::PingPongLooped,
        PlayMode::Random,
    ];

    /// Look up a mode by its numeric index (as used by scripting hosts).
    ///
    /// Returns `None` for undefined values.
    pub fn from_index(index: i64) -> Option<Self> {
        usize::try_from(index)
            .ok()
            .and_then(|i| Self::ALL.get(i).copied())
    }

    /// Numeric index of this mode.
    pub fn index(self) -> usize {
        match self {
            PlayMode::OneShot => 0,
            PlayMode::Looped => 1,
            PlayMode::PingPong => 2,
            PlayMode::PingPongLooped => 3,
            PlayMode::Random => 4,
        }
    }

    /// snake_case name, matching the serde representation.
    pub fn as_str(self) -> &'static str {
        match self {
            PlayMode::OneShot => "one_shot",
            PlayMode::Looped => "looped",
            PlayMode::PingPong => "ping_pong",
            PlayMode::PingPongLooped => "ping_pong_looped",
            PlayMode::Random => "random",
        }
    }

    /// The mode after this one, wrapping back to the first.
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Whether a session in this mode ends on its own and raises completion.
    pub fn completes(self) -> bool {
        matches!(self, PlayMode::OneShot | PlayMode::PingPong)
    }
}

impl fmt::Display for PlayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PlayMode {
    type Err = ParseEnumError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_lowercase().replace('-', "_");
        match normalized.as_str() {
            "one_shot" | "oneshot" | "once" => Ok(PlayMode::OneShot),
            "looped" | "loop" => Ok(PlayMode::Looped),
            "ping_pong" | "pingpong" => Ok(PlayMode::PingPong),
            "ping_pong_looped" | "pingpong_looped" | "pingponglooped" => {
                Ok(PlayMode::PingPongLooped)
            }
            "random" => Ok(PlayMode::Random),
            _ => Err(ParseEnumError::new("play mode", value)),
        }
    }
}

/// State a controller enters right after construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InitialState {
    /// Show the first frame and wait for `play()`.
    #[default]
    Stopped,
    /// Start playing immediately.
    Playing,
    /// Show the inactive frame and wait for `play()`.
    Inactive,
}

impl FromStr for InitialState {
    type Err = ParseEnumError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "stopped" => Ok(InitialState::Stopped),
            "playing" => Ok(InitialState::Playing),
            "inactive" => Ok(InitialState::Inactive),
            _ => Err(ParseEnumError::new("initial state", value)),
        }
    }
}

/// Error returned when a mode or state name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind}: '{value}'")]
pub struct ParseEnumError {
    kind: &'static str,
    value: String,
}

impl ParseEnumError {
    fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }

    /// The rejected input.
    pub fn value(&self) -> &str {
        &self.value
    }
}

/// Result of feeding one tick to a player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdvanceResult {
    /// Not playing, or the next frame is not due yet.
    Idle,
    /// Moved to a new frame.
    FrameAdvanced,
    /// Moved to a new frame after wrapping (loop) or turning around (ping-pong).
    Wrapped,
    /// Reached the natural end of a one-shot or ping-pong session and stopped.
    Completed,
}

impl AdvanceResult {
    /// Whether the displayed frame may have changed during this tick.
    pub fn changed_frame(self) -> bool {
        !matches!(self, AdvanceResult::Idle)
    }
}
