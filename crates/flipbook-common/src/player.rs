//! Unified frame player trait.
//!
//! [`FramePlayer`] is object-safe so hosts can drive any player through
//! `&mut dyn FramePlayer` without knowing its frame, target or random types.

use crate::{AdvanceResult, PlayMode, PlaybackState};

/// Control surface shared by frame-sequence players.
///
/// Every operation is forgiving: requests that make no sense in the current
/// state are ignored rather than reported. Setters return `false` when they
/// rejected the value.
pub trait FramePlayer {
    /// Start from the configured start offset. No-op while playing.
    fn play(&mut self);

    /// Start from `offset` frames into the sequence (from the last frame when
    /// reversed). Out-of-range offsets start at the end playback enters from.
    fn play_from(&mut self, offset: usize);

    /// `play` with the host's current time; the first step is due one interval
    /// after `now`.
    fn play_at(&mut self, now: f64);

    /// `play_from` with the host's current time.
    fn play_from_at(&mut self, offset: usize, now: f64);

    /// Suspend a playing session.
    fn pause(&mut self);

    /// Continue a paused session. The next frame is due one full interval later.
    fn resume(&mut self);

    /// `resume` with the host's current time.
    fn resume_at(&mut self, now: f64);

    /// Stop playback. A later `play()` restarts from the beginning.
    fn stop(&mut self);

    /// Clear the current frame and show the inactive frame.
    fn deactivate(&mut self);

    /// Feed the current host time (seconds, non-decreasing).
    fn advance(&mut self, now: f64) -> AdvanceResult;

    /// Current lifecycle state.
    fn state(&self) -> PlaybackState;

    /// Check if currently playing.
    fn is_playing(&self) -> bool {
        self.state() == PlaybackState::Playing
    }

    /// Pause when playing, resume when paused, otherwise do nothing.
    fn toggle_pause(&mut self) {
        match self.state() {
            PlaybackState::Playing => self.pause(),
            PlaybackState::Paused => self.resume(),
            PlaybackState::Stopped | PlaybackState::Inactive => {}
        }
    }

    /// [`toggle_pause`](Self::toggle_pause) with the host's current time.
    fn toggle_pause_at(&mut self, now: f64) {
        match self.state() {
            PlaybackState::Playing => self.pause(),
            PlaybackState::Paused => self.resume_at(now),
            PlaybackState::Stopped | PlaybackState::Inactive => {}
        }
    }

    /// Current play mode.
    fn mode(&self) -> PlayMode;

    /// Change the play mode. Rejected while playing.
    fn set_mode(&mut self, mode: PlayMode) -> bool;

    /// Index of the displayed frame, `None` when inactive.
    fn current_frame(&self) -> Option<usize>;

    /// Jump straight to `index`. Rejected when out of range or inactive.
    fn set_current_frame(&mut self, index: usize) -> bool;

    /// Number of frames in the sequence.
    fn frame_count(&self) -> usize;

    /// Default direction used by the next `play()`.
    fn is_reversed(&self) -> bool;

    /// Set the default direction used by the next `play()`.
    fn set_reversed(&mut self, reversed: bool);

    /// Whether the current frame is rendered.
    fn is_visible(&self) -> bool;

    /// Show or hide the current frame without touching playback.
    fn set_visible(&mut self, visible: bool);
}
