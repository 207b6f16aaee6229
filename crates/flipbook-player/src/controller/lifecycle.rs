//! Session lifecycle
//!
//! Play / pause / resume / stop / deactivate transitions. All of them are
//! forgiving: a request that does not apply to the current state is logged
//! at debug level and ignored.

use super::PlaybackController;
use flipbook_common::{FrameTarget, MIN_PLAYABLE_FRAMES, PlaybackState, RandomSource};
use tracing::debug;

impl<F, T: FrameTarget<F>, R: RandomSource> PlaybackController<F, T, R> {
    /// Start a session from the animation's start offset.
    ///
    /// No-op while already playing, when the controller is inert, or when the
    /// sequence has fewer than two frames. The first frame change is scheduled
    /// from the latest time seen by `advance`; hosts that stop ticking while
    /// idle should call [`play_at`](Self::play_at) instead.
    pub fn play(&mut self) {
        self.play_at(self.clock);
    }

    /// Start a session at host time `now`.
    pub fn play_at(&mut self, now: f64) {
        let offset = self.animation.start_offset();
        self.play_from_at(offset, now);
    }

    /// Start a session `offset` frames in from the entry end of the sequence
    /// (the first frame when forward, the last when reversed).
    ///
    /// Out-of-range offsets start at the entry end. When the frame rate is too
    /// close to zero the start frame is shown but the controller stays stopped.
    pub fn play_from(&mut self, offset: usize) {
        self.play_from_at(offset, self.clock);
    }

    /// [`play_from`](Self::play_from) at host time `now`. The next frame is
    /// due one interval after `now`.
    pub fn play_from_at(&mut self, offset: usize, now: f64) {
        if !self.can_play {
            debug!("play ignored: controller is disabled");
            return;
        }
        if self.state == PlaybackState::Playing {
            return;
        }
        let frame_count = self.animation.frame_count();
        if frame_count < MIN_PLAYABLE_FRAMES {
            debug!(frame_count, "play ignored: not enough frames to animate");
            return;
        }

        self.sync_clock(now);
        self.session_reversed = self.reversed;
        self.forward = !self.reversed;
        let offset = self.animation.resolve_offset(offset);
        let start = self.start_index(offset, self.forward);
        self.display(start);

        match self.animation.frame_interval() {
            Some(interval) => {
                self.frame_interval = interval;
                self.next_due = self.clock + interval;
                self.state = PlaybackState::Playing;
                debug!(
                    mode = %self.mode,
                    start,
                    forward = self.forward,
                    interval,
                    "playback started"
                );
            }
            None => {
                self.state = PlaybackState::Stopped;
                debug!(
                    frame_rate = self.animation.frame_rate(),
                    "frame rate too close to zero; showing start frame only"
                );
            }
        }
    }

    /// Suspend a playing session. Ignored in every other state.
    pub fn pause(&mut self) {
        if self.state == PlaybackState::Playing {
            self.state = PlaybackState::Paused;
            debug!(frame = ?self.current_frame, "playback paused");
        }
    }

    /// Continue a paused session.
    ///
    /// The wait restarts from a full interval measured from the latest time
    /// seen by `advance`; time spent paused is not caught up.
    pub fn resume(&mut self) {
        self.resume_at(self.clock);
    }

    /// Continue a paused session at host time `now`; the next frame is due one
    /// full interval later.
    pub fn resume_at(&mut self, now: f64) {
        if self.state != PlaybackState::Paused || !self.can_play {
            return;
        }
        let Some(interval) = self.animation.frame_interval() else {
            debug!("resume ignored: frame rate too close to zero");
            return;
        };
        self.sync_clock(now);
        self.frame_interval = interval;
        self.next_due = self.clock + interval;
        self.state = PlaybackState::Playing;
        debug!(frame = ?self.current_frame, now = self.clock, "playback resumed");
    }

    /// Stop the session. A later `play()` starts over.
    ///
    /// An inactive controller stays inactive: it has no frame to stop on.
    pub fn stop(&mut self) {
        match self.state {
            PlaybackState::Inactive | PlaybackState::Stopped => {}
            PlaybackState::Playing | PlaybackState::Paused => {
                self.state = PlaybackState::Stopped;
                debug!(frame = ?self.current_frame, "playback stopped");
            }
        }
    }

    /// Drop the current frame and show the inactive frame (or nothing).
    ///
    /// A running or paused session is stopped first. Only `play()` leaves the
    /// inactive state.
    pub fn deactivate(&mut self) {
        match self.state {
            PlaybackState::Inactive => return,
            PlaybackState::Playing | PlaybackState::Paused => self.stop(),
            PlaybackState::Stopped => {}
        }
        self.state = PlaybackState::Inactive;
        self.show_inactive_frame();
        debug!("controller deactivated");
    }
}
