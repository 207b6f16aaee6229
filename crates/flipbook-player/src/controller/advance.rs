//! Tick Handling and Frame Stepping
//!
//! Converts host time into whole frame steps and applies the play mode.
//!
//! Ping-pong position is tracked as a phase along the session's travel path:
//! phases below `n-1` are the outgoing leg and `n-1..2n-2` the return leg,
//! with the frame index mirrored for sessions that started reversed. Steps are
//! added to the phase, which makes large catch-up jumps reflect exactly no
//! matter how many times they cross an end.

use super::PlaybackController;
use flipbook_common::{
    AdvanceResult, FrameTarget, MAX_RANDOM_ATTEMPTS, PlayMode, PlaybackState, RandomSource,
};
use tracing::{debug, trace};

impl<F, T: FrameTarget<F>, R: RandomSource> PlaybackController<F, T, R> {
    /// Feed the host's current time in seconds.
    ///
    /// Does nothing unless playing and the next frame is due. Once due, at
    /// least one step is taken, plus one for every further whole interval that
    /// has elapsed. The due time advances by exactly that many intervals so
    /// irregular ticks never accumulate drift.
    ///
    /// Time is never allowed to run backwards: an earlier `now` than previously
    /// seen is treated as the previous time.
    pub fn advance(&mut self, now: f64) -> AdvanceResult {
        self.sync_clock(now);
        if self.state != PlaybackState::Playing || self.clock < self.next_due {
            return AdvanceResult::Idle;
        }

        let behind = self.clock - self.next_due;
        // Float-to-int `as` saturates, so huge stalls clamp instead of wrapping.
        let steps = 1usize.saturating_add((behind / self.frame_interval).floor() as usize);
        self.next_due += steps as f64 * self.frame_interval;
        trace!(now = self.clock, steps, next_due = self.next_due, "advance");

        let Some(current) = self.current_frame else {
            return AdvanceResult::Idle;
        };
        match self.mode {
            PlayMode::Random => self.step_random(current),
            PlayMode::OneShot => self.step_one_shot(current, steps),
            PlayMode::Looped => self.step_looped(current, steps),
            PlayMode::PingPong | PlayMode::PingPongLooped => self.step_ping_pong(current, steps),
        }
    }

    /// One uniform pick per tick, whatever the step count.
    fn step_random(&mut self, current: usize) -> AdvanceResult {
        let frame_count = self.animation.frame_count();
        let last = frame_count - 1;
        let mut pick = self.random.uniform_int(0, frame_count).min(last);
        if !self.animation.allow_duplicate_random_frames() {
            let mut attempts = 0;
            while pick == current && attempts < MAX_RANDOM_ATTEMPTS {
                pick = self.random.uniform_int(0, frame_count).min(last);
                attempts += 1;
            }
        }
        self.display(pick);
        AdvanceResult::FrameAdvanced
    }

    fn step_one_shot(&mut self, current: usize, steps: usize) -> AdvanceResult {
        let frame_count = self.animation.frame_count();
        let next = if self.forward {
            current.checked_add(steps).filter(|&i| i < frame_count)
        } else {
            current.checked_sub(steps)
        };
        if let Some(index) = next {
            self.display(index);
            return AdvanceResult::FrameAdvanced;
        }

        let last = frame_count - 1;
        let reset = self.animation.reset_to_first_frame_on_complete();
        let final_frame = match (self.forward, reset) {
            (true, false) | (false, true) => last,
            (true, true) | (false, false) => 0,
        };
        if self.current_frame != Some(final_frame) {
            self.display(final_frame);
        }
        self.complete()
    }

    fn step_looped(&mut self, current: usize, steps: usize) -> AdvanceResult {
        let frame_count = self.animation.frame_count();
        let shift = steps % frame_count;
        let (index, wrapped) = if self.forward {
            let raw = current + shift;
            (raw % frame_count, raw >= frame_count || steps >= frame_count)
        } else {
            let index = (current + frame_count - shift) % frame_count;
            (index, steps > current)
        };
        self.display(index);
        if wrapped {
            AdvanceResult::Wrapped
        } else {
            AdvanceResult::FrameAdvanced
        }
    }

    fn step_ping_pong(&mut self, current: usize, steps: usize) -> AdvanceResult {
        let frame_count = self.animation.frame_count();
        let leg = frame_count - 1;
        let period = 2 * leg;
        let phase = self.ping_pong_phase(current);
        let target = phase.saturating_add(steps);

        if self.mode.completes() && target >= period {
            let home = if self.session_reversed { leg } else { 0 };
            self.forward = !self.session_reversed;
            if self.current_frame != Some(home) {
                self.display(home);
            }
            return self.complete();
        }

        // Each arrival at an end (phase a multiple of `leg`) turns around.
        let turned = target / leg > phase / leg;
        let (index, forward) = self.ping_pong_position(target % period);
        self.forward = forward;
        self.display(index);
        if turned {
            AdvanceResult::Wrapped
        } else {
            AdvanceResult::FrameAdvanced
        }
    }

    /// Phase of `index` along the running session's path.
    fn ping_pong_phase(&self, index: usize) -> usize {
        let leg = self.animation.frame_count() - 1;
        let index = index.min(leg);
        let along = if self.session_reversed {
            leg - index
        } else {
            index
        };
        let outgoing = self.forward != self.session_reversed;
        if outgoing { along } else { 2 * leg - along }
    }

    /// Frame index and direction for a phase in `0..2n-2`.
    fn ping_pong_position(&self, phase: usize) -> (usize, bool) {
        let leg = self.animation.frame_count() - 1;
        let (along, outgoing) = if phase < leg {
            (phase, true)
        } else {
            (2 * leg - phase, false)
        };
        let index = if self.session_reversed { leg - along } else { along };
        let forward = outgoing != self.session_reversed;
        (index, forward)
    }

    /// Raise completion, then stop.
    fn complete(&mut self) -> AdvanceResult {
        debug!(mode = %self.mode, frame = ?self.current_frame, "animation complete");
        self.listeners.emit_complete();
        self.stop();
        AdvanceResult::Completed
    }
}
