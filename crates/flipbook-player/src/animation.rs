//! Frame sequence and timing data shared by every play session.

use flipbook_common::FRAME_RATE_EPSILON;

/// An ordered frame sequence plus the settings that shape its playback.
///
/// The controller treats this as read-only for the duration of a session.
/// Only the frame rate can be changed afterwards, and only between sessions
/// (see [`PlaybackController::set_frame_rate`](crate::PlaybackController::set_frame_rate)).
///
/// # Example
///
/// ```
/// use flipbook_player::FrameAnimation;
///
/// let walk = FrameAnimation::new(vec!["walk_0", "walk_1", "walk_2"], 12.0)
///     .with_start_offset(1)
///     .with_inactive_frame("idle");
/// assert_eq!(walk.frame_count(), 3);
/// assert_eq!(walk.resolve_offset(1), 1);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct FrameAnimation<F> {
    frames: Vec<F>,
    frame_rate: f64,
    start_offset: usize,
    reset_to_first_frame_on_complete: bool,
    allow_duplicate_random_frames: bool,
    inactive_frame: Option<F>,
}

impl<F> FrameAnimation<F> {
    /// Create an animation from frames and a signed frame rate.
    ///
    /// The sign of `frame_rate` selects the default direction (negative plays
    /// backwards); its magnitude is frames per second.
    pub fn new(frames: Vec<F>, frame_rate: f64) -> Self {
        Self {
            frames,
            frame_rate,
            start_offset: 0,
            reset_to_first_frame_on_complete: false,
            allow_duplicate_random_frames: false,
            inactive_frame: None,
        }
    }

    /// Offset (in frames) a plain `play()` starts from.
    pub fn with_start_offset(mut self, offset: usize) -> Self {
        self.start_offset = offset;
        self
    }

    /// One-shot sessions end on their first frame instead of their last.
    pub fn with_reset_on_complete(mut self, reset: bool) -> Self {
        self.reset_to_first_frame_on_complete = reset;
        self
    }

    /// Random sessions may show the same frame twice in a row.
    pub fn with_duplicate_random_frames(mut self, allow: bool) -> Self {
        self.allow_duplicate_random_frames = allow;
        self
    }

    /// Frame displayed while the controller is inactive.
    pub fn with_inactive_frame(mut self, frame: F) -> Self {
        self.inactive_frame = Some(frame);
        self
    }

    /// All frames in order.
    pub fn frames(&self) -> &[F] {
        &self.frames
    }

    /// Frame at `index`, if any.
    pub fn frame(&self, index: usize) -> Option<&F> {
        self.frames.get(index)
    }

    /// Number of frames.
    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// Whether there are no frames at all.
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Signed frame rate in frames per second.
    pub fn frame_rate(&self) -> f64 {
        self.frame_rate
    }

    pub(crate) fn set_frame_rate(&mut self, frame_rate: f64) {
        self.frame_rate = frame_rate;
    }

    /// Configured start offset.
    pub fn start_offset(&self) -> usize {
        self.start_offset
    }

    /// Whether one-shot sessions end on their first frame.
    pub fn reset_to_first_frame_on_complete(&self) -> bool {
        self.reset_to_first_frame_on_complete
    }

    /// Whether random sessions may repeat the previous frame.
    pub fn allow_duplicate_random_frames(&self) -> bool {
        self.allow_duplicate_random_frames
    }

    /// Frame shown while inactive.
    pub fn inactive_frame(&self) -> Option<&F> {
        self.inactive_frame.as_ref()
    }

    /// Seconds between frames, or `None` when the rate is too close to zero
    /// (or not finite) for playback to ever advance.
    pub fn frame_interval(&self) -> Option<f64> {
        let rate = self.frame_rate.abs();
        if rate.is_finite() && rate > FRAME_RATE_EPSILON {
            Some(1.0 / rate)
        } else {
            None
        }
    }

    /// Time one pass over every frame takes, 0 when playback cannot advance.
    pub fn duration_seconds(&self) -> f64 {
        self.frame_interval()
            .map_or(0.0, |interval| interval * self.frames.len() as f64)
    }

    /// `offset` when it addresses a frame, otherwise 0.
    pub fn resolve_offset(&self, offset: usize) -> usize {
        if offset < self.frames.len() {
            offset
        } else {
            0
        }
    }
}
