//! Frame Playback Controller Domain
//!
//! The controller owns the playback state machine: which frame is shown,
//! which way the sequence is travelling, and whether a session is running.
//! Its behaviour is split across:
//!
//! - `lifecycle` - play / pause / resume / stop / deactivate transitions
//! - `advance` - time accumulation and the per-mode frame stepping
//! - `accessors` - property getters and forgiving setters

mod accessors;
mod advance;
mod lifecycle;

use crate::animation::FrameAnimation;
use crate::config::ControllerOptions;
use crate::listeners::{ListenerId, Listeners};
use flipbook_common::{
    AdvanceResult, FramePlayer, FrameTarget, InitialState, PlayMode, PlaybackState, RandomSource,
    RngSource,
};
use std::fmt;
use tracing::warn;

/// Tick-driven frame-sequence player.
///
/// The host calls [`advance`](Self::advance) once per tick with a
/// non-decreasing time in seconds. The controller converts elapsed time into
/// frame steps, writes the selected frame to its [`FrameTarget`] and notifies
/// registered listeners synchronously.
///
/// A controller built without frames or without a target is inert: it shows
/// the inactive frame (when it has a target to show it on) and ignores every
/// request to play.
///
/// # Example
///
/// ```
/// use flipbook_common::{FrameTarget, PlayMode, PlaybackState};
/// use flipbook_player::{ControllerOptions, FrameAnimation, PlaybackController};
///
/// #[derive(Default)]
/// struct Sprite(Option<char>);
///
/// impl FrameTarget<char> for Sprite {
///     fn set_frame(&mut self, frame: Option<&char>) {
///         self.0 = frame.copied();
///     }
///     fn set_visible(&mut self, _visible: bool) {}
/// }
///
/// let animation = FrameAnimation::new(vec!['a', 'b', 'c'], 1.0);
/// let mut player = PlaybackController::new(
///     animation,
///     Some(Sprite::default()),
///     ControllerOptions::with_mode(PlayMode::OneShot),
/// );
///
/// player.play();
/// player.advance(1.0);
/// player.advance(2.0);
/// assert_eq!(player.target().and_then(|s| s.0), Some('c'));
///
/// player.advance(3.0);
/// assert_eq!(player.state(), PlaybackState::Stopped);
/// ```
pub struct PlaybackController<F, T, R = RngSource> {
    animation: FrameAnimation<F>,
    target: Option<T>,
    random: R,
    listeners: Listeners,
    mode: PlayMode,
    state: PlaybackState,
    current_frame: Option<usize>,
    /// Direction of travel in the running session.
    forward: bool,
    /// Default direction applied by the next `play()`.
    reversed: bool,
    /// `reversed` as captured when the running session started.
    session_reversed: bool,
    frame_interval: f64,
    next_due: f64,
    /// Latest time seen by `advance`.
    clock: f64,
    visible: bool,
    can_play: bool,
}

impl<F, T: FrameTarget<F>> PlaybackController<F, T, RngSource> {
    /// Create a controller that draws random frames from an OS-seeded RNG.
    pub fn new(
        animation: FrameAnimation<F>,
        target: Option<T>,
        options: ControllerOptions,
    ) -> Self {
        Self::with_random(animation, target, options, RngSource::from_os_rng())
    }
}

impl<F, T: FrameTarget<F>, R: RandomSource> PlaybackController<F, T, R> {
    /// Create a controller with an explicit random source.
    pub fn with_random(
        animation: FrameAnimation<F>,
        target: Option<T>,
        options: ControllerOptions,
        random: R,
    ) -> Self {
        let reversed = options
            .reversed
            .unwrap_or(animation.frame_rate() < 0.0);

        let mut controller = Self {
            animation,
            target,
            random,
            listeners: Listeners::new(),
            mode: options.mode,
            state: PlaybackState::Stopped,
            current_frame: None,
            forward: !reversed,
            reversed,
            session_reversed: reversed,
            frame_interval: 0.0,
            next_due: 0.0,
            clock: 0.0,
            visible: options.visible,
            can_play: true,
        };

        if let Some(target) = controller.target.as_mut() {
            target.set_visible(options.visible);
        }

        if controller.animation.is_empty() || controller.target.is_none() {
            warn!(
                frames = controller.animation.frame_count(),
                has_target = controller.target.is_some(),
                "frame animation has nothing to play; controller disabled"
            );
            controller.can_play = false;
            controller.state = PlaybackState::Inactive;
            controller.show_inactive_frame();
            return controller;
        }

        match options.initial_state {
            InitialState::Stopped => controller.show_start_frame(),
            InitialState::Playing => {
                controller.play();
                // `play` shows nothing when the sequence is too short to animate.
                if controller.current_frame.is_none() {
                    controller.show_start_frame();
                }
            }
            InitialState::Inactive => {
                controller.state = PlaybackState::Inactive;
                controller.show_inactive_frame();
            }
        }
        controller
    }

    /// Subscribe to frame changes. The callback receives the new frame index.
    pub fn on_new_frame(&mut self, callback: impl FnMut(usize) + 'static) -> ListenerId {
        self.listeners.add_frame_listener(callback)
    }

    /// Subscribe to natural completion of one-shot and ping-pong sessions.
    pub fn on_animation_complete(&mut self, callback: impl FnMut() + 'static) -> ListenerId {
        self.listeners.add_complete_listener(callback)
    }

    /// Unregister a listener. Returns `false` if it was not registered.
    pub fn remove_listener(&mut self, id: ListenerId) -> bool {
        self.listeners.remove(id)
    }

    /// Unregister every listener.
    pub fn clear_listeners(&mut self) {
        self.listeners.clear();
    }

    /// Number of registered listeners.
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Display target, if one was supplied.
    pub fn target(&self) -> Option<&T> {
        self.target.as_ref()
    }

    /// Mutable display target, if one was supplied.
    pub fn target_mut(&mut self) -> Option<&mut T> {
        self.target.as_mut()
    }

    /// Release the frame sequence and target.
    pub fn into_parts(self) -> (FrameAnimation<F>, Option<T>) {
        (self.animation, self.target)
    }

    /// Show the frame a session in the current default direction starts on.
    fn show_start_frame(&mut self) {
        let offset = self.animation.resolve_offset(self.animation.start_offset());
        let index = self.start_index(offset, !self.reversed);
        self.display(index);
    }

    /// Move the clock forward to `now`; earlier times leave it unchanged.
    fn sync_clock(&mut self, now: f64) {
        if now > self.clock {
            self.clock = now;
        }
    }

    /// Frame `offset` steps in from the end a session enters from.
    fn start_index(&self, offset: usize, forward: bool) -> usize {
        if forward {
            offset
        } else {
            self.animation.frame_count().saturating_sub(1 + offset)
        }
    }

    /// Show `index` and notify frame listeners.
    fn display(&mut self, index: usize) {
        self.current_frame = Some(index);
        if let Some(target) = self.target.as_mut() {
            target.set_frame(self.animation.frame(index));
        }
        self.listeners.emit_new_frame(index);
    }

    fn show_inactive_frame(&mut self) {
        self.current_frame = None;
        if let Some(target) = self.target.as_mut() {
            target.set_frame(self.animation.inactive_frame());
        }
    }
}

impl<F, T: FrameTarget<F>, R: RandomSource> FramePlayer for PlaybackController<F, T, R> {
    fn play(&mut self) {
        PlaybackController::play(self);
    }

    fn play_from(&mut self, offset: usize) {
        PlaybackController::play_from(self, offset);
    }

    fn play_at(&mut self, now: f64) {
        PlaybackController::play_at(self, now);
    }

    fn play_from_at(&mut self, offset: usize, now: f64) {
        PlaybackController::play_from_at(self, offset, now);
    }

    fn pause(&mut self) {
        PlaybackController::pause(self);
    }

    fn resume(&mut self) {
        PlaybackController::resume(self);
    }

    fn resume_at(&mut self, now: f64) {
        PlaybackController::resume_at(self, now);
    }

    fn stop(&mut self) {
        PlaybackController::stop(self);
    }

    fn deactivate(&mut self) {
        PlaybackController::deactivate(self);
    }

    fn advance(&mut self, now: f64) -> AdvanceResult {
        PlaybackController::advance(self, now)
    }

    fn state(&self) -> PlaybackState {
        self.state
    }

    fn mode(&self) -> PlayMode {
        self.mode
    }

    fn set_mode(&mut self, mode: PlayMode) -> bool {
        PlaybackController::set_mode(self, mode)
    }

    fn current_frame(&self) -> Option<usize> {
        self.current_frame
    }

    fn set_current_frame(&mut self, index: usize) -> bool {
        PlaybackController::set_current_frame(self, index)
    }

    fn frame_count(&self) -> usize {
        self.animation.frame_count()
    }

    fn is_reversed(&self) -> bool {
        self.reversed
    }

    fn set_reversed(&mut self, reversed: bool) {
        PlaybackController::set_reversed(self, reversed);
    }

    fn is_visible(&self) -> bool {
        self.visible
    }

    fn set_visible(&mut self, visible: bool) {
        PlaybackController::set_visible(self, visible);
    }
}

impl<F, T, R> fmt::Debug for PlaybackController<F, T, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PlaybackController")
            .field("frames", &self.animation.frame_count())
            .field("mode", &self.mode)
            .field("state", &self.state)
            .field("current_frame", &self.current_frame)
            .field("forward", &self.forward)
            .field("reversed", &self.reversed)
            .field("next_due", &self.next_due)
            .field("can_play", &self.can_play)
            .field("listeners", &self.listeners)
            .finish()
    }
}
