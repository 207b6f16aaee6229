//! Shared fixtures for integration tests.

#![allow(dead_code)]

use flipbook_player::{
    ControllerOptions, FrameAnimation, FrameTarget, PlayMode, PlaybackController, RandomSource,
    RngSource,
};
use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;

/// Target that records every frame written to it.
#[derive(Debug, Default)]
pub struct RecordingTarget {
    pub frames: Vec<Option<char>>,
    pub visible: Option<bool>,
}

impl RecordingTarget {
    pub fn last(&self) -> Option<char> {
        self.frames.last().copied().flatten()
    }
}

impl FrameTarget<char> for RecordingTarget {
    fn set_frame(&mut self, frame: Option<&char>) {
        self.frames.push(frame.copied());
    }

    fn set_visible(&mut self, visible: bool) {
        self.visible = Some(visible);
    }
}

/// Random source replaying a fixed script, then repeating its last value.
#[derive(Debug)]
pub struct ScriptedRandom {
    values: VecDeque<usize>,
    last: usize,
    pub calls: usize,
}

impl ScriptedRandom {
    pub fn new(values: impl IntoIterator<Item = usize>) -> Self {
        Self {
            values: values.into_iter().collect(),
            last: 0,
            calls: 0,
        }
    }
}

impl RandomSource for ScriptedRandom {
    fn uniform_int(&mut self, _low: usize, _high: usize) -> usize {
        self.calls += 1;
        if let Some(value) = self.values.pop_front() {
            self.last = value;
        }
        self.last
    }
}

/// Listener counters shared with registered callbacks.
#[derive(Debug, Clone, Default)]
pub struct Events {
    pub frames: Rc<RefCell<Vec<usize>>>,
    pub completions: Rc<Cell<usize>>,
}

impl Events {
    pub fn attach<T, R>(&self, player: &mut PlaybackController<char, T, R>)
    where
        T: FrameTarget<char>,
        R: RandomSource,
    {
        let frames = Rc::clone(&self.frames);
        player.on_new_frame(move |index| frames.borrow_mut().push(index));
        let completions = Rc::clone(&self.completions);
        player.on_animation_complete(move || completions.set(completions.get() + 1));
    }

    pub fn frames(&self) -> Vec<usize> {
        self.frames.borrow().clone()
    }

    pub fn completions(&self) -> usize {
        self.completions.get()
    }
}

pub fn letters(count: usize) -> Vec<char> {
    ('A'..='Z').take(count).collect()
}

/// Stopped controller over `count` lettered frames at 1 fps.
pub fn player(
    count: usize,
    mode: PlayMode,
) -> PlaybackController<char, RecordingTarget, RngSource> {
    player_with(FrameAnimation::new(letters(count), 1.0), mode)
}

pub fn player_with(
    animation: FrameAnimation<char>,
    mode: PlayMode,
) -> PlaybackController<char, RecordingTarget, RngSource> {
    PlaybackController::with_random(
        animation,
        Some(RecordingTarget::default()),
        ControllerOptions::with_mode(mode),
        RngSource::seeded(42),
    )
}

/// Advance one whole interval per call for `ticks` ticks starting at `start`.
pub fn tick<T, R>(player: &mut PlaybackController<char, T, R>, start: f64, ticks: usize) -> f64
where
    T: FrameTarget<char>,
    R: RandomSource,
{
    let interval = player.frame_interval();
    let mut now = start;
    for _ in 0..ticks {
        now += interval;
        player.advance(now);
    }
    now
}
