//! Lifecycle transitions, inert controllers and listener management.

mod common;

use common::{Events, RecordingTarget, letters, player, player_with, tick};
use flipbook_player::{
    AdvanceResult, ControllerOptions, FrameAnimation, FramePlayer, FrameTarget, InitialState,
    PlayMode, PlaybackController, PlaybackState, RandomSource, RngSource, load_str,
};

type Snapshot = (Option<usize>, PlayMode, PlaybackState);

fn snapshot<T, R>(player: &PlaybackController<char, T, R>) -> Snapshot
where
    T: FrameTarget<char>,
    R: RandomSource,
{
    (player.current_frame(), player.mode(), player.state())
}

#[test]
fn play_while_playing_changes_nothing() {
    let mut player = player(5, PlayMode::Looped);
    player.play();
    player.advance(1.0);
    player.advance(2.0);
    let before = snapshot(&player);
    let due = player.next_due_time();

    player.play();
    player.play_from(4);

    assert_eq!(snapshot(&player), before);
    assert_eq!(player.next_due_time(), due);
}

#[test]
fn pause_and_resume_continue_from_the_same_frame() {
    let mut player = player(5, PlayMode::OneShot);
    let events = Events::default();
    events.attach(&mut player);
    player.play();
    player.advance(1.0);

    player.pause();
    assert_eq!(player.state(), PlaybackState::Paused);
    assert_eq!(player.advance(5.0), AdvanceResult::Idle);

    player.resume();
    assert_eq!(player.state(), PlaybackState::Playing);
    assert_eq!(player.mode(), PlayMode::OneShot);
    assert_eq!(player.next_due_time(), 6.0);
    assert_eq!(player.advance(5.9), AdvanceResult::Idle);
    assert_eq!(player.advance(6.0), AdvanceResult::FrameAdvanced);

    assert_eq!(events.frames(), vec![0, 1, 2]);
}

#[test]
fn play_at_after_idle_gap_shows_every_frame() {
    let mut player = player(5, PlayMode::OneShot);
    let events = Events::default();
    events.attach(&mut player);
    player.advance(1.0);

    // No ticks while stopped; the host restarts at t=50.
    player.play_at(50.0);
    assert_eq!(player.clock(), 50.0);
    assert_eq!(player.next_due_time(), 51.0);

    tick(&mut player, 50.0, 4);
    assert_eq!(player.current_frame(), Some(4));
    assert_eq!(player.state(), PlaybackState::Playing);
    assert_eq!(player.advance(55.0), AdvanceResult::Completed);

    assert_eq!(events.frames(), vec![0, 1, 2, 3, 4]);
    assert_eq!(events.completions(), 1);
}

#[test]
fn resume_at_after_idle_pause_does_not_skip() {
    let mut player = player(5, PlayMode::OneShot);
    let events = Events::default();
    events.attach(&mut player);
    player.play_at(0.0);
    player.advance(1.0);
    player.pause();

    player.resume_at(100.0);
    assert_eq!(player.next_due_time(), 101.0);
    assert_eq!(player.advance(100.5), AdvanceResult::Idle);
    assert_eq!(player.advance(101.0), AdvanceResult::FrameAdvanced);

    assert_eq!(events.frames(), vec![0, 1, 2]);
    assert_eq!(events.completions(), 0);
}

#[test]
fn transition_times_never_move_the_clock_back() {
    let mut player = player(3, PlayMode::Looped);
    player.advance(10.0);
    player.play_from_at(1, 3.0);
    assert_eq!(player.clock(), 10.0);
    assert_eq!(player.next_due_time(), 11.0);
    assert_eq!(player.current_frame(), Some(1));
}

#[test]
fn toggle_pause_at_reschedules_through_the_trait() {
    let mut player = player(4, PlayMode::Looped);
    let driver: &mut dyn FramePlayer = &mut player;
    driver.play_at(2.0);
    driver.toggle_pause_at(2.5);
    assert_eq!(driver.state(), PlaybackState::Paused);

    driver.toggle_pause_at(40.0);
    assert_eq!(driver.state(), PlaybackState::Playing);
    assert_eq!(driver.advance(40.5), AdvanceResult::Idle);
    assert_eq!(driver.advance(41.0), AdvanceResult::FrameAdvanced);
    assert_eq!(driver.current_frame(), Some(1));
}

#[test]
fn initial_playing_writes_the_start_frame_once() {
    let options = ControllerOptions {
        initial_state: InitialState::Playing,
        ..ControllerOptions::with_mode(PlayMode::Looped)
    };
    let mut player = PlaybackController::with_random(
        FrameAnimation::new(letters(3), 1.0),
        Some(RecordingTarget::default()),
        options,
        RngSource::seeded(1),
    );
    assert_eq!(player.state(), PlaybackState::Playing);
    assert_eq!(player.target().unwrap().frames, vec![Some('A')]);

    player.target_mut().unwrap().frames.clear();
    player.advance(1.0);
    assert_eq!(player.target().unwrap().frames, vec![Some('B')]);
}

#[test]
fn initial_playing_single_frame_still_shows_it() {
    let options = ControllerOptions {
        initial_state: InitialState::Playing,
        ..ControllerOptions::default()
    };
    let player = PlaybackController::with_random(
        FrameAnimation::new(letters(1), 1.0),
        Some(RecordingTarget::default()),
        options,
        RngSource::seeded(1),
    );
    assert_eq!(player.state(), PlaybackState::Stopped);
    assert_eq!(player.target().unwrap().frames, vec![Some('A')]);
}

#[test]
fn pause_and_resume_are_ignored_in_other_states() {
    let mut player = player(3, PlayMode::Looped);
    player.resume();
    assert_eq!(player.state(), PlaybackState::Stopped);
    player.pause();
    assert_eq!(player.state(), PlaybackState::Stopped);

    player.play();
    player.resume();
    assert_eq!(player.state(), PlaybackState::Playing);
}

#[test]
fn stop_then_play_restarts_from_the_beginning() {
    let mut player = player(4, PlayMode::Looped);
    player.play();
    tick(&mut player, 0.0, 2);
    assert_eq!(player.current_frame(), Some(2));

    player.stop();
    assert_eq!(player.state(), PlaybackState::Stopped);
    assert_eq!(player.current_frame(), Some(2));

    player.play();
    assert_eq!(player.current_frame(), Some(0));
}

#[test]
fn deactivate_from_every_active_state() {
    let setups: [fn(&mut PlaybackController<char, RecordingTarget>); 3] = [
        |_| {},
        |p| p.play(),
        |p| {
            p.play();
            p.pause();
        },
    ];

    for setup in setups {
        let animation = FrameAnimation::new(letters(3), 1.0).with_inactive_frame('_');
        let mut player = player_with(animation, PlayMode::Looped);
        setup(&mut player);

        player.deactivate();
        assert_eq!(player.state(), PlaybackState::Inactive);
        assert_eq!(player.current_frame(), None);
        assert_eq!(player.target().unwrap().frames.last(), Some(&Some('_')));

        let writes = player.target().unwrap().frames.len();
        player.deactivate();
        assert_eq!(player.state(), PlaybackState::Inactive);
        assert_eq!(player.target().unwrap().frames.len(), writes);
    }
}

#[test]
fn deactivate_without_inactive_frame_clears_the_display() {
    let mut player = player(3, PlayMode::Looped);
    player.play();
    player.deactivate();
    assert_eq!(player.target().unwrap().frames.last(), Some(&None));
    assert_eq!(player.advance(10.0), AdvanceResult::Idle);
}

#[test]
fn only_play_leaves_inactive() {
    let mut player = player(3, PlayMode::Looped);
    player.deactivate();

    player.resume();
    player.stop();
    assert_eq!(player.state(), PlaybackState::Inactive);

    player.play();
    assert_eq!(player.state(), PlaybackState::Playing);
    assert_eq!(player.current_frame(), Some(0));
}

#[test]
fn empty_animation_is_inert_and_shows_inactive_frame() {
    let animation = FrameAnimation::new(Vec::new(), 10.0).with_inactive_frame('?');
    let mut player = player_with(animation, PlayMode::Looped);

    assert!(!player.can_play());
    assert_eq!(player.state(), PlaybackState::Inactive);
    assert_eq!(player.target().unwrap().frames, vec![Some('?')]);

    player.play();
    assert_eq!(player.state(), PlaybackState::Inactive);
    assert_eq!(player.advance(5.0), AdvanceResult::Idle);
}

#[test]
fn empty_animation_without_inactive_frame_shows_nothing() {
    let player = player_with(FrameAnimation::new(Vec::new(), 10.0), PlayMode::OneShot);
    assert_eq!(player.target().unwrap().frames, vec![None]);
    assert_eq!(player.current_frame(), None);
}

#[test]
fn missing_target_disables_the_controller() {
    let mut player = PlaybackController::<char, RecordingTarget>::with_random(
        FrameAnimation::new(letters(3), 10.0),
        None,
        ControllerOptions::with_mode(PlayMode::Looped),
        RngSource::seeded(1),
    );
    assert!(!player.can_play());

    player.play();
    assert_eq!(player.state(), PlaybackState::Inactive);
    assert_eq!(player.current_frame(), None);
}

#[test]
fn scrub_notifies_listeners() {
    let mut player = player(4, PlayMode::Looped);
    let events = Events::default();
    events.attach(&mut player);

    assert!(player.set_current_frame(3));
    assert!(!player.set_current_frame(4));
    assert_eq!(events.frames(), vec![3]);
    assert_eq!(player.target().unwrap().last(), Some('D'));
}

#[test]
fn removed_listeners_are_not_called() {
    let mut player = player(4, PlayMode::Looped);
    let events = Events::default();
    events.attach(&mut player);
    let extra = player.on_new_frame(|_| panic!("removed listener called"));
    assert_eq!(player.listener_count(), 3);

    assert!(player.remove_listener(extra));
    assert!(!player.remove_listener(extra));
    player.set_current_frame(1);
    assert_eq!(events.frames(), vec![1]);

    player.clear_listeners();
    player.set_current_frame(2);
    assert_eq!(events.frames(), vec![1]);
    assert_eq!(player.listener_count(), 0);
}

#[test]
fn driven_through_the_player_trait() {
    let mut player = player(3, PlayMode::Looped);
    let host: &mut dyn FramePlayer = &mut player;

    host.play();
    assert!(host.is_playing());
    assert!(!host.set_mode(PlayMode::Random));
    assert_eq!(host.advance(1.0), AdvanceResult::FrameAdvanced);
    assert_eq!(host.current_frame(), Some(1));

    host.toggle_pause();
    assert_eq!(host.state(), PlaybackState::Paused);
    host.toggle_pause();
    assert_eq!(host.state(), PlaybackState::Playing);

    host.deactivate();
    assert_eq!(host.current_frame(), None);
    assert_eq!(host.frame_count(), 3);
}

#[test]
fn controller_from_text_description() {
    let text = "fps = 2\nmode = one_shot\nstate = playing\n---\n1\n---\n2\n---\n3";
    let config = load_str(text).unwrap();
    let (animation, options) = config.into_parts();
    let mut player = PlaybackController::with_random(
        animation,
        Some(Lines::default()),
        options,
        RngSource::seeded(3),
    );
    assert_eq!(player.state(), PlaybackState::Playing);
    assert_eq!(player.frame_interval(), 0.5);

    player.advance(0.5);
    player.advance(1.0);
    assert_eq!(player.advance(1.5), AdvanceResult::Completed);
    assert_eq!(player.current_frame_id().map(String::as_str), Some("3"));
}

#[derive(Default)]
struct Lines(Vec<String>);

impl FrameTarget<String> for Lines {
    fn set_frame(&mut self, frame: Option<&String>) {
        self.0.push(frame.cloned().unwrap_or_default());
    }

    fn set_visible(&mut self, _visible: bool) {}
}
