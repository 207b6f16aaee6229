//! Built-in animation played when no file is given.

use flipbook_player::{AnimationConfig, InitialState, PlayMode};

const TRACK_WIDTH: usize = 12;

/// Name shown for the built-in animation.
pub const TITLE: &str = "bouncing ball";

/// A ball bouncing across a short track.
pub fn bouncing_ball() -> AnimationConfig {
    let frames = (0..TRACK_WIDTH)
        .map(|position| {
            let mut track = vec!['.'; TRACK_WIDTH];
            track[position] = 'o';
            let track: String = track.into_iter().collect();
            format!("+{bar}+\n|{track}|\n+{bar}+", bar = "-".repeat(TRACK_WIDTH))
        })
        .collect();

    AnimationConfig {
        frames,
        frame_rate: 15.0,
        mode: PlayMode::PingPongLooped,
        initial_state: InitialState::Playing,
        inactive_frame: Some(format!("[ {:^w$} ]", "inactive", w = TRACK_WIDTH - 2)),
        ..AnimationConfig::default()
    }
}
