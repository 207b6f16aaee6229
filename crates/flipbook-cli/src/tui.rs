//! Ratatui front end for the flipbook player.
//!
//! The player writes frames into a [`FrameView`]; the draw loop reads it back
//! on every redraw. Keys go through [`FramePlayer`] so the loop does not care
//! which random source the controller was built with.

use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use flipbook_player::{FramePlayer, FrameTarget, PlaybackController, PlaybackState, RandomSource};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Style, Stylize},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph},
};
use std::cell::Cell;
use std::io::{self, stdout};
use std::rc::Rc;
use std::time::{Duration, Instant};
use tracing::{debug, info, trace};

/// Redraw and tick period (~60 Hz).
const TICK_PERIOD: Duration = Duration::from_millis(16);

/// Controller type driven by the terminal player.
pub type TerminalPlayer<R> = PlaybackController<String, FrameView, R>;

/// Display target holding the frame for the next redraw.
#[derive(Debug, Default)]
pub struct FrameView {
    text: Option<String>,
    visible: bool,
}

impl FrameView {
    /// Text to draw, `None` when hidden or nothing is shown.
    pub fn text(&self) -> Option<&str> {
        if self.visible {
            self.text.as_deref()
        } else {
            None
        }
    }
}

impl FrameTarget<String> for FrameView {
    fn set_frame(&mut self, frame: Option<&String>) {
        self.text = frame.cloned();
    }

    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }
}

/// Counters fed by the player's listeners.
#[derive(Debug, Clone, Default)]
pub struct SessionStats {
    frames: Rc<Cell<u64>>,
    completions: Rc<Cell<u64>>,
}

impl SessionStats {
    /// Register counting listeners on `player`.
    pub fn attach<R: RandomSource>(&self, player: &mut TerminalPlayer<R>) {
        let frames = Rc::clone(&self.frames);
        player.on_new_frame(move |_| frames.set(frames.get() + 1));
        let completions = Rc::clone(&self.completions);
        player.on_animation_complete(move || {
            completions.set(completions.get() + 1);
            info!("animation complete");
        });
    }

    /// Frame changes seen so far.
    pub fn frames_shown(&self) -> u64 {
        self.frames.get()
    }

    /// Natural completions seen so far.
    pub fn completions(&self) -> u64 {
        self.completions.get()
    }
}

/// What the loop should do after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// Keep running
    Continue,
    /// Leave the player
    Quit,
}

/// Apply a key pressed at loop time `now` to the player.
pub fn handle_key(player: &mut dyn FramePlayer, code: KeyCode, now: f64) -> Control {
    match code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => return Control::Quit,
        KeyCode::Char(' ') => player.toggle_pause_at(now),
        KeyCode::Char('p') => player.play_at(now),
        KeyCode::Char('s') => player.stop(),
        KeyCode::Char('d') => player.deactivate(),
        KeyCode::Char('r') => {
            let reversed = !player.is_reversed();
            player.set_reversed(reversed);
        }
        KeyCode::Char('m') => {
            let next = player.mode().next();
            if !player.set_mode(next) {
                debug!(mode = %next, "stop playback before changing mode");
            }
        }
        KeyCode::Char('v') => {
            let visible = !player.is_visible();
            player.set_visible(visible);
        }
        KeyCode::Left | KeyCode::Right => {
            if let Some(current) = player.current_frame() {
                let count = player.frame_count();
                let next = if code == KeyCode::Right {
                    (current + 1) % count
                } else {
                    (current + count - 1) % count
                };
                player.set_current_frame(next);
            }
        }
        _ => {}
    }
    Control::Continue
}

/// Restore terminal state (used by panic hook)
fn restore_terminal() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), LeaveAlternateScreen);
}

/// Run the player in the alternate screen until quit or `duration` elapses.
pub fn run<R: RandomSource>(
    player: &mut TerminalPlayer<R>,
    title: &str,
    stats: &SessionStats,
    duration: Option<f64>,
) -> io::Result<()> {
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;

    // Register panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        restore_terminal();
        original_hook(panic_info);
    }));

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    let result = event_loop(&mut terminal, player, title, stats, duration);

    let _ = std::panic::take_hook();
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    result
}

fn event_loop<R: RandomSource>(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    player: &mut TerminalPlayer<R>,
    title: &str,
    stats: &SessionStats,
    duration: Option<f64>,
) -> io::Result<()> {
    let start = Instant::now();
    let mut dirty = true;

    loop {
        let tick_start = Instant::now();

        while event::poll(Duration::ZERO)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    let now = start.elapsed().as_secs_f64();
                    if handle_key(player, key.code, now) == Control::Quit {
                        return Ok(());
                    }
                    dirty = true;
                }
                Event::Resize(..) => dirty = true,
                _ => {}
            }
        }

        let now = start.elapsed().as_secs_f64();
        if duration.is_some_and(|limit| now >= limit) {
            info!(elapsed = now, "duration reached");
            return Ok(());
        }
        if player.advance(now).changed_frame() {
            trace!(frame = ?player.current_frame(), "frame changed");
            dirty = true;
        }

        if dirty {
            terminal.draw(|f| draw_ui(f, player, title, stats))?;
            dirty = false;
        }

        let tick_time = tick_start.elapsed();
        if tick_time < TICK_PERIOD {
            std::thread::sleep(TICK_PERIOD - tick_time);
        }
    }
}

fn draw_ui<R: RandomSource>(
    f: &mut Frame,
    player: &TerminalPlayer<R>,
    title: &str,
    stats: &SessionStats,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(4)])
        .split(f.area());

    let frame_text = player.target().and_then(FrameView::text).unwrap_or_default();
    let frame = Paragraph::new(Text::from(frame_text.to_string()))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title(format!(" {title} ")));
    f.render_widget(frame, chunks[0]);

    let state_color = match player.state() {
        PlaybackState::Playing => Color::Green,
        PlaybackState::Paused => Color::Yellow,
        PlaybackState::Stopped => Color::Gray,
        PlaybackState::Inactive => Color::DarkGray,
    };
    let position = match player.current_frame() {
        Some(index) => format!("{}/{}", index + 1, player.frame_count()),
        None => format!("-/{}", player.frame_count()),
    };
    let direction = if player.is_forward() { ">>" } else { "<<" };

    let status = Line::from(vec![
        Span::styled(
            format!(" {:<8}", player.state().as_str()),
            Style::default().fg(state_color).bold(),
        ),
        Span::raw(format!(" mode {:<16}", player.mode().as_str())),
        Span::raw(format!(" frame {position:<8}")),
        Span::raw(format!(" {direction} {:.1} fps", player.frame_rate().abs())),
        Span::raw(format!(
            "   shown {}  completed {}",
            stats.frames_shown(),
            stats.completions()
        )),
    ]);
    let keys = Line::from(
        " [space] pause  [p] play  [s] stop  [d] deactivate  [r] reverse  [m] mode  [v] visible  [</>] scrub  [q] quit",
    )
    .fg(Color::DarkGray);

    let footer = Paragraph::new(vec![status, keys]).block(Block::default().borders(Borders::TOP));
    f.render_widget(footer, chunks[1]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use flipbook_player::{ControllerOptions, FrameAnimation, PlayMode, RngSource};

    fn player(mode: PlayMode) -> TerminalPlayer<RngSource> {
        let frames = vec!["one".to_string(), "two".to_string(), "three".to_string()];
        PlaybackController::with_random(
            FrameAnimation::new(frames, 10.0).with_inactive_frame("zzz".to_string()),
            Some(FrameView::default()),
            ControllerOptions::with_mode(mode),
            RngSource::seeded(9),
        )
    }

    fn shown(player: &TerminalPlayer<RngSource>) -> Option<&str> {
        player.target().and_then(FrameView::text)
    }

    #[test]
    fn keys_drive_the_lifecycle() {
        let mut player = player(PlayMode::Looped);
        assert_eq!(handle_key(&mut player, KeyCode::Char('p'), 0.0), Control::Continue);
        assert_eq!(player.state(), PlaybackState::Playing);

        handle_key(&mut player, KeyCode::Char(' '), 0.0);
        assert_eq!(player.state(), PlaybackState::Paused);

        handle_key(&mut player, KeyCode::Char('d'), 0.0);
        assert_eq!(player.state(), PlaybackState::Inactive);
        assert_eq!(shown(&player), Some("zzz"));

        assert_eq!(handle_key(&mut player, KeyCode::Esc, 0.0), Control::Quit);
    }

    #[test]
    fn pause_key_resumes_from_key_time() {
        let mut player = player(PlayMode::Looped);
        handle_key(&mut player, KeyCode::Char('p'), 0.0);
        player.advance(0.1);
        handle_key(&mut player, KeyCode::Char(' '), 0.15);
        assert_eq!(player.state(), PlaybackState::Paused);

        handle_key(&mut player, KeyCode::Char(' '), 30.0);
        assert_eq!(player.state(), PlaybackState::Playing);
        assert!((player.next_due_time() - 30.1).abs() < 1e-9);
        player.advance(30.15);
        assert_eq!(player.current_frame(), Some(2));
    }

    #[test]
    fn scrub_wraps_both_ways() {
        let mut player = player(PlayMode::Looped);
        handle_key(&mut player, KeyCode::Left, 0.0);
        assert_eq!(shown(&player), Some("three"));
        handle_key(&mut player, KeyCode::Right, 0.0);
        assert_eq!(shown(&player), Some("one"));
    }

    #[test]
    fn mode_key_only_works_when_not_playing() {
        let mut player = player(PlayMode::Looped);
        handle_key(&mut player, KeyCode::Char('m'), 0.0);
        assert_eq!(player.mode(), PlayMode::PingPong);

        player.play();
        handle_key(&mut player, KeyCode::Char('m'), 0.0);
        assert_eq!(player.mode(), PlayMode::PingPong);
    }

    #[test]
    fn visibility_and_direction_toggle() {
        let mut player = player(PlayMode::Looped);
        handle_key(&mut player, KeyCode::Char('v'), 0.0);
        assert_eq!(shown(&player), None);
        handle_key(&mut player, KeyCode::Char('v'), 0.0);
        assert_eq!(shown(&player), Some("one"));

        handle_key(&mut player, KeyCode::Char('r'), 0.0);
        handle_key(&mut player, KeyCode::Char('p'), 0.0);
        assert_eq!(shown(&player), Some("three"));
    }

    #[test]
    fn stats_count_listener_events() {
        let mut player = player(PlayMode::OneShot);
        let stats = SessionStats::default();
        stats.attach(&mut player);
        player.play();
        for now in [0.1, 0.25, 0.35] {
            player.advance(now);
        }
        assert_eq!(stats.completions(), 1);
        assert_eq!(stats.frames_shown(), 3);
    }
}
