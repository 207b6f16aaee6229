//! Flipbook Terminal Player
//!
//! Plays text-frame animations in the terminal featuring:
//! - JSON and plain-text animation descriptions
//! - All five play modes with live mode switching
//! - Interactive play / pause / stop / deactivate and scrubbing

mod args;
mod demo;
mod tui;

use anyhow::{Context, Result, anyhow, bail};
use flipbook_player::{PlaybackController, RngSource, load_file};
use std::fs::File;
use std::io;
use std::sync::Mutex;
use std::time::Instant;
use tracing::info;
use tracing_subscriber::EnvFilter;

use args::CliArgs;
use tui::{FrameView, SessionStats};

/// Log to stderr, or to `log_file` so logs don't draw over the TUI.
fn init_logging(log_file: Option<&str>) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create log file '{path}'"))?;
            builder.with_ansi(false).with_writer(Mutex::new(file)).init();
        }
        None => builder.with_writer(io::stderr).init(),
    }
    Ok(())
}

fn main() -> Result<()> {
    // Parse command-line arguments
    let args = CliArgs::parse();

    if args.show_help {
        CliArgs::print_help();
        return if args.file_path.is_none() {
            Ok(())
        } else {
            Err(anyhow!("invalid arguments"))
        };
    }

    init_logging(args.log_file.as_deref())?;

    // Load the description, or fall back to the built-in demo
    let (mut config, title) = match args.file_path.as_deref() {
        Some(path) => {
            let config =
                load_file(path).with_context(|| format!("failed to load animation '{path}'"))?;
            (config, path.to_string())
        }
        None => (demo::bouncing_ball(), demo::TITLE.to_string()),
    };
    args.apply(&mut config);
    config.validate()?;

    info!(
        title = %title,
        frames = config.frames.len(),
        mode = %config.mode,
        frame_rate = config.frame_rate,
        "starting playback"
    );

    let random = match args.seed {
        Some(seed) => RngSource::seeded(seed),
        None => RngSource::from_os_rng(),
    };
    let (animation, options) = config.into_parts();
    let mut player =
        PlaybackController::with_random(animation, Some(FrameView::default()), options, random);
    if !player.can_play() {
        bail!("'{title}' has no frames to play");
    }

    let stats = SessionStats::default();
    stats.attach(&mut player);

    let started = Instant::now();
    tui::run(&mut player, &title, &stats, args.duration)?;

    println!(
        "Played '{}' for {:.1}s: {} frames shown, {} completed runs",
        title,
        started.elapsed().as_secs_f32(),
        stats.frames_shown(),
        stats.completions()
    );

    Ok(())
}
