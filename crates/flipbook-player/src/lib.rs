//! Frame-Sequence Playback Controller
//!
//! This crate decides which frame of an image sequence should be visible as
//! time passes. The host feeds it ticks; it answers with frame changes and
//! completion notifications.
//!
//! # Features
//!
//! - Five play modes: one-shot, looped, ping-pong, looped ping-pong, random
//! - Play / pause / resume / stop / deactivate lifecycle
//! - Catch-up stepping: late ticks advance several frames without drift
//! - Synchronous frame-change and completion listeners
//! - JSON and plain-text animation descriptions
//!
//! # Example
//!
//! ```no_run
//! use flipbook_common::FrameTarget;
//! use flipbook_player::{PlaybackController, load_file};
//!
//! struct Stdout;
//!
//! impl FrameTarget<String> for Stdout {
//!     fn set_frame(&mut self, frame: Option<&String>) {
//!         println!("{}", frame.map(String::as_str).unwrap_or(""));
//!     }
//!     fn set_visible(&mut self, _visible: bool) {}
//! }
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let (animation, options) = load_file("spinner.flip")?.into_parts();
//! let mut player = PlaybackController::new(animation, Some(Stdout), options);
//! player.on_animation_complete(|| println!("done"));
//! player.play();
//!
//! let start = std::time::Instant::now();
//! while player.is_playing() {
//!     player.advance(start.elapsed().as_secs_f64());
//! }
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

// Error handling
mod error;
pub use error::{FlipbookError, Result};

// Core modules
pub mod animation;
pub mod config;
pub mod controller;
pub mod listeners;
pub mod loader;

// Re-export commonly used types
pub use animation::FrameAnimation;
pub use config::{AnimationConfig, ControllerOptions, DEFAULT_FRAME_RATE};
pub use controller::PlaybackController;
pub use listeners::{ListenerId, Listeners};
pub use loader::{AnimationLoader, SourceFormat, load_file, load_str};

pub use flipbook_common::{
    AdvanceResult, FramePlayer, FrameTarget, InitialState, PlayMode, PlaybackState, RandomSource,
    RngSource,
};
