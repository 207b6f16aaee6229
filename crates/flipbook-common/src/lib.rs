//! Common traits and types for flipbook frame-sequence players.
//!
//! This crate provides the shared abstractions a playback controller and its
//! host agree on: the playback state machine's states, the play modes, the
//! display and random-number seams, and an object-safe player trait.
//!
//! # Traits
//!
//! - [`FramePlayer`] - Object-safe control surface for any frame player
//! - [`FrameTarget`] - Display surface that shows the selected frame
//! - [`RandomSource`] - Uniform integer source used by random playback
//!
//! # Example
//!
//! ```ignore
//! use flipbook_common::{FramePlayer, PlaybackState};
//!
//! fn run(player: &mut dyn FramePlayer, ticks: &[f64]) {
//!     player.play();
//!     for &now in ticks {
//!         player.advance(now);
//!         if player.state() != PlaybackState::Playing {
//!             break;
//!         }
//!     }
//! }
//! ```

#![warn(missing_docs)]

mod player;
mod random;
mod state;
mod target;

pub use player::FramePlayer;
pub use random::{RandomSource, RngSource};
pub use state::{AdvanceResult, InitialState, ParseEnumError, PlayMode, PlaybackState};
pub use target::FrameTarget;

// ============================================================================
// Common Constants
// ============================================================================

/// Frame rates with a magnitude at or below this value never start playback.
pub const FRAME_RATE_EPSILON: f64 = 1e-6;

/// Maximum re-rolls random playback makes to avoid repeating the previous frame.
pub const MAX_RANDOM_ATTEMPTS: usize = 10;

/// Minimum number of frames a sequence needs before it can be played.
pub const MIN_PLAYABLE_FRAMES: usize = 2;
