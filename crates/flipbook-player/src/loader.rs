//! Animation Loader Domain
//!
//! Reads animation descriptions from disk or memory, auto-detecting between
//! JSON documents and plain-text flipbooks.
//!
//! A text flipbook is an optional `key = value` header followed by frames,
//! each introduced by a line containing only `---`:
//!
//! ```text
//! fps = 8
//! mode = ping_pong
//! ---
//! (o  )
//! ---
//! ( o )
//! ---
//! (  o)
//! ```

use crate::config::AnimationConfig;
use crate::{FlipbookError, Result};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Line separating header and frames in a text flipbook.
pub const FRAME_SEPARATOR: &str = "---";

/// Description formats the loader understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    /// JSON object matching [`AnimationConfig`].
    Json,
    /// `---`-separated text frames.
    Text,
}

/// Loads animation descriptions
pub struct AnimationLoader;

impl AnimationLoader {
    /// Load a description from disk, auto-detecting its format
    pub fn load(path: impl AsRef<Path>) -> Result<AnimationConfig> {
        let path = path.as_ref();
        let data = fs::read_to_string(path)?;
        debug!(path = %path.display(), bytes = data.len(), "loading animation");
        Self::load_from_str(&data)
    }

    /// Load a description from memory, auto-detecting its format
    pub fn load_from_str(data: &str) -> Result<AnimationConfig> {
        let config = match Self::detect_format(data) {
            SourceFormat::Json => serde_json::from_str::<AnimationConfig>(data)?,
            SourceFormat::Text => parse_text(data)?,
        };
        config.validate()?;
        Ok(config)
    }

    /// JSON when the first non-blank character opens an object
    pub fn detect_format(data: &str) -> SourceFormat {
        if data.trim_start().starts_with('{') {
            SourceFormat::Json
        } else {
            SourceFormat::Text
        }
    }
}

/// Convenience function to load a description from disk
pub fn load_file(path: impl AsRef<Path>) -> Result<AnimationConfig> {
    AnimationLoader::load(path)
}

/// Convenience function to load a description from an in-memory string
pub fn load_str(data: &str) -> Result<AnimationConfig> {
    AnimationLoader::load_from_str(data)
}

fn parse_text(data: &str) -> Result<AnimationConfig> {
    let mut config = AnimationConfig::default();
    let mut lines = data.lines().enumerate();
    let mut found_separator = false;

    for (index, line) in lines.by_ref() {
        let trimmed = line.trim();
        if trimmed == FRAME_SEPARATOR {
            found_separator = true;
            break;
        }
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        apply_header_line(&mut config, index + 1, trimmed)?;
    }

    if !found_separator {
        return Err(FlipbookError::parse(
            data.lines().count().max(1),
            format!("missing '{FRAME_SEPARATOR}' frame separator"),
        ));
    }

    let mut current: Vec<&str> = Vec::new();
    for (_, line) in lines {
        if line.trim_end() == FRAME_SEPARATOR {
            config.frames.push(current.join("\n"));
            current.clear();
        } else {
            current.push(line);
        }
    }
    // A trailing separator leaves nothing behind; anything else is a frame.
    if !current.is_empty() {
        config.frames.push(current.join("\n"));
    }

    Ok(config)
}

fn apply_header_line(config: &mut AnimationConfig, line: usize, text: &str) -> Result<()> {
    let Some((key, value)) = text.split_once(['=', ':']) else {
        return Err(FlipbookError::parse(line, format!("expected 'key = value', got '{text}'")));
    };
    let key = key.trim().to_ascii_lowercase();
    let value = value.trim();

    match key.as_str() {
        "fps" | "frame_rate" => config.frame_rate = parse_value(line, &key, value)?,
        "mode" => config.mode = value.parse()?,
        "initial_state" | "state" => config.initial_state = value.parse()?,
        "start_offset" | "offset" => config.start_offset = parse_value(line, &key, value)?,
        "reversed" => config.reversed = Some(parse_value(line, &key, value)?),
        "visible" => config.visible = parse_value(line, &key, value)?,
        "reset_on_complete" | "reset_to_first_frame_on_complete" => {
            config.reset_to_first_frame_on_complete = parse_value(line, &key, value)?;
        }
        "allow_duplicates" | "allow_duplicate_random_frames" => {
            config.allow_duplicate_random_frames = parse_value(line, &key, value)?;
        }
        "inactive" | "inactive_frame" => config.inactive_frame = Some(value.to_string()),
        _ => return Err(FlipbookError::parse(line, format!("unknown key '{key}'"))),
    }
    Ok(())
}

fn parse_value<T: std::str::FromStr>(line: usize, key: &str, value: &str) -> Result<T> {
    value
        .parse()
        .map_err(|_| FlipbookError::parse(line, format!("invalid value for '{key}': '{value}'")))
}
