//! Command-line argument parsing for the flipbook player.
//!
//! Flags override the matching fields of the loaded animation description;
//! anything not given on the command line keeps the file's value.

use flipbook_player::{AnimationConfig, PlayMode};
use std::env;

/// Parsed command-line arguments.
#[derive(Debug, Default)]
pub struct CliArgs {
    /// Animation description to play (JSON or text flipbook)
    pub file_path: Option<String>,
    /// Play mode override
    pub mode: Option<PlayMode>,
    /// Frame rate override in frames per second
    pub fps: Option<f64>,
    /// Start in reverse
    pub reversed: bool,
    /// Seed for random-mode frame picks
    pub seed: Option<u64>,
    /// Quit after this many seconds
    pub duration: Option<f64>,
    /// Write logs here instead of stderr
    pub log_file: Option<String>,
    /// Whether help was requested
    pub show_help: bool,
}

impl CliArgs {
    /// Parse arguments from command line.
    pub fn parse() -> Self {
        Self::parse_from(env::args().skip(1))
    }

    /// Parse arguments from any iterator (without the program name).
    pub fn parse_from(iter: impl IntoIterator<Item = String>) -> Self {
        let mut args = Self::default();
        let mut iter = iter.into_iter();

        while let Some(arg) = iter.next() {
            let (flag, inline) = match arg.split_once('=') {
                Some((flag, value)) if arg.starts_with("--") => {
                    (flag.to_string(), Some(value.to_string()))
                }
                _ => (arg.clone(), None),
            };

            match flag.as_str() {
                "--help" | "-h" => {
                    args.show_help = true;
                }
                "--reverse" => {
                    args.reversed = true;
                }
                "--mode" => {
                    if let Some(value) = take_value(&flag, inline, &mut iter, &mut args) {
                        match value.parse() {
                            Ok(mode) => args.mode = Some(mode),
                            Err(e) => {
                                eprintln!("{e}");
                                args.show_help = true;
                            }
                        }
                    }
                }
                "--fps" => {
                    if let Some(value) = take_value(&flag, inline, &mut iter, &mut args) {
                        match value.parse::<f64>() {
                            Ok(fps) if fps.is_finite() => args.fps = Some(fps),
                            _ => {
                                eprintln!("Invalid frame rate: {value}");
                                args.show_help = true;
                            }
                        }
                    }
                }
                "--seed" => {
                    if let Some(value) = take_value(&flag, inline, &mut iter, &mut args) {
                        match value.parse() {
                            Ok(seed) => args.seed = Some(seed),
                            Err(_) => {
                                eprintln!("Invalid seed: {value}");
                                args.show_help = true;
                            }
                        }
                    }
                }
                "--duration" => {
                    if let Some(value) = take_value(&flag, inline, &mut iter, &mut args) {
                        match value.parse::<f64>() {
                            Ok(secs) if secs >= 0.0 => args.duration = Some(secs),
                            _ => {
                                eprintln!("Invalid duration: {value}");
                                args.show_help = true;
                            }
                        }
                    }
                }
                "--log-file" => {
                    args.log_file = take_value(&flag, inline, &mut iter, &mut args);
                }
                _ if arg.starts_with('-') => {
                    eprintln!("Unknown flag: {}", arg);
                    args.show_help = true;
                }
                _ => {
                    args.file_path = Some(arg);
                }
            }
        }

        args
    }

    /// Apply command-line overrides to a loaded description.
    pub fn apply(&self, config: &mut AnimationConfig) {
        if let Some(mode) = self.mode {
            config.mode = mode;
        }
        if let Some(fps) = self.fps {
            config.frame_rate = fps;
        }
        if self.reversed {
            config.reversed = Some(true);
        }
    }

    /// Print help text to stderr.
    pub fn print_help() {
        eprint!("{HELP}");
    }
}

const HELP: &str = "Usage:\n  flipbook [options] [animation.json|animation.flip]\n\n\
Options:\n\
\x20 --mode <mode>        one_shot, looped, ping_pong, ping_pong_looped, random\n\
\x20 --fps <rate>         Frame rate override (negative plays backwards)\n\
\x20 --reverse            Start from the last frame\n\
\x20 --seed <n>           Seed random-mode frame picks\n\
\x20 --duration <secs>    Quit after this many seconds\n\
\x20 --log-file <path>    Write logs to a file (RUST_LOG sets the level)\n\
\x20 -h, --help           Show this help\n\n\
Keys:\n\
\x20 space  pause/resume    p  play         s  stop\n\
\x20 d      deactivate      r  reverse      m  next mode\n\
\x20 v      visibility      <- ->  scrub    q  quit\n\n\
Without a file the built-in bouncing ball demo is played.\n";

fn take_value(
    flag: &str,
    inline: Option<String>,
    iter: &mut impl Iterator<Item = String>,
    args: &mut CliArgs,
) -> Option<String> {
    let value = inline.or_else(|| iter.next());
    if value.is_none() {
        eprintln!("{flag} requires an argument");
        args.show_help = true;
    }
    value
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> CliArgs {
        CliArgs::parse_from(args.iter().map(|s| s.to_string()))
    }

    #[test]
    fn parses_flags_and_file() {
        let args = parse(&["--mode", "ping-pong", "--fps=-6", "--seed", "7", "walk.json"]);
        assert_eq!(args.mode, Some(PlayMode::PingPong));
        assert_eq!(args.fps, Some(-6.0));
        assert_eq!(args.seed, Some(7));
        assert_eq!(args.file_path.as_deref(), Some("walk.json"));
        assert!(!args.show_help);
    }

    #[test]
    fn bad_values_request_help() {
        assert!(parse(&["--mode", "sideways"]).show_help);
        assert!(parse(&["--fps", "fast"]).show_help);
        assert!(parse(&["--duration"]).show_help);
        assert!(parse(&["--bogus"]).show_help);
    }

    #[test]
    fn help_names_the_builtin_demo() {
        assert!(HELP.contains(crate::demo::TITLE));
        assert!(HELP.contains("--log-file"));
    }

    #[test]
    fn overrides_apply_to_config() {
        let args = parse(&["--mode=random", "--fps", "3", "--reverse"]);
        let mut config = AnimationConfig::default();
        args.apply(&mut config);
        assert_eq!(config.mode, PlayMode::Random);
        assert_eq!(config.frame_rate, 3.0);
        assert_eq!(config.reversed, Some(true));
    }
}
