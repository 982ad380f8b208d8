//! Command-line interface definition using clap.
//!
//! This module defines:
//! - [`Args`] - CLI argument structure (for use with clap)
//! - [`Mode`] - Analysis mode (chat transcript or media bundle)
//! - [`OutputFormat`] - Output format options
//!
//! # Using Mode and OutputFormat in Libraries
//!
//! These types are designed to be usable outside of CLI context:
//!
//! ```rust
//! use chatstats::cli::{Mode, OutputFormat};
//!
//! let mode = Mode::Chat;
//! let format = OutputFormat::Json;
//! println!("{} -> {}", mode, format); // "chat -> JSON"
//! ```

use std::fmt;

use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

/// Analyze exported chat transcripts and media bundles into
/// deterministic statistics.
#[derive(Parser, Debug, Clone)]
#[command(name = "chatstats")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    chatstats chat export.txt
    chatstats c export.txt --format json -o summary.json
    chatstats media ./exported_media
    chatstats m ./exported_media --format json")]
pub struct Args {
    /// What to analyze
    #[arg(value_enum)]
    pub mode: Mode,

    /// Path to the transcript file (chat) or media directory (media)
    pub input: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Write output to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<String>,
}

/// Analysis mode.
///
/// - [`Chat`](Mode::Chat) - a `.txt` transcript export
/// - [`Media`](Mode::Media) - a directory of exported media files
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Analyze a chat transcript
    #[value(alias = "c")]
    Chat,

    /// Analyze a media bundle directory
    #[value(alias = "m")]
    Media,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Chat => write!(f, "chat"),
            Mode::Media => write!(f, "media"),
        }
    }
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable text report
    Text,

    /// Pretty-printed JSON summary
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "JSON"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_display() {
        assert_eq!(Mode::Chat.to_string(), "chat");
        assert_eq!(Mode::Media.to_string(), "media");
    }

    #[test]
    fn test_format_display() {
        assert_eq!(OutputFormat::Text.to_string(), "text");
        assert_eq!(OutputFormat::Json.to_string(), "JSON");
    }

    #[test]
    fn test_args_parse_chat() {
        let args = Args::try_parse_from(["chatstats", "chat", "export.txt"]).unwrap();
        assert_eq!(args.mode, Mode::Chat);
        assert_eq!(args.input, "export.txt");
        assert_eq!(args.format, OutputFormat::Text);
        assert!(args.output.is_none());
    }

    #[test]
    fn test_args_parse_aliases_and_flags() {
        let args = Args::try_parse_from([
            "chatstats", "m", "./media", "--format", "json", "-o", "out.json",
        ])
        .unwrap();
        assert_eq!(args.mode, Mode::Media);
        assert_eq!(args.format, OutputFormat::Json);
        assert_eq!(args.output.as_deref(), Some("out.json"));
    }

    #[test]
    fn test_args_reject_unknown_mode() {
        assert!(Args::try_parse_from(["chatstats", "video", "x"]).is_err());
    }

    #[test]
    fn test_mode_serde() {
        assert_eq!(serde_json::to_string(&Mode::Chat).unwrap(), "\"chat\"");
        let mode: Mode = serde_json::from_str("\"media\"").unwrap();
        assert_eq!(mode, Mode::Media);
    }
}
