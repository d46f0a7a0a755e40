//! Command-line argument definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Count distinct pixel colors in image files
#[derive(Debug, Parser)]
#[command(name = "colorcount", version, about)]
pub struct Cli {
    /// Image file(s) to scan
    #[arg(value_name = "IMAGE", required = true)]
    pub inputs: Vec<PathBuf>,

    /// Count transparent pixels as distinct colors (full RGBA keys) instead
    /// of dropping pixels below the opaque alpha threshold
    #[arg(short = 't', long)]
    pub include_transparency: bool,

    /// List all colors, sorted by number of occurrences
    #[arg(short, long)]
    pub verbose: bool,

    /// When to colorize terminal output
    #[arg(long, value_enum, value_name = "WHEN", default_value = "auto")]
    pub color: ColorChoice,

    /// Output format
    #[arg(long, value_enum, value_name = "FORMAT", default_value = "human")]
    pub format: OutputFormat,
}

/// Color output preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    /// Resolve to a termcolor choice.
    ///
    /// `Auto` downgrades to `Never` when the target stream is not a
    /// terminal, so piped output stays free of escape sequences.
    pub fn to_termcolor(self, is_terminal: bool) -> termcolor::ColorChoice {
        match self {
            ColorChoice::Always => termcolor::ColorChoice::Always,
            ColorChoice::Never => termcolor::ColorChoice::Never,
            ColorChoice::Auto if is_terminal => termcolor::ColorChoice::Auto,
            ColorChoice::Auto => termcolor::ColorChoice::Never,
        }
    }
}

/// Output format selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Per-file summary lines or a verbose color listing
    Human,
    /// One JSON object per line
    Jsonl,
}
