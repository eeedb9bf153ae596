//! Command-line arguments. Kept apart from the encoder so tests can drive
//! [`Cli::try_parse_from`] without spawning the binary.

use clap::{Parser, ValueEnum};
use tracing::Level;

use crate::render::OutputFormat;
use crate::utf::{EncodingMode, Width};

/// Encode text to UTF-8 or overlong UTF-8.
#[derive(Parser, Debug)]
#[command(name = "overlong", version)]
pub struct Cli {
    /// Input string to encode. If not provided, reads from stdin.
    pub input: Option<String>,

    /// Byte length for encoding. 'normal' for standard UTF-8, or 2, 3, 4 for
    /// overlong encoding.
    #[arg(short, long, value_enum, default_value = "normal")]
    pub byte_length: ByteLength,

    /// Output format. 'table' for tabular format, 'string' for simple string
    /// output.
    #[arg(short, long, value_enum, default_value = "string")]
    pub format: Format,

    /// Enable debug logging on stderr.
    #[arg(short, long)]
    pub debug: bool,

    /// Only log errors.
    #[arg(short, long, conflicts_with = "debug")]
    pub quiet: bool,
}

impl Cli {
    pub fn log_level(&self) -> Level {
        if self.debug {
            Level::DEBUG
        } else if self.quiet {
            Level::ERROR
        } else {
            Level::WARN
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ByteLength {
    Normal,
    #[value(name = "2")]
    Two,
    #[value(name = "3")]
    Three,
    #[value(name = "4")]
    Four,
}

impl From<ByteLength> for EncodingMode {
    fn from(value: ByteLength) -> Self {
        match value {
            ByteLength::Normal => EncodingMode::Standard,
            ByteLength::Two => EncodingMode::Overlong(Width::Two),
            ByteLength::Three => EncodingMode::Overlong(Width::Three),
            ByteLength::Four => EncodingMode::Overlong(Width::Four),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Table,
    String,
}

impl From<Format> for OutputFormat {
    fn from(value: Format) -> Self {
        match value {
            Format::Table => OutputFormat::Table,
            Format::String => OutputFormat::String,
        }
    }
}
