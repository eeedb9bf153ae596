pub mod cli;
mod error;
mod record;
mod render;
mod utf;

use std::io::{Read, Write};

use tracing::debug;

pub use error::{OverlongError, Result};
pub use record::{build, hex_escape, EncodedRecord};
pub use render::{render, render_string, render_table, OutputFormat};
pub use utf::{utf8sequence::Utf8Sequence, EncodingMode, Utf, Width};

use crate::cli::Cli;

/// Encodes the requested input and writes the rendered result to `stdout`.
/// `stdin` is only read when no input argument was given.
pub fn overlong(cli: &Cli, stdin: impl Read, mut stdout: impl Write) -> Result<()> {
    let text = resolve_input(cli.input.as_deref(), stdin)?;
    let mode = EncodingMode::from(cli.byte_length);
    let format = OutputFormat::from(cli.format);
    debug!("mode {mode}, format {format}");

    let records = build(&text, mode);
    let output = render(&records, mode, format);
    stdout
        .write_all(output.as_bytes())
        .and_then(|()| stdout.flush())
        .map_err(OverlongError::Output)
}

/// The argument when one is given and non-empty, otherwise all of `stdin`
/// with surrounding whitespace removed.
pub fn resolve_input(input: Option<&str>, mut stdin: impl Read) -> Result<String> {
    if let Some(text) = input.filter(|text| !text.is_empty()) {
        debug!("reading input from argument");
        return Ok(text.to_owned());
    }
    debug!("reading input from stdin");
    let mut buffer = Vec::new();
    stdin
        .read_to_end(&mut buffer)
        .map_err(OverlongError::Stdin)?;
    let text = String::from_utf8(buffer)?;
    Ok(text.trim().to_owned())
}
