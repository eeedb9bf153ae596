use itertools::Itertools;
use tracing::{debug, warn};

use crate::utf::{utf8sequence::Utf8Sequence, EncodingMode};

/// One input character alongside the bytes it was encoded to.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct EncodedRecord {
    pub character: char,
    pub code_point: u32,
    pub bytes: Utf8Sequence,
}

impl EncodedRecord {
    pub fn new(character: char, mode: EncodingMode) -> Self {
        Self {
            character,
            code_point: character as u32,
            bytes: Utf8Sequence::encode(character, mode),
        }
    }

    /// `U+` followed by at least four uppercase hex digits.
    pub fn label(&self) -> String {
        format!("U+{:04X}", self.code_point)
    }

    pub fn escaped(&self) -> String {
        hex_escape(self.bytes.as_bytes())
    }
}

/// Renders each byte as `\xHH`, back to back.
pub fn hex_escape(bytes: &[u8]) -> String {
    bytes
        .iter()
        .format_with("", |byte, f| f(&format_args!("\\x{byte:02X}")))
        .to_string()
}

/// Encodes `text` one Unicode scalar value at a time, keeping input order.
pub fn build(text: &str, mode: EncodingMode) -> Vec<EncodedRecord> {
    let records = text
        .chars()
        .map(|character| {
            let record = EncodedRecord::new(character, mode);
            if let Some(width) = mode.width() {
                if record.code_point > width.capacity() {
                    warn!(
                        "{} does not fit in {} bytes, emitting truncated {}",
                        record.label(),
                        width.byte_count(),
                        record.escaped()
                    );
                }
            }
            record
        })
        .collect_vec();
    debug!("encoded {} characters in {} mode", records.len(), mode);
    records
}
