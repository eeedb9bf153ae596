use std::fmt;

use itertools::Itertools;

use crate::record::EncodedRecord;
use crate::utf::EncodingMode;

const CHAR_WIDTH: usize = 4;
const UNICODE_WIDTH: usize = 8;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    #[default]
    String,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Table => f.write_str("table"),
            Self::String => f.write_str("string"),
        }
    }
}

pub fn render(records: &[EncodedRecord], mode: EncodingMode, format: OutputFormat) -> String {
    match format {
        OutputFormat::Table => render_table(records, mode),
        OutputFormat::String => render_string(records),
    }
}

/// Every record's escapes concatenated onto one line.
pub fn render_string(records: &[EncodedRecord]) -> String {
    let mut line = records.iter().map(EncodedRecord::escaped).join("");
    line.push('\n');
    line
}

/// Bordered `Char | Unicode | Encoded` table, one row per record.
pub fn render_table(records: &[EncodedRecord], mode: EncodingMode) -> String {
    let encoded_header = format!("Encoded ({mode}-byte-long)");
    let widths = [CHAR_WIDTH, UNICODE_WIDTH, encoded_header.chars().count()];

    let separator = format!(
        "+-{}-+\n",
        widths.iter().map(|width| "-".repeat(*width)).join("-+-")
    );
    let row = |columns: [&str; 3]| {
        format!(
            "| {} |\n",
            columns
                .iter()
                .zip(widths)
                .map(|(column, width)| format!("{column:<width$}"))
                .join(" | ")
        )
    };

    let mut table = String::new();
    table.push_str(&separator);
    table.push_str(&row(["Char", "Unicode", &encoded_header]));
    table.push_str(&separator);
    for record in records {
        let character = record.character.to_string();
        table.push_str(&row([&character, &record.label(), &record.escaped()]));
    }
    table.push_str(&separator);
    table
}
