//! Whole-file CSV reading and writing.

use anyhow::{Context, Result};
use csv::{ReaderBuilder, Terminator, WriterBuilder};
use std::path::Path;

use super::mapper::Row;

/// Field delimiter and comment character of a CSV file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dialect {
    pub delimiter: u8,
    /// Lines starting with this byte are skipped when reading.
    pub comment: Option<u8>,
}

impl Default for Dialect {
    fn default() -> Self {
        Self {
            delimiter: b',',
            comment: None,
        }
    }
}

/// Reads every record of a CSV file.
///
/// All records must have the width of the first one.
pub fn read_table(path: &Path, dialect: Dialect) -> Result<Vec<Row>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .delimiter(dialect.delimiter)
        .comment(dialect.comment)
        .from_path(path)
        .with_context(|| format!("Failed to open CSV file: {}", path.display()))?;

    let mut rows = Vec::new();
    for record in reader.records() {
        let record =
            record.with_context(|| format!("Failed to parse CSV file: {}", path.display()))?;
        rows.push(record.iter().map(str::to_string).collect());
    }

    tracing::debug!(path = %path.display(), rows = rows.len(), "read CSV table");

    Ok(rows)
}

/// Encodes rows as CSV text using the dialect's delimiter.
pub fn encode_table(rows: &[Row], dialect: Dialect) -> Result<String> {
    let mut writer = WriterBuilder::new()
        .delimiter(dialect.delimiter)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    for row in rows {
        writer
            .write_record(row)
            .context("Failed to encode CSV record")?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| e.into_error())
        .context("Failed to flush CSV output")?;

    String::from_utf8(bytes).context("CSV output is not valid UTF-8")
}
