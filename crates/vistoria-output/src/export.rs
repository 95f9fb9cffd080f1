//! Canonical CSV export.
//!
//! The layout is fixed: the eight field labels as header, comma separated,
//! every field quoted, UTF-8 with a byte-order mark so spreadsheet tools
//! pick the right encoding, rows separated by `\n` with no trailing newline.
//! Re-importing the output maps every column back to its field.

use std::path::Path;

use csv::{QuoteStyle, Terminator, WriterBuilder};
use tracing::debug;
use vistoria_model::{CanonicalField, ParsedRecord};

use crate::error::{ExportError, Result};

pub const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Serializes records to canonical CSV bytes.
pub fn export_csv(records: &[ParsedRecord]) -> Result<Vec<u8>> {
    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(UTF8_BOM.to_vec());

    writer.write_record(CanonicalField::ALL.iter().map(CanonicalField::label))?;
    for record in records {
        writer.write_record(
            CanonicalField::ALL
                .iter()
                .map(|field| record.value(*field).unwrap_or_default()),
        )?;
    }

    let mut bytes = writer
        .into_inner()
        .map_err(|e| ExportError::Buffer(e.into_error()))?;
    if bytes.last() == Some(&b'\n') {
        bytes.pop();
    }
    debug!(records = records.len(), bytes = bytes.len(), "exported records");
    Ok(bytes)
}

/// Writes canonical CSV to `path`.
pub fn write_csv(path: &Path, records: &[ParsedRecord]) -> Result<()> {
    let bytes = export_csv(records)?;
    std::fs::write(path, bytes).map_err(|e| ExportError::Io {
        path: path.to_path_buf(),
        source: e,
    })
}
