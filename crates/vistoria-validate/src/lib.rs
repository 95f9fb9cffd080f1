//! Validation of inspection exports.
//!
//! The pipeline runs decode, tokenize, map columns, validate rows and
//! build the report. Malformed data never fails the pipeline: every problem
//! becomes a [`ValidationIssue`](vistoria_model::ValidationIssue) in the
//! returned [`ValidationResult`]. Only unreadable input (missing file,
//! unknown encoding label) is an error.
//!
//! # Example
//!
//! ```ignore
//! use vistoria_validate::validate_text;
//!
//! let result = validate_text("Nº Demanda;Data Vistoria;Postura;Status\n1;05/03/2024;OBRAS;Auto emitido");
//! assert_eq!(result.summary.valid, 1);
//! ```

pub mod config;
pub mod date;
pub mod error;
pub mod report;
pub mod validator;

use std::path::Path;

use tracing::{debug, info, info_span, warn};
use vistoria_ingest::{DecodedText, EncodingHint, IngestError, RawTable, decode, load_file, tokenize};
use vistoria_map::{AliasTable, detect_columns};
use vistoria_model::ValidationResult;

pub use config::{ImportConfig, ImportOptions};
pub use date::normalize_date;
pub use error::ConfigError;
pub use report::{EMPTY_FILE_MESSAGE, ReportBuilder, empty_file_result};
pub use validator::{RowOutcome, RowValidator};

/// Validates already-decoded text with the built-in alias table.
pub fn validate_text(text: &str) -> ValidationResult {
    validate_text_with(text, &AliasTable::default())
}

/// Validates already-decoded text with a custom alias table.
pub fn validate_text_with(text: &str, aliases: &AliasTable) -> ValidationResult {
    validate_table(&tokenize(text), aliases)
}

/// Validates a tokenized table.
pub fn validate_table(table: &RawTable, aliases: &AliasTable) -> ValidationResult {
    let _span = info_span!("validate", delimiter = %table.delimiter).entered();

    let Some(header) = table.header().filter(|_| table.has_data()) else {
        warn!(rows = table.rows.len(), "export has no data rows");
        return empty_file_result(table.delimiter);
    };

    let columns = detect_columns(header, aliases);
    debug!(
        mapped = columns.field_indices().len(),
        headers = columns.len(),
        "detected columns"
    );

    let validator = RowValidator::new(&columns);
    let mut report = ReportBuilder::new(columns, table.delimiter);
    if let Some(warning) = validator.missing_columns_warning() {
        warn!(message = %warning.message, "missing required columns");
        report.warn(warning);
    }

    for (index, row) in table.data_rows().iter().enumerate() {
        // Line 1 is the header.
        report.push(validator.validate(index + 2, row));
    }

    let result = report.build();
    info!(
        total = result.summary.total,
        valid = result.summary.valid,
        errors = result.summary.errors,
        "validated export"
    );
    result
}

/// Decodes and validates raw bytes.
///
/// `encoding` is a WHATWG label; `None` selects UTF-8 with Windows-1252
/// fallback.
pub fn validate_bytes(bytes: &[u8], encoding: Option<&str>) -> Result<ValidationResult, IngestError> {
    let options = options_for(encoding)?;
    Ok(import_bytes(bytes, &options))
}

/// Reads, decodes and validates a file.
pub fn validate_file(path: &Path, encoding: Option<&str>) -> Result<ValidationResult, IngestError> {
    let options = options_for(encoding)?;
    import_file(path, &options)
}

/// Decodes and validates raw bytes with resolved options.
pub fn import_bytes(bytes: &[u8], options: &ImportOptions) -> ValidationResult {
    finish(decode(bytes, options.encoding), options)
}

/// Reads, decodes and validates a file with resolved options.
pub fn import_file(path: &Path, options: &ImportOptions) -> Result<ValidationResult, IngestError> {
    let decoded = load_file(path, options.encoding)?;
    Ok(finish(decoded, options))
}

fn options_for(encoding: Option<&str>) -> Result<ImportOptions, IngestError> {
    let encoding = encoding
        .map(EncodingHint::from_label)
        .transpose()?
        .unwrap_or_default();
    Ok(ImportOptions {
        encoding,
        ..ImportOptions::default()
    })
}

fn finish(decoded: DecodedText, options: &ImportOptions) -> ValidationResult {
    let mut result = validate_text_with(&decoded.text, &options.aliases);
    result.encoding = Some(decoded.encoding_name().to_string());
    result
}
