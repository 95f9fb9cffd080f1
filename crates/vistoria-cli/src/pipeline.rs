//! Import and convert steps shared by the CLI commands.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, info};
use vistoria_model::{ParsedRecord, RecordFilter, ValidationResult};
use vistoria_output::write_csv;
use vistoria_validate::{ImportConfig, ImportOptions, import_file};

/// Builds import options from an optional config file and encoding flag.
///
/// The flag wins over the `encoding` key of the config file.
pub fn load_options(config: Option<&Path>, encoding: Option<&str>) -> Result<ImportOptions> {
    let mut import_config = match config {
        Some(path) => ImportConfig::load(path)
            .with_context(|| format!("load config {}", path.display()))?,
        None => ImportConfig::default(),
    };
    if let Some(label) = encoding {
        import_config.encoding = Some(label.to_string());
    }
    import_config.options().context("invalid import configuration")
}

/// Reads and validates one export.
pub fn import(path: &Path, options: &ImportOptions) -> Result<ValidationResult> {
    let result =
        import_file(path, options).with_context(|| format!("import {}", path.display()))?;
    debug!(
        delimiter = %result.delimiter,
        encoding = result.encoding.as_deref().unwrap_or("unknown"),
        "import finished"
    );
    Ok(result)
}

/// Outcome of a conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertOutcome {
    /// Rows in the input (header excluded).
    pub total: usize,
    /// Rows rejected by validation.
    pub rejected: usize,
    /// Valid rows dropped by the record filter.
    pub filtered_out: usize,
    /// Rows written to the output file.
    pub written: usize,
}

impl ConvertOutcome {
    pub fn has_errors(&self) -> bool {
        self.rejected > 0
    }
}

/// Writes the valid rows of `result` that pass `filter` to `output`.
pub fn convert(
    result: &ValidationResult,
    filter: &RecordFilter,
    output: &Path,
) -> Result<ConvertOutcome> {
    let kept: Vec<ParsedRecord> = filter
        .apply(&result.valid_rows)
        .into_iter()
        .cloned()
        .collect();
    write_csv(output, &kept).with_context(|| format!("write {}", output.display()))?;

    let outcome = ConvertOutcome {
        total: result.summary.total,
        rejected: result.invalid_rows.len(),
        filtered_out: result.valid_rows.len() - kept.len(),
        written: kept.len(),
    };
    info!(
        written = outcome.written,
        rejected = outcome.rejected,
        filtered_out = outcome.filtered_out,
        output = %output.display(),
        "conversion complete"
    );
    Ok(outcome)
}
