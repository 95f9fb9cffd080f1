//! The validation result handed back to import callers.

use serde::{Deserialize, Serialize};

use crate::delimiter::Delimiter;
use crate::issue::{InvalidRow, ValidationIssue};
use crate::mapping::ColumnMapping;
use crate::record::{ParsedRecord, StatusBreakdown};

/// Row counts for one import attempt.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    /// Number of data rows (header excluded, blank lines dropped).
    pub total: usize,
    pub valid: usize,
    /// Number of rejected rows (not the number of issues).
    pub errors: usize,
}

/// Everything decided about one import attempt.
///
/// `is_valid` is true only when there is at least one valid row and no row
/// errors at all. It is informational; callers deciding on a partial import
/// should look at `valid_rows` and `summary` instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<ValidationIssue>,
    pub warnings: Vec<ValidationIssue>,
    pub valid_rows: Vec<ParsedRecord>,
    pub invalid_rows: Vec<InvalidRow>,
    pub summary: Summary,
    pub columns: ColumnMapping,
    pub delimiter: Delimiter,
    /// Name of the text encoding the bytes were decoded with, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub encoding: Option<String>,
}

impl ValidationResult {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// True when at least one row can be imported.
    pub fn can_import(&self) -> bool {
        !self.valid_rows.is_empty()
    }

    pub fn status_breakdown(&self) -> StatusBreakdown {
        StatusBreakdown::from_records(&self.valid_rows)
    }

    /// Capped view of the rows for presentation.
    pub fn preview(&self, limits: &PreviewLimits) -> ImportPreview<'_> {
        let invalid_shown = self.invalid_rows.len().min(limits.max_invalid);
        let valid_shown = self.valid_rows.len().min(limits.max_valid);
        ImportPreview {
            invalid_rows: &self.invalid_rows[..invalid_shown],
            hidden_invalid: self.invalid_rows.len() - invalid_shown,
            valid_rows: &self.valid_rows[..valid_shown],
            hidden_valid: self.valid_rows.len() - valid_shown,
        }
    }
}

/// How many rows a presentation layer shows before summarizing the rest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreviewLimits {
    pub max_invalid: usize,
    pub max_valid: usize,
}

impl Default for PreviewLimits {
    fn default() -> Self {
        Self {
            max_invalid: 50,
            max_valid: 10,
        }
    }
}

/// Borrowed, capped slices of a [`ValidationResult`].
#[derive(Debug, Clone, Copy)]
pub struct ImportPreview<'a> {
    pub invalid_rows: &'a [InvalidRow],
    pub hidden_invalid: usize,
    pub valid_rows: &'a [ParsedRecord],
    pub hidden_valid: usize,
}
