//! Structured validation issues.

use serde::{Deserialize, Serialize};

/// One validation failure or warning.
///
/// `row` is the 1-based line number of the data row (the header is line 1),
/// or `0` for file-level issues.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationIssue {
    pub row: usize,
    pub field: String,
    pub message: String,
    /// Offending raw text, when the issue concerns a value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl ValidationIssue {
    /// Row-level issue about a raw value.
    pub fn at_row(
        row: usize,
        field: impl Into<String>,
        message: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            row,
            field: field.into(),
            message: message.into(),
            value: Some(value.into()),
        }
    }

    /// File-level issue (row 0, no value).
    pub fn file_level(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            row: 0,
            field: field.into(),
            message: message.into(),
            value: None,
        }
    }

    pub fn is_file_level(&self) -> bool {
        self.row == 0
    }
}

/// A data row that was rejected, with its raw fields and every issue found.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvalidRow {
    pub row: usize,
    pub raw_fields: Vec<String>,
    pub issues: Vec<ValidationIssue>,
}
