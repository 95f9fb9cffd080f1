//! Assembly of the final [`ValidationResult`].

use vistoria_model::{
    ColumnMapping, Delimiter, InvalidRow, ParsedRecord, Summary, ValidationIssue,
    ValidationResult,
};

use crate::validator::RowOutcome;

pub const EMPTY_FILE_MESSAGE: &str = "CSV file is empty or has no data rows";

/// Collects row outcomes and file-level warnings in input order.
#[derive(Debug)]
pub struct ReportBuilder {
    columns: ColumnMapping,
    delimiter: Delimiter,
    warnings: Vec<ValidationIssue>,
    valid_rows: Vec<ParsedRecord>,
    invalid_rows: Vec<InvalidRow>,
}

impl ReportBuilder {
    pub fn new(columns: ColumnMapping, delimiter: Delimiter) -> Self {
        Self {
            columns,
            delimiter,
            warnings: Vec::new(),
            valid_rows: Vec::new(),
            invalid_rows: Vec::new(),
        }
    }

    pub fn warn(&mut self, issue: ValidationIssue) {
        self.warnings.push(issue);
    }

    pub fn push(&mut self, outcome: RowOutcome) {
        match outcome {
            RowOutcome::Valid(record) => self.valid_rows.push(record),
            RowOutcome::Invalid(row) => self.invalid_rows.push(row),
        }
    }

    pub fn build(self) -> ValidationResult {
        let errors: Vec<ValidationIssue> = self
            .invalid_rows
            .iter()
            .flat_map(|row| row.issues.iter().cloned())
            .collect();
        let summary = Summary {
            total: self.valid_rows.len() + self.invalid_rows.len(),
            valid: self.valid_rows.len(),
            errors: self.invalid_rows.len(),
        };
        ValidationResult {
            is_valid: !self.valid_rows.is_empty() && errors.is_empty(),
            errors,
            warnings: self.warnings,
            valid_rows: self.valid_rows,
            invalid_rows: self.invalid_rows,
            summary,
            columns: self.columns,
            delimiter: self.delimiter,
            encoding: None,
        }
    }
}

/// Result for input without a header plus at least one data row.
pub fn empty_file_result(delimiter: Delimiter) -> ValidationResult {
    ValidationResult {
        is_valid: false,
        errors: vec![ValidationIssue::file_level("file", EMPTY_FILE_MESSAGE)],
        warnings: Vec::new(),
        valid_rows: Vec::new(),
        invalid_rows: Vec::new(),
        summary: Summary {
            total: 0,
            valid: 0,
            errors: 1,
        },
        columns: ColumnMapping::default(),
        delimiter,
        encoding: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vistoria_model::{Postura, Status};

    fn record() -> ParsedRecord {
        ParsedRecord {
            numero_demanda: "1".to_string(),
            numero_sei: None,
            postura: Postura::Pop,
            sql_numero: None,
            data_vistoria: "2024-01-02".to_string(),
            endereco: None,
            status: Status::ArEntregue,
            observacoes: None,
        }
    }

    fn invalid(line: usize) -> InvalidRow {
        InvalidRow {
            row: line,
            raw_fields: vec![],
            issues: vec![
                ValidationIssue::at_row(line, "Postura", "required field", ""),
                ValidationIssue::at_row(line, "Status", "required field", ""),
            ],
        }
    }

    #[test]
    fn test_summary_counts_rows_not_issues() {
        let mut builder = ReportBuilder::new(ColumnMapping::default(), Delimiter::Tab);
        builder.push(RowOutcome::Valid(record()));
        builder.push(RowOutcome::Invalid(invalid(3)));
        let result = builder.build();
        assert_eq!(result.summary, Summary { total: 2, valid: 1, errors: 1 });
        assert_eq!(result.errors.len(), 2);
        assert!(!result.is_valid);
        assert_eq!(result.delimiter, Delimiter::Tab);
    }

    #[test]
    fn test_only_valid_rows() {
        let mut builder = ReportBuilder::new(ColumnMapping::default(), Delimiter::Comma);
        builder.warn(ValidationIssue::file_level("columns", "x"));
        builder.push(RowOutcome::Valid(record()));
        let result = builder.build();
        assert!(result.is_valid);
        assert!(result.has_warnings());
    }

    #[test]
    fn test_no_rows_is_not_valid() {
        let result = ReportBuilder::new(ColumnMapping::default(), Delimiter::Comma).build();
        assert!(!result.is_valid);
        assert_eq!(result.summary.total, 0);
    }

    #[test]
    fn test_empty_file_result() {
        let result = empty_file_result(Delimiter::Comma);
        assert_eq!(result.summary, Summary { total: 0, valid: 0, errors: 1 });
        assert_eq!(result.errors[0].field, "file");
        assert_eq!(result.errors[0].row, 0);
        assert!(result.columns.is_empty());
    }
}
