//! Per-row validation against the detected column mapping.

use std::collections::BTreeMap;

use vistoria_map::match_closest;
use vistoria_model::{
    CanonicalField, ColumnMapping, InvalidRow, ParsedRecord, Postura, Status, ValidationIssue,
    Vocabulary,
};

use crate::date::normalize_date;

pub const REQUIRED_MESSAGE: &str = "required field";
pub const INVALID_DATE_MESSAGE: &str = "invalid date format, expected D/M/YYYY or YYYY-MM-DD";

/// Outcome of validating one data row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowOutcome {
    Valid(ParsedRecord),
    Invalid(InvalidRow),
}

/// Validates data rows using the field positions of a [`ColumnMapping`].
#[derive(Debug, Clone)]
pub struct RowValidator {
    indices: BTreeMap<CanonicalField, usize>,
}

impl RowValidator {
    pub fn new(columns: &ColumnMapping) -> Self {
        Self {
            indices: columns.field_indices(),
        }
    }

    /// Required fields without a mapped column.
    pub fn missing_required(&self) -> Vec<CanonicalField> {
        CanonicalField::REQUIRED
            .into_iter()
            .filter(|field| !self.indices.contains_key(field))
            .collect()
    }

    /// File-level warning listing undetected required columns, if any.
    pub fn missing_columns_warning(&self) -> Option<ValidationIssue> {
        let missing = self.missing_required();
        if missing.is_empty() {
            return None;
        }
        let names: Vec<&str> = missing.iter().map(CanonicalField::as_str).collect();
        Some(ValidationIssue::file_level(
            "columns",
            format!(
                "required columns not detected: {}. Check the header row.",
                names.join(", ")
            ),
        ))
    }

    /// Validates one data row; `line` is its 1-based line number.
    pub fn validate(&self, line: usize, row: &[String]) -> RowOutcome {
        let mut issues = Vec::new();

        let numero_demanda = self.value(row, CanonicalField::NumeroDemanda);
        if numero_demanda.is_empty() {
            issues.push(required(line, CanonicalField::NumeroDemanda));
        }

        let date_raw = self.value(row, CanonicalField::DataVistoria);
        let data_vistoria = if date_raw.is_empty() {
            issues.push(required(line, CanonicalField::DataVistoria));
            None
        } else {
            let normalized = normalize_date(date_raw);
            if normalized.is_none() {
                issues.push(ValidationIssue::at_row(
                    line,
                    CanonicalField::DataVistoria.label(),
                    INVALID_DATE_MESSAGE,
                    date_raw,
                ));
            }
            normalized
        };

        let postura = self.resolve::<Postura>(line, row, CanonicalField::Postura, &mut issues);
        let status = self.resolve::<Status>(line, row, CanonicalField::Status, &mut issues);

        match (data_vistoria, postura, status) {
            (Some(data_vistoria), Some(postura), Some(status)) if issues.is_empty() => {
                RowOutcome::Valid(ParsedRecord {
                    numero_demanda: numero_demanda.to_string(),
                    numero_sei: self.optional(row, CanonicalField::NumeroSei),
                    postura,
                    sql_numero: self.optional(row, CanonicalField::SqlNumero),
                    data_vistoria,
                    endereco: self.optional(row, CanonicalField::Endereco),
                    status,
                    observacoes: self.optional(row, CanonicalField::Observacoes),
                })
            }
            _ => RowOutcome::Invalid(InvalidRow {
                row: line,
                raw_fields: row.to_vec(),
                issues,
            }),
        }
    }

    /// Trimmed cell for `field`, empty when unmapped or past the row end.
    fn value<'r>(&self, row: &'r [String], field: CanonicalField) -> &'r str {
        self.indices
            .get(&field)
            .and_then(|index| row.get(*index))
            .map_or("", |value| value.trim())
    }

    fn optional(&self, row: &[String], field: CanonicalField) -> Option<String> {
        let value = self.value(row, field);
        (!value.is_empty()).then(|| value.to_string())
    }

    fn resolve<V: Vocabulary>(
        &self,
        line: usize,
        row: &[String],
        field: CanonicalField,
        issues: &mut Vec<ValidationIssue>,
    ) -> Option<V> {
        let raw = self.value(row, field);
        if raw.is_empty() {
            issues.push(required(line, field));
            return None;
        }
        let resolved = match_closest::<V>(raw);
        if resolved.is_none() {
            issues.push(ValidationIssue::at_row(
                line,
                field.label(),
                invalid_value_message::<V>(),
                raw,
            ));
        }
        resolved
    }
}

/// "invalid value, expected one of: A, B, C..." naming the first three entries.
pub fn invalid_value_message<V: Vocabulary>() -> String {
    let examples: Vec<&str> = V::ALL.iter().take(3).map(Vocabulary::label).collect();
    format!("invalid value, expected one of: {}...", examples.join(", "))
}

fn required(line: usize, field: CanonicalField) -> ValidationIssue {
    ValidationIssue::at_row(line, field.label(), REQUIRED_MESSAGE, "")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| (*v).to_string()).collect()
    }

    fn validator(headers: &[&str]) -> RowValidator {
        let mut mapping = ColumnMapping::unmapped(&strings(headers));
        for (index, header) in headers.iter().enumerate() {
            if let Ok(field) = header.parse::<CanonicalField>() {
                mapping.assign(index, field);
            }
        }
        RowValidator::new(&mapping)
    }

    fn full() -> RowValidator {
        validator(&[
            "numero_demanda",
            "numero_sei",
            "postura",
            "sql_numero",
            "data_vistoria",
            "endereco",
            "status",
            "observacoes",
        ])
    }

    #[test]
    fn test_valid_row() {
        let row = strings(&["101", "", "obras", " 012 ", "05/03/2024", "Rua A", "Auto emitido", ""]);
        let RowOutcome::Valid(record) = full().validate(2, &row) else {
            panic!("expected a valid row");
        };
        assert_eq!(record.numero_demanda, "101");
        assert_eq!(record.numero_sei, None);
        assert_eq!(record.postura, Postura::Obras);
        assert_eq!(record.sql_numero.as_deref(), Some("012"));
        assert_eq!(record.data_vistoria, "2024-03-05");
        assert_eq!(record.status, Status::AutoEmitido);
        assert_eq!(record.observacoes, None);
    }

    #[test]
    fn test_every_failure_is_reported() {
        let row = strings(&["", "", "Bicicleta", "", "ontem", "", "", ""]);
        let RowOutcome::Invalid(invalid) = full().validate(7, &row) else {
            panic!("expected an invalid row");
        };
        assert_eq!(invalid.row, 7);
        assert_eq!(invalid.raw_fields, row);
        let fields: Vec<&str> = invalid.issues.iter().map(|i| i.field.as_str()).collect();
        assert_eq!(fields, ["Nº Demanda", "Data Vistoria", "Postura", "Status"]);
        assert_eq!(invalid.issues[0].message, REQUIRED_MESSAGE);
        assert_eq!(invalid.issues[1].message, INVALID_DATE_MESSAGE);
        assert_eq!(invalid.issues[1].value.as_deref(), Some("ontem"));
        assert_eq!(
            invalid.issues[2].message,
            "invalid value, expected one of: ATIVIDADE, OBRAS, MPL..."
        );
        assert_eq!(invalid.issues[3].message, REQUIRED_MESSAGE);
        assert!(invalid.issues.iter().all(|issue| issue.row == 7));
    }

    #[test]
    fn test_two_digit_year_is_invalid_date() {
        let row = strings(&["101", "", "OBRAS", "", "05/03/24", "", "Auto emitido", ""]);
        let RowOutcome::Invalid(invalid) = full().validate(2, &row) else {
            panic!("expected an invalid row");
        };
        assert_eq!(invalid.issues.len(), 1);
        assert_eq!(invalid.issues[0].field, "Data Vistoria");
        assert_eq!(invalid.issues[0].message, INVALID_DATE_MESSAGE);
        assert_eq!(invalid.issues[0].value.as_deref(), Some("05/03/24"));
    }

    #[test]
    fn test_short_row_reads_empty() {
        let row = strings(&["101"]);
        let RowOutcome::Invalid(invalid) = full().validate(3, &row) else {
            panic!("expected an invalid row");
        };
        assert_eq!(invalid.issues.len(), 3);
    }

    #[test]
    fn test_missing_columns_warning() {
        let validator = validator(&["numero_demanda", "status"]);
        assert_eq!(
            validator.missing_required(),
            vec![CanonicalField::DataVistoria, CanonicalField::Postura]
        );
        let warning = validator.missing_columns_warning().expect("warning");
        assert!(warning.is_file_level());
        assert_eq!(warning.field, "columns");
        assert!(warning.message.contains("data_vistoria, postura"));
        assert!(full().missing_columns_warning().is_none());
    }

    #[test]
    fn test_status_message_names_first_three() {
        assert_eq!(
            invalid_value_message::<Status>(),
            "invalid value, expected one of: Ação necessária, Demanda concluída, Demanda devolvida..."
        );
    }
}
