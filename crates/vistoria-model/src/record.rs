//! Validated inspection records and record-level queries.

use serde::{Deserialize, Serialize};

use crate::field::CanonicalField;
use crate::vocabulary::{Postura, Status, Vocabulary};

/// A row that passed every check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedRecord {
    pub numero_demanda: String,
    pub numero_sei: Option<String>,
    pub postura: Postura,
    pub sql_numero: Option<String>,
    /// ISO `YYYY-MM-DD` date.
    pub data_vistoria: String,
    pub endereco: Option<String>,
    pub status: Status,
    pub observacoes: Option<String>,
}

impl ParsedRecord {
    /// Returns the stored text for a field, `None` for an absent optional.
    pub fn value(&self, field: CanonicalField) -> Option<&str> {
        match field {
            CanonicalField::NumeroDemanda => Some(&self.numero_demanda),
            CanonicalField::NumeroSei => self.numero_sei.as_deref(),
            CanonicalField::Postura => Some(self.postura.label()),
            CanonicalField::SqlNumero => self.sql_numero.as_deref(),
            CanonicalField::DataVistoria => Some(&self.data_vistoria),
            CanonicalField::Endereco => self.endereco.as_deref(),
            CanonicalField::Status => Some(self.status.label()),
            CanonicalField::Observacoes => self.observacoes.as_deref(),
        }
    }
}

/// Status and free-text filter over records.
///
/// The search term is matched case-insensitively as a substring of the
/// demand number, SEI number, address or SQL number.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordFilter {
    /// Only keep records with this status (`None` keeps all).
    pub status: Option<Status>,
    /// Search term; empty matches everything.
    pub search: String,
}

impl RecordFilter {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_status(mut self, status: Option<Status>) -> Self {
        self.status = status;
        self
    }

    #[must_use]
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    pub fn matches(&self, record: &ParsedRecord) -> bool {
        if let Some(status) = self.status
            && record.status != status
        {
            return false;
        }
        let needle = self.search.to_lowercase();
        if needle.is_empty() {
            return true;
        }
        [
            CanonicalField::NumeroDemanda,
            CanonicalField::NumeroSei,
            CanonicalField::Endereco,
            CanonicalField::SqlNumero,
        ]
        .into_iter()
        .filter_map(|field| record.value(field))
        .any(|value| value.to_lowercase().contains(&needle))
    }

    /// Returns the records that pass the filter, in input order.
    pub fn apply<'a>(&self, records: &'a [ParsedRecord]) -> Vec<&'a ParsedRecord> {
        records.iter().filter(|record| self.matches(record)).collect()
    }
}

/// Number of records per status, every status listed in vocabulary order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusBreakdown {
    pub total: usize,
    pub counts: Vec<StatusCount>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCount {
    pub status: Status,
    pub count: usize,
}

impl StatusBreakdown {
    pub fn from_records<'a>(records: impl IntoIterator<Item = &'a ParsedRecord>) -> Self {
        let mut counts: Vec<StatusCount> = Status::ALL
            .iter()
            .map(|&status| StatusCount { status, count: 0 })
            .collect();
        let mut total = 0usize;
        for record in records {
            total += 1;
            if let Some(entry) = counts.iter_mut().find(|c| c.status == record.status) {
                entry.count += 1;
            }
        }
        Self { total, counts }
    }

    pub fn count(&self, status: Status) -> usize {
        self.counts
            .iter()
            .find(|c| c.status == status)
            .map_or(0, |c| c.count)
    }
}
