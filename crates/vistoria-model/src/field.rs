//! Canonical fields of an inspection record.
//!
//! Every imported column is matched to one of these eight fields. The
//! declaration order is significant: the column mapper visits fields in
//! this order, so an earlier field wins a header that loosely matches
//! several fields.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;

/// A fixed output attribute of an inspection record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CanonicalField {
    /// Demand number, the record identifier.
    NumeroDemanda,
    /// Secondary process number.
    NumeroSei,
    /// Posture category.
    Postura,
    /// Property tax (SQL) number.
    SqlNumero,
    /// Inspection date.
    DataVistoria,
    /// Street address.
    Endereco,
    /// Processing status.
    Status,
    /// Free-text notes.
    Observacoes,
}

impl CanonicalField {
    /// All fields in mapping order.
    pub const ALL: [CanonicalField; 8] = [
        CanonicalField::NumeroDemanda,
        CanonicalField::NumeroSei,
        CanonicalField::Postura,
        CanonicalField::SqlNumero,
        CanonicalField::DataVistoria,
        CanonicalField::Endereco,
        CanonicalField::Status,
        CanonicalField::Observacoes,
    ];

    /// Fields that must be mapped and non-empty for a row to be importable.
    pub const REQUIRED: [CanonicalField; 4] = [
        CanonicalField::NumeroDemanda,
        CanonicalField::DataVistoria,
        CanonicalField::Postura,
        CanonicalField::Status,
    ];

    /// Returns the canonical (machine) name.
    pub fn as_str(&self) -> &'static str {
        match self {
            CanonicalField::NumeroDemanda => "numero_demanda",
            CanonicalField::NumeroSei => "numero_sei",
            CanonicalField::Postura => "postura",
            CanonicalField::SqlNumero => "sql_numero",
            CanonicalField::DataVistoria => "data_vistoria",
            CanonicalField::Endereco => "endereco",
            CanonicalField::Status => "status",
            CanonicalField::Observacoes => "observacoes",
        }
    }

    /// Returns the display label used in issues and export headers.
    pub fn label(&self) -> &'static str {
        match self {
            CanonicalField::NumeroDemanda => "Nº Demanda",
            CanonicalField::NumeroSei => "Nº SEI",
            CanonicalField::Postura => "Postura",
            CanonicalField::SqlNumero => "SQL",
            CanonicalField::DataVistoria => "Data Vistoria",
            CanonicalField::Endereco => "Endereço",
            CanonicalField::Status => "Status",
            CanonicalField::Observacoes => "Observações",
        }
    }

    pub fn is_required(&self) -> bool {
        Self::REQUIRED.contains(self)
    }
}

impl fmt::Display for CanonicalField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for CanonicalField {
    type Err = ModelError;

    /// Parse a canonical field name (case-insensitive, surrounding whitespace ignored).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        CanonicalField::ALL
            .into_iter()
            .find(|field| field.as_str() == normalized)
            .ok_or_else(|| ModelError::UnknownField(s.to_string()))
    }
}
