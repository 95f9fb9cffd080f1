//! Header-to-field mapping produced by column detection.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::field::CanonicalField;

/// One header cell and the field it was matched to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappedColumn {
    pub index: usize,
    pub header: String,
    pub mapped_to: Option<CanonicalField>,
}

/// Mapping of every header position to an optional canonical field.
///
/// A field is assigned to at most one column and a column to at most one
/// field; [`ColumnMapping::assign`] refuses anything else.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColumnMapping {
    columns: Vec<MappedColumn>,
}

impl ColumnMapping {
    /// Creates an all-unmapped mapping for the given header row.
    pub fn unmapped(headers: &[String]) -> Self {
        let columns = headers
            .iter()
            .enumerate()
            .map(|(index, header)| MappedColumn {
                index,
                header: header.clone(),
                mapped_to: None,
            })
            .collect();
        Self { columns }
    }

    /// Assigns `field` to the column at `index`.
    ///
    /// Returns false (and changes nothing) when the column is out of range,
    /// already mapped, or the field is already assigned elsewhere.
    pub fn assign(&mut self, index: usize, field: CanonicalField) -> bool {
        if self.index_of(field).is_some() {
            return false;
        }
        match self.columns.get_mut(index) {
            Some(column) if column.mapped_to.is_none() => {
                column.mapped_to = Some(field);
                true
            }
            _ => false,
        }
    }

    pub fn columns(&self) -> &[MappedColumn] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn index_of(&self, field: CanonicalField) -> Option<usize> {
        self.columns
            .iter()
            .find(|column| column.mapped_to == Some(field))
            .map(|column| column.index)
    }

    pub fn field_at(&self, index: usize) -> Option<CanonicalField> {
        self.columns.get(index).and_then(|column| column.mapped_to)
    }

    /// Field to column index table.
    pub fn field_indices(&self) -> BTreeMap<CanonicalField, usize> {
        self.columns
            .iter()
            .filter_map(|column| column.mapped_to.map(|field| (field, column.index)))
            .collect()
    }

    /// Fields from `fields` that have no mapped column, in the given order.
    pub fn missing(&self, fields: &[CanonicalField]) -> Vec<CanonicalField> {
        fields
            .iter()
            .copied()
            .filter(|field| self.index_of(*field).is_none())
            .collect()
    }

    /// Headers that were not matched to any field.
    pub fn unmapped_headers(&self) -> impl Iterator<Item = &MappedColumn> {
        self.columns.iter().filter(|column| column.mapped_to.is_none())
    }
}
