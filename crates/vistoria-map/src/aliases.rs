//! Known header spellings for each canonical field.

use std::collections::BTreeMap;

use vistoria_model::CanonicalField;

use crate::normalize::normalize;

const DEFAULT_ALIASES: [(CanonicalField, &[&str]); 8] = [
    (
        CanonicalField::NumeroDemanda,
        &["nº demanda", "numero demanda", "n demanda", "demanda", "num demanda"],
    ),
    (
        CanonicalField::NumeroSei,
        &["nº sei", "numero sei", "n sei", "sei", "num sei"],
    ),
    (CanonicalField::Postura, &["postura", "tipo postura", "categoria"]),
    (
        CanonicalField::SqlNumero,
        &["sql", "sql numero", "nº sql", "numero sql", "n sql"],
    ),
    (
        CanonicalField::DataVistoria,
        &["data vistoria", "data da vistoria", "vistoria", "data"],
    ),
    (
        CanonicalField::Endereco,
        &["endereço", "endereco", "end", "logradouro"],
    ),
    (
        CanonicalField::Status,
        &["status", "situação", "situacao", "estado"],
    ),
    (
        CanonicalField::Observacoes,
        &["observações", "observacoes", "obs", "notas", "comentarios", "comentários"],
    ),
];

/// Ordered alias lists, one per canonical field.
///
/// Order inside a list is priority order for the column mapper. Extra
/// aliases are appended after the built-in ones.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AliasTable {
    aliases: BTreeMap<CanonicalField, Vec<String>>,
}

impl Default for AliasTable {
    fn default() -> Self {
        let aliases = DEFAULT_ALIASES
            .iter()
            .map(|(field, names)| {
                (*field, names.iter().map(|name| (*name).to_string()).collect())
            })
            .collect();
        Self { aliases }
    }
}

impl AliasTable {
    /// Appends extra aliases for `field`.
    ///
    /// Blank aliases and aliases already present (after normalization) are
    /// skipped. Returns how many were added.
    pub fn extend<I, S>(&mut self, field: CanonicalField, extra: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let list = self.aliases.entry(field).or_default();
        let mut added = 0;
        for alias in extra {
            let alias: String = alias.into();
            let key = normalize(&alias);
            if key.is_empty() || list.iter().any(|existing| normalize(existing) == key) {
                continue;
            }
            list.push(alias.trim().to_string());
            added += 1;
        }
        added
    }

    pub fn aliases_for(&self, field: CanonicalField) -> &[String] {
        self.aliases.get(&field).map(Vec::as_slice).unwrap_or_default()
    }

    /// Fields and their aliases in canonical field order.
    pub fn iter(&self) -> impl Iterator<Item = (CanonicalField, &[String])> {
        self.aliases
            .iter()
            .map(|(field, names)| (*field, names.as_slice()))
    }
}
