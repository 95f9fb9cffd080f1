//! Column detection: matching header cells to canonical fields.

use std::collections::BTreeSet;

use tracing::debug;
use vistoria_model::{CanonicalField, ColumnMapping};

use crate::aliases::AliasTable;
use crate::normalize::normalize;

/// How a header cell matched an alias.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tier {
    Exact,
    Prefix,
    Contains,
}

impl Tier {
    const ALL: [Tier; 3] = [Tier::Exact, Tier::Prefix, Tier::Contains];

    fn accepts(self, header: &str, alias: &str) -> bool {
        match self {
            Tier::Exact => header == alias,
            Tier::Prefix => header.starts_with(alias),
            Tier::Contains => header.contains(alias),
        }
    }
}

/// Maps each header cell to at most one canonical field.
///
/// Fields are visited in [`CanonicalField::ALL`] order. For each field the
/// tiers exact, prefix, contains are tried in turn against header cells not
/// yet claimed; within a tier aliases are tried in list order and headers
/// left to right. Fields with no match stay unmapped.
pub fn detect_columns(headers: &[String], aliases: &AliasTable) -> ColumnMapping {
    let normalized: Vec<String> = headers.iter().map(|header| normalize(header)).collect();
    let mut mapping = ColumnMapping::unmapped(headers);
    let mut used = BTreeSet::new();

    for field in CanonicalField::ALL {
        let names: Vec<String> = aliases
            .aliases_for(field)
            .iter()
            .map(|alias| normalize(alias))
            .filter(|alias| !alias.is_empty())
            .collect();

        let Some((index, tier)) = find_column(&normalized, &names, &used) else {
            debug!(field = field.as_str(), "no column matched");
            continue;
        };
        if mapping.assign(index, field) {
            used.insert(index);
            debug!(
                field = field.as_str(),
                column = index,
                header = %headers[index],
                tier = ?tier,
                "mapped column"
            );
        }
    }
    mapping
}

fn find_column(
    headers: &[String],
    aliases: &[String],
    used: &BTreeSet<usize>,
) -> Option<(usize, Tier)> {
    Tier::ALL.into_iter().find_map(|tier| {
        aliases.iter().find_map(|alias| {
            headers
                .iter()
                .enumerate()
                .filter(|(index, _)| !used.contains(index))
                .find(|(_, header)| tier.accepts(header, alias))
                .map(|(index, _)| (index, tier))
        })
    })
}
