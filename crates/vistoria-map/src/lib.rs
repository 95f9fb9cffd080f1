//! Matching of loosely-written export text to canonical forms.
//!
//! - [`normalize`]: case, diacritic and whitespace folding
//! - [`detect_columns`]: header cells to canonical fields via an [`AliasTable`]
//! - [`match_closest`]: raw categorical values to vocabulary entries

pub mod aliases;
pub mod columns;
pub mod fuzzy;
pub mod normalize;

pub use aliases::AliasTable;
pub use columns::detect_columns;
pub use fuzzy::{MatchKind, match_closest, match_closest_with_kind, match_in};
pub use normalize::{normalize, same_label, strip_punctuation};
