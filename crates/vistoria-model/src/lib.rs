//! Data model for inspection record imports.
//!
//! This crate defines the types shared by every stage of the import
//! pipeline:
//!
//! - [`CanonicalField`]: the eight fixed record attributes
//! - [`Postura`] / [`Status`]: the closed vocabularies, behind [`Vocabulary`]
//! - [`ParsedRecord`]: a fully validated row
//! - [`ColumnMapping`]: header positions matched to canonical fields
//! - [`ValidationIssue`] / [`ValidationResult`]: the import outcome

pub mod delimiter;
pub mod error;
pub mod field;
pub mod issue;
pub mod mapping;
pub mod record;
pub mod result;
pub mod vocabulary;

pub use delimiter::Delimiter;
pub use error::{ModelError, Result};
pub use field::CanonicalField;
pub use issue::{InvalidRow, ValidationIssue};
pub use mapping::{ColumnMapping, MappedColumn};
pub use record::{ParsedRecord, RecordFilter, StatusBreakdown, StatusCount};
pub use result::{ImportPreview, PreviewLimits, Summary, ValidationResult};
pub use vocabulary::{Postura, Status, Vocabulary};
