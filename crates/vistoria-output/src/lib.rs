//! Export of validated inspection records.

mod error;
mod export;

pub use error::{ExportError, Result};
pub use export::{UTF8_BOM, export_csv, write_csv};
