//! Export ingestion for inspection imports.
//!
//! Turns the raw bytes of a spreadsheet export into a [`RawTable`]:
//!
//! - **Encoding**: UTF-8 first, Windows-1252 when UTF-8 decoding produced
//!   replacement characters, or exactly the encoding the caller names
//! - **Delimiter**: comma, semicolon or tab, sniffed from the first line
//! - **Tokenization**: quote-aware, trimmed fields, blank rows dropped
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use vistoria_ingest::{EncodingHint, load_file, tokenize};
//!
//! let decoded = load_file(Path::new("vistorias.csv"), EncodingHint::Auto)?;
//! let table = tokenize(&decoded.text);
//! ```

mod csv;
mod encoding;
mod error;

// === Error Types ===
pub use error::{IngestError, Result};

// === Decoding ===
pub use encoding::{
    DecodedText, EncodingHint, MAX_FILE_SIZE, check_file_size_with_limit, decode, load_file,
};

// === Tokenization ===
pub use csv::{RawTable, detect_delimiter, tokenize, tokenize_with};
