//! Delimited-text tokenization.

mod delimiter;
mod tokenizer;

pub use delimiter::detect_delimiter;
pub use tokenizer::{RawTable, tokenize, tokenize_with};
