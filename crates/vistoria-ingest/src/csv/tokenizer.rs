//! Quote-aware tokenization of delimited text.

use vistoria_model::Delimiter;

use super::delimiter::detect_delimiter;

/// Rows of raw fields, header first.
///
/// Blank rows are never stored, so `rows[0]` is the first row that had any
/// content.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawTable {
    pub delimiter: Delimiter,
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    pub fn header(&self) -> Option<&[String]> {
        self.rows.first().map(Vec::as_slice)
    }

    /// Rows after the header.
    pub fn data_rows(&self) -> &[Vec<String>] {
        self.rows.get(1..).unwrap_or_default()
    }

    /// True when there is a header and at least one data row.
    pub fn has_data(&self) -> bool {
        self.rows.len() >= 2
    }
}

/// Tokenizes `text` with a sniffed delimiter.
pub fn tokenize(text: &str) -> RawTable {
    tokenize_with(text, detect_delimiter(text))
}

/// Tokenizes `text` with a known delimiter.
///
/// Quoted fields may contain the delimiter and newlines; `""` inside quotes
/// is a literal quote. Fields are trimmed.
pub fn tokenize_with(text: &str, delimiter: Delimiter) -> RawTable {
    let separator = delimiter.as_char();
    let mut rows = Vec::new();
    let mut row: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = text.trim_start_matches('\u{FEFF}').chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if !in_quotes => {
                in_quotes = true;
            }
            '"' => {
                if chars.peek() == Some(&'"') {
                    current.push('"');
                    chars.next();
                } else {
                    in_quotes = false;
                }
            }
            c if c == separator && !in_quotes => {
                row.push(current.trim().to_string());
                current.clear();
            }
            '\r' if !in_quotes && chars.peek() == Some(&'\n') => {
                chars.next();
                finish_row(&mut rows, &mut row, &mut current);
            }
            '\n' if !in_quotes => {
                finish_row(&mut rows, &mut row, &mut current);
            }
            _ => current.push(c),
        }
    }
    finish_row(&mut rows, &mut row, &mut current);

    RawTable { delimiter, rows }
}

fn finish_row(rows: &mut Vec<Vec<String>>, row: &mut Vec<String>, current: &mut String) {
    row.push(current.trim().to_string());
    current.clear();
    let fields = std::mem::take(row);
    if fields.iter().any(|field| !field.is_empty()) {
        rows.push(fields);
    }
}
