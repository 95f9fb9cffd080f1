//! Text normalization for header and value comparison.

use unicode_normalization::UnicodeNormalization;

/// Lowercases, strips diacritics, and collapses whitespace/underscores.
///
/// `"  Data_da   Vistória "` becomes `"data da vistoria"`.
pub fn normalize(raw: &str) -> String {
    let folded: String = raw
        .to_lowercase()
        .nfd()
        .filter(|c| !is_combining_diacritic(*c))
        .collect();
    collapse(&folded, |c| c.is_whitespace() || c == '_')
}

/// [`normalize`] with `.` and `-` removed as well.
///
/// `"A.R. Devolvido"` becomes `"ar devolvido"`.
pub fn strip_punctuation(raw: &str) -> String {
    let stripped = normalize(raw).replace(['.', '-'], "");
    collapse(&stripped, char::is_whitespace)
}

/// True when two labels are equal after normalization, with or without
/// punctuation.
pub fn same_label(a: &str, b: &str) -> bool {
    normalize(a) == normalize(b) || strip_punctuation(a) == strip_punctuation(b)
}

fn is_combining_diacritic(c: char) -> bool {
    ('\u{0300}'..='\u{036F}').contains(&c)
}

fn collapse(value: &str, is_separator: impl Fn(char) -> bool) -> String {
    value
        .split(is_separator)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
