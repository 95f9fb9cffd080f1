//! Delimiter sniffing.

use vistoria_model::Delimiter;

const CANDIDATES: [Delimiter; 3] = [Delimiter::Comma, Delimiter::Semicolon, Delimiter::Tab];

/// Picks the delimiter that occurs most often in the first line.
///
/// Only a strict maximum wins; ties and lines without any candidate fall
/// back to comma.
pub fn detect_delimiter(text: &str) -> Delimiter {
    let first_line = text
        .trim_start_matches('\u{FEFF}')
        .split('\n')
        .next()
        .unwrap_or_default();

    let counts: Vec<(Delimiter, usize)> = CANDIDATES
        .iter()
        .map(|d| (*d, first_line.matches(d.as_char()).count()))
        .collect();

    let max = counts.iter().map(|(_, n)| *n).max().unwrap_or(0);
    if max == 0 {
        return Delimiter::Comma;
    }
    let mut winners = counts.iter().filter(|(_, n)| *n == max);
    match (winners.next(), winners.next()) {
        (Some((delimiter, _)), None) => *delimiter,
        _ => Delimiter::Comma,
    }
}
