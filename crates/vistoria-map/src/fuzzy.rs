//! Fuzzy matching of raw values against closed vocabularies.
//!
//! Strategies run in a fixed order and the first one that accepts any
//! vocabulary entry decides the match:
//!
//! 1. exact, after [`normalize`]
//! 2. exact, after [`strip_punctuation`] (`"AR devolvido"` vs `"A.R. devolvido"`)
//! 3. word overlap: enough input words relate to words of the entry
//!
//! Within a strategy the first entry in vocabulary order wins.

use rapidfuzz::distance::jaro_winkler;
use vistoria_model::Vocabulary;

use crate::normalize::{normalize, strip_punctuation};

/// Shortest word length eligible for typo tolerance.
const TYPO_MIN_CHARS: usize = 4;

/// Jaro-Winkler similarity at which two words count as the same word.
const TYPO_MIN_SIMILARITY: f64 = 0.92;

/// Which strategy produced a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
    Exact,
    IgnoringPunctuation,
    WordOverlap,
}

type Strategy = fn(&str, &str) -> bool;

const STRATEGIES: [(MatchKind, Strategy); 3] = [
    (MatchKind::Exact, exact),
    (MatchKind::IgnoringPunctuation, ignoring_punctuation),
    (MatchKind::WordOverlap, word_overlap),
];

/// Finds the entry of `entries` that `raw` most plausibly means.
///
/// Returns the entry's index and the strategy that accepted it, or `None`
/// for blank input or when no strategy accepts any entry.
pub fn match_in(raw: &str, entries: &[&str]) -> Option<(usize, MatchKind)> {
    let value = normalize(raw);
    if value.is_empty() {
        return None;
    }
    STRATEGIES.iter().find_map(|(kind, accepts)| {
        entries
            .iter()
            .position(|entry| accepts(&value, entry))
            .map(|index| (index, *kind))
    })
}

/// Resolves `raw` to a value of vocabulary `V`.
pub fn match_closest<V: Vocabulary>(raw: &str) -> Option<V> {
    match_closest_with_kind::<V>(raw).map(|(value, _)| value)
}

/// Like [`match_closest`], also reporting how the value matched.
pub fn match_closest_with_kind<V: Vocabulary>(raw: &str) -> Option<(V, MatchKind)> {
    let labels = V::labels();
    match_in(raw, &labels).map(|(index, kind)| (V::ALL[index], kind))
}

fn exact(value: &str, entry: &str) -> bool {
    value == normalize(entry)
}

fn ignoring_punctuation(value: &str, entry: &str) -> bool {
    strip_punctuation(value) == strip_punctuation(entry)
}

/// Accepts when at least 70% (rounded up, minimum one) of the entry's word
/// count is reached by input words that relate to some entry word.
fn word_overlap(value: &str, entry: &str) -> bool {
    let entry = normalize(entry);
    let value_words = significant_words(value);
    let entry_words = significant_words(&entry);
    if value_words.is_empty() || entry_words.is_empty() {
        return false;
    }

    let matching = value_words
        .iter()
        .filter(|word| entry_words.iter().any(|other| words_relate(word, other)))
        .count();
    let needed = (entry_words.len() * 7).div_ceil(10).max(1);
    matching >= needed
}

fn significant_words(value: &str) -> Vec<&str> {
    value
        .split(' ')
        .filter(|word| word.chars().count() > 1)
        .collect()
}

/// Containment either way, or a single-typo near miss on longer words.
fn words_relate(a: &str, b: &str) -> bool {
    if a.contains(b) || b.contains(a) {
        return true;
    }
    a.chars().count() >= TYPO_MIN_CHARS
        && b.chars().count() >= TYPO_MIN_CHARS
        && jaro_winkler::similarity(a.chars(), b.chars()) >= TYPO_MIN_SIMILARITY
}

#[cfg(test)]
mod tests {
    use super::*;
    use vistoria_model::{Postura, Status};

    #[test]
    fn test_exact_normalized() {
        assert_eq!(match_closest::<Status>("A.R. Devolvido"), Some(Status::ArDevolvido));
        assert_eq!(match_closest::<Postura>("comgas"), Some(Postura::Comgas));
        assert_eq!(
            match_closest_with_kind::<Postura>("  area   publica "),
            Some((Postura::AreaPublica, MatchKind::Exact))
        );
    }

    #[test]
    fn test_ignoring_punctuation() {
        assert_eq!(
            match_closest_with_kind::<Status>("AR entregue"),
            Some((Status::ArEntregue, MatchKind::IgnoringPunctuation))
        );
    }

    #[test]
    fn test_word_overlap_with_typo() {
        assert_eq!(
            match_closest_with_kind::<Status>("ação necesaria"),
            Some((Status::AcaoNecessaria, MatchKind::WordOverlap))
        );
    }

    #[test]
    fn test_word_overlap_partial_words() {
        // "concluida" relates to "concluída"; "demanda" is shared.
        assert_eq!(match_closest::<Status>("demanda concluida ok"), Some(Status::DemandaConcluida));
        assert_eq!(
            match_closest::<Postura>("manejo arbóreo 2"),
            Some(Postura::ManejoArboreo)
        );
    }

    #[test]
    fn test_no_match() {
        assert_eq!(match_closest::<Status>("xyz"), None);
        assert_eq!(match_closest::<Status>("Arquivado"), None);
        assert_eq!(match_closest::<Postura>(""), None);
        assert_eq!(match_closest::<Postura>("   "), None);
    }

    #[test]
    fn test_one_shared_word_is_not_enough_for_two_word_entries() {
        // Needs ceil(0.7 * 2) = 2 related words.
        assert_eq!(match_closest::<Status>("demanda nova"), None);
    }

    #[test]
    fn test_first_entry_wins() {
        assert_eq!(match_in("b", &["a", "B", "b"]), Some((1, MatchKind::Exact)));
        assert_eq!(match_in("obras", &[]), None);
    }

    #[test]
    fn test_words_relate() {
        assert!(words_relate("necesaria", "necessaria"));
        assert!(words_relate("obra", "obras"));
        assert!(!words_relate("devolvida", "concluida"));
        assert!(!words_relate("abc", "abd"));
    }
}
