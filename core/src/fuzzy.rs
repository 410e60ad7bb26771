//! Spelling correction against the index vocabulary.

use serde::Serialize;

use crate::config::{SearchConfig, DISTANCE_SENTINEL};
use crate::index::Index;
use crate::tokenizer::clean_token;

/// Levenshtein distance with unit costs. Pairs whose lengths differ by more
/// than `max_length_diff` are not compared and get [`DISTANCE_SENTINEL`].
pub fn bounded_levenshtein(a: &str, b: &str, max_length_diff: usize) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a.len().abs_diff(b.len()) > max_length_diff {
        return DISTANCE_SENTINEL;
    }

    let mut prev_row: Vec<usize> = (0..=b.len()).collect();
    let mut curr_row = vec![0; b.len() + 1];
    for i in 1..=a.len() {
        curr_row[0] = i;
        for j in 1..=b.len() {
            curr_row[j] = if a[i - 1] == b[j - 1] {
                prev_row[j - 1]
            } else {
                1 + prev_row[j].min(curr_row[j - 1]).min(prev_row[j - 1])
            };
        }
        std::mem::swap(&mut prev_row, &mut curr_row);
    }
    prev_row[b.len()]
}

/// Linear scan for the closest term within `config.max_edit_distance`.
/// Only candidates sharing the first character and within the length window
/// are compared; the first term at the best distance wins.
pub fn closest_term<'a>(vocabulary: &'a [String], word: &str, config: &SearchConfig) -> Option<&'a str> {
    let first = word.chars().next()?;
    let word_len = word.chars().count();

    let mut best: Option<(&str, usize)> = None;
    for term in vocabulary {
        if term.chars().count().abs_diff(word_len) > config.max_length_diff {
            continue;
        }
        if term.chars().next() != Some(first) {
            continue;
        }
        let dist = bounded_levenshtein(word, term, config.max_length_diff);
        if dist <= config.max_edit_distance && best.map_or(true, |(_, d)| dist < d) {
            best = Some((term.as_str(), dist));
        }
    }
    best.map(|(term, _)| term)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Correction {
    pub original: String,
    pub suggestion: String,
}

/// Per-word corrections for a whole query line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct QueryCorrection {
    pub corrections: Vec<Correction>,
    /// The query with each corrected word replaced, words joined by one space.
    pub corrected_query: String,
}

impl QueryCorrection {
    pub fn is_changed(&self) -> bool { !self.corrections.is_empty() }
}

impl Index {
    /// Closest vocabulary term for an out-of-vocabulary word. `None` when the
    /// word cleans to nothing, is already indexed, or nothing is close enough.
    pub fn correct(&self, word: &str) -> Option<&str> {
        let word = clean_token(word);
        if word.is_empty() || self.contains_term(&word) {
            return None;
        }
        closest_term(&self.vocabulary, &word, &self.config)
    }

    pub fn correct_query(&self, text: &str) -> QueryCorrection {
        let mut out = QueryCorrection::default();
        let mut words: Vec<&str> = Vec::new();
        for word in text.split_whitespace() {
            match self.correct(word) {
                Some(suggestion) => {
                    out.corrections.push(Correction { original: word.to_string(), suggestion: suggestion.to_string() });
                    words.push(suggestion);
                }
                None => words.push(word),
            }
        }
        out.corrected_query = words.join(" ");
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::IndexBuilder;

    #[test]
    fn classic_distances() {
        assert_eq!(bounded_levenshtein("kitten", "sitting", 2), 3);
        assert_eq!(bounded_levenshtein("flaw", "lawn", 2), 2);
        assert_eq!(bounded_levenshtein("same", "same", 2), 0);
        assert_eq!(bounded_levenshtein("", "ab", 2), 2);
    }

    #[test]
    fn length_gap_returns_sentinel() {
        assert_eq!(bounded_levenshtein("ab", "abcde", 2), DISTANCE_SENTINEL);
    }

    #[test]
    fn first_strictly_better_candidate_wins() {
        let vocab: Vec<String> = ["cab", "cap", "cat"].iter().map(|s| s.to_string()).collect();
        // all three are one edit from "caz"
        assert_eq!(closest_term(&vocab, "caz", &SearchConfig::default()), Some("cab"));
    }

    #[test]
    fn candidates_must_share_first_char() {
        let vocab: Vec<String> = vec!["bat".into()];
        assert_eq!(closest_term(&vocab, "cat", &SearchConfig::default()), None);
    }

    #[test]
    fn distance_three_is_rejected() {
        let vocab: Vec<String> = vec!["sitting".into()];
        assert_eq!(closest_term(&vocab, "sitt", &SearchConfig::default()), None);
        assert_eq!(closest_term(&vocab, "sittxn", &SearchConfig::default()), Some("sitting"));
    }

    #[test]
    fn unbounded_distance_does_not_overflow() {
        let vocab: Vec<String> = vec!["cat".into(), "cobalt".into()];
        let cfg = SearchConfig { max_edit_distance: usize::MAX, ..Default::default() };
        assert_eq!(closest_term(&vocab, "ct", &cfg), Some("cat"));

        let idx = pets().with_config(cfg);
        assert_eq!(idx.correct("ct"), Some("cat"));
    }

    #[test]
    fn tighter_distance_rejects_two_edits() {
        let vocab: Vec<String> = vec!["sitting".into()];
        assert_eq!(closest_term(&vocab, "sittxn", &SearchConfig::default()), Some("sitting"));
        let cfg = SearchConfig { max_edit_distance: 1, ..Default::default() };
        assert_eq!(closest_term(&vocab, "sittxn", &cfg), None);
        assert_eq!(closest_term(&vocab, "sittin", &cfg), Some("sitting"));
    }

    #[test]
    fn zero_length_window_skips_longer_terms() {
        let idx = pets();
        assert_eq!(idx.correct("ct"), Some("cat"));
        let idx = idx.with_config(SearchConfig { max_length_diff: 0, ..Default::default() });
        // "cat" is one character longer than "ct"
        assert_eq!(idx.correct("ct"), None);
        assert_eq!(idx.correct("cxt"), Some("cat"));
    }

    fn pets() -> Index {
        let mut b = IndexBuilder::new();
        b.add_document("doc1", "The cat sat on the mat").unwrap();
        b.add_document("doc2", "Cats and dogs are friends").unwrap();
        b.finalize()
    }

    #[test]
    fn corrects_typo() {
        let idx = pets();
        assert_eq!(idx.correct("ct"), Some("cat"));
        assert_eq!(idx.correct("Frends!"), Some("friends"));
    }

    #[test]
    fn known_or_empty_words_are_not_corrected() {
        let idx = pets();
        assert_eq!(idx.correct("cat"), None);
        assert_eq!(idx.correct("DOGS"), None);
        assert_eq!(idx.correct("..."), None);
        assert_eq!(idx.correct("xylophone"), None);
    }

    #[test]
    fn correct_query_rebuilds_line() {
        let idx = pets();
        let qc = idx.correct_query("frends of ct");
        assert!(qc.is_changed());
        assert_eq!(qc.corrected_query, "friends of cat");
        assert_eq!(
            qc.corrections,
            vec![
                Correction { original: "frends".into(), suggestion: "friends".into() },
                Correction { original: "ct".into(), suggestion: "cat".into() },
            ]
        );
    }
}
