//! Vocabulary diversity: lexical diversity and chunk-averaged type-token
//! ratio.

use std::collections::HashSet;

use crate::text::{safe_ratio, tokenize_words};
use crate::word_lists::is_stopword;

use super::reports::VocabularyDiversity;

/// Words per TTR chunk.
const CHUNK_SIZE: usize = 1000;

/// Minimum words for a (final, partial) chunk to count.
const MIN_CHUNK: usize = 100;

/// Analyze vocabulary diversity over the full concatenated corpus.
///
/// Word set here is alphabetic non-stopword tokens with NO minimum length,
/// intentionally different from the comfort-word filter.
#[tracing::instrument(skip_all, fields(text_len = full_text.len()))]
pub fn analyze(full_text: &str) -> VocabularyDiversity {
    let meaningful: Vec<String> = tokenize_words(full_text)
        .into_iter()
        .filter(|w| w.chars().all(char::is_alphabetic) && !is_stopword(w))
        .collect();

    let total_words = meaningful.len();
    let unique_words = meaningful.iter().collect::<HashSet<_>>().len();

    VocabularyDiversity {
        total_words,
        unique_words,
        lexical_diversity: safe_ratio(unique_words as f64, total_words as f64),
        vocabulary_richness: chunked_ttr(&meaningful),
    }
}

/// Mean type-token ratio over sequential chunks.
///
/// Raw TTR is length-biased (longer texts always score lower), so the ratio
/// is computed per 1000-word chunk and averaged. Chunks under 100 words are
/// discarded as unreliable.
fn chunked_ttr(words: &[String]) -> f64 {
    let ttrs: Vec<f64> = words
        .chunks(CHUNK_SIZE)
        .filter(|chunk| chunk.len() >= MIN_CHUNK)
        .map(|chunk| {
            let unique = chunk.iter().collect::<HashSet<_>>().len();
            unique as f64 / chunk.len() as f64
        })
        .collect();

    safe_ratio(ttrs.iter().sum::<f64>(), ttrs.len() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Distinct alphabetic pseudo-words: "waaa", "waab", ...
    fn distinct_words(n: usize) -> String {
        (0..n)
            .map(|i| {
                format!(
                    "w{}{}{}",
                    char::from(b'a' + (i / 676 % 26) as u8),
                    char::from(b'a' + (i / 26 % 26) as u8),
                    char::from(b'a' + (i % 26) as u8)
                )
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    #[test]
    fn empty_text_is_zero() {
        let d = analyze("");
        assert_eq!(d.total_words, 0);
        assert_eq!(d.unique_words, 0);
        assert_eq!(d.lexical_diversity, 0.0);
        assert_eq!(d.vocabulary_richness, 0.0);
    }

    #[test]
    fn lexical_diversity_in_unit_interval() {
        let d = analyze("contract deadline contract review deadline deadline");
        assert!(d.lexical_diversity > 0.0 && d.lexical_diversity <= 1.0);
        assert_eq!(d.total_words, 6);
        assert_eq!(d.unique_words, 3);
        assert_eq!(d.lexical_diversity, 0.5);
    }

    #[test]
    fn no_minimum_length_filter() {
        // "cat" is under the comfort-word length cutoff but counts here.
        let d = analyze("cat dog fox");
        assert_eq!(d.total_words, 3);
    }

    #[test]
    fn short_corpus_has_zero_richness() {
        let d = analyze(&distinct_words(99));
        assert_eq!(d.vocabulary_richness, 0.0);
        assert!(d.lexical_diversity > 0.0);
    }

    #[test]
    fn thousand_distinct_words_score_near_one() {
        let words = distinct_words(1000);
        let d = analyze(&words);
        assert_eq!(d.total_words, 1000);
        assert!((d.vocabulary_richness - 1.0).abs() < 1e-9);
    }

    #[test]
    fn partial_final_chunk_discarded() {
        // 1050 words: one full chunk plus a 50-word tail that is dropped.
        let repeated = format!("{} {}", distinct_words(1000), distinct_words(50));
        let d = analyze(&repeated);
        assert_eq!(d.total_words, 1050);
        // Only the first 1000-word chunk contributes, and it is all distinct.
        assert!((d.vocabulary_richness - 1.0).abs() < 1e-9);
    }
}
