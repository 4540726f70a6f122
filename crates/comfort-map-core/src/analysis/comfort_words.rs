//! Comfort-word extraction: an author's most-leaned-on vocabulary.

use crate::text;

use super::ranked_counts;
use super::reports::WordCount;

/// How many ranked words the extractor returns; callers slice further.
const TOP_WORDS: usize = 30;

/// Extract the top 30 most frequent meaningful words from the concatenated
/// corpus, descending by count, ties broken by first occurrence.
#[tracing::instrument(skip_all, fields(text_len = full_text.len()))]
pub fn extract(full_text: &str) -> Vec<WordCount> {
    let meaningful = text::tokenize_words(full_text)
        .into_iter()
        .filter(|w| text::is_meaningful(w));

    ranked_counts(meaningful, TOP_WORDS)
        .into_iter()
        .map(|(word, count)| WordCount { word, count })
        .collect()
}
