//! Linguistic fingerprint: opening/closing habits, transition words, and
//! emphasis patterns.

use std::sync::LazyLock;

use regex::Regex;

use crate::text::{split_sentences, substring_counts};
use crate::word_lists::{ABSOLUTELY_DEFINITELY, TRANSITION_WORDS, VERY_REALLY};

use super::ranked_counts;
use super::reports::{EmphasisPatterns, LinguisticFingerprint, SnippetCount, TransitionCount};

/// How many starter/closing snippets and transition words are reported.
const TOP_N: usize = 5;

/// Snippet width in characters.
const SNIPPET_CHARS: usize = 50;

/// Runs of 3+ uppercase letters, a SHOUTING marker.
static ALL_CAPS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[A-Z]{3,}\b").expect("valid regex"));

/// Build the fingerprint from per-message texts plus the concatenated
/// corpus.
///
/// Starters and closings are per message (the first sentence's leading 50
/// characters and the last sentence's trailing 50), so they need message
/// boundaries; transition counting runs over the joined corpus.
#[tracing::instrument(skip_all, fields(message_count = messages.len()))]
pub fn build(messages: &[String], full_text: &str) -> LinguisticFingerprint {
    let mut starters = Vec::new();
    let mut closings = Vec::new();

    for message in messages {
        let sentences = split_sentences(message);
        if let Some(first) = sentences.first() {
            starters.push(first.chars().take(SNIPPET_CHARS).collect::<String>());
        }
        if let Some(last) = sentences.last() {
            closings.push(tail_chars(last, SNIPPET_CHARS));
        }
    }

    LinguisticFingerprint {
        starter_phrases: snippet_counts(starters),
        closing_phrases: snippet_counts(closings),
        transition_words: transition_counts(full_text),
        emphasis_patterns: emphasis(messages),
    }
}

fn snippet_counts(snippets: Vec<String>) -> Vec<SnippetCount> {
    ranked_counts(snippets, TOP_N)
        .into_iter()
        .map(|(snippet, count)| SnippetCount { snippet, count })
        .collect()
}

/// The last `n` characters of `text`.
fn tail_chars(text: &str, n: usize) -> String {
    let total = text.chars().count();
    text.chars().skip(total.saturating_sub(n)).collect()
}

/// Count each transition word as a raw substring over the lowercased corpus
/// and keep the 5 most used.
///
/// Every vocabulary word gets an entry before ranking, so the result always
/// has 5 entries (zero counts included) whenever the vocabulary does. Ties
/// keep vocabulary order.
fn transition_counts(full_text: &str) -> Vec<TransitionCount> {
    let lowered = full_text.to_lowercase();
    let counts = substring_counts(&lowered, &TRANSITION_WORDS);

    let mut ranked: Vec<(usize, &str, usize)> = TRANSITION_WORDS
        .iter()
        .zip(counts)
        .enumerate()
        .map(|(vocab_index, (word, count))| (vocab_index, *word, count))
        .collect();
    ranked.sort_by(|a, b| b.2.cmp(&a.2).then_with(|| a.0.cmp(&b.0)));
    ranked.truncate(TOP_N);

    ranked
        .into_iter()
        .map(|(_, transition, count)| TransitionCount {
            transition: transition.to_string(),
            count,
        })
        .collect()
}

fn emphasis(messages: &[String]) -> EmphasisPatterns {
    let mut all_caps = 0;
    let mut very_really = 0;
    let mut absolutely_definitely = 0;

    for message in messages {
        all_caps += ALL_CAPS.find_iter(message).count();
        let lowered = message.to_lowercase();
        very_really += substring_counts(&lowered, &VERY_REALLY).iter().sum::<usize>();
        absolutely_definitely += substring_counts(&lowered, &ABSOLUTELY_DEFINITELY)
            .iter()
            .sum::<usize>();
    }

    EmphasisPatterns {
        all_caps,
        very_really,
        absolutely_definitely,
    }
}
