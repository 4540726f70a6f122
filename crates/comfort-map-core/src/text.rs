//! Text processing utilities shared by the analysis modules.
//!
//! Provides word tokenization, sentence splitting with abbreviation and
//! decimal awareness, the `safe_ratio` divide-by-zero guard, and a
//! multi-pattern substring counter.

use aho_corasick::AhoCorasick;
use regex::Regex;
use std::sync::LazyLock;

use crate::dictionaries::abbreviations::is_abbreviation;
use crate::word_lists::is_stopword;

/// Regex for URLs and email addresses near a period, which must not split.
static URL_OR_EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:https?://|www\.)\S+|\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}")
        .expect("valid regex")
});

/// Lowercase word tokens: splits on punctuation and whitespace, keeps
/// word-internal apostrophes ("don't" stays one token).
pub fn tokenize_words(text: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();

    for ch in text.chars() {
        if ch.is_alphanumeric() || ch == '\'' {
            current.extend(ch.to_lowercase());
        } else {
            flush_token(&mut current, &mut words);
        }
    }
    flush_token(&mut current, &mut words);

    words
}

fn flush_token(current: &mut String, words: &mut Vec<String>) {
    if current.is_empty() {
        return;
    }
    let trimmed = current.trim_matches('\'');
    if !trimmed.is_empty() {
        words.push(trimmed.to_string());
    }
    current.clear();
}

/// The `meaningful token` predicate shared by frequency extraction:
/// alphabetic-only, not a stopword, longer than 3 characters.
pub fn is_meaningful(word: &str) -> bool {
    word.chars().all(char::is_alphabetic) && !is_stopword(word) && word.chars().count() > 3
}

/// Divide, returning 0.0 when the denominator is zero.
///
/// Every ratio and mean in the analysis pipeline goes through this guard so
/// degenerate corpora (no messages, no sentences, no words) produce zeroed
/// metrics instead of NaN or a panic.
pub fn safe_ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        0.0
    } else {
        numerator / denominator
    }
}

/// Count raw, non-overlapping substring occurrences of each needle in one
/// pass over the haystack. Returns counts in needle order.
///
/// The fixed vocabularies this is used with share no prefix/suffix overlap,
/// so the counts match counting each needle independently.
pub fn substring_counts(haystack: &str, needles: &[&str]) -> Vec<usize> {
    let mut counts = vec![0usize; needles.len()];
    if haystack.is_empty() || needles.is_empty() {
        return counts;
    }
    let ac = AhoCorasick::new(needles).expect("valid literal patterns");
    for m in ac.find_iter(haystack) {
        counts[m.pattern().as_usize()] += 1;
    }
    counts
}

/// Split text into sentences.
///
/// A character scan with context checks at each `.`/`!`/`?`: known
/// abbreviations, single-letter initials, decimal numbers, ellipses, and
/// URLs/emails do not end a sentence.
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn split_sentences(text: &str) -> Vec<String> {
    if text.trim().is_empty() {
        return Vec::new();
    }

    const MIN_SENTENCE_CHARS: usize = 3;
    let chars: Vec<char> = text.chars().collect();
    let mut sentences = Vec::new();
    let mut current = String::new();

    for (i, &ch) in chars.iter().enumerate() {
        current.push(ch);
        if matches!(ch, '.' | '!' | '?') && boundary_at(&chars, i, &current) {
            let sentence = current.trim();
            if sentence.chars().count() >= MIN_SENTENCE_CHARS {
                sentences.push(sentence.to_string());
            }
            current.clear();
        }
    }

    let sentence = current.trim();
    if sentence.chars().count() >= MIN_SENTENCE_CHARS {
        sentences.push(sentence.to_string());
    }

    sentences
}

/// Decide whether the terminator at `pos` ends a sentence.
fn boundary_at(chars: &[char], pos: usize, current: &str) -> bool {
    if pos + 1 == chars.len() {
        return true;
    }

    let next = next_significant_char(chars, pos);

    // ! and ? split unless clearly mid-sentence (lowercase continuation).
    if chars[pos] != '.' {
        return !next.is_some_and(char::is_lowercase);
    }

    let before = word_before(chars, pos);
    if is_abbreviation(&before) || is_initial(&before) {
        return false;
    }

    // Decimal numbers: digit on both sides of the period.
    if before.chars().last().is_some_and(|c| c.is_ascii_digit())
        && chars.get(pos + 1).is_some_and(char::is_ascii_digit)
    {
        return false;
    }

    // Mid-ellipsis: wait for the last period of "..." to decide.
    if chars.get(pos + 1) == Some(&'.') {
        return false;
    }

    if period_inside_url_or_email(current) {
        return false;
    }

    match next {
        Some(c) if c.is_lowercase() => false,
        _ => true,
    }
}

/// First non-whitespace character after `pos`, skipping a leading quote.
fn next_significant_char(chars: &[char], pos: usize) -> Option<char> {
    chars[pos + 1..]
        .iter()
        .copied()
        .find(|c| !c.is_whitespace())
        .and_then(|c| {
            if c == '"' || c == '\'' {
                chars[pos + 1..]
                    .iter()
                    .copied()
                    .filter(|c| !c.is_whitespace())
                    .nth(1)
            } else {
                Some(c)
            }
        })
}

/// The word immediately before position `pos` (periods included, so dotted
/// abbreviations like "i.e." survive).
fn word_before(chars: &[char], pos: usize) -> String {
    let mut start = pos;
    while start > 0 {
        let c = chars[start - 1];
        if c.is_alphanumeric() || c == '.' {
            start -= 1;
        } else {
            break;
        }
    }
    chars[start..pos].iter().collect()
}

/// Single uppercase letter, or dotted initials like "J.K".
fn is_initial(word: &str) -> bool {
    let stripped = word.trim_matches('.');
    if stripped.chars().count() == 1 && stripped.chars().all(char::is_uppercase) {
        return true;
    }
    word.contains('.') && word.chars().all(|c| c == '.' || c.is_uppercase())
}

/// True when the terminator just pushed onto `current` sits inside a URL or
/// email address (the match runs all the way to the end of the tail).
fn period_inside_url_or_email(current: &str) -> bool {
    let tail: String = {
        let mut t: Vec<char> = current.chars().rev().take(60).collect();
        t.reverse();
        t.into_iter().collect()
    };
    URL_OR_EMAIL.find_iter(&tail).any(|m| m.end() == tail.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokenize_basic() {
        let words = tokenize_words("Hello, world! This is a test.");
        assert_eq!(words, vec!["hello", "world", "this", "is", "a", "test"]);
    }

    #[test]
    fn tokenize_keeps_internal_apostrophes() {
        let words = tokenize_words("Don't worry, it's O'Brien's call.");
        assert_eq!(words, vec!["don't", "worry", "it's", "o'brien's", "call"]);
    }

    #[test]
    fn tokenize_strips_quote_marks() {
        let words = tokenize_words("'quoted' text");
        assert_eq!(words, vec!["quoted", "text"]);
    }

    #[test]
    fn meaningful_filters_stopwords_and_short_words() {
        assert!(is_meaningful("deadline"));
        assert!(!is_meaningful("the"));
        assert!(!is_meaningful("cat"));
        assert!(!is_meaningful("forwarded"));
        assert!(!is_meaningful("42nd"));
    }

    #[test]
    fn safe_ratio_guards_zero() {
        assert_eq!(safe_ratio(5.0, 0.0), 0.0);
        assert_eq!(safe_ratio(5.0, 2.0), 2.5);
    }

    #[test]
    fn substring_counts_in_order() {
        let counts = substring_counts("very very really", &["very", "really"]);
        assert_eq!(counts, vec![2, 1]);
    }

    #[test]
    fn substring_counts_empty_haystack() {
        assert_eq!(substring_counts("", &["very"]), vec![0]);
    }

    #[test]
    fn basic_sentences() {
        let sentences = split_sentences("This is a sentence. This is another sentence.");
        assert_eq!(sentences.len(), 2);
        assert_eq!(sentences[0], "This is a sentence.");
    }

    #[test]
    fn abbreviations_not_split() {
        let sentences = split_sentences("Dr. Smith went to the store. He bought milk.");
        assert_eq!(sentences.len(), 2);
        assert!(sentences[0].contains("Dr. Smith"));
    }

    #[test]
    fn decimals_not_split() {
        let sentences = split_sentences("The price is 3.14 dollars. That's cheap.");
        assert_eq!(sentences.len(), 2);
        assert!(sentences[0].contains("3.14"));
    }

    #[test]
    fn exclamation_and_question_split() {
        let sentences = split_sentences("Are you serious? I can't believe it! This is amazing.");
        assert_eq!(sentences.len(), 3);
    }

    #[test]
    fn exclamation_before_capital_splits() {
        let sentences = split_sentences("Hello John, this is great! Really great, I must say.");
        assert_eq!(sentences.len(), 2);
    }

    #[test]
    fn ellipsis_not_split_midway() {
        let sentences = split_sentences("Well... maybe not. Fine.");
        assert_eq!(sentences.len(), 2);
    }

    #[test]
    fn url_not_split() {
        let sentences = split_sentences("See www.example.com for details. Thanks.");
        assert_eq!(sentences.len(), 2);
    }

    #[test]
    fn empty_input() {
        assert!(split_sentences("").is_empty());
        assert!(split_sentences("   ").is_empty());
    }
}
