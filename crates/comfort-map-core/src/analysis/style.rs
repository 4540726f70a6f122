//! Writing-style metrics: sentence length, readability, punctuation habits.

use crate::dictionaries::syllables::count_syllables;
use crate::text::{safe_ratio, split_sentences, tokenize_words};

use super::reports::{PunctuationStyle, WritingStyle};

/// Analyze writing style over the full concatenated corpus.
///
/// Reading ease is the Flesch Reading Ease formula:
/// `206.835 - 1.015 * (words/sentences) - 84.6 * (syllables/words)`.
/// All ratios fall back to zero on empty input.
#[tracing::instrument(skip_all, fields(text_len = full_text.len()))]
pub fn analyze(full_text: &str) -> WritingStyle {
    let sentences = split_sentences(full_text);
    let words = tokenize_words(full_text);

    let sentence_count = sentences.len() as f64;
    let word_count = words.len() as f64;

    let avg_sentence_length = safe_ratio(word_count, sentence_count);

    let reading_ease = if sentences.is_empty() || words.is_empty() {
        0.0
    } else {
        let syllables: usize = words.iter().map(|w| count_syllables(w)).sum();
        let words_per_sentence = word_count / sentence_count;
        let syllables_per_word = syllables as f64 / word_count;
        84.6f64.mul_add(-syllables_per_word, 1.015f64.mul_add(-words_per_sentence, 206.835))
    };

    let exclamations = full_text.matches('!').count() as f64;
    let questions = full_text.matches('?').count() as f64;

    let tokens: Vec<&str> = full_text.split_whitespace().collect();
    let all_caps_tokens = tokens
        .iter()
        .filter(|t| t.chars().all(|c| c.is_alphabetic() && c.is_uppercase()))
        .count();

    WritingStyle {
        avg_sentence_length,
        reading_ease,
        exclamation_usage: safe_ratio(exclamations, sentence_count),
        question_usage: safe_ratio(questions, sentence_count),
        uppercase_ratio: safe_ratio(all_caps_tokens as f64, tokens.len() as f64),
        punctuation_style: punctuation_rates(full_text),
    }
}

/// Punctuation occurrences per 1000 characters.
fn punctuation_rates(text: &str) -> PunctuationStyle {
    let total_chars = text.chars().count() as f64;
    let per_1000 = |count: usize| safe_ratio(count as f64, total_chars) * 1000.0;

    let dashes = text.matches('-').count() + text.matches('—').count();

    PunctuationStyle {
        ellipsis_usage: per_1000(text.matches("...").count()),
        dash_usage: per_1000(dashes),
        parenthesis_usage: per_1000(text.matches('(').count()),
        semicolon_usage: per_1000(text.matches(';').count()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_is_all_zero() {
        let style = analyze("");
        assert_eq!(style.avg_sentence_length, 0.0);
        assert_eq!(style.reading_ease, 0.0);
        assert_eq!(style.exclamation_usage, 0.0);
        assert_eq!(style.question_usage, 0.0);
        assert_eq!(style.uppercase_ratio, 0.0);
        assert_eq!(style.punctuation_style.ellipsis_usage, 0.0);
    }

    #[test]
    fn exclamations_per_sentence() {
        // Two sentences, one exclamation mark.
        let style = analyze("Hello John, this is great! Really great, I must say.");
        assert_eq!(style.exclamation_usage, 0.5);
        assert_eq!(style.question_usage, 0.0);
    }

    #[test]
    fn simple_prose_reads_easy() {
        let style = analyze("The cat sat on the mat. The dog ran fast.");
        assert!(style.reading_ease > 80.0);
        assert!(style.avg_sentence_length > 3.0);
    }

    #[test]
    fn dense_prose_reads_hard() {
        let style = analyze(
            "The comprehensive organizational restructuring initiative necessitated \
             interdepartmental communication protocols facilitating dissemination of \
             procedural documentation.",
        );
        assert!(style.reading_ease < 30.0);
    }

    #[test]
    fn uppercase_ratio_counts_whole_tokens() {
        let style = analyze("URGENT deadline TODAY ok");
        assert_eq!(style.uppercase_ratio, 0.5);
    }

    #[test]
    fn punctuation_rates_per_1000_chars() {
        // 100 chars with one semicolon = 10 per 1000.
        let mut text = "a".repeat(99);
        text.push(';');
        let style = analyze(&text);
        assert!((style.punctuation_style.semicolon_usage - 10.0).abs() < 1e-9);
    }

    #[test]
    fn ellipsis_counted_as_sequence() {
        let style = analyze("Well... I guess so...");
        assert!(style.punctuation_style.ellipsis_usage > 0.0);
    }
}
