//! Per-author linguistic feature extraction.
//!
//! [`analyze_person`] orchestrates independent metric sub-analyses that all
//! read the same inputs and fill disjoint parts of one [`AuthorProfile`].
//! Each sub-analysis is a pure function in its own module.

use std::collections::HashMap;

pub mod comfort_words;
pub mod diversity;
pub mod email_patterns;
pub mod fingerprint;
pub mod phrases;
pub mod reports;
pub mod style;

pub use reports::AuthorProfile;

use crate::error::{AnalysisError, AnalysisResult};

/// Analyze one author's messages into a complete [`AuthorProfile`].
///
/// Messages are in input order; order matters for starter/closing phrase
/// extraction but not for frequency counts. An empty message list is legal
/// and yields an all-zero profile.
///
/// Known quirk: whole-corpus metrics (comfort words, writing style,
/// diversity, transition counts) run over the messages joined with a single
/// space, so the last token of one message can merge with the first token of
/// the next. Preserved as documented behavior; impact is negligible at
/// corpus scale.
#[tracing::instrument(skip(messages), fields(person, message_count = messages.len()))]
pub fn analyze_person(person: &str, messages: &[String]) -> AnalysisResult<AuthorProfile> {
    if person.trim().is_empty() {
        return Err(AnalysisError::BlankAuthor);
    }

    let full_text = messages.join(" ");

    Ok(AuthorProfile {
        person: person.to_string(),
        total_emails: messages.len(),
        comfort_words: comfort_words::extract(&full_text),
        favorite_phrases: phrases::extract(messages),
        writing_style: style::analyze(&full_text),
        vocabulary_diversity: diversity::analyze(&full_text),
        linguistic_fingerprint: fingerprint::build(messages, &full_text),
        email_patterns: email_patterns::analyze(messages),
    })
}

/// Count items and rank them: descending by count, ties broken by first
/// encounter order, truncated to `top_n`.
///
/// The stable tie-break keeps profiles deterministic regardless of hash-map
/// iteration order.
pub(crate) fn ranked_counts<I>(items: I, top_n: usize) -> Vec<(String, usize)>
where
    I: IntoIterator<Item = String>,
{
    let mut tallies: HashMap<String, (usize, usize)> = HashMap::new();

    for (index, item) in items.into_iter().enumerate() {
        let entry = tallies.entry(item).or_insert((0, index));
        entry.0 += 1;
    }

    let mut ranked: Vec<(String, usize, usize)> = tallies
        .into_iter()
        .map(|(item, (count, first))| (item, count, first))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.2.cmp(&b.2)));
    ranked.truncate(top_n);

    ranked.into_iter().map(|(item, count, _)| (item, count)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn msgs(texts: &[&str]) -> Vec<String> {
        texts.iter().map(|t| (*t).to_string()).collect()
    }

    #[test]
    fn empty_corpus_yields_zero_profile() {
        let profile = analyze_person("kay.mann@enron.com", &[]).unwrap();
        assert_eq!(profile.total_emails, 0);
        assert!(profile.comfort_words.is_empty());
        assert!(profile.favorite_phrases.is_empty());
        assert_eq!(profile.writing_style.avg_sentence_length, 0.0);
        assert_eq!(profile.writing_style.exclamation_usage, 0.0);
        assert_eq!(profile.vocabulary_diversity.lexical_diversity, 0.0);
        assert_eq!(profile.email_patterns.avg_email_length, 0.0);
        assert!(profile.linguistic_fingerprint.starter_phrases.is_empty());
    }

    #[test]
    fn blank_author_rejected() {
        assert!(analyze_person("  ", &[]).is_err());
        assert!(analyze_person("", &[]).is_err());
    }

    #[test]
    fn person_and_count_echoed() {
        let messages = msgs(&["Hi Sarah, the deadline moved.", "Thanks again."]);
        let profile = analyze_person("sarah", &messages).unwrap();
        assert_eq!(profile.person, "sarah");
        assert_eq!(profile.total_emails, 2);
    }

    #[test]
    fn analysis_is_deterministic() {
        let messages = msgs(&[
            "The deadline moved again. However, the contract review is done!",
            "Really great work on the proposal. Talk soon.",
            "URGENT: please review the contract draft before Friday.",
        ]);
        let a = analyze_person("det", &messages).unwrap();
        let b = analyze_person("det", &messages).unwrap();
        assert_eq!(
            serde_json::to_string(&a).unwrap(),
            serde_json::to_string(&b).unwrap()
        );
    }

    #[test]
    fn ranked_counts_orders_and_breaks_ties_by_first_seen() {
        let items = ["beta", "alpha", "beta", "gamma", "alpha", "beta"]
            .iter()
            .map(|s| (*s).to_string());
        let ranked = ranked_counts(items, 10);
        assert_eq!(
            ranked,
            vec![
                ("beta".to_string(), 3),
                ("alpha".to_string(), 2),
                ("gamma".to_string(), 1),
            ]
        );
    }

    #[test]
    fn ranked_counts_truncates() {
        let items = ["a", "b", "c", "d"].iter().map(|s| (*s).to_string());
        assert_eq!(ranked_counts(items, 2).len(), 2);
    }
}
