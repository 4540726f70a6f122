//! Email-shaped habits: message length, greeting style, signature style.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::text::safe_ratio;

use super::reports::EmailPatterns;

/// How many trailing lines are scanned for a signature.
const SIGNATURE_LINES: usize = 3;

/// Greeting categories with their anchored patterns.
///
/// Checked in order against the lowercased trimmed message; the first match
/// wins, so each message contributes to at most one category.
static GREETING_PATTERNS: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    [
        (r"^(hi|hello|hey)\s+\w+", "informal"),
        (r"^(dear|greetings)\s+\w+", "formal"),
        (r"^good\s+(morning|afternoon|evening)", "time_based"),
        (r"^\w+,", "name_only"),
    ]
    .into_iter()
    .map(|(pattern, style)| (Regex::new(pattern).expect("valid regex"), style))
    .collect()
});

/// Signature categories with their search patterns.
///
/// All categories are checked against the lowercased tail of every message,
/// so one sign-off can tally several categories ("Thanks and best regards"
/// is both grateful and formal). Markers are raw substrings, not whole
/// words; "minimal" alone anchors to the start of the tail.
static SIGNATURE_PATTERNS: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    [
        (r"(best|regards|sincerely)", "formal"),
        (r"(thanks|thx|ty)", "grateful"),
        (r"(cheers|talk soon)", "casual"),
        (r"^-\s*\w+", "minimal"),
    ]
    .into_iter()
    .map(|(pattern, style)| (Regex::new(pattern).expect("valid regex"), style))
    .collect()
});

/// Analyze message-level habits across a corpus.
#[tracing::instrument(skip_all, fields(message_count = messages.len()))]
pub fn analyze(messages: &[String]) -> EmailPatterns {
    let total_tokens: usize = messages.iter().map(|m| m.split_whitespace().count()).sum();

    EmailPatterns {
        avg_email_length: safe_ratio(total_tokens as f64, messages.len() as f64),
        greeting_style: tally_greetings(messages),
        signature_style: tally_signatures(messages),
    }
}

fn tally_greetings(messages: &[String]) -> BTreeMap<String, usize> {
    let mut tallies = BTreeMap::new();

    for message in messages {
        let lowered = message.trim().to_lowercase();
        for (pattern, style) in GREETING_PATTERNS.iter() {
            if pattern.is_match(&lowered) {
                *tallies.entry((*style).to_string()).or_insert(0) += 1;
                break;
            }
        }
    }

    tallies
}

fn tally_signatures(messages: &[String]) -> BTreeMap<String, usize> {
    let mut tallies = BTreeMap::new();

    for message in messages {
        let lines: Vec<&str> = message.trim().lines().collect();
        let tail_start = lines.len().saturating_sub(SIGNATURE_LINES);
        let tail = lines[tail_start..].join(" ").to_lowercase();

        for (pattern, style) in SIGNATURE_PATTERNS.iter() {
            if pattern.is_match(&tail) {
                *tallies.entry((*style).to_string()).or_insert(0) += 1;
            }
        }
    }

    tallies
}

#[cfg(test)]
mod tests {
    use super::*;

    fn msgs(texts: &[&str]) -> Vec<String> {
        texts.iter().map(|t| (*t).to_string()).collect()
    }

    #[test]
    fn empty_corpus_is_zeroed() {
        let patterns = analyze(&[]);
        assert_eq!(patterns.avg_email_length, 0.0);
        assert!(patterns.greeting_style.is_empty());
        assert!(patterns.signature_style.is_empty());
    }

    #[test]
    fn avg_length_is_mean_token_count() {
        let patterns = analyze(&msgs(&["one two three", "four five"]));
        assert_eq!(patterns.avg_email_length, 2.5);
    }

    #[test]
    fn greeting_first_match_wins() {
        // "Hi Sarah," matches both informal and name_only; only informal
        // tallies because categories are checked in order.
        let patterns = analyze(&msgs(&["Hi Sarah, quick question about the draft."]));
        assert_eq!(patterns.greeting_style.get("informal"), Some(&1));
        assert_eq!(patterns.greeting_style.get("name_only"), None);
    }

    #[test]
    fn greeting_categories() {
        let patterns = analyze(&msgs(&[
            "Hey John, are you in?",
            "Dear Ms. Smith, please find attached.",
            "Good morning everyone.",
            "Sarah, the numbers look off.",
            "No greeting at all here.",
        ]));
        assert_eq!(patterns.greeting_style.get("informal"), Some(&1));
        assert_eq!(patterns.greeting_style.get("formal"), Some(&1));
        assert_eq!(patterns.greeting_style.get("time_based"), Some(&1));
        assert_eq!(patterns.greeting_style.get("name_only"), Some(&1));
        let total: usize = patterns.greeting_style.values().sum();
        assert_eq!(total, 4);
    }

    #[test]
    fn signature_categories_are_cumulative() {
        // One sign-off tallies both grateful and formal.
        let patterns = analyze(&msgs(&["See attached.\nThanks and best regards,\nKay"]));
        assert_eq!(patterns.signature_style.get("grateful"), Some(&1));
        assert_eq!(patterns.signature_style.get("formal"), Some(&1));
    }

    #[test]
    fn signature_scans_only_last_three_lines() {
        let patterns = analyze(&msgs(&[
            "Thanks for the heads up.\nline two\nline three\nline four\nKay",
        ]));
        // "thanks" sits on the first line, outside the 3-line tail.
        assert_eq!(patterns.signature_style.get("grateful"), None);
    }

    #[test]
    fn minimal_signature_anchors_to_tail_start() {
        let patterns = analyze(&msgs(&["All set for tomorrow.\n- Kay"]));
        assert_eq!(patterns.signature_style.get("minimal"), None);

        let patterns = analyze(&msgs(&["- Kay"]));
        assert_eq!(patterns.signature_style.get("minimal"), Some(&1));
    }

    #[test]
    fn casual_signoff() {
        let patterns = analyze(&msgs(&["Draft is done.\nCheers,\nJ"]));
        assert_eq!(patterns.signature_style.get("casual"), Some(&1));
    }
}
