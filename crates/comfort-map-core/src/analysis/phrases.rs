//! Favorite-phrase extraction: recurring word trigrams with substance.

use crate::text;
use crate::word_lists::{PHRASE_EXCEPTIONS, is_stopword};

use super::ranked_counts;
use super::reports::PhraseCount;

/// How many ranked phrases the extractor returns.
const TOP_PHRASES: usize = 20;

/// Trigram window width.
const NGRAM: usize = 3;

/// Extract the top 20 most frequent substantive trigrams.
///
/// Windows slide within each message only; no trigram spans a message
/// boundary. A window qualifies when every token is either not a stopword or
/// one of the exceptions ("not", "very", "really") that carry semantic
/// weight despite being stoplisted.
#[tracing::instrument(skip_all, fields(message_count = messages.len()))]
pub fn extract(messages: &[String]) -> Vec<PhraseCount> {
    let qualifying = messages.iter().flat_map(|message| {
        let words = text::tokenize_words(message);
        let mut found = Vec::new();
        for window in words.windows(NGRAM) {
            if window.iter().all(|w| has_substance(w)) {
                found.push(window.join(" "));
            }
        }
        found
    });

    ranked_counts(qualifying, TOP_PHRASES)
        .into_iter()
        .map(|(phrase, count)| PhraseCount { phrase, count })
        .collect()
}

fn has_substance(word: &str) -> bool {
    !is_stopword(word) || PHRASE_EXCEPTIONS.contains(word)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn msgs(texts: &[&str]) -> Vec<String> {
        texts.iter().map(|t| (*t).to_string()).collect()
    }

    #[test]
    fn empty_messages_give_empty_list() {
        assert!(extract(&[]).is_empty());
        assert!(extract(&msgs(&["", "  "])).is_empty());
    }

    #[test]
    fn counts_repeated_trigram() {
        let messages = msgs(&[
            "please review contract terms",
            "you should review contract terms today",
        ]);
        let phrases = extract(&messages);
        let hit = phrases
            .iter()
            .find(|p| p.phrase == "review contract terms")
            .expect("repeated trigram present");
        assert_eq!(hit.count, 2);
    }

    #[test]
    fn stopword_windows_filtered() {
        let phrases = extract(&msgs(&["this is the plan for the meeting"]));
        assert!(phrases.iter().all(|p| !p.phrase.contains("is the")));
    }

    #[test]
    fn exception_words_allowed_in_windows() {
        let phrases = extract(&msgs(&["really great proposal work"]));
        assert!(phrases.iter().any(|p| p.phrase == "really great proposal"));
    }

    #[test]
    fn no_cross_message_windows() {
        // "alpha beta" ends one message and "gamma" starts the next; the
        // trigram "alpha beta gamma" must not appear.
        let phrases = extract(&msgs(&["alpha beta", "gamma delta epsilon"]));
        assert!(phrases.iter().all(|p| p.phrase != "alpha beta gamma"));
        assert!(phrases.iter().any(|p| p.phrase == "gamma delta epsilon"));
    }

    #[test]
    fn at_most_twenty_phrases() {
        let long: Vec<String> = (0u8..26)
            .map(|i| {
                let tag: String = std::iter::repeat_n(char::from(b'a' + i), 3).collect();
                format!("unique{tag} phrase{tag} token{tag}")
            })
            .collect();
        assert_eq!(extract(&long).len(), 20);
    }
}
