//! Profile structs produced by author analysis.
//!
//! All structs derive `Serialize`, `Deserialize`, and `JsonSchema` for CLI
//! JSON output. Ranked lists are plain `Vec`s and category tallies are
//! `BTreeMap`s, so serializing the same profile twice is byte-identical.

use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Complete linguistic profile of one author.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct AuthorProfile {
    /// Author identifier, echoed from input.
    pub person: String,
    /// Number of messages analyzed.
    pub total_emails: usize,
    /// Top 30 most frequent meaningful words, descending by count.
    pub comfort_words: Vec<WordCount>,
    /// Top 20 most frequent substantive trigrams, descending by count.
    pub favorite_phrases: Vec<PhraseCount>,
    /// Sentence, readability, and punctuation habits.
    pub writing_style: WritingStyle,
    /// Vocabulary size and diversity metrics.
    pub vocabulary_diversity: VocabularyDiversity,
    /// Phrase, transition, and emphasis habits.
    pub linguistic_fingerprint: LinguisticFingerprint,
    /// Email-specific greeting/signature/length habits.
    pub email_patterns: EmailPatterns,
}

/// A word with its occurrence count.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct WordCount {
    /// The word, lowercase.
    pub word: String,
    /// Number of occurrences across the whole corpus.
    pub count: usize,
}

/// A phrase with its occurrence count.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct PhraseCount {
    /// Space-joined lowercase trigram.
    pub phrase: String,
    /// Number of occurrences across all messages.
    pub count: usize,
}

/// Writing-style metrics computed over the concatenated corpus.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct WritingStyle {
    /// Mean words per sentence.
    pub avg_sentence_length: f64,
    /// Flesch Reading Ease (higher = easier, roughly 0–100).
    pub reading_ease: f64,
    /// `!` characters per sentence.
    pub exclamation_usage: f64,
    /// `?` characters per sentence.
    pub question_usage: f64,
    /// Fraction of whitespace tokens that are entirely uppercase letters.
    pub uppercase_ratio: f64,
    /// Punctuation habit rates.
    pub punctuation_style: PunctuationStyle,
}

/// Punctuation occurrences per 1000 characters.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct PunctuationStyle {
    /// `...` sequences per 1000 characters.
    pub ellipsis_usage: f64,
    /// `-` and `—` characters per 1000 characters.
    pub dash_usage: f64,
    /// `(` characters per 1000 characters.
    pub parenthesis_usage: f64,
    /// `;` characters per 1000 characters.
    pub semicolon_usage: f64,
}

/// Vocabulary diversity metrics.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct VocabularyDiversity {
    /// Alphabetic non-stopword token count.
    pub total_words: usize,
    /// Distinct count among those tokens.
    pub unique_words: usize,
    /// `unique_words / total_words` (0 when empty).
    pub lexical_diversity: f64,
    /// Mean type-token ratio over 1000-word chunks (0 when no chunk
    /// reaches 100 words).
    pub vocabulary_richness: f64,
}

/// Composite of phrase, transition, and emphasis habits.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct LinguisticFingerprint {
    /// Top 5 openings: first 50 characters of each message's first sentence.
    pub starter_phrases: Vec<SnippetCount>,
    /// Top 5 closings: last 50 characters of each message's last sentence.
    pub closing_phrases: Vec<SnippetCount>,
    /// The 5 most used transition words from the fixed vocabulary.
    pub transition_words: Vec<TransitionCount>,
    /// Emphasis habit tallies.
    pub emphasis_patterns: EmphasisPatterns,
}

/// A sentence snippet with its occurrence count.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct SnippetCount {
    /// Snippet text, at most 50 characters.
    pub snippet: String,
    /// Number of messages opening/closing with this snippet.
    pub count: usize,
}

/// A transition word with its occurrence count.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct TransitionCount {
    /// The transition word.
    pub transition: String,
    /// Raw substring occurrences across the concatenated corpus.
    pub count: usize,
}

/// How the author emphasizes points.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct EmphasisPatterns {
    /// Tokens of 3+ consecutive uppercase letters.
    pub all_caps: usize,
    /// Occurrences of "very" plus "really".
    pub very_really: usize,
    /// Occurrences of "absolutely" plus "definitely".
    pub absolutely_definitely: usize,
}

/// Email-shaped habits: length, greetings, signatures.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct EmailPatterns {
    /// Mean whitespace-token count per message.
    pub avg_email_length: f64,
    /// Greeting category tallies (exclusive: first matching category wins).
    pub greeting_style: BTreeMap<String, usize>,
    /// Signature category tallies (cumulative: every matching category
    /// counts).
    pub signature_style: BTreeMap<String, usize>,
}
