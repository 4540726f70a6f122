//! Curated word lists for author-style analysis.
//!
//! All sets are process-wide, initialized once via `LazyLock`, and never
//! mutated afterwards, so concurrent analyses of different authors can share
//! them without locking.

use std::collections::HashSet;
use std::sync::LazyLock;

/// Standard English stopwords (articles, pronouns, auxiliaries, common
/// prepositions and conjunctions).
const ENGLISH_STOPWORDS: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "you're", "you've",
    "you'll", "you'd", "your", "yours", "yourself", "yourselves", "he", "him", "his", "himself",
    "she", "she's", "her", "hers", "herself", "it", "it's", "its", "itself", "they", "them",
    "their", "theirs", "themselves", "what", "which", "who", "whom", "this", "that", "that'll",
    "these", "those", "am", "is", "are", "was", "were", "be", "been", "being", "have", "has",
    "had", "having", "do", "does", "did", "doing", "a", "an", "the", "and", "but", "if", "or",
    "because", "as", "until", "while", "of", "at", "by", "for", "with", "about", "against",
    "between", "into", "through", "during", "before", "after", "above", "below", "up", "down",
    "in", "out", "on", "off", "over", "under", "again", "further", "then", "once", "here",
    "there", "when", "where", "why", "how", "all", "any", "both", "each", "few", "more", "most",
    "other", "some", "such", "no", "nor", "not", "only", "own", "same", "so", "than", "too",
    "very", "can", "will", "just", "don't", "should", "should've", "now", "ain't", "aren't",
    "couldn't", "didn't", "doesn't", "hadn't", "hasn't", "haven't", "isn't", "mightn't",
    "mustn't", "needn't", "shan't", "shouldn't", "wasn't", "weren't", "won't", "wouldn't",
];

/// Boilerplate terms that dominate corporate email threads without carrying
/// authorial signal.
const CORPORATE_STOPWORDS: &[&str] = &[
    "email", "sent", "subject", "from", "to", "cc", "bcc", "forwarded", "original", "message",
    "wrote", "date",
];

/// Combined stopword set: standard English stopwords unioned with corporate
/// boilerplate.
pub static STOPWORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    ENGLISH_STOPWORDS
        .iter()
        .chain(CORPORATE_STOPWORDS.iter())
        .copied()
        .collect()
});

/// Stoplisted words that still carry semantic weight inside a phrase.
///
/// Trigram windows may include these even though they are stopwords.
pub static PHRASE_EXCEPTIONS: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| ["not", "very", "really"].into_iter().collect());

/// Fixed vocabulary of formal transition words.
///
/// The order matters: it is the tie-break when transition counts are ranked,
/// so this is a slice rather than a set.
pub const TRANSITION_WORDS: [&str; 10] = [
    "however",
    "therefore",
    "moreover",
    "furthermore",
    "nevertheless",
    "consequently",
    "additionally",
    "meanwhile",
    "otherwise",
    "accordingly",
];

/// Intensifiers tallied together as one emphasis habit.
pub const VERY_REALLY: [&str; 2] = ["very", "really"];

/// Certainty adverbs tallied together as one emphasis habit.
pub const ABSOLUTELY_DEFINITELY: [&str; 2] = ["absolutely", "definitely"];

/// Check whether a lowercase token is a stopword.
pub fn is_stopword(word: &str) -> bool {
    STOPWORDS.contains(word)
}
