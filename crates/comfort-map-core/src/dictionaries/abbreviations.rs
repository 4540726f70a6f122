//! Abbreviations that should not end a sentence when followed by a period.

use std::collections::HashSet;
use std::sync::LazyLock;

/// Abbreviations common in business email, lowercase, without the trailing
/// period.
pub static ABBREVIATIONS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    let mut set = HashSet::new();

    // Titles
    set.extend([
        "mr", "mrs", "ms", "dr", "prof", "rev", "sr", "jr", "hon", "capt", "col", "gen", "lt",
        "sgt", "gov", "sen", "rep", "pres",
    ]);

    // Latin and editorial
    set.extend(["etc", "vs", "e.g", "i.e", "cf", "et al", "n.b", "p.s", "viz"]);

    // Calendar
    set.extend([
        "jan", "feb", "mar", "apr", "jun", "jul", "aug", "sep", "sept", "oct", "nov", "dec",
        "mon", "tue", "tues", "wed", "thu", "thur", "thurs", "fri", "sat", "sun", "a.m", "p.m",
    ]);

    // Addresses and org forms
    set.extend([
        "st", "ave", "blvd", "rd", "apt", "ste", "rm", "fl", "bldg", "dept", "inc", "corp",
        "ltd", "llc", "co", "assn", "intl", "u.s", "u.k", "u.s.a",
    ]);

    // Quantities and references
    set.extend([
        "no", "nos", "vol", "pp", "fig", "est", "approx", "min", "max", "avg", "oz", "lb",
        "lbs", "ft", "sq", "misc", "ref", "ed",
    ]);

    set
});

/// Check whether a word (case-insensitive, trailing periods ignored) is a
/// known abbreviation.
pub fn is_abbreviation(word: &str) -> bool {
    let lower = word.to_lowercase();
    ABBREVIATIONS.contains(lower.trim_matches('.'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn titles_match() {
        assert!(is_abbreviation("Dr"));
        assert!(is_abbreviation("mr."));
        assert!(is_abbreviation("etc"));
        assert!(is_abbreviation("i.e"));
    }

    #[test]
    fn ordinary_words_do_not_match() {
        assert!(!is_abbreviation("meeting"));
        assert!(!is_abbreviation("regards"));
    }
}
