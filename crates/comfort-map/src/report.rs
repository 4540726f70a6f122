//! Plain-text rendering of author profiles.
//!
//! Produces the same report whether printed to a terminal or exported to a
//! file, so output stays diffable across runs.

use std::fmt::Write;

use comfort_map_core::AuthorProfile;

/// Render one author profile as a multi-section text report.
pub fn render_profile(profile: &AuthorProfile) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "LINGUISTIC PROFILE: {}", profile.person);
    let _ = writeln!(out, "{}", "=".repeat(40));
    let _ = writeln!(out, "Emails analyzed: {}", profile.total_emails);

    let _ = writeln!(out, "\nTOP COMFORT WORDS:");
    if profile.comfort_words.is_empty() {
        let _ = writeln!(out, "  (none)");
    }
    for wc in profile.comfort_words.iter().take(10) {
        let _ = writeln!(out, "  - {}: {} times", wc.word, wc.count);
    }

    let _ = writeln!(out, "\nFAVORITE PHRASES:");
    if profile.favorite_phrases.is_empty() {
        let _ = writeln!(out, "  (none)");
    }
    for pc in profile.favorite_phrases.iter().take(5) {
        let _ = writeln!(out, "  - '{}': {} times", pc.phrase, pc.count);
    }

    let style = &profile.writing_style;
    let _ = writeln!(out, "\nWRITING STYLE:");
    let _ = writeln!(
        out,
        "  - Avg sentence length: {:.1} words",
        style.avg_sentence_length
    );
    let _ = writeln!(out, "  - Reading ease: {:.1}/100", style.reading_ease);
    let _ = writeln!(
        out,
        "  - Exclamations per sentence: {:.2}",
        style.exclamation_usage
    );
    let _ = writeln!(
        out,
        "  - Questions per sentence: {:.2}",
        style.question_usage
    );
    let punct = &style.punctuation_style;
    let _ = writeln!(
        out,
        "  - Punctuation per 1000 chars: ellipsis {:.2}, dash {:.2}, parens {:.2}, semicolon {:.2}",
        punct.ellipsis_usage, punct.dash_usage, punct.parenthesis_usage, punct.semicolon_usage
    );

    let div = &profile.vocabulary_diversity;
    let _ = writeln!(out, "\nVOCABULARY:");
    let _ = writeln!(out, "  - Unique words: {}", div.unique_words);
    let _ = writeln!(
        out,
        "  - Lexical diversity: {:.1}%",
        div.lexical_diversity * 100.0
    );
    let _ = writeln!(
        out,
        "  - Vocabulary richness: {:.1}%",
        div.vocabulary_richness * 100.0
    );

    let fp = &profile.linguistic_fingerprint;
    let _ = writeln!(out, "\nLINGUISTIC FINGERPRINT:");
    let _ = writeln!(out, "  Transition words:");
    for tc in &fp.transition_words {
        let _ = writeln!(out, "    - {}: {} times", tc.transition, tc.count);
    }
    let emphasis = &fp.emphasis_patterns;
    let _ = writeln!(
        out,
        "  Emphasis: {} ALL-CAPS, {} very/really, {} absolutely/definitely",
        emphasis.all_caps, emphasis.very_really, emphasis.absolutely_definitely
    );

    let patterns = &profile.email_patterns;
    let _ = writeln!(out, "\nEMAIL PATTERNS:");
    let _ = writeln!(
        out,
        "  - Avg email length: {:.1} words",
        patterns.avg_email_length
    );
    let _ = writeln!(out, "  Greetings:");
    if patterns.greeting_style.is_empty() {
        let _ = writeln!(out, "    (none detected)");
    }
    for (style_name, count) in &patterns.greeting_style {
        let _ = writeln!(out, "    - {style_name}: {count} times");
    }
    let _ = writeln!(out, "  Signatures:");
    if patterns.signature_style.is_empty() {
        let _ = writeln!(out, "    (none detected)");
    }
    for (style_name, count) in &patterns.signature_style {
        let _ = writeln!(out, "    - {style_name}: {count} times");
    }

    out
}

/// Render several profiles separated by blank lines.
pub fn render_profiles(profiles: &[AuthorProfile]) -> String {
    profiles
        .iter()
        .map(render_profile)
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use comfort_map_core::analyze_person;

    fn sample_profile() -> AuthorProfile {
        let messages = vec![
            "Hi Sarah, the contract review is done. However, the deadline moved. Thanks!"
                .to_string(),
            "Really great work on the proposal draft. Talk soon.".to_string(),
        ];
        analyze_person("kay.mann@enron.com", &messages).unwrap()
    }

    #[test]
    fn report_names_the_author() {
        let text = render_profile(&sample_profile());
        assert!(text.contains("kay.mann@enron.com"));
        assert!(text.contains("Emails analyzed: 2"));
    }

    #[test]
    fn report_has_all_sections() {
        let text = render_profile(&sample_profile());
        for section in [
            "TOP COMFORT WORDS:",
            "FAVORITE PHRASES:",
            "WRITING STYLE:",
            "VOCABULARY:",
            "LINGUISTIC FINGERPRINT:",
            "EMAIL PATTERNS:",
        ] {
            assert!(text.contains(section), "missing section {section}");
        }
    }

    #[test]
    fn empty_profile_renders_placeholders() {
        let profile = analyze_person("quiet", &[]).unwrap();
        let text = render_profile(&profile);
        assert!(text.contains("(none)"));
    }

    #[test]
    fn multiple_profiles_joined() {
        let profiles = vec![sample_profile(), sample_profile()];
        let text = render_profiles(&profiles);
        assert_eq!(text.matches("LINGUISTIC PROFILE:").count(), 2);
    }
}
