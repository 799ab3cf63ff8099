//! Sentence splitting and truncation edge cases.

use docent::{split_sentences, truncate_preferring_boundary};

#[test]
fn mixed_terminators_split_cleanly() {
    let sentences = split_sentences("Really? Yes! Keep sentences short. Always");
    assert_eq!(
        sentences,
        vec!["Really?", "Yes!", "Keep sentences short.", "Always"]
    );
}

#[test]
fn glued_sentences_split_on_uppercase() {
    let sentences = split_sentences("Write simply.Readers thank you.");
    assert_eq!(sentences, vec!["Write simply.", "Readers thank you."]);
}

#[test]
fn decimal_point_does_not_split() {
    // "2.5" must not become two sentences.
    let sentences = split_sentences("Readers manage about 2.5 clauses per sentence.");
    assert_eq!(sentences.len(), 1);
}

#[test]
fn whitespace_only_input_yields_nothing() {
    assert!(split_sentences("   ").is_empty());
    assert!(split_sentences("").is_empty());
}

#[test]
fn single_word_is_one_sentence() {
    assert_eq!(split_sentences("Introduction"), vec!["Introduction"]);
}

#[test]
fn truncation_never_exceeds_cap_plus_ellipsis() {
    let text = "word ".repeat(100);
    for cap in [10, 50, 150, 220] {
        let cut = truncate_preferring_boundary(&text, cap);
        assert!(
            cut.chars().count() <= cap + 3,
            "cap {cap} produced {} chars",
            cut.chars().count()
        );
    }
}

#[test]
fn truncation_at_boundary_keeps_whole_sentences() {
    let text = "First sentence here. Second sentence is quite a bit longer than the first one.";
    let cut = truncate_preferring_boundary(text, 40);
    assert_eq!(cut, "First sentence here.");
}

#[test]
fn truncation_is_char_safe_on_unicode() {
    let text = "café résumé naïve ".repeat(20);
    let cut = truncate_preferring_boundary(&text, 30);
    assert!(cut.chars().count() <= 33);
}
