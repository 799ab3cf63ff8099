//! Text cleanup across combined markup-flattening artifacts.

use docent::clean_answer;

#[test]
fn chained_artifacts_repair_in_one_pass() {
    let raw = "plain language (also called clear writing) helps .It isn'tHard to learn";
    let cleaned = clean_answer(raw);
    assert_eq!(cleaned, "Plain language helps. It isn't Hard to learn");
}

#[test]
fn heading_run_with_surrounding_prose_becomes_lines() {
    let cleaned = clean_answer("remember these: Short SentencesActive VoiceFamiliar Words");
    let lines: Vec<&str> = cleaned.lines().collect();
    assert_eq!(
        lines,
        vec![
            "Remember these: Short Sentences",
            "Active Voice",
            "Familiar Words"
        ]
    );
}

#[test]
fn clean_answer_is_idempotent_on_clean_prose() {
    let once = clean_answer("Plain language is kind to readers.");
    let twice = clean_answer(&once);
    assert_eq!(once, twice);
}

#[test]
fn empty_input_cleans_to_empty() {
    assert_eq!(clean_answer(""), "");
    assert_eq!(clean_answer("   "), "");
}

#[test]
fn unterminated_aside_at_end_is_dropped() {
    let cleaned = clean_answer("Choose familiar words (for instance, the wor");
    assert_eq!(cleaned, "Choose familiar words");
}
