//! End-to-end answering scenarios against the sample course.

use docent::{answer, ANSWER_LEAD_IN, INCLUSIVE_MISS_MESSAGE, NOT_FOUND_MESSAGE};

use crate::common::{built_index, bullet_lines, expect_hit, expect_miss, one_paragraph_index};

#[test]
fn key_principles_render_as_three_bullets() {
    // A run-on paragraph whose heading labels were concatenated during
    // markup flattening must come back as one bullet per label.
    let index = one_paragraph_index(
        "Key Principles",
        "The key principles of plain language are: Short SentencesActive VoiceFamiliar Words",
    );
    let reply = answer(&index, "what are the key principles");
    let bullets = bullet_lines(&reply);
    let message = expect_hit(reply);

    assert!(message.starts_with(ANSWER_LEAD_IN));
    assert_eq!(bullets.len(), 3, "bullets: {bullets:?}");
    assert!(bullets[0].ends_with("Short Sentences"));
    assert_eq!(bullets[1], "Active Voice");
    assert_eq!(bullets[2], "Familiar Words");
}

#[test]
fn passive_voice_query_answers_only_about_passive() {
    let message = expect_hit(answer(&built_index(), "what is passive voice"));
    assert!(message.starts_with(ANSWER_LEAD_IN));
    assert!(message.contains("Passive voice hides who is doing the work"));
    assert!(
        !message.contains("Active voice makes"),
        "active-voice sentence leaked into: {message}"
    );
}

#[test]
fn objectives_query_lists_the_three_clauses() {
    let reply = answer(&built_index(), "what are the learning objectives?");
    let bullets = bullet_lines(&reply);
    expect_hit(reply);

    assert_eq!(
        bullets,
        vec![
            "Recognise inclusive terms.",
            "Apply plain language.",
            "Use short sentences."
        ]
    );
    for bullet in &bullets {
        assert!(bullet.chars().next().unwrap().is_uppercase());
        assert!(bullet.ends_with('.'));
    }
}

#[test]
fn goals_phrasing_reaches_the_same_objectives() {
    let reply = answer(&built_index(), "course goals");
    let bullets = bullet_lines(&reply);
    expect_hit(reply);
    assert_eq!(bullets.len(), 3);
}

#[test]
fn nonsense_query_suggests_the_first_four_lessons() {
    let reply = answer(&built_index(), "xyzabc123");
    let bullets = bullet_lines(&reply);
    let message = expect_miss(reply);

    assert!(message.starts_with(NOT_FOUND_MESSAGE));
    assert_eq!(
        bullets,
        vec![
            "Introduction to Plain Language",
            "Key Principles",
            "Active and Passive Voice",
            "Familiar Words"
        ]
    );
}

#[test]
fn inclusive_query_without_inclusive_content_points_at_the_section() {
    let index = one_paragraph_index("Writing Well", "Short sentences help readers.");
    let message = expect_miss(answer(&index, "inclusive language meaning"));
    assert_eq!(message, INCLUSIVE_MISS_MESSAGE);
}

#[test]
fn inclusive_query_with_inclusive_content_answers_from_it() {
    let message = expect_hit(answer(&built_index(), "meaning of inclusive terms"));
    assert!(message.contains("inclusive terms"));
}

#[test]
fn familiar_words_answer_skips_the_example_table_fragments() {
    let message = expect_hit(answer(&built_index(), "why use familiar words"));
    assert!(message.contains("Familiar words are words your readers use every day"));
    assert!(!message.contains("synergy"), "artifact leaked: {message}");
    assert!(!message.contains("cats"), "artifact leaked: {message}");
}

#[test]
fn definitional_query_lands_on_the_defining_paragraph() {
    let message = expect_hit(answer(&built_index(), "what is plain language?"));
    assert!(message.contains("readers understand the first time"));
}

#[test]
fn every_hit_carries_the_attribution_lead_in() {
    let index = built_index();
    for query in [
        "what is plain language?",
        "what is passive voice",
        "why use familiar words",
        "what are the learning objectives?",
    ] {
        let reply = answer(&index, query);
        assert!(reply.ok, "{query:?} missed: {}", reply.message);
        assert!(
            reply.message.starts_with(ANSWER_LEAD_IN),
            "{query:?} lacks lead-in: {}",
            reply.message
        );
    }
}

#[test]
fn answers_never_exceed_a_screenful() {
    let index = built_index();
    for query in [
        "what is plain language?",
        "what is passive voice",
        "what are the key principles",
        "why use familiar words",
    ] {
        let reply = answer(&index, query);
        for line in reply.message.lines() {
            assert!(
                line.chars().count() <= ANSWER_LEAD_IN.len() + 1 + 260 + 3,
                "{query:?} produced an overlong line"
            );
        }
    }
}
