//! Index construction over the canonical sample course.

use docent::{CourseIndex, EntryKind, UNTITLED_BLOCK_LABEL};

use crate::common::{built_index, course_from_json, sample_course};

#[test]
fn sample_course_stats_add_up() {
    let stats = built_index().stats();
    assert_eq!(stats.lessons, 5);
    assert_eq!(stats.headings, 2);
    assert_eq!(stats.paragraphs, 5);
    assert_eq!(stats.captions, 1);
    assert_eq!(stats.slides, 2);
    assert_eq!(stats.questions, 1);
    assert_eq!(stats.answers, 2);
    assert_eq!(
        stats.total_entries,
        stats.headings
            + stats.paragraphs
            + stats.captions
            + stats.slides
            + stats.questions
            + stats.answers
    );
}

#[test]
fn sample_course_passes_validation() {
    assert!(built_index().validate().is_ok());
}

#[test]
fn rebuilding_the_same_course_is_stable() {
    let course = sample_course();
    assert_eq!(CourseIndex::build(&course), CourseIndex::build(&course));
}

#[test]
fn toc_lists_lessons_in_course_order() {
    let index = built_index();
    let titles: Vec<&str> = index
        .toc
        .iter()
        .map(|lesson| lesson.lesson_title.as_str())
        .collect();
    assert_eq!(
        titles,
        vec![
            "Introduction to Plain Language",
            "Key Principles",
            "Active and Passive Voice",
            "Familiar Words",
            "Knowledge Check"
        ]
    );
}

#[test]
fn quiz_block_summary_uses_the_question_stem() {
    let index = built_index();
    let quiz = index
        .toc
        .iter()
        .find(|lesson| lesson.lesson_title == "Knowledge Check")
        .unwrap();
    assert_eq!(quiz.blocks[0].title, "Which phrase is plainer?");
}

#[test]
fn markup_is_stripped_from_every_entry() {
    let index = built_index();
    for entry in &index.entries {
        assert!(
            !(entry.text.contains('<') && entry.text.contains('>')),
            "markup survived in {:?}",
            entry.text
        );
        assert!(!entry.text.trim().is_empty());
    }
}

#[test]
fn correctness_flags_appear_only_on_answers() {
    let index = built_index();
    for entry in &index.entries {
        if entry.kind != EntryKind::Answer {
            assert_eq!(entry.correct, None, "stray flag on {:?}", entry.kind);
        }
    }
    let flagged = index
        .entries
        .iter()
        .filter(|e| e.kind == EntryKind::Answer && e.correct == Some(true))
        .count();
    assert_eq!(flagged, 1);
}

#[test]
fn nested_caption_is_attributed_to_its_top_level_block() {
    let index = built_index();
    let caption = index
        .entries
        .iter()
        .find(|e| e.kind == EntryKind::Caption)
        .unwrap();
    assert_eq!(caption.block_id, "b-voice");
    assert_eq!(caption.lesson_id, "l-voice");
}

#[test]
fn textless_course_indexes_to_toc_only() {
    let course = course_from_json(
        r#"{"lessons": [{"id": "l1", "title": "Placeholder", "items": [
            {"id": "b1", "type": "text"}
        ]}]}"#,
    );
    let index = CourseIndex::build(&course);
    assert!(index.is_empty());
    assert_eq!(index.toc.len(), 1);
    assert_eq!(index.toc[0].blocks[0].title, UNTITLED_BLOCK_LABEL);
}
