//! Shared test utilities and fixtures.

#![allow(dead_code)]

use docent::{Answer, CourseIndex};

// Re-export canonical fixtures from docent::testing
pub use docent::testing::{built_index, course_from_json, sample_course, SAMPLE_COURSE_JSON};

/// The bullet lines of an answer message (lines starting with "• ").
pub fn bullet_lines(answer: &Answer) -> Vec<String> {
    answer
        .message
        .lines()
        .filter_map(|line| line.strip_prefix("\u{2022} "))
        .map(str::to_string)
        .collect()
}

/// Assert an answer is a hit and return its message.
pub fn expect_hit(answer: Answer) -> String {
    assert!(answer.ok, "expected a hit, got miss: {}", answer.message);
    answer.message
}

/// Assert an answer is a miss and return its message.
pub fn expect_miss(answer: Answer) -> String {
    assert!(!answer.ok, "expected a hit-less reply, got: {}", answer.message);
    answer.message
}

/// Index a course with a single lesson holding a single text paragraph.
pub fn one_paragraph_index(lesson_title: &str, paragraph: &str) -> CourseIndex {
    let course = course_from_json(&format!(
        r#"{{"lessons": [{{"id": "l1", "title": "{lesson_title}", "items": [{{
            "id": "b1", "type": "text", "paragraph": "{paragraph}"
        }}]}}]}}"#
    ));
    CourseIndex::build(&course)
}
