//! Query answering under adversarial input.
//!
//! Learners type anything: emoji, control characters, megabyte pastes,
//! half a regex. Whatever comes in, the answerer must return a presentable
//! message, never panic, and never leak un-cleaned text.

#![no_main]

use libfuzzer_sys::fuzz_target;

use docent::contracts::check_answer_well_formed;
use docent::{answer, CourseIndex};

fuzz_target!(|query: &str| {
    // Build the fixture index once per process.
    static INDEX: std::sync::OnceLock<CourseIndex> = std::sync::OnceLock::new();
    let index = INDEX.get_or_init(docent::testing::built_index);

    let reply = answer(index, query);

    // Hit or miss, the message must be presentable.
    check_answer_well_formed(&reply);
    assert!(!reply.message.is_empty(), "empty message for {query:?}");

    // Same query, same answer. The pipeline has no hidden state.
    assert_eq!(reply, answer(index, query), "non-deterministic for {query:?}");
});
