//! Course deserialization and indexing under adversarial input.
//!
//! Course JSON comes from an export pipeline we don't control. Parsing is
//! lenient by design (missing fields default to "absent"), so most garbage
//! still deserializes; whatever survives must index without panicking.
//!
//! A decoded entity like "&lt;b&gt;" legitimately yields literal angle
//! brackets in entry text; the invariant checked here is the one the
//! pipeline actually guarantees, via [`CourseIndex::validate`].

#![no_main]

use libfuzzer_sys::fuzz_target;

use docent::{answer, Course, CourseIndex};

fuzz_target!(|data: &[u8]| {
    let Ok(course) = serde_json::from_slice::<Course>(data) else {
        return;
    };

    let index = CourseIndex::build(&course);

    // Rebuilding the same tree must give the same index.
    assert_eq!(index, CourseIndex::build(&course), "non-idempotent build");

    // Entries are never empty, whatever the source looked like.
    for entry in &index.entries {
        assert!(!entry.text.trim().is_empty(), "empty entry text");
    }

    // Every built index passes its own invariant checks.
    assert!(index.validate().is_ok(), "built index failed validation");

    // A fixed query must survive whatever got indexed.
    let reply = answer(&index, "what is this about");
    assert!(!reply.message.is_empty());
});
