//! Text cleanup under adversarial input.
//!
//! The cleanup pass runs on every answer body, so it sees whatever the
//! extraction stage hands it: glued sentences, unterminated parentheses,
//! stray control characters. It must terminate, never panic, and emit
//! text with no doubled spaces or edge whitespace.

#![no_main]

use libfuzzer_sys::fuzz_target;

use docent::clean_answer;

fuzz_target!(|text: &str| {
    let cleaned = clean_answer(text);

    assert!(!cleaned.contains("  "), "doubled space in {cleaned:?}");
    assert_eq!(cleaned.trim(), cleaned, "edge whitespace in {cleaned:?}");

    // Line breaks only come from the heading-run splitter; no line it
    // produces is ever blank.
    for line in cleaned.lines() {
        assert!(!line.trim().is_empty(), "blank line in {cleaned:?}");
    }
});
