//! Runtime contracts for the index and answer invariants.
//!
//! Debug-mode assertions that catch invariant violations early during
//! development. These contracts:
//!
//! 1. Are **zero-cost in release builds** (use `debug_assert!`)
//! 2. Mirror the checks [`CourseIndex::validate`] performs, in a form the
//!    hot paths can afford to call unconditionally
//!
//! # INVARIANTS (DO NOT REMOVE THESE CHECKS)
//!
//! | Contract Function            | Invariant                                  |
//! |------------------------------|--------------------------------------------|
//! | `check_entry_clean`          | Entry text non-empty, whitespace-collapsed |
//! | `check_index_well_formed`    | All entries clean, flags consistent        |
//! | `check_answer_well_formed`   | Every answer carries a non-empty message   |

use crate::markup::collapse_whitespace;
use crate::types::{Answer, ContentEntry, CourseIndex, EntryKind};

// ============================================================================
// COMPILE-TIME ASSERTIONS (evaluated at build time)
// ============================================================================

/// Static assertions over the tuned scoring constants. If these fail, the
/// crate won't build. The literals here must match `Tunables::default()`
/// and the credit constants in `tokens.rs`.
const _: () = {
    const EXACT_CREDIT: f64 = 1.0;
    const PARTIAL_CREDIT: f64 = 0.5;
    const MIN_SCORE: f64 = 0.35;
    const PARAGRAPH_BONUS: f64 = 0.35;
    const PREFIX_CAP: usize = 150;
    const SENTENCE_CAP: usize = 220;
    const BULLET_CAP: usize = 260;

    // A fuzzy hit must never outrank an exact hit.
    assert!(PARTIAL_CREDIT < EXACT_CREDIT);

    // A single partial hit on a one-token query clears the threshold;
    // lowering PARTIAL_CREDIT below MIN_SCORE would silently turn every
    // morphological near-miss into a "not found".
    assert!(PARTIAL_CREDIT >= MIN_SCORE);

    // The paragraph bonus alone clears the threshold. Topic queries that
    // share no tokens with the matching paragraph depend on this.
    assert!(PARAGRAPH_BONUS >= MIN_SCORE);

    // The fallback prefix is the shortest output; bullets get the most room.
    assert!(PREFIX_CAP < SENTENCE_CAP && SENTENCE_CAP < BULLET_CAP);
};

// ============================================================================
// ENTRY CONTRACTS
// ============================================================================

/// Check that one entry satisfies the cleanliness invariants.
///
/// Entity decoding can leave literal angle brackets in legitimate text, so
/// the check is for whitespace-collapsed form, not for tag-shaped content.
///
/// # Panics (debug builds only)
/// Panics on empty text, uncollapsed whitespace, or a correctness flag on
/// a non-answer entry.
#[inline]
pub fn check_entry_clean(entry: &ContentEntry) {
    debug_assert!(
        !entry.text.trim().is_empty(),
        "Contract violation: entry text is empty (lesson '{}', block '{}')",
        entry.lesson_id,
        entry.block_id
    );
    debug_assert!(
        entry.text == collapse_whitespace(&entry.text),
        "Contract violation: entry text is not whitespace-collapsed: {:?}",
        entry.text
    );
    debug_assert!(
        entry.correct.is_none() || entry.kind == EntryKind::Answer,
        "Contract violation: correctness flag on a {} entry",
        entry.kind.as_str()
    );
}

/// Check every entry in a freshly built index.
#[inline]
pub fn check_index_well_formed(index: &CourseIndex) {
    for entry in &index.entries {
        check_entry_clean(entry);
    }
    debug_assert!(
        index.validate().is_ok(),
        "Contract violation: {:?}",
        index.validate()
    );
}

/// Check that an answer is presentable: the message is never empty and
/// never starts or ends with stray whitespace.
#[inline]
pub fn check_answer_well_formed(answer: &Answer) {
    debug_assert!(
        !answer.message.is_empty(),
        "Contract violation: empty answer message"
    );
    debug_assert!(
        answer.message.trim() == answer.message,
        "Contract violation: answer message has stray edge whitespace: {:?}",
        answer.message
    );
}
