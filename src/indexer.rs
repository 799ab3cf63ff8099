//! Course index construction.
//!
//! One depth-first walk of the course tree produces the flat entry list and
//! the table of contents. The walk is the only place entries are created, so
//! every invariant on [`ContentEntry`] is enforced here: text is stripped
//! and collapsed before storage, and empty results are never pushed.
//!
//! # INVARIANTS (DO NOT VIOLATE)
//!
//! 1. **ENTRY_TEXT_CLEAN**: every pushed entry went through `strip_markup`
//!    and has non-empty text.
//! 2. **DOCUMENT_ORDER**: entries appear in the order the walk visits them.
//!    Scoring tie-breaks resolve to the earliest entry, so order is part of
//!    the answering contract.
//! 3. **IDEMPOTENT**: re-running on the same tree produces an index equal
//!    in content and order. There is no randomness and no shared state.
//!
//! Nodes with no recognized text fields contribute nothing and are skipped
//! silently; absence is "no contribution", not an error.

use crate::course::{Block, Course, Lesson};
use crate::markup::strip_markup;
use crate::types::{BlockSummary, ContentEntry, CourseIndex, EntryKind, TocEntry};

/// Upper bound (in characters) on a block-summary title in the TOC.
pub const BLOCK_TITLE_MAX_CHARS: usize = 60;

/// Label for a block with no usable title text.
pub const UNTITLED_BLOCK_LABEL: &str = "Untitled section";

/// Build the index from a course tree in a single pass.
///
/// Free-function form of [`CourseIndex::build`]; both are public so callers
/// can pick whichever reads better at the call site.
pub fn build_index(course: &Course) -> CourseIndex {
    let mut entries = Vec::new();
    let mut toc = Vec::new();

    for lesson in &course.lessons {
        let mut blocks = Vec::new();
        for block in &lesson.items {
            walk_block(block, lesson, &block.id, &mut entries);
            blocks.push(BlockSummary {
                block_id: block.id.clone(),
                title: summarize_block(block),
            });
        }
        toc.push(TocEntry {
            lesson_id: lesson.id.clone(),
            lesson_title: lesson.title.clone(),
            blocks,
        });
    }

    CourseIndex { entries, toc }
}

/// Depth-first walk of one block subtree, appending entries in visit order.
///
/// `block_id` is the id of the top-level block this subtree belongs to;
/// nested nodes are attributed to it rather than to their own (often empty)
/// ids, so answers can point at a block the TOC knows.
fn walk_block(node: &Block, lesson: &Lesson, block_id: &str, entries: &mut Vec<ContentEntry>) {
    push_text(entries, &node.heading, EntryKind::Heading, lesson, block_id, None);
    push_text(entries, &node.paragraph, EntryKind::Paragraph, lesson, block_id, None);
    push_text(entries, &node.caption, EntryKind::Caption, lesson, block_id, None);

    if node.is_quiz_like() {
        push_text(entries, &node.title, EntryKind::Question, lesson, block_id, None);
        for choice in &node.answers {
            push_text(
                entries,
                &choice.title,
                EntryKind::Answer,
                lesson,
                block_id,
                Some(choice.correct),
            );
        }
    }

    // Slide containers: capture each slide's description, then walk the
    // slide itself, before continuing into this node's own nested items.
    for slide in &node.slides {
        push_text(entries, &slide.description, EntryKind::Slide, lesson, block_id, None);
        walk_block(slide, lesson, block_id, entries);
    }

    for item in &node.items {
        walk_block(item, lesson, block_id, entries);
    }
}

/// Strip and push one text field, skipping empties.
fn push_text(
    entries: &mut Vec<ContentEntry>,
    raw: &str,
    kind: EntryKind,
    lesson: &Lesson,
    block_id: &str,
    correct: Option<bool>,
) {
    if raw.is_empty() {
        return;
    }
    let text = strip_markup(raw);
    if text.is_empty() {
        return;
    }
    entries.push(ContentEntry {
        text,
        lesson_id: lesson.id.clone(),
        block_id: block_id.to_string(),
        lesson_title: lesson.title.clone(),
        kind,
        correct,
    });
}

/// Pick a block's TOC title: the first non-empty heading, paragraph, or
/// question text in its subtree, truncated to [`BLOCK_TITLE_MAX_CHARS`].
fn summarize_block(block: &Block) -> String {
    first_title_text(block)
        .map(|text| truncate_chars(&text, BLOCK_TITLE_MAX_CHARS))
        .unwrap_or_else(|| UNTITLED_BLOCK_LABEL.to_string())
}

fn first_title_text(node: &Block) -> Option<String> {
    for raw in [&node.heading, &node.paragraph] {
        if !raw.is_empty() {
            let text = strip_markup(raw);
            if !text.is_empty() {
                return Some(text);
            }
        }
    }
    if node.is_quiz_like() && !node.title.is_empty() {
        let text = strip_markup(&node.title);
        if !text.is_empty() {
            return Some(text);
        }
    }
    for child in node.slides.iter().chain(&node.items) {
        if let Some(text) = first_title_text(child) {
            return Some(text);
        }
    }
    None
}

/// Truncate at a character boundary, appending an ellipsis when cut.
fn truncate_chars(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let cut: String = text.chars().take(max_chars).collect();
    format!("{}...", cut.trim_end())
}
