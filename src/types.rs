//! The building blocks of a course index.
//!
//! These types define how extracted course facts, lesson summaries, and the
//! query answer fit together. The index is built once per course load and is
//! read-only afterwards; every query runs against the same immutable snapshot.
//!
//! # Invariants (the stuff that breaks if you ignore it)
//!
//! - **ContentEntry**: `text` is plain prose, never empty. The indexer strips
//!   tags and collapses whitespace before an entry is created, and entries
//!   with empty text are never pushed. Decoded entities may leave literal
//!   angle brackets behind ("&lt;b&gt;" becomes "<b>"), so the observable
//!   residue of the stripping pipeline is collapsed whitespace, not the
//!   absence of tag-shaped text.
//!
//! - **ContentEntry**: `correct` is `Some` only for `EntryKind::Answer`.
//!   Other kinds have no notion of correctness.
//!
//! - **CourseIndex**: entry order is document order. Tie-breaks during
//!   scoring resolve to the earliest entry, so reordering entries changes
//!   which answer wins.
//!
//! Rather than trusting yourself to remember these, call
//! [`CourseIndex::validate`] after a build - it checks all of them.

use serde::{Deserialize, Serialize};

use crate::course::Course;
use crate::indexer;

// =============================================================================
// ENTRY TYPES
// =============================================================================

/// What kind of course fact an entry was extracted from.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "camelCase")]
pub enum EntryKind {
    /// A block or section heading. Terse, label-like text.
    Heading,
    /// Body prose. The preferred source for definitional answers.
    Paragraph,
    /// An image or media caption.
    Caption,
    /// A knowledge-check question stem.
    Question,
    /// A knowledge-check answer choice.
    Answer,
    /// A carousel slide description.
    Slide,
}

impl EntryKind {
    /// Lowercase string form, matching the serde convention.
    pub fn as_str(self) -> &'static str {
        match self {
            EntryKind::Heading => "heading",
            EntryKind::Paragraph => "paragraph",
            EntryKind::Caption => "caption",
            EntryKind::Question => "question",
            EntryKind::Answer => "answer",
            EntryKind::Slide => "slide",
        }
    }
}

/// One fact extracted from the course: clean text plus where it came from.
///
/// Entries are immutable once created. The index is rebuilt wholesale on each
/// course (re)load, never patched incrementally.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ContentEntry {
    /// Plain text with markup stripped and whitespace collapsed. Never empty.
    pub text: String,
    /// Identifier of the owning lesson. Opaque, may be empty.
    pub lesson_id: String,
    /// Identifier of the owning top-level block. Opaque, may be empty.
    pub block_id: String,
    /// Human-readable title of the owning lesson.
    pub lesson_title: String,
    /// What kind of course fact this is.
    pub kind: EntryKind,
    /// For `Answer` entries only: whether this choice is the correct one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub correct: Option<bool>,
}

// =============================================================================
// TABLE OF CONTENTS
// =============================================================================

/// A block's one-line summary inside the table of contents.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BlockSummary {
    pub block_id: String,
    /// First non-empty heading/paragraph/question text in the block,
    /// truncated to a bounded length. Falls back to a generic label.
    pub title: String,
}

/// One lesson's summary: its title plus ordered block summaries.
///
/// The TOC feeds the "I couldn't find that, try..." suggestions and the
/// CLI `toc` command.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TocEntry {
    pub lesson_id: String,
    pub lesson_title: String,
    pub blocks: Vec<BlockSummary>,
}

// =============================================================================
// THE INDEX
// =============================================================================

/// The searchable course index: flat entries plus the TOC.
///
/// Empty at startup, populated exactly once per successful course load by
/// [`CourseIndex::build`], and never partially populated - the build is a
/// single full tree walk. To refresh, build a new value and replace the old
/// one; readers never observe a torn index.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CourseIndex {
    /// Extracted entries in document order.
    pub entries: Vec<ContentEntry>,
    /// Lesson summaries in document order.
    pub toc: Vec<TocEntry>,
}

impl CourseIndex {
    /// The empty index. Queries against it get the "still loading" reply.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build the index from a course tree in one pass.
    ///
    /// Idempotent: equal trees produce indexes equal in content and order.
    pub fn build(course: &Course) -> Self {
        indexer::build_index(course)
    }

    /// True when no content has been indexed yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Per-kind entry counts, for the CLI `inspect` report.
    pub fn stats(&self) -> IndexStats {
        let mut stats = IndexStats {
            lessons: self.toc.len(),
            total_entries: self.entries.len(),
            ..IndexStats::default()
        };
        for entry in &self.entries {
            match entry.kind {
                EntryKind::Heading => stats.headings += 1,
                EntryKind::Paragraph => stats.paragraphs += 1,
                EntryKind::Caption => stats.captions += 1,
                EntryKind::Question => stats.questions += 1,
                EntryKind::Answer => stats.answers += 1,
                EntryKind::Slide => stats.slides += 1,
            }
        }
        stats
    }

    /// Check the index invariants, returning the first violation found.
    ///
    /// Used by tests, the fuzz targets, and the CLI `inspect` command. A
    /// freshly built index must always pass; a failure means the indexer
    /// has a bug, not the course.
    pub fn validate(&self) -> Result<(), IndexError> {
        for (position, entry) in self.entries.iter().enumerate() {
            if entry.text.trim().is_empty() {
                return Err(IndexError::EmptyEntryText { position });
            }
            if entry.text != crate::markup::collapse_whitespace(&entry.text) {
                return Err(IndexError::UncollapsedText { position });
            }
            if entry.correct.is_some() && entry.kind != EntryKind::Answer {
                return Err(IndexError::CorrectnessOnNonAnswer {
                    position,
                    kind: entry.kind,
                });
            }
        }
        for entry in &self.entries {
            if !entry.lesson_id.is_empty()
                && !self.toc.iter().any(|t| t.lesson_id == entry.lesson_id)
            {
                return Err(IndexError::UnknownLesson {
                    lesson_id: entry.lesson_id.clone(),
                });
            }
        }
        Ok(())
    }
}

/// Per-kind entry counts for a built index.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct IndexStats {
    pub lessons: usize,
    pub total_entries: usize,
    pub headings: usize,
    pub paragraphs: usize,
    pub captions: usize,
    pub questions: usize,
    pub answers: usize,
    pub slides: usize,
}

/// An index invariant violation, reported by [`CourseIndex::validate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IndexError {
    /// An entry with empty or whitespace-only text made it into the index.
    EmptyEntryText { position: usize },
    /// An entry's text is not its own whitespace-collapsed form, i.e. it
    /// bypassed the stripping pipeline.
    UncollapsedText { position: usize },
    /// A non-answer entry carries a correctness flag.
    CorrectnessOnNonAnswer { position: usize, kind: EntryKind },
    /// An entry references a lesson id the TOC does not know about.
    UnknownLesson { lesson_id: String },
}

impl std::fmt::Display for IndexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IndexError::EmptyEntryText { position } => {
                write!(f, "entry {position} has empty text")
            }
            IndexError::UncollapsedText { position } => {
                write!(f, "entry {position} text is not whitespace-collapsed")
            }
            IndexError::CorrectnessOnNonAnswer { position, kind } => {
                write!(
                    f,
                    "entry {position} ({}) carries a correctness flag but is not an answer",
                    kind.as_str()
                )
            }
            IndexError::UnknownLesson { lesson_id } => {
                write!(f, "entry references lesson '{lesson_id}' missing from the TOC")
            }
        }
    }
}

impl std::error::Error for IndexError {}

// =============================================================================
// ANSWER
// =============================================================================

/// The sole output contract of the answerer toward the UI.
///
/// `ok: false` covers the whole failure taxonomy - not-ready, empty input,
/// and no-match - as ordinary values. "No answer found" is an expected,
/// first-class outcome, never an error to recover from. Line breaks in
/// `message` are meaningful: each `\n` starts a new visual line or bullet.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Answer {
    pub ok: bool,
    pub message: String,
}

impl Answer {
    /// A successful answer.
    pub fn reply(message: impl Into<String>) -> Self {
        Self {
            ok: true,
            message: message.into(),
        }
    }

    /// A friendly miss: not-ready, empty input, or nothing matched.
    pub fn miss(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            message: message.into(),
        }
    }
}
