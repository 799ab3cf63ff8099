//! Deterministic question answering over e-learning course content.
//!
//! This crate flattens a nested lesson/block content tree into a typed,
//! ordered entry list, then answers free-text questions against it with a
//! cheap, explainable pipeline: token-overlap scoring, intent-driven pool
//! filtering, focused sentence extraction, and text cleanup. No ML, no
//! network, no persistence - the same index and query always produce the
//! same answer.
//!
//! # Architecture
//!
//! ```text
//! ┌────────────┐     ┌─────────────┐     ┌─────────────┐
//! │ course.rs  │────▶│ indexer.rs  │────▶│  answer.rs  │
//! │ (Course,   │     │ (build_index│     │ (answer)    │
//! │  Block)    │     │  entries+toc│     │             │
//! └────────────┘     └─────────────┘     └─────────────┘
//!       │                  │                   │
//!       ▼                  ▼                   ▼
//! ┌─────────────────────────────────────────────────────┐
//! │   markup.rs · tokens.rs · intent.rs · extract.rs    │
//! │   cleanup.rs   (pure string helpers, no state)      │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use docent::{answer, Course, CourseIndex};
//!
//! let course: Course = serde_json::from_str(docent::testing::SAMPLE_COURSE_JSON).unwrap();
//! let index = CourseIndex::build(&course);
//!
//! let reply = answer(&index, "what is plain language?");
//! assert!(reply.ok);
//! ```
//!
//! The index is immutable after build and shared by reference; to refresh
//! content, build a new `CourseIndex` and swap it in. All types are
//! `Send + Sync` (owned strings, no interior mutability), so an embedding
//! application may publish the index behind an `Arc` snapshot.

// Module declarations
pub mod answer;
mod cleanup;
pub mod contracts;
mod course;
mod extract;
mod indexer;
mod intent;
mod markup;
pub mod testing;
mod tokens;
mod types;

// Re-exports for public API
pub use answer::{
    answer, answer_with, Tunables, ANSWER_LEAD_IN, ASK_PROMPT_MESSAGE, INCLUSIVE_MISS_MESSAGE,
    NOT_FOUND_MESSAGE, STILL_LOADING_MESSAGE,
};
pub use cleanup::clean_answer;
pub use course::{Block, Choice, Course, Lesson};
pub use extract::{split_sentences, truncate_preferring_boundary};
pub use indexer::{build_index, BLOCK_TITLE_MAX_CHARS, UNTITLED_BLOCK_LABEL};
pub use intent::{QueryIntent, Topic};
pub use markup::{normalize, strip_markup};
pub use tokens::{score_match, tokenize, MIN_PARTIAL_TOKEN_LEN};
pub use types::{
    Answer, BlockSummary, ContentEntry, CourseIndex, EntryKind, IndexError, IndexStats, TocEntry,
};
