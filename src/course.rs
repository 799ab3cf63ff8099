//! The read-only course content tree, as produced by the authoring tool.
//!
//! This is the input side of the pipeline: a nested lesson/block/item tree
//! deserialized from JSON. Every field is defaulted so that a node missing a
//! field deserializes to "absent" rather than failing the whole course -
//! malformed nodes contribute nothing and are skipped during indexing, never
//! raised as errors.
//!
//! The indexer only reads this tree; nothing in the crate mutates it.

use serde::Deserialize;

/// Block `type` strings the authoring tool uses for knowledge checks.
///
/// A node with one of these types (or with a non-empty `answers` list) is
/// treated as quiz-like: its `title` is a question stem, its choices are
/// answer entries.
const QUIZ_KINDS: &[&str] = &["knowledgeCheck", "quiz", "multipleChoice", "multipleResponse"];

/// The whole course: an ordered list of lessons.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Course {
    pub lessons: Vec<Lesson>,
}

/// One lesson: an id, a title, and its top-level blocks.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Lesson {
    pub id: String,
    pub title: String,
    pub items: Vec<Block>,
}

/// One content node. Blocks nest arbitrarily via `items`, and carousel
/// blocks nest via `slides`. Any combination of fields may be present;
/// empty strings and empty lists mean "this node doesn't carry that field".
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Block {
    pub id: String,
    /// The authoring tool's block type string (e.g. `"text"`, `"knowledgeCheck"`).
    #[serde(rename = "type")]
    pub kind: String,
    pub heading: String,
    pub paragraph: String,
    pub caption: String,
    /// For quiz-like blocks, the question stem; otherwise a display title.
    pub title: String,
    /// For slides, the slide body text.
    pub description: String,
    pub answers: Vec<Choice>,
    pub slides: Vec<Block>,
    pub items: Vec<Block>,
}

impl Block {
    /// Whether this node is a knowledge check: it either carries answer
    /// choices or has a recognized quiz type string.
    pub fn is_quiz_like(&self) -> bool {
        !self.answers.is_empty() || QUIZ_KINDS.contains(&self.kind.as_str())
    }
}

/// One answer choice in a knowledge check.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Choice {
    pub title: String,
    pub correct: bool,
}
