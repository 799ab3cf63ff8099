//! Text repair for answers assembled from flattened course markup.
//!
//! Each transform here targets one concrete artifact of the upstream HTML
//! flattening, named and documented as such. They are workarounds for a
//! formatting quirk in the source content, not general NLP rules, and they
//! run in a fixed order from [`clean_answer`].

use std::sync::LazyLock;

use regex::Regex;

use crate::extract::capitalize_first;
use crate::markup::collapse_whitespace;

/// A complete parenthetical aside, e.g. "(see the glossary)".
static PARENTHETICAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*\([^)]*\)").unwrap());

/// An unterminated trailing parenthetical, produced when truncation cuts an
/// aside off mid-sentence: "clear writing (for example, usi".
static TRAILING_PARENTHETICAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*\([^)]*$").unwrap());

/// Whitespace drifting in front of punctuation after markup removal:
/// "sentences ." → "sentences.".
static SPACE_BEFORE_PUNCT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+([.,;:!?])").unwrap());

/// Sentence punctuation glued to the next sentence's first letter, from
/// concatenated source nodes: "direct.Passive voice" → "direct. Passive voice".
static PUNCT_THEN_LETTER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([.!?])([A-Za-z])").unwrap());

/// A contraction glued to a following capitalized word, another node
/// concatenation artifact: "don'tUse jargon" → "don't Use jargon".
static CONTRACTION_THEN_CAPITAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\w'(?:s|t|re|ll|ve|d|m))([A-Z])").unwrap());

/// Detects run-together heading phrases from flattened list markup: a
/// lowercase letter immediately followed by a capitalized multi-word phrase,
/// as in "Short SentencesActive Voice".
static HEADING_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[a-z][A-Z][a-z]+\s+[A-Z]").unwrap());

/// The junction point inside a heading run, used to split it into lines.
static HEADING_JUNCTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([a-z])([A-Z])").unwrap());

/// Strip parenthetical asides entirely, including an unterminated trailing
/// one.
pub fn strip_parentheticals(text: &str) -> String {
    let without_complete = PARENTHETICAL.replace_all(text, "");
    TRAILING_PARENTHETICAL.replace(&without_complete, "").into_owned()
}

/// Remove stray whitespace before punctuation.
pub fn repair_punctuation_spacing(text: &str) -> String {
    SPACE_BEFORE_PUNCT.replace_all(text, "$1").into_owned()
}

/// Insert the missing space where sentence punctuation runs straight into
/// the next letter.
pub fn separate_glued_sentences(text: &str) -> String {
    PUNCT_THEN_LETTER.replace_all(text, "$1 $2").into_owned()
}

/// Insert the missing space between a contraction and an immediately
/// following capitalized word.
pub fn separate_glued_contractions(text: &str) -> String {
    CONTRACTION_THEN_CAPITAL.replace_all(text, "$1 $2").into_owned()
}

/// True when the text contains a run-together heading phrase that should be
/// rendered as a list.
pub fn has_heading_run(text: &str) -> bool {
    HEADING_RUN.is_match(text)
}

/// Split run-together heading phrases onto separate lines.
///
/// Only called when [`has_heading_run`] fired; splitting ordinary prose at
/// every lowercase-uppercase junction would shred words like "JavaScript".
pub fn split_heading_runs(text: &str) -> String {
    HEADING_JUNCTION.replace_all(text, "$1\n$2").into_owned()
}

/// The full cleanup pipeline for an extracted answer fragment.
///
/// Runs every repair in order, then reformats detected heading runs as
/// separate lines and capitalizes each line. The result is single-line
/// prose, or multi-line text the caller renders as bullets.
pub fn clean_answer(text: &str) -> String {
    let cleaned = clean_fragment(text);
    if has_heading_run(&cleaned) {
        split_heading_runs(&cleaned)
            .lines()
            .map(|line| capitalize_first(line.trim()))
            .filter(|line| !line.is_empty())
            .collect::<Vec<_>>()
            .join("\n")
    } else {
        capitalize_first(&cleaned)
    }
}

/// The single-line repairs, without heading-run reformatting. Used for
/// cleaning individual bullet lines independently.
pub fn clean_fragment(text: &str) -> String {
    let text = strip_parentheticals(text);
    let text = collapse_whitespace(&text);
    let text = repair_punctuation_spacing(&text);
    let text = separate_glued_sentences(&text);
    let text = separate_glued_contractions(&text);
    text.trim().to_string()
}
