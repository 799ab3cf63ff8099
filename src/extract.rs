//! Focused sentence extraction from a matched entry.
//!
//! Once scoring has picked a single best entry, these helpers narrow its
//! text down to the one or two sentences that actually answer the question:
//! split into sentences, apply the voice focus filter and the familiar-words
//! artifact exclusion, score what remains, keep the top two, and truncate
//! at a sentence boundary rather than mid-word.

use std::sync::LazyLock;

use regex::Regex;

use crate::tokens::score_match;

/// At most this many objective clauses are extracted, in source order.
pub const MAX_OBJECTIVE_CLAUSES: usize = 3;

/// Verbs that open an objective clause in this course's objectives
/// paragraph ("Recognise inclusive terms.", "Apply plain language.", ...).
static OBJECTIVE_CLAUSE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(recognise|recognize|apply|use|identify|write|describe|explain|understand|avoid|choose)\b[^.!?;:]*",
    )
    .unwrap()
});

/// Fragments of the familiar-words example table that leak into flattened
/// paragraph text. When the learner asks about familiar words they want the
/// defining prose, not the table of idioms and jargon it contrasts against.
const FAMILIAR_WORD_ARTIFACTS: &[&str] = &["raining cats and dogs", "synergy", "utilize", "e.g."];

/// Split text into sentences.
///
/// A boundary is sentence-ending punctuation followed by whitespace or an
/// uppercase letter. The uppercase case catches source-markup concatenation
/// where the space between sentences was lost ("voice.Active voice...");
/// punctuation followed by anything else (a digit in "2.5", a lowercase
/// letter in "e.g.something") does not split.
pub fn split_sentences(text: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut current = String::new();
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        current.push(c);
        if matches!(c, '.' | '!' | '?') {
            match chars.peek() {
                Some(&next) if next.is_whitespace() || next.is_uppercase() => {
                    let sentence = current.trim().to_string();
                    if !sentence.is_empty() {
                        sentences.push(sentence);
                    }
                    current.clear();
                }
                _ => {}
            }
        }
    }

    let tail = current.trim().to_string();
    if !tail.is_empty() {
        sentences.push(tail);
    }
    sentences
}

/// True when the text contains at least one objective-verb marker.
pub fn contains_objective_verb(text: &str) -> bool {
    OBJECTIVE_CLAUSE.is_match(text)
}

/// Extract up to [`MAX_OBJECTIVE_CLAUSES`] verb-led objective clauses, in
/// source order, each capitalized and terminally punctuated.
pub fn extract_objective_clauses(text: &str) -> Vec<String> {
    OBJECTIVE_CLAUSE
        .find_iter(text)
        .take(MAX_OBJECTIVE_CLAUSES)
        .map(|m| finish_clause(m.as_str()))
        .collect()
}

fn finish_clause(clause: &str) -> String {
    let trimmed = clause.trim();
    let mut out = capitalize_first(trimmed);
    if !out.ends_with(['.', '!', '?']) {
        out.push('.');
    }
    out
}

/// Uppercase the first alphabetic character of a string.
pub fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Restrict to sentences about exactly one of active/passive voice.
///
/// Applies only when the query names one voice and not the other, and only
/// when at least one sentence actually mentions it - otherwise the full
/// list is kept. A query naming both voices gets no filter at all.
pub fn focus_voice(
    sentences: Vec<String>,
    mentions_active: bool,
    mentions_passive: bool,
) -> Vec<String> {
    let term = match (mentions_active, mentions_passive) {
        (true, false) => "active",
        (false, true) => "passive",
        _ => return sentences,
    };
    let focused: Vec<String> = sentences
        .iter()
        .filter(|s| s.to_lowercase().contains(term))
        .cloned()
        .collect();
    if focused.is_empty() {
        sentences
    } else {
        focused
    }
}

/// Drop sentences that are fragments of the familiar-words example table.
///
/// Keeps the original list when exclusion would leave nothing, since a bad
/// sentence beats no sentence.
pub fn exclude_familiar_word_artifacts(sentences: Vec<String>) -> Vec<String> {
    let kept: Vec<String> = sentences
        .iter()
        .filter(|s| {
            let lower = s.to_lowercase();
            !FAMILIAR_WORD_ARTIFACTS
                .iter()
                .any(|artifact| lower.contains(artifact))
        })
        .cloned()
        .collect();
    if kept.is_empty() {
        sentences
    } else {
        kept
    }
}

/// Keep the `keep` highest-scoring sentences with a positive score,
/// returned in their original text order.
///
/// Ties go to the earlier sentence. Returns an empty list when nothing
/// scores positively; the caller then falls back to a raw prefix.
pub fn select_top_sentences(
    sentences: &[String],
    query_tokens: &[String],
    keep: usize,
) -> Vec<String> {
    let mut scored: Vec<(usize, f64)> = sentences
        .iter()
        .enumerate()
        .map(|(i, s)| (i, score_match(query_tokens, s)))
        .filter(|&(_, score)| score > 0.0)
        .collect();

    scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal).then(a.0.cmp(&b.0)));
    scored.truncate(keep);
    scored.sort_by_key(|&(i, _)| i);

    scored.into_iter().map(|(i, _)| sentences[i].clone()).collect()
}

/// Truncate to at most `max_chars`, preferring a sentence boundary over a
/// mid-word ellipsis.
///
/// When the prefix contains sentence-ending punctuation, the cut lands just
/// after the last one and no ellipsis is added. Otherwise the cut backs up
/// to the last space (or falls back to a hard character cut) and "..." marks
/// the elision.
pub fn truncate_preferring_boundary(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }

    let prefix: String = text.chars().take(max_chars).collect();
    if let Some(boundary) = prefix.rfind(['.', '!', '?']) {
        if boundary > 0 {
            return prefix[..=boundary].trim().to_string();
        }
    }

    let cut = match prefix.rfind(' ') {
        Some(space) if space > 0 => prefix[..space].trim_end().to_string(),
        _ => prefix,
    };
    format!("{cut}...")
}
