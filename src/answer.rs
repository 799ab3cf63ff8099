//! The query answerer: a pure function from query text to [`Answer`].
//!
//! Each call runs the same fixed pipeline over the read-only index:
//! guards, intent classification, pool narrowing, overlap scoring with
//! bonuses, best-match selection, focused sentence extraction, and text
//! cleanup. There is no state between calls - the index is the only input
//! besides the query, so answers are fully deterministic.
//!
//! # INVARIANTS (DO NOT VIOLATE)
//!
//! ## SINGLE_SOURCE
//! An answer is extracted from exactly one entry, never blended from
//! several. Mixing fragments of unrelated blocks produces incoherent text.
//!
//! ## FIRST_MATCH_WINS
//! Score comparisons are strictly-greater, so among equal scores the
//! earliest entry in document order is selected. Combined with the
//! indexer's DOCUMENT_ORDER invariant this makes answers reproducible.
//!
//! ## MISS_IS_A_VALUE
//! Every failure (index not ready, empty query, nothing above threshold)
//! is an `Answer { ok: false, .. }`, never a panic or error type.

use std::sync::LazyLock;

use regex::Regex;

use crate::cleanup::{clean_answer, clean_fragment};
use crate::extract::{
    capitalize_first, exclude_familiar_word_artifacts, extract_objective_clauses, focus_voice,
    select_top_sentences, split_sentences, truncate_preferring_boundary,
};
use crate::intent::{QueryIntent, Topic};
use crate::tokens::{score_match, tokenize};
use crate::types::{Answer, ContentEntry, CourseIndex, EntryKind};

/// Reply when the index has not been populated yet.
pub const STILL_LOADING_MESSAGE: &str =
    "I'm still loading the course content. Please try again in a moment.";

/// Reply when the query tokenizes to nothing.
pub const ASK_PROMPT_MESSAGE: &str =
    "Please type a question about the course and I'll look it up for you.";

/// Fixed reply when an inclusive-language query finds no inclusive content.
/// Points at the named course section instead of the generic suggestions.
pub const INCLUSIVE_MISS_MESSAGE: &str =
    "I couldn't find details about that just now. Have a look at the \
     Inclusive Language section of the course for the full guidance.";

/// Generic miss lead line; lesson-title suggestions follow as bullets.
pub const NOT_FOUND_MESSAGE: &str = "I couldn't find that in the course content.";

/// Attribution lead-in prefixed to every successful answer.
pub const ANSWER_LEAD_IN: &str = "Here's what the course says:";

/// A paragraph or heading qualifies for the objectives special case when it
/// carries one of these markers alongside an objective verb ("you will:
/// Recognise..., Apply..., Use...").
static OBJECTIVE_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(objectives?|outcomes?|at the end|by the end|you\s+will|you'll)\b").unwrap()
});

/// Defining verbs that mark a sentence as definitional prose, worth a bonus
/// for "what is..." queries.
static DEFINING_VERB: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(is|are|means|refers to|describes|defined as)\b").unwrap()
});

/// Scoring and length constants, tuned empirically against the course.
///
/// These values have no derivation - they were adjusted until answers read
/// well. Treat them as product decisions, not math.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tunables {
    /// Candidates scoring below this are discarded outright.
    pub min_score: f64,
    /// Added when the query is definitional and the candidate contains a
    /// defining verb.
    pub defining_verb_bonus: f64,
    /// Added when the candidate is a paragraph and the query is
    /// definitional or names a known concept. Paragraphs carry the prose;
    /// headings are terse labels.
    pub paragraph_bonus: f64,
    /// Character cap for the raw-prefix fallback when no sentence scores.
    pub prefix_fallback_chars: usize,
    /// Character cap for a joined-sentence answer.
    pub sentence_answer_chars: usize,
    /// Character cap for a bulleted-list answer.
    pub bullet_answer_chars: usize,
    /// How many sentences a focused extraction keeps.
    pub max_sentences: usize,
    /// How many lesson titles a generic miss suggests.
    pub max_suggestions: usize,
}

impl Default for Tunables {
    fn default() -> Self {
        Self {
            min_score: 0.35,
            defining_verb_bonus: 0.25,
            paragraph_bonus: 0.35,
            prefix_fallback_chars: 150,
            sentence_answer_chars: 220,
            bullet_answer_chars: 260,
            max_sentences: 2,
            max_suggestions: 4,
        }
    }
}

/// Answer a free-text query against the index with default tuning.
pub fn answer(index: &CourseIndex, query: &str) -> Answer {
    answer_with(index, query, &Tunables::default())
}

/// Answer a free-text query with explicit tuning. Pure and synchronous;
/// the index is only read.
pub fn answer_with(index: &CourseIndex, query: &str, tunables: &Tunables) -> Answer {
    if index.is_empty() {
        return Answer::miss(STILL_LOADING_MESSAGE);
    }

    let tokens = tokenize(query);
    if tokens.is_empty() {
        return Answer::miss(ASK_PROMPT_MESSAGE);
    }

    let intent = QueryIntent::classify(query);

    // Working pool: all entries, minus quiz material unless asked for.
    let mut pool: Vec<&ContentEntry> = index
        .entries
        .iter()
        .filter(|entry| {
            intent.wants_examples
                || !matches!(entry.kind, EntryKind::Question | EntryKind::Answer)
        })
        .collect();

    if let Some(topic) = intent.topic {
        let marker = topic.marker();
        let narrowed: Vec<&ContentEntry> = pool
            .iter()
            .copied()
            .filter(|entry| entry.text.to_lowercase().contains(marker))
            .collect();
        if narrowed.is_empty() {
            // The inclusive filter is the one topic that answers its own
            // miss instead of falling through to general scoring.
            if topic == Topic::Inclusive {
                return Answer::miss(INCLUSIVE_MISS_MESSAGE);
            }
        } else {
            pool = narrowed;
        }
    }

    if intent.wants_objectives {
        if let Some(reply) = answer_objectives(&pool, tunables) {
            return reply;
        }
    }

    let Some(best) = best_candidate(&pool, &tokens, &intent, tunables) else {
        return Answer::miss(miss_with_suggestions(index, tunables));
    };

    let body = extract_body(best, &tokens, &intent, tunables);
    let cleaned = clean_answer(&body);
    if cleaned.is_empty() {
        // Cleanup can eat an entry that was nothing but an aside.
        return Answer::miss(miss_with_suggestions(index, tunables));
    }
    Answer::reply(assemble(&cleaned, tunables))
}

/// Objectives special case: find a paragraph or heading that looks like the
/// objectives blurb and render its verb-led clauses as bullets. Returns
/// `None` to fall through to general scoring.
fn answer_objectives(pool: &[&ContentEntry], tunables: &Tunables) -> Option<Answer> {
    let source = pool.iter().find(|entry| {
        matches!(entry.kind, EntryKind::Paragraph | EntryKind::Heading)
            && OBJECTIVE_MARKER.is_match(&entry.text)
            && crate::extract::contains_objective_verb(&entry.text)
    })?;

    let clauses = extract_objective_clauses(&source.text);
    if clauses.is_empty() {
        return None;
    }
    Some(Answer::reply(bullet_list(&clauses, tunables)))
}

/// Score the pool and keep the single best candidate at or above the
/// threshold. Strictly-greater comparison: first entry wins ties.
fn best_candidate<'a>(
    pool: &[&'a ContentEntry],
    tokens: &[String],
    intent: &QueryIntent,
    tunables: &Tunables,
) -> Option<&'a ContentEntry> {
    let mut best: Option<(&ContentEntry, f64)> = None;
    for entry in pool {
        let mut score = score_match(tokens, &entry.text);
        if intent.is_definitional && DEFINING_VERB.is_match(&entry.text) {
            score += tunables.defining_verb_bonus;
        }
        if entry.kind == EntryKind::Paragraph
            && (intent.is_definitional || intent.names_known_concept())
        {
            score += tunables.paragraph_bonus;
        }
        if score < tunables.min_score {
            continue;
        }
        if best.map_or(true, |(_, top)| score > top) {
            best = Some((entry, score));
        }
    }
    best.map(|(entry, _)| entry)
}

/// Focused sentence extraction from the chosen entry.
fn extract_body(
    entry: &ContentEntry,
    tokens: &[String],
    intent: &QueryIntent,
    tunables: &Tunables,
) -> String {
    let mut sentences = split_sentences(&entry.text);
    sentences = focus_voice(sentences, intent.mentions_active, intent.mentions_passive);
    if intent.topic == Some(Topic::FamiliarWords) {
        sentences = exclude_familiar_word_artifacts(sentences);
    }

    let selected = select_top_sentences(&sentences, tokens, tunables.max_sentences);
    if selected.is_empty() {
        // Nothing scored: better a raw prefix of the entry than silence.
        truncate_preferring_boundary(&entry.text, tunables.prefix_fallback_chars)
    } else {
        truncate_preferring_boundary(&selected.join(" "), tunables.sentence_answer_chars)
    }
}

/// Prefix the lead-in; multi-line bodies render as bullets.
fn assemble(cleaned: &str, tunables: &Tunables) -> String {
    if cleaned.contains('\n') {
        let lines: Vec<String> = cleaned.lines().map(str::to_string).collect();
        bullet_list(&lines, tunables)
    } else {
        format!("{ANSWER_LEAD_IN} {cleaned}")
    }
}

/// Render lines as a bulleted list under the lead-in, cleaning each line
/// independently and keeping within the bullet length cap.
fn bullet_list(lines: &[String], tunables: &Tunables) -> String {
    let mut message = ANSWER_LEAD_IN.to_string();
    let mut used = 0usize;
    for line in lines {
        let cleaned = capitalize_first(&clean_fragment(line));
        if cleaned.is_empty() {
            continue;
        }
        let cost = cleaned.chars().count();
        if used > 0 && used + cost > tunables.bullet_answer_chars {
            break;
        }
        message.push_str("\n\u{2022} ");
        message.push_str(&cleaned);
        used += cost;
    }
    message
}

/// Generic miss: the fixed lead line plus up to `max_suggestions` lesson
/// titles drawn from the TOC, in course order.
fn miss_with_suggestions(index: &CourseIndex, tunables: &Tunables) -> String {
    let suggestions: Vec<&str> = index
        .toc
        .iter()
        .map(|lesson| lesson.lesson_title.trim())
        .filter(|title| !title.is_empty())
        .take(tunables.max_suggestions)
        .collect();

    if suggestions.is_empty() {
        return NOT_FOUND_MESSAGE.to_string();
    }

    let mut message = format!("{NOT_FOUND_MESSAGE} You could ask me about:");
    for title in suggestions {
        message.push_str("\n\u{2022} ");
        message.push_str(title);
    }
    message
}
