//! Query intent classification.
//!
//! A handful of case-insensitive patterns over the raw query decide how the
//! candidate pool is filtered and boosted. Intents are independent flags -
//! several can be true for the same query - plus at most one topic filter.
//!
//! These are not NLP rules. Each pattern targets phrasing observed in real
//! learner questions against this course, nothing more.

use std::sync::LazyLock;

use regex::Regex;

// `\b` treats a hyphen as a word boundary, so `\bgoals?\b` would fire
// inside "goal-less" and `\bactive\b` inside "radio-active". Every query
// pattern here uses explicit `(^|[^\w-]) ... ($|[^\w-])` context instead,
// which keeps hyphenated compounds whole.

/// "objectives", "goals", "learning outcomes" - the learner wants the
/// course objectives list.
static OBJECTIVES: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(^|[^\w-])(objectives?|goals?|learning\s+outcomes?)($|[^\w-])").unwrap()
});

/// "what is X", "define X", "meaning of X" - a definition is wanted, which
/// boosts entries containing a defining verb.
static DEFINITIONAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(^|[^\w-])(what\s+(is|are)|define|definition|meaning\s+of)($|[^\w-])")
        .unwrap()
});

/// "example", "quiz", "question", "practice" - the learner explicitly asks
/// for quiz material, which relaxes the default question/answer exclusion.
static EXAMPLES: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(^|[^\w-])(examples?|quiz(?:zes)?|questions?|practice)($|[^\w-])").unwrap()
});

static ACTIVE_VOICE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(^|[^\w-])active($|[^\w-])").unwrap());

static PASSIVE_VOICE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(^|[^\w-])passive($|[^\w-])").unwrap());

/// A domain topic the query names, narrowing the pool to entries whose text
/// contains the matching marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Topic {
    Inclusive,
    PlainLanguage,
    ActiveVoice,
    PassiveVoice,
    ShortSentences,
    KeyPrinciples,
    FamiliarWords,
    Introduction,
}

impl Topic {
    /// The lowercase marker an entry's text must contain to survive this
    /// topic's pool filter.
    pub fn marker(self) -> &'static str {
        match self {
            Topic::Inclusive => "inclusive",
            Topic::PlainLanguage => "plain language",
            Topic::ActiveVoice => "active voice",
            Topic::PassiveVoice => "passive voice",
            Topic::ShortSentences => "short sentence",
            Topic::KeyPrinciples => "key principles",
            Topic::FamiliarWords => "familiar words",
            Topic::Introduction => "introduction",
        }
    }
}

/// Everything the answerer needs to know about a query's intent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QueryIntent {
    /// The learner asked for the course objectives.
    pub wants_objectives: bool,
    /// The query is definitional ("what is...", "define...").
    pub is_definitional: bool,
    /// The learner asked for examples or quiz material.
    pub wants_examples: bool,
    /// At most one topic filter; first marker hit wins.
    pub topic: Option<Topic>,
    /// Query mentions "active" (voice). Kept separately from `topic`
    /// because the sentence-level focus filter needs exclusivity.
    pub mentions_active: bool,
    /// Query mentions "passive" (voice).
    pub mentions_passive: bool,
}

impl QueryIntent {
    /// Classify a raw query. Case-insensitive, order-independent.
    pub fn classify(query: &str) -> Self {
        let lower = query.to_lowercase();
        let mentions_active = ACTIVE_VOICE.is_match(query);
        let mentions_passive = PASSIVE_VOICE.is_match(query);

        QueryIntent {
            wants_objectives: OBJECTIVES.is_match(query),
            is_definitional: DEFINITIONAL.is_match(query),
            wants_examples: EXAMPLES.is_match(query),
            topic: detect_topic(&lower, mentions_active, mentions_passive),
            mentions_active,
            mentions_passive,
        }
    }

    /// True when the query names some known course concept. Paragraph
    /// entries get a score bonus for such queries, since paragraphs hold
    /// the prose while headings are terse labels.
    pub fn names_known_concept(&self) -> bool {
        self.topic.is_some() || self.mentions_active || self.mentions_passive
    }
}

/// First marker found in a fixed order wins. When the query mentions both
/// active and passive voice, neither voice topic applies - both concepts
/// are relevant and the pool must keep entries about either.
fn detect_topic(lower: &str, mentions_active: bool, mentions_passive: bool) -> Option<Topic> {
    if lower.contains("inclusive") {
        return Some(Topic::Inclusive);
    }
    if lower.contains("plain language") {
        return Some(Topic::PlainLanguage);
    }
    match (mentions_active, mentions_passive) {
        (true, false) => return Some(Topic::ActiveVoice),
        (false, true) => return Some(Topic::PassiveVoice),
        _ => {}
    }
    if lower.contains("short sentence") {
        return Some(Topic::ShortSentences);
    }
    if lower.contains("key principles") || lower.contains("principles") {
        return Some(Topic::KeyPrinciples);
    }
    if lower.contains("familiar words") || lower.contains("familiar") {
        return Some(Topic::FamiliarWords);
    }
    if lower.contains("introduction") || lower.contains("intro ") || lower.ends_with("intro") {
        return Some(Topic::Introduction);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn objectives_phrasings() {
        assert!(QueryIntent::classify("what are the learning outcomes?").wants_objectives);
        assert!(QueryIntent::classify("course goals").wants_objectives);
        assert!(QueryIntent::classify("OBJECTIVES").wants_objectives);
        assert!(!QueryIntent::classify("my goal-less question").wants_objectives);
    }

    #[test]
    fn definitional_phrasings() {
        assert!(QueryIntent::classify("what is plain language").is_definitional);
        assert!(QueryIntent::classify("define jargon").is_definitional);
        assert!(QueryIntent::classify("meaning of inclusive language").is_definitional);
        assert!(!QueryIntent::classify("show me the quiz").is_definitional);
    }

    #[test]
    fn examples_relax_quiz_exclusion() {
        assert!(QueryIntent::classify("give me an example").wants_examples);
        assert!(QueryIntent::classify("practice questions please").wants_examples);
        assert!(!QueryIntent::classify("what is passive voice").wants_examples);
    }

    #[test]
    fn intents_can_combine() {
        let intent = QueryIntent::classify("what is an example of passive voice?");
        assert!(intent.is_definitional);
        assert!(intent.wants_examples);
        assert!(intent.mentions_passive);
    }

    #[test]
    fn exclusive_voice_mention_sets_topic() {
        assert_eq!(
            QueryIntent::classify("what is passive voice").topic,
            Some(Topic::PassiveVoice)
        );
        assert_eq!(
            QueryIntent::classify("active voice tips").topic,
            Some(Topic::ActiveVoice)
        );
    }

    #[test]
    fn both_voices_apply_no_voice_topic() {
        let intent = QueryIntent::classify("active voice vs passive voice");
        assert!(intent.mentions_active && intent.mentions_passive);
        assert_eq!(intent.topic, None);
    }

    #[test]
    fn inclusive_wins_over_later_markers() {
        let intent = QueryIntent::classify("inclusive language key principles");
        assert_eq!(intent.topic, Some(Topic::Inclusive));
    }

    #[test]
    fn hyphenated_compounds_trigger_nothing() {
        assert!(!QueryIntent::classify("my goal-less question").wants_objectives);
        assert!(!QueryIntent::classify("question-free writing tips").wants_examples);
        assert!(!QueryIntent::classify("a well-define habit").is_definitional);
        let intent = QueryIntent::classify("radio-active materials");
        assert!(!intent.mentions_active);
        assert_eq!(intent.topic, None);
    }

    #[test]
    fn plain_query_has_no_intent() {
        let intent = QueryIntent::classify("tell me something");
        assert_eq!(intent, QueryIntent::default());
    }
}
