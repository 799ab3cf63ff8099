//! Query tokenization and bag-of-words overlap scoring.
//!
//! The scorer is deliberately cheap and explainable: exact token hits score
//! full credit, morphological near-misses (plurals, suffixes) score half
//! credit through substring containment, and the sum is normalized by the
//! query length. No stemming, no weights learned from data.
//!
//! # INVARIANTS (DO NOT VIOLATE)
//!
//! ## SCORE_RANGE
//! For a non-empty query token list, `score_match` returns a value in
//! `[0, 1]`: each token contributes at most `EXACT_CREDIT` (1.0), and the
//! sum is divided by the token count. An empty query scores 0.0.
//!
//! ## PARTIAL_CAP
//! A substring hit earns exactly `PARTIAL_CREDIT` (0.5), half an exact hit,
//! so fuzzy matches can never outrank the same number of verbatim matches.
//!
//! ## SHORT_TOKEN_GUARD
//! Substring credit requires the query token to be at least
//! `MIN_PARTIAL_TOKEN_LEN` characters. A two-letter token like "is" would
//! otherwise match inside almost every candidate. Containment of a token
//! that long also forces the candidate token to be at least that long.

use crate::markup::normalize;

/// Minimum query-token length (in characters) for substring partial credit.
pub const MIN_PARTIAL_TOKEN_LEN: usize = 3;

/// Credit for a verbatim hit in the candidate token set.
const EXACT_CREDIT: f64 = 1.0;

/// Credit for a substring hit. Capped at half weight so that, e.g., a query
/// word that is merely a prefix of an unrelated longer word cannot tie with
/// a real match.
const PARTIAL_CREDIT: f64 = 0.5;

/// Split text into lowercase word tokens.
///
/// Word characters are alphanumerics and `_`; everything else is a
/// separator. Empty tokens are discarded. Input goes through
/// [`normalize`](crate::markup::normalize) first, so "Plain-Language!!"
/// tokenizes to `["plain", "language"]` and "Café" matches "cafe".
pub fn tokenize(text: &str) -> Vec<String> {
    normalize(text)
        .split(|c: char| !c.is_alphanumeric() && c != '_')
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

/// Score how well a candidate text covers the query tokens.
///
/// Per query token: `+1.0` when it appears verbatim among the candidate's
/// tokens, else `+0.5` when it is at least [`MIN_PARTIAL_TOKEN_LEN`] chars
/// long and contained in some candidate token ("sentence" matches
/// "sentences"). The result is the sum divided by the query token count.
pub fn score_match(query_tokens: &[String], candidate: &str) -> f64 {
    if query_tokens.is_empty() {
        return 0.0;
    }

    let candidate_tokens = tokenize(candidate);
    let mut total = 0.0;
    for token in query_tokens {
        if candidate_tokens.iter().any(|c| c == token) {
            total += EXACT_CREDIT;
        } else if token.chars().count() >= MIN_PARTIAL_TOKEN_LEN
            && candidate_tokens.iter().any(|c| c.contains(token.as_str()))
        {
            total += PARTIAL_CREDIT;
        }
    }

    total / query_tokens.len() as f64
}
