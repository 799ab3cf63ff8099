//! Markup stripping and string normalization.
//!
//! Course text arrives as HTML fragments produced by an authoring tool.
//! Everything stored in the index goes through [`strip_markup`] first, so
//! downstream code can treat entry text as plain prose. The function is
//! pure and knows nothing about any rendering engine.

use regex::Regex;
use std::sync::LazyLock;

#[cfg(feature = "unicode-normalization")]
use unicode_normalization::UnicodeNormalization;

/// Matches one HTML/XML tag, e.g. `<p>`, `</span>`, `<br/>`.
/// Tags are replaced with a space so `</p><p>` cannot glue words together.
static TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").expect("tag pattern"));

/// Turn a markup fragment into clean prose: drop tags, decode entities,
/// collapse whitespace.
///
/// Tags are removed before entities are decoded, so escaped text such as
/// `&lt;b&gt;` survives as literal `<b>` rather than being eaten as markup.
pub fn strip_markup(raw: &str) -> String {
    let untagged = TAG.replace_all(raw, " ");
    let decoded = html_escape::decode_html_entities(untagged.as_ref());
    collapse_whitespace(&decoded)
}

/// Collapse all runs of whitespace (including non-breaking spaces) to a
/// single ASCII space and trim the ends.
pub fn collapse_whitespace(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Normalize a string for matching: lowercase, fold diacritics away,
/// collapse whitespace.
///
/// Folding is NFD decomposition with the combining marks dropped, so an
/// ASCII query like "cafe" hits accented course text ("café"). Queries and
/// candidates both go through here, which is what makes matching case- and
/// accent-insensitive.
#[cfg(feature = "unicode-normalization")]
pub fn normalize(value: &str) -> String {
    let folded: String = value.nfd().filter(|c| !is_combining_mark(*c)).collect();
    collapse_whitespace(&folded.to_lowercase())
}

/// Without the `unicode-normalization` feature, normalization is lowercase
/// plus whitespace collapse. Enough for ASCII content; accented text will
/// only match itself.
#[cfg(not(feature = "unicode-normalization"))]
pub fn normalize(value: &str) -> String {
    collapse_whitespace(&value.to_lowercase())
}

/// Check if a character is a combining mark (diacritic).
///
/// Combining marks have Unicode category "Mn" (Mark, Nonspacing).
/// Examples: ́ (acute), ̄ (macron), ̣ (dot below)
#[cfg(feature = "unicode-normalization")]
fn is_combining_mark(c: char) -> bool {
    matches!(c,
        '\u{0300}'..='\u{036F}' |  // Combining Diacritical Marks
        '\u{1DC0}'..='\u{1DFF}' |  // Combining Diacritical Marks Supplement
        '\u{20D0}'..='\u{20FF}' |  // Combining Diacritical Marks for Symbols
        '\u{FE20}'..='\u{FE2F}'    // Combining Half Marks
    )
}
