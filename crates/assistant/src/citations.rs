//! Citation labels derived from answer text.
//!
//! Citations are not looked up anywhere. They are section references the
//! model happened to write, picked out by pattern.

use crate::profile::STATUTE_NAME;
use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

/// Maximum number of section matches turned into citations.
pub const MAX_CITATIONS: usize = 3;

/// "Section 12", "Section 7(a)", "Section 2(68)".
static RE_SECTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Section [0-9]+(\([a-z0-9]+\))?").unwrap());

/// Citation used when the text names no section.
pub fn general_provisions() -> String {
    format!("{}, General Provisions", STATUTE_NAME)
}

/// Extract citation labels from answer text.
///
/// The first [`MAX_CITATIONS`] matches are labelled with the statute name,
/// then duplicates are dropped keeping first-seen order. Always returns at
/// least one label.
pub fn extract_citations(text: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    let citations: Vec<String> = RE_SECTION
        .find_iter(text)
        .take(MAX_CITATIONS)
        .map(|m| format!("{}, {}", STATUTE_NAME, m.as_str()))
        .filter(|label| seen.insert(label.clone()))
        .collect();

    if citations.is_empty() {
        vec![general_provisions()]
    } else {
        citations
    }
}
