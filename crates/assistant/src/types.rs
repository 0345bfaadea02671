//! Query and answer types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A non-blank question.
///
/// Blank input never becomes a `Query`, so it can never reach the network.
/// The raw text is kept as typed, surrounding whitespace included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query(String);

impl Query {
    /// Returns `None` when `text` is empty after trimming.
    pub fn new(text: impl Into<String>) -> Option<Self> {
        let text = text.into();
        if text.trim().is_empty() {
            None
        } else {
            Some(Self(text))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The assistant's reply to one query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    /// Markdown-formatted answer text
    pub answer: String,

    /// One to three citation labels, in first-seen order
    pub citations: Vec<String>,
}

/// Progress of a question as shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadingState {
    #[default]
    Idle,
    Loading,
    Success,
    Error,
}
