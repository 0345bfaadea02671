//! Fixed instruction profile sent with every question.

use serde::Serialize;

/// Name of the legal instrument the assistant answers about.
pub const STATUTE_NAME: &str = "Companies Act 2013";

/// Model used when configuration does not name one.
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Sampling temperature. Kept low for factual legal answers.
pub const TEMPERATURE: f32 = 0.3;

/// System instruction establishing the assistant persona and its rules.
pub const SYSTEM_INSTRUCTION: &str = "\
You are LexRAG, an AI legal assistant specialized in the Indian Companies Act 2013.

Rules:
1. Answer the user's question based strictly on general knowledge of the Indian Companies Act 2013.
2. Provide citations (Sections, Sub-sections) where possible.
3. Format the answer in clear Markdown.
4. Do not make up laws. If you are unsure, state that.
5. Keep the tone professional, legal, yet accessible.";

/// The instruction profile a request is built from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InstructionProfile {
    pub system_instruction: &'static str,
    pub temperature: f32,
    pub model: String,
}

impl InstructionProfile {
    /// Profile with the fixed persona and temperature for the given model.
    pub fn for_model(model: impl Into<String>) -> Self {
        Self {
            system_instruction: SYSTEM_INSTRUCTION,
            temperature: TEMPERATURE,
            model: model.into(),
        }
    }
}

impl Default for InstructionProfile {
    fn default() -> Self {
        Self::for_model(DEFAULT_MODEL)
    }
}
