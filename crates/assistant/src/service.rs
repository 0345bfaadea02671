//! The legal assistant: one question in, one answer out.

use crate::citations::extract_citations;
use crate::profile::InstructionProfile;
use crate::types::{Answer, Query};
use lexrag_core::{config::AppConfig, AppError, AppResult};
use lexrag_llm::{create_client, LlmClient, LlmRequest};
use std::sync::Arc;

/// Answer substituted when the model returns no text.
pub const NO_ANSWER_TEXT: &str = "I apologize, I could not generate an answer at this time.";

/// Forwards questions to the model under the fixed instruction profile.
///
/// Holds no per-question state. Concurrent calls are independent.
pub struct LegalAssistant {
    client: Arc<dyn LlmClient>,
    profile: InstructionProfile,
}

impl LegalAssistant {
    pub fn new(client: Arc<dyn LlmClient>, profile: InstructionProfile) -> Self {
        Self { client, profile }
    }

    /// Build an assistant from application configuration.
    ///
    /// The credential is passed through as found, possibly absent.
    pub fn from_config(config: &AppConfig) -> AppResult<Self> {
        let api_key = config.resolve_api_key(&config.provider);
        let client = create_client(&config.provider, config.endpoint.as_deref(), api_key.as_deref())
            .map_err(AppError::Config)?;

        Ok(Self::new(client, InstructionProfile::for_model(&config.model)))
    }

    pub fn profile(&self) -> &InstructionProfile {
        &self.profile
    }

    /// Build the upstream request for a query.
    pub fn build_request(&self, query: &Query) -> LlmRequest {
        LlmRequest::new(query.as_str(), &self.profile.model)
            .with_system(self.profile.system_instruction)
            .with_temperature(self.profile.temperature)
    }

    /// Ask one question.
    ///
    /// Sends exactly one request. Any upstream failure is logged and
    /// reported as [`AppError::AssistantUnavailable`].
    pub async fn ask(&self, query: &Query) -> AppResult<Answer> {
        tracing::info!(provider = self.client.provider_name(), "Consulting legal assistant");

        let request = self.build_request(query);

        let response = self.client.complete(&request).await.map_err(|e| {
            tracing::error!("Legal assistant request failed: {}", e);
            AppError::AssistantUnavailable
        })?;

        tracing::debug!(
            "Token usage - Prompt: {}, Completion: {}, Total: {}",
            response.usage.prompt_tokens,
            response.usage.completion_tokens,
            response.usage.total_tokens
        );

        let answer = if response.content.is_empty() {
            tracing::warn!(
                finish_reason = ?response.finish_reason,
                "Model returned no text; using apology"
            );
            NO_ANSWER_TEXT.to_string()
        } else {
            response.content
        };

        let citations = extract_citations(&answer);
        tracing::info!(citations = citations.len(), "Answer ready");

        Ok(Answer { answer, citations })
    }
}
