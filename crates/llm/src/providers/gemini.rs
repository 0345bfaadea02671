//! Gemini LLM provider implementation.
//!
//! Talks to the `generateContent` method of the Generative Language API.
//! API reference: https://ai.google.dev/api/generate-content

use crate::client::{LlmClient, LlmRequest, LlmResponse, LlmUsage};
use crate::types::GEMINI_DEFAULT_ENDPOINT;
use lexrag_core::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// Gemini `generateContent` request body.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    system_instruction: Option<Content>,
    contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    role: Option<String>,
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    text: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f32,
}

/// Gemini `generateContent` response body.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    #[serde(default)]
    usage_metadata: Option<UsageMetadata>,
    #[serde(default)]
    model_version: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    #[serde(default)]
    content: Option<Content>,
    #[serde(default)]
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UsageMetadata {
    #[serde(default)]
    prompt_token_count: Option<u32>,
    #[serde(default)]
    candidates_token_count: Option<u32>,
}

/// Gemini LLM client.
pub struct GeminiClient {
    /// Base URL for the Generative Language API
    base_url: String,

    /// API key sent as `x-goog-api-key`
    api_key: Option<String>,

    /// HTTP client
    client: reqwest::Client,
}

impl GeminiClient {
    /// Create a client against the public endpoint.
    pub fn new(api_key: Option<String>) -> Self {
        Self::with_base_url(GEMINI_DEFAULT_ENDPOINT, api_key)
    }

    /// Create a client with a custom base URL.
    pub fn with_base_url(base_url: impl Into<String>, api_key: Option<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            client: reqwest::Client::new(),
        }
    }

    fn endpoint_url(&self, model: &str) -> String {
        format!("{}/v1beta/models/{}:generateContent", self.base_url, model)
    }

    /// Convert LlmRequest to Gemini format.
    fn to_gemini_request(&self, request: &LlmRequest) -> GenerateContentRequest {
        let generation_config = request
            .temperature
            .map(|temperature| GenerationConfig { temperature });

        GenerateContentRequest {
            system_instruction: request.system.as_ref().map(|system| Content {
                role: None,
                parts: vec![Part {
                    text: Some(system.clone()),
                }],
            }),
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part {
                    text: Some(request.prompt.clone()),
                }],
            }],
            generation_config,
        }
    }

    /// Convert Gemini response to LlmResponse.
    ///
    /// The text is the concatenation of the first candidate's text parts.
    fn convert_response(&self, response: GenerateContentResponse, model: &str) -> LlmResponse {
        let first = response.candidates.into_iter().next();

        let finish_reason = first.as_ref().and_then(|c| c.finish_reason.clone());
        let content = first
            .and_then(|c| c.content)
            .map(|content| {
                content
                    .parts
                    .into_iter()
                    .filter_map(|part| part.text)
                    .collect::<String>()
            })
            .unwrap_or_default();

        let usage = response
            .usage_metadata
            .map(|u| {
                LlmUsage::new(
                    u.prompt_token_count.unwrap_or(0),
                    u.candidates_token_count.unwrap_or(0),
                )
            })
            .unwrap_or_default();

        LlmResponse {
            content,
            model: response.model_version.unwrap_or_else(|| model.to_string()),
            usage,
            finish_reason,
        }
    }
}

#[async_trait::async_trait]
impl LlmClient for GeminiClient {
    fn provider_name(&self) -> &str {
        "gemini"
    }

    async fn complete(&self, request: &LlmRequest) -> AppResult<LlmResponse> {
        tracing::info!("Sending completion request to Gemini");
        tracing::debug!("Request: {:?}", request);

        let gemini_request = self.to_gemini_request(request);
        let url = self.endpoint_url(&request.model);

        let mut builder = self.client.post(&url).json(&gemini_request);
        if let Some(ref key) = self.api_key {
            builder = builder.header("x-goog-api-key", key);
        } else {
            tracing::debug!("No API key configured; sending unauthenticated request");
        }

        let response = builder
            .send()
            .await
            .map_err(|e| AppError::Llm(format!("Failed to send request to Gemini: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(AppError::Llm(format!(
                "Gemini API error ({}): {}",
                status, error_text
            )));
        }

        let gemini_response: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| AppError::Llm(format!("Failed to parse Gemini response: {}", e)))?;

        tracing::info!("Received completion from Gemini");
        tracing::debug!("Response: {:?}", gemini_response);

        Ok(self.convert_response(gemini_response, &request.model))
    }
}
