//! LLM provider factory.
//!
//! Creates LLM clients from the configured provider name, endpoint and
//! credential.

use crate::client::LlmClient;
use crate::providers::GeminiClient;
use crate::types::ProviderType;
use std::sync::Arc;

/// Create an LLM client based on the provider name.
///
/// # Arguments
/// * `provider` - Provider identifier ("gemini")
/// * `endpoint` - Optional custom base URL
/// * `api_key` - Optional API key
///
/// A missing API key is accepted. The upstream rejects the first request
/// instead, which keeps credential problems on the same failure path as
/// every other upstream error.
///
/// # Errors
/// Returns error if the provider is unknown.
pub fn create_client(
    provider: &str,
    endpoint: Option<&str>,
    api_key: Option<&str>,
) -> Result<Arc<dyn LlmClient>, String> {
    match ProviderType::parse(provider) {
        Some(kind) => {
            let base_url = endpoint.unwrap_or(kind.default_endpoint());
            let client = GeminiClient::with_base_url(base_url, api_key.map(str::to_string));
            Ok(Arc::new(client))
        }
        None => Err(format!("Unknown provider: {}", provider)),
    }
}
