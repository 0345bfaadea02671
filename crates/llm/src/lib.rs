//! LLM integration crate for LexRAG.
//!
//! This crate provides a provider-agnostic abstraction for a single,
//! non-streaming completion against a hosted Large Language Model.
//!
//! # Providers
//! - **Gemini**: Google Generative Language API (default)
//!
//! # Example
//! ```no_run
//! use lexrag_llm::{LlmClient, LlmRequest, providers::GeminiClient};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = GeminiClient::new(std::env::var("API_KEY").ok());
//! let request = LlmRequest::new("What is a charge?", "gemini-2.5-flash");
//! let response = client.complete(&request).await?;
//! println!("{}", response.content);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod factory;
pub mod providers;
pub mod types;

// Re-export main types
pub use client::{LlmClient, LlmRequest, LlmResponse, LlmUsage};
pub use factory::create_client;
pub use providers::GeminiClient;
pub use types::{ProviderType, GEMINI_DEFAULT_ENDPOINT};
