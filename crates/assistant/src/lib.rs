//! Legal question answering for LexRAG.
//!
//! A question is sent once to the configured model under a fixed
//! instruction profile. The reply comes back as Markdown plus a few
//! citation labels picked out of the text.
//!
//! There is no retrieval step. Section references come from the model's
//! own knowledge of the Companies Act 2013.
//!
//! # Example
//! ```no_run
//! use lexrag_assistant::{LegalAssistant, Query};
//! use lexrag_core::AppConfig;
//!
//! # async fn example() -> lexrag_core::AppResult<()> {
//! let assistant = LegalAssistant::from_config(&AppConfig::load()?)?;
//! if let Some(query) = Query::new("Who can be an independent director?") {
//!     let answer = assistant.ask(&query).await?;
//!     println!("{}\n{:?}", answer.answer, answer.citations);
//! }
//! # Ok(())
//! # }
//! ```

pub mod citations;
pub mod profile;
pub mod service;
pub mod types;

pub use citations::extract_citations;
pub use profile::{InstructionProfile, STATUTE_NAME, SYSTEM_INSTRUCTION, TEMPERATURE};
pub use service::{LegalAssistant, NO_ANSWER_TEXT};
pub use types::{Answer, LoadingState, Query};
