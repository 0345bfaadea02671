//! Ask command handler.
//!
//! Sends one question to the legal assistant and prints the answer with
//! its citations.

use clap::Args;
use lexrag_assistant::{Answer, LegalAssistant, LoadingState, Query};
use lexrag_core::{config::AppConfig, AppError, AppResult};
use serde::Serialize;
use std::path::PathBuf;

/// Message shown to the user when the assistant fails.
const FETCH_FAILED_MESSAGE: &str = "An error occurred while fetching the answer. Please try again.";

/// Ask a question about the Companies Act 2013
#[derive(Args, Debug)]
pub struct AskCommand {
    /// The question to ask
    #[arg(trailing_var_arg = true)]
    pub question: Vec<String>,

    /// Read the question from a file
    #[arg(short, long, conflicts_with = "question")]
    pub file: Option<PathBuf>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output of the ask command.
#[derive(Debug, Serialize)]
struct AskOutput<'a> {
    answer: &'a str,
    citations: &'a [String],
    model: &'a str,
    provider: &'a str,
}

impl AskCommand {
    /// Execute the ask command.
    pub async fn execute(&self, config: &AppConfig) -> AppResult<()> {
        tracing::info!("Executing ask command");
        tracing::debug!("Ask command options: {:?}", self);

        let Some(query) = Query::new(self.question_text()?) else {
            tracing::debug!("Blank question; nothing to ask");
            return Ok(());
        };

        let assistant = LegalAssistant::from_config(config)?;

        let mut state = LoadingState::Idle;
        transition(&mut state, LoadingState::Loading);

        match assistant.ask(&query).await {
            Ok(answer) => {
                transition(&mut state, LoadingState::Success);
                self.print_answer(&answer, config)
            }
            Err(e) => {
                transition(&mut state, LoadingState::Error);
                eprintln!("{}", FETCH_FAILED_MESSAGE);
                Err(e)
            }
        }
    }

    fn print_answer(&self, answer: &Answer, config: &AppConfig) -> AppResult<()> {
        if self.json {
            let output = AskOutput {
                answer: &answer.answer,
                citations: &answer.citations,
                model: &config.model,
                provider: &config.provider,
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        } else {
            println!("{}", render_answer(answer));
        }
        Ok(())
    }

    /// Question text from positional words or `--file`.
    fn question_text(&self) -> AppResult<String> {
        match self.file {
            Some(ref path) => std::fs::read_to_string(path).map_err(|e| {
                AppError::Config(format!("Failed to read question file {:?}: {}", path, e))
            }),
            None => Ok(self.question.join(" ")),
        }
    }
}

fn transition(state: &mut LoadingState, next: LoadingState) {
    tracing::debug!(from = ?state, to = ?next, "Loading state");
    *state = next;
}

/// Render an answer as Markdown followed by its sources.
pub fn render_answer(answer: &Answer) -> String {
    let mut out = String::with_capacity(answer.answer.len() + 64);
    out.push_str(answer.answer.trim_end());
    out.push_str("\n\n**Sources**\n");
    for citation in &answer.citations {
        out.push_str("- ");
        out.push_str(citation);
        out.push('\n');
    }
    out
}
