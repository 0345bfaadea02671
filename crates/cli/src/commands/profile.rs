//! Profile command handler.
//!
//! Shows the instruction profile questions are sent with.

use clap::Args;
use lexrag_assistant::InstructionProfile;
use lexrag_core::{config::AppConfig, AppResult};

/// Show the persona, temperature and model used for questions
#[derive(Args, Debug)]
pub struct ProfileCommand {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl ProfileCommand {
    pub async fn execute(&self, config: &AppConfig) -> AppResult<()> {
        tracing::info!("Executing profile command");

        let profile = InstructionProfile::for_model(&config.model);

        if self.json {
            println!("{}", serde_json::to_string_pretty(&profile)?);
        } else {
            println!("Provider:    {}", config.provider);
            println!("Model:       {}", profile.model);
            println!("Temperature: {}", profile.temperature);
            println!();
            println!("{}", profile.system_instruction);
        }

        Ok(())
    }
}
