//! LexRAG CLI
//!
//! Main entry point for the lexrag command-line tool.
//! Answers questions about the Indian Companies Act 2013.

mod commands;

use clap::{Parser, Subcommand};
use commands::{AskCommand, ProfileCommand};
use lexrag_core::{config::AppConfig, logging, AppResult};
use std::path::PathBuf;

/// LexRAG - legal answers on the Companies Act 2013
#[derive(Parser, Debug)]
#[command(name = "lexrag")]
#[command(about = "Legal answers on the Companies Act 2013", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to workspace directory (default: current directory)
    #[arg(short, long, global = true, env = "LEXRAG_WORKSPACE")]
    workspace: Option<PathBuf>,

    /// Path to config file
    #[arg(short, long, global = true, env = "LEXRAG_CONFIG")]
    config: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true, env = "RUST_LOG")]
    log_level: Option<String>,

    /// Enable verbose output (sets log level to debug)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Disable colored output
    #[arg(long, global = true, env = "NO_COLOR")]
    no_color: bool,

    /// LLM provider
    #[arg(short, long, global = true, env = "LEXRAG_PROVIDER")]
    provider: Option<String>,

    /// Model identifier
    #[arg(short, long, global = true, env = "LEXRAG_MODEL")]
    model: Option<String>,

    /// API base URL
    #[arg(long, global = true, env = "LEXRAG_ENDPOINT")]
    endpoint: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Ask a question about the Companies Act 2013
    Ask(AskCommand),

    /// Show the instruction profile sent with every question
    Profile(ProfileCommand),
}

#[tokio::main]
async fn main() -> AppResult<()> {
    // Parse command-line arguments first (needed for logging config)
    let cli = Cli::parse();

    // Load configuration; workspace and config file decide which YAML is read
    let config = AppConfig::load_with(cli.workspace, cli.config)?;

    // Apply CLI overrides
    let config = config.with_overrides(
        cli.provider,
        cli.model,
        cli.endpoint,
        cli.log_level,
        cli.verbose,
        cli.no_color,
    );

    // Initialize logging with final configuration
    logging::init_logging(config.log_level.as_deref(), config.no_color)?;

    // Log startup
    tracing::info!("LexRAG CLI starting");
    tracing::debug!("Workspace: {:?}", config.workspace);
    tracing::debug!("Provider: {}", config.provider);
    tracing::debug!("Model: {}", config.model);

    // Reject unknown providers before any command runs
    config.validate()?;

    // Emit command span
    let command_name = match &cli.command {
        Commands::Ask(_) => "ask",
        Commands::Profile(_) => "profile",
    };
    let _span = tracing::info_span!("command", name = command_name).entered();

    // Route to command handlers
    let result = match cli.command {
        Commands::Ask(cmd) => cmd.execute(&config).await,
        Commands::Profile(cmd) => cmd.execute(&config).await,
    };

    // Log completion
    match &result {
        Ok(_) => tracing::info!("Command completed successfully"),
        Err(e) => tracing::error!("Command failed: {}", e),
    }

    result
}
