//! Logging infrastructure for LexRAG.
//!
//! Initializes the tracing subscriber for structured logging. All logs go to
//! stderr so stdout carries only answers.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::error::{AppError, AppResult};

/// Default filter when neither a level override nor `RUST_LOG` is present.
const DEFAULT_LEVEL: &str = "warn";

/// Initialize the tracing subscriber with stderr output.
///
/// # Arguments
/// * `log_level` - Optional filter override (e.g., "debug", "lexrag_llm=trace")
/// * `no_color` - Disable colored output
///
/// # Example
/// ```no_run
/// use lexrag_core::logging::init_logging;
///
/// init_logging(None, false).expect("Failed to initialize logging");
/// ```
pub fn init_logging(log_level: Option<&str>, no_color: bool) -> AppResult<()> {
    let filter_str = resolve_filter(log_level, std::env::var("RUST_LOG").ok());

    let env_filter = EnvFilter::try_new(&filter_str)
        .map_err(|e| AppError::Config(format!("Invalid log filter: {}", e)))?;

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_ansi(!no_color && supports_color());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| AppError::Config(format!("Failed to init logging: {}", e)))?;

    Ok(())
}

/// Pick the filter string: explicit override, then `RUST_LOG`, then the default.
fn resolve_filter(log_level: Option<&str>, rust_log: Option<String>) -> String {
    match log_level {
        Some(level) => level.to_string(),
        None => rust_log.unwrap_or_else(|| DEFAULT_LEVEL.to_string()),
    }
}

fn supports_color() -> bool {
    std::env::var("NO_COLOR").is_err()
}
