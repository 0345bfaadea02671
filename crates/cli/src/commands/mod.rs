//! Command handlers for the LexRAG CLI.

pub mod ask;
pub mod profile;

// Re-export command types for convenience
pub use ask::AskCommand;
pub use profile::ProfileCommand;
