//! services/cli/src/error.rs
//!
//! Defines the primary error type for the command line tool.

use crate::config::ConfigError;
use arxiv_news_core::ports::PortError;

/// The primary error type for the `arxiv-news` binary.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Represents an error that occurred during configuration loading.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Represents an error that propagated up from one of the core service ports.
    #[error("Service Port Error: {0}")]
    Port(#[from] PortError),
}
