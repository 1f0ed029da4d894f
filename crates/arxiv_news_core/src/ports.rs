//! crates/arxiv_news_core/src/ports.rs
//!
//! Defines the service contracts (traits) the browsing core depends on.
//! Feed retrieval and terminal I/O live behind these ports so the core stays
//! independent of HTTP clients, feed parsers and the actual terminal.

use async_trait::async_trait;

use crate::domain::RawEntry;
use crate::render::Frame;

//=========================================================================================
// Generic Port Error and Result Types
//=========================================================================================

/// A generic error type for all port operations.
#[derive(Debug, thiserror::Error)]
pub enum PortError {
    /// The remote feed could not be reached or answered with an error status.
    #[error("Feed transport error: {0}")]
    Transport(String),
    /// The feed answered but its document could not be understood.
    #[error("Malformed feed: {0}")]
    Malformed(String),
    #[error("Terminal I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// The command input reached end of file.
    #[error("Command input closed")]
    InputClosed,
}

/// A convenience type alias for `Result<T, PortError>`.
pub type PortResult<T> = Result<T, PortError>;

//=========================================================================================
// Service Ports (Traits)
//=========================================================================================

#[async_trait]
pub trait FeedSource: Send + Sync {
    /// Identifiers of the articles newly announced or revised in `category`, in feed order.
    async fn changed_ids(&self, category: &str) -> PortResult<Vec<String>>;

    /// Full entries for exactly `ids`, fetched in one batched request, in feed order.
    async fn fetch_entries(&self, ids: &[String]) -> PortResult<Vec<RawEntry>>;
}

pub trait Terminal: Send + Sync {
    /// Tells the user which category is being fetched.
    fn show_loading(&self, category: &str) -> PortResult<()>;

    /// Replaces the screen with `frame`.
    fn show(&self, frame: &Frame) -> PortResult<()>;

    /// Blocks until the user enters one line. Fails with
    /// [`PortError::InputClosed`] once the input is exhausted.
    fn read_command(&self) -> PortResult<String>;
}
