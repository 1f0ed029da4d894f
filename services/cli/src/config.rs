//! services/cli/src/config.rs
//!
//! Defines the tool's configuration structure and loading logic.
//!
//! The two list files come from the command line. Feed endpoints, the HTTP
//! timeout and the log level come from environment variables; a `.env` file is
//! honoured for local development.

use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::Parser;
use tracing::Level;

pub const DEFAULT_RSS_URL: &str = "http://export.arxiv.org/rss/";
pub const DEFAULT_API_URL: &str = "http://export.arxiv.org/api/query";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// A custom error type for configuration loading failures.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for the environment variable {0}: {1}")]
    InvalidValue(String, String),
    #[error("Cannot read {}: {source}", .path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Browse new arXiv papers in the terminal, one at a time.
///
/// After each paper press Enter for the next one, or type
/// `p` (previous paper), `nc` (next category), `pc` (previous category), `q` (quit).
#[derive(Debug, Clone, Parser)]
#[command(name = "arxiv-news", version, about)]
pub struct Cli {
    /// File with one category code per line, e.g. `math.DG`.
    pub subscriptions: PathBuf,

    /// File with one keyword per line; matching papers are highlighted.
    pub flags: PathBuf,

    /// Log debug output to stderr.
    #[arg(short, long)]
    pub verbose: bool,
}

/// Holds all configuration loaded at startup.
#[derive(Clone, Debug)]
pub struct Config {
    pub subscriptions_path: PathBuf,
    pub flags_path: PathBuf,
    pub rss_url: String,
    pub api_url: String,
    pub http_timeout: Duration,
    pub log_level: Level,
}

impl Config {
    /// Loads configuration from the parsed arguments and environment variables.
    ///
    /// It will look for a `.env` file in the current directory for development,
    /// but this is skipped in test environments to ensure tests are hermetic.
    pub fn from_env(cli: &Cli) -> Result<Self, ConfigError> {
        if !cfg!(test) {
            dotenvy::dotenv().ok();
        }
        Self::from_lookup(cli, |key| std::env::var(key).ok())
    }

    /// Same as [`Config::from_env`] but reads variables through `lookup`.
    pub fn from_lookup<F>(cli: &Cli, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let rss_url = lookup("ARXIV_RSS_URL").unwrap_or_else(|| DEFAULT_RSS_URL.to_string());
        let api_url = lookup("ARXIV_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string());

        let http_timeout = match lookup("HTTP_TIMEOUT_SECS") {
            Some(raw) => raw.trim().parse::<u64>().map(Duration::from_secs).map_err(|e| {
                ConfigError::InvalidValue("HTTP_TIMEOUT_SECS".to_string(), e.to_string())
            })?,
            None => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        };

        let log_level = if cli.verbose {
            Level::DEBUG
        } else {
            let log_level_str = lookup("RUST_LOG").unwrap_or_else(|| "WARN".to_string());
            log_level_str.parse::<Level>().map_err(|_| {
                ConfigError::InvalidValue(
                    "RUST_LOG".to_string(),
                    format!("'{}' is not a valid log level", log_level_str),
                )
            })?
        };

        Ok(Self {
            subscriptions_path: cli.subscriptions.clone(),
            flags_path: cli.flags.clone(),
            rss_url,
            api_url,
            http_timeout,
            log_level,
        })
    }
}

/// Reads the subscribed category codes, in file order.
///
/// Lines are trimmed and a trailing comma is dropped, so a one-column CSV works too.
pub fn read_subscriptions(path: &Path) -> Result<Vec<String>, ConfigError> {
    read_lines(path, |line| line.trim().trim_end_matches(',').trim_end())
}

/// Reads the flag keywords, in file order.
pub fn read_flags(path: &Path) -> Result<Vec<String>, ConfigError> {
    read_lines(path, str::trim)
}

// Blank lines are dropped: an empty keyword would match every paper.
fn read_lines<F>(path: &Path, clean: F) -> Result<Vec<String>, ConfigError>
where
    F: Fn(&str) -> &str,
{
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Unreadable {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(content
        .lines()
        .map(clean)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}
