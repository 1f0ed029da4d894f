//! services/cli/src/bin/arxiv_news.rs

use std::sync::Arc;

use arxiv_news_core::{BrowseSession, SessionEnd};
use arxiv_news_lib::{
    adapters::{ArxivFeedAdapter, ConsoleTerminal},
    config::{read_flags, read_subscriptions, Cli, Config},
    error::AppError,
};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), AppError> {
    // --- 1. Load Configuration & Set Up Logging ---
    let cli = Cli::parse();
    let config = Config::from_env(&cli)?;
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(config.log_level.to_string()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // --- 2. Read the Subscription and Flag Lists (before any network access) ---
    let subscriptions = read_subscriptions(&config.subscriptions_path)?;
    let flags = read_flags(&config.flags_path)?;
    info!(
        categories = subscriptions.len(),
        flags = flags.len(),
        "Configuration loaded."
    );

    // --- 3. Initialize Service Adapters ---
    let feed = Arc::new(ArxivFeedAdapter::new(
        config.rss_url.clone(),
        config.api_url.clone(),
        config.http_timeout,
    )?);
    let terminal = Arc::new(ConsoleTerminal::new());

    // --- 4. Run the Session ---
    let session = BrowseSession::new(feed, terminal);
    match session.run(&subscriptions, &flags).await? {
        SessionEnd::Quit => info!("Quit by user."),
        SessionEnd::Exhausted => println!("No more papers."),
    }

    Ok(())
}
