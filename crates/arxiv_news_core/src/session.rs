//! crates/arxiv_news_core/src/session.rs
//!
//! The top-level interactive session: fetch every subscribed category, then
//! let the user page through them until they quit or run out of papers.

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::Category;
use crate::ingest::build_category;
use crate::navigator::{Command, Navigator, SessionEnd, Step};
use crate::ports::{FeedSource, PortResult, Terminal};

/// Owns the collaborators for one run.
#[derive(Clone)]
pub struct BrowseSession {
    feed: Arc<dyn FeedSource>,
    terminal: Arc<dyn Terminal>,
}

impl BrowseSession {
    pub fn new(feed: Arc<dyn FeedSource>, terminal: Arc<dyn Terminal>) -> Self {
        Self { feed, terminal }
    }

    /// Fetches and builds every category in subscription order.
    /// The first port error aborts the whole load.
    pub async fn load(
        &self,
        subscriptions: &[String],
        flag_list: &[String],
    ) -> PortResult<Vec<Category>> {
        let mut categories = Vec::with_capacity(subscriptions.len());

        for name in subscriptions {
            self.terminal.show_loading(name)?;

            let ids = self.feed.changed_ids(name).await?;
            debug!(category = %name, ids = ids.len(), "Fetched changed identifiers.");

            // The metadata query with an empty id list would return unrelated results.
            let entries = if ids.is_empty() {
                Vec::new()
            } else {
                self.feed.fetch_entries(&ids).await?
            };

            let category = build_category(name, entries, flag_list);
            info!(category = %name, papers = category.size(), "Category loaded.");
            categories.push(category);
        }

        Ok(categories)
    }

    /// Shows papers one at a time, reading a command after each, until the
    /// user quits or the last category is exhausted.
    pub fn browse(&self, categories: Vec<Category>) -> PortResult<SessionEnd> {
        let mut navigator = Navigator::new(categories);

        while let Some(frame) = navigator.frame() {
            self.terminal.show(&frame)?;
            let input = self.terminal.read_command()?;

            match navigator.apply(Command::parse(&input)) {
                Step::Moved(cursor) => debug!(?cursor, "Cursor moved."),
                Step::Ended(end) => {
                    info!(?end, "Session ended.");
                    return Ok(end);
                }
            }
        }

        info!("No categories to browse.");
        Ok(SessionEnd::Exhausted)
    }

    /// Loads everything, then browses it.
    pub async fn run(
        &self,
        subscriptions: &[String],
        flag_list: &[String],
    ) -> PortResult<SessionEnd> {
        let categories = self.load(subscriptions, flag_list).await?;
        self.browse(categories)
    }
}
