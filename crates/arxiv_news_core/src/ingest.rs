//! crates/arxiv_news_core/src/ingest.rs
//!
//! Turns the raw entries fetched for one subscribed category into a `Category`.

use tracing::debug;

use crate::domain::{Category, Paper, RawEntry};

/// Builds the category `name` from `entries` (in feed order).
///
/// Placeholder entries titled `"Error"` are dropped silently. The remaining
/// papers are flagged against `flag_list` and ordered newest first.
pub fn build_category<I>(name: &str, entries: I, flag_list: &[String]) -> Category
where
    I: IntoIterator<Item = RawEntry>,
{
    let mut skipped = 0usize;
    let papers: Vec<Paper> = entries
        .into_iter()
        .filter(|entry| {
            let placeholder = entry.is_error_placeholder();
            if placeholder {
                skipped += 1;
            }
            !placeholder
        })
        .map(|entry| Paper::from_entry(entry, flag_list))
        .collect();

    if skipped > 0 {
        debug!(category = name, skipped, "Dropped placeholder entries.");
    }

    Category::new(name, papers)
}
