//! services/cli/src/adapters/arxiv.rs
//!
//! This module contains the adapter for the arXiv feeds.
//! It implements the `FeedSource` port from the `core` crate: the per-category
//! RSS feed lists what changed, and the Atom query API returns full metadata.

use std::time::Duration;

use arxiv_news_core::domain::{RawAuthor, RawEntry, RawTag, ERROR_ENTRY_TITLE};
use arxiv_news_core::ports::{FeedSource, PortError, PortResult};
use async_trait::async_trait;
use feed_rs::model::{Entry, Feed};
use tracing::debug;

//=========================================================================================
// The Main Adapter Struct
//=========================================================================================

/// An adapter that implements the `FeedSource` port over HTTP.
#[derive(Clone)]
pub struct ArxivFeedAdapter {
    client: reqwest::Client,
    rss_url: String,
    api_url: String,
}

impl ArxivFeedAdapter {
    /// Creates a new `ArxivFeedAdapter`. `rss_url` gets the category code appended.
    pub fn new(rss_url: String, api_url: String, timeout: Duration) -> PortResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("arxiv-news/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(transport)?;

        Ok(Self {
            client,
            rss_url,
            api_url,
        })
    }

    async fn get_feed(&self, request: reqwest::RequestBuilder) -> PortResult<Feed> {
        let body = request
            .send()
            .await
            .map_err(transport)?
            .error_for_status()
            .map_err(transport)?
            .bytes()
            .await
            .map_err(transport)?;

        feed_rs::parser::parse(&body[..]).map_err(|e| PortError::Malformed(e.to_string()))
    }
}

//=========================================================================================
// `FeedSource` Trait Implementation
//=========================================================================================

#[async_trait]
impl FeedSource for ArxivFeedAdapter {
    async fn changed_ids(&self, category: &str) -> PortResult<Vec<String>> {
        let url = format!("{}{}", self.rss_url, category);
        debug!(%url, "Requesting category feed.");

        let feed = self.get_feed(self.client.get(&url)).await?;
        Ok(feed.entries.iter().map(article_id).collect())
    }

    async fn fetch_entries(&self, ids: &[String]) -> PortResult<Vec<RawEntry>> {
        debug!(count = ids.len(), "Requesting article metadata.");
        let request = self.client.get(&self.api_url).query(&[
            ("id_list", ids.join(",")),
            ("max_results", ids.len().to_string()),
        ]);

        let feed = self.get_feed(request).await?;
        feed.entries.into_iter().map(to_raw_entry).collect()
    }
}

//=========================================================================================
// Feed Model Mapping
//=========================================================================================

fn transport(e: reqwest::Error) -> PortError {
    PortError::Transport(e.to_string())
}

/// The short arXiv identifier: whatever follows the last `/` of the entry link.
fn article_id(entry: &Entry) -> String {
    let link = entry
        .links
        .first()
        .map(|link| link.href.as_str())
        .unwrap_or(entry.id.as_str());
    match link.rfind('/') {
        Some(i) => link[i + 1..].to_string(),
        None => link.to_string(),
    }
}

fn to_raw_entry(entry: Entry) -> PortResult<RawEntry> {
    let title = entry.title.map(|t| t.content).unwrap_or_default();

    // Placeholders for invalid or withdrawn ids carry only <updated>; the core
    // drops them, so any timestamp will do.
    let published = match entry.published {
        Some(published) => published,
        None if title == ERROR_ENTRY_TITLE => entry.updated.unwrap_or_default(),
        None => {
            return Err(PortError::Malformed(format!(
                "entry {} has no published date",
                entry.id
            )))
        }
    };

    Ok(RawEntry {
        title,
        summary: entry.summary.map(|t| t.content).unwrap_or_default(),
        authors: entry
            .authors
            .into_iter()
            .map(|person| RawAuthor { name: person.name })
            .collect(),
        tags: entry
            .categories
            .into_iter()
            .map(|category| RawTag {
                term: category.term,
                scheme: category.scheme,
            })
            .collect(),
        id: entry.id,
        published,
        updated: entry.updated.unwrap_or(published),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const RSS: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0">
  <channel>
    <title>math.DG updates on arXiv.org</title>
    <link>http://rss.arxiv.org/rss/math.DG</link>
    <description>math.DG updates</description>
    <item>
      <title>Minimal surfaces</title>
      <link>https://arxiv.org/abs/1803.08734</link>
      <guid isPermaLink="false">oai:arXiv.org:1803.08734v1</guid>
    </item>
    <item>
      <title>Ricci flow</title>
      <link>https://arxiv.org/abs/1803.08750</link>
      <guid isPermaLink="false">oai:arXiv.org:1803.08750v2</guid>
    </item>
  </channel>
</rss>"#;

    const ATOM: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<feed xmlns="http://www.w3.org/2005/Atom">
  <id>http://arxiv.org/api/query</id>
  <title>arXiv Query</title>
  <updated>2018-03-26T00:00:00Z</updated>
  <entry>
    <id>http://arxiv.org/abs/1803.08734v1</id>
    <updated>2018-03-23T17:10:02Z</updated>
    <published>2018-03-23T17:10:02Z</published>
    <title>Minimal surfaces</title>
    <summary>We study minimal surfaces.</summary>
    <author><name>Ada Lovelace</name></author>
    <author><name>Emmy Noether</name></author>
    <link href="http://arxiv.org/abs/1803.08734v1" rel="alternate" type="text/html"/>
    <category term="math.DG" scheme="http://arxiv.org/schemas/atom"/>
    <category term="math.AP" scheme="http://arxiv.org/schemas/atom"/>
  </entry>
  <entry>
    <id>http://arxiv.org/abs/1803.08750v2</id>
    <updated>2018-03-24T09:00:00Z</updated>
    <published>2018-03-01T12:00:00Z</published>
    <title>Ricci flow</title>
    <summary>Revised.</summary>
    <author><name>Grigori Perelman</name></author>
  </entry>
  <entry>
    <id>http://arxiv.org/api/errors#incorrect_id_format_for_1234.12345</id>
    <title>Error</title>
    <summary>incorrect id format for 1234.12345</summary>
    <updated>2018-03-26T00:00:00-04:00</updated>
    <link href="http://arxiv.org/api/errors#incorrect_id_format_for_1234.12345"
          rel="alternate" type="text/html"/>
    <author><name>arXiv api core</name></author>
  </entry>
</feed>"#;

    #[test]
    fn extracts_ids_from_rss_links() {
        let feed = feed_rs::parser::parse(RSS.as_bytes()).unwrap();
        let ids: Vec<String> = feed.entries.iter().map(article_id).collect();
        assert_eq!(ids, ["1803.08734", "1803.08750"]);
    }

    #[test]
    fn maps_atom_entries_to_raw_entries() {
        let feed = feed_rs::parser::parse(ATOM.as_bytes()).unwrap();
        let entries: Vec<RawEntry> = feed
            .entries
            .into_iter()
            .map(to_raw_entry)
            .collect::<PortResult<_>>()
            .unwrap();

        assert_eq!(entries.len(), 3);
        let first = &entries[0];
        assert_eq!(first.title, "Minimal surfaces");
        assert_eq!(first.summary, "We study minimal surfaces.");
        assert_eq!(first.id, "http://arxiv.org/abs/1803.08734v1");
        let authors: Vec<&str> = first.authors.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(authors, ["Ada Lovelace", "Emmy Noether"]);
        let terms: Vec<&str> = first.tags.iter().map(|t| t.term.as_str()).collect();
        assert_eq!(terms, ["math.DG", "math.AP"]);
        assert_eq!(first.published, first.updated);

        assert_ne!(entries[1].published, entries[1].updated);
        assert!(entries[2].is_error_placeholder());
    }

    #[test]
    fn error_placeholders_are_mapped_and_then_dropped_by_ingest() {
        let feed = feed_rs::parser::parse(ATOM.as_bytes()).unwrap();
        let entries = feed
            .entries
            .into_iter()
            .map(to_raw_entry)
            .collect::<PortResult<Vec<_>>>()
            .unwrap();

        let category = arxiv_news_core::build_category("math.DG", entries, &[]);

        let titles: Vec<&str> = category.papers().iter().map(|p| p.title()).collect();
        assert_eq!(titles, ["Minimal surfaces", "Ricci flow"]);
    }

    #[test]
    fn regular_entry_without_published_date_is_malformed() {
        let atom = r#"<?xml version="1.0" encoding="UTF-8"?>
<feed xmlns="http://www.w3.org/2005/Atom">
  <id>http://arxiv.org/api/query</id>
  <title>arXiv Query</title>
  <updated>2018-03-26T00:00:00Z</updated>
  <entry>
    <id>http://arxiv.org/abs/1803.08734v1</id>
    <updated>2018-03-23T17:10:02Z</updated>
    <title>Minimal surfaces</title>
  </entry>
</feed>"#;
        let mut feed = feed_rs::parser::parse(atom.as_bytes()).unwrap();

        let err = to_raw_entry(feed.entries.remove(0)).unwrap_err();

        assert!(matches!(err, PortError::Malformed(_)));
    }
}
