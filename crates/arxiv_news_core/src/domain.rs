//! crates/arxiv_news_core/src/domain.rs
//!
//! Defines the pure, core data structures for the application.
//! `RawEntry` is what the feed collaborator hands over; `Paper` and `Category`
//! are the immutable values the browsing session works on.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::flags::match_flags;

//=========================================================================================
// Raw Feed Records (supplied by the feed collaborator)
//=========================================================================================

/// Title the feed source puts on entries for invalid or withdrawn identifiers.
pub const ERROR_ENTRY_TITLE: &str = "Error";

/// One author record as it appears in a feed entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawAuthor {
    pub name: String,
}

/// One category tag as it appears in a feed entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawTag {
    pub term: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scheme: Option<String>,
}

/// One article record as parsed from the metadata feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawEntry {
    pub title: String,
    pub summary: String,
    pub authors: Vec<RawAuthor>,
    pub tags: Vec<RawTag>,
    pub id: String,
    pub published: DateTime<Utc>,
    pub updated: DateTime<Utc>,
}

impl RawEntry {
    /// True for the placeholder entries the feed emits in place of a missing article.
    pub fn is_error_placeholder(&self) -> bool {
        self.title == ERROR_ENTRY_TITLE
    }
}

//=========================================================================================
// Paper
//=========================================================================================

/// A single article, fully formed at construction and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paper {
    title: String,
    authors: Vec<String>,
    abstract_text: String,
    tags: Vec<String>,
    id: String,
    published: DateTime<Utc>,
    updated: DateTime<Utc>,
    flags: Vec<String>,
}

impl Paper {
    /// Builds a paper from a raw feed entry, computing its flags against `flag_list`.
    pub fn from_entry(entry: RawEntry, flag_list: &[String]) -> Self {
        let authors: Vec<String> = entry.authors.into_iter().map(|a| a.name).collect();
        let flags = match_flags(&entry.title, &entry.summary, &authors, flag_list);

        Self {
            title: entry.title,
            authors,
            abstract_text: entry.summary,
            tags: entry.tags.into_iter().map(|t| t.term).collect(),
            id: entry.id,
            published: entry.published,
            updated: entry.updated,
            flags,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn authors(&self) -> &[String] {
        &self.authors
    }

    pub fn abstract_text(&self) -> &str {
        &self.abstract_text
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn published(&self) -> DateTime<Utc> {
        self.published
    }

    pub fn updated(&self) -> DateTime<Utc> {
        self.updated
    }

    /// Calendar day of first publication.
    pub fn date(&self) -> NaiveDate {
        self.published.date_naive()
    }

    /// A paper is new only when it has never been updated since publication.
    /// Same-day revisions still count as revised.
    pub fn is_new(&self) -> bool {
        self.published == self.updated
    }

    /// Configured keywords found in this paper, in flag-list order.
    pub fn flags(&self) -> &[String] {
        &self.flags
    }

    pub fn is_flagged(&self) -> bool {
        !self.flags.is_empty()
    }
}

//=========================================================================================
// Category
//=========================================================================================

/// A subscribed category code with its papers, most recently published first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    name: String,
    papers: Vec<Paper>,
}

impl Category {
    /// Wraps `papers` after sorting them by publication time, newest first.
    /// The sort is stable, so equal timestamps keep their feed order.
    pub fn new(name: impl Into<String>, mut papers: Vec<Paper>) -> Self {
        papers.sort_by(|a, b| b.published.cmp(&a.published));
        Self {
            name: name.into(),
            papers,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn papers(&self) -> &[Paper] {
        &self.papers
    }

    pub fn size(&self) -> usize {
        self.papers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.papers.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Paper> {
        self.papers.get(index)
    }
}
