use chrono::{DateTime, Utc};
use serde::Serialize;

/// A tradable ticker plus its human-readable company name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Symbol {
    /// The ticker, e.g. `TCS` or `RELIANCE`.
    pub ticker: String,
    /// The company name; `None` falls back to the ticker.
    pub display_name: Option<String>,
}

impl Symbol {
    /// Creates a symbol whose display name falls back to the ticker.
    pub fn new(ticker: impl Into<String>) -> Self {
        Self {
            ticker: ticker.into(),
            display_name: None,
        }
    }

    /// Creates a symbol with an explicit display name.
    pub fn with_name(ticker: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            ticker: ticker.into(),
            display_name: Some(name.into()),
        }
    }

    /// The name used for name-based queries and scoring.
    pub fn display_name(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.ticker)
    }
}

/// An unfiltered article returned by a single search query.
///
/// Transient: held only within one pipeline invocation, and may contain
/// duplicates across queries for the same symbol.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewsCandidate {
    /// The headline of the article.
    pub title: String,
    /// A direct link to the article.
    pub link: String,
    /// When the article was published, if the feed carried a timestamp.
    pub published_at: Option<DateTime<Utc>>,
    /// A short description of the article, markup stripped.
    pub snippet: String,
    /// The publisher (e.g. "Reuters"), if the feed carried one.
    pub source: Option<String>,
}

/// A deduplicated, time-windowed, ranked candidate ready for persistence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoredArticle {
    /// The headline of the article.
    pub headline: String,
    /// The article URL; unique within a symbol's result set.
    pub url: String,
    /// The publisher, if known.
    pub source: Option<String>,
    /// When the article was published, if known.
    pub published_at: Option<DateTime<Utc>>,
    /// The relevance score assigned by the scorer.
    pub score: u32,
}

/// The durable projection of a [`ScoredArticle`] for one symbol.
///
/// At most one record per url exists globally; the store enforces
/// first-write-wins on url conflicts and records are never updated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewsRecord {
    /// The ticker this record was saved for.
    pub symbol: String,
    /// The headline of the article.
    pub headline: String,
    /// The article URL; the store's unique key.
    pub url: String,
    /// The publisher, if known.
    pub source: Option<String>,
    /// When the article was published, if known.
    pub published_at: Option<DateTime<Utc>>,
}

impl NewsRecord {
    /// Projects a ranked article into its durable form.
    pub fn from_article(symbol: impl Into<String>, article: ScoredArticle) -> Self {
        Self {
            symbol: symbol.into(),
            headline: article.headline,
            url: article.url,
            source: article.source,
            published_at: article.published_at,
        }
    }
}
