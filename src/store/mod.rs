//! Durable persistence keyed by article URL.

mod sqlite;

pub use sqlite::SqliteNewsStore;

use async_trait::async_trait;

use crate::core::{NewsError, models::NewsRecord};

/// Result of an idempotent upsert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertOutcome {
    /// A new row was written.
    Inserted,
    /// A row with the same url already existed; nothing was written.
    Duplicate,
}

/// A durable store with first-write-wins semantics on the article url.
///
/// Implementations must resolve concurrent upserts of the same url to
/// exactly one persisted record; callers add no locking of their own.
#[async_trait]
pub trait NewsStore: Send + Sync {
    /// Inserts `record`, or no-ops when a record with the same url exists.
    ///
    /// # Errors
    ///
    /// Returns a `NewsError` when the write fails. A duplicate is not an
    /// error.
    async fn upsert(&self, record: &NewsRecord) -> Result<UpsertOutcome, NewsError>;
}
