use std::str::FromStr;

use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool};

use super::{NewsStore, UpsertOutcome};
use crate::core::{NewsError, models::NewsRecord};

const SCHEMA: &str = "CREATE TABLE IF NOT EXISTS news_articles (
    url TEXT PRIMARY KEY,
    symbol TEXT NOT NULL,
    headline TEXT NOT NULL,
    source TEXT,
    published_at TEXT
)";

/// SQLite-backed [`NewsStore`].
///
/// The url primary key enforces the one-record-per-url invariant; a
/// conflicting insert is a no-op, so concurrent races on the same url
/// resolve to exactly one persisted record.
#[derive(Debug, Clone)]
pub struct SqliteNewsStore {
    pool: SqlitePool,
}

impl SqliteNewsStore {
    /// Connects to `url` (e.g. `sqlite://news.db` or `sqlite::memory:`),
    /// creating the database file and schema when missing.
    ///
    /// # Errors
    ///
    /// Returns a `NewsError` when the connection cannot be established or
    /// the schema cannot be created; callers treat that as fatal.
    pub async fn connect(url: &str) -> Result<Self, NewsError> {
        let options = SqliteConnectOptions::from_str(url)?.create_if_missing(true);
        let pool = SqlitePool::connect_with(options).await?;
        sqlx::query(SCHEMA).execute(&pool).await?;
        Ok(Self { pool })
    }

    /// Number of stored records.
    ///
    /// # Errors
    ///
    /// Returns a `NewsError` when the query fails.
    pub async fn count(&self) -> Result<i64, NewsError> {
        let (n,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM news_articles")
            .fetch_one(&self.pool)
            .await?;
        Ok(n)
    }
}

#[async_trait]
impl NewsStore for SqliteNewsStore {
    async fn upsert(&self, record: &NewsRecord) -> Result<UpsertOutcome, NewsError> {
        let done = sqlx::query(
            "INSERT INTO news_articles (url, symbol, headline, source, published_at)
             VALUES (?1, ?2, ?3, ?4, ?5)
             ON CONFLICT(url) DO NOTHING",
        )
        .bind(&record.url)
        .bind(&record.symbol)
        .bind(&record.headline)
        .bind(&record.source)
        .bind(record.published_at.map(|t| t.to_rfc3339()))
        .execute(&self.pool)
        .await?;

        if done.rows_affected() == 0 {
            Ok(UpsertOutcome::Duplicate)
        } else {
            Ok(UpsertOutcome::Inserted)
        }
    }
}
