#![allow(dead_code)]

use std::sync::Mutex;
use std::{fs, path::Path};

use async_trait::async_trait;
use httpmock::MockServer;
use marketnews_rs::{IngestConfig, Jitter, NewsError, NewsRecord, NewsStore, UpsertOutcome};

pub fn setup_server() -> MockServer {
    MockServer::start()
}

pub fn fixture(name: &str) -> String {
    let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures");
    let path = dir.join(format!("{name}.xml"));
    fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read fixture {}: {}", path.display(), e))
}

/// Small config with zeroed jitter so tests run deterministically and fast.
pub fn test_config() -> IngestConfig {
    IngestConfig {
        concurrency: 2,
        query_jitter: Jitter::none(),
        symbol_jitter: Jitter::none(),
        ..IngestConfig::default()
    }
}

/// Builds a minimal RSS 2.0 body from `(title, link, pub_date)` triples.
/// Empty strings omit the corresponding element.
pub fn rss_body(items: &[(&str, &str, &str)]) -> String {
    let mut out = String::from(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\
         <rss version=\"2.0\"><channel>\
         <title>search</title>\
         <link>https://news.example</link>\
         <description>test feed</description>",
    );
    for (title, link, date) in items {
        out.push_str("<item>");
        if !title.is_empty() {
            out.push_str(&format!("<title>{title}</title>"));
        }
        if !link.is_empty() {
            out.push_str(&format!("<link>{link}</link>"));
        }
        if !date.is_empty() {
            out.push_str(&format!("<pubDate>{date}</pubDate>"));
        }
        out.push_str("</item>");
    }
    out.push_str("</channel></rss>");
    out
}

/// In-memory [`NewsStore`] double with first-write-wins semantics and
/// optional fault injection on matching urls.
#[derive(Default)]
pub struct MemoryStore {
    records: Mutex<Vec<NewsRecord>>,
    fail_urls_containing: Option<String>,
}

impl MemoryStore {
    pub fn failing_on(pat: impl Into<String>) -> Self {
        Self {
            records: Mutex::new(Vec::new()),
            fail_urls_containing: Some(pat.into()),
        }
    }

    pub fn len(&self) -> usize {
        self.records.lock().unwrap().len()
    }

    pub fn urls(&self) -> Vec<String> {
        self.records
            .lock()
            .unwrap()
            .iter()
            .map(|r| r.url.clone())
            .collect()
    }
}

#[async_trait]
impl NewsStore for MemoryStore {
    async fn upsert(&self, record: &NewsRecord) -> Result<UpsertOutcome, NewsError> {
        if let Some(pat) = &self.fail_urls_containing
            && record.url.contains(pat.as_str())
        {
            return Err(NewsError::Store(sqlx::Error::PoolClosed));
        }
        let mut records = self.records.lock().unwrap();
        if records.iter().any(|r| r.url == record.url) {
            return Ok(UpsertOutcome::Duplicate);
        }
        records.push(record.clone());
        Ok(UpsertOutcome::Inserted)
    }
}
