//! Run configuration.
//!
//! Everything that tunes a run is carried in an explicit [`IngestConfig`]
//! value passed into constructors; nothing is read from ambient state, so
//! tests can shrink thresholds and zero out delays.

use std::time::Duration;

use rand::Rng;

/// Locale qualifiers appended to every feed search URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locale {
    /// Feed language, e.g. `en-IN`.
    pub lang: String,
    /// Feed country, e.g. `IN`.
    pub country: String,
    /// Feed edition, e.g. `IN:en`.
    pub edition: String,
}

impl Default for Locale {
    fn default() -> Self {
        Self {
            lang: "en-IN".into(),
            country: "IN".into(),
            edition: "IN:en".into(),
        }
    }
}

/// A randomized delay range; [`Jitter::sample`] draws a fresh duration per call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Jitter {
    min: Duration,
    max: Duration,
}

impl Jitter {
    /// A delay drawn uniformly from `min..=max`.
    #[must_use]
    pub const fn new(min: Duration, max: Duration) -> Self {
        Self { min, max }
    }

    /// Zero-length jitter, for deterministic tests.
    #[must_use]
    pub const fn none() -> Self {
        Self::new(Duration::ZERO, Duration::ZERO)
    }

    /// Draws one delay from the range.
    #[must_use]
    pub fn sample(&self) -> Duration {
        if self.max <= self.min {
            return self.min;
        }
        let lo = u64::try_from(self.min.as_millis()).unwrap_or(u64::MAX);
        let hi = u64::try_from(self.max.as_millis()).unwrap_or(u64::MAX);
        Duration::from_millis(rand::rng().random_range(lo..=hi))
    }
}

/// Fixed configuration for one ingest run.
#[derive(Debug, Clone)]
pub struct IngestConfig {
    /// Maximum simultaneous symbol pipelines.
    pub concurrency: usize,
    /// Maximum items appended from a single query's results.
    pub per_query_cap: usize,
    /// Stop issuing further queries for a symbol once this many raw
    /// candidates have been gathered.
    pub min_results: usize,
    /// Maximum ranked articles persisted per symbol.
    pub max_saved: usize,
    /// Candidates older than this many days are dropped; candidates
    /// without a timestamp are kept.
    pub recency_days: i64,
    /// Exchange tag used in ticker queries and scoring, e.g. `NSE`.
    pub exchange_tag: String,
    /// Locale qualifiers for the feed endpoint.
    pub locale: Locale,
    /// Delay between consecutive queries within one symbol.
    pub query_jitter: Jitter,
    /// Delay before a concurrency slot is reused for the next symbol.
    pub symbol_jitter: Jitter,
}

impl Default for IngestConfig {
    fn default() -> Self {
        Self {
            concurrency: 6,
            per_query_cap: 10,
            min_results: 3,
            max_saved: 8,
            recency_days: 120,
            exchange_tag: "NSE".into(),
            locale: Locale::default(),
            query_jitter: Jitter::new(Duration::from_millis(150), Duration::from_millis(450)),
            symbol_jitter: Jitter::new(Duration::from_millis(100), Duration::from_millis(300)),
        }
    }
}
