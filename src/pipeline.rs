//! Per-symbol orchestration: ordered queries with early exit, ranking, and
//! idempotent persistence of the top results.

use std::sync::Arc;

use tokio::time::sleep;
use tracing::{debug, warn};

use crate::{
    config::IngestConfig,
    core::{
        NewsClient,
        models::{NewsCandidate, NewsRecord, Symbol},
    },
    feed, query,
    score::Scorer,
    store::NewsStore,
};

/// What one pipeline invocation accomplished.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PipelineOutcome {
    /// Upserts that did not error. Duplicates count: this reports attempted
    /// writes, not confirmed insertions.
    pub saved: usize,
}

/// Runs the news-acquisition pipeline for single symbols.
///
/// Each invocation owns its candidate list end to end; pipelines share
/// nothing mutable with each other beyond the client and the store.
pub struct SymbolPipeline {
    client: NewsClient,
    store: Arc<dyn NewsStore>,
    scorer: Scorer,
    config: IngestConfig,
}

impl SymbolPipeline {
    /// Creates a pipeline over the shared client and store.
    pub fn new(client: &NewsClient, store: Arc<dyn NewsStore>, config: &IngestConfig) -> Self {
        Self {
            client: client.clone(),
            store,
            scorer: Scorer::new(config),
            config: config.clone(),
        }
    }

    /// Fetches, ranks, and persists news for `symbol`.
    ///
    /// Never propagates per-query or per-item failures: a failed fetch or
    /// upsert is logged as a warning and the rest of the work continues.
    pub async fn run(&self, symbol: &Symbol) -> PipelineOutcome {
        let queries = query::build_queries(
            &symbol.ticker,
            symbol.display_name(),
            &self.config.exchange_tag,
        );
        let candidates = self.gather(symbol, &queries).await;

        let ranked = self
            .scorer
            .rank(candidates, &symbol.ticker, symbol.display_name());

        let mut saved = 0;
        for article in ranked.into_iter().take(self.config.max_saved) {
            let record = NewsRecord::from_article(&symbol.ticker, article);
            match self.store.upsert(&record).await {
                Ok(_) => saved += 1,
                Err(e) => warn!(
                    symbol = %symbol.ticker,
                    url = %record.url,
                    error = %e,
                    "upsert failed, skipping item"
                ),
            }
        }
        PipelineOutcome { saved }
    }

    /// Issues queries in priority order, stopping once enough raw
    /// candidates have been gathered.
    async fn gather(&self, symbol: &Symbol, queries: &[String]) -> Vec<NewsCandidate> {
        let mut candidates: Vec<NewsCandidate> = Vec::new();
        for (idx, q) in queries.iter().enumerate() {
            match feed::fetch_search(&self.client, q, &self.config.locale).await {
                Ok(items) => {
                    candidates.extend(items.into_iter().take(self.config.per_query_cap));
                }
                // A single bad query must not abort the symbol.
                Err(e) => warn!(
                    symbol = %symbol.ticker,
                    query = %q,
                    error = %e,
                    "query fetch failed, skipping"
                ),
            }
            if candidates.len() >= self.config.min_results {
                debug!(
                    symbol = %symbol.ticker,
                    gathered = candidates.len(),
                    queries_issued = idx + 1,
                    "early exit"
                );
                break;
            }
            if idx + 1 < queries.len() {
                sleep(self.config.query_jitter.sample()).await;
            }
        }
        candidates
    }
}
