//! Schedules symbol pipelines under a global concurrency cap.

use std::sync::Arc;

use futures::{StreamExt, stream};
use tokio::time::sleep;
use tracing::info;

use crate::{
    config::IngestConfig,
    core::{NewsClient, models::Symbol},
    pipeline::SymbolPipeline,
    store::NewsStore,
};

/// Aggregate counters for one full run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Symbols scheduled.
    pub symbols: usize,
    /// Sum of per-symbol saved counts.
    pub saved: usize,
}

/// Fans the symbol pipeline out over all symbols with a fixed cap on
/// simultaneous invocations.
pub struct IngestRunner {
    pipeline: SymbolPipeline,
    config: IngestConfig,
}

impl IngestRunner {
    /// Creates a runner over the shared client and store.
    pub fn new(client: &NewsClient, store: Arc<dyn NewsStore>, config: IngestConfig) -> Self {
        Self {
            pipeline: SymbolPipeline::new(client, store, &config),
            config,
        }
    }

    /// Runs every symbol's pipeline exactly once and returns aggregate counts.
    ///
    /// Completes only after all pipelines settle; a failure inside one
    /// symbol never cancels the others. Submission follows input order,
    /// completion order is unspecified.
    pub async fn run_all(&self, symbols: Vec<Symbol>) -> RunSummary {
        let total = symbols.len();
        let saved: usize = stream::iter(symbols)
            .map(|symbol| {
                let pipeline = &self.pipeline;
                let pacing = self.config.symbol_jitter;
                async move {
                    let outcome = pipeline.run(&symbol).await;
                    info!(symbol = %symbol.ticker, saved = outcome.saved, "symbol complete");
                    // Hold the slot briefly so the aggregate request rate
                    // stays smooth.
                    sleep(pacing.sample()).await;
                    outcome.saved
                }
            })
            .buffer_unordered(self.config.concurrency.max(1))
            .collect::<Vec<_>>()
            .await
            .into_iter()
            .sum();

        info!(symbols = total, saved, "run complete");
        RunSummary {
            symbols: total,
            saved,
        }
    }
}
