//! marketnews-rs: concurrent ticker-news ingester.
//!
//! Fetches recent headlines for a list of stock symbols from the Google
//! News RSS search feed, ranks them with a keyword relevance heuristic,
//! and persists the top results to a store that deduplicates by article
//! URL across runs.
//!
//! The pieces compose bottom-up: [`query::build_queries`] derives the
//! per-symbol query list, [`Scorer`] filters and ranks raw candidates,
//! [`SymbolPipeline`] orchestrates fetching and persistence for one
//! symbol, and [`IngestRunner`] schedules all symbols under a global
//! concurrency cap.

pub mod config;
pub mod core;
pub mod feed;
pub mod pipeline;
pub mod query;
pub mod runner;
pub mod score;
pub mod store;
pub mod symbols;

pub use config::{IngestConfig, Jitter, Locale};
pub use crate::core::{NewsClient, NewsClientBuilder, NewsError};
pub use crate::core::{NewsCandidate, NewsRecord, ScoredArticle, Symbol};
pub use pipeline::{PipelineOutcome, SymbolPipeline};
pub use runner::{IngestRunner, RunSummary};
pub use score::Scorer;
pub use store::{NewsStore, SqliteNewsStore, UpsertOutcome};
