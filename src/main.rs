use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use marketnews_rs::{IngestConfig, IngestRunner, NewsClient, NewsError, SqliteNewsStore, symbols};

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "fatal error");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), NewsError> {
    let mut args = std::env::args().skip(1);
    let symbols_path = args
        .next()
        .or_else(|| std::env::var("SYMBOLS_FILE").ok())
        .unwrap_or_else(|| "symbols.csv".to_string());
    let database_url = args
        .next()
        .or_else(|| std::env::var("DATABASE_URL").ok())
        .unwrap_or_else(|| "sqlite://news.db".to_string());

    let symbols = symbols::load_symbols(&symbols_path)?;
    info!(count = symbols.len(), path = %symbols_path, "loaded symbol list");

    let store = Arc::new(SqliteNewsStore::connect(&database_url).await?);
    let client = NewsClient::builder()
        .timeout(Duration::from_secs(20))
        .build()?;

    let runner = IngestRunner::new(&client, store, IngestConfig::default());
    let summary = runner.run_all(symbols).await;
    info!(
        symbols = summary.symbols,
        saved = summary.saved,
        "ingest finished"
    );
    Ok(())
}
