use std::sync::Arc;

use httpmock::{Method::GET, MockServer};
use marketnews_rs::{IngestRunner, NewsClient, Symbol, query};
use url::Url;

use crate::common::{self, MemoryStore};

fn client_for(server: &MockServer) -> NewsClient {
    NewsClient::builder()
        .base_search(Url::parse(&server.base_url()).unwrap())
        .build()
        .unwrap()
}

fn mock_first_query(server: &MockServer, ticker: &str, name: &str, tag: &str, links: [&str; 3]) {
    let queries = query::build_queries(ticker, name, tag);
    let body = common::rss_body(&[
        (&format!("{name} stock gains"), links[0], ""),
        (&format!("{name} shares rise"), links[1], ""),
        (&format!("{name} results due"), links[2], ""),
    ]);
    server.mock(|when, then| {
        when.method(GET).path("/").query_param("q", queries[0].as_str());
        then.status(200).body(body.clone());
    });
}

#[tokio::test]
async fn runs_every_symbol_and_aggregates_counts() {
    let server = common::setup_server();
    let config = common::test_config();

    mock_first_query(
        &server,
        "TCS",
        "Tata Consultancy Services",
        &config.exchange_tag,
        [
            "https://news.example/tcs-1",
            "https://news.example/tcs-2",
            "https://news.example/tcs-3",
        ],
    );
    mock_first_query(
        &server,
        "INFY",
        "Infosys",
        &config.exchange_tag,
        [
            "https://news.example/infy-1",
            "https://news.example/infy-2",
            "https://news.example/infy-3",
        ],
    );

    let store = Arc::new(MemoryStore::default());
    let runner = IngestRunner::new(&client_for(&server), store.clone(), config);
    let summary = runner
        .run_all(vec![
            Symbol::with_name("TCS", "Tata Consultancy Services"),
            Symbol::with_name("INFY", "Infosys"),
        ])
        .await;

    assert_eq!(summary.symbols, 2);
    assert_eq!(summary.saved, 6);
    assert_eq!(store.len(), 6);
}

#[tokio::test]
async fn a_failing_symbol_does_not_block_the_others() {
    let server = common::setup_server();
    let config = common::test_config();

    // Only INFY gets a working feed; every TCS query 404s and is treated
    // as a recoverable per-query failure.
    mock_first_query(
        &server,
        "INFY",
        "Infosys",
        &config.exchange_tag,
        [
            "https://news.example/infy-1",
            "https://news.example/infy-2",
            "https://news.example/infy-3",
        ],
    );

    let store = Arc::new(MemoryStore::default());
    let runner = IngestRunner::new(&client_for(&server), store.clone(), config);
    let summary = runner
        .run_all(vec![
            Symbol::with_name("TCS", "Tata Consultancy Services"),
            Symbol::with_name("INFY", "Infosys"),
        ])
        .await;

    assert_eq!(summary.symbols, 2);
    assert_eq!(summary.saved, 3);
    assert_eq!(store.len(), 3);
}
