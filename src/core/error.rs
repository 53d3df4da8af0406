use thiserror::Error;

/// The primary error type for all fallible operations in this crate.
#[derive(Debug, Error)]
pub enum NewsError {
    /// An error occurred during an HTTP request.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A provided URL could not be parsed.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// The feed body could not be parsed as RSS.
    #[error("Feed parse error: {0}")]
    Feed(#[from] rss::Error),

    /// The server returned an unexpected or unsuccessful HTTP status code.
    #[error("Unexpected response status: {status} at {url}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The URL that returned the error.
        url: String,
    },

    /// An error occurred while talking to the durable store.
    #[error("Store error: {0}")]
    Store(#[from] sqlx::Error),

    /// The symbol list could not be loaded. Always fatal to the run.
    #[error("Symbol list error: {0}")]
    SymbolList(String),
}
