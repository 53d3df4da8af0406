//! Public client surface + builder.

mod constants;

use std::time::Duration;

use constants::{DEFAULT_BASE_SEARCH, USER_AGENT};
use reqwest::Client;
use url::Url;

use crate::core::NewsError;

/// Shared HTTP client for the news feed endpoint.
///
/// Cheap to clone; all clones share the same connection pool.
#[derive(Debug, Clone)]
pub struct NewsClient {
    http: Client,
    base_search: Url,
}

impl Default for NewsClient {
    fn default() -> Self {
        Self::builder().build().expect("default client")
    }
}

impl NewsClient {
    /// Create a new builder.
    pub fn builder() -> NewsClientBuilder {
        NewsClientBuilder::default()
    }

    /* -------- internal getters used by other modules -------- */

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }
    pub(crate) fn base_search(&self) -> &Url {
        &self.base_search
    }
}

/* ----------------------- Builder ----------------------- */

#[derive(Default)]
pub struct NewsClientBuilder {
    user_agent: Option<String>,
    base_search: Option<Url>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
}

impl NewsClientBuilder {
    /// Override the User-Agent.
    #[must_use]
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Override the feed search base (tests point this at a mock server).
    #[must_use]
    pub fn base_search(mut self, url: Url) -> Self {
        self.base_search = Some(url);
        self
    }

    /// Set a global request timeout (overall). Default: none.
    #[must_use]
    pub const fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Set a connect timeout. Default: none.
    #[must_use]
    pub const fn connect_timeout(mut self, dur: Duration) -> Self {
        self.connect_timeout = Some(dur);
        self
    }

    /// Builds the client.
    ///
    /// # Errors
    ///
    /// Returns a `NewsError` if the default base URL fails to parse or the
    /// underlying HTTP client cannot be constructed.
    pub fn build(self) -> Result<NewsClient, NewsError> {
        let base_search = match self.base_search {
            Some(url) => url,
            None => Url::parse(DEFAULT_BASE_SEARCH)?,
        };

        let mut httpb = reqwest::Client::builder()
            .user_agent(self.user_agent.as_deref().unwrap_or(USER_AGENT));

        if let Some(t) = self.timeout {
            httpb = httpb.timeout(t);
        }
        if let Some(ct) = self.connect_timeout {
            httpb = httpb.connect_timeout(ct);
        }

        Ok(NewsClient {
            http: httpb.build()?,
            base_search,
        })
    }
}
