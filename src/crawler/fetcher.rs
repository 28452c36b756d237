//! HTTP fetcher implementation
//!
//! This module is the crawler's only I/O boundary:
//! - the [`Fetcher`] trait the orchestrator depends on
//! - [`HttpFetcher`], the `reqwest`-backed implementation
//! - error classification into [`FetchFailure`]
//!
//! Every failure is non-fatal to the crawl. There is no retry logic here.

use crate::config::{CrawlerConfig, UserAgentConfig};
use crate::url::CanonicalUrl;
use reqwest::Client;
use std::future::Future;
use std::time::Duration;
use thiserror::Error;

/// Raw content of a successfully fetched page
#[derive(Debug, Clone)]
pub struct RawPage {
    /// Final URL after redirects
    pub final_url: String,

    /// HTTP status code
    pub status_code: u16,

    /// Page body content
    pub body: String,
}

/// Why a fetch did not produce a page
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FetchFailure {
    /// Connection refused, DNS failure, timeout, broken body, ...
    #[error("network error: {0}")]
    Network(String),

    /// The server answered with a non-2xx status
    #[error("non-success status: {0}")]
    Status(u16),
}

/// Retrieves raw page content for a URL
pub trait Fetcher {
    /// Fetches a single page
    fn fetch(
        &self,
        url: &CanonicalUrl,
    ) -> impl Future<Output = Result<RawPage, FetchFailure>> + Send;
}

/// Formats the user agent string: `Name/Version (+ContactURL)`
pub fn user_agent_string(config: &UserAgentConfig) -> String {
    format!(
        "{}/{} (+{})",
        config.crawler_name, config.crawler_version, config.contact_url
    )
}

/// Builds an HTTP client with proper configuration
///
/// # Arguments
///
/// * `user_agent` - The user agent configuration
/// * `crawler` - Timeouts for each request
///
/// # Example
///
/// ```no_run
/// use docs_survey::config::{CrawlerConfig, UserAgentConfig};
/// use docs_survey::crawler::build_http_client;
///
/// let user_agent = UserAgentConfig {
///     crawler_name: "DocsSurvey".to_string(),
///     crawler_version: "0.1".to_string(),
///     contact_url: "https://example.com/about".to_string(),
/// };
///
/// let client = build_http_client(&user_agent, &CrawlerConfig::default()).unwrap();
/// ```
pub fn build_http_client(
    user_agent: &UserAgentConfig,
    crawler: &CrawlerConfig,
) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(user_agent_string(user_agent))
        .timeout(Duration::from_secs(crawler.request_timeout_secs))
        .connect_timeout(Duration::from_secs(crawler.connect_timeout_secs))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches a URL and classifies the outcome
///
/// | Condition | Result |
/// |-----------|--------|
/// | 2xx with readable body | `Ok(RawPage)` |
/// | Any other status | `Status(code)` |
/// | Timeout | `Network("request timeout")` |
/// | Connection failure | `Network("connection failed: ...")` |
/// | Body read failure | `Network(...)` |
pub async fn fetch_url(client: &Client, url: &str) -> Result<RawPage, FetchFailure> {
    let response = client.get(url).send().await.map_err(classify_error)?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchFailure::Status(status.as_u16()));
    }

    let final_url = response.url().to_string();
    let body = response.text().await.map_err(classify_error)?;

    Ok(RawPage {
        final_url,
        status_code: status.as_u16(),
        body,
    })
}

fn classify_error(error: reqwest::Error) -> FetchFailure {
    if error.is_timeout() {
        FetchFailure::Network("request timeout".to_string())
    } else if error.is_connect() {
        FetchFailure::Network(format!("connection failed: {}", error))
    } else {
        FetchFailure::Network(error.to_string())
    }
}

/// [`Fetcher`] backed by a `reqwest` client
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Builds a fetcher from the crawler and user agent configuration
    pub fn new(
        user_agent: &UserAgentConfig,
        crawler: &CrawlerConfig,
    ) -> Result<Self, reqwest::Error> {
        Ok(Self::with_client(build_http_client(user_agent, crawler)?))
    }

    /// Wraps an existing client
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &CanonicalUrl) -> Result<RawPage, FetchFailure> {
        fetch_url(&self.client, url.as_str()).await
    }
}
