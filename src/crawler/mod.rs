//! Crawler module for page fetching and processing
//!
//! This module contains the core crawling logic, including:
//! - The frontier that guarantees at-most-once fetching
//! - HTTP fetching behind the [`Fetcher`] trait
//! - Navigation link discovery
//! - Overall crawl coordination

mod coordinator;
mod fetcher;
mod frontier;
mod links;
mod results;

pub use coordinator::{CrawlSession, CrawlState};
pub use fetcher::{
    build_http_client, fetch_url, user_agent_string, FetchFailure, Fetcher, HttpFetcher, RawPage,
};
pub use frontier::Frontier;
pub use links::discover_links;
pub use results::{Classification, PageRecord, ResultSet};

use crate::config::Config;
use crate::seeds::canonical_seeds;
use crate::url::extract_domain;
use crate::CrawlError;

/// Runs a complete crawl over HTTP
///
/// This is the main entry point for starting a crawl. It will:
/// 1. Canonicalize the seed URLs, dropping invalid ones
/// 2. Pick the allowed domain (configured, or the first seed's host)
/// 3. Build the HTTP client
/// 4. Fetch pages, extract records and follow navigation links until the
///    frontier is exhausted
///
/// # Arguments
///
/// * `config` - The crawler configuration
/// * `seeds` - Raw seed URLs, in crawl order
///
/// # Returns
///
/// * `Ok(ResultSet)` - Crawl completed
/// * `Err(CrawlError)` - No usable seeds, or the HTTP client could not be built
pub async fn crawl(config: &Config, seeds: &[String]) -> Result<ResultSet, CrawlError> {
    let seeds = canonical_seeds(seeds);

    let allowed_domain = match &config.crawler.allowed_domain {
        Some(domain) => domain.clone(),
        None => seeds
            .first()
            .and_then(|seed| extract_domain(seed.as_url()))
            .ok_or_else(|| {
                CrawlError::MissingSeeds("no valid seed URLs were supplied".to_string())
            })?,
    };

    let fetcher = HttpFetcher::new(&config.user_agent, &config.crawler)?;
    CrawlSession::new(fetcher, allowed_domain, seeds)?
        .run()
        .await
}
