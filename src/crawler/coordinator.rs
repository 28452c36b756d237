//! Crawler coordinator - main crawl orchestration logic
//!
//! This module contains the crawl loop. A [`CrawlSession`] owns everything a
//! single crawl needs (frontier, results, fetcher) and is consumed by
//! [`CrawlSession::run`], so nothing outlives one invocation.
//!
//! The loop is strictly sequential: one fetch in flight, frontier changes
//! only between fetches, FIFO breadth-first over discovery order.

use crate::crawler::fetcher::Fetcher;
use crate::crawler::frontier::Frontier;
use crate::crawler::links::discover_links;
use crate::crawler::results::{Classification, PageRecord, ResultSet};
use crate::extract::{extract_title, DateExtractor};
use crate::page::HtmlPage;
use crate::url::{canonicalize_url, CanonicalUrl};
use crate::CrawlError;
use std::time::Instant;

/// Lifecycle of a crawl session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrawlState {
    /// Seeded and fetching
    Running,
    /// Frontier exhausted, results final
    Done,
}

/// One crawl invocation
pub struct CrawlSession<F> {
    fetcher: F,
    allowed_domain: String,
    frontier: Frontier,
    results: ResultSet,
    extractor: DateExtractor,
    state: CrawlState,
}

impl<F: Fetcher> CrawlSession<F> {
    /// Creates a seeded session
    ///
    /// # Arguments
    ///
    /// * `fetcher` - Where page content comes from
    /// * `allowed_domain` - The only host discovered links may point to
    /// * `seeds` - Canonical seed URLs, in crawl order
    ///
    /// # Returns
    ///
    /// * `Ok(CrawlSession)` - Session in the `Running` state
    /// * `Err(CrawlError::MissingSeeds)` - No seeds were given; nothing is fetched
    pub fn new(
        fetcher: F,
        allowed_domain: impl Into<String>,
        seeds: Vec<CanonicalUrl>,
    ) -> Result<Self, CrawlError> {
        if seeds.is_empty() {
            return Err(CrawlError::MissingSeeds(
                "no valid seed URLs were supplied".to_string(),
            ));
        }

        let mut frontier = Frontier::new();
        frontier.seed(seeds);

        Ok(Self {
            fetcher,
            allowed_domain: allowed_domain.into().to_lowercase(),
            frontier,
            results: ResultSet::new(),
            extractor: DateExtractor::default(),
            state: CrawlState::Running,
        })
    }

    /// Current lifecycle state
    pub fn state(&self) -> CrawlState {
        self.state
    }

    /// The frontier as it currently stands
    pub fn frontier(&self) -> &Frontier {
        &self.frontier
    }

    /// Runs the crawl until the frontier is exhausted
    ///
    /// Fetch failures are logged and skipped; they never abort the crawl.
    pub async fn run(mut self) -> Result<ResultSet, CrawlError> {
        tracing::info!(
            "Starting crawl of {} with {} seed URLs",
            self.allowed_domain,
            self.frontier.seed_count()
        );

        let start_time = Instant::now();
        let mut pages_fetched = 0usize;

        while self.state == CrawlState::Running {
            let Some(url) = self.frontier.dequeue() else {
                tracing::info!("Frontier is empty, crawl complete");
                self.state = CrawlState::Done;
                break;
            };

            tracing::debug!("Processing URL: {}", url);

            let raw = match self.fetcher.fetch(&url).await {
                Ok(raw) => raw,
                Err(failure) => {
                    tracing::warn!("Failed to fetch {}: {}", url, failure);
                    continue;
                }
            };

            if raw.final_url != url.as_str() {
                tracing::debug!("{} redirected to {}", url, raw.final_url);
            }
            tracing::trace!("Fetched {} ({})", url, raw.status_code);

            self.process_page(url, &raw.body);
            pages_fetched += 1;

            // Progress reporting every 10 pages
            if pages_fetched % 10 == 0 {
                tracing::info!(
                    "Progress: {} pages fetched, {} in frontier, {:.2} pages/sec",
                    pages_fetched,
                    self.frontier.pending(),
                    pages_fetched as f64 / start_time.elapsed().as_secs_f64()
                );
            }
        }

        tracing::info!(
            "Crawl completed: {} records ({} seed, {} discovered) from {} URLs in {:?}",
            self.results.len(),
            self.results.seed_results().len(),
            self.results.discovered_results().len(),
            self.frontier.visited_count(),
            start_time.elapsed()
        );

        Ok(self.results)
    }

    /// Extracts a record and follow-up links from one fetched page
    fn process_page(&mut self, url: CanonicalUrl, body: &str) {
        let page = HtmlPage::parse(url.clone(), body);

        let title = extract_title(&page);
        let last_updated = self.extractor.extract(&page).value;
        let links = discover_links(&page, &url, &self.allowed_domain);

        let classification = if self.frontier.is_seed(&url) {
            Classification::Seed
        } else {
            Classification::Discovered
        };

        self.results
            .push(PageRecord::new(title, url.clone(), last_updated), classification);

        let mut added = 0;
        for link in links {
            match canonicalize_url(&link) {
                Some(canonical) => {
                    if self.frontier.is_visited(&canonical) {
                        tracing::trace!("Already fetched {}", canonical);
                    } else if self.frontier.enqueue_if_new(canonical) {
                        added += 1;
                    }
                }
                None => tracing::debug!("Dropping link that does not canonicalize: {}", link),
            }
        }

        tracing::debug!("{} new links queued from {}", added, url);
    }
}
