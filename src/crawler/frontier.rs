//! Crawl frontier: seed set, visited set, queued set and the FIFO queue
//!
//! The frontier guarantees that each canonical URL is scheduled, and so
//! fetched, at most once over the lifetime of a crawl. `queued` is kept
//! separately from `visited` so a URL discovered from several pages while it
//! is still waiting in the queue is not pushed twice.

use crate::url::CanonicalUrl;
use std::collections::{HashSet, VecDeque};

/// Traversal bookkeeping for a single crawl
#[derive(Debug, Default)]
pub struct Frontier {
    /// URLs supplied as crawl input
    seeds: HashSet<CanonicalUrl>,

    /// URLs already handed out by `dequeue`
    visited: HashSet<CanonicalUrl>,

    /// URLs ever enqueued (superset of `visited`)
    queued: HashSet<CanonicalUrl>,

    /// URLs waiting to be fetched, oldest first
    queue: VecDeque<CanonicalUrl>,
}

impl Frontier {
    /// Creates an empty frontier
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the frontier with the crawl input
    ///
    /// Input order is preserved; duplicates collapse to their first
    /// occurrence. The seed set is fixed from here on.
    pub fn seed<I>(&mut self, urls: I)
    where
        I: IntoIterator<Item = CanonicalUrl>,
    {
        for url in urls {
            self.seeds.insert(url.clone());
            self.enqueue_if_new(url);
        }
    }

    /// Pops the next URL in FIFO order and marks it visited
    ///
    /// Returns `None` once the queue is exhausted.
    pub fn dequeue(&mut self) -> Option<CanonicalUrl> {
        let url = self.queue.pop_front()?;
        self.visited.insert(url.clone());
        Some(url)
    }

    /// Schedules a URL unless it has been scheduled before
    ///
    /// Returns true if the URL was added to the queue.
    pub fn enqueue_if_new(&mut self, url: CanonicalUrl) -> bool {
        if self.queued.contains(&url) {
            return false;
        }

        self.queued.insert(url.clone());
        self.queue.push_back(url);
        true
    }

    /// Returns true if the URL was part of the crawl input
    pub fn is_seed(&self, url: &CanonicalUrl) -> bool {
        self.seeds.contains(url)
    }

    /// Returns true if the URL has already been dequeued
    pub fn is_visited(&self, url: &CanonicalUrl) -> bool {
        self.visited.contains(url)
    }

    /// Number of URLs waiting to be fetched
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Number of URLs handed out so far
    pub fn visited_count(&self) -> usize {
        self.visited.len()
    }

    /// Number of distinct seed URLs
    pub fn seed_count(&self) -> usize {
        self.seeds.len()
    }

    /// Returns true when nothing is left to fetch
    pub fn is_exhausted(&self) -> bool {
        self.queue.is_empty()
    }
}
