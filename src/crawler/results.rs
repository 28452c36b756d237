//! Crawl result records

use crate::url::CanonicalUrl;

/// One row of the report: a successfully fetched page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRecord {
    /// Page title, possibly empty
    pub title: String,

    /// Canonical URL the page was fetched from
    pub url: CanonicalUrl,

    /// Formatted date, or `"UNKNOWN"`
    pub last_updated: String,
}

impl PageRecord {
    pub fn new(title: String, url: CanonicalUrl, last_updated: String) -> Self {
        Self {
            title,
            url,
            last_updated,
        }
    }
}

/// Seed or discovered, decided once when the record is created
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Classification {
    /// The page's URL was part of the crawl input
    Seed,
    /// The page was reached through navigation links
    Discovered,
}

/// Records collected by a crawl, split by classification
///
/// Each group keeps traversal order. [`ResultSet::records`] yields seed
/// records first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultSet {
    seed_results: Vec<PageRecord>,
    discovered_results: Vec<PageRecord>,
}

impl ResultSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a record to the group named by `classification`
    pub fn push(&mut self, record: PageRecord, classification: Classification) {
        match classification {
            Classification::Seed => self.seed_results.push(record),
            Classification::Discovered => self.discovered_results.push(record),
        }
    }

    /// Records whose URL was a seed, in traversal order
    pub fn seed_results(&self) -> &[PageRecord] {
        &self.seed_results
    }

    /// Records reached through links, in traversal order
    pub fn discovered_results(&self) -> &[PageRecord] {
        &self.discovered_results
    }

    /// All records, seed group first
    pub fn records(&self) -> impl Iterator<Item = &PageRecord> {
        self.seed_results.iter().chain(self.discovered_results.iter())
    }

    pub fn len(&self) -> usize {
        self.seed_results.len() + self.discovered_results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::url::canonicalize;

    fn record(path: &str) -> PageRecord {
        let url = canonicalize(&format!("https://x.com{}", path), None).unwrap();
        PageRecord::new(path.to_string(), url, "UNKNOWN".to_string())
    }

    #[test]
    fn test_seed_records_come_first() {
        let mut results = ResultSet::new();
        results.push(record("/d1"), Classification::Discovered);
        results.push(record("/s1"), Classification::Seed);
        results.push(record("/d2"), Classification::Discovered);
        results.push(record("/s2"), Classification::Seed);

        let titles: Vec<_> = results.records().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["/s1", "/s2", "/d1", "/d2"]);
        assert_eq!(results.len(), 4);
        assert_eq!(results.seed_results().len(), 2);
        assert_eq!(results.discovered_results().len(), 2);
    }

    #[test]
    fn test_empty() {
        assert!(ResultSet::new().is_empty());
    }
}
