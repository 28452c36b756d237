//! Seed list loading
//!
//! A seed file is a newline-delimited list of absolute URLs. Lines are
//! trimmed and blank lines are ignored; there is no comment syntax.

use crate::url::{try_canonicalize, CanonicalUrl};
use crate::CrawlError;
use std::path::Path;

/// Splits seed file content into raw URL strings
pub fn parse_seed_list(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Reads a seed file
///
/// # Returns
///
/// * `Ok(Vec<String>)` - At least one non-blank line
/// * `Err(CrawlError::MissingSeeds)` - The file is missing, unreadable or empty
pub fn load_seeds(path: &Path) -> Result<Vec<String>, CrawlError> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        CrawlError::MissingSeeds(format!("cannot read seed file {}: {}", path.display(), e))
    })?;

    let seeds = parse_seed_list(&content);
    if seeds.is_empty() {
        return Err(CrawlError::MissingSeeds(format!(
            "seed file {} contains no URLs",
            path.display()
        )));
    }

    tracing::info!("Loaded {} seed URLs from {}", seeds.len(), path.display());
    Ok(seeds)
}

/// Canonicalizes raw seed URLs, dropping the ones that are not valid
pub fn canonical_seeds(raw: &[String]) -> Vec<CanonicalUrl> {
    raw.iter()
        .filter_map(|seed| match try_canonicalize(seed, None) {
            Ok(url) => Some(url),
            Err(e) => {
                tracing::warn!("Ignoring invalid seed URL {:?}: {}", seed, e);
                None
            }
        })
        .collect()
}
