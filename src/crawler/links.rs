//! Navigation link discovery
//!
//! Only anchors inside navigation-like regions are followed: tables of
//! contents, `nav` elements and sidebars. Body links are ignored.
//!
//! # Exclusion Rules
//!
//! **Drop an anchor when:**
//! - its href is a pure fragment (`#...`) or does not resolve
//! - it resolves to a non-http(s) URL or to a host other than the allowed domain
//! - its text or href names a country/region support list
//! - its nearest enclosing section/table/div talks about supported
//!   countries or regions
//!
//! Region lists of that kind enumerate hundreds of near-identical pages.

use crate::page::{Anchor, ParsedPage};
use crate::url::{is_same_domain, CanonicalUrl};
use std::collections::HashSet;
use url::Url;

/// Structural selectors for navigation regions, applied as a union
const NAVIGATION_REGIONS: &[&str] = &[
    "nav",
    r#"[role="navigation"]"#,
    ".toc",
    "#toc",
    r#"[class*="toc"]"#,
    "aside",
    ".sidebar",
    r#"[class*="sidebar"]"#,
    "#side-doc-outline",
];

/// Elements that count as an anchor's enclosing container
const CONTAINER_TAGS: &[&str] = &["section", "table", "div"];

/// Keywords that mark an anchor's own text or href as a region-list link
const ANCHOR_KEYWORDS: &[&str] = &[
    "supported countries",
    "supported regions",
    "supported country",
    "countries/regions",
    "country/region",
];

/// Keywords that mark a whole container as a region list
const CONTAINER_KEYWORDS: &[&str] = &["supported countries", "supported regions", "country/region"];

/// Finds the in-domain navigation links worth following on a page
///
/// Links come back resolved against `page_url`, deduplicated, in the order
/// they were first seen. They are not canonicalized.
///
/// # Arguments
///
/// * `page` - The parsed page
/// * `page_url` - Canonical URL of the page, used to resolve relative hrefs
/// * `allowed_domain` - The only host links may point to
pub fn discover_links(
    page: &dyn ParsedPage,
    page_url: &CanonicalUrl,
    allowed_domain: &str,
) -> Vec<Url> {
    let mut seen = HashSet::new();
    let mut links = Vec::new();

    for region in NAVIGATION_REGIONS {
        for anchor in page.anchors_in(region, CONTAINER_TAGS) {
            let Some(url) = resolve_anchor(&anchor, page_url, allowed_domain) else {
                continue;
            };

            if is_region_list_link(&anchor) {
                tracing::trace!("Skipping region-list link {} on {}", url, page_url);
                continue;
            }

            if seen.insert(url.as_str().to_string()) {
                links.push(url);
            }
        }
    }

    links
}

/// Resolves an anchor's href, returning `None` for anything not worth following
fn resolve_anchor(anchor: &Anchor, page_url: &CanonicalUrl, allowed_domain: &str) -> Option<Url> {
    let href = anchor.href.trim();

    if href.is_empty() || href.starts_with('#') {
        return None;
    }

    let url = page_url.join(href)?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return None;
    }

    if !is_same_domain(&url, allowed_domain) {
        tracing::trace!("Skipping off-domain link {}", url);
        return None;
    }

    Some(url)
}

/// Checks the country/region exclusion heuristic
fn is_region_list_link(anchor: &Anchor) -> bool {
    let text = anchor.text.to_lowercase();
    let href = anchor.href.to_lowercase();

    if ANCHOR_KEYWORDS
        .iter()
        .any(|keyword| text.contains(keyword) || href.contains(keyword))
    {
        return true;
    }

    let availability_by_country = href.contains("availability") && href.contains("country");
    if href.contains("country-region") || availability_by_country {
        return true;
    }

    anchor
        .container_text
        .as_deref()
        .map(str::to_lowercase)
        .is_some_and(|container| {
            CONTAINER_KEYWORDS
                .iter()
                .any(|keyword| container.contains(keyword))
        })
}
