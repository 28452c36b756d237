//! Page title extraction

use crate::page::ParsedPage;

/// Title sources in priority order
///
/// Each entry picks only the first matching element; if that element's text
/// is empty the next source is tried rather than the next element.
const TITLE_SOURCES: &[&str] = &[
    // Primary heading inside the main content region
    r#"main h1, [role="main"] h1, #main h1"#,
    // Any heading anywhere
    "h1, h2, h3, h4, h5, h6",
    // Document title
    "title",
];

/// Extracts a page title
///
/// Tries the first `h1` of the main content region, then the first heading
/// anywhere, then `<title>`. The first non-empty text wins. Returns an empty
/// string when none of them has text.
pub fn extract_title(page: &dyn ParsedPage) -> String {
    TITLE_SOURCES
        .iter()
        .filter_map(|selector| page.first(selector))
        .map(|element| element.text)
        .find(|text| !text.is_empty())
        .unwrap_or_default()
}
