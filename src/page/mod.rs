//! Parsed page capability
//!
//! Extraction and link discovery only need a handful of structural queries
//! over a page: "give me the elements matching this selector", "give me the
//! visible text", "give me the anchors inside these regions". The
//! [`ParsedPage`] trait captures exactly that, so the heuristics never touch a
//! concrete DOM API. [`HtmlPage`] implements it on top of `scraper`.

mod html;

pub use html::HtmlPage;

use crate::url::CanonicalUrl;

/// A matched element, flattened to what the heuristics need
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageElement {
    /// Lowercase tag name
    pub name: String,

    /// Visible text with whitespace collapsed and trimmed
    pub text: String,

    /// Attributes in document order
    pub attributes: Vec<(String, String)>,
}

impl PageElement {
    /// Returns the value of an attribute, if present
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// An anchor found inside a navigation region
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Anchor {
    /// Visible text of the anchor
    pub text: String,

    /// Raw `href` attribute value
    pub href: String,

    /// Full text of the nearest enclosing container element, if any. The
    /// navigation region itself and anything above it are candidates too.
    pub container_text: Option<String>,
}

/// Structural query interface over a parsed page
pub trait ParsedPage {
    /// The canonical URL the page was fetched from
    fn url(&self) -> &CanonicalUrl;

    /// Returns every element matching a CSS selector, in document order
    ///
    /// An invalid selector matches nothing.
    fn select(&self, selector: &str) -> Vec<PageElement>;

    /// Returns the text a reader would see, excluding scripts and styles
    fn visible_text(&self) -> String;

    /// Returns the anchors with an `href` inside every element matching
    /// `region_selector`
    ///
    /// `container_tags` names the elements that count as an anchor's
    /// enclosing container.
    fn anchors_in(&self, region_selector: &str, container_tags: &[&str]) -> Vec<Anchor>;

    /// Returns the first element matching a CSS selector
    fn first(&self, selector: &str) -> Option<PageElement> {
        self.select(selector).into_iter().next()
    }
}

/// Collapses runs of whitespace into single spaces and trims the ends
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
