//! `scraper`-backed implementation of [`ParsedPage`]

use super::{collapse_whitespace, Anchor, PageElement, ParsedPage};
use crate::url::CanonicalUrl;
use scraper::{ElementRef, Html, Selector};

/// Elements whose text is never visible to a reader
const HIDDEN_TAGS: &[&str] = &["script", "style", "noscript", "template"];

/// An HTML document parsed with `scraper`
pub struct HtmlPage {
    url: CanonicalUrl,
    document: Html,
}

impl HtmlPage {
    /// Parses HTML content fetched from `url`
    ///
    /// Parsing is lenient: malformed markup still produces a document.
    ///
    /// # Example
    ///
    /// ```
    /// use docs_survey::canonicalize;
    /// use docs_survey::page::{HtmlPage, ParsedPage};
    ///
    /// let url = canonicalize("https://example.com/", None).unwrap();
    /// let page = HtmlPage::parse(url, "<html><body><h1>Hello</h1></body></html>");
    /// assert_eq!(page.first("h1").unwrap().text, "Hello");
    /// ```
    pub fn parse(url: CanonicalUrl, html: &str) -> Self {
        Self {
            url,
            document: Html::parse_document(html),
        }
    }
}

impl ParsedPage for HtmlPage {
    fn url(&self) -> &CanonicalUrl {
        &self.url
    }

    fn select(&self, selector: &str) -> Vec<PageElement> {
        let Some(selector) = parse_selector(selector) else {
            return Vec::new();
        };

        self.document
            .select(&selector)
            .map(|element| PageElement {
                name: element.value().name().to_string(),
                text: element_text(element),
                attributes: element
                    .value()
                    .attrs()
                    .map(|(key, value)| (key.to_string(), value.to_string()))
                    .collect(),
            })
            .collect()
    }

    fn visible_text(&self) -> String {
        let root = parse_selector("body")
            .and_then(|body| self.document.select(&body).next())
            .unwrap_or_else(|| self.document.root_element());

        let mut parts = Vec::new();
        collect_visible_text(root, &mut parts);
        let parts: Vec<&str> = parts
            .into_iter()
            .map(str::trim)
            .filter(|text| !text.is_empty())
            .collect();

        collapse_whitespace(&parts.join(" "))
    }

    fn anchors_in(&self, region_selector: &str, container_tags: &[&str]) -> Vec<Anchor> {
        let (Some(region_selector), Some(anchor_selector)) =
            (parse_selector(region_selector), parse_selector("a[href]"))
        else {
            return Vec::new();
        };

        let mut anchors = Vec::new();
        for region in self.document.select(&region_selector) {
            for anchor in region.select(&anchor_selector) {
                let Some(href) = anchor.value().attr("href") else {
                    continue;
                };

                let container_text = anchor
                    .ancestors()
                    .filter_map(ElementRef::wrap)
                    .find(|element| container_tags.contains(&element.value().name()))
                    .map(element_text);

                anchors.push(Anchor {
                    text: element_text(anchor),
                    href: href.to_string(),
                    container_text,
                });
            }
        }

        anchors
    }
}

fn parse_selector(selector: &str) -> Option<Selector> {
    match Selector::parse(selector) {
        Ok(selector) => Some(selector),
        Err(e) => {
            tracing::debug!("Ignoring invalid selector {:?}: {:?}", selector, e);
            None
        }
    }
}

/// Returns the visible text of an element, whitespace collapsed
fn element_text(element: ElementRef<'_>) -> String {
    let mut parts = Vec::new();
    collect_visible_text(element, &mut parts);
    collapse_whitespace(&parts.join(" "))
}

/// Collects text nodes in document order, skipping script, style and
/// similar subtrees
fn collect_visible_text<'a>(element: ElementRef<'a>, out: &mut Vec<&'a str>) {
    for child in element.children() {
        if let Some(text) = child.value().as_text() {
            out.push(&**text);
        } else if let Some(child) = ElementRef::wrap(child) {
            if !HIDDEN_TAGS.contains(&child.value().name()) {
                collect_visible_text(child, out);
            }
        }
    }
}
