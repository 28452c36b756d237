//! "Last updated" date extraction
//!
//! Documentation pages publish their update date in many shapes. Each shape
//! is handled by one [`DateStrategy`]; a [`DateExtractor`] tries them in a
//! fixed order and stops at the first hit:
//!
//! 1. text of an explicit timestamp element, when it is already `MM/DD/YYYY`
//! 2. the `datetime` attribute of that same element, reformatted
//! 3. a `Last updated: <Month D, YYYY>` label in footer/main/article/header
//! 4. any bare `<Month D, YYYY>` in the page's visible text (low confidence)
//!
//! When every step misses, the value is [`UNKNOWN_DATE`].

use crate::page::{collapse_whitespace, PageElement, ParsedPage};
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use regex::Regex;
use std::sync::LazyLock;

/// Sentinel recorded when no date could be found
pub const UNKNOWN_DATE: &str = "UNKNOWN";

/// Elements that carry a machine-readable timestamp
const TIMESTAMP_SELECTOR: &str = "time, local-time, [data-article-date]";

/// Attributes holding the machine-readable value, in lookup order
const TIMESTAMP_ATTRIBUTES: &[&str] = &["datetime", "data-article-date"];

/// Containers searched for a "Last updated" label, in order
const LABEL_CONTAINERS: &[&str] = &["footer p", "footer", "main p", "main", "article", "header"];

/// Month names and their common abbreviations
const MONTH_PATTERN: &str = r"(?:Jan(?:uary)?|Feb(?:ruary)?|Mar(?:ch)?|Apr(?:il)?|May|June?|July?|Aug(?:ust)?|Sep(?:t(?:ember)?)?|Oct(?:ober)?|Nov(?:ember)?|Dec(?:ember)?)";

static NUMERIC_DATE: LazyLock<Regex> = LazyLock::new(|| {
    // Static pattern, safe to panic
    Regex::new(r"^\d{1,2}/\d{1,2}/\d{4}$").expect("numeric date regex is valid")
});

static LABELED_DATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?i)last\s+updated\s*:?\s*({MONTH_PATTERN}\.?\s+\d{{1,2}},\s*\d{{4}})"
    ))
    .expect("labeled date regex is valid") // Static pattern, safe to panic
});

static BARE_DATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"\b{MONTH_PATTERN}\.?\s+\d{{1,2}},\s*\d{{4}}\b"))
        .expect("bare date regex is valid") // Static pattern, safe to panic
});

/// Which fallback step produced a date
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DateSource {
    /// Visible text of a timestamp element
    TimestampText,
    /// Machine-readable attribute of a timestamp element
    TimestampAttribute,
    /// A "Last updated" label in a known container
    LastUpdatedLabel,
    /// First date-like text anywhere on the page
    LooseText,
    /// Nothing matched
    Unknown,
}

impl DateSource {
    /// Returns true for sources that may have picked up an unrelated date
    pub fn is_low_confidence(&self) -> bool {
        matches!(self, Self::LooseText)
    }
}

/// A date value together with the step that found it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedDate {
    pub value: String,
    pub source: DateSource,
}

impl ExtractedDate {
    fn unknown() -> Self {
        Self {
            value: UNKNOWN_DATE.to_string(),
            source: DateSource::Unknown,
        }
    }

    /// Returns true when no strategy produced a date
    pub fn is_unknown(&self) -> bool {
        self.source == DateSource::Unknown
    }
}

/// One step of the date fallback chain
pub trait DateStrategy: Send + Sync {
    /// The source tag attached to a successful attempt
    fn source(&self) -> DateSource;

    /// Attempts to extract a date, returning `None` to defer to the next step
    fn attempt(&self, page: &dyn ParsedPage) -> Option<String>;
}

/// Visible text of the first timestamp element, if it reads `MM/DD/YYYY`
pub struct TimestampText;

impl DateStrategy for TimestampText {
    fn source(&self) -> DateSource {
        DateSource::TimestampText
    }

    fn attempt(&self, page: &dyn ParsedPage) -> Option<String> {
        let element = page.first(TIMESTAMP_SELECTOR)?;
        NUMERIC_DATE
            .is_match(&element.text)
            .then(|| element.text.clone())
    }
}

/// Machine-readable attribute of the first timestamp element
pub struct TimestampAttribute;

impl DateStrategy for TimestampAttribute {
    fn source(&self) -> DateSource {
        DateSource::TimestampAttribute
    }

    fn attempt(&self, page: &dyn ParsedPage) -> Option<String> {
        let element = page.first(TIMESTAMP_SELECTOR)?;
        timestamp_attribute(&element)
            .and_then(parse_machine_date)
            .map(format_date)
    }
}

/// `Last updated: <Month D, YYYY>` inside one of the known containers
pub struct LastUpdatedLabel {
    containers: Vec<String>,
}

impl Default for LastUpdatedLabel {
    fn default() -> Self {
        Self {
            containers: LABEL_CONTAINERS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl DateStrategy for LastUpdatedLabel {
    fn source(&self) -> DateSource {
        DateSource::LastUpdatedLabel
    }

    fn attempt(&self, page: &dyn ParsedPage) -> Option<String> {
        self.containers.iter().find_map(|selector| {
            page.select(selector).into_iter().find_map(|element| {
                LABELED_DATE
                    .captures(&element.text)
                    .and_then(|captures| captures.get(1))
                    .map(|date| collapse_whitespace(date.as_str()))
            })
        })
    }
}

/// First bare `<Month D, YYYY>` anywhere in the visible text
pub struct LooseText;

impl DateStrategy for LooseText {
    fn source(&self) -> DateSource {
        DateSource::LooseText
    }

    fn attempt(&self, page: &dyn ParsedPage) -> Option<String> {
        BARE_DATE
            .find(&page.visible_text())
            .map(|date| collapse_whitespace(date.as_str()))
    }
}

/// Ordered chain of date strategies
pub struct DateExtractor {
    strategies: Vec<Box<dyn DateStrategy>>,
}

impl Default for DateExtractor {
    fn default() -> Self {
        let strategies: Vec<Box<dyn DateStrategy>> = vec![
            Box::new(TimestampText),
            Box::new(TimestampAttribute),
            Box::new(LastUpdatedLabel::default()),
            Box::new(LooseText),
        ];
        Self::new(strategies)
    }
}

impl DateExtractor {
    /// Creates an extractor that tries `strategies` in the given order
    pub fn new(strategies: Vec<Box<dyn DateStrategy>>) -> Self {
        Self { strategies }
    }

    /// Runs the chain and returns the first hit, or the sentinel
    pub fn extract(&self, page: &dyn ParsedPage) -> ExtractedDate {
        for strategy in &self.strategies {
            if let Some(value) = strategy.attempt(page) {
                let source = strategy.source();
                if source.is_low_confidence() {
                    tracing::debug!(
                        "Low-confidence date {:?} for {} (first date-like text on page)",
                        value,
                        page.url()
                    );
                } else {
                    tracing::trace!("Date {:?} for {} from {:?}", value, page.url(), source);
                }
                return ExtractedDate { value, source };
            }
        }

        tracing::info!("No last-updated date found for {}", page.url());
        ExtractedDate::unknown()
    }
}

/// Extracts the "last updated" date of a page
///
/// Returns a date string, or [`UNKNOWN_DATE`] when nothing matched.
pub fn extract_last_updated(page: &dyn ParsedPage) -> String {
    extract_last_updated_with_source(page).value
}

/// Like [`extract_last_updated`], but also reports which step matched
pub fn extract_last_updated_with_source(page: &dyn ParsedPage) -> ExtractedDate {
    DateExtractor::default().extract(page)
}

fn timestamp_attribute(element: &PageElement) -> Option<&str> {
    TIMESTAMP_ATTRIBUTES
        .iter()
        .filter_map(|name| element.attr(name))
        .map(str::trim)
        .find(|value| !value.is_empty())
}

/// Parses RFC 3339 timestamps, naive ISO date-times and plain ISO dates
///
/// Timestamps with an offset keep the calendar date of that offset.
fn parse_machine_date(value: &str) -> Option<NaiveDate> {
    if let Ok(datetime) = DateTime::parse_from_rfc3339(value) {
        return Some(datetime.date_naive());
    }

    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(value, format) {
            return Some(datetime.date());
        }
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

/// Formats a date as `Month D, YYYY`
fn format_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::HtmlPage;
    use crate::url::canonicalize;

    fn page(html: &str) -> HtmlPage {
        HtmlPage::parse(canonicalize("https://example.com/docs", None).unwrap(), html)
    }

    #[test]
    fn test_timestamp_text_returned_verbatim() {
        let page = page(
            r#"<html><body><time datetime="2024-03-15T00:00:00Z">03/15/2024</time></body></html>"#,
        );
        let date = extract_last_updated_with_source(&page);
        assert_eq!(date.value, "03/15/2024");
        assert_eq!(date.source, DateSource::TimestampText);
    }

    #[test]
    fn test_datetime_attribute_formatted() {
        let page = page(
            r#"<html><body><time datetime="2024-03-15T00:00:00Z"></time></body></html>"#,
        );
        let date = extract_last_updated_with_source(&page);
        assert_eq!(date.value, "March 15, 2024");
        assert_eq!(date.source, DateSource::TimestampAttribute);
    }

    #[test]
    fn test_non_numeric_text_defers_to_attribute() {
        let page = page(
            r#"<html><body><local-time datetime="2024-01-02T08:30:00Z">Jan 2</local-time></body></html>"#,
        );
        assert_eq!(extract_last_updated(&page), "January 2, 2024");
    }

    #[test]
    fn test_data_article_date_attribute() {
        let page = page(
            r#"<html><body><div data-article-date="2023-11-20"></div></body></html>"#,
        );
        assert_eq!(extract_last_updated(&page), "November 20, 2023");
    }

    #[test]
    fn test_offset_keeps_local_calendar_date() {
        let page = page(
            r#"<html><body><time datetime="2024-03-15T23:30:00-05:00"></time></body></html>"#,
        );
        assert_eq!(extract_last_updated(&page), "March 15, 2024");
    }

    #[test]
    fn test_unparseable_attribute_falls_through_to_label() {
        let page = page(
            r#"<html><body><time datetime="soon"></time>
               <footer><p>Last updated: June 3, 2022</p></footer></body></html>"#,
        );
        let date = extract_last_updated_with_source(&page);
        assert_eq!(date.value, "June 3, 2022");
        assert_eq!(date.source, DateSource::LastUpdatedLabel);
    }

    #[test]
    fn test_label_is_case_insensitive_with_flexible_whitespace() {
        let page = page(
            r#"<html><body><main><p>LAST   UPDATED
               September 9,   2021</p></main></body></html>"#,
        );
        assert_eq!(extract_last_updated(&page), "September 9, 2021");
    }

    #[test]
    fn test_label_container_order() {
        let page = page(
            r#"<html><body>
               <header>Last updated: May 1, 2020</header>
               <article>Last updated: April 1, 2021</article>
            </body></html>"#,
        );
        assert_eq!(extract_last_updated(&page), "April 1, 2021");
    }

    #[test]
    fn test_loose_date_is_low_confidence() {
        let page = page(
            r#"<html><body><p>Released on Aug 7, 2019 to all customers.</p></body></html>"#,
        );
        let date = extract_last_updated_with_source(&page);
        assert_eq!(date.value, "Aug 7, 2019");
        assert!(date.source.is_low_confidence());
    }

    #[test]
    fn test_loose_date_ignores_scripts() {
        let page = page(
            r#"<html><body><script>var d = "March 1, 1999";</script><p>No date</p></body></html>"#,
        );
        assert_eq!(extract_last_updated(&page), UNKNOWN_DATE);
    }

    #[test]
    fn test_unknown_sentinel() {
        let page = page("<html><body><p>Nothing here</p></body></html>");
        let date = extract_last_updated_with_source(&page);
        assert_eq!(date.value, "UNKNOWN");
        assert!(date.is_unknown());
    }

    #[test]
    fn test_custom_chain_order() {
        let page = page(
            r#"<html><body><time datetime="2024-03-15"></time><p>Dated July 4, 1990</p></body></html>"#,
        );
        let strategies: Vec<Box<dyn DateStrategy>> =
            vec![Box::new(LooseText), Box::new(TimestampAttribute)];
        let extractor = DateExtractor::new(strategies);
        assert_eq!(extractor.extract(&page).value, "July 4, 1990");
    }

    #[test]
    fn test_parse_machine_date_formats() {
        let expected = NaiveDate::from_ymd_opt(2024, 3, 15);
        assert_eq!(parse_machine_date("2024-03-15T00:00:00Z"), expected);
        assert_eq!(parse_machine_date("2024-03-15T10:11:12.345"), expected);
        assert_eq!(parse_machine_date("2024-03-15 10:11:12"), expected);
        assert_eq!(parse_machine_date("2024-03-15"), expected);
        assert_eq!(parse_machine_date("15/03/2024"), None);
    }
}
