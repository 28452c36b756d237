//! Metadata extraction for crawled pages
//!
//! This module turns a [`ParsedPage`](crate::page::ParsedPage) into the two
//! values the report needs:
//! - the page title, from an ordered list of heading sources
//! - the "last updated" date, from an ordered chain of date strategies

mod date;
mod title;

pub use date::{
    extract_last_updated, extract_last_updated_with_source, DateExtractor, DateSource,
    DateStrategy, ExtractedDate, LastUpdatedLabel, LooseText, TimestampAttribute, TimestampText,
    UNKNOWN_DATE,
};
pub use title::extract_title;
