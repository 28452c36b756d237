//! CSV report encoding
//!
//! The header row is written verbatim; every data row has its three fields
//! quoted, with embedded quotes doubled. Rows end in CRLF, including the last.

use crate::config::OutputConfig;
use crate::crawler::ResultSet;
use crate::CrawlError;
use csv::{QuoteStyle, Terminator, WriterBuilder};
use std::io::Write;
use std::path::Path;

/// Header row, without its terminator
pub const CSV_HEADER: &str = "Title,URL,LastUpdated";

/// Encodes all records, seed records first
pub fn encode_csv(results: &ResultSet) -> Result<Vec<u8>, CrawlError> {
    let mut buffer = Vec::new();
    buffer.extend_from_slice(CSV_HEADER.as_bytes());
    buffer.extend_from_slice(b"\r\n");

    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .quote_style(QuoteStyle::Always)
        .terminator(Terminator::CRLF)
        .from_writer(buffer);

    for record in results.records() {
        writer.write_record([
            record.title.as_str(),
            record.url.as_str(),
            record.last_updated.as_str(),
        ])?;
    }

    writer.into_inner().map_err(|e| CrawlError::Io(e.into_error()))
}

/// Writes the report to the configured path, or to stdout when it is `"-"`
///
/// Nothing is written if encoding fails.
pub fn write_report(results: &ResultSet, output: &OutputConfig) -> Result<(), CrawlError> {
    let encoded = encode_csv(results)?;
    let csv_path = output.csv_path.as_str();

    if output.is_stdout() {
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(&encoded)?;
        stdout.flush()?;
    } else {
        std::fs::write(Path::new(csv_path), &encoded)?;
        tracing::info!("Wrote {} records to {}", results.len(), csv_path);
    }

    Ok(())
}
