//! CSV listing parsing.
//!
//! Listings have a header row naming the file name, size and link columns.
//! Extra columns are ignored and blank lines skipped. A row that fails to
//! parse is skipped with a warning; a listing without any file name column
//! (an HTML error page, a wrong sheet) is rejected outright.

use std::io::Read;
use std::path::Path;

use romshelf_core::RawRow;

use crate::error::SourceError;

/// Header spellings accepted for the file name column. Keep in sync with the
/// serde names on [`RawRow::file_name`].
const FILE_NAME_HEADERS: &[&str] = &["Nama File", "File Name", "fileName", "name"];

/// Parse CSV listing content into raw rows.
pub fn parse_listing(reader: impl Read) -> Result<Vec<RawRow>, SourceError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::Headers)
        .from_reader(reader);

    let headers = reader.headers()?.clone();
    if !headers.iter().any(|h| FILE_NAME_HEADERS.contains(&h)) {
        return Err(SourceError::invalid_listing(format!(
            "no file name column (expected one of: {})",
            FILE_NAME_HEADERS.join(", ")
        )));
    }

    let mut rows = Vec::new();
    for (line, result) in reader.deserialize::<RawRow>().enumerate() {
        match result {
            Ok(row) => rows.push(row),
            Err(e) => log::warn!("Skipping malformed listing row {}: {e}", line + 2),
        }
    }

    log::debug!("parsed {} listing rows", rows.len());
    Ok(rows)
}

/// Read and parse a listing from disk.
pub fn read_listing_file(path: &Path) -> Result<Vec<RawRow>, SourceError> {
    let file = std::fs::File::open(path)?;
    parse_listing(std::io::BufReader::new(file))
}

#[cfg(test)]
#[path = "tests/listing_tests.rs"]
mod tests;
