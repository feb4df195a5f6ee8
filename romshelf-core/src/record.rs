//! Listing rows and the records ingested from them.

use serde::Deserialize;

/// Placeholder row some directory listings emit for the parent directory.
pub const PARENT_DIRECTORY_SENTINEL: &str = "Parent directory/";

/// A listing row exactly as the source delivered it.
///
/// Every column is optional; sources publish the same three columns under
/// a handful of header spellings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RawRow {
    #[serde(
        default,
        rename = "Nama File",
        alias = "File Name",
        alias = "fileName",
        alias = "name"
    )]
    pub file_name: Option<String>,

    #[serde(
        default,
        rename = "Ukuran File",
        alias = "File Size",
        alias = "fileSize",
        alias = "size"
    )]
    pub file_size: Option<String>,

    #[serde(
        default,
        rename = "Tautan Unduhan",
        alias = "Download Link",
        alias = "downloadLink",
        alias = "link",
        alias = "url"
    )]
    pub download_link: Option<String>,
}

impl RawRow {
    pub fn new(file_name: impl Into<String>) -> Self {
        Self {
            file_name: Some(file_name.into()),
            ..Default::default()
        }
    }

    pub fn with_size(mut self, size: impl Into<String>) -> Self {
        self.file_size = Some(size.into());
        self
    }

    pub fn with_link(mut self, link: impl Into<String>) -> Self {
        self.download_link = Some(link.into());
        self
    }
}

/// One entry of the working dataset.
///
/// Only [`ingest`] builds these, so `file_name` is never empty and never the
/// parent-directory sentinel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameRecord {
    file_name: String,
    file_size: Option<String>,
    download_link: Option<String>,
}

impl GameRecord {
    fn from_row(row: RawRow) -> Option<Self> {
        let file_name = row.file_name?;
        if file_name.is_empty() || file_name == PARENT_DIRECTORY_SENTINEL {
            return None;
        }
        Some(Self {
            file_name,
            file_size: row.file_size.filter(|s| !s.is_empty()),
            download_link: row.download_link.filter(|s| !s.is_empty()),
        })
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn file_size(&self) -> Option<&str> {
        self.file_size.as_deref()
    }

    pub fn download_link(&self) -> Option<&str> {
        self.download_link.as_deref()
    }
}

/// Turn source rows into records, dropping unnamed rows and the sentinel.
pub fn ingest(rows: impl IntoIterator<Item = RawRow>) -> Vec<GameRecord> {
    let mut dropped = 0usize;
    let records: Vec<GameRecord> = rows
        .into_iter()
        .filter_map(|row| {
            let record = GameRecord::from_row(row);
            if record.is_none() {
                dropped += 1;
            }
            record
        })
        .collect();
    log::debug!("ingested {} records, dropped {dropped}", records.len());
    records
}
