//! Fetching listings by console key.

use std::time::Duration;

use romshelf_core::RawRow;

use crate::consoles::{Consoles, Location};
use crate::error::SourceError;
use crate::listing::{parse_listing, read_listing_file};

const HTTP_TIMEOUT: Duration = Duration::from_secs(60);

/// Anything that can produce the raw rows of a console's listing.
///
/// A failed fetch never yields partial rows.
pub trait DatasetSource: Send + Sync {
    fn fetch(&self, console: &str) -> Result<Vec<RawRow>, SourceError>;
}

/// Resolves console keys through a [`Consoles`] registry and fetches the
/// listing over HTTP or from disk.
pub struct ConsoleSource {
    consoles: Consoles,
    client: reqwest::blocking::Client,
}

impl ConsoleSource {
    pub fn new(consoles: Consoles) -> Result<Self, SourceError> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(concat!("romshelf/", env!("CARGO_PKG_VERSION")))
            .timeout(HTTP_TIMEOUT)
            .build()?;
        Ok(Self { consoles, client })
    }

    pub fn consoles(&self) -> &Consoles {
        &self.consoles
    }

    fn fetch_url(&self, url: &str) -> Result<Vec<RawRow>, SourceError> {
        log::debug!("GET {url}");
        let response = self.client.get(url).send()?;
        if !response.status().is_success() {
            return Err(SourceError::status(url, response.status().as_u16()));
        }
        let body = response.bytes()?;
        log::debug!("received {} bytes from {url}", body.len());
        parse_listing(body.as_ref())
    }
}

impl DatasetSource for ConsoleSource {
    fn fetch(&self, console: &str) -> Result<Vec<RawRow>, SourceError> {
        let location = self
            .consoles
            .get(console)
            .ok_or_else(|| SourceError::unknown_console(console))?;

        match location {
            Location::Http(url) => self.fetch_url(url),
            Location::File(path) => read_listing_file(path),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_console_is_an_error() {
        let source = ConsoleSource::new(Consoles::empty()).unwrap();
        let err = source.fetch("dreamcast").unwrap_err();
        assert!(matches!(err, SourceError::UnknownConsole(ref c) if c == "dreamcast"));
    }

    #[test]
    fn file_locations_read_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gc.csv");
        std::fs::write(
            &path,
            "Nama File,Ukuran File,Tautan Unduhan\nIkaruga (Japan).zip,700 MiB,https://example.org/i.zip\n",
        )
        .unwrap();

        let mut consoles = Consoles::empty();
        consoles.insert("gc", Location::File(path));
        let source = ConsoleSource::new(consoles).unwrap();

        let rows = source.fetch("GC").unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].download_link.as_deref(), Some("https://example.org/i.zip"));
    }
}
