/// Errors that can occur while fetching a listing.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status} for {url}")]
    Status { url: String, status: u16 },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid listing: {0}")]
    InvalidListing(String),

    #[error("Unknown console: {0}")]
    UnknownConsole(String),
}

impl SourceError {
    pub fn status(url: impl Into<String>, status: u16) -> Self {
        Self::Status {
            url: url.into(),
            status,
        }
    }

    pub fn invalid_listing(msg: impl Into<String>) -> Self {
        Self::InvalidListing(msg.into())
    }

    pub fn unknown_console(console: impl Into<String>) -> Self {
        Self::UnknownConsole(console.into())
    }
}
