//! Dataset sources for game listings.
//!
//! A listing is a CSV with one row per file. It can live behind a published
//! spreadsheet URL or on disk; [`ConsoleSource`] resolves a console key to
//! its [`Location`] and fetches it.

pub mod consoles;
pub mod error;
pub mod listing;
pub mod source;

pub use consoles::{Consoles, Location};
pub use error::SourceError;
pub use listing::{parse_listing, read_listing_file};
pub use source::{ConsoleSource, DatasetSource};
