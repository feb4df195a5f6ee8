//! Core data pipeline for browsing game file listings.
//!
//! Everything in this crate is pure and total: rows come in from a dataset
//! source, get ingested into [`GameRecord`]s, and the [`Session`] recomputes
//! the filtered, sorted and paginated view on every event. Nothing here does
//! I/O; fetching listings lives in `romshelf-source`.

pub mod filter;
pub mod name_parser;
pub mod paginate;
pub mod record;
pub mod region;
pub mod session;
pub mod size;

pub use filter::{FilterState, SortOrder, apply, compare_names};
pub use name_parser::{ParsedInfo, parse};
pub use paginate::{Page, paginate};
pub use record::{GameRecord, PARENT_DIRECTORY_SENTINEL, RawRow, ingest};
pub use region::{REGION_KEYWORDS, RegionChoice, RegionFacets, RegionFilter, extract_regions};
pub use session::{LoadOutcome, LoadState, LoadTicket, Session, SessionStats, View};
pub use size::{format_mb, to_comparable_mb};

/// Rows shown per page when nothing else is configured.
pub const DEFAULT_PAGE_SIZE: usize = 50;
