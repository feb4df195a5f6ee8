//! Application layer shared by romshelf front ends: settings, the background
//! loader, and display helpers.

pub mod display;
pub mod loader;
pub mod settings;

pub use display::{GameCard, GameDetail, pager_label};
pub use loader::{LoadEvent, Loader, load_blocking};
pub use romshelf_core::*;
pub use romshelf_source::{ConsoleSource, Consoles, DatasetSource, Location, SourceError};
pub use settings::{AppSettings, GeneralSettings, Theme};
