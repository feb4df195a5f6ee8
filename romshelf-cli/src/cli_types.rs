//! CLI type definitions: command enums and argument structs.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use romshelf_lib::{RegionFilter, SortOrder};

#[derive(Parser)]
#[command(name = "romshelf")]
#[command(about = "Browse game file listings by title, region and size", long_about = None)]
pub(crate) struct Cli {
    /// Only show warnings and errors (suppress normal output)
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Enable verbose/debug logging (timestamps + debug-level messages)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Write log output to a file (ANSI codes stripped)
    #[arg(long, global = true)]
    pub logfile: Option<PathBuf>,

    /// Games per page (overrides rows_per_page from settings)
    #[arg(long, global = true)]
    pub page_size: Option<usize>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Search, region and sort criteria.
#[derive(Args, Clone, Default)]
pub(crate) struct FilterArgs {
    /// Case-insensitive substring of the file name
    #[arg(short, long)]
    pub search: Option<String>,

    /// Region facet (e.g. usa, japan, europe) or "all"
    #[arg(short, long, value_parser = parse_region)]
    pub region: Option<RegionFilter>,

    /// Sort order: alpha-asc, alpha-desc, size-asc, size-desc
    #[arg(long)]
    pub sort: Option<SortOrder>,
}

fn parse_region(value: &str) -> Result<RegionFilter, String> {
    Ok(RegionFilter::from_value(value))
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// List configured consoles and where their listings come from
    List,

    /// Show one page of a console's listing
    Browse {
        /// Console key (e.g. ps2, ps3)
        console: String,

        #[command(flatten)]
        filters: FilterArgs,

        /// Page to show (clamped to the available pages)
        #[arg(short, long, default_value_t = 1)]
        page: usize,
    },

    /// Show full details of one game
    Show {
        /// Console key (e.g. ps2, ps3)
        console: String,

        /// Position in the filtered list, as printed by `browse`
        index: usize,

        #[command(flatten)]
        filters: FilterArgs,
    },

    /// List the region facets of a console's listing
    Regions {
        /// Console key (e.g. ps2, ps3)
        console: String,
    },

    /// Count and size totals for a console's listing
    Stats {
        /// Console key (e.g. ps2, ps3)
        console: String,

        #[command(flatten)]
        filters: FilterArgs,
    },

    /// Browse interactively
    Interactive {
        /// Console to open right away
        console: Option<String>,
    },

    /// Manage settings
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Print the current settings
    Show,

    /// Print the settings file path
    Path,

    /// Set the color theme (dark, light, mono)
    Theme {
        name: String,
    },

    /// Point a console at a listing URL or CSV file
    Source {
        /// Console key
        console: String,

        /// URL or file path of the CSV listing
        location: String,
    },
}
