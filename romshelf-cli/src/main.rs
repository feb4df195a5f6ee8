//! romshelf CLI
//!
//! Browse game file listings: search, filter by region, sort by name or size.

mod cli_types;
mod commands;
mod error;
mod logging;
mod render;
mod spinner;
mod style;

use clap::Parser;

use romshelf_lib::settings::load_settings;

use crate::cli_types::{Cli, Commands, ConfigAction};
use crate::commands::AppContext;
use crate::commands::browse::{run_browse, run_regions, run_show, run_stats};
use crate::commands::config::{
    run_config_path, run_config_show, run_config_source, run_config_theme,
};
use crate::commands::interactive::run_interactive;
use crate::commands::list::run_list;
use crate::error::CliError;
use crate::style::Palette;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = logging::init(cli.quiet, cli.verbose, cli.logfile.as_deref()) {
        eprintln!("{e}");
        std::process::exit(1);
    }

    if let Err(e) = run(cli) {
        log::error!("{e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let mut settings = load_settings();

    // Settings edits never touch the network.
    if let Commands::Config { action } = &cli.command {
        return match action {
            ConfigAction::Show => {
                run_config_show(&settings, &Palette::new(settings.general.theme));
                Ok(())
            }
            ConfigAction::Path => {
                run_config_path();
                Ok(())
            }
            ConfigAction::Theme { name } => run_config_theme(&mut settings, name),
            ConfigAction::Source { console, location } => {
                run_config_source(&mut settings, console, location)
            }
        };
    }

    let mut ctx = AppContext::new(settings, cli.page_size, cli.quiet)?;

    match cli.command {
        Commands::List => {
            run_list(&ctx);
            Ok(())
        }
        Commands::Browse {
            console,
            filters,
            page,
        } => run_browse(&ctx, &console.to_lowercase(), &filters, page),
        Commands::Show {
            console,
            index,
            filters,
        } => run_show(&ctx, &console.to_lowercase(), index, &filters),
        Commands::Regions { console } => run_regions(&ctx, &console.to_lowercase()),
        Commands::Stats { console, filters } => {
            run_stats(&ctx, &console.to_lowercase(), &filters)
        }
        Commands::Interactive { console } => {
            run_interactive(&mut ctx, console.map(|c| c.to_lowercase()))
        }
        Commands::Config { .. } => Ok(()),
    }
}
