use romshelf_lib::settings::{save_settings, settings_path};
use romshelf_lib::{AppSettings, Location, Theme};

use crate::error::CliError;
use crate::style::Palette;

/// Print the current settings and the console registry they produce.
pub(crate) fn run_config_show(settings: &AppSettings, palette: &Palette) {
    let path = settings_path();
    let status = if path.exists() {
        palette.good("(exists)")
    } else {
        palette.dim("(not found, using defaults)")
    };
    log::info!("{}", palette.title("romshelf settings"));
    log::info!("");
    log::info!("  Settings file: {} {}", palette.tag(&path.display().to_string()), status);
    log::info!("  Theme:         {}", settings.general.theme);
    log::info!("  Rows per page: {}", settings.rows_per_page());
    log::info!("");

    if settings.sources.is_empty() {
        log::info!("  {}", palette.dim("No source overrides."));
    } else {
        log::info!("  Source overrides:");
        for (console, location) in &settings.sources {
            log::info!("    {:<8} {}", console, location);
        }
    }
}

pub(crate) fn run_config_path() {
    log::info!("{}", settings_path().display());
}

pub(crate) fn run_config_theme(settings: &mut AppSettings, name: &str) -> Result<(), CliError> {
    let theme: Theme = name.parse().map_err(CliError::usage)?;
    settings.general.theme = theme;
    save_settings(settings)?;
    log::info!("Theme set to {theme}");
    Ok(())
}

pub(crate) fn run_config_source(
    settings: &mut AppSettings,
    console: &str,
    location: &str,
) -> Result<(), CliError> {
    if location.trim().is_empty() {
        return Err(CliError::usage("Location must not be empty"));
    }
    let key = console.trim().to_lowercase();
    settings.sources.insert(key.clone(), location.trim().to_string());
    save_settings(settings)?;

    let kind = match Location::parse(location) {
        Location::Http(_) => "URL",
        Location::File(_) => "file",
    };
    log::info!("Console '{key}' now reads its listing from {kind} {}", location.trim());
    Ok(())
}
