pub(crate) mod browse;
pub(crate) mod config;
pub(crate) mod interactive;
pub(crate) mod list;

use std::sync::Arc;

use romshelf_lib::{AppSettings, ConsoleSource, LoadOutcome, LoadState, Loader, Session};

use crate::cli_types::FilterArgs;
use crate::error::CliError;
use crate::spinner::LoadSpinner;
use crate::style::Palette;

/// Everything a command needs: settings, the listing source, output style.
pub(crate) struct AppContext {
    pub settings: AppSettings,
    pub source: Arc<ConsoleSource>,
    pub palette: Palette,
    pub page_size: usize,
    pub quiet: bool,
}

impl AppContext {
    pub(crate) fn new(
        settings: AppSettings,
        page_size: Option<usize>,
        quiet: bool,
    ) -> Result<Self, CliError> {
        let source = Arc::new(ConsoleSource::new(settings.consoles())?);
        let page_size = page_size.unwrap_or_else(|| settings.rows_per_page()).max(1);
        Ok(Self {
            palette: Palette::new(settings.general.theme),
            settings,
            source,
            page_size,
            quiet,
        })
    }

    pub(crate) fn loader(&self) -> Loader {
        Loader::new(self.source.clone())
    }

    /// Fail early with the known keys when `console` is not configured.
    pub(crate) fn check_console(&self, console: &str) -> Result<(), CliError> {
        let consoles = self.source.consoles();
        if consoles.contains(console) {
            Ok(())
        } else {
            Err(CliError::unknown_console(console, consoles.keys()))
        }
    }

    /// Load `console` into a fresh session, with a spinner while it downloads.
    pub(crate) fn open_session(&self, console: &str) -> Result<Session, CliError> {
        self.check_console(console)?;
        let mut session = Session::new(self.page_size);
        let mut loader = self.loader();
        let spinner = LoadSpinner::new(console, self.quiet);

        loader.start(&mut session, console);
        let event = loader.wait(&mut session, || spinner.tick());
        spinner.finish();

        match event.map(|e| e.outcome) {
            Some(LoadOutcome::Applied { records }) => {
                log::debug!("loaded {records} records for {console}");
                Ok(session)
            }
            _ => {
                let message = match session.load_state() {
                    LoadState::Failed { message, .. } => message.clone(),
                    _ => "load did not complete".to_string(),
                };
                Err(CliError::load(console, message))
            }
        }
    }
}

/// Apply command-line criteria to a loaded session.
pub(crate) fn apply_filters(session: &mut Session, filters: &FilterArgs) {
    if let Some(search) = &filters.search {
        session.set_search(search);
    }
    if let Some(region) = &filters.region {
        if !session.facets().contains(region) {
            log::warn!("Region '{region}' is not among this listing's regions");
        }
        session.set_region(region.clone());
    }
    if let Some(sort) = filters.sort {
        session.set_sort(sort);
    }
}
