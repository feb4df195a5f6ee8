//! The browse session: single owner of the dataset and its derived view.
//!
//! Every event (load started, load finished, search/region/sort change, page
//! navigation) goes through one method here, which updates the state and
//! recomputes whatever depends on it. The working set is rebuilt from
//! scratch on each change rather than patched.
//!
//! Loads are tagged with a [`LoadTicket`]. Only the most recently issued
//! ticket can complete; results for older tickets are dropped, so a slow
//! response can never overwrite a newer selection.

use std::fmt;

use crate::DEFAULT_PAGE_SIZE;
use crate::filter::{FilterState, SortOrder, apply_indices};
use crate::paginate::{Page, paginate};
use crate::record::{GameRecord, RawRow, ingest};
use crate::region::{RegionFacets, RegionFilter, extract_regions};
use crate::size::to_comparable_mb;

/// Sequence number identifying one load request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LoadTicket(u64);

impl fmt::Display for LoadTicket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Where the session is in the load lifecycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    /// Nothing selected.
    Idle,
    Loading { console: String, ticket: LoadTicket },
    Ready { console: String },
    Failed { console: String, message: String },
}

/// Result of handing a finished load to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The dataset replaced the previous one.
    Applied { records: usize },
    /// The source failed; the previous dataset is untouched.
    Failed,
    /// A newer load was requested (or the session went home); ignored.
    Stale,
}

/// What the renderer should show.
#[derive(Debug, Clone)]
pub enum View<'a> {
    Home,
    Loading {
        console: &'a str,
    },
    Failed {
        console: &'a str,
        message: &'a str,
        /// An older dataset is still held and can be shown again.
        has_previous: bool,
    },
    /// A dataset is loaded but the criteria match nothing.
    NoMatches,
    Page(PageView<'a>),
}

/// The current page of the working set.
#[derive(Debug, Clone)]
pub struct PageView<'a> {
    page: Page<'a, usize>,
    games: &'a [GameRecord],
}

impl<'a> PageView<'a> {
    pub fn page(&self) -> usize {
        self.page.page
    }

    pub fn page_count(&self) -> usize {
        self.page.page_count
    }

    pub fn has_previous(&self) -> bool {
        self.page.has_previous()
    }

    pub fn has_next(&self) -> bool {
        self.page.has_next()
    }

    pub fn len(&self) -> usize {
        self.page.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.page.is_empty()
    }

    /// Records on this page with their working-set position.
    pub fn records(&self) -> impl Iterator<Item = (usize, &'a GameRecord)> + '_ {
        let games = self.games;
        self.page
            .indexed()
            .map(move |(position, &index)| (position, &games[index]))
    }
}

/// Summary numbers for the loaded dataset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionStats {
    pub total: usize,
    pub matching: usize,
    /// Sum of normalized sizes of the matching records, in MiB.
    pub matching_mb: f64,
}

/// Browse session state.
#[derive(Debug, Clone)]
pub struct Session {
    all_games: Vec<GameRecord>,
    loaded_console: Option<String>,
    facets: RegionFacets,
    filter: FilterState,
    filtered: Vec<usize>,
    load: LoadState,
    page_size: usize,
    last_ticket: u64,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl Session {
    /// A session showing `page_size` records per page (at least 1).
    pub fn new(page_size: usize) -> Self {
        Self {
            all_games: Vec::new(),
            loaded_console: None,
            facets: RegionFacets::default(),
            filter: FilterState::default(),
            filtered: Vec::new(),
            load: LoadState::Idle,
            page_size: page_size.max(1),
            last_ticket: 0,
        }
    }

    // -- Loading ------------------------------------------------------------

    /// Start loading `console`. Criteria reset; the held dataset stays until
    /// the load finishes.
    pub fn begin_load(&mut self, console: &str) -> LoadTicket {
        self.last_ticket += 1;
        let ticket = LoadTicket(self.last_ticket);
        log::debug!("load {ticket} started for {console}");
        self.load = LoadState::Loading {
            console: console.to_string(),
            ticket,
        };
        self.filter = FilterState::default();
        self.recompute();
        ticket
    }

    /// Complete the load identified by `ticket`.
    pub fn finish_load<E: fmt::Display>(
        &mut self,
        ticket: LoadTicket,
        result: Result<Vec<RawRow>, E>,
    ) -> LoadOutcome {
        let console = match &self.load {
            LoadState::Loading {
                console,
                ticket: pending,
            } if *pending == ticket => console.clone(),
            _ => {
                log::debug!("dropping stale load {ticket}");
                return LoadOutcome::Stale;
            }
        };

        match result {
            Ok(rows) => {
                self.all_games = ingest(rows);
                self.facets = extract_regions(&self.all_games);
                self.filter = FilterState::default();
                self.loaded_console = Some(console.clone());
                self.load = LoadState::Ready { console };
                self.recompute();
                LoadOutcome::Applied {
                    records: self.all_games.len(),
                }
            }
            Err(e) => {
                log::debug!("load {ticket} for {console} failed: {e}");
                self.load = LoadState::Failed {
                    console,
                    message: e.to_string(),
                };
                LoadOutcome::Failed
            }
        }
    }

    /// Leave a failed load and go back to the dataset still held, if any.
    pub fn dismiss_failure(&mut self) {
        if !matches!(self.load, LoadState::Failed { .. }) {
            return;
        }
        self.load = match &self.loaded_console {
            Some(console) => LoadState::Ready {
                console: console.clone(),
            },
            None => LoadState::Idle,
        };
        self.recompute();
    }

    /// Return to the home view. Any load in flight becomes stale.
    pub fn go_home(&mut self) {
        self.last_ticket += 1;
        self.load = LoadState::Idle;
    }

    // -- Criteria -----------------------------------------------------------

    pub fn set_search(&mut self, term: &str) {
        self.filter.set_search(term);
        self.recompute();
    }

    pub fn set_region(&mut self, region: RegionFilter) {
        self.filter.set_region(region);
        self.recompute();
    }

    pub fn set_sort(&mut self, order: SortOrder) {
        self.filter.set_sort(order);
        self.recompute();
    }

    /// Back to default criteria.
    pub fn reset_filters(&mut self) {
        self.filter = FilterState::default();
        self.recompute();
    }

    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = page_size.max(1);
        self.go_to_page(self.filter.current_page());
    }

    // -- Navigation ---------------------------------------------------------

    /// Move to `page`, clamped into `[1, max(1, page_count)]`. Returns the page
    /// actually selected.
    pub fn go_to_page(&mut self, page: usize) -> usize {
        let page = page.clamp(1, self.page_count().max(1));
        self.filter.set_page(page);
        page
    }

    pub fn next_page(&mut self) -> usize {
        self.go_to_page(self.filter.current_page().saturating_add(1))
    }

    pub fn previous_page(&mut self) -> usize {
        self.go_to_page(self.filter.current_page().saturating_sub(1))
    }

    // -- Accessors ----------------------------------------------------------

    pub fn load_state(&self) -> &LoadState {
        &self.load
    }

    /// Console whose dataset is currently held.
    pub fn loaded_console(&self) -> Option<&str> {
        self.loaded_console.as_deref()
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn facets(&self) -> &RegionFacets {
        &self.facets
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn page_count(&self) -> usize {
        self.filtered.len().div_ceil(self.page_size)
    }

    /// Every record in the held dataset, in source order.
    pub fn all_games(&self) -> &[GameRecord] {
        &self.all_games
    }

    /// The working set, in order.
    pub fn working_set(&self) -> impl Iterator<Item = &GameRecord> {
        self.filtered.iter().map(|&i| &self.all_games[i])
    }

    /// Record at a working-set position.
    pub fn record_at(&self, position: usize) -> Option<&GameRecord> {
        self.filtered.get(position).map(|&i| &self.all_games[i])
    }

    pub fn stats(&self) -> SessionStats {
        SessionStats {
            total: self.all_games.len(),
            matching: self.filtered.len(),
            matching_mb: self
                .working_set()
                .map(|g| to_comparable_mb(g.file_size()))
                .sum(),
        }
    }

    pub fn view(&self) -> View<'_> {
        match &self.load {
            LoadState::Idle => View::Home,
            LoadState::Loading { console, .. } => View::Loading { console },
            LoadState::Failed { console, message } => View::Failed {
                console,
                message,
                has_previous: self.loaded_console.is_some(),
            },
            LoadState::Ready { .. } if self.filtered.is_empty() => View::NoMatches,
            LoadState::Ready { .. } => View::Page(PageView {
                page: paginate(&self.filtered, self.filter.current_page(), self.page_size),
                games: &self.all_games,
            }),
        }
    }

    fn recompute(&mut self) {
        self.filtered = apply_indices(&self.all_games, &self.filter);
        self.filter.set_page(1);
    }
}

#[cfg(test)]
#[path = "tests/session_tests.rs"]
mod tests;
