//! Search, region and sort criteria applied to a dataset.
//!
//! The pipeline always runs search, then region, then a stable sort. The
//! region step is a structural check on the folded file name: the facet
//! value must open a parenthesized tag (`"(" + value`). That ties the filter
//! to the tag format the region facets are extracted from.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

use crate::record::GameRecord;
use crate::region::RegionFilter;
use crate::size::to_comparable_mb;

/// Working-set ordering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SortOrder {
    #[default]
    AlphaAsc,
    AlphaDesc,
    SizeAsc,
    SizeDesc,
}

impl SortOrder {
    pub fn all() -> &'static [SortOrder] {
        &[Self::AlphaAsc, Self::AlphaDesc, Self::SizeAsc, Self::SizeDesc]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AlphaAsc => "alpha-asc",
            Self::AlphaDesc => "alpha-desc",
            Self::SizeAsc => "size-asc",
            Self::SizeDesc => "size-desc",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::AlphaAsc => "Name (A-Z)",
            Self::AlphaDesc => "Name (Z-A)",
            Self::SizeAsc => "Size (smallest first)",
            Self::SizeDesc => "Size (largest first)",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|order| order.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                let known: Vec<&str> = Self::all().iter().map(SortOrder::as_str).collect();
                format!("Unknown sort order '{s}' (expected one of: {})", known.join(", "))
            })
    }
}

/// Session-scoped browse criteria.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    search_term: String,
    region: RegionFilter,
    sort_order: SortOrder,
    current_page: usize,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            search_term: String::new(),
            region: RegionFilter::All,
            sort_order: SortOrder::AlphaAsc,
            current_page: 1,
        }
    }
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, term: &str) -> Self {
        self.set_search(term);
        self
    }

    pub fn with_region(mut self, region: RegionFilter) -> Self {
        self.region = region;
        self
    }

    pub fn with_sort(mut self, order: SortOrder) -> Self {
        self.sort_order = order;
        self
    }

    /// Folded search term; empty means no search.
    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn region(&self) -> &RegionFilter {
        &self.region
    }

    pub fn sort_order(&self) -> SortOrder {
        self.sort_order
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// Whether any criterion differs from the defaults (page excluded).
    pub fn is_filtered(&self) -> bool {
        !self.search_term.is_empty() || !self.region.is_all()
    }

    pub(crate) fn set_search(&mut self, term: &str) {
        self.search_term = term.to_lowercase();
    }

    pub(crate) fn set_region(&mut self, region: RegionFilter) {
        self.region = region;
    }

    pub(crate) fn set_sort(&mut self, order: SortOrder) {
        self.sort_order = order;
    }

    pub(crate) fn set_page(&mut self, page: usize) {
        self.current_page = page;
    }
}

/// Filter and sort `all` by `state`, returning the working set in order.
pub fn apply<'a>(all: &'a [GameRecord], state: &FilterState) -> Vec<&'a GameRecord> {
    apply_indices(all, state)
        .into_iter()
        .map(|i| &all[i])
        .collect()
}

/// Same as [`apply`], as positions into `all`.
pub(crate) fn apply_indices(all: &[GameRecord], state: &FilterState) -> Vec<usize> {
    let region_prefix = match state.region() {
        RegionFilter::All => None,
        RegionFilter::Only(value) => Some(format!("({value}")),
    };
    let search = state.search_term();

    let mut kept: Vec<usize> = if search.is_empty() && region_prefix.is_none() {
        (0..all.len()).collect()
    } else {
        all.iter()
            .enumerate()
            .filter(|(_, game)| {
                let folded = game.file_name().to_lowercase();
                (search.is_empty() || folded.contains(search))
                    && region_prefix
                        .as_deref()
                        .is_none_or(|prefix| folded.contains(prefix))
            })
            .map(|(i, _)| i)
            .collect()
    };

    match state.sort_order() {
        SortOrder::AlphaAsc => {
            kept.sort_by(|&a, &b| compare_names(all[a].file_name(), all[b].file_name()));
        }
        SortOrder::AlphaDesc => {
            kept.sort_by(|&a, &b| compare_names(all[b].file_name(), all[a].file_name()));
        }
        SortOrder::SizeAsc | SortOrder::SizeDesc => {
            let mut keyed: Vec<(usize, f64)> = kept
                .iter()
                .map(|&i| (i, to_comparable_mb(all[i].file_size())))
                .collect();
            if state.sort_order() == SortOrder::SizeAsc {
                keyed.sort_by(|a, b| a.1.total_cmp(&b.1));
            } else {
                keyed.sort_by(|a, b| b.1.total_cmp(&a.1));
            }
            kept = keyed.into_iter().map(|(i, _)| i).collect();
        }
    }

    log::debug!(
        "filter: {} of {} records match (search={:?}, region={}, sort={})",
        kept.len(),
        all.len(),
        search,
        state.region(),
        state.sort_order()
    );
    kept
}

/// Human-oriented name comparison.
///
/// Letters compare without accents or case first, so "Émile" sorts with the
/// E names. Ties are broken by accents (unaccented first), then lowercase
/// before uppercase at the first differing letter, then plain code point
/// order so the comparison is total.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    base_letters(a)
        .cmp(base_letters(b))
        .then_with(|| folded_with_marks(a).cmp(folded_with_marks(b)))
        .then_with(|| case_order(a, b))
        .then_with(|| a.cmp(b))
}

/// Lowercased letters with combining marks removed.
fn base_letters(s: &str) -> impl Iterator<Item = char> + '_ {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
}

/// Lowercased decomposition; marks sort after any base letter.
fn folded_with_marks(s: &str) -> impl Iterator<Item = char> + '_ {
    s.nfd().flat_map(char::to_lowercase)
}

fn case_order(a: &str, b: &str) -> Ordering {
    a.chars()
        .zip(b.chars())
        .find(|(x, y)| x != y)
        .map_or(Ordering::Equal, |(x, y)| y.is_lowercase().cmp(&x.is_lowercase()))
}

#[cfg(test)]
#[path = "tests/filter_tests.rs"]
mod tests;
