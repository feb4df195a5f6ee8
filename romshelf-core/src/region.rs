//! Region facets derived from file name tags.
//!
//! A tag counts as a region tag when it mentions one of [`REGION_KEYWORDS`].
//! Its facet label is the tag's leading token, so "USA, Europe" files under
//! "USA" and "Japan (Rev 1)" under "Japan".

use std::collections::BTreeMap;
use std::fmt;

use crate::name_parser::parse;
use crate::record::GameRecord;

/// Keywords that mark a tag as a region tag (case-sensitive).
pub const REGION_KEYWORDS: &[&str] = &["USA", "Japan", "Europe", "World", "Asia", "Korea"];

const ALL: &str = "all";

/// Region constraint applied by the filter engine.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum RegionFilter {
    /// No restriction.
    #[default]
    All,
    /// Case-folded facet value, matched as `"(" + value` in the folded file name.
    Only(String),
}

impl RegionFilter {
    /// Build a filter from a selector value: "all" (any case) or a facet label.
    pub fn from_value(value: &str) -> Self {
        let value = value.trim();
        if value.is_empty() || value.eq_ignore_ascii_case(ALL) {
            Self::All
        } else {
            Self::Only(value.to_lowercase())
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }
}

impl fmt::Display for RegionFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str(ALL),
            Self::Only(value) => f.write_str(value),
        }
    }
}

/// One entry of the region selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegionChoice<'a> {
    All,
    Region(&'a str),
}

impl RegionChoice<'_> {
    /// The value a selector emits for this choice.
    pub fn filter(&self) -> RegionFilter {
        match self {
            Self::All => RegionFilter::All,
            Self::Region(label) => RegionFilter::Only(label.to_lowercase()),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Self::All => ALL,
            Self::Region(label) => label,
        }
    }
}

/// Distinct region labels of a dataset, sorted by display label.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegionFacets {
    labels: Vec<String>,
}

impl RegionFacets {
    /// Display labels, without the implicit "all" choice.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Selector choices: "all" first, then every label in order.
    pub fn choices(&self) -> impl Iterator<Item = RegionChoice<'_>> {
        std::iter::once(RegionChoice::All)
            .chain(self.labels.iter().map(|l| RegionChoice::Region(l.as_str())))
    }

    /// Whether `filter` names a facet of this dataset (always true for "all").
    pub fn contains(&self, filter: &RegionFilter) -> bool {
        match filter {
            RegionFilter::All => true,
            RegionFilter::Only(value) => self.labels.iter().any(|l| l.to_lowercase() == *value),
        }
    }
}

/// Collect the region facets of a dataset.
///
/// Labels are deduplicated case-insensitively. When casings collide the
/// ordinally smallest spelling is kept rather than the first one seen, so the
/// result does not depend on record order.
pub fn extract_regions<'a>(games: impl IntoIterator<Item = &'a GameRecord>) -> RegionFacets {
    let mut by_key: BTreeMap<String, String> = BTreeMap::new();

    for game in games {
        for tag in parse(game.file_name()).tags {
            let Some(label) = region_label(&tag) else {
                continue;
            };
            by_key
                .entry(label.to_lowercase())
                .and_modify(|existing| {
                    if label < existing.as_str() {
                        *existing = label.to_string();
                    }
                })
                .or_insert_with(|| label.to_string());
        }
    }

    let mut labels: Vec<String> = by_key.into_values().collect();
    labels.sort();
    log::debug!("extracted {} region facets", labels.len());
    RegionFacets { labels }
}

/// Facet label for a tag, if it is a region tag.
fn region_label(tag: &str) -> Option<&str> {
    if !REGION_KEYWORDS.iter().any(|keyword| tag.contains(keyword)) {
        return None;
    }
    let token = tag
        .split(|c: char| c.is_whitespace() || c == ',' || c == '(')
        .next()
        .unwrap_or_default();
    (!token.is_empty()).then_some(token)
}

#[cfg(test)]
#[path = "tests/region_tests.rs"]
mod tests;
