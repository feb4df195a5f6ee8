//! Console registry: which listing belongs to which console key.

use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;

/// Built-in listings, published as CSV from shared spreadsheets.
const BUILTIN: &[(&str, &str)] = &[
    (
        "ps2",
        "https://docs.google.com/spreadsheets/d/e/2PACX-1vRmT8IpH1gKP35mZuCqBEhqsw6HixfXzOTaMJEPK0mTJEGcxJhjpImqCg5HMqR4403AHovtyI_WX1cS/pub?output=csv",
    ),
    (
        "ps3",
        "https://docs.google.com/spreadsheets/d/e/2PACX-1vQAsGtGZCfrc_6P39ywStqVIKm6Fqzp0V1wxoF4r5-iFbGwEpOsEvkJ7yoQlhi73QWKmDdZkDr-RUk1/pub?output=csv",
    ),
];

/// Where a listing lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Location {
    Http(String),
    File(PathBuf),
}

impl Location {
    /// `http://` and `https://` values are URLs; anything else is a path.
    pub fn parse(value: &str) -> Self {
        let value = value.trim();
        let lower = value.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            Self::Http(value.to_string())
        } else {
            Self::File(PathBuf::from(value))
        }
    }

    pub fn is_remote(&self) -> bool {
        matches!(self, Self::Http(_))
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Http(url) => f.write_str(url),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Console keys mapped to listing locations, ordered by key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Consoles {
    entries: BTreeMap<String, Location>,
}

impl Consoles {
    pub fn empty() -> Self {
        Self::default()
    }

    /// The listings that ship with romshelf.
    pub fn builtin() -> Self {
        let mut consoles = Self::empty();
        for (key, url) in BUILTIN {
            consoles.insert(key, Location::Http(url.to_string()));
        }
        consoles
    }

    /// Add or replace entries from `key = location` pairs (e.g. settings).
    pub fn with_overrides<'a>(
        mut self,
        overrides: impl IntoIterator<Item = (&'a String, &'a String)>,
    ) -> Self {
        for (key, value) in overrides {
            if value.trim().is_empty() {
                log::warn!("Ignoring empty source for console '{key}'");
                continue;
            }
            self.insert(key, Location::parse(value));
        }
        self
    }

    /// Keys are stored lowercase.
    pub fn insert(&mut self, key: &str, location: Location) {
        self.entries.insert(key.trim().to_lowercase(), location);
    }

    pub fn get(&self, key: &str) -> Option<&Location> {
        self.entries.get(&key.trim().to_lowercase())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Location)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
