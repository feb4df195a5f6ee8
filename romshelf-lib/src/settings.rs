//! Persisted preferences: `~/.config/romshelf/settings.toml`.
//!
//! Only presentation preferences and source overrides live here. Browse
//! criteria are never persisted.

use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use romshelf_core::DEFAULT_PAGE_SIZE;
use romshelf_source::Consoles;

/// Color theme of the front end.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
    /// No colors at all.
    Mono,
}

impl Theme {
    pub fn all() -> &'static [Theme] {
        &[Self::Dark, Self::Light, Self::Mono]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
            Self::Mono => "mono",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|t| t.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("Unknown theme '{s}' (expected dark, light or mono)"))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneralSettings {
    #[serde(default)]
    pub theme: Theme,
    #[serde(default = "default_rows_per_page")]
    pub rows_per_page: usize,
}

fn default_rows_per_page() -> usize {
    DEFAULT_PAGE_SIZE
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            rows_per_page: DEFAULT_PAGE_SIZE,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppSettings {
    #[serde(default)]
    pub general: GeneralSettings,
    /// Console key to listing location (URL or path); adds to or replaces
    /// the built-in listings.
    #[serde(default)]
    pub sources: BTreeMap<String, String>,
}

impl AppSettings {
    /// The console registry with this file's overrides applied.
    pub fn consoles(&self) -> Consoles {
        Consoles::builtin().with_overrides(&self.sources)
    }

    /// Rows per page, never zero.
    pub fn rows_per_page(&self) -> usize {
        self.general.rows_per_page.max(1)
    }
}

/// Returns `~/.config/romshelf/settings.toml`.
pub fn settings_path() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join("romshelf").join("settings.toml")
}

/// Load settings from the default location.
pub fn load_settings() -> AppSettings {
    load_settings_from(&settings_path())
}

/// Load settings from `path`, returning defaults if missing or corrupt.
pub fn load_settings_from(path: &Path) -> AppSettings {
    match std::fs::read_to_string(path) {
        Ok(contents) => toml::from_str(&contents).unwrap_or_else(|e| {
            log::warn!("Failed to parse settings at {}: {}", path.display(), e);
            AppSettings::default()
        }),
        Err(_) => AppSettings::default(),
    }
}

/// Save settings to the default location.
pub fn save_settings(settings: &AppSettings) -> std::io::Result<()> {
    save_settings_to(&settings_path(), settings)
}

/// Save settings to `path` atomically (write to temp, then rename).
pub fn save_settings_to(path: &Path, settings: &AppSettings) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let contents = toml::to_string_pretty(settings).map_err(std::io::Error::other)?;
    let tmp = path.with_extension("toml.tmp");
    std::fs::write(&tmp, contents)?;
    std::fs::rename(&tmp, path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = load_settings_from(&dir.path().join("settings.toml"));
        assert_eq!(settings, AppSettings::default());
        assert_eq!(settings.general.theme, Theme::Dark);
        assert_eq!(settings.rows_per_page(), 50);
    }

    #[test]
    fn round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.toml");

        let mut settings = AppSettings::default();
        settings.general.theme = Theme::Light;
        settings.general.rows_per_page = 20;
        settings
            .sources
            .insert("snes".into(), "/srv/snes.csv".into());
        save_settings_to(&path, &settings).unwrap();

        assert_eq!(load_settings_from(&path), settings);
        assert!(!path.with_extension("toml.tmp").exists());
    }

    #[test]
    fn partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        std::fs::write(&path, "[general]\ntheme = \"mono\"\n").unwrap();
        let settings = load_settings_from(&path);
        assert_eq!(settings.general.theme, Theme::Mono);
        assert_eq!(settings.general.rows_per_page, 50);
        assert!(settings.sources.is_empty());
    }

    #[test]
    fn corrupt_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        std::fs::write(&path, "[general\ntheme = 3").unwrap();
        assert_eq!(load_settings_from(&path), AppSettings::default());
    }

    #[test]
    fn zero_rows_per_page_is_clamped() {
        let mut settings = AppSettings::default();
        settings.general.rows_per_page = 0;
        assert_eq!(settings.rows_per_page(), 1);
    }

    #[test]
    fn theme_names() {
        assert_eq!("LIGHT".parse::<Theme>(), Ok(Theme::Light));
        assert!("solarized".parse::<Theme>().is_err());
        assert_eq!(Theme::Mono.to_string(), "mono");
    }

    #[test]
    fn sources_extend_builtin_consoles() {
        let mut settings = AppSettings::default();
        settings
            .sources
            .insert("gc".into(), "https://example.org/gc.csv".into());
        let consoles = settings.consoles();
        assert!(consoles.contains("ps2"));
        assert!(consoles.contains("gc"));
    }
}
