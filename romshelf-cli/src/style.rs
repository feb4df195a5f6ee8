//! Theme-aware coloring for terminal output.

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use romshelf_lib::Theme;

/// Colors for each kind of output, picked by theme. `mono` prints plain text.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Palette {
    theme: Theme,
}

impl Palette {
    pub(crate) fn new(theme: Theme) -> Self {
        Self { theme }
    }

    pub(crate) fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    pub(crate) fn title(&self, s: &str) -> String {
        match self.theme {
            Theme::Mono => s.to_string(),
            _ => s.if_supports_color(Stdout, |t| t.bold()).to_string(),
        }
    }

    pub(crate) fn tag(&self, s: &str) -> String {
        match self.theme {
            Theme::Dark => s.if_supports_color(Stdout, |t| t.cyan()).to_string(),
            Theme::Light => s.if_supports_color(Stdout, |t| t.blue()).to_string(),
            Theme::Mono => s.to_string(),
        }
    }

    pub(crate) fn accent(&self, s: &str) -> String {
        match self.theme {
            Theme::Dark => s.if_supports_color(Stdout, |t| t.yellow()).to_string(),
            Theme::Light => s.if_supports_color(Stdout, |t| t.magenta()).to_string(),
            Theme::Mono => s.to_string(),
        }
    }

    pub(crate) fn dim(&self, s: &str) -> String {
        match self.theme {
            Theme::Mono => s.to_string(),
            _ => s.if_supports_color(Stdout, |t| t.dimmed()).to_string(),
        }
    }

    pub(crate) fn good(&self, s: &str) -> String {
        match self.theme {
            Theme::Mono => s.to_string(),
            _ => s.if_supports_color(Stdout, |t| t.green()).to_string(),
        }
    }

    pub(crate) fn bad(&self, s: &str) -> String {
        match self.theme {
            Theme::Mono => s.to_string(),
            _ => s.if_supports_color(Stdout, |t| t.red()).to_string(),
        }
    }
}
