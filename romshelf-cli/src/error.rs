use thiserror::Error;

use romshelf_lib::SourceError;

/// Errors that can occur during CLI command execution.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// I/O error
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// Listing source could not be set up
    #[error("{0}")]
    Source(#[from] SourceError),

    /// Console key not in the registry
    #[error("Unknown console '{name}' (known: {known})")]
    UnknownConsole { name: String, known: String },

    /// Listing fetch failed
    #[error("Failed to load {console}: {message}")]
    Load { console: String, message: String },

    /// Logger could not be installed
    #[error("Logging error: {0}")]
    Logging(String),

    /// Bad argument value
    #[error("{0}")]
    Usage(String),
}

impl CliError {
    pub(crate) fn unknown_console<'a>(
        name: impl Into<String>,
        known: impl IntoIterator<Item = &'a str>,
    ) -> Self {
        Self::UnknownConsole {
            name: name.into(),
            known: known.into_iter().collect::<Vec<_>>().join(", "),
        }
    }

    pub(crate) fn load(console: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Load {
            console: console.into(),
            message: message.into(),
        }
    }

    pub(crate) fn logging(msg: impl Into<String>) -> Self {
        Self::Logging(msg.into())
    }

    pub(crate) fn usage(msg: impl Into<String>) -> Self {
        Self::Usage(msg.into())
    }
}
