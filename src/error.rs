//! Application error types.
//!
//! Provides unified error handling with actionable context for debugging.

use std::path::PathBuf;

use thiserror::Error;

/// Application result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Application error types with specific context for actionable debugging
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration error with guidance
    #[error("Configuration error: {message}. {hint}")]
    Config {
        /// Description of the configuration problem.
        message: String,
        /// Actionable guidance for fixing the issue.
        hint: &'static str,
    },

    /// Hyphenation dictionary could not be loaded
    #[error("Failed to load {language} hyphenation dictionary from {path:?}: {message}")]
    Dictionary {
        /// Language code the dictionary was requested for.
        language: String,
        /// Dictionary file that was attempted.
        path: PathBuf,
        /// Description of the load failure.
        message: String,
        /// Actionable suggestion for resolving the error.
        hint: Option<&'static str>,
    },

    /// Encoded lyrics could not be decoded
    #[error("Parse error: {0}")]
    Parse(String),
}

impl Error {
    /// Create a config error with actionable hint
    pub fn config(message: impl Into<String>, hint: &'static str) -> Self {
        Self::Config { message: message.into(), hint }
    }

    /// Create a dictionary load error, picking a hint from the underlying IO error kind
    pub fn dictionary(
        language: impl Into<String>,
        path: impl Into<PathBuf>,
        source: &std::io::Error,
    ) -> Self {
        let hint = match source.kind() {
            std::io::ErrorKind::NotFound => {
                Some("Check the resource root; it must contain <language>.standard.bincode")
            }
            std::io::ErrorKind::PermissionDenied => Some("The dictionary file is not readable"),
            std::io::ErrorKind::InvalidData | std::io::ErrorKind::UnexpectedEof => {
                Some("The dictionary file is corrupt or from an incompatible hyphenation version")
            }
            _ => None,
        };
        Self::Dictionary {
            language: language.into(),
            path: path.into(),
            message: source.to_string(),
            hint,
        }
    }

    /// Hint attached to this error, if any
    pub const fn hint(&self) -> Option<&'static str> {
        match self {
            Self::Config { hint, .. } => Some(*hint),
            Self::Dictionary { hint, .. } => *hint,
            Self::Parse(_) => None,
        }
    }

    /// Whether this error happened while setting up the hyphenator
    pub const fn is_startup(&self) -> bool {
        matches!(self, Self::Config { .. } | Self::Dictionary { .. })
    }
}
