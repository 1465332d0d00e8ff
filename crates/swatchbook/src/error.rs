//! Error types for palette loading, persistence and rendering.
//!
//! The theme manager's public operations never surface these: a failed
//! store write or picker render is logged and dropped. They are returned
//! from construction-time APIs (registry and config loading) and from the
//! environment traits so that hosts can decide what to do with them.

use std::io;
use std::path::PathBuf;

/// Errors produced while building registries or talking to the environment.
#[derive(Debug, thiserror::Error)]
pub enum SwatchError {
    /// The registry does not contain its designated default key.
    #[error("default theme '{0}' is not in the registry")]
    MissingDefault(String),

    /// A designated dark key does not name a registry entry.
    #[error("dark theme '{0}' is not in the registry")]
    MissingDark(String),

    /// The same key appears twice in a registry definition.
    #[error("theme '{0}' is defined more than once")]
    DuplicateKey(String),

    /// A registry was built without any themes.
    #[error("registry has no themes")]
    EmptyRegistry,

    /// A theme attribute holds a value that cannot be written as a CSS property.
    #[error("invalid value for '{attribute}' in theme '{theme}': {reason}")]
    InvalidValue {
        /// Registry key of the offending theme.
        theme: String,
        /// camelCase attribute identifier.
        attribute: String,
        /// What the tokenizer rejected.
        reason: String,
    },

    /// YAML or JSON content could not be parsed.
    #[error("failed to parse {what}: {message}")]
    Parse {
        /// What was being parsed ("themes", "config", "store").
        what: &'static str,
        /// Parser message.
        message: String,
    },

    /// Reading or writing a backing file failed.
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        /// File involved.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: io::Error,
    },

    /// Picker markup failed to render.
    #[error("template error: {0}")]
    Template(String),
}

impl SwatchError {
    /// Creates a parse error.
    pub fn parse(what: &'static str, message: impl Into<String>) -> Self {
        Self::Parse {
            what,
            message: message.into(),
        }
    }

    /// Wraps an I/O error with the path it happened on.
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

impl From<minijinja::Error> for SwatchError {
    fn from(err: minijinja::Error) -> Self {
        SwatchError::Template(err.to_string())
    }
}
