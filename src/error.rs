//! Error types for the locsync CLI.
//!
//! Reconciliation findings (missing/empty/orphaned keys) are never errors;
//! they are returned as data so callers decide severity. Only structurally
//! fatal conditions (unreadable files, malformed JSON, bad configuration)
//! surface here.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration error (invalid config file, missing required values).
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid command-line argument.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A namespace file could not be interpreted as a translation tree.
    #[error("Parse error: {0}")]
    Parse(String),

    /// A namespace file whose JSON root is not an object.
    ///
    /// Kept as its own variant so the sync engine can skip such files
    /// instead of clobbering them.
    #[error("{}: root is not a JSON object", path.display())]
    NotAnObject {
        /// Path of the offending file.
        path: PathBuf,
    },

    /// A flat key is both a value and a namespace prefix.
    #[error("Key collision: '{prefix}' is both a value and a parent of '{key}'")]
    KeyCollision {
        /// The longer, nested key.
        key: String,
        /// The prefix that already holds a string value.
        prefix: String,
    },

    /// The configured translation provider is not known.
    #[error("Unknown provider '{name}'. Available providers: {available}")]
    UnknownProvider {
        /// The requested provider name.
        name: String,
        /// Comma-separated list of built-in provider names.
        available: String,
    },

    /// A translation provider failed.
    #[error("Provider error: {0}")]
    Provider(String),

    /// Validation found missing or empty translations.
    #[error("Validation failed: {missing} missing, {empty} empty, {orphaned} orphaned")]
    ValidationFailed {
        /// Number of keys absent from a target language.
        missing: usize,
        /// Number of keys present with an empty value.
        empty: usize,
        /// Number of keys present in a target but not in the source.
        orphaned: usize,
    },

    /// IO error (file operations).
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML serialization/deserialization error.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// General/unspecified error.
    #[error("{0}")]
    Other(String),
}

/// Convenient Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Returns the exit code for this error type.
    ///
    /// - 0: Success (never produced here)
    /// - 1: Validation failure or runtime error
    /// - 2: Configuration or usage error
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::Config(_) | Error::InvalidArgument(_) | Error::UnknownProvider { .. } => 2,

            Error::ValidationFailed { .. }
            | Error::Parse(_)
            | Error::NotAnObject { .. }
            | Error::KeyCollision { .. }
            | Error::Provider(_)
            | Error::Io(_)
            | Error::Json(_)
            | Error::Yaml(_)
            | Error::Other(_) => 1,
        }
    }

    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Error::Config(msg.into())
    }

    /// Create an invalid argument error.
    pub fn invalid_arg(msg: impl Into<String>) -> Self {
        Error::InvalidArgument(msg.into())
    }

    /// Create a parse error.
    pub fn parse(msg: impl Into<String>) -> Self {
        Error::Parse(msg.into())
    }

    /// Create a provider error.
    pub fn provider(msg: impl Into<String>) -> Self {
        Error::Provider(msg.into())
    }

    /// Create a general error.
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }
}
