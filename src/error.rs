//! Error types for access-agents operations.
//!
//! The transformation core never fails; these errors cover the boundary
//! around it: parsing options, resolving agents, reading input files, and
//! running CLI commands.

use thiserror::Error;

/// Result type alias for access-agents operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O errors (file operations).
    #[error("I/O error: {0}")]
    Io(#[from] IoError),

    /// CLI command errors.
    #[error("command error: {0}")]
    Command(#[from] CommandError),

    /// Processing option errors.
    #[error("options error: {0}")]
    Options(#[from] OptionsError),
}

/// Errors raised while turning free-form input into typed options.
#[derive(Error, Debug)]
pub enum OptionsError {
    /// Context name is not one of the enumerated contexts.
    #[error("unknown context: {name}")]
    UnknownContext {
        /// The rejected name.
        name: String,
    },

    /// Medium name is not one of the enumerated media.
    #[error("unknown medium: {name}")]
    UnknownMedium {
        /// The rejected name.
        name: String,
    },

    /// Agent name matches neither a slug nor an identity.
    #[error("unknown agent: {name}")]
    UnknownAgent {
        /// The rejected name.
        name: String,
    },

    /// Options file could not be parsed.
    #[error("invalid options file: {0}")]
    Parse(String),
}

/// I/O-specific errors for file operations.
#[derive(Error, Debug)]
pub enum IoError {
    /// File not found.
    #[error("file not found: {path}")]
    FileNotFound {
        /// Path to the file that was not found.
        path: String,
    },

    /// Failed to read file.
    #[error("failed to read file: {path}: {reason}")]
    ReadFailed {
        /// Path to the file.
        path: String,
        /// Reason for failure.
        reason: String,
    },

    /// Failed to write file.
    #[error("failed to write file: {path}: {reason}")]
    WriteFailed {
        /// Path to the file.
        path: String,
        /// Reason for failure.
        reason: String,
    },

    /// Directory creation error.
    #[error("failed to create directory: {path}: {reason}")]
    DirectoryFailed {
        /// Path to the directory.
        path: String,
        /// Reason for failure.
        reason: String,
    },
}

/// CLI command-specific errors.
#[derive(Error, Debug)]
pub enum CommandError {
    /// Invalid argument provided.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Missing required argument.
    #[error("missing required argument: {0}")]
    MissingArgument(String),
}

impl From<serde_json::Error> for OptionsError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}
