//! Error types for the Address Book MCP Server.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use thiserror::Error;

/// Errors that can occur when loading the address book from storage.
#[derive(Error, Debug)]
pub enum StorageError {
    /// The address book file could not be read
    #[error("Failed to read address book {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The address book file is not valid JSON or holds invalid values
    #[error("Failed to parse address book {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Errors that can occur while parsing user command text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// No command was given
    #[error("Empty command")]
    Empty,

    /// The command word is not recognised
    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    /// The command word is known but its arguments are malformed
    #[error("Invalid command format!\n{usage}")]
    InvalidFormat { usage: String },
}

/// Errors surfaced by the person service.
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Command(#[from] CommandError),
}

/// Convenience type alias for Results with StorageError
pub type StorageResult<T> = Result<T, StorageError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Convenience type alias for Results with CommandError
pub type ParseResult<T> = Result<T, CommandError>;

/// Convenience type alias for Results with ServiceError
pub type ServiceResult<T> = Result<T, ServiceError>;
