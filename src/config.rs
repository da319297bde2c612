//! Configuration management for the Address Book MCP Server.
//!
//! This module handles loading and validating configuration from environment variables.
//! It avoids polluting stdout (which MCP uses for communication) by loading the
//! .env file through `dotenvy`, which never prints.

use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::path::PathBuf;

/// Default location of the address book file.
pub const DEFAULT_ADDRESSBOOK_FILE: &str = "addressbook.json";

/// Configuration for the Address Book MCP Server.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to the JSON address book file
    pub addressbook_file: PathBuf,

    /// How long a loaded address book snapshot is reused, in seconds (default: 30)
    /// A value of 0 reloads the file on every command
    pub cache_ttl_seconds: u64,

    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `ADDRESSBOOK_FILE`: Path to the address book (default: "addressbook.json")
    /// - `ADDRESSBOOK_CACHE_TTL_SECONDS`: Snapshot TTL in seconds (default: 30)
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // Missing .env is fine
        let _ = dotenvy::dotenv();

        let addressbook_file = env::var("ADDRESSBOOK_FILE")
            .unwrap_or_else(|_| DEFAULT_ADDRESSBOOK_FILE.to_string());

        if addressbook_file.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                var: "ADDRESSBOOK_FILE".to_string(),
                reason: "Cannot be empty".to_string(),
            });
        }

        let cache_ttl_seconds = Self::parse_env_u64("ADDRESSBOOK_CACHE_TTL_SECONDS", 30)?;
        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        Ok(Config {
            addressbook_file: PathBuf::from(addressbook_file),
            cache_ttl_seconds,
            log_level,
        })
    }

    /// Parse an environment variable as u64 with a default value.
    fn parse_env_u64(var_name: &str, default: u64) -> ConfigResult<u64> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u64>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            addressbook_file: PathBuf::from(DEFAULT_ADDRESSBOOK_FILE),
            cache_ttl_seconds: 30,
            log_level: "error".to_string(),
        }
    }
}
