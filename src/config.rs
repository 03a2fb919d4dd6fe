//! Configuration management for the address book.
//!
//! Settings come from environment variables, optionally seeded from a `.env`
//! file in the working directory.

use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::path::PathBuf;

/// Default file offered by the save and load prompts.
pub const DEFAULT_BOOK_FILE: &str = "address_book.json";

/// Configuration for the address book session.
#[derive(Debug, Clone)]
pub struct Config {
    /// File used when the user accepts the default at a save/load prompt
    pub book_file: PathBuf,

    /// Load `book_file` when the session starts (default: false)
    pub autoload: bool,

    /// Log level (default: "warn")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `ADDRESS_BOOK_FILE`: default book file (default: `address_book.json`)
    /// - `ADDRESS_BOOK_AUTOLOAD`: `true`/`false`/`1`/`0` (default: false)
    /// - `LOG_LEVEL`: logging level (default: "warn")
    pub fn from_env() -> ConfigResult<Self> {
        // A missing .env is fine
        let _ = dotenvy::dotenv();

        let book_file =
            env::var("ADDRESS_BOOK_FILE").unwrap_or_else(|_| DEFAULT_BOOK_FILE.to_string());
        if book_file.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                var: "ADDRESS_BOOK_FILE".to_string(),
                reason: "Cannot be empty".to_string(),
            });
        }

        let autoload = Self::parse_env_bool("ADDRESS_BOOK_AUTOLOAD", false)?;
        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "warn".to_string());

        Ok(Config {
            book_file: PathBuf::from(book_file),
            autoload,
            log_level,
        })
    }

    /// Parse an environment variable as bool with a default value.
    fn parse_env_bool(var_name: &str, default: bool) -> ConfigResult<bool> {
        match env::var(var_name) {
            Ok(val) => match val.trim().to_ascii_lowercase().as_str() {
                "true" | "1" | "yes" => Ok(true),
                "false" | "0" | "no" => Ok(false),
                _ => Err(ConfigError::InvalidValue {
                    var: var_name.to_string(),
                    reason: format!("Must be true or false, got: {}", val),
                }),
            },
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            book_file: PathBuf::from(DEFAULT_BOOK_FILE),
            autoload: false,
            log_level: "warn".to_string(),
        }
    }
}
