//! Configuration management for the assistant bot.
//!
//! This module handles loading configuration from environment variables.
//! Everything is optional with sensible defaults, so the bot runs with
//! no configuration at all.

use crate::book::DEFAULT_BIRTHDAY_HORIZON_DAYS;
use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Configuration for the assistant bot.
#[derive(Debug, Clone)]
pub struct Config {
    /// How many days ahead the `birthdays` command looks (default: 7)
    pub birthday_horizon_days: i64,

    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `ABOOK_BIRTHDAY_HORIZON_DAYS`: birthday report horizon in days (default: 7)
    /// - `LOG_LEVEL`: logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // Try to load .env file if it exists (but don't fail if it doesn't)
        let _ = dotenvy::dotenv();

        let birthday_horizon_days = match env::var("ABOOK_BIRTHDAY_HORIZON_DAYS") {
            Ok(val) => val.parse::<i64>().ok().filter(|days| *days >= 0).ok_or_else(|| {
                ConfigError::InvalidValue {
                    var: "ABOOK_BIRTHDAY_HORIZON_DAYS".to_string(),
                    reason: format!("Must be a non-negative number of days, got: {}", val),
                }
            })?,
            Err(_) => DEFAULT_BIRTHDAY_HORIZON_DAYS,
        };

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        Ok(Config {
            birthday_horizon_days,
            log_level,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            birthday_horizon_days: DEFAULT_BIRTHDAY_HORIZON_DAYS,
            log_level: "error".to_string(),
        }
    }
}
