//! Abook - a command-line personal contact manager.
//!
//! Stores names, phone numbers, and birthdays in memory, accepts
//! line-oriented commands, and reports upcoming birthdays within a
//! configurable horizon.
//!
//! # Architecture
//!
//! - **domain**: validated value objects (Name, Phone, Birthday)
//! - **models**: the Record aggregate for a single contact
//! - **book**: the AddressBook collection and birthday report
//! - **commands**: line parser and command handlers for the REPL
//! - **error**: custom error types for precise error handling
//! - **config**: configuration management from environment variables

// Re-export commonly used types
pub mod book;
pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;

pub use book::{AddressBook, BirthdayReminder, DEFAULT_BIRTHDAY_HORIZON_DAYS};
pub use commands::Command;
pub use config::Config;
pub use domain::{Birthday, Name, Phone, ValidationError};
pub use error::{CommandError, ConfigError, RecordError};
pub use models::Record;
