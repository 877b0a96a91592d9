//! Error types for the address book.
//!
//! This module defines custom error types using `thiserror` for precise
//! error handling. Domain field validation lives in
//! [`crate::domain::ValidationError`]; the types here cover record state
//! violations, configuration loading, and command-layer failures.
//!
//! Lookups (`find`, `find_phone`, `find_by_phone`) are not errors: they
//! return `Option` and never appear in these enums.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors that can occur when mutating a [`Record`](crate::models::Record).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    /// A field failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// edit_phone targeted a phone value not present on the record
    #[error("Phone number {0} not found")]
    PhoneNotFound(String),

    /// A second birthday was set on a record that already has one
    #[error("Birthday is already set for this contact")]
    BirthdayAlreadySet,
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Errors produced by the command layer while executing user input.
///
/// The REPL renders these as `Error: ...` lines; the core never prints.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// The input line does not start with a known command
    #[error("Invalid command: {0}")]
    UnknownCommand(String),

    /// The command was given too few or malformed arguments
    #[error("{0}")]
    Usage(String),

    /// The named contact does not exist in the book
    #[error("Contact with name '{0}' not found")]
    ContactNotFound(String),

    /// A record operation failed
    #[error(transparent)]
    Record(#[from] RecordError),
}

impl From<ValidationError> for CommandError {
    fn from(err: ValidationError) -> Self {
        CommandError::Record(RecordError::Validation(err))
    }
}

/// Convenience type alias for Results with RecordError
pub type RecordResult<T> = Result<T, RecordError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Convenience type alias for Results with CommandError
pub type CommandResult<T> = Result<T, CommandError>;
