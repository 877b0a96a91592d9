//! Command layer: parse user input and route it to the core.
//!
//! The REPL feeds raw lines to [`Command::parse`] and passes the result
//! to [`execute`]; everything user-facing (reply strings, error text)
//! is produced here, keeping the core free of I/O concerns.

pub mod handlers;
pub mod parser;

pub use handlers::execute;
pub use parser::Command;
