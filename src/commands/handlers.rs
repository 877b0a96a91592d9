//! Command handlers: execute parsed commands against an address book.
//!
//! This is the only place where core errors and lookup misses are
//! turned into user-facing text. The core itself never prints.

use super::parser::Command;
use crate::book::AddressBook;
use crate::domain::Phone;
use crate::error::{CommandError, CommandResult};
use crate::models::Record;
use chrono::NaiveDate;
use tracing::debug;

/// Execute a command against the book and produce the reply text.
///
/// `today` is the reference date for the birthday report; the caller
/// passes the current local date. `horizon_days` comes from
/// configuration (default 7).
///
/// # Errors
///
/// Returns a [`CommandError`] for validation failures, record state
/// violations, and missing contacts; the REPL renders it as an
/// `Error: ...` line.
pub fn execute(
    book: &mut AddressBook,
    command: Command,
    horizon_days: i64,
    today: NaiveDate,
) -> CommandResult<String> {
    debug!(?command, "executing command");

    match command {
        Command::Hello => Ok("How can I help you?".to_string()),

        Command::Add { name, phone } => match book.find_mut(&name) {
            Some(record) => {
                record.add_phone(phone)?;
                Ok("Contact updated.".to_string())
            }
            None => {
                // Validate everything before inserting so a bad phone
                // does not leave a half-built record in the book
                let mut record = Record::new(name)?;
                record.add_phone(phone)?;
                book.add_record(record);
                Ok("Contact added.".to_string())
            }
        },

        Command::Change {
            name,
            old_phone,
            new_phone,
        } => {
            let record = find_mut_or_err(book, &name)?;
            record.edit_phone(&old_phone, new_phone)?;
            Ok("Contact updated.".to_string())
        }

        Command::Phone { name } => {
            let record = find_or_err(book, &name)?;
            if record.phones().is_empty() {
                Ok(format!("{} has no phone numbers.", name))
            } else {
                Ok(record
                    .phones()
                    .iter()
                    .map(Phone::as_str)
                    .collect::<Vec<_>>()
                    .join("; "))
            }
        }

        Command::All => {
            if book.is_empty() {
                Ok("Contacts not found.".to_string())
            } else {
                Ok(book.to_string())
            }
        }

        Command::Delete { name } => {
            book.delete(&name);
            Ok("Contact deleted.".to_string())
        }

        Command::AddBirthday { name, date } => {
            let record = find_mut_or_err(book, &name)?;
            record.add_birthday(&date)?;
            Ok("Birthday added.".to_string())
        }

        Command::ShowBirthday { name } => {
            let record = find_or_err(book, &name)?;
            match record.birthday() {
                Some(birthday) => Ok(birthday.to_string()),
                None => Ok(format!("Birthday not set for {}.", name)),
            }
        }

        Command::Birthdays => {
            let rows = book.upcoming_birthdays(horizon_days, today);
            if rows.is_empty() {
                Ok("No upcoming birthdays.".to_string())
            } else {
                Ok(rows
                    .iter()
                    .map(|row| row.to_string())
                    .collect::<Vec<_>>()
                    .join("\n"))
            }
        }

        Command::FindPhone { phone } => match book.find_by_phone(&phone) {
            Some(record) => Ok(record.to_string()),
            None => Ok(format!("No contact with phone number {}.", phone)),
        },

        // Handled by the REPL loop before dispatch
        Command::Exit => Ok("Good bye!".to_string()),
    }
}

fn find_or_err<'a>(book: &'a AddressBook, name: &str) -> CommandResult<&'a Record> {
    book.find(name)
        .ok_or_else(|| CommandError::ContactNotFound(name.to_string()))
}

fn find_mut_or_err<'a>(book: &'a mut AddressBook, name: &str) -> CommandResult<&'a mut Record> {
    book.find_mut(name)
        .ok_or_else(|| CommandError::ContactNotFound(name.to_string()))
}
