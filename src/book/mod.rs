//! The address book collection and its birthday-proximity report.

pub mod address_book;

pub use address_book::{AddressBook, BirthdayReminder, DEFAULT_BIRTHDAY_HORIZON_DAYS};
