//! Integration tests for the command layer: a scripted conversation
//! with the bot, minus the stdin/stdout plumbing.

use abook::commands::{execute, Command};
use abook::{AddressBook, CommandError};
use chrono::NaiveDate;

/// Fixed "today" for deterministic birthday output: Tuesday 2024-03-12.
fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 12).unwrap()
}

fn run(book: &mut AddressBook, line: &str) -> Result<String, CommandError> {
    let command = Command::parse(line)?.expect("test lines are never blank");
    execute(book, command, 7, today())
}

fn reply(book: &mut AddressBook, line: &str) -> String {
    match run(book, line) {
        Ok(text) => text,
        Err(err) => format!("Error: {}", err),
    }
}

#[test]
fn test_scripted_session() {
    let mut book = AddressBook::new();

    assert_eq!(reply(&mut book, "hello"), "How can I help you?");
    assert_eq!(reply(&mut book, "all"), "Contacts not found.");

    assert_eq!(reply(&mut book, "add John 1234567890"), "Contact added.");
    assert_eq!(reply(&mut book, "add Jane 0987654321"), "Contact added.");
    assert_eq!(reply(&mut book, "add John 1112223344"), "Contact updated.");

    assert_eq!(
        reply(&mut book, "all"),
        "Contact name: John, phones: 1234567890; 1112223344\n\
         Contact name: Jane, phones: 0987654321"
    );

    assert_eq!(
        reply(&mut book, "change John 1234567890 5556667788"),
        "Contact updated."
    );
    assert_eq!(reply(&mut book, "phone John"), "5556667788; 1112223344");

    assert_eq!(reply(&mut book, "delete Jane"), "Contact deleted.");
    assert_eq!(
        reply(&mut book, "phone Jane"),
        "Error: Contact with name 'Jane' not found"
    );
}

#[test]
fn test_error_translation_for_bad_input() {
    let mut book = AddressBook::new();

    assert_eq!(
        reply(&mut book, "add John 123"),
        "Error: Phone number must be 10 digits, got: 123"
    );
    assert_eq!(reply(&mut book, "add John"), "Error: Usage: add <name> <phone>");
    assert_eq!(
        reply(&mut book, "frobnicate"),
        "Error: Invalid command: frobnicate"
    );
}

#[test]
fn test_change_on_missing_phone_reports_not_found() {
    let mut book = AddressBook::new();
    reply(&mut book, "add John 1234567890");

    assert_eq!(
        reply(&mut book, "change John 0000000000 5556667788"),
        "Error: Phone number 0000000000 not found"
    );
    // Failed edit left the phone list alone
    assert_eq!(reply(&mut book, "phone John"), "1234567890");
}

#[test]
fn test_birthday_workflow() {
    let mut book = AddressBook::new();
    reply(&mut book, "add John 1234567890");
    reply(&mut book, "add Jane 0987654321");

    assert_eq!(
        reply(&mut book, "add-birthday John 16.03.1990"),
        "Birthday added."
    );
    assert_eq!(
        reply(&mut book, "add-birthday Jane 25.03.1990"),
        "Birthday added."
    );
    assert_eq!(
        reply(&mut book, "add-birthday John 01.01.2000"),
        "Error: Birthday is already set for this contact"
    );
    reply(&mut book, "add Bob 5556667788");
    assert_eq!(
        reply(&mut book, "add-birthday Bob 31.02.2024"),
        "Error: Invalid date, expected DD.MM.YYYY, got: 31.02.2024"
    );

    assert_eq!(reply(&mut book, "show-birthday John"), "16.03.1990");

    // Only John is within the 7-day horizon; Saturday the 16th becomes
    // Monday the 18th
    assert_eq!(reply(&mut book, "birthdays"), "John: 18.03.2024");
}

#[test]
fn test_find_phone_command() {
    let mut book = AddressBook::new();
    reply(&mut book, "add John 1234567890");

    assert_eq!(
        reply(&mut book, "find-phone 1234567890"),
        "Contact name: John, phones: 1234567890"
    );
    assert_eq!(
        reply(&mut book, "find-phone 0000000000"),
        "No contact with phone number 0000000000."
    );
}

#[test]
fn test_exit_parses_from_both_words() {
    assert_eq!(Command::parse("exit").unwrap(), Some(Command::Exit));
    assert_eq!(Command::parse("close").unwrap(), Some(Command::Exit));
}
