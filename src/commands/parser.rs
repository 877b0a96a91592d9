//! Line parser for the command layer.

use crate::error::{CommandError, CommandResult};

/// A parsed user command.
///
/// Names and phone values are carried as raw strings here; validation
/// happens in the core when the command is executed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `hello`
    Hello,
    /// `add <name> <phone>` - create the contact if needed, then add the phone
    Add { name: String, phone: String },
    /// `change <name> <old_phone> <new_phone>`
    Change {
        name: String,
        old_phone: String,
        new_phone: String,
    },
    /// `phone <name>` - list the contact's phones
    Phone { name: String },
    /// `all` - list every contact
    All,
    /// `delete <name>`
    Delete { name: String },
    /// `add-birthday <name> <DD.MM.YYYY>`
    AddBirthday { name: String, date: String },
    /// `show-birthday <name>`
    ShowBirthday { name: String },
    /// `birthdays` - upcoming-birthday report
    Birthdays,
    /// `find-phone <digits>` - reverse lookup by phone
    FindPhone { phone: String },
    /// `close` / `exit`
    Exit,
}

impl Command {
    /// Parse one input line into a command.
    ///
    /// The first whitespace-separated token, lowercased, selects the
    /// command; the rest are its arguments. Returns `Ok(None)` for a
    /// blank line.
    ///
    /// # Errors
    ///
    /// Returns `CommandError::UnknownCommand` for an unrecognized
    /// command word and `CommandError::Usage` when the argument count
    /// does not match.
    pub fn parse(line: &str) -> CommandResult<Option<Self>> {
        let mut tokens = line.split_whitespace();
        let Some(word) = tokens.next() else {
            return Ok(None);
        };
        let args: Vec<&str> = tokens.collect();

        let command = match word.to_lowercase().as_str() {
            "hello" => Self::Hello,
            "add" => match args.as_slice() {
                [name, phone] => Self::Add {
                    name: name.to_string(),
                    phone: phone.to_string(),
                },
                _ => return Err(usage("add <name> <phone>")),
            },
            "change" => match args.as_slice() {
                [name, old_phone, new_phone] => Self::Change {
                    name: name.to_string(),
                    old_phone: old_phone.to_string(),
                    new_phone: new_phone.to_string(),
                },
                _ => return Err(usage("change <name> <old phone> <new phone>")),
            },
            "phone" => match args.as_slice() {
                [name] => Self::Phone {
                    name: name.to_string(),
                },
                _ => return Err(usage("phone <name>")),
            },
            "all" => Self::All,
            "delete" => match args.as_slice() {
                [name] => Self::Delete {
                    name: name.to_string(),
                },
                _ => return Err(usage("delete <name>")),
            },
            "add-birthday" => match args.as_slice() {
                [name, date] => Self::AddBirthday {
                    name: name.to_string(),
                    date: date.to_string(),
                },
                _ => return Err(usage("add-birthday <name> <DD.MM.YYYY>")),
            },
            "show-birthday" => match args.as_slice() {
                [name] => Self::ShowBirthday {
                    name: name.to_string(),
                },
                _ => return Err(usage("show-birthday <name>")),
            },
            "birthdays" => Self::Birthdays,
            "find-phone" => match args.as_slice() {
                [phone] => Self::FindPhone {
                    phone: phone.to_string(),
                },
                _ => return Err(usage("find-phone <phone>")),
            },
            "close" | "exit" => Self::Exit,
            other => return Err(CommandError::UnknownCommand(other.to_string())),
        };

        Ok(Some(command))
    }
}

fn usage(text: &str) -> CommandError {
    CommandError::Usage(format!("Usage: {}", text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_blank_line() {
        assert_eq!(Command::parse("").unwrap(), None);
        assert_eq!(Command::parse("   ").unwrap(), None);
    }

    #[test]
    fn test_parse_is_case_insensitive_on_command_word() {
        assert_eq!(Command::parse("HELLO").unwrap(), Some(Command::Hello));
        assert_eq!(Command::parse("Exit").unwrap(), Some(Command::Exit));
        assert_eq!(Command::parse("close").unwrap(), Some(Command::Exit));
    }

    #[test]
    fn test_parse_add() {
        assert_eq!(
            Command::parse("add John 1234567890").unwrap(),
            Some(Command::Add {
                name: "John".to_string(),
                phone: "1234567890".to_string(),
            })
        );
    }

    #[test]
    fn test_parse_add_missing_args() {
        let err = Command::parse("add John").unwrap_err();
        assert!(matches!(err, CommandError::Usage(_)));
    }

    #[test]
    fn test_parse_change() {
        assert_eq!(
            Command::parse("change John 1111111111 2222222222").unwrap(),
            Some(Command::Change {
                name: "John".to_string(),
                old_phone: "1111111111".to_string(),
                new_phone: "2222222222".to_string(),
            })
        );
    }

    #[test]
    fn test_parse_preserves_name_case() {
        assert_eq!(
            Command::parse("PHONE John").unwrap(),
            Some(Command::Phone {
                name: "John".to_string(),
            })
        );
    }

    #[test]
    fn test_parse_unknown_command() {
        let err = Command::parse("frobnicate").unwrap_err();
        assert_eq!(err, CommandError::UnknownCommand("frobnicate".to_string()));
    }
}
