//! Record aggregate representing one contact.

use crate::domain::{Birthday, Name, Phone, ValidationError};
use crate::error::{RecordError, RecordResult};
use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;

/// A single contact: one name, any number of phones, at most one birthday.
///
/// The name is fixed at construction and serves as the record's identity
/// inside an [`AddressBook`](crate::book::AddressBook). Phones keep
/// insertion order and may repeat. The birthday can be set exactly once;
/// a second `add_birthday` is a usage error, not an overwrite.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Record {
    name: Name,
    phones: Vec<Phone>,
    #[serde(skip_serializing_if = "Option::is_none")]
    birthday: Option<Birthday>,
}

impl Record {
    /// Create a new record for the given name with no phones or birthday.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyName` if the name is empty.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        Ok(Self {
            name: Name::new(name)?,
            phones: Vec::new(),
            birthday: None,
        })
    }

    /// The contact's name.
    pub fn name(&self) -> &Name {
        &self.name
    }

    /// The contact's phones in insertion order.
    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    /// The contact's birthday, if set.
    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Validate and append a phone. Duplicates are permitted.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` if the value is not
    /// exactly 10 digits.
    pub fn add_phone(&mut self, phone: impl Into<String>) -> Result<(), ValidationError> {
        self.phones.push(Phone::new(phone)?);
        Ok(())
    }

    /// Remove every phone whose value equals `phone` exactly.
    ///
    /// A no-op when no phone matches.
    pub fn remove_phone(&mut self, phone: &str) {
        self.phones.retain(|p| p.as_str() != phone);
    }

    /// Replace the first phone equal to `old_phone` with a validated new
    /// phone at the same position.
    ///
    /// # Errors
    ///
    /// Returns `RecordError::PhoneNotFound` if `old_phone` is absent, or
    /// a validation error if `new_phone` is not a valid phone. The phone
    /// list is unchanged on any failure.
    pub fn edit_phone(&mut self, old_phone: &str, new_phone: impl Into<String>) -> RecordResult<()> {
        // Validate before searching so a bad replacement leaves the list intact
        let new_phone = Phone::new(new_phone)?;
        let slot = self
            .phones
            .iter_mut()
            .find(|p| p.as_str() == old_phone)
            .ok_or_else(|| RecordError::PhoneNotFound(old_phone.to_string()))?;
        *slot = new_phone;
        Ok(())
    }

    /// Find the first phone equal to `phone`, if any.
    pub fn find_phone(&self, phone: &str) -> Option<&Phone> {
        self.phones.iter().find(|p| p.as_str() == phone)
    }

    /// Set the birthday from a `DD.MM.YYYY` string.
    ///
    /// # Errors
    ///
    /// Returns `RecordError::BirthdayAlreadySet` if a birthday already
    /// exists on this record (one-time-set policy), or a validation
    /// error if the date does not parse. The existing birthday is never
    /// replaced.
    pub fn add_birthday(&mut self, date: &str) -> RecordResult<()> {
        if self.birthday.is_some() {
            return Err(RecordError::BirthdayAlreadySet);
        }
        self.birthday = Some(Birthday::new(date)?);
        Ok(())
    }

    /// Days from `today` to the next occurrence of the birthday, or
    /// `None` when no birthday is set. Returns 0 on the birthday itself.
    pub fn days_to_birthday(&self, today: NaiveDate) -> Option<i64> {
        self.birthday.map(|b| b.days_until(today))
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones = self
            .phones
            .iter()
            .map(Phone::as_str)
            .collect::<Vec<_>>()
            .join("; ");
        write!(f, "Contact name: {}, phones: {}", self.name, phones)
    }
}
