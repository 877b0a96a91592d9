//! AddressBook: the owning collection of records.

use crate::domain::BIRTHDAY_FORMAT;
use crate::models::Record;
use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;

/// Default horizon for the upcoming-birthdays report, in days.
pub const DEFAULT_BIRTHDAY_HORIZON_DAYS: i64 = 7;

/// One row of the upcoming-birthdays report.
///
/// `greeting_date` is the weekend-adjusted date to congratulate on, not
/// necessarily the birthday itself: birthdays landing on a weekend are
/// moved to the following Monday.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BirthdayReminder {
    /// The contact's name
    pub name: String,

    /// Weekend-adjusted congratulation date
    #[serde(serialize_with = "serialize_greeting_date")]
    pub greeting_date: NaiveDate,
}

fn serialize_greeting_date<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&date.format(BIRTHDAY_FORMAT).to_string())
}

impl fmt::Display for BirthdayReminder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.greeting_date.format(BIRTHDAY_FORMAT))
    }
}

/// An owning mapping from contact name to [`Record`].
///
/// The key is always the record's own name; records are added and looked
/// up through the methods here, never by raw map access, so the two can
/// not drift apart. Iteration follows first-insertion order, and
/// overwriting an existing name keeps the record's original position.
#[derive(Debug, Default, Clone)]
pub struct AddressBook {
    records: HashMap<String, Record>,
    // First-insertion order of the keys in `records`
    order: Vec<String>,
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record under its own name, overwriting any existing
    /// record with the same name.
    ///
    /// The book itself never rejects duplicates; callers wanting
    /// reject-on-duplicate semantics must check [`find`](Self::find)
    /// first. An overwritten record keeps its original iteration
    /// position.
    pub fn add_record(&mut self, record: Record) {
        let key = record.name().as_str().to_string();
        if self.records.insert(key.clone(), record).is_none() {
            self.order.push(key);
        }
    }

    /// Look up a record by exact, case-sensitive name.
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    /// Mutable variant of [`find`](Self::find).
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name)
    }

    /// Remove the record with the given name. A no-op when absent.
    pub fn delete(&mut self, name: &str) {
        if self.records.remove(name).is_some() {
            self.order.retain(|n| n != name);
        }
    }

    /// Linear scan for the first record holding an exact-match phone.
    pub fn find_by_phone(&self, phone: &str) -> Option<&Record> {
        self.iter().find(|record| record.find_phone(phone).is_some())
    }

    /// Iterate over records in first-insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.order.iter().filter_map(|name| self.records.get(name))
    }

    /// Number of records in the book.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the book holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Report contacts whose next birthday occurrence falls within
    /// `horizon_days` of `reference` (inclusive on both ends; a birthday
    /// on `reference` itself counts).
    ///
    /// Each included contact is emitted with its weekend-adjusted
    /// greeting date. Rows follow the book's insertion order, not date
    /// order.
    pub fn upcoming_birthdays(
        &self,
        horizon_days: i64,
        reference: NaiveDate,
    ) -> Vec<BirthdayReminder> {
        self.iter()
            .filter_map(|record| {
                let birthday = record.birthday()?;
                let next = birthday.next_occurrence(reference);
                let days_until = (next - reference).num_days();
                if (0..=horizon_days).contains(&days_until) {
                    Some(BirthdayReminder {
                        name: record.name().as_str().to_string(),
                        greeting_date: shift_off_weekend(next),
                    })
                } else {
                    None
                }
            })
            .collect()
    }
}

/// Move Saturday and Sunday dates to the following Monday.
fn shift_off_weekend(date: NaiveDate) -> NaiveDate {
    let shift = match date.weekday() {
        Weekday::Sat => 2,
        Weekday::Sun => 1,
        _ => 0,
    };
    date + chrono::Days::new(shift)
}

impl fmt::Display for AddressBook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lines = self
            .iter()
            .map(|record| record.to_string())
            .collect::<Vec<_>>()
            .join("\n");
        write!(f, "{}", lines)
    }
}
