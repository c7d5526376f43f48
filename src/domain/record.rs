/// Record entity representing one contact
///
/// A record ties together a validated name, an ordered list of phone
/// numbers, and an optional birthday. The phone list never contains two
/// entries with the same validated value.

use std::fmt;

use chrono::NaiveDate;

use crate::domain::{Birthday, Name, Phone};

/// One contact in the address book
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    name: Name,
    phones: Vec<Phone>,
    birthday: Option<Birthday>,
}

impl Record {
    /// Create a new record with no phones and no birthday
    pub fn new(name: Name) -> Self {
        Self {
            name,
            phones: Vec::new(),
            birthday: None,
        }
    }

    /// The record's name (its identity in the book)
    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Add a phone number, keeping the list free of duplicates
    ///
    /// Returns true when the phone was appended, false when an equal phone
    /// was already present and nothing changed.
    pub fn add_phone(&mut self, phone: Phone) -> bool {
        if self.has_phone(&phone) {
            return false;
        }
        self.phones.push(phone);
        true
    }

    /// Check whether an equal phone number is already recorded
    pub fn has_phone(&self, phone: &Phone) -> bool {
        self.phones.contains(phone)
    }

    /// Remove every phone number (used by "change" before setting a new one)
    pub fn clear_phones(&mut self) {
        self.phones.clear();
    }

    pub fn set_birthday(&mut self, birthday: Option<Birthday>) {
        self.birthday = birthday;
    }

    /// Days until the next occurrence of this contact's birthday
    ///
    /// Returns None when no birthday is set, 0 when `today` is the
    /// birthday, otherwise the non-negative day count until it.
    pub fn days_to_birthday(&self, today: NaiveDate) -> Option<i64> {
        let birthday = self.birthday.as_ref()?;
        Some((birthday.next_occurrence(today) - today).num_days())
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones = self
            .phones
            .iter()
            .map(Phone::as_str)
            .collect::<Vec<_>>()
            .join(", ");
        write!(f, "{}: {}", self.name.display_name(), phones)?;
        if let Some(birthday) = &self.birthday {
            write!(f, ": {}", birthday)?;
        }
        Ok(())
    }
}
