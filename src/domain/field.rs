/// Validated field types for contact records
///
/// This module defines the scalar building blocks of a contact: Name, Phone,
/// and Birthday. Each one validates its input at construction time and
/// returns a DomainError on bad input, so a value that exists is always a
/// valid value.

use std::fmt;
use std::sync::OnceLock;

use chrono::NaiveDate;
use regex::Regex;

use crate::domain::DomainError;

/// Year written to the contacts file when the real year is unknown.
///
/// The file format always carries a four-digit year, so year-less birthdays
/// are stored with this placeholder and mapped back to "no year" on load.
pub const UNKNOWN_YEAR: i32 = 1900;

/// Leap year used to validate day/month pairs when no year is given,
/// so a 29.02 birthday without a year is accepted.
const PROBE_YEAR: i32 = 2000;

fn phone_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        // Optional leading +, then 9-15 characters of digits/space/-/()
        Regex::new(r"^\+?[\d\s\-()]{9,15}$").expect("phone pattern is a valid regex")
    })
}

/// A contact's name
///
/// Names are free-form but never empty. They are matched case-insensitively
/// everywhere in the book; capitalization only happens for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Name(String);

impl Name {
    /// Create a new name, rejecting empty (or whitespace-only) input
    pub fn new(value: &str) -> Result<Self, DomainError> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(DomainError::InvalidName);
        }
        Ok(Self(trimmed.to_string()))
    }

    /// The validated name exactly as the user entered it
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Case-insensitive comparison against another name string
    pub fn matches(&self, other: &str) -> bool {
        self.0.to_lowercase() == other.trim().to_lowercase()
    }

    /// Get the display form of the name (first character capitalized)
    pub fn display_name(&self) -> String {
        let mut chars = self.0.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
            None => String::new(),
        }
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// A contact's phone number
///
/// Accepts an optional leading `+` followed by 9 to 15 characters, each a
/// digit, space, hyphen, or parenthesis. Two phones are equal when their
/// validated strings are equal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Phone(String);

impl Phone {
    /// Create a new phone number, validating the format
    pub fn new(value: &str) -> Result<Self, DomainError> {
        let trimmed = value.trim();
        if !phone_pattern().is_match(trimmed) {
            return Err(DomainError::InvalidPhone(value.to_string()));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// The validated phone number string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A contact's birthday
///
/// Parsed from either "dd.mm.yyyy" or the year-less "dd.mm" form. The year
/// is kept as an Option rather than a sentinel value, so "year unknown"
/// survives in memory; the storage layer maps it to UNKNOWN_YEAR on the
/// wire and back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Birthday {
    day: u32,
    month: u32,
    year: Option<i32>,
}

impl Birthday {
    /// Create a birthday from parts, checking the day/month combination
    /// is a real calendar date
    pub fn new(day: u32, month: u32, year: Option<i32>) -> Result<Self, DomainError> {
        let probe = year.unwrap_or(PROBE_YEAR);
        if NaiveDate::from_ymd_opt(probe, month, day).is_none() {
            return Err(DomainError::InvalidDate(format!("{:02}.{:02}", day, month)));
        }
        Ok(Self { day, month, year })
    }

    /// Parse a birthday from "dd.mm.yyyy", falling back to "dd.mm"
    pub fn parse(value: &str) -> Result<Self, DomainError> {
        let invalid = || DomainError::InvalidDate(value.to_string());

        let parts: Vec<&str> = value.trim().split('.').collect();
        let (day, month, year) = match parts.as_slice() {
            [day, month] => (day, month, None),
            [day, month, year] => (day, month, Some(*year)),
            _ => return Err(invalid()),
        };

        let day: u32 = day.parse().map_err(|_| invalid())?;
        let month: u32 = month.parse().map_err(|_| invalid())?;
        let year: Option<i32> = match year {
            Some(year) => Some(year.parse().map_err(|_| invalid())?),
            None => None,
        };

        Self::new(day, month, year).map_err(|_| invalid())
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// The stored year, or None when the user never gave one
    pub fn year(&self) -> Option<i32> {
        self.year
    }

    /// The next calendar occurrence of this birthday on or after `today`
    ///
    /// The stored year is ignored; only month and day matter. A 29.02
    /// birthday falls on 01.03 in non-leap years.
    pub fn next_occurrence(&self, today: NaiveDate) -> NaiveDate {
        use chrono::Datelike;

        let this_year = self.occurrence_in(today.year());
        if this_year < today {
            self.occurrence_in(today.year() + 1)
        } else {
            this_year
        }
    }

    fn occurrence_in(&self, year: i32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, self.month, self.day)
            .or_else(|| NaiveDate::from_ymd_opt(year, 3, 1))
            .expect("fallback date 01.03 exists in every year")
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.year {
            Some(year) => write!(f, "{:02}.{:02}.{:04}", self.day, self.month, year),
            None => write!(f, "{:02}.{:02}", self.day, self.month),
        }
    }
}
