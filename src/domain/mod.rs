/// Domain module containing core business logic and data types
///
/// This module defines the core entities (Name, Phone, Birthday, Record,
/// AddressBook) and their validation rules. These types represent the
/// fundamental concepts in our contact book.

pub mod field;
pub mod record;
pub mod book;

// Re-export public types for easy access
pub use field::*;
pub use record::*;
pub use book::*;

use thiserror::Error;

/// Errors that can occur during domain operations
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Contact name cannot be empty")]
    InvalidName,

    #[error("{0} is not valid phone number")]
    InvalidPhone(String),

    #[error("Invalid date '{0}'. Please use 'dd.mm.yyyy' or 'dd.mm'")]
    InvalidDate(String),
}
