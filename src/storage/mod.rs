/// Storage layer for persisting the address book
///
/// This module handles reading and writing the contacts file. It provides
/// a clean interface for loading the book at startup and flushing it back
/// after every mutation (write-through).

pub mod json_file;

// Re-export the main storage types
pub use json_file::*;

use thiserror::Error;

use crate::domain::{AddressBook, DomainError};

/// Errors that can occur during storage operations
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Contacts file error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Contacts file is not valid JSON: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Contacts file holds an invalid value: {0}")]
    InvalidContact(#[from] DomainError),
}

/// Trait defining the persistence interface for the address book
///
/// This trait allows us to swap the JSON file for another backend while
/// keeping the same interface, and lets tests substitute storage freely.
pub trait ContactStorage {
    /// Load the whole book; an absent file yields an empty book
    fn load(&self) -> Result<AddressBook, StorageError>;

    /// Persist the whole book, replacing any previous contents
    fn save(&self, book: &AddressBook) -> Result<(), StorageError>;
}
