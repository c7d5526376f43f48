/// Public library interface for the contact book
///
/// This module exports the application type and the public domain,
/// storage, and command types used by the binary and by tests.

use std::path::PathBuf;
use thiserror::Error;

// Internal modules
mod domain;
mod storage;
mod commands;
mod repl;

// Re-export public modules and types
pub use commands::*;
pub use domain::*;
pub use repl::{tokenize, Session};
pub use storage::{ContactStorage, JsonFileStorage, StorageError};

/// Errors that can occur during application startup and shutdown
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Storage error: {0}")]
    Storage(#[from] storage::StorageError),

    #[error("Domain validation error: {0}")]
    Domain(#[from] domain::DomainError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// The contact book application: an address book plus its backing file
///
/// Lifecycle is `new` (load the file, or create an empty one) followed by
/// `run` (the interactive session); every mutating command inside the
/// session writes the book straight back to the file.
pub struct ContactBookApp {
    book: AddressBook,
    storage: JsonFileStorage,
}

impl ContactBookApp {
    /// Open the contact book stored at the given path
    ///
    /// A missing file is created empty; a present file is loaded and
    /// validated in full.
    pub fn new(contacts_path: PathBuf) -> Result<Self, AppError> {
        tracing::info!("Opening contact book at {:?}", contacts_path);

        let storage = JsonFileStorage::new(contacts_path);
        let book = storage.load()?;

        tracing::info!("Loaded {} contacts", book.len());
        Ok(Self { book, storage })
    }

    /// Run the interactive session until the user leaves
    pub async fn run(self) -> Result<(), AppError> {
        let Self { book, storage } = self;
        Session::new(book, storage).run().await?;
        Ok(())
    }

    /// Get a reference to the in-memory book (useful for testing)
    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    /// Get a reference to the storage layer (useful for testing)
    pub fn storage(&self) -> &JsonFileStorage {
        &self.storage
    }
}
