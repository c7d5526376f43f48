/// Command handlers for the interactive session
///
/// Each handler receives the shared AddressBook (and, for mutating
/// commands, the storage used for write-through persistence) plus the
/// tokenized argument list, and returns a human-readable response string.
/// Failures never escape: the dispatcher converts every CommandError into
/// an apology string for the user.

pub mod add;
pub mod change;
pub mod phone;
pub mod remove;
pub mod birthday;
pub mod search;
pub mod show;
pub mod page;

// Re-export handler functions for easy access
pub use add::*;
pub use change::*;
pub use phone::*;
pub use remove::*;
pub use birthday::*;
pub use search::*;
pub use show::*;
pub use page::*;

use thiserror::Error;

use crate::domain::{AddressBook, DomainError};
use crate::storage::{ContactStorage, StorageError};

/// Errors a command handler can signal
///
/// The first three carry their user-facing apology in the error message;
/// validation and storage failures wrap the underlying error.
#[derive(Error, Debug)]
pub enum CommandError {
    #[error("Please provide name and phone number")]
    MissingArgs,

    #[error("There is no contact with such name")]
    NotFound,

    #[error("Only name is required")]
    TooManyArgs,

    #[error(transparent)]
    Validation(#[from] DomainError),

    #[error("Failed to save contacts: {0}")]
    Storage(#[from] StorageError),
}

/// Reject a raw phone token whose trimmed length falls outside 9-15
/// characters, the leading `+` included
///
/// The phone pattern itself counts 9-15 characters after the optional
/// `+`, so add/change apply this bound to the raw token first.
pub(crate) fn check_phone_length(raw: &str) -> Result<(), CommandError> {
    let length = raw.trim().chars().count();
    if !(9..=15).contains(&length) {
        return Err(CommandError::Validation(DomainError::InvalidPhone(
            raw.trim().to_string(),
        )));
    }
    Ok(())
}

/// Fixed greeting response
pub fn greet() -> String {
    "Hi! How can I help you".to_string()
}

/// Fixed response for unrecognized commands
pub fn unknown_command() -> String {
    "This command doesn't exist. Please try again".to_string()
}

/// Route a tokenized command to its handler and flatten the result into
/// a response string
///
/// This is the error boundary of the whole session: whatever a handler
/// returns, the caller gets a printable string back.
pub fn dispatch<S: ContactStorage>(
    book: &mut AddressBook,
    storage: &S,
    command: &str,
    args: &[String],
) -> String {
    let result = match command {
        "hi" | "hello" | "hey" => Ok(greet()),
        "add" => add_contact(book, storage, args),
        "change" => change_phone(book, storage, args),
        "phone" => show_phones(book, args),
        "remove" | "delete" => remove_contact(book, storage, args),
        "birthday" => days_to_birthday(book, args),
        "search" => search_contacts(book, args),
        "show" => show_all(book),
        "page" => show_page(book, args),
        _ => Ok(unknown_command()),
    };

    match result {
        Ok(response) => response,
        Err(error) => {
            if let CommandError::Storage(ref storage_error) = error {
                tracing::error!("Command '{}' failed to persist: {}", command, storage_error);
            } else {
                tracing::debug!("Command '{}' rejected: {}", command, error);
            }
            error.to_string()
        }
    }
}
