/// Handler for the "remove" command
///
/// `remove <name>` deletes every matching contact from the book.

use crate::commands::CommandError;
use crate::domain::{AddressBook, Name};
use crate::storage::ContactStorage;

pub fn remove_contact<S: ContactStorage>(
    book: &mut AddressBook,
    storage: &S,
    args: &[String],
) -> Result<String, CommandError> {
    if args.is_empty() {
        return Err(CommandError::MissingArgs);
    }
    if args.len() > 1 {
        return Err(CommandError::TooManyArgs);
    }

    let name = Name::new(&args[0])?;

    let matched: Vec<String> = book
        .find_records(name.as_str())
        .iter()
        .map(|r| r.name().as_str().to_string())
        .collect();
    if matched.is_empty() {
        return Err(CommandError::NotFound);
    }

    for record_name in &matched {
        book.remove(record_name);
    }

    storage.save(book)?;
    Ok(format!(
        "Contact {} was successfully removed",
        name.display_name()
    ))
}
