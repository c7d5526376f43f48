/// Handler for the "change" command
///
/// `change <name> <phone>` replaces every phone of every matching contact
/// with the single new number.

use crate::commands::{check_phone_length, CommandError};
use crate::domain::{AddressBook, Name, Phone};
use crate::storage::ContactStorage;

pub fn change_phone<S: ContactStorage>(
    book: &mut AddressBook,
    storage: &S,
    args: &[String],
) -> Result<String, CommandError> {
    if args.len() < 2 {
        return Err(CommandError::MissingArgs);
    }

    let name = Name::new(&args[0])?;
    check_phone_length(&args[1])?;
    let phone = Phone::new(&args[1])?;

    // matching uses the substring rule, same as lookups
    let matched: Vec<String> = book
        .find_records(name.as_str())
        .iter()
        .map(|r| r.name().as_str().to_string())
        .collect();
    if matched.is_empty() {
        return Err(CommandError::NotFound);
    }

    for record_name in &matched {
        if let Some(record) = book.get_mut(record_name) {
            record.clear_phones();
            record.add_phone(phone.clone());
        }
    }

    storage.save(book)?;
    Ok(format!(
        "Phone number for contact {} was successfully changed",
        name.display_name()
    ))
}
