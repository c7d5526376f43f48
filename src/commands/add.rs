/// Handler for the "add" command
///
/// `add <name> <phone> [birthday]` creates a contact, or extends an
/// existing contact of the same name with another phone number.

use crate::commands::{check_phone_length, CommandError};
use crate::domain::{AddressBook, Birthday, Name, Phone, Record};
use crate::storage::ContactStorage;

/// Create a contact or add a phone to an existing one
///
/// Any arguments after the phone are joined with '.' and parsed as the
/// birthday, so both `01.06.1990` and `01 06 1990` are accepted.
pub fn add_contact<S: ContactStorage>(
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
    let birthday = if args.len() > 2 {
        Some(Birthday::parse(&args[2..].join("."))?)
    } else {
        None
    };

    let response = match book.get_mut(name.as_str()) {
        Some(record) => {
            if !record.add_phone(phone.clone()) {
                // no mutation, so nothing to persist
                return Ok(format!(
                    "{} is already recorded for {}",
                    phone,
                    record.name().display_name()
                ));
            }
            if birthday.is_some() {
                record.set_birthday(birthday);
            }
            format!(
                "Phone {} was added to contact {}",
                phone,
                name.display_name()
            )
        }
        None => {
            let mut record = Record::new(name.clone());
            record.add_phone(phone);
            record.set_birthday(birthday);
            book.add_record(record);
            format!("Contact {} was successfully added", name.display_name())
        }
    };

    storage.save(book)?;
    Ok(response)
}
