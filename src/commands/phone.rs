/// Handler for the "phone" command
///
/// `phone <name>` lists the phone numbers of every matching contact.

use crate::commands::CommandError;
use crate::domain::AddressBook;

pub fn show_phones(book: &AddressBook, args: &[String]) -> Result<String, CommandError> {
    if args.is_empty() {
        return Err(CommandError::MissingArgs);
    }
    if args.len() > 1 {
        return Err(CommandError::TooManyArgs);
    }

    let records = book.find_records(&args[0]);
    if records.is_empty() {
        return Err(CommandError::NotFound);
    }

    let lines: Vec<String> = records
        .iter()
        .map(|record| {
            let phones = record
                .phones()
                .iter()
                .map(|p| p.as_str())
                .collect::<Vec<_>>()
                .join(", ");
            format!(
                "Phone number(s) for contact {}: {}",
                record.name().display_name(),
                phones
            )
        })
        .collect();

    Ok(lines.join("\n"))
}
