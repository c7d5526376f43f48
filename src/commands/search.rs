/// Handler for the "search" command
///
/// `search <query>` matches by prefix on the name or any phone number.
/// An empty result is a plain response, not an error.

use crate::commands::CommandError;
use crate::domain::AddressBook;

pub fn search_contacts(book: &AddressBook, args: &[String]) -> Result<String, CommandError> {
    if args.is_empty() {
        return Err(CommandError::MissingArgs);
    }

    let records = book.search(&args[0]);
    if records.is_empty() {
        return Ok("No contacts matching your query".to_string());
    }

    let lines: Vec<String> = records.iter().map(|r| r.to_string()).collect();
    Ok(lines.join("\n"))
}
