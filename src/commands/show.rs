/// Handler for the "show" command: list every contact in the book.

use crate::commands::CommandError;
use crate::domain::AddressBook;

pub fn show_all(book: &AddressBook) -> Result<String, CommandError> {
    if book.is_empty() {
        return Ok("Your contacts list is empty".to_string());
    }

    let lines: Vec<String> = book.iter().map(|r| r.to_string()).collect();
    Ok(lines.join("\n"))
}
