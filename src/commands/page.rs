/// Handler for the "page" command
///
/// `page [number] [size]` renders one page of the book; the page number
/// defaults to 1 and the page size to 2.

use crate::commands::CommandError;
use crate::domain::AddressBook;

const DEFAULT_PAGE_NUMBER: usize = 1;
const DEFAULT_PAGE_SIZE: usize = 2;

pub fn show_page(book: &AddressBook, args: &[String]) -> Result<String, CommandError> {
    if args.len() > 2 {
        return Err(CommandError::TooManyArgs);
    }

    let number = match parse_or(args.first(), DEFAULT_PAGE_NUMBER) {
        Some(number) if number > 0 => number,
        _ => return Ok("Page number must be a positive number".to_string()),
    };
    let size = match parse_or(args.get(1), DEFAULT_PAGE_SIZE) {
        Some(size) => size,
        None => return Ok("Page size must be a number".to_string()),
    };

    if book.is_empty() {
        return Ok("Your contacts list is empty".to_string());
    }

    match book.pages(size).nth(number - 1) {
        Some(records) => {
            let mut lines = vec![format!("Page {}:", number)];
            lines.extend(records.iter().map(|r| r.to_string()));
            Ok(lines.join("\n"))
        }
        None => Ok(format!("There is no page {}", number)),
    }
}

fn parse_or(arg: Option<&String>, default: usize) -> Option<usize> {
    match arg {
        Some(value) => value.parse().ok(),
        None => Some(default),
    }
}
