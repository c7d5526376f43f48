/// Handler for the "birthday" command
///
/// `birthday <name>` reports how many days remain until each matching
/// contact's next birthday.

use chrono::{Local, NaiveDate};

use crate::commands::CommandError;
use crate::domain::AddressBook;

pub fn days_to_birthday(book: &AddressBook, args: &[String]) -> Result<String, CommandError> {
    days_to_birthday_on(book, args, Local::now().date_naive())
}

/// Same as days_to_birthday but against an explicit "today", so the
/// computation is testable with a fixed clock
pub fn days_to_birthday_on(
    book: &AddressBook,
    args: &[String],
    today: NaiveDate,
) -> Result<String, CommandError> {
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
            let name = record.name().display_name();
            match record.days_to_birthday(today) {
                None => format!("{} has no birthday set", name),
                Some(0) => format!("Today is {}'s birthday! Time to sing a song!", name),
                Some(days) => format!("{} day(s) until {}'s birthday", days, name),
            }
        })
        .collect();

    Ok(lines.join("\n"))
}
