/// Unit tests for the command handlers and the dispatcher error boundary
use contact_book::*;
use tempfile::{tempdir, TempDir};

#[cfg(test)]
mod command_handler_tests {
    use super::*;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    fn empty_book() -> (AddressBook, JsonFileStorage, TempDir) {
        let dir = tempdir().expect("Failed to create temp dir");
        let storage = JsonFileStorage::new(dir.path().join("contacts.json"));
        (AddressBook::new(), storage, dir)
    }

    #[test]
    fn test_greeting_and_unknown_command() {
        let (mut book, storage, _dir) = empty_book();

        let response = dispatch(&mut book, &storage, "hello", &[]);
        assert_eq!(response, "Hi! How can I help you");

        let response = dispatch(&mut book, &storage, "frobnicate", &[]);
        assert_eq!(response, "This command doesn't exist. Please try again");
    }

    #[test]
    fn test_add_creates_contact_and_persists() {
        let (mut book, storage, _dir) = empty_book();

        let response = dispatch(&mut book, &storage, "add", &args(&["john", "+1234567890"]));
        assert_eq!(response, "Contact John was successfully added");
        assert_eq!(book.len(), 1);

        // write-through: the file already holds the contact
        let reloaded = storage.load().expect("Failed to reload");
        let john = reloaded.get("john").expect("john not persisted");
        assert_eq!(john.phones()[0].as_str(), "+1234567890");
    }

    #[test]
    fn test_add_same_phone_twice_is_a_notice_not_a_duplicate() {
        let (mut book, storage, _dir) = empty_book();

        dispatch(&mut book, &storage, "add", &args(&["john", "+1234567890"]));
        let response = dispatch(&mut book, &storage, "add", &args(&["john", "+1234567890"]));

        assert_eq!(response, "+1234567890 is already recorded for John");
        assert_eq!(book.len(), 1);
        assert_eq!(book.get("john").unwrap().phones().len(), 1);
    }

    #[test]
    fn test_add_second_phone_extends_existing_contact() {
        let (mut book, storage, _dir) = empty_book();

        dispatch(&mut book, &storage, "add", &args(&["john", "+1234567890"]));
        let response = dispatch(&mut book, &storage, "add", &args(&["john", "555 123 456"]));

        assert_eq!(response, "Phone 555 123 456 was added to contact John");
        assert_eq!(book.get("john").unwrap().phones().len(), 2);
    }

    #[test]
    fn test_add_with_split_birthday_tokens() {
        let (mut book, storage, _dir) = empty_book();

        dispatch(&mut book, &storage, "add", &args(&["anna", "555123456", "01", "06"]));

        let birthday = book.get("anna").unwrap().birthday().expect("no birthday");
        assert_eq!(birthday.to_string(), "01.06");
    }

    #[test]
    fn test_add_rejects_invalid_phone() {
        let (mut book, storage, _dir) = empty_book();

        let response = dispatch(&mut book, &storage, "add", &args(&["john", "12345"]));
        assert_eq!(response, "12345 is not valid phone number");
        assert!(book.is_empty());
    }

    #[test]
    fn test_add_rejects_overlong_phone_with_leading_plus() {
        let (mut book, storage, _dir) = empty_book();

        // 16 characters in total: the + counts toward the 9-15 bound
        let response = dispatch(
            &mut book,
            &storage,
            "add",
            &args(&["john", "+123456789012345"]),
        );
        assert_eq!(response, "+123456789012345 is not valid phone number");
        assert!(book.is_empty());
    }

    #[test]
    fn test_change_rejects_overlong_phone_with_leading_plus() {
        let (mut book, storage, _dir) = empty_book();

        dispatch(&mut book, &storage, "add", &args(&["john", "+1234567890"]));
        let response = dispatch(
            &mut book,
            &storage,
            "change",
            &args(&["john", "+123456789012345"]),
        );

        assert_eq!(response, "+123456789012345 is not valid phone number");
        assert_eq!(book.get("john").unwrap().phones()[0].as_str(), "+1234567890");
    }

    #[test]
    fn test_add_without_phone_is_missing_args() {
        let (mut book, storage, _dir) = empty_book();

        let response = dispatch(&mut book, &storage, "add", &args(&["john"]));
        assert_eq!(response, "Please provide name and phone number");
    }

    #[test]
    fn test_change_replaces_all_phones() {
        let (mut book, storage, _dir) = empty_book();

        dispatch(&mut book, &storage, "add", &args(&["john", "+1234567890"]));
        dispatch(&mut book, &storage, "add", &args(&["john", "555 123 456"]));
        let response = dispatch(&mut book, &storage, "change", &args(&["john", "111222333"]));

        assert_eq!(
            response,
            "Phone number for contact John was successfully changed"
        );
        let john = book.get("john").unwrap();
        assert_eq!(john.phones().len(), 1);
        assert_eq!(john.phones()[0].as_str(), "111222333");
    }

    #[test]
    fn test_change_unknown_name_is_not_found() {
        let (mut book, storage, _dir) = empty_book();

        let response = dispatch(&mut book, &storage, "change", &args(&["ghost", "111222333"]));
        assert_eq!(response, "There is no contact with such name");
    }

    #[test]
    fn test_phone_lists_numbers_for_matches() {
        let (mut book, storage, _dir) = empty_book();

        dispatch(&mut book, &storage, "add", &args(&["john", "+1234567890"]));
        let response = dispatch(&mut book, &storage, "phone", &args(&["john"]));

        assert_eq!(response, "Phone number(s) for contact John: +1234567890");
    }

    #[test]
    fn test_phone_with_extra_argument_is_arity_error() {
        let (mut book, storage, _dir) = empty_book();

        let response = dispatch(&mut book, &storage, "phone", &args(&["john", "extra"]));
        assert_eq!(response, "Only name is required");
    }

    #[test]
    fn test_remove_on_empty_book_is_not_found() {
        let (mut book, storage, _dir) = empty_book();

        let response = dispatch(&mut book, &storage, "remove", &args(&["nobody"]));
        assert_eq!(response, "There is no contact with such name");
    }

    #[test]
    fn test_remove_deletes_every_match_and_persists() {
        let (mut book, storage, _dir) = empty_book();

        dispatch(&mut book, &storage, "add", &args(&["anna", "+1234567890"]));
        dispatch(&mut book, &storage, "add", &args(&["annabel", "555123456"]));
        dispatch(&mut book, &storage, "add", &args(&["john", "111222333"]));

        // substring match removes both ann* contacts
        let response = dispatch(&mut book, &storage, "remove", &args(&["ann"]));
        assert_eq!(response, "Contact Ann was successfully removed");
        assert_eq!(book.len(), 1);

        let reloaded = storage.load().expect("Failed to reload");
        assert_eq!(reloaded.len(), 1);
        assert!(reloaded.get("john").is_some());
    }

    #[test]
    fn test_birthday_reports_for_unset_birthday() {
        let (mut book, storage, _dir) = empty_book();

        dispatch(&mut book, &storage, "add", &args(&["john", "+1234567890"]));
        let response = dispatch(&mut book, &storage, "birthday", &args(&["john"]));
        assert_eq!(response, "John has no birthday set");
    }

    #[test]
    fn test_birthday_countdown_with_fixed_clock() {
        let (mut book, storage, _dir) = empty_book();

        dispatch(&mut book, &storage, "add", &args(&["anna", "555123456", "01.06"]));

        let today = chrono::NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        let response = days_to_birthday_on(&book, &args(&["anna"]), today)
            .expect("birthday lookup failed");
        assert_eq!(response, "31 day(s) until Anna's birthday");

        let birthday = chrono::NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let response = days_to_birthday_on(&book, &args(&["anna"]), birthday)
            .expect("birthday lookup failed");
        assert_eq!(response, "Today is Anna's birthday! Time to sing a song!");
    }

    #[test]
    fn test_search_is_prefix_match_on_name_or_phone() {
        let (mut book, storage, _dir) = empty_book();

        dispatch(&mut book, &storage, "add", &args(&["anna", "555123456"]));
        dispatch(&mut book, &storage, "add", &args(&["ann", "111222333"]));
        dispatch(&mut book, &storage, "add", &args(&["johanna", "+1234567890"]));

        let response = dispatch(&mut book, &storage, "search", &args(&["an"]));
        assert!(response.contains("Anna"));
        assert!(response.contains("Ann"));
        assert!(!response.contains("Johanna"));

        let response = dispatch(&mut book, &storage, "search", &args(&["+123"]));
        assert!(response.contains("Johanna"));

        let response = dispatch(&mut book, &storage, "search", &args(&["zzz"]));
        assert_eq!(response, "No contacts matching your query");
    }

    #[test]
    fn test_show_all() {
        let (mut book, storage, _dir) = empty_book();

        let response = dispatch(&mut book, &storage, "show", &[]);
        assert_eq!(response, "Your contacts list is empty");

        dispatch(&mut book, &storage, "add", &args(&["anna", "555123456"]));
        dispatch(&mut book, &storage, "add", &args(&["john", "+1234567890"]));

        let response = dispatch(&mut book, &storage, "show", &[]);
        assert_eq!(response, "Anna: 555123456\nJohn: +1234567890");
    }

    #[test]
    fn test_page_two_of_five_contacts() {
        let (mut book, storage, _dir) = empty_book();

        for name in ["alice", "bob", "carol", "dave", "eve"] {
            dispatch(&mut book, &storage, "add", &args(&[name, "+1234567890"]));
        }

        let response = dispatch(&mut book, &storage, "page", &args(&["2", "2"]));
        assert!(response.starts_with("Page 2:"));
        assert!(response.contains("Carol"));
        assert!(response.contains("Dave"));
        assert!(!response.contains("Alice"));
        assert!(!response.contains("Eve"));
    }

    #[test]
    fn test_page_defaults_and_out_of_range() {
        let (mut book, storage, _dir) = empty_book();

        for name in ["alice", "bob", "carol"] {
            dispatch(&mut book, &storage, "add", &args(&[name, "+1234567890"]));
        }

        // defaults: page 1, size 2
        let response = dispatch(&mut book, &storage, "page", &[]);
        assert!(response.contains("Alice"));
        assert!(response.contains("Bob"));
        assert!(!response.contains("Carol"));

        let response = dispatch(&mut book, &storage, "page", &args(&["9"]));
        assert_eq!(response, "There is no page 9");
    }
}
