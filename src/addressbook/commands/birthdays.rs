use crate::book::{AddressBook, UpcomingBirthday};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;

use super::helpers::{exact_args, require_contact, require_contact_mut};

/// `add-birthday <name> <DD.MM.YYYY>`
pub fn add_birthday(args: &[String], book: &mut AddressBook) -> Result<CmdResult> {
    let [name, birthday] = exact_args::<2>(args)?;
    let message = require_contact_mut(book, name)?.add_birthday(birthday)?;
    Ok(CmdResult::message(CmdMessage::success(message)))
}

/// `show-birthday <name>`
pub fn show_birthday(args: &[String], book: &mut AddressBook) -> Result<CmdResult> {
    let [name] = exact_args::<1>(args)?;
    let record = require_contact(book, name)?;
    Ok(CmdResult::message(CmdMessage::info(record.show_birthday())))
}

/// `birthdays`: contacts to congratulate within the coming week.
pub fn birthdays(_args: &[String], book: &mut AddressBook) -> Result<CmdResult> {
    let upcoming = book.get_upcoming_birthdays();
    Ok(render_upcoming(&upcoming))
}

fn render_upcoming(upcoming: &[UpcomingBirthday]) -> CmdResult {
    if upcoming.is_empty() {
        return CmdResult::message(CmdMessage::info("No birthday next week"));
    }

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::info("Upcoming birthday next week:"));
    for entry in upcoming {
        result.add_message(CmdMessage::info(format!(
            "{}: {} (celebrate on: {})",
            entry.name, entry.birthday, entry.celebrate_date
        )));
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::contacts;
    use crate::error::ErrorKind;
    use chrono::NaiveDate;

    fn args(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn book_with(names: &[&str]) -> AddressBook {
        let mut book = AddressBook::new();
        for name in names {
            contacts::add(&args(&[*name, "1234567890"]), &mut book).unwrap();
        }
        book
    }

    #[test]
    fn add_and_show_birthday() {
        let mut book = book_with(&["Alice"]);
        let result = add_birthday(&args(&["Alice", "14.06.1990"]), &mut book).unwrap();
        assert_eq!(result.text(), "Birthday added to contact Alice");

        let result = show_birthday(&args(&["Alice"]), &mut book).unwrap();
        assert_eq!(result.text(), "Birthday of contact Alice: 14.06.1990");
    }

    #[test]
    fn show_birthday_when_unset() {
        let mut book = book_with(&["Alice"]);
        let result = show_birthday(&args(&["Alice"]), &mut book).unwrap();
        assert_eq!(result.text(), "Birthday for contact Alice is not set");
    }

    #[test]
    fn add_birthday_requires_existing_contact() {
        let mut book = AddressBook::new();
        let err = add_birthday(&args(&["Bob", "14.06.1990"]), &mut book).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[test]
    fn add_birthday_rejects_bad_date() {
        let mut book = book_with(&["Alice"]);
        let err = add_birthday(&args(&["Alice", "1990-06-14"]), &mut book).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);
        assert_eq!(err.to_string(), "Invalid date format: Use DD.MM.YYYY");
    }

    #[test]
    fn birthdays_lists_upcoming_entries() {
        let mut book = book_with(&["Alice", "Bob", "Carol"]);
        add_birthday(&args(&["Alice", "14.06.1990"]), &mut book).unwrap();
        add_birthday(&args(&["Bob", "15.06.1985"]), &mut book).unwrap();
        add_birthday(&args(&["Carol", "01.09.1985"]), &mut book).unwrap();

        let today = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
        let upcoming = book.upcoming_birthdays_on(today);
        assert_eq!(upcoming.len(), 2);
        assert_eq!(
            render_upcoming(&upcoming).text(),
            "Upcoming birthday next week:\n\
             Alice: 14.06.1990 (celebrate on: 14.06.2024)\n\
             Bob: 15.06.1985 (celebrate on: 17.06.2024)"
        );
    }

    #[test]
    fn birthdays_with_none_upcoming() {
        let book = book_with(&["Alice"]);
        let today = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
        let upcoming = book.upcoming_birthdays_on(today);
        assert_eq!(render_upcoming(&upcoming).text(), "No birthday next week");
    }
}
