//! # Address Book
//!
//! The [`AddressBook`] owns every [`Record`], keyed by the record's name. Keys are
//! unique and iteration follows insertion order; re-adding a name replaces the old
//! record in its original slot.
//!
//! ## Upcoming birthdays
//!
//! For each record with a birthday, the next occurrence on or after today is
//! computed (this year, or next year once this year's date has passed). Occurrences
//! less than [`WINDOW_DAYS`] days away are reported. A birthday falling on a
//! weekend is celebrated on the following Monday. Feb 29 birthdays fall on Feb 28
//! in non-leap years.

use crate::error::{BookError, Result};
use crate::fields::DATE_FORMAT;
use crate::record::Record;
use chrono::{Datelike, Days, Local, NaiveDate, Weekday};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

pub const WINDOW_DAYS: i64 = 7;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpcomingBirthday {
    pub name: String,
    pub birthday: String,
    pub celebrate_date: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<Record>", into = "Vec<Record>")]
pub struct AddressBook {
    records: IndexMap<String, Record>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.records.values()
    }

    /// Inserts the record, silently replacing any record with the same name.
    pub fn add_record(&mut self, record: Record) -> String {
        let message = format!("Contact {} added to address book", record.name());
        self.records.insert(record.name().to_string(), record);
        message
    }

    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name)
    }

    pub fn delete(&mut self, name: &str) -> Result<String> {
        self.records
            .shift_remove(name)
            .ok_or_else(|| BookError::ContactNotFound(name.to_string()))?;
        Ok(format!("Contact {} deleted from address book", name))
    }

    pub fn get_upcoming_birthdays(&self) -> Vec<UpcomingBirthday> {
        self.upcoming_birthdays_on(Local::now().date_naive())
    }

    pub fn upcoming_birthdays_on(&self, today: NaiveDate) -> Vec<UpcomingBirthday> {
        self.records
            .values()
            .filter_map(|record| {
                let birthday = record.birthday()?;
                let next = next_occurrence(birthday.date(), today)?;
                let days_until = (next - today).num_days();
                if !(0..WINDOW_DAYS).contains(&days_until) {
                    return None;
                }
                Some(UpcomingBirthday {
                    name: record.name().to_string(),
                    birthday: birthday.to_string(),
                    celebrate_date: celebration_day(next).format(DATE_FORMAT).to_string(),
                })
            })
            .collect()
    }
}

impl From<Vec<Record>> for AddressBook {
    fn from(records: Vec<Record>) -> Self {
        let mut book = AddressBook::new();
        for record in records {
            book.add_record(record);
        }
        book
    }
}

impl From<AddressBook> for Vec<Record> {
    fn from(book: AddressBook) -> Self {
        book.records.into_values().collect()
    }
}

fn anniversary(birth: NaiveDate, year: i32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, birth.month(), birth.day()).or_else(|| {
        // Only Feb 29 can be missing from a year.
        NaiveDate::from_ymd_opt(year, 2, 28)
    })
}

fn next_occurrence(birth: NaiveDate, today: NaiveDate) -> Option<NaiveDate> {
    let this_year = anniversary(birth, today.year())?;
    if this_year < today {
        anniversary(birth, today.year() + 1)
    } else {
        Some(this_year)
    }
}

fn celebration_day(date: NaiveDate) -> NaiveDate {
    match date.weekday() {
        Weekday::Sat => date + Days::new(2),
        Weekday::Sun => date + Days::new(1),
        _ => date,
    }
}
