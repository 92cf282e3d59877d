//! Validated field values.
//!
//! Each field is a small immutable wrapper that can only be obtained through a
//! parsing constructor, so a `Name`, `Phone` or `Birthday` in hand is always valid.
//! Serde goes through the same constructors (`try_from`), which means a snapshot
//! loaded from disk is validated exactly like user input.

use crate::error::{BookError, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const DATE_FORMAT: &str = "%d.%m.%Y";
const PHONE_DIGITS: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Name(String);

impl Name {
    pub fn parse(value: impl Into<String>) -> Result<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(BookError::validation("Name cannot be empty"));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Phone(String);

impl Phone {
    pub fn parse(value: impl Into<String>) -> Result<Self> {
        let value = value.into();
        if value.len() != PHONE_DIGITS || !value.bytes().all(|b| b.is_ascii_digit()) {
            return Err(BookError::validation("Phone number must contain 10 digits"));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A birthday keeps the text it was entered with next to the parsed date, so it
/// is displayed back exactly as typed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Birthday {
    value: String,
    date: NaiveDate,
}

impl Birthday {
    pub fn parse(value: impl Into<String>) -> Result<Self> {
        let value = value.into();
        let date = NaiveDate::parse_from_str(&value, DATE_FORMAT)
            .map_err(|_| BookError::validation("Invalid date format: Use DD.MM.YYYY"))?;
        Ok(Self { value, date })
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }
}

macro_rules! string_field {
    ($ty:ty) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl TryFrom<String> for $ty {
            type Error = BookError;

            fn try_from(value: String) -> Result<Self> {
                Self::parse(value)
            }
        }

        impl From<$ty> for String {
            fn from(field: $ty) -> String {
                field.as_str().to_string()
            }
        }
    };
}

string_field!(Name);
string_field!(Phone);
string_field!(Birthday);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_rejects_blank_values() {
        assert!(Name::parse("").is_err());
        assert!(Name::parse("   ").is_err());
        assert_eq!(Name::parse("Alice").unwrap().as_str(), "Alice");
    }

    #[test]
    fn phone_accepts_exactly_ten_digits() {
        for ok in ["1234567890", "0000000000", "0987654321"] {
            assert_eq!(Phone::parse(ok).unwrap().as_str(), ok);
        }
        for bad in ["", "123456789", "12345678901", "12345abcde", "+123456789", "123 456789"] {
            let err = Phone::parse(bad).unwrap_err();
            assert_eq!(err.to_string(), "Phone number must contain 10 digits");
        }
    }

    #[test]
    fn phone_rejects_non_ascii_digits() {
        assert!(Phone::parse("١٢٣٤٥٦٧٨٩٠").is_err());
    }

    #[test]
    fn birthday_keeps_display_string() {
        let birthday = Birthday::parse("14.06.1990").unwrap();
        assert_eq!(birthday.to_string(), "14.06.1990");
        assert_eq!(birthday.date(), NaiveDate::from_ymd_opt(1990, 6, 14).unwrap());
    }

    #[test]
    fn birthday_rejects_bad_dates() {
        for bad in ["30.02.2024", "32.01.2020", "01.13.2020", "2020-01-01", "01.01", "aa.bb.cccc"] {
            let err = Birthday::parse(bad).unwrap_err();
            assert_eq!(err.to_string(), "Invalid date format: Use DD.MM.YYYY");
        }
    }

    #[test]
    fn birthday_accepts_leap_day() {
        assert!(Birthday::parse("29.02.2024").is_ok());
        assert!(Birthday::parse("29.02.2023").is_err());
    }

    #[test]
    fn deserialization_validates() {
        let phone: Phone = serde_json::from_str("\"1234567890\"").unwrap();
        assert_eq!(phone.as_str(), "1234567890");
        assert!(serde_json::from_str::<Phone>("\"12\"").is_err());
        assert!(serde_json::from_str::<Birthday>("\"31.04.2000\"").is_err());
    }
}
