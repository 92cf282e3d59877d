use crate::book::AddressBook;
use crate::error::{BookError, Result};
use crate::record::Record;

/// Any count other than `N` is an incomplete command.
pub fn exact_args<const N: usize>(args: &[String]) -> Result<&[String; N]> {
    <&[String; N]>::try_from(args).map_err(|_| BookError::ArgumentCount)
}

/// Like [`exact_args`] but extra arguments are ignored.
pub fn at_least_args<const N: usize>(args: &[String]) -> Result<&[String; N]> {
    args.get(..N)
        .and_then(|head| head.try_into().ok())
        .ok_or(BookError::ArgumentCount)
}

pub fn require_contact<'a>(book: &'a AddressBook, name: &str) -> Result<&'a Record> {
    book.find(name)
        .ok_or_else(|| BookError::ContactNotFound(name.to_string()))
}

pub fn require_contact_mut<'a>(book: &'a mut AddressBook, name: &str) -> Result<&'a mut Record> {
    book.find_mut(name)
        .ok_or_else(|| BookError::ContactNotFound(name.to_string()))
}
