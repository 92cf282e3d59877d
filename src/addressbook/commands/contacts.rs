use crate::book::AddressBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::fields::Phone;
use crate::record::Record;

use super::helpers::{at_least_args, exact_args, require_contact, require_contact_mut};

/// `add <name> <phone>`: appends the phone, creating the contact if needed.
///
/// A new contact is only stored once its first phone validated, so a bad number
/// never leaves a phoneless contact behind.
pub fn add(args: &[String], book: &mut AddressBook) -> Result<CmdResult> {
    let [name, phone] = at_least_args::<2>(args)?;

    if let Some(record) = book.find_mut(name) {
        record.add_phone(phone)?;
        return Ok(CmdResult::message(CmdMessage::success("Contact updated")));
    }

    let mut record = Record::new(name.as_str())?;
    record.add_phone(phone)?;
    book.add_record(record);
    Ok(CmdResult::message(CmdMessage::success("Contact added")))
}

/// `change <name> <old_phone> <new_phone>`
pub fn change(args: &[String], book: &mut AddressBook) -> Result<CmdResult> {
    let [name, old, new] = exact_args::<3>(args)?;
    require_contact_mut(book, name)?.edit_phone(old, new)?;
    Ok(CmdResult::message(CmdMessage::success("Phone updated")))
}

/// `phone <name>`
pub fn phone(args: &[String], book: &mut AddressBook) -> Result<CmdResult> {
    let [name] = exact_args::<1>(args)?;
    let record = require_contact(book, name)?;
    if record.phones().is_empty() {
        return Ok(CmdResult::message(CmdMessage::info(format!(
            "Contact {} has no phones",
            name
        ))));
    }
    let phones: Vec<&str> = record.phones().iter().map(Phone::as_str).collect();
    Ok(CmdResult::message(CmdMessage::info(phones.join(", "))))
}

/// `all`
pub fn all(_args: &[String], book: &mut AddressBook) -> Result<CmdResult> {
    if book.is_empty() {
        return Ok(CmdResult::message(CmdMessage::info("Address book is empty")));
    }
    let mut result = CmdResult::default();
    for record in book.records() {
        result.add_message(CmdMessage::info(record.to_string()));
    }
    Ok(result)
}

/// `delete <name>`
pub fn delete(args: &[String], book: &mut AddressBook) -> Result<CmdResult> {
    let [name] = exact_args::<1>(args)?;
    let message = book.delete(name)?;
    Ok(CmdResult::message(CmdMessage::success(message)))
}

/// `remove-phone <name> <phone>`
pub fn remove_phone(args: &[String], book: &mut AddressBook) -> Result<CmdResult> {
    let [name, phone] = exact_args::<2>(args)?;
    let message = require_contact_mut(book, name)?.remove_phone(phone)?;
    Ok(CmdResult::message(CmdMessage::success(message)))
}
