use crate::book::AddressBook;
use crate::commands::{CmdMessage, CmdResult, Command};
use crate::error::Result;

pub fn hello(_args: &[String], _book: &mut AddressBook) -> Result<CmdResult> {
    Ok(CmdResult::message(CmdMessage::info("How can I help you?")))
}

pub fn help(_args: &[String], _book: &mut AddressBook) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::info("Bot Commands:"));
    for cmd in Command::ALL {
        result.add_message(CmdMessage::info(format!("- {}", usage(cmd))));
    }
    Ok(result)
}

fn usage(cmd: Command) -> &'static str {
    match cmd {
        Command::Add => "add [name] [phone]: Add new contact or phone to existing contact",
        Command::Change => "change [name] [old phone] [new phone]: Change contact's phone",
        Command::Phone => "phone [name]: Show contact's phone(s)",
        Command::All => "all: Show all contacts",
        Command::Delete => "delete [name]: Delete contact",
        Command::RemovePhone => "remove-phone [name] [phone]: Remove phone from contact",
        Command::AddBirthday => {
            "add-birthday [name] [birthday]: Add birthday for contact (DD.MM.YYYY)"
        }
        Command::ShowBirthday => "show-birthday [name]: Show contact's birthday",
        Command::Birthdays => "birthdays: Show upcoming birthdays for next week",
        Command::Hello => "hello: Get greeting from bot",
        Command::Help => "help: Show this help",
        Command::Exit => "exit/close: Close the program",
    }
}
