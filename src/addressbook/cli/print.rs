use addressbook::commands::{CmdMessage, CmdResult, MessageLevel};
use colored::Colorize;

pub(super) fn print_result(result: &CmdResult) {
    print_messages(&result.messages);
}

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        println!("{}", styled(message));
    }
}

fn styled(message: &CmdMessage) -> String {
    match message.level {
        MessageLevel::Info => message.content.normal().to_string(),
        MessageLevel::Success => message.content.green().to_string(),
        MessageLevel::Warning => message.content.yellow().to_string(),
        MessageLevel::Error => message.content.red().to_string(),
    }
}
