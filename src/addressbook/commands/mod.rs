//! # Command Layer
//!
//! Each command is a plain function `fn(&[String], &mut AddressBook) -> Result<CmdResult>`.
//! Commands hold no state: the book they work on is always passed in.
//!
//! [`dispatch`] looks the command up in a single table and runs it through
//! [`guarded`], which is the only place errors are turned into replies. A failing
//! command therefore never escapes as an `Err`; it comes back as a warning or error
//! message and the caller carries on with the next line.

use crate::book::AddressBook;
use crate::error::{BookError, ErrorKind, Result};
use std::fmt;
use std::str::FromStr;

pub mod birthdays;
pub mod contacts;
pub mod helpers;
pub mod info;

pub type Handler = fn(&[String], &mut AddressBook) -> Result<CmdResult>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Hello,
    Help,
    Add,
    Change,
    Phone,
    All,
    Delete,
    RemovePhone,
    AddBirthday,
    ShowBirthday,
    Birthdays,
    Exit,
}

impl Command {
    pub const ALL: [Command; 12] = [
        Command::Hello,
        Command::Help,
        Command::Add,
        Command::Change,
        Command::Phone,
        Command::All,
        Command::Delete,
        Command::RemovePhone,
        Command::AddBirthday,
        Command::ShowBirthday,
        Command::Birthdays,
        Command::Exit,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Command::Hello => "hello",
            Command::Help => "help",
            Command::Add => "add",
            Command::Change => "change",
            Command::Phone => "phone",
            Command::All => "all",
            Command::Delete => "delete",
            Command::RemovePhone => "remove-phone",
            Command::AddBirthday => "add-birthday",
            Command::ShowBirthday => "show-birthday",
            Command::Birthdays => "birthdays",
            Command::Exit => "exit",
        }
    }

    /// The handler for this command. `Exit` has none: it ends the session and is
    /// handled by the caller that owns persistence.
    pub fn handler(&self) -> Option<Handler> {
        let handler: Handler = match self {
            Command::Hello => info::hello,
            Command::Help => info::help,
            Command::Add => contacts::add,
            Command::Change => contacts::change,
            Command::Phone => contacts::phone,
            Command::All => contacts::all,
            Command::Delete => contacts::delete,
            Command::RemovePhone => contacts::remove_phone,
            Command::AddBirthday => birthdays::add_birthday,
            Command::ShowBirthday => birthdays::show_birthday,
            Command::Birthdays => birthdays::birthdays,
            Command::Exit => return None,
        };
        Some(handler)
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Command {
    type Err = ();

    /// Command names are matched case-insensitively; `close` is an alias for `exit`.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let lowered = s.trim().to_lowercase();
        if lowered == "close" {
            return Ok(Command::Exit);
        }
        Command::ALL
            .iter()
            .copied()
            .find(|cmd| cmd.name() == lowered)
            .ok_or(())
    }
}

/// A tokenized input line: the command word and its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedInput {
    pub command: String,
    pub args: Vec<String>,
}

/// Splits a line on whitespace. Returns `None` for blank lines.
pub fn parse_input(line: &str) -> Option<ParsedInput> {
    let mut tokens = line.split_whitespace().map(str::to_string);
    let command = tokens.next()?.to_lowercase();
    Some(ParsedInput {
        command,
        args: tokens.collect(),
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn message(message: CmdMessage) -> Self {
        Self {
            messages: vec![message],
        }
    }

    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    /// All message contents, one per line.
    pub fn text(&self) -> String {
        self.messages
            .iter()
            .map(|m| m.content.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// The user-facing rendering of an error.
pub fn render_error(err: &BookError) -> CmdMessage {
    match err.kind() {
        ErrorKind::Validation => CmdMessage::warning(format!("Input error: {}", err)),
        ErrorKind::NotFound => CmdMessage::warning(format!("Contact not found: {}", err)),
        ErrorKind::ArgumentCount => CmdMessage::warning(
            "Incomplete command. Type 'help' to see all available commands",
        ),
        ErrorKind::Other => CmdMessage::error(format!("Error: {}", err)),
    }
}

/// Runs a handler, converting any failure into a reply.
pub fn guarded(handler: Handler, args: &[String], book: &mut AddressBook) -> CmdResult {
    handler(args, book).unwrap_or_else(|err| {
        tracing::debug!(error = %err, kind = ?err.kind(), "command failed");
        CmdResult::message(render_error(&err))
    })
}

pub fn invalid_command() -> CmdResult {
    CmdResult::message(CmdMessage::warning(
        "Invalid command. Type 'help' to see all commands.",
    ))
}

/// Looks up and runs `command`. Unknown names produce the "invalid command" reply.
/// `exit`/`close` are not dispatched here and also produce that reply; callers
/// check for [`Command::Exit`] first.
pub fn dispatch(command: &str, args: &[String], book: &mut AddressBook) -> CmdResult {
    let handler = command.parse::<Command>().ok().and_then(|c| c.handler());
    match handler {
        Some(handler) => {
            tracing::debug!(command, args = args.len(), "dispatching");
            guarded(handler, args, book)
        }
        None => invalid_command(),
    }
}
