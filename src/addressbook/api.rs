//! # API Facade
//!
//! [`BookApi`] is the single entry point for every address book operation,
//! whatever UI sits on top of it. It owns the in-process [`AddressBook`] and the
//! [`DataStore`] it was loaded from, and exposes one line-oriented operation,
//! [`BookApi::execute`], which parses, dispatches and always produces a [`Reply`].
//!
//! ## Persistence
//!
//! The book is loaded once in [`BookApi::open`] and written back only by an
//! explicit `exit`/`close`. Changes made before that live only in memory and are
//! lost if the session ends any other way.
//!
//! ## Generic Over DataStore
//!
//! - Production: `BookApi<FileStore>`
//! - Testing: `BookApi<InMemoryStore>`

use crate::book::AddressBook;
use crate::commands::{self, CmdMessage, CmdResult, Command};
use crate::error::Result;
use crate::store::DataStore;

/// The answer to one input line.
#[derive(Debug)]
pub struct Reply {
    pub result: CmdResult,
    /// The session is over and the caller should stop reading input.
    pub exit: bool,
}

impl Reply {
    fn cont(result: CmdResult) -> Self {
        Self {
            result,
            exit: false,
        }
    }
}

/// The parting reply, also used by clients whose input simply ends.
pub fn goodbye() -> CmdResult {
    CmdResult::message(CmdMessage::info("Good bye!"))
}

pub struct BookApi<S: DataStore> {
    store: S,
    book: AddressBook,
}

impl<S: DataStore> BookApi<S> {
    /// Loads the current snapshot from `store`.
    pub fn open(store: S) -> Result<Self> {
        let book = store.load()?;
        tracing::info!(contacts = book.len(), "address book opened");
        Ok(Self { store, book })
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Runs one input line. Blank lines yield `None`.
    pub fn execute(&mut self, line: &str) -> Option<Reply> {
        let input = commands::parse_input(line)?;
        if input.command.parse::<Command>() == Ok(Command::Exit) {
            return Some(self.finish());
        }
        let result = commands::dispatch(&input.command, &input.args, &mut self.book);
        Some(Reply::cont(result))
    }

    /// Writes the book to the store.
    pub fn save(&mut self) -> Result<()> {
        self.store.save(&self.book)
    }

    /// A failed save keeps the session open so nothing is lost.
    fn finish(&mut self) -> Reply {
        match self.save() {
            Ok(()) => Reply {
                result: goodbye(),
                exit: true,
            },
            Err(err) => {
                tracing::warn!(error = %err, "saving address book failed");
                Reply::cont(CmdResult::message(commands::render_error(&err)))
            }
        }
    }
}
