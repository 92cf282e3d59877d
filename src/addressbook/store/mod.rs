//! # Storage Layer
//!
//! The address book is persisted as a single snapshot: loading yields the whole
//! [`AddressBook`], saving replaces the whole snapshot. The [`DataStore`] trait keeps
//! the rest of the crate independent of where that snapshot lives.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production storage, one pretty-printed JSON file
//!   - A missing file loads as an empty book
//!   - Saves go to a temporary sibling file first and are renamed into place
//!
//! - [`memory::InMemoryStore`]: In-memory storage for testing
//!   - No persistence
//!   - Lets tests inspect exactly what was saved
//!
//! ## Storage Format
//!
//! ```text
//! [
//!   { "name": "Alice", "phones": ["1234567890"], "birthday": "14.06.1990" },
//!   { "name": "Bob", "phones": [], "birthday": null }
//! ]
//! ```
//!
//! Records are written in insertion order and every field is re-validated on load.

use crate::book::AddressBook;
use crate::error::Result;

pub mod fs;
pub mod memory;

/// Abstract interface for address book persistence.
pub trait DataStore {
    /// Load the last saved snapshot, or an empty book if none exists
    fn load(&self) -> Result<AddressBook>;

    /// Durably replace the snapshot with `book`
    fn save(&mut self, book: &AddressBook) -> Result<()>;
}
