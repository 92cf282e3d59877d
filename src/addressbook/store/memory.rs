use super::DataStore;
use crate::book::AddressBook;
use crate::error::Result;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    snapshot: Option<AddressBook>,
    saves: usize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_book(book: AddressBook) -> Self {
        Self {
            snapshot: Some(book),
            saves: 0,
        }
    }

    /// Number of times `save` has been called.
    pub fn saves(&self) -> usize {
        self.saves
    }

    pub fn snapshot(&self) -> Option<&AddressBook> {
        self.snapshot.as_ref()
    }
}

impl DataStore for InMemoryStore {
    fn load(&self) -> Result<AddressBook> {
        Ok(self.snapshot.clone().unwrap_or_default())
    }

    fn save(&mut self, book: &AddressBook) -> Result<()> {
        self.snapshot = Some(book.clone());
        self.saves += 1;
        Ok(())
    }
}
