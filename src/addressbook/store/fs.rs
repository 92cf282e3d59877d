use super::DataStore;
use crate::book::AddressBook;
use crate::error::{BookError, Result};
use std::fs;
use std::path::{Path, PathBuf};

pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_parent(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(BookError::Io)?;
            }
        }
        Ok(())
    }

    fn temp_path(&self) -> Result<PathBuf> {
        let file_name = self
            .path
            .file_name()
            .ok_or_else(|| BookError::Store(format!("Invalid data file: {}", self.path.display())))?;
        let mut temp_name = file_name.to_os_string();
        temp_name.push(".tmp");
        Ok(self.path.with_file_name(temp_name))
    }
}

impl DataStore for FileStore {
    fn load(&self) -> Result<AddressBook> {
        if !self.path.exists() {
            tracing::info!(path = %self.path.display(), "no snapshot found, starting empty");
            return Ok(AddressBook::new());
        }
        let content = fs::read_to_string(&self.path).map_err(BookError::Io)?;
        let book: AddressBook = serde_json::from_str(&content).map_err(BookError::Serialization)?;
        tracing::debug!(path = %self.path.display(), contacts = book.len(), "snapshot loaded");
        Ok(book)
    }

    fn save(&mut self, book: &AddressBook) -> Result<()> {
        self.ensure_parent()?;
        let content = serde_json::to_string_pretty(book).map_err(BookError::Serialization)?;

        let temp = self.temp_path()?;
        fs::write(&temp, content).map_err(BookError::Io)?;
        fs::rename(&temp, &self.path).map_err(BookError::Io)?;

        tracing::debug!(path = %self.path.display(), contacts = book.len(), "snapshot saved");
        Ok(())
    }
}
