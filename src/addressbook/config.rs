use crate::error::{BookError, Result};
use serde::Deserialize;
use std::fs;
use std::io;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";

/// Optional `config.json` in the data directory. Every field may be omitted.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct BookConfig {
    /// Snapshot file name, relative to the data directory unless absolute
    pub data_file: String,

    /// Prompt shown before each command
    pub prompt: String,
}

impl Default for BookConfig {
    fn default() -> Self {
        Self {
            data_file: "addressbook.json".to_string(),
            prompt: "Enter a command: ".to_string(),
        }
    }
}

impl BookConfig {
    /// Reads `config.json` from `data_dir`; a missing file means defaults.
    pub fn load(data_dir: &Path) -> Result<Self> {
        let path = data_dir.join(CONFIG_FILENAME);
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => return Err(BookError::Io(e)),
        };
        serde_json::from_str(&content)
            .map_err(|e| BookError::Store(format!("Invalid config {}: {}", path.display(), e)))
    }

    pub fn set_data_file(&mut self, file: &str) {
        self.data_file = file.to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_gives_defaults() {
        let temp = TempDir::new().unwrap();
        let config = BookConfig::load(&temp.path().join("missing")).unwrap();
        assert_eq!(config.data_file, "addressbook.json");
        assert_eq!(config.prompt, "Enter a command: ");
    }

    #[test]
    fn omitted_fields_keep_defaults() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(CONFIG_FILENAME), r#"{"prompt": "> "}"#).unwrap();

        let config = BookConfig::load(temp.path()).unwrap();
        assert_eq!(config.prompt, "> ");
        assert_eq!(config.data_file, "addressbook.json");
    }

    #[test]
    fn invalid_config_names_the_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(CONFIG_FILENAME);
        fs::write(&path, "{ data_file = 3 }").unwrap();

        let err = BookConfig::load(temp.path()).unwrap_err();
        assert!(matches!(err, BookError::Store(_)));
        let message = err.to_string();
        assert!(message.starts_with("Store error: Invalid config "));
        assert!(message.contains(&path.display().to_string()));
    }

    #[test]
    fn data_file_override() {
        let mut config = BookConfig::default();
        config.set_data_file("friends.json");
        assert_eq!(config.data_file, "friends.json");
    }
}
