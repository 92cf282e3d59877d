use crate::api::BookApi;
use crate::config::BookConfig;
use crate::error::{BookError, Result};
use crate::store::fs::FileStore;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

/// Environment variable that overrides the platform data directory.
pub const HOME_ENV: &str = "ADDRESSBOOK_HOME";

pub struct BookContext {
    pub api: BookApi<FileStore>,
    pub config: BookConfig,
    pub data_dir: PathBuf,
}

/// Picks the data directory: explicit flag, then `ADDRESSBOOK_HOME`, then the
/// platform's per-user data directory.
pub fn resolve_data_dir(flag: Option<&Path>, env: Option<&str>) -> Result<PathBuf> {
    if let Some(dir) = flag {
        return Ok(dir.to_path_buf());
    }
    if let Some(dir) = env.filter(|d| !d.is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    ProjectDirs::from("com", "addressbook", "addressbook")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| BookError::Store("Could not determine data directory".to_string()))
}

/// The snapshot path; relative names are resolved against `data_dir`.
pub fn data_file_path(data_dir: &Path, data_file: &str) -> PathBuf {
    let file = Path::new(data_file);
    if file.is_absolute() {
        file.to_path_buf()
    } else {
        data_dir.join(file)
    }
}

pub fn initialize(data_dir: PathBuf, file_override: Option<&str>) -> Result<BookContext> {
    let mut config = BookConfig::load(&data_dir)?;
    if let Some(file) = file_override {
        config.set_data_file(file);
    }

    let path = data_file_path(&data_dir, &config.data_file);
    tracing::debug!(data_dir = %data_dir.display(), path = %path.display(), "initializing");
    let api = BookApi::open(FileStore::new(path))?;

    Ok(BookContext {
        api,
        config,
        data_dir,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_resolve_prefers_flag() {
        let dir = resolve_data_dir(Some(Path::new("/tmp/flag")), Some("/tmp/env")).unwrap();
        assert_eq!(dir, PathBuf::from("/tmp/flag"));
    }

    #[test]
    fn test_resolve_falls_back_to_env() {
        let dir = resolve_data_dir(None, Some("/tmp/env")).unwrap();
        assert_eq!(dir, PathBuf::from("/tmp/env"));
    }

    #[test]
    fn test_data_file_path() {
        let dir = Path::new("/data");
        assert_eq!(
            data_file_path(dir, "book.json"),
            PathBuf::from("/data/book.json")
        );
        assert_eq!(
            data_file_path(dir, "/elsewhere/book.json"),
            PathBuf::from("/elsewhere/book.json")
        );
    }

    #[test]
    fn test_initialize_empty_dir() {
        let temp = TempDir::new().unwrap();
        let ctx = initialize(temp.path().to_path_buf(), None).unwrap();
        assert!(ctx.api.book().is_empty());
        assert_eq!(ctx.config, BookConfig::default());
    }

    #[test]
    fn test_initialize_uses_configured_file() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join("friends.json"),
            r#"[{"name": "Alice", "phones": ["1234567890"], "birthday": null}]"#,
        )
        .unwrap();

        let ctx = initialize(temp.path().to_path_buf(), Some("friends.json")).unwrap();
        assert!(ctx.api.book().find("Alice").is_some());
        assert_eq!(
            ctx.api.store().path(),
            temp.path().join("friends.json").as_path()
        );
    }
}
