//! Initialize diary use case

use crate::domain::Mood;
use crate::error::Result;
use crate::infrastructure::{Config, DiaryRepository, FileSystemRepository};
use log::info;
use std::fs;
use std::path::Path;

/// Create a new diary at `path` with an empty entry collection.
pub fn init(path: &Path, default_mood: Mood) -> Result<FileSystemRepository> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }

    let repo = FileSystemRepository::new(path.to_path_buf());
    repo.initialize()?;
    repo.save_config(&Config::new(default_mood))?;

    info!("Initialized diary at {}", path.display());
    Ok(repo)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::store::{EntryStore, STORAGE_KEY};
    use crate::infrastructure::PersistenceBackend;
    use tempfile::TempDir;

    #[test]
    fn test_init_creates_diary() {
        let temp = TempDir::new().unwrap();
        let repo = init(temp.path(), Mood::Stormy).unwrap();

        assert!(repo.is_initialized());
        assert_eq!(repo.load_config().unwrap().default_mood, Mood::Stormy);
        assert_eq!(repo.backend().get(STORAGE_KEY).unwrap(), None);
        assert!(EntryStore::open(repo.backend()).is_empty());
    }

    #[test]
    fn test_init_creates_missing_directory() {
        let temp = TempDir::new().unwrap();
        let target = temp.path().join("new").join("diary");
        init(&target, Mood::Calm).unwrap();
        assert!(target.join(".daybook/config.toml").exists());
    }

    #[test]
    fn test_init_twice_fails() {
        let temp = TempDir::new().unwrap();
        init(temp.path(), Mood::Calm).unwrap();
        assert!(init(temp.path(), Mood::Calm).is_err());
    }
}
