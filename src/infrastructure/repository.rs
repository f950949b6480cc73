//! Diary directory discovery and layout

use crate::error::{DiaryError, Result};
use crate::infrastructure::backend::FileBackend;
use crate::infrastructure::config::{Config, DIARY_DIR};
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable pointing at a diary root
pub const ROOT_ENV: &str = "DAYBOOK_ROOT";

/// Abstract repository for diary directories
pub trait DiaryRepository {
    /// Load configuration from .daybook/config.toml
    fn load_config(&self) -> Result<Config>;

    /// Save configuration to .daybook/config.toml
    fn save_config(&self, config: &Config) -> Result<()>;

    /// Check if .daybook directory exists
    fn is_initialized(&self) -> bool;

    /// Create .daybook directory structure
    fn initialize(&self) -> Result<()>;
}

/// File system implementation of DiaryRepository
#[derive(Debug, Clone)]
pub struct FileSystemRepository {
    pub root: PathBuf,
}

impl FileSystemRepository {
    pub fn new(root: PathBuf) -> Self {
        FileSystemRepository { root }
    }

    /// Find the diary root: DAYBOOK_ROOT first, then walk up from the
    /// current directory
    pub fn discover() -> Result<Self> {
        if let Ok(root_path) = std::env::var(ROOT_ENV) {
            let path = PathBuf::from(root_path);
            if Self::has_diary_dir(&path) {
                return Ok(FileSystemRepository::new(path));
            }
            return Err(DiaryError::Config(format!(
                "{} is set to '{}' but no {} directory found. \
                Run 'daybook init' in that directory or unset {}.",
                ROOT_ENV,
                path.display(),
                DIARY_DIR,
                ROOT_ENV
            )));
        }

        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Walk up from `start` until a directory containing .daybook is found
    pub fn discover_from(start: &Path) -> Result<Self> {
        start
            .ancestors()
            .find(|dir| Self::has_diary_dir(dir))
            .map(|dir| FileSystemRepository::new(dir.to_path_buf()))
            .ok_or_else(|| DiaryError::NotDiaryDirectory(start.to_path_buf()))
    }

    fn has_diary_dir(path: &Path) -> bool {
        path.join(DIARY_DIR).is_dir()
    }

    /// Directory holding config and persisted entries
    pub fn diary_dir(&self) -> PathBuf {
        self.root.join(DIARY_DIR)
    }

    /// Persistence backend storing entries inside .daybook
    pub fn backend(&self) -> FileBackend {
        FileBackend::new(self.diary_dir())
    }
}

impl DiaryRepository for FileSystemRepository {
    fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    fn is_initialized(&self) -> bool {
        Self::has_diary_dir(&self.root)
    }

    fn initialize(&self) -> Result<()> {
        let diary_dir = self.diary_dir();

        if diary_dir.exists() {
            return Err(DiaryError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir(&diary_dir)?;
        Ok(())
    }
}
