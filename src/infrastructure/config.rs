//! Configuration management

use crate::domain::Mood;
use crate::error::{DiaryError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Name of the marker directory holding config and entries
pub const DIARY_DIR: &str = ".daybook";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Mood preselected on new drafts
    #[serde(default)]
    pub default_mood: Mood,
    pub created: DateTime<Utc>,
}

impl Config {
    pub fn new(default_mood: Mood) -> Self {
        Config {
            default_mood,
            created: Utc::now(),
        }
    }

    /// Load config from .daybook/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(DIARY_DIR).join("config.toml");

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                DiaryError::NotDiaryDirectory(path.to_path_buf())
            } else {
                DiaryError::Io(e)
            }
        })?;

        toml::from_str(&contents)
            .map_err(|e| DiaryError::Config(format!("Failed to parse config.toml: {}", e)))
    }

    /// Save config to .daybook/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let diary_dir = path.join(DIARY_DIR);
        if !diary_dir.exists() {
            fs::create_dir(&diary_dir)?;
        }

        let contents = toml::to_string_pretty(self)?;
        fs::write(diary_dir.join("config.toml"), contents)?;

        Ok(())
    }
}
