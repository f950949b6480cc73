//! Config management use case

use crate::domain::Mood;
use crate::error::{DiaryError, Result};
use crate::infrastructure::{Config, DiaryRepository, FileSystemRepository};
use std::str::FromStr;

/// Service for reading and changing diary configuration
pub struct ConfigService {
    repository: FileSystemRepository,
}

impl ConfigService {
    pub fn new(repository: FileSystemRepository) -> Self {
        ConfigService { repository }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.repository.load_config()?;

        match key {
            "default_mood" => Ok(config.default_mood.to_string()),
            "created" => Ok(config.created.to_rfc3339()),
            _ => Err(DiaryError::Config(format!(
                "Unknown config key: '{}'. Valid keys are: default_mood, created",
                key
            ))),
        }
    }

    /// Set a config value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.repository.load_config()?;

        match key {
            "default_mood" => {
                config.default_mood = Mood::from_str(value)?;
            }
            "created" => {
                return Err(DiaryError::Config(
                    "Cannot modify 'created' field (read-only)".to_string(),
                ));
            }
            _ => {
                return Err(DiaryError::Config(format!(
                    "Unknown config key: '{}'. Valid keys are: default_mood",
                    key
                )));
            }
        }

        self.repository.save_config(&config)
    }

    /// Full configuration
    pub fn list(&self) -> Result<Config> {
        self.repository.load_config()
    }
}
