//! Error types for daybook

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for daybook
#[derive(Debug, Error)]
pub enum DiaryError {
    #[error("Not a daybook directory: {0}")]
    NotDiaryDirectory(PathBuf),

    #[error("Invalid time reference: {0}")]
    InvalidTimeReference(String),

    #[error("Entry not found: {0}")]
    EntryNotFound(String),

    #[error("Ambiguous entry id: {0}")]
    AmbiguousId(String),

    #[error("Invalid mood: {0}")]
    InvalidMood(String),

    #[error("Nothing to save: an entry needs a title or some content")]
    EmptyEntry,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl DiaryError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            DiaryError::NotDiaryDirectory(_) => 2,
            DiaryError::InvalidTimeReference(_) => 3,
            DiaryError::EntryNotFound(_) | DiaryError::AmbiguousId(_) => 4,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            DiaryError::NotDiaryDirectory(path) => {
                format!(
                    "Not a daybook directory: {}\n\n\
                    Suggestions:\n\
                    • Run 'daybook init' in this directory to start a new diary\n\
                    • Navigate to an existing daybook directory\n\
                    • Set DAYBOOK_ROOT environment variable to your diary path",
                    path.display()
                )
            }
            DiaryError::InvalidTimeReference(ref_str) => {
                format!(
                    "Invalid date: '{}'\n\n\
                    Valid dates:\n\
                    • today, yesterday, tomorrow\n\
                    • monday, tuesday, ..., sunday (most recent)\n\
                    • last monday, next friday, etc.\n\
                    • Specific dates: YYYY-MM-DD (e.g., 2025-01-17)\n\n\
                    Examples:\n\
                    daybook add --date yesterday --title 'Morning walk'\n\
                    daybook list --date 2025-01-15",
                    ref_str
                )
            }
            DiaryError::EntryNotFound(id) => {
                format!(
                    "No entry matches id: '{}'\n\n\
                    Suggestions:\n\
                    • Use 'daybook list' to see entry ids\n\
                    • Ids may be shortened to any unique prefix",
                    id
                )
            }
            DiaryError::AmbiguousId(prefix) => {
                format!(
                    "More than one entry starts with '{}'\n\n\
                    Suggestions:\n\
                    • Type a few more characters of the id\n\
                    • Use 'daybook list' to see full entry ids",
                    prefix
                )
            }
            DiaryError::InvalidMood(mood) => {
                format!(
                    "Invalid mood: '{}'\n\n\
                    Valid moods: bright, calm, reflective, stormy\n\
                    Example: daybook add --mood reflective --title 'Quiet evening'",
                    mood
                )
            }
            DiaryError::EmptyEntry => {
                format!(
                    "{}\n\n\
                    Example: daybook add --title 'Morning walk' --content 'Cold but bright'",
                    self
                )
            }
            DiaryError::Storage(msg) => {
                format!(
                    "{}\n\n\
                    Your change is kept for this session only.\n\
                    Check free space and permissions on the .daybook directory.",
                    msg
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using DiaryError
pub type Result<T> = std::result::Result<T, DiaryError>;
