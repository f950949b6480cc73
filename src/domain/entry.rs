//! Diary entries and the drafts they are written from

use crate::domain::mood::{Mood, MoodTag};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Date format used for entry dates and date filters
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Opaque, immutable entry identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(String);

impl EntryId {
    /// Generate a fresh random id
    pub fn generate() -> Self {
        EntryId(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Short form used in listings
    pub fn short(&self) -> &str {
        self.0.get(..8).unwrap_or(&self.0)
    }
}

impl From<&str> for EntryId {
    fn from(id: &str) -> Self {
        EntryId(id.to_string())
    }
}

impl From<String> for EntryId {
    fn from(id: String) -> Self {
        EntryId(id)
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single diary record.
///
/// Field names serialize in camelCase (`updatedAt`) to keep the persisted
/// layout shared with the browser build. `date` stays a plain string so that
/// stored values round-trip untouched even when they are not valid dates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    pub id: EntryId,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default, skip_serializing_if = "MoodTag::is_missing")]
    pub mood: MoodTag,
    /// Milliseconds since the Unix epoch of the last create or update
    pub updated_at: i64,
}

impl Entry {
    /// Build a new entry from a draft
    pub fn new(id: EntryId, draft: &Draft, updated_at: i64) -> Self {
        Entry {
            id,
            date: draft.date.clone(),
            title: draft.title.clone(),
            content: draft.content.clone(),
            mood: draft.mood.clone(),
            updated_at,
        }
    }

    /// Overwrite every mutable field with the draft's values
    pub fn apply(&mut self, draft: &Draft, updated_at: i64) {
        self.date = draft.date.clone();
        self.title = draft.title.clone();
        self.content = draft.content.clone();
        self.mood = draft.mood.clone();
        self.updated_at = updated_at;
    }
}

/// Unsaved field values collected by the entry form.
///
/// `date` and `mood` hold stored values as-is so that editing an entry only
/// rewrites the fields that were actually changed. New values go through
/// [`Draft::set_date`] and [`Draft::set_mood`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Draft {
    pub date: String,
    pub title: String,
    pub content: String,
    pub mood: MoodTag,
}

impl Draft {
    /// Empty form for the given day
    pub fn blank(today: NaiveDate) -> Self {
        Draft {
            date: today.format(DATE_FORMAT).to_string(),
            title: String::new(),
            content: String::new(),
            mood: Mood::default().into(),
        }
    }

    /// Form prefilled with an existing entry's stored values
    pub fn from_entry(entry: &Entry) -> Self {
        Draft {
            date: entry.date.clone(),
            title: entry.title.clone(),
            content: entry.content.clone(),
            mood: entry.mood.clone(),
        }
    }

    pub fn set_date(&mut self, date: NaiveDate) {
        self.date = date.format(DATE_FORMAT).to_string();
    }

    pub fn set_mood(&mut self, mood: Mood) {
        self.mood = mood.into();
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn with_mood(mut self, mood: Mood) -> Self {
        self.set_mood(mood);
        self
    }

    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.set_date(date);
        self
    }

    /// True when both title and content are empty after trimming
    pub fn is_blank(&self) -> bool {
        self.title.trim().is_empty() && self.content.trim().is_empty()
    }
}
