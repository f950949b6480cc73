//! Search and date filtering over entries

use crate::domain::entry::{Entry, DATE_FORMAT};
use chrono::NaiveDate;

/// Criteria for the filtered view.
///
/// An entry matches when the date filter is empty or equals the entry's date
/// string exactly, and the search term is empty or occurs in the title or
/// the content (case-insensitive).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryFilter {
    term: String,
    date: Option<String>,
}

impl EntryFilter {
    /// Build a filter from raw presentation input. The search term is
    /// trimmed and case-folded; the date is compared as given.
    pub fn new(search: &str, date: &str) -> Self {
        EntryFilter {
            term: search.trim().to_lowercase(),
            date: (!date.is_empty()).then(|| date.to_string()),
        }
    }

    /// Filter that matches every entry
    pub fn all() -> Self {
        EntryFilter::default()
    }

    pub fn on_date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date.format(DATE_FORMAT).to_string());
        self
    }

    pub fn term(&self) -> &str {
        &self.term
    }

    pub fn date(&self) -> Option<&str> {
        self.date.as_deref()
    }

    pub fn is_empty(&self) -> bool {
        self.term.is_empty() && self.date.is_none()
    }

    pub fn matches(&self, entry: &Entry) -> bool {
        let matches_date = self.date.as_deref().map_or(true, |date| entry.date == date);
        let matches_term = self.term.is_empty()
            || entry.title.to_lowercase().contains(&self.term)
            || entry.content.to_lowercase().contains(&self.term);
        matches_date && matches_term
    }

    /// Entries that match, in their existing order
    pub fn apply<'a>(&self, entries: &'a [Entry]) -> Vec<&'a Entry> {
        entries.iter().filter(|entry| self.matches(entry)).collect()
    }
}
