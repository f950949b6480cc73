//! Aggregate statistics over the whole collection

use crate::domain::entry::Entry;
use crate::domain::mood::Mood;

/// Number of entries written with one mood
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoodCount {
    pub mood: Mood,
    pub count: usize,
}

/// Summary shown above the entry list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JournalStats {
    pub total: usize,
    /// `updatedAt` of the most recently modified entry
    pub last_updated: Option<i64>,
    /// One count per mood, in `Mood::ALL` order, zeros included
    pub moods: Vec<MoodCount>,
}

impl JournalStats {
    /// Compute stats for a collection sorted by `updatedAt` descending
    pub fn compute(entries: &[Entry]) -> Self {
        let moods = Mood::ALL
            .into_iter()
            .map(|mood| MoodCount {
                mood,
                count: entries
                    .iter()
                    .filter(|entry| entry.mood.mood() == Some(mood))
                    .count(),
            })
            .collect();

        JournalStats {
            total: entries.len(),
            last_updated: entries.first().map(|entry| entry.updated_at),
            moods,
        }
    }

    pub fn count_for(&self, mood: Mood) -> usize {
        self.moods
            .iter()
            .find(|mc| mc.mood == mood)
            .map_or(0, |mc| mc.count)
    }
}
