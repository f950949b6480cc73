//! Output formatting utilities

use crate::domain::{Entry, JournalStats};
use chrono::{DateTime, Local};

const UNTITLED: &str = "Untitled note";
const NO_CONTENT: &str = "No content added yet.";
const NO_TIME: &str = "—";

/// Local time of a millisecond timestamp, e.g. `Jan 5, 09:30`
pub fn format_time(timestamp: i64) -> String {
    DateTime::from_timestamp_millis(timestamp)
        .map(|utc| utc.with_timezone(&Local).format("%b %-d, %H:%M").to_string())
        .unwrap_or_else(|| NO_TIME.to_string())
}

/// Format a filtered list of entries for display
pub fn format_entry_list(entries: &[&Entry], full_ids: bool) -> String {
    if entries.is_empty() {
        return "No entries found".to_string();
    }

    let mut output = String::new();
    for (i, entry) in entries.iter().enumerate() {
        if i > 0 {
            output.push('\n');
        }
        output.push_str(&format_entry(entry, full_ids));
    }
    output
}

fn format_entry(entry: &Entry, full_ids: bool) -> String {
    let id = if full_ids {
        entry.id.as_str()
    } else {
        entry.id.short()
    };
    let title = if entry.title.is_empty() {
        UNTITLED
    } else {
        entry.title.as_str()
    };

    let mut output = format!("{}  {}  {}  [{}]\n", id, entry.date, title, entry.mood.label());
    if entry.content.is_empty() {
        output.push_str(&format!("    {}\n", NO_CONTENT));
    } else {
        for line in entry.content.lines() {
            output.push_str(&format!("    {}\n", line));
        }
    }
    output.push_str(&format!("    Updated • {}\n", format_time(entry.updated_at)));
    output
}

/// Format the stats block
pub fn format_stats(stats: &JournalStats) -> String {
    let last_saved = stats
        .last_updated
        .map(format_time)
        .unwrap_or_else(|| NO_TIME.to_string());
    let moods: Vec<String> = stats
        .moods
        .iter()
        .map(|mc| format!("{} {}", mc.mood.icon(), mc.count))
        .collect();

    format!(
        "Total entries: {}\nLast saved: {}\nMood mix: {}\n",
        stats.total,
        last_saved,
        moods.join("  ")
    )
}
