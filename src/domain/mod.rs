//! Domain layer - Entries, moods and the views derived from them

pub mod clock;
pub mod entry;
pub mod filter;
pub mod mood;
pub mod stats;
pub mod time_ref;

pub use clock::{Clock, SystemClock};
pub use entry::{Draft, Entry, EntryId, DATE_FORMAT};
pub use filter::EntryFilter;
pub use mood::{Mood, MoodTag};
pub use stats::{JournalStats, MoodCount};
pub use time_ref::TimeReference;
