//! Behavioral tests for the entry store and edit session

use chrono::NaiveDate;
use daybook::application::{DiarySession, EntryStore, SubmitOutcome, STORAGE_KEY};
use daybook::domain::{Clock, Draft, Entry, EntryFilter, EntryId, Mood};
use daybook::infrastructure::{MemoryBackend, PersistenceBackend};
use std::cell::Cell;

/// Clock whose time only moves when told to
struct ManualClock {
    now: Cell<i64>,
}

impl ManualClock {
    fn new() -> Self {
        ManualClock {
            now: Cell::new(1_704_067_200_000),
        }
    }

    fn advance(&self, millis: i64) {
        self.now.set(self.now.get() + millis);
    }
}

impl Clock for ManualClock {
    fn now_millis(&self) -> i64 {
        self.now.get()
    }

    fn today(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
    }
}

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
}

fn is_sorted_newest_first(entries: &[Entry]) -> bool {
    entries
        .windows(2)
        .all(|pair| pair[0].updated_at >= pair[1].updated_at)
}

#[test]
fn test_collection_stays_sorted_across_mixed_operations() {
    let clock = ManualClock::new();
    let mut store = EntryStore::with_clock(MemoryBackend::new(), &clock);
    let mut ids: Vec<EntryId> = Vec::new();

    // Small LCG so the sequence is deterministic
    let mut seed: u64 = 0x5eed;
    let mut next = move || {
        seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        (seed >> 33) as usize
    };

    for step in 0..200 {
        // Some steps share a timestamp
        clock.advance((next() % 3) as i64);

        match next() % 4 {
            0 | 1 => {
                let draft = Draft::blank(day(1)).with_title(format!("entry {}", step));
                if let Some(entry) = store.create(&draft) {
                    ids.push(entry.id);
                }
            }
            2 if !ids.is_empty() => {
                let id = &ids[next() % ids.len()];
                let draft = Draft::blank(day(2)).with_content(format!("edit {}", step));
                store.update(id, &draft).unwrap();
            }
            _ if !ids.is_empty() => {
                let id = ids.swap_remove(next() % ids.len());
                assert!(store.delete(&id));
            }
            _ => {}
        }

        assert!(is_sorted_newest_first(store.entries()), "unsorted at step {}", step);
        assert_eq!(store.len(), ids.len());
    }
}

#[test]
fn test_whitespace_only_create_does_not_change_length() {
    let clock = ManualClock::new();
    let mut store = EntryStore::with_clock(MemoryBackend::new(), &clock);
    store.create(&Draft::blank(day(1)).with_title("kept"));

    let blank = Draft::blank(day(1)).with_title("").with_content("   ");
    assert!(store.create(&blank).is_none());
    assert_eq!(store.len(), 1);
}

#[test]
fn test_create_then_load_round_trips() {
    let clock = ManualClock::new();
    let mut store = EntryStore::with_clock(MemoryBackend::new(), &clock);

    store.create(
        &Draft::blank(day(1))
            .with_title("Morning walk")
            .with_content("Frost")
            .with_mood(Mood::Bright),
    );
    clock.advance(10);
    store.create(&Draft::blank(day(2)).with_content("No title").with_mood(Mood::Stormy));

    let raw = store.backend().get(STORAGE_KEY).unwrap().unwrap();
    let mut reloaded = EntryStore::with_clock(MemoryBackend::with_value(STORAGE_KEY, &raw), &clock);
    assert_eq!(reloaded.load(), 2);
    assert_eq!(reloaded.entries(), store.entries());
}

#[test]
fn test_delete_of_absent_id_is_idempotent() {
    let clock = ManualClock::new();
    let mut store = EntryStore::with_clock(MemoryBackend::new(), &clock);
    let entry = store.create(&Draft::blank(day(1)).with_title("only")).unwrap();

    assert!(store.delete(&entry.id));
    let after_first = store.entries().to_vec();
    assert!(!store.delete(&entry.id));
    assert_eq!(store.entries(), after_first.as_slice());
}

#[test]
fn test_filtered_view_examples() {
    let clock = ManualClock::new();
    let mut store = EntryStore::with_clock(MemoryBackend::new(), &clock);
    let a = store
        .create(&Draft::blank(day(1)).with_title("Morning walk"))
        .unwrap();
    clock.advance(1);
    let b = store
        .create(&Draft::blank(day(2)).with_title("Evening read"))
        .unwrap();

    let all = store.filtered_view(&EntryFilter::new("", ""));
    assert_eq!(all, store.entries().iter().collect::<Vec<_>>());
    assert_eq!(all[0].id, b.id);

    let walk = store.filtered_view(&EntryFilter::new("walk", ""));
    assert_eq!(walk.len(), 1);
    assert_eq!(walk[0].id, a.id);

    let second = store.filtered_view(&EntryFilter::new("", "2024-01-02"));
    assert_eq!(second.len(), 1);
    assert_eq!(second[0].id, b.id);

    assert!(store
        .filtered_view(&EntryFilter::new("walk", "2024-01-02"))
        .is_empty());
}

#[test]
fn test_mood_stats_on_empty_collection() {
    let store = EntryStore::with_clock(MemoryBackend::new(), ManualClock::new());
    let stats = store.stats();

    assert_eq!(stats.total, 0);
    assert_eq!(stats.last_updated, None);
    for mood in Mood::ALL {
        assert_eq!(stats.count_for(mood), 0);
    }
    assert_eq!(stats.moods.len(), Mood::ALL.len());
}

#[test]
fn test_cancelled_edit_leaves_collection_unchanged() {
    let clock = ManualClock::new();
    let mut session = DiarySession::new(EntryStore::with_clock(MemoryBackend::new(), &clock));
    *session.draft_mut() = Draft::blank(day(1)).with_title("original");
    let SubmitOutcome::Created(entry) = session.submit().unwrap() else {
        panic!("expected create");
    };
    let persisted_before = session.store().backend().get(STORAGE_KEY).unwrap();

    clock.advance(5);
    session.begin_edit(&entry.id).unwrap();
    session.draft_mut().title = "rewritten".to_string();
    session.draft_mut().set_mood(Mood::Stormy);
    session.cancel_edit();

    assert_eq!(session.store().entries(), &[entry]);
    assert_eq!(
        session.store().backend().get(STORAGE_KEY).unwrap(),
        persisted_before
    );
}

#[test]
fn test_deleting_entry_under_edit_turns_next_submit_into_create() {
    let clock = ManualClock::new();
    let mut session = DiarySession::new(EntryStore::with_clock(MemoryBackend::new(), &clock));
    *session.draft_mut() = Draft::blank(day(1)).with_title("doomed");
    let SubmitOutcome::Created(doomed) = session.submit().unwrap() else {
        panic!("expected create");
    };

    session.begin_edit(&doomed.id).unwrap();
    session.delete(&doomed.id);
    assert!(!session.is_editing());

    clock.advance(1);
    session.draft_mut().title = "fresh".to_string();
    match session.submit().unwrap() {
        SubmitOutcome::Created(entry) => assert_ne!(entry.id, doomed.id),
        other => panic!("expected create, got {:?}", other),
    }
    assert_eq!(session.store().len(), 1);
}

#[test]
fn test_missing_or_null_mood_survives_load_and_mutation() {
    let raw = r#"[{"id":"keep","date":"2024-01-01","title":"Precious","content":"","updatedAt":5},
                  {"id":"null","date":"2024-01-01","title":"Also kept","content":"","mood":null,"updatedAt":4},
                  {"id":"b","date":"2024-01-01","title":"B","content":"","mood":"calm","updatedAt":3}]"#;
    let clock = ManualClock::new();
    let mut store = EntryStore::with_clock(MemoryBackend::with_value(STORAGE_KEY, raw), &clock);
    assert_eq!(store.load(), 3);

    store.create(&Draft::blank(day(2)).with_title("another"));
    store.delete(&EntryId::from("b"));

    let persisted = store.backend().get(STORAGE_KEY).unwrap().unwrap();
    assert!(persisted.contains("Precious"));
    assert!(persisted.contains(r#""mood":null"#));
    let mut reloaded = EntryStore::with_clock(MemoryBackend::with_value(STORAGE_KEY, &persisted), &clock);
    assert_eq!(reloaded.load(), 3);
    let keep = reloaded.get(&EntryId::from("keep")).unwrap();
    assert!(keep.mood.is_missing());
    assert_eq!(reloaded.stats().moods.iter().map(|mc| mc.count).sum::<usize>(), 1);
}
