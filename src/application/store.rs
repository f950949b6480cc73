//! Entry store: the in-memory collection and its persisted copy

use crate::domain::{Clock, Draft, Entry, EntryFilter, EntryId, JournalStats, SystemClock};
use crate::error::{DiaryError, Result};
use crate::infrastructure::PersistenceBackend;
use log::{debug, warn};

/// Backend key holding the serialized collection
pub const STORAGE_KEY: &str = "toy-diary-entries";

/// Owns the diary entries, kept sorted by `updated_at` descending.
///
/// Every mutation is written through to the backend before it returns. A
/// failed write leaves the in-memory collection as the source of truth for
/// the session; the failure is logged and kept for [`take_warning`].
///
/// [`take_warning`]: EntryStore::take_warning
pub struct EntryStore<B, C = SystemClock> {
    backend: B,
    clock: C,
    entries: Vec<Entry>,
    warning: Option<DiaryError>,
}

impl<B: PersistenceBackend> EntryStore<B> {
    /// Empty store on the system clock. Call [`EntryStore::load`] to read
    /// persisted entries.
    pub fn new(backend: B) -> Self {
        EntryStore::with_clock(backend, SystemClock)
    }

    /// Store on the system clock with persisted entries loaded
    pub fn open(backend: B) -> Self {
        let mut store = EntryStore::new(backend);
        store.load();
        store
    }
}

impl<B: PersistenceBackend, C: Clock> EntryStore<B, C> {
    pub fn with_clock(backend: B, clock: C) -> Self {
        EntryStore {
            backend,
            clock,
            entries: Vec::new(),
            warning: None,
        }
    }

    /// Replace the live collection with the persisted one.
    ///
    /// A missing value yields an empty collection. Unreadable or malformed
    /// values are logged and also yield an empty collection. Returns the
    /// number of entries loaded.
    pub fn load(&mut self) -> usize {
        self.entries = match self.backend.get(STORAGE_KEY) {
            Ok(None) => {
                debug!("No saved entries under '{}'", STORAGE_KEY);
                Vec::new()
            }
            Ok(Some(raw)) => match serde_json::from_str::<Vec<Entry>>(&raw) {
                Ok(entries) => entries,
                Err(e) => {
                    warn!("Failed to load saved entries: {}", e);
                    Vec::new()
                }
            },
            Err(e) => {
                warn!("Failed to read saved entries: {}", e);
                Vec::new()
            }
        };
        self.sort();
        debug!("Loaded {} entries", self.entries.len());
        self.entries.len()
    }

    /// Write the current collection to the backend
    pub fn save(&mut self) -> Result<()> {
        let serialized = serde_json::to_string(&self.entries)?;
        self.backend.set(STORAGE_KEY, &serialized)?;
        debug!("Saved {} entries", self.entries.len());
        Ok(())
    }

    /// Add a new entry from `draft`.
    ///
    /// Returns `None` without touching the collection when both title and
    /// content are blank.
    pub fn create(&mut self, draft: &Draft) -> Option<Entry> {
        if draft.is_blank() {
            debug!("Rejected blank draft");
            return None;
        }

        let entry = Entry::new(self.fresh_id(), draft, self.clock.now_millis());
        self.entries.insert(0, entry.clone());
        self.sort();
        self.persist();
        Some(entry)
    }

    /// Overwrite the entry `id` with `draft` and bump its timestamp.
    ///
    /// Blank drafts are accepted here: an existing entry may be emptied.
    pub fn update(&mut self, id: &EntryId, draft: &Draft) -> Result<Entry> {
        let now = self.clock.now_millis();
        let entry = self
            .entries
            .iter_mut()
            .find(|entry| &entry.id == id)
            .ok_or_else(|| DiaryError::EntryNotFound(id.to_string()))?;

        entry.apply(draft, now);
        let updated = entry.clone();
        self.sort();
        self.persist();
        Ok(updated)
    }

    /// Remove the entry `id`. Unknown ids are a no-op. Returns whether an
    /// entry was removed.
    pub fn delete(&mut self, id: &EntryId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| &entry.id != id);
        let removed = self.entries.len() != before;
        if !removed {
            debug!("Delete of unknown entry {} ignored", id);
        }
        self.persist();
        removed
    }

    /// Entries matching `filter`, newest first
    pub fn filtered_view(&self, filter: &EntryFilter) -> Vec<&Entry> {
        filter.apply(&self.entries)
    }

    pub fn stats(&self) -> JournalStats {
        JournalStats::compute(&self.entries)
    }

    /// All entries, newest first
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn get(&self, id: &EntryId) -> Option<&Entry> {
        self.entries.iter().find(|entry| &entry.id == id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Find the entry whose id is `prefix` or uniquely starts with it
    pub fn resolve_id(&self, prefix: &str) -> Result<EntryId> {
        let prefix = prefix.trim();
        if prefix.is_empty() {
            return Err(DiaryError::EntryNotFound(prefix.to_string()));
        }
        if let Some(entry) = self.entries.iter().find(|e| e.id.as_str() == prefix) {
            return Ok(entry.id.clone());
        }

        let mut matches = self
            .entries
            .iter()
            .filter(|e| e.id.as_str().starts_with(prefix));
        match (matches.next(), matches.next()) {
            (Some(entry), None) => Ok(entry.id.clone()),
            (Some(_), Some(_)) => Err(DiaryError::AmbiguousId(prefix.to_string())),
            (None, _) => Err(DiaryError::EntryNotFound(prefix.to_string())),
        }
    }

    /// The last persistence failure, if any, cleared on read
    pub fn take_warning(&mut self) -> Option<DiaryError> {
        self.warning.take()
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    fn fresh_id(&self) -> EntryId {
        loop {
            let id = EntryId::generate();
            if self.get(&id).is_none() {
                return id;
            }
        }
    }

    fn sort(&mut self) {
        self.entries.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
    }

    fn persist(&mut self) {
        if let Err(e) = self.save() {
            warn!("Failed to save entries: {}", e);
            self.warning = Some(e);
        }
    }
}
