//! Edit session: the entry form, the edit target and the active filters

use crate::application::store::EntryStore;
use crate::domain::{Clock, Draft, Entry, EntryFilter, EntryId, JournalStats, Mood, SystemClock};
use crate::error::{DiaryError, Result};
use crate::infrastructure::{DiaryRepository, FileBackend, FileSystemRepository, PersistenceBackend};

/// Result of submitting the entry form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Created(Entry),
    Updated(Entry),
    /// Blank draft on create; the form is left as it was
    Rejected,
}

/// Presentation state layered over an [`EntryStore`]
pub struct DiarySession<B, C = SystemClock> {
    store: EntryStore<B, C>,
    draft: Draft,
    editing: Option<EntryId>,
    search: String,
    date_filter: String,
    default_mood: Mood,
}

impl DiarySession<FileBackend> {
    /// Session over the diary at `repository`, with entries loaded
    pub fn open(repository: &FileSystemRepository) -> Result<Self> {
        let config = repository.load_config()?;
        let store = EntryStore::open(repository.backend());
        Ok(DiarySession::new(store).with_default_mood(config.default_mood))
    }
}

impl<B: PersistenceBackend, C: Clock> DiarySession<B, C> {
    pub fn new(store: EntryStore<B, C>) -> Self {
        let draft = Draft::blank(store.clock().today());
        DiarySession {
            store,
            draft,
            editing: None,
            search: String::new(),
            date_filter: String::new(),
            default_mood: Mood::default(),
        }
    }

    /// Mood preselected whenever the form is reset
    pub fn with_default_mood(mut self, mood: Mood) -> Self {
        self.default_mood = mood;
        if self.editing.is_none() {
            self.draft.set_mood(mood);
        }
        self
    }

    /// Load `id` into the form; the next submit updates it
    pub fn begin_edit(&mut self, id: &EntryId) -> Result<()> {
        let entry = self
            .store
            .get(id)
            .ok_or_else(|| DiaryError::EntryNotFound(id.to_string()))?;
        self.draft = Draft::from_entry(entry);
        self.editing = Some(id.clone());
        Ok(())
    }

    /// Drop the edit target and any unsaved form changes
    pub fn cancel_edit(&mut self) {
        self.reset_form();
    }

    /// Commit the form: update the edit target if there is one, otherwise
    /// create a new entry. Successful submits reset the form.
    pub fn submit(&mut self) -> Result<SubmitOutcome> {
        let outcome = match &self.editing {
            Some(id) => SubmitOutcome::Updated(self.store.update(id, &self.draft)?),
            None => match self.store.create(&self.draft) {
                Some(entry) => SubmitOutcome::Created(entry),
                None => return Ok(SubmitOutcome::Rejected),
            },
        };
        self.reset_form();
        Ok(outcome)
    }

    /// Delete `id`, ending the edit session if it targeted that entry
    pub fn delete(&mut self, id: &EntryId) -> bool {
        let removed = self.store.delete(id);
        if self.editing.as_ref() == Some(id) {
            self.reset_form();
        }
        removed
    }

    pub fn set_search(&mut self, search: &str) {
        self.search = search.to_string();
    }

    pub fn set_date_filter(&mut self, date: &str) {
        self.date_filter = date.to_string();
    }

    pub fn clear_date_filter(&mut self) {
        self.date_filter.clear();
    }

    pub fn filter(&self) -> EntryFilter {
        EntryFilter::new(&self.search, &self.date_filter)
    }

    /// Entries matching the current search and date filter
    pub fn visible_entries(&self) -> Vec<&Entry> {
        self.store.filtered_view(&self.filter())
    }

    /// Stats over the whole collection, ignoring filters
    pub fn stats(&self) -> JournalStats {
        self.store.stats()
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut Draft {
        &mut self.draft
    }

    pub fn editing(&self) -> Option<&EntryId> {
        self.editing.as_ref()
    }

    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    pub fn store(&self) -> &EntryStore<B, C> {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut EntryStore<B, C> {
        &mut self.store
    }

    pub fn take_warning(&mut self) -> Option<DiaryError> {
        self.store.take_warning()
    }

    fn reset_form(&mut self) {
        self.draft = Draft::blank(self.store.clock().today()).with_mood(self.default_mood);
        self.editing = None;
    }
}
