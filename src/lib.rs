//! daybook - Personal diary kept on local storage
//!
//! Entries carry a date, title, content and mood. The [`application::EntryStore`]
//! keeps them sorted by last change and writes every mutation through a
//! pluggable [`infrastructure::PersistenceBackend`].

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::DiaryError;
