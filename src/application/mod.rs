//! Application layer - Use cases and orchestration

pub mod init;
pub mod manage_config;
pub mod session;
pub mod store;

pub use manage_config::ConfigService;
pub use session::{DiarySession, SubmitOutcome};
pub use store::{EntryStore, STORAGE_KEY};
