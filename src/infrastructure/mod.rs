//! Infrastructure layer - Persistence and diary directory layout

pub mod backend;
pub mod config;
pub mod repository;

pub use backend::{FileBackend, MemoryBackend, PersistenceBackend};
pub use config::Config;
pub use repository::{DiaryRepository, FileSystemRepository};
