#![forbid(unsafe_code)]

pub mod fixtures;
pub mod repository;

pub use fixtures::{FixtureError, seeded_repository};
pub use repository::{InMemoryRepository, Storage, StorageError};
