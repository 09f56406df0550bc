#![forbid(unsafe_code)]

pub mod repository;
pub mod sqlite;

pub use repository::{ID_TOKEN_KEY, InMemorySessionStore, SessionStore, Storage, StorageError};
pub use sqlite::{SqliteInitError, SqliteSessionStore};
