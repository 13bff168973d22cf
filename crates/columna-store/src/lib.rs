//! # columna-store
//!
//! Persistence layer: a SQLite-backed key-value store, an in-memory
//! variant for tests, and the [`ConnectionStore`] that owns the persisted
//! server address.

mod connection_store;
mod memory_store;
mod sqlite_store;

pub use connection_store::ConnectionStore;
pub use memory_store::MemoryStore;
pub use sqlite_store::SqliteStore;
