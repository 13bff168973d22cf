/// Persistence-layer errors for the key-value store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("SQLite error: {message}")]
    Sqlite { message: String },

    #[error("I/O error: {message}")]
    Io { message: String },
}
