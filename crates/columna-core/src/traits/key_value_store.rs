use std::sync::Arc;

use crate::errors::ColumnaResult;

/// Device-local key-value persistence, injected into the connection store
/// so components stay testable without a real database.
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`, if any.
    fn get(&self, key: &str) -> ColumnaResult<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> ColumnaResult<()>;

    /// Remove the entry under `key`. Removing a missing key is not an error.
    fn remove(&self, key: &str) -> ColumnaResult<()>;
}

/// Blanket impl: `Arc<T>` implements `KeyValueStore` by delegating to the
/// inner `T`, so a shared store can be handed to multiple components.
impl<T: KeyValueStore> KeyValueStore for Arc<T> {
    fn get(&self, key: &str) -> ColumnaResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> ColumnaResult<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> ColumnaResult<()> {
        (**self).remove(key)
    }
}
