//! The connection store owns the persisted server address.
//!
//! Lifecycle: load at startup, write on save, clear on change. The
//! underlying key-value store is an injected capability, never a global.

use columna_core::constants::SERVER_IP_KEY;
use columna_core::errors::ColumnaResult;
use columna_core::{KeyValueStore, ServerAddress};

/// Exclusive owner of the persisted server address. Other components only
/// borrow the address per call.
pub struct ConnectionStore<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> ConnectionStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Read the persisted address, if any. A missing entry is `None`, not
    /// an error. A stored value that no longer validates is treated as
    /// absent and logged, so a corrupt entry cannot wedge startup.
    pub fn load(&self) -> ColumnaResult<Option<ServerAddress>> {
        let Some(raw) = self.store.get(SERVER_IP_KEY)? else {
            return Ok(None);
        };
        match ServerAddress::parse(&raw) {
            Ok(addr) => Ok(Some(addr)),
            Err(e) => {
                tracing::warn!("ignoring invalid persisted server address: {e}");
                Ok(None)
            }
        }
    }

    /// Validate `candidate` and persist it. On validation failure the
    /// previously persisted address (if any) is left untouched.
    pub fn save(&self, candidate: &str) -> ColumnaResult<ServerAddress> {
        let addr = ServerAddress::parse(candidate)?;
        self.store.set(SERVER_IP_KEY, addr.as_str())?;
        tracing::info!("server address saved: {addr}");
        Ok(addr)
    }

    /// Remove the persisted address, returning to the "no address
    /// configured" state.
    pub fn clear(&self) -> ColumnaResult<()> {
        self.store.remove(SERVER_IP_KEY)?;
        tracing::info!("server address cleared");
        Ok(())
    }
}
