//! In-memory implementation of `PreferenceStore`.
//!
//! `InMemoryPreferenceStore` keeps every value in a `HashMap` protected by a
//! `Mutex`. Clones share the same map, so a test or a reference host can hold
//! one handle while the controller owns another.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use tracing::debug;

use rolequick_contracts::{
    error::{RolequickError, RolequickResult},
    identity::IdentityId,
};
use rolequick_core::traits::PreferenceStore;

type Entries = HashMap<(IdentityId, String), String>;

/// A process-local, per-identity key/value store.
#[derive(Debug, Clone, Default)]
pub struct InMemoryPreferenceStore {
    entries: Arc<Mutex<Entries>>,
}

impl InMemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored values across all identities.
    pub fn len(&self) -> RolequickResult<usize> {
        Ok(self.lock()?.len())
    }

    pub fn is_empty(&self) -> RolequickResult<bool> {
        Ok(self.lock()?.is_empty())
    }

    fn lock(&self) -> RolequickResult<MutexGuard<'_, Entries>> {
        self.entries.lock().map_err(|e| RolequickError::PreferenceStore {
            reason: format!("preference lock poisoned: {}", e),
        })
    }
}

impl PreferenceStore for InMemoryPreferenceStore {
    fn get(&self, identity: IdentityId, key: &str) -> RolequickResult<Option<String>> {
        Ok(self.lock()?.get(&(identity, key.to_string())).cloned())
    }

    fn set(&self, identity: IdentityId, key: &str, value: &str) -> RolequickResult<()> {
        self.lock()?.insert((identity, key.to_string()), value.to_string());
        debug!(identity = %identity, key = %key, "preference set");
        Ok(())
    }

    fn delete(&self, identity: IdentityId, key: &str) -> RolequickResult<()> {
        let removed = self.lock()?.remove(&(identity, key.to_string())).is_some();
        debug!(identity = %identity, key = %key, removed, "preference deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn poisoned_lock_is_reported() {
        let store = InMemoryPreferenceStore::new();
        let entries = Arc::clone(&store.entries);
        let _ = std::thread::spawn(move || {
            let _guard = entries.lock().unwrap();
            panic!("writer died holding the lock");
        })
        .join();

        assert!(matches!(store.len(), Err(RolequickError::PreferenceStore { .. })));
        assert!(matches!(
            store.get(IdentityId(1), "rqc_current_role"),
            Err(RolequickError::PreferenceStore { .. })
        ));
    }
}
