//! # rolequick-store
//!
//! Reference implementations of the host-owned collaborators:
//!
//! - [`InMemoryPreferenceStore`]: process-local preferences
//! - [`JsonFilePreferenceStore`]: preferences persisted to one JSON file
//! - [`StaticElevationRegistry`]: a fixed elevated-identity list
//!
//! Production hosts back `PreferenceStore` with their own user metadata
//! table; these types cover tests, the demo CLI, and the reference host.

pub mod elevation;
pub mod file;
pub mod memory;

pub use elevation::StaticElevationRegistry;
pub use file::JsonFilePreferenceStore;
pub use memory::InMemoryPreferenceStore;

#[cfg(test)]
mod tests {
    use rolequick_contracts::{error::RolequickError, identity::IdentityId};
    use rolequick_core::{elevation::ElevationScope, traits::PreferenceStore};

    use super::*;

    const KEY: &str = "rqc_current_role";

    // ── InMemoryPreferenceStore ──────────────────────────────────────────────

    #[test]
    fn memory_set_get_delete() {
        let store = InMemoryPreferenceStore::new();
        assert_eq!(store.get(IdentityId(1), KEY).unwrap(), None);

        store.set(IdentityId(1), KEY, "editor").unwrap();
        assert_eq!(store.get(IdentityId(1), KEY).unwrap(), Some("editor".to_string()));
        assert_eq!(store.get(IdentityId(2), KEY).unwrap(), None);

        store.delete(IdentityId(1), KEY).unwrap();
        assert_eq!(store.get(IdentityId(1), KEY).unwrap(), None);
        assert!(store.is_empty().unwrap());
    }

    #[test]
    fn memory_delete_missing_is_ok() {
        let store = InMemoryPreferenceStore::new();
        store.delete(IdentityId(9), KEY).unwrap();
    }

    #[test]
    fn memory_clones_share_entries() {
        let store = InMemoryPreferenceStore::new();
        let handle = store.clone();

        store.set(IdentityId(1), KEY, "author").unwrap();
        assert_eq!(handle.get(IdentityId(1), KEY).unwrap(), Some("author".to_string()));
        assert_eq!(handle.len().unwrap(), 1);
    }

    // ── JsonFilePreferenceStore ──────────────────────────────────────────────

    #[test]
    fn file_missing_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFilePreferenceStore::new(dir.path().join("prefs.json"));
        assert_eq!(store.get(IdentityId(1), KEY).unwrap(), None);
    }

    #[test]
    fn file_values_survive_a_new_handle() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");

        JsonFilePreferenceStore::new(&path).set(IdentityId(1), KEY, "editor").unwrap();

        let reopened = JsonFilePreferenceStore::new(&path);
        assert_eq!(reopened.get(IdentityId(1), KEY).unwrap(), Some("editor".to_string()));

        reopened.delete(IdentityId(1), KEY).unwrap();
        assert_eq!(JsonFilePreferenceStore::new(&path).get(IdentityId(1), KEY).unwrap(), None);

        let raw = std::fs::read_to_string(&path).unwrap();
        assert_eq!(raw.trim(), "{}");
    }

    #[test]
    fn file_corrupt_contents_are_a_store_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");
        std::fs::write(&path, "not json").unwrap();

        let store = JsonFilePreferenceStore::new(&path);
        match store.get(IdentityId(1), KEY) {
            Err(RolequickError::PreferenceStore { reason }) => {
                assert!(reason.contains("failed to parse"), "unexpected reason: {reason}");
            }
            other => panic!("expected PreferenceStore error, got {:?}", other),
        }
    }

    // ── StaticElevationRegistry ──────────────────────────────────────────────

    #[test]
    fn static_registry_feeds_request_scope() {
        let registry = StaticElevationRegistry::new([IdentityId(1)]);
        let scope = ElevationScope::capture(&registry);

        assert!(scope.contains(IdentityId(1)));
        assert!(!scope.contains(IdentityId(2)));
    }
}
