//! JSON file backed implementation of `PreferenceStore`.
//!
//! The whole store is one JSON object:
//!
//! ```json
//! { "1": { "rqc_current_role": "editor" } }
//! ```
//!
//! A missing file is an empty store. Every `set` and `delete` rewrites the
//! file, which is adequate for the demo CLI and small single-host setups.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing::{debug, info};

use rolequick_contracts::{
    error::{RolequickError, RolequickResult},
    identity::IdentityId,
};
use rolequick_core::traits::PreferenceStore;

type Document = BTreeMap<String, BTreeMap<String, String>>;

pub struct JsonFilePreferenceStore {
    path: PathBuf,
    // Serializes read-modify-write cycles within this process.
    guard: Mutex<()>,
}

impl JsonFilePreferenceStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            guard: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> RolequickResult<Document> {
        if !self.path.exists() {
            return Ok(Document::new());
        }
        let raw = std::fs::read_to_string(&self.path).map_err(|e| RolequickError::PreferenceStore {
            reason: format!("failed to read '{}': {}", self.path.display(), e),
        })?;
        if raw.trim().is_empty() {
            return Ok(Document::new());
        }
        serde_json::from_str(&raw).map_err(|e| RolequickError::PreferenceStore {
            reason: format!("failed to parse '{}': {}", self.path.display(), e),
        })
    }

    fn save(&self, doc: &Document) -> RolequickResult<()> {
        let raw = serde_json::to_string_pretty(doc).map_err(|e| RolequickError::PreferenceStore {
            reason: format!("failed to encode preferences: {}", e),
        })?;
        std::fs::write(&self.path, raw).map_err(|e| RolequickError::PreferenceStore {
            reason: format!("failed to write '{}': {}", self.path.display(), e),
        })
    }

    fn modify(&self, f: impl FnOnce(&mut Document)) -> RolequickResult<()> {
        let _held = self.guard.lock().map_err(|e| RolequickError::PreferenceStore {
            reason: format!("preference file lock poisoned: {}", e),
        })?;
        let mut doc = self.load()?;
        f(&mut doc);
        self.save(&doc)
    }
}

impl PreferenceStore for JsonFilePreferenceStore {
    fn get(&self, identity: IdentityId, key: &str) -> RolequickResult<Option<String>> {
        let doc = self.load()?;
        Ok(doc.get(&identity.to_string()).and_then(|m| m.get(key)).cloned())
    }

    fn set(&self, identity: IdentityId, key: &str, value: &str) -> RolequickResult<()> {
        self.modify(|doc| {
            doc.entry(identity.to_string())
                .or_default()
                .insert(key.to_string(), value.to_string());
        })?;
        info!(identity = %identity, key = %key, path = %self.path.display(), "preference written");
        Ok(())
    }

    fn delete(&self, identity: IdentityId, key: &str) -> RolequickResult<()> {
        self.modify(|doc| {
            let user = identity.to_string();
            if let Some(values) = doc.get_mut(&user) {
                values.remove(key);
                if values.is_empty() {
                    doc.remove(&user);
                }
            }
        })?;
        debug!(identity = %identity, key = %key, "preference removed from file");
        Ok(())
    }
}
