//! Capability grants.
//!
//! A capability is a named boolean grant. Hosts store explicit `false`
//! entries to deny a capability that a broader grant would otherwise give,
//! so a `CapabilityMap` keeps both polarities and `allows()` only answers
//! true for an entry that is present and set.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// An opaque capability name, e.g. "edit_posts" or "manage_options".
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Capability(pub String);

impl Capability {
    /// Construct a capability from any string-like value.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }
}

impl std::fmt::Display for Capability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Ordered mapping of capability name → grant flag.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CapabilityMap {
    inner: BTreeMap<Capability, bool>,
}

impl CapabilityMap {
    /// Grant a capability (set it to `true`).
    pub fn grant(&mut self, capability: Capability) {
        self.inner.insert(capability, true);
    }

    /// Set a capability to an explicit value, replacing any previous entry.
    pub fn set(&mut self, capability: Capability, granted: bool) {
        self.inner.insert(capability, granted);
    }

    /// Remove the entry for `capability`, returning its previous value.
    pub fn remove(&mut self, capability: &Capability) -> Option<bool> {
        self.inner.remove(capability)
    }

    /// The raw entry for `capability`, if any.
    pub fn get(&self, capability: &Capability) -> Option<bool> {
        self.inner.get(capability).copied()
    }

    /// Return true only if the entry exists and is granted.
    pub fn allows(&self, capability: &Capability) -> bool {
        self.get(capability).unwrap_or(false)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Capability, bool)> {
        self.inner.iter().map(|(c, g)| (c, *g))
    }

    /// Names of every capability whose entry is `true`.
    pub fn granted(&self) -> impl Iterator<Item = &Capability> {
        self.inner.iter().filter(|(_, g)| **g).map(|(c, _)| c)
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl FromIterator<(Capability, bool)> for CapabilityMap {
    fn from_iter<I: IntoIterator<Item = (Capability, bool)>>(iter: I) -> Self {
        Self { inner: iter.into_iter().collect() }
    }
}
