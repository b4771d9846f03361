//! A fixed elevation registry.

use std::collections::BTreeSet;

use rolequick_contracts::identity::IdentityId;
use rolequick_core::traits::ElevationRegistry;

/// Elevation membership fixed at construction, e.g. from host configuration.
#[derive(Debug, Clone, Default)]
pub struct StaticElevationRegistry {
    members: BTreeSet<IdentityId>,
}

impl StaticElevationRegistry {
    pub fn new(members: impl IntoIterator<Item = IdentityId>) -> Self {
        Self { members: members.into_iter().collect() }
    }
}

impl ElevationRegistry for StaticElevationRegistry {
    fn members(&self) -> BTreeSet<IdentityId> {
        self.members.clone()
    }
}
