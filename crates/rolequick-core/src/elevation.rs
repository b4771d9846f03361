//! Request-scoped view of the elevation registry.
//!
//! The controller never clears the host's registry itself. It captures a
//! copy at the start of each request and suppresses membership on that
//! copy only, so concurrent requests keep seeing the shared registry intact.

use std::collections::BTreeSet;

use rolequick_contracts::identity::IdentityId;

use crate::traits::ElevationRegistry;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ElevationScope {
    members: BTreeSet<IdentityId>,
    cleared: bool,
}

impl ElevationScope {
    /// Snapshot the registry's membership for one request.
    pub fn capture(registry: &dyn ElevationRegistry) -> Self {
        Self {
            members: registry.members(),
            cleared: false,
        }
    }

    pub fn contains(&self, identity: IdentityId) -> bool {
        self.members.contains(&identity)
    }

    /// Drop every member for the rest of this request.
    pub fn clear(&mut self) {
        self.members.clear();
        self.cleared = true;
    }

    /// True once `clear()` has been called on this scope.
    pub fn is_cleared(&self) -> bool {
        self.cleared
    }
}
