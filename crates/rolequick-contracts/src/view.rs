//! The per-request capability snapshot.
//!
//! `CapabilityView` is computed once per request from the host identity and
//! the impersonation decision. Everything downstream of the controller asks
//! the view, never the raw identity, so no component can observe
//! capabilities from before impersonation was applied.

use serde::{Deserialize, Serialize};

use crate::{
    capability::{Capability, CapabilityMap},
    identity::{Identity, IdentityId, RoleId},
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapabilityView {
    pub identity: IdentityId,
    /// The identity's real primary role.
    pub real_role: Option<RoleId>,
    /// The primary role presented to the rest of the request.
    pub primary_role: Option<RoleId>,
    /// Effective capabilities for capability checks.
    pub capabilities: CapabilityMap,
    /// Per-identity entries, keyed by role id among others.
    pub assigned: CapabilityMap,
    /// Whether the identity is in the (request-scoped) elevation registry.
    /// Elevated identities pass every capability check.
    pub elevated: bool,
    /// The role being impersonated, if any.
    pub impersonating: Option<RoleId>,
}

impl CapabilityView {
    /// A view that presents the identity exactly as the host built it.
    pub fn real(identity: &Identity, elevated: bool) -> Self {
        Self {
            identity: identity.id,
            real_role: identity.primary_role().cloned(),
            primary_role: identity.primary_role().cloned(),
            capabilities: identity.capabilities.clone(),
            assigned: identity.assigned.clone(),
            elevated,
            impersonating: None,
        }
    }

    /// Return true if the request may exercise `capability`.
    pub fn can(&self, capability: &Capability) -> bool {
        self.elevated || self.capabilities.allows(capability)
    }

    pub fn is_impersonating(&self) -> bool {
        self.impersonating.is_some()
    }
}
