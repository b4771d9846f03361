//! Identity types for the principal behind one request.
//!
//! The host platform authenticates the request and builds an `Identity`
//! before rolequick runs. rolequick never writes an identity back to the
//! host; it only derives a `CapabilityView` from it.

use serde::{Deserialize, Serialize};

use crate::capability::CapabilityMap;

/// Stable numeric identifier for a user account on the host platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct IdentityId(pub u64);

impl std::fmt::Display for IdentityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of a role declared in the host's role catalogue.
///
/// Example: RoleId("editor")
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RoleId(pub String);

impl RoleId {
    /// Construct a role id from any string-like value.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RoleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// The authenticated principal for the current request, as the host built it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Identity {
    pub id: IdentityId,
    /// Real role assignments. The first entry is the primary role.
    pub roles: Vec<RoleId>,
    /// Effective capability map computed by the host from the real roles.
    pub capabilities: CapabilityMap,
    /// Entries assigned directly to this identity. The host keys one entry
    /// per assigned role (role id → true) alongside any per-user grants.
    pub assigned: CapabilityMap,
}

impl Identity {
    /// The primary (first) real role, or `None` when no role is assigned.
    pub fn primary_role(&self) -> Option<&RoleId> {
        self.roles.first()
    }
}
