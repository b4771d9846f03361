//! Collaborator traits owned by the host platform.
//!
//! rolequick does not own role definitions, per-user storage, or the list
//! of elevated identities. The host supplies each through one of these
//! traits and the controller receives them at construction time:
//!
//! - `RoleRegistry`: read-only role catalogue
//! - `PreferenceStore`: per-identity key/value storage
//! - `ElevationRegistry`: identities that bypass capability checks

use std::collections::BTreeSet;

use rolequick_contracts::{
    error::RolequickResult,
    identity::{IdentityId, RoleId},
    role::RoleDefinition,
};

/// The host's role catalogue.
pub trait RoleRegistry: Send + Sync {
    /// Look up a role by id. Returns `None` for undeclared roles; callers
    /// must never substitute a made-up capability set.
    fn role(&self, id: &RoleId) -> Option<RoleDefinition>;

    /// Every declared role, in a stable order suitable for menus.
    fn roles(&self) -> Vec<RoleDefinition>;
}

/// Per-identity key/value storage.
///
/// Each call is treated as an independent atomic operation. Implementations
/// use interior mutability so the controller can hold them behind `&self`.
pub trait PreferenceStore: Send + Sync {
    fn get(&self, identity: IdentityId, key: &str) -> RolequickResult<Option<String>>;

    fn set(&self, identity: IdentityId, key: &str, value: &str) -> RolequickResult<()>;

    /// Remove the value. Deleting an absent key is not an error.
    fn delete(&self, identity: IdentityId, key: &str) -> RolequickResult<()>;
}

/// The host's list of identities whose membership overrides capability checks.
pub trait ElevationRegistry: Send + Sync {
    /// A copy of the current membership.
    fn members(&self) -> BTreeSet<IdentityId>;
}
