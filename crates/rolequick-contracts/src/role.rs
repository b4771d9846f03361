//! Role definitions and the two role-choice types.
//!
//! `RoleSelection` is what arrived on the wire this request. `DesiredRole`
//! is what the controller decided to present after consulting the stored
//! preference. Keeping them apart means a role literally named "default"
//! can never be confused with "no impersonation".

use serde::{Deserialize, Serialize};

use crate::{capability::CapabilityMap, identity::RoleId, DEFAULT_SENTINEL};

/// A role from the host's role catalogue. Read-only reference data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleDefinition {
    pub id: RoleId,
    /// Display name shown to administrators (e.g. "Editor").
    pub name: String,
    pub capabilities: CapabilityMap,
}

/// The role selection submitted with the current request, if any.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoleSelection {
    /// The sentinel value: stop impersonating and forget the preference.
    RestoreDefault,
    /// Impersonate the given role. Not validated at parse time.
    Role(RoleId),
}

impl RoleSelection {
    /// Interpret a raw form value.
    ///
    /// `"default"` and the empty string map to `RestoreDefault`; any other
    /// value, whitespace included, is taken verbatim as a role id.
    pub fn from_form_value(value: &str) -> Self {
        if value.is_empty() || value == DEFAULT_SENTINEL {
            Self::RestoreDefault
        } else {
            Self::Role(RoleId::new(value))
        }
    }

    /// The raw form value this selection is submitted as.
    pub fn form_value(&self) -> &str {
        match self {
            Self::RestoreDefault => DEFAULT_SENTINEL,
            Self::Role(role) => role.as_str(),
        }
    }
}

/// The role the controller will present for the rest of the request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DesiredRole {
    /// Keep the identity's real capabilities.
    NoImpersonation,
    Impersonate(RoleId),
}

impl DesiredRole {
    pub fn role(&self) -> Option<&RoleId> {
        match self {
            Self::NoImpersonation => None,
            Self::Impersonate(role) => Some(role),
        }
    }
}
