//! TOML-driven role registry implementation.
//!
//! `TomlRoleRegistry` loads a `RolesConfig` from a TOML string or file,
//! validates it, and implements the `RoleRegistry` trait from rolequick-core.
//!
//! Validation rejects:
//!
//! 1. Malformed TOML or documents that do not match `RolesConfig`.
//! 2. Two roles declaring the same `id`.
//! 3. A `switcher.privileged_role` that is not declared as a role.

use std::collections::HashSet;
use std::path::Path;

use tracing::debug;

use rolequick_contracts::{
    capability::{Capability, CapabilityMap},
    error::{RolequickError, RolequickResult},
    identity::RoleId,
    role::RoleDefinition,
};
use rolequick_core::{traits::RoleRegistry, ControllerSettings};

use crate::config::RolesConfig;

/// A `RoleRegistry` implementation backed by a TOML document.
///
/// ```rust,ignore
/// use rolequick_roles::TomlRoleRegistry;
///
/// let registry = TomlRoleRegistry::from_file(Path::new("roles.toml"))?;
/// let settings = registry.settings().clone();
/// ```
#[derive(Debug, Clone)]
pub struct TomlRoleRegistry {
    roles: Vec<RoleDefinition>,
    settings: ControllerSettings,
}

impl TomlRoleRegistry {
    /// Parse `s` as TOML and build a validated registry.
    ///
    /// Returns `RolequickError::ConfigError` if the TOML is malformed or the
    /// catalogue fails validation.
    pub fn from_toml_str(s: &str) -> RolequickResult<Self> {
        let config: RolesConfig = toml::from_str(s).map_err(|e| RolequickError::ConfigError {
            reason: format!("failed to parse role TOML: {}", e),
        })?;
        Self::from_config(config)
    }

    /// Read the file at `path` and parse it as a TOML role catalogue.
    pub fn from_file(path: &Path) -> RolequickResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| RolequickError::ConfigError {
            reason: format!("failed to read role file '{}': {}", path.display(), e),
        })?;
        Self::from_toml_str(&contents)
    }

    /// Validate an already-deserialized configuration.
    pub fn from_config(config: RolesConfig) -> RolequickResult<Self> {
        let mut seen = HashSet::new();
        let mut roles = Vec::with_capacity(config.roles.len());

        for entry in config.roles {
            if !seen.insert(entry.id.clone()) {
                return Err(RolequickError::ConfigError {
                    reason: format!("role '{}' is declared more than once", entry.id),
                });
            }

            let capabilities: CapabilityMap = entry
                .capabilities
                .into_iter()
                .map(|(name, granted)| (Capability::new(name), granted))
                .collect();

            debug!(role = %entry.id, capabilities = capabilities.len(), "role loaded");

            roles.push(RoleDefinition {
                id: RoleId::new(entry.id),
                name: entry.name,
                capabilities,
            });
        }

        let privileged = &config.switcher.privileged_role;
        if !roles.iter().any(|r| &r.id == privileged) {
            return Err(RolequickError::ConfigError {
                reason: format!("privileged role '{}' is not declared", privileged),
            });
        }

        Ok(Self { roles, settings: config.switcher })
    }

    /// The `[switcher]` settings from the same document.
    pub fn settings(&self) -> &ControllerSettings {
        &self.settings
    }
}

impl RoleRegistry for TomlRoleRegistry {
    fn role(&self, id: &RoleId) -> Option<RoleDefinition> {
        self.roles.iter().find(|r| &r.id == id).cloned()
    }

    fn roles(&self) -> Vec<RoleDefinition> {
        self.roles.clone()
    }
}
