//! Controller settings.

use serde::{Deserialize, Serialize};

use rolequick_contracts::{identity::RoleId, DEFAULT_PRIVILEGED_ROLE, PREFERENCE_KEY};

/// What the controller does when the selected role is not in the registry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UnknownRolePolicy {
    /// Forget the bad selection and present the real role.
    #[default]
    FallBack,
    /// Return `RolequickError::UnknownRole` to the host.
    Reject,
}

/// Settings read by `ImpersonationController`.
///
/// In TOML (the `[switcher]` table of a role configuration):
/// ```toml
/// privileged_role = "administrator"
/// preference_key = "rqc_current_role"
/// unknown_role = "fall-back"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControllerSettings {
    /// The only real role allowed to switch roles.
    pub privileged_role: RoleId,
    /// Key under which the selection is stored per identity.
    pub preference_key: String,
    pub unknown_role: UnknownRolePolicy,
}

impl Default for ControllerSettings {
    fn default() -> Self {
        Self {
            privileged_role: RoleId::new(DEFAULT_PRIVILEGED_ROLE),
            preference_key: PREFERENCE_KEY.to_string(),
            unknown_role: UnknownRolePolicy::default(),
        }
    }
}
