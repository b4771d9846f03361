//! Role catalogue configuration schema.
//!
//! A `RolesConfig` is deserialized from TOML. Roles keep their declaration
//! order, which is the order the switcher menu lists them in.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use rolequick_core::ControllerSettings;

/// A single role loaded from TOML.
///
/// Capabilities are a table of name → grant flag. An explicit `false`
/// denies the capability.
///
/// ```toml
/// [[roles]]
/// id = "editor"
/// name = "Editor"
///
/// [roles.capabilities]
/// read = true
/// edit_posts = true
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoleEntry {
    /// Stable identifier used in form values and stored preferences.
    pub id: String,

    /// Display name shown in menus and the access-denied page.
    pub name: String,

    #[serde(default)]
    pub capabilities: BTreeMap<String, bool>,
}

/// The top-level structure deserialized from a TOML role file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RolesConfig {
    /// Controller settings. Every field is optional.
    #[serde(default)]
    pub switcher: ControllerSettings,

    /// Declared roles, in menu order.
    #[serde(default)]
    pub roles: Vec<RoleEntry>,
}
