//! The role switcher menu model.
//!
//! Hosts render a dropdown listing every role. The privileged role is
//! offered under the default sentinel so that choosing it clears the stored
//! preference instead of impersonating the privileged role explicitly.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use rolequick_contracts::{
    identity::RoleId,
    role::{DesiredRole, RoleSelection},
};

use crate::traits::RoleRegistry;

/// The admin toolbar node the dropdown attaches to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuNode {
    pub id: String,
    pub title: String,
    pub href: String,
}

impl Default for MenuNode {
    fn default() -> Self {
        Self {
            id: "rqc".to_string(),
            title: "Role Quick Change".to_string(),
            href: "#".to_string(),
        }
    }
}

/// One selectable role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuEntry {
    /// The form value submitted when this entry is chosen.
    pub id: String,
    pub name: String,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleMenu {
    pub node: MenuNode,
    pub roles: Vec<MenuEntry>,
}

impl RoleMenu {
    /// Build the menu from the registry in its declaration order.
    pub fn build(registry: &dyn RoleRegistry, privileged: &RoleId, desired: &DesiredRole) -> Self {
        let roles = registry
            .roles()
            .into_iter()
            .map(|definition| {
                if &definition.id == privileged {
                    MenuEntry {
                        id: RoleSelection::RestoreDefault.form_value().to_string(),
                        name: format!("{} (default)", definition.name),
                        active: *desired == DesiredRole::NoImpersonation,
                    }
                } else {
                    MenuEntry {
                        active: desired.role() == Some(&definition.id),
                        id: definition.id.0,
                        name: definition.name,
                    }
                }
            })
            .collect();

        Self { node: MenuNode::default(), roles }
    }

    /// The entry currently in effect, if any.
    pub fn active(&self) -> Option<&MenuEntry> {
        self.roles.iter().find(|e| e.active)
    }

    /// The `{ "roles": [...] }` document handed to the dropdown script.
    pub fn script_data(&self) -> Value {
        json!({ "roles": self.roles })
    }
}
