//! The access-denied override page.
//!
//! When the host refuses a page to an impersonating administrator, the
//! default response is a dead end. This page replaces it with a one-button
//! form that posts the default sentinel, so the next request clears the
//! stored preference and restores the real role.

use serde::{Deserialize, Serialize};

use rolequick_contracts::{identity::RoleId, role::RoleSelection, FORM_FIELD};

/// The hidden form field the recovery button submits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecoveryControl {
    pub field: String,
    pub value: String,
}

impl RecoveryControl {
    fn restore_default() -> Self {
        Self {
            field: FORM_FIELD.to_string(),
            value: RoleSelection::RestoreDefault.form_value().to_string(),
        }
    }

    /// The selection the host will parse when the button is pressed.
    pub fn submit(&self) -> RoleSelection {
        RoleSelection::from_form_value(&self.value)
    }
}

/// A terminal response for a denied page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessDeniedResponse {
    pub role: RoleId,
    pub role_name: String,
    pub recovery: RecoveryControl,
    pub html: String,
}

impl AccessDeniedResponse {
    /// Render the override page for `role`.
    ///
    /// `privileged_name` is the display name of the role the button restores.
    pub fn render(role: &RoleId, role_name: &str, privileged_name: &str) -> Self {
        let recovery = RecoveryControl::restore_default();
        let html = format!(
            "<form method='post'>This role ({}) would not have sufficient permissions to view this page. \
             Click <input type='submit' value='here' /> to reset role to {} (default).\
             <input type='hidden' name='{}' value='{}' /></form>",
            escape_html(role_name),
            escape_html(privileged_name),
            escape_html(&recovery.field),
            escape_html(&recovery.value),
        );
        Self {
            role: role.clone(),
            role_name: role_name.to_string(),
            recovery,
            html,
        }
    }
}

fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_names_the_role_and_carries_the_sentinel() {
        let page = AccessDeniedResponse::render(&RoleId::new("editor"), "Editor", "Administrator");

        assert!(page.html.contains("This role (Editor)"));
        assert!(page.html.contains("reset role to Administrator (default)"));
        assert!(page.html.contains("name='rqc' value='default'"));
        assert!(page.html.starts_with("<form method='post'>"));
    }

    #[test]
    fn recovery_button_submits_restore_default() {
        let page = AccessDeniedResponse::render(&RoleId::new("author"), "Author", "Administrator");
        assert_eq!(page.recovery.submit(), RoleSelection::RestoreDefault);
    }

    #[test]
    fn role_names_are_escaped() {
        let page = AccessDeniedResponse::render(
            &RoleId::new("x"),
            "<script>alert('x')</script>",
            "Administrator",
        );
        assert!(!page.html.contains("<script>"));
        assert!(page.html.contains("&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt;"));
    }
}
