//! # rolequick-contracts
//!
//! Shared types, constants, and contracts for the rolequick role switcher.
//!
//! All crates in the workspace import from here. No business logic lives in
//! this crate: only data definitions and error types.

pub mod capability;
pub mod error;
pub mod identity;
pub mod request;
pub mod role;
pub mod view;

/// Form value that means "go back to my real role".
pub const DEFAULT_SENTINEL: &str = "default";

/// Name of the posted form field carrying the selected role.
pub const FORM_FIELD: &str = "rqc";

/// Per-identity preference key holding the last selected role.
pub const PREFERENCE_KEY: &str = "rqc_current_role";

/// The privileged role used when configuration does not name one.
pub const DEFAULT_PRIVILEGED_ROLE: &str = "administrator";

#[cfg(test)]
mod tests {
    use super::*;
    use capability::{Capability, CapabilityMap};
    use error::RolequickError;
    use identity::{Identity, IdentityId, RoleId};
    use request::{RequestContext, RequestId, RequestOutcome, SkipReason};
    use role::{DesiredRole, RoleSelection};
    use view::CapabilityView;

    fn identity(roles: &[&str], caps: &[(&str, bool)]) -> Identity {
        Identity {
            id: IdentityId(7),
            roles: roles.iter().map(|r| RoleId::new(*r)).collect(),
            capabilities: caps.iter().map(|(c, g)| (Capability::new(*c), *g)).collect(),
            assigned: roles.iter().map(|r| (Capability::new(*r), true)).collect(),
        }
    }

    // ── CapabilityMap ────────────────────────────────────────────────────────

    #[test]
    fn capability_map_allows_only_true_entries() {
        let mut caps = CapabilityMap::default();
        let read = Capability::new("read");
        let delete = Capability::new("delete_users");

        assert!(!caps.allows(&read));

        caps.grant(read.clone());
        caps.set(delete.clone(), false);

        assert!(caps.allows(&read));
        assert!(!caps.allows(&delete));
        assert_eq!(caps.get(&delete), Some(false));
        assert_eq!(caps.len(), 2);
        assert_eq!(caps.granted().count(), 1);
    }

    #[test]
    fn capability_map_remove_returns_previous_value() {
        let mut caps = CapabilityMap::default();
        caps.grant(Capability::new("administrator"));

        assert_eq!(caps.remove(&Capability::new("administrator")), Some(true));
        assert_eq!(caps.remove(&Capability::new("administrator")), None);
        assert!(caps.is_empty());
    }

    #[test]
    fn capability_map_serializes_as_plain_object() {
        let caps: CapabilityMap = [
            (Capability::new("read"), true),
            (Capability::new("edit_posts"), false),
        ]
        .into_iter()
        .collect();

        let json = serde_json::to_value(&caps).unwrap();
        assert_eq!(json, serde_json::json!({ "edit_posts": false, "read": true }));
    }

    // ── RoleSelection ────────────────────────────────────────────────────────

    #[test]
    fn selection_default_sentinel_restores() {
        assert_eq!(RoleSelection::from_form_value("default"), RoleSelection::RestoreDefault);
    }

    #[test]
    fn selection_other_values_are_taken_verbatim() {
        assert_eq!(
            RoleSelection::from_form_value("editor"),
            RoleSelection::Role(RoleId::new("editor"))
        );
        // Not a declared role anywhere; parsing does not validate.
        assert_eq!(
            RoleSelection::from_form_value("Default "),
            RoleSelection::Role(RoleId::new("Default "))
        );
    }

    #[test]
    fn selection_empty_value_restores_default() {
        assert_eq!(RoleSelection::from_form_value(""), RoleSelection::RestoreDefault);
    }

    #[test]
    fn selection_whitespace_is_kept_verbatim() {
        assert_eq!(
            RoleSelection::from_form_value("   "),
            RoleSelection::Role(RoleId::new("   "))
        );
    }

    #[test]
    fn selection_form_value_matches_parse() {
        assert_eq!(RoleSelection::RestoreDefault.form_value(), DEFAULT_SENTINEL);
        assert_eq!(RoleSelection::Role(RoleId::new("author")).form_value(), "author");
    }

    #[test]
    fn desired_role_exposes_target() {
        assert_eq!(DesiredRole::NoImpersonation.role(), None);
        assert_eq!(
            DesiredRole::Impersonate(RoleId::new("editor")).role(),
            Some(&RoleId::new("editor"))
        );
    }

    // ── Identity / CapabilityView ────────────────────────────────────────────

    #[test]
    fn identity_without_roles_has_no_primary_role() {
        let ident = identity(&[], &[]);
        assert_eq!(ident.primary_role(), None);
    }

    #[test]
    fn real_view_mirrors_identity() {
        let ident = identity(&["administrator", "editor"], &[("manage_options", true)]);
        let view = CapabilityView::real(&ident, false);

        assert_eq!(view.real_role, Some(RoleId::new("administrator")));
        assert_eq!(view.primary_role, view.real_role);
        assert!(view.can(&Capability::new("manage_options")));
        assert!(!view.can(&Capability::new("edit_themes")));
        assert!(!view.is_impersonating());
    }

    #[test]
    fn elevated_view_passes_every_check() {
        let ident = identity(&["administrator"], &[]);
        let view = CapabilityView::real(&ident, true);
        assert!(view.can(&Capability::new("anything_at_all")));
    }

    // ── Request types ────────────────────────────────────────────────────────

    #[test]
    fn request_context_parses_selection() {
        let ctx = RequestContext::new(identity(&["administrator"], &[]), Some("default".into()));
        assert_eq!(ctx.selection(), Some(RoleSelection::RestoreDefault));

        let ctx = RequestContext::new(identity(&["administrator"], &[]), Some(String::new()));
        assert_eq!(ctx.selection(), Some(RoleSelection::RestoreDefault));

        let ctx = RequestContext::new(identity(&["administrator"], &[]), None);
        assert_eq!(ctx.selection(), None);
    }

    #[test]
    fn request_id_new_produces_unique_values() {
        let unique: std::collections::HashSet<String> =
            (0..50).map(|_| RequestId::new().to_string()).collect();
        assert_eq!(unique.len(), 50);
    }

    #[test]
    fn outcome_view_is_absent_when_skipped() {
        let outcome = RequestOutcome::Skipped { reason: SkipReason::NotPrivileged };
        assert!(outcome.view().is_none());
        assert_eq!(outcome.label(), "skipped:not-privileged");
    }

    // ── RolequickError display messages ──────────────────────────────────────

    #[test]
    fn error_unknown_role_display() {
        let err = RolequickError::UnknownRole { role: "ghost".to_string() };
        let msg = err.to_string();
        assert!(msg.contains("unknown role"));
        assert!(msg.contains("ghost"));
    }

    #[test]
    fn error_preference_store_display() {
        let err = RolequickError::PreferenceStore { reason: "disk full".to_string() };
        assert!(err.to_string().contains("disk full"));
    }

    #[test]
    fn error_access_denied_display() {
        let err = RolequickError::AccessDenied {
            role: "subscriber".to_string(),
            capability: "edit_posts".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("subscriber"));
        assert!(msg.contains("edit_posts"));
    }
}
