//! # rolequick-ref-cms
//!
//! CMS reference host for the rolequick role switcher.
//!
//! Demonstrates four request scenarios using mock users and the default
//! CMS role catalogue:
//!
//! 1. **Switch Role**: an elevated administrator impersonates an editor.
//! 2. **Persisted Preference**: the selection is re-applied on later
//!    requests until the default sentinel clears it.
//! 3. **Access Denied Recovery**: a denied page is replaced by a one-click
//!    form that restores the real role.
//! 4. **Non-privileged Users**: posted values and stored preferences have
//!    no effect on anyone but the privileged role.
//!
//! All data is hardcoded and fictional.

pub mod host;
pub mod mock_data;
pub mod scenarios;

#[cfg(test)]
mod tests {
    use rolequick_contracts::{
        capability::Capability,
        error::RolequickError,
        identity::{IdentityId, RoleId},
        request::{RequestOutcome, SkipReason},
        PREFERENCE_KEY,
    };
    use rolequick_core::traits::{PreferenceStore, RoleRegistry};
    use rolequick_store::InMemoryPreferenceStore;

    use crate::{
        host::{CmsHost, PageResponse},
        mock_data::{ADA, DASHBOARD, ELI, NORA, OTHERS_POSTS, POSTS, SAM, SETTINGS, USERS},
        scenarios,
    };

    fn host() -> (CmsHost, InMemoryPreferenceStore) {
        let prefs = InMemoryPreferenceStore::new();
        let host = CmsHost::new(Box::new(prefs.clone())).unwrap();
        (host, prefs)
    }

    // ── Scenarios ─────────────────────────────────────────────────────────────

    #[test]
    fn all_scenarios_run() {
        scenarios::switch_role::run_scenario().unwrap();
        scenarios::persisted_preference::run_scenario().unwrap();
        scenarios::access_denied::run_scenario().unwrap();
        scenarios::non_privileged::run_scenario().unwrap();
    }

    // ── Host identity ─────────────────────────────────────────────────────────

    #[test]
    fn identity_merges_role_capabilities() {
        let (host, _) = host();
        let eli = host.identity(ELI).unwrap();

        assert_eq!(eli.primary_role(), Some(&RoleId::new("editor")));
        assert!(eli.capabilities.allows(&Capability::new("edit_others_posts")));
        assert_eq!(eli.assigned.get(&Capability::new("editor")), Some(true));
        assert_eq!(eli.assigned.get(&Capability::new("author")), Some(true));
    }

    #[test]
    fn user_lookup_returns_account() {
        let (host, _) = host();
        assert_eq!(host.user(ADA).unwrap().login, "ada");
        assert_eq!(host.user(NORA).unwrap().login, "nora");

        match host.user(IdentityId(99)) {
            Err(RolequickError::ConfigError { reason }) => assert!(reason.contains("unknown user")),
            other => panic!("expected ConfigError, got {:?}", other),
        }
    }

    // ── Request lifecycle ─────────────────────────────────────────────────────

    #[test]
    fn admin_as_editor_matches_editor_role_exactly() {
        let (host, prefs) = host();
        let visit = host.visit(ADA, POSTS, Some("editor")).unwrap();

        let editor = host
            .controller()
            .registry()
            .role(&RoleId::new("editor"))
            .unwrap();
        assert_eq!(visit.view.capabilities, editor.capabilities);
        assert_eq!(prefs.get(ADA, PREFERENCE_KEY).unwrap(), Some("editor".to_string()));
        assert!(matches!(visit.response, PageResponse::Rendered { .. }));
    }

    #[test]
    fn admin_preference_reapplied_on_next_request() {
        let (host, prefs) = host();
        prefs.set(ADA, PREFERENCE_KEY, "editor").unwrap();

        let visit = host.visit(ADA, USERS, None).unwrap();
        assert!(matches!(visit.outcome, RequestOutcome::Impersonated { .. }));
        assert!(matches!(visit.response, PageResponse::Recovery(_)));
    }

    #[test]
    fn denied_page_offers_recovery_and_button_restores() {
        let (host, prefs) = host();
        let denied = host.visit(ADA, SETTINGS, Some("contributor")).unwrap();

        let PageResponse::Recovery(page) = &denied.response else {
            panic!("expected Recovery, got {:?}", denied.response);
        };
        assert!(page.html.contains("This role (Contributor)"));

        let posted = page.recovery.submit().form_value().to_string();
        let restored = host.visit(ADA, SETTINGS, Some(&posted)).unwrap();

        assert!(CmsHost::require_rendered(&restored, SETTINGS).is_ok());
        assert_eq!(prefs.get(ADA, PREFERENCE_KEY).unwrap(), None);
    }

    #[test]
    fn non_privileged_users_are_never_changed() {
        let (host, prefs) = host();
        prefs.set(SAM, PREFERENCE_KEY, "administrator").unwrap();

        let eli = host.visit(ELI, OTHERS_POSTS, Some("subscriber")).unwrap();
        assert_eq!(eli.outcome, RequestOutcome::Skipped { reason: SkipReason::NotPrivileged });
        assert_eq!(eli.view.capabilities, host.identity(ELI).unwrap().capabilities);
        assert!(eli.menu.is_none());
        assert_eq!(prefs.get(ELI, PREFERENCE_KEY).unwrap(), None);

        let sam = host.visit(SAM, SETTINGS, None).unwrap();
        assert!(matches!(sam.response, PageResponse::Forbidden { .. }));

        let nora = host.visit(NORA, DASHBOARD, Some("editor")).unwrap();
        assert_eq!(
            nora.outcome,
            RequestOutcome::Skipped { reason: SkipReason::MissingRoleAssignment }
        );
    }

    #[test]
    fn elevated_admin_passes_checks_no_role_grants() {
        let (host, _) = host();
        let unlisted = crate::mock_data::Page { path: "/admin/tools", capability: "export_everything" };

        let visit = host.visit(ADA, unlisted, None).unwrap();
        assert!(matches!(visit.response, PageResponse::Rendered { .. }));

        // Impersonating any lesser role drops the bypass.
        let visit = host.visit(ADA, unlisted, Some("editor")).unwrap();
        assert!(matches!(visit.response, PageResponse::Recovery(_)));
    }

    #[test]
    fn blank_post_ends_saved_impersonation() {
        let (host, prefs) = host();
        host.visit(ADA, POSTS, Some("subscriber")).unwrap();

        let visit = host.visit(ADA, SETTINGS, Some("")).unwrap();
        assert!(matches!(visit.outcome, RequestOutcome::Unchanged { .. }));
        assert!(CmsHost::require_rendered(&visit, SETTINGS).is_ok());
        assert_eq!(prefs.get(ADA, PREFERENCE_KEY).unwrap(), None);
    }

    #[test]
    fn every_request_is_recorded() {
        let (host, _) = host();
        host.visit(ADA, POSTS, Some("author")).unwrap();
        host.visit(ELI, POSTS, None).unwrap();

        let outcomes: Vec<String> = host.records().unwrap().into_iter().map(|r| r.outcome).collect();
        assert_eq!(outcomes, vec!["impersonated", "skipped:not-privileged"]);
    }
}
