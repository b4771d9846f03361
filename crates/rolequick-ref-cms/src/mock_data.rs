//! Simulated CMS data for the rolequick reference host.
//!
//! All users and pages are hardcoded and fictional. This module stands in for
//! the host's user table and admin page routing.

use rolequick_contracts::identity::IdentityId;

/// The reference role catalogue, including its `[switcher]` settings.
pub const CMS_ROLES: &str = include_str!("../roles/cms.toml");

// ── Users ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct MockUser {
    pub id: IdentityId,
    pub login: &'static str,
    /// Role ids in assignment order; the first is the primary role.
    pub roles: &'static [&'static str],
    /// Listed in the host's elevated-identity registry.
    pub elevated: bool,
}

pub const ADA: IdentityId = IdentityId(1);
pub const ELI: IdentityId = IdentityId(2);
pub const SAM: IdentityId = IdentityId(3);
pub const NORA: IdentityId = IdentityId(4);

/// Every user the host knows about.
///
/// - ada: administrator, elevated
/// - eli: editor (also holds author as a secondary role)
/// - sam: subscriber
/// - nora: account with no role assigned
pub fn users() -> Vec<MockUser> {
    vec![
        MockUser { id: ADA, login: "ada", roles: &["administrator"], elevated: true },
        MockUser { id: ELI, login: "eli", roles: &["editor", "author"], elevated: false },
        MockUser { id: SAM, login: "sam", roles: &["subscriber"], elevated: false },
        MockUser { id: NORA, login: "nora", roles: &[], elevated: false },
    ]
}

// ── Admin pages ───────────────────────────────────────────────────────────────

/// An admin page and the capability it requires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub path: &'static str,
    pub capability: &'static str,
}

pub const DASHBOARD: Page = Page { path: "/admin/index", capability: "read" };
pub const POSTS: Page = Page { path: "/admin/edit", capability: "edit_posts" };
pub const OTHERS_POSTS: Page = Page { path: "/admin/edit?author=all", capability: "edit_others_posts" };
pub const USERS: Page = Page { path: "/admin/users", capability: "list_users" };
pub const SETTINGS: Page = Page { path: "/admin/options-general", capability: "manage_options" };
