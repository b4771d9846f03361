//! A simulated CMS request lifecycle.
//!
//! `CmsHost` plays the host platform: it builds an `Identity` for each
//! request, runs the impersonation controller, checks the requested page's
//! capability against the resulting view, and swaps the denial page for the
//! controller's recovery page when the controller offers one.

use std::sync::{Arc, Mutex};

use tracing::{debug, warn};

use rolequick_contracts::{
    capability::{Capability, CapabilityMap},
    error::{RolequickError, RolequickResult},
    identity::{Identity, IdentityId, RoleId},
    request::{RequestContext, RequestOutcome, RequestRecord},
    view::CapabilityView,
};
use rolequick_core::{
    denied::AccessDeniedResponse,
    menu::RoleMenu,
    traits::{ElevationRegistry, PreferenceStore, RoleRegistry},
    ImpersonationController,
};
use rolequick_roles::TomlRoleRegistry;
use rolequick_store::StaticElevationRegistry;

use crate::mock_data::{users, MockUser, Page, CMS_ROLES};

/// What the host sends back for one page request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageResponse {
    /// The page rendered under `role` (the presented primary role).
    Rendered { path: String, role: Option<RoleId> },
    /// The controller's recovery page replaced the host's denial.
    Recovery(AccessDeniedResponse),
    /// The host's own plain denial.
    Forbidden { path: String, capability: String },
}

/// The full result of one simulated request.
#[derive(Debug, Clone)]
pub struct PageVisit {
    pub outcome: RequestOutcome,
    pub view: CapabilityView,
    pub menu: Option<RoleMenu>,
    pub response: PageResponse,
}

pub struct CmsHost {
    controller: ImpersonationController,
    registry: TomlRoleRegistry,
    elevation: StaticElevationRegistry,
    users: Vec<MockUser>,
    records: Arc<Mutex<Vec<RequestRecord>>>,
}

impl CmsHost {
    /// Build a host over the reference catalogue with the given preference store.
    pub fn new(preferences: Box<dyn PreferenceStore>) -> RolequickResult<Self> {
        Self::with_catalogue(CMS_ROLES, preferences)
    }

    /// Build a host over a custom TOML catalogue.
    pub fn with_catalogue(toml: &str, preferences: Box<dyn PreferenceStore>) -> RolequickResult<Self> {
        let registry = TomlRoleRegistry::from_toml_str(toml)?;
        let users = users();
        let elevation = StaticElevationRegistry::new(users.iter().filter(|u| u.elevated).map(|u| u.id));

        let controller = ImpersonationController::new(
            Box::new(registry.clone()),
            preferences,
            Box::new(elevation.clone()),
            registry.settings().clone(),
        );

        Ok(Self {
            controller,
            registry,
            elevation,
            users,
            records: Arc::new(Mutex::new(Vec::new())),
        })
    }

    pub fn controller(&self) -> &ImpersonationController {
        &self.controller
    }

    /// Look up the account record for `user`.
    pub fn user(&self, user: IdentityId) -> RolequickResult<&MockUser> {
        self.users
            .iter()
            .find(|u| u.id == user)
            .ok_or_else(|| RolequickError::ConfigError {
                reason: format!("unknown user {}", user),
            })
    }

    /// Build the identity the host would authenticate for `user`.
    ///
    /// Effective capabilities are the union of the user's role capability
    /// sets, later roles overriding earlier ones. Each role also gets an
    /// assigned entry keyed by its id.
    pub fn identity(&self, user: IdentityId) -> RolequickResult<Identity> {
        let account = self.user(user)?;

        let mut capabilities = CapabilityMap::default();
        let mut assigned = CapabilityMap::default();
        let mut roles = Vec::with_capacity(account.roles.len());

        for role_id in account.roles {
            let role = RoleId::new(*role_id);
            if let Some(definition) = self.registry.role(&role) {
                for (cap, granted) in definition.capabilities.iter() {
                    capabilities.set(cap.clone(), granted);
                }
            }
            assigned.grant(Capability::new(*role_id));
            roles.push(role);
        }

        Ok(Identity { id: account.id, roles, capabilities, assigned })
    }

    /// Serve `page` to `user`, with an optional posted role-switch value.
    pub fn visit(&self, user: IdentityId, page: Page, form: Option<&str>) -> RolequickResult<PageVisit> {
        let identity = self.identity(user)?;
        let ctx = RequestContext::new(identity, form.map(str::to_string));

        let outcome = self.controller.handle_request(&ctx)?;
        self.records
            .lock()
            .map_err(|e| RolequickError::ConfigError {
                reason: format!("request log lock poisoned: {}", e),
            })?
            .push(self.controller.record(&ctx, &outcome));

        let view = match outcome.view() {
            Some(view) => view.clone(),
            None => {
                let elevated = self.elevation.members().contains(&ctx.identity.id);
                CapabilityView::real(&ctx.identity, elevated)
            }
        };

        let capability = Capability::new(page.capability);
        let response = if view.can(&capability) {
            debug!(request_id = %ctx.request_id, path = page.path, "page rendered");
            PageResponse::Rendered {
                path: page.path.to_string(),
                role: view.primary_role.clone(),
            }
        } else {
            warn!(
                request_id = %ctx.request_id,
                path = page.path,
                capability = page.capability,
                "page access denied"
            );
            match self.controller.access_denied(&outcome) {
                Some(recovery) => PageResponse::Recovery(recovery),
                None => PageResponse::Forbidden {
                    path: page.path.to_string(),
                    capability: page.capability.to_string(),
                },
            }
        };

        let menu = self.controller.menu(&outcome);
        Ok(PageVisit { outcome, view, menu, response })
    }

    /// Every request record written so far, oldest first.
    pub fn records(&self) -> RolequickResult<Vec<RequestRecord>> {
        self.records
            .lock()
            .map(|r| r.clone())
            .map_err(|e| RolequickError::ConfigError {
                reason: format!("request log lock poisoned: {}", e),
            })
    }

    /// Return `AccessDenied` unless `visit` rendered `page`.
    pub fn require_rendered(visit: &PageVisit, page: Page) -> RolequickResult<()> {
        match visit.response {
            PageResponse::Rendered { .. } => Ok(()),
            PageResponse::Recovery(_) | PageResponse::Forbidden { .. } => Err(RolequickError::AccessDenied {
                role: visit
                    .view
                    .primary_role
                    .as_ref()
                    .map(|r| r.0.clone())
                    .unwrap_or_default(),
                capability: page.capability.to_string(),
            }),
        }
    }
}
