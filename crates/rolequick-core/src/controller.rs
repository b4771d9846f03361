//! The impersonation controller: the per-request role switch.
//!
//! Each request runs through the same sequence:
//!
//!   Real role → Gate → Resolve desired role → Apply → (Access denied override)
//!
//! The gate is the only authorization boundary. Nothing after it, including
//! reading or writing the stored preference, runs unless the identity's real
//! primary role is the privileged role.

use chrono::Utc;
use tracing::{debug, info, warn};

use rolequick_contracts::{
    capability::Capability,
    error::{RolequickError, RolequickResult},
    identity::{Identity, IdentityId, RoleId},
    request::{RequestContext, RequestOutcome, RequestRecord, SkipReason},
    role::{DesiredRole, RoleSelection},
    view::CapabilityView,
};

use crate::{
    denied::AccessDeniedResponse,
    elevation::ElevationScope,
    menu::RoleMenu,
    settings::{ControllerSettings, UnknownRolePolicy},
    traits::{ElevationRegistry, PreferenceStore, RoleRegistry},
};

/// Owns the host collaborators and runs the role switch for each request.
///
/// One controller serves every request; it holds no per-request state.
pub struct ImpersonationController {
    roles: Box<dyn RoleRegistry>,
    preferences: Box<dyn PreferenceStore>,
    elevation: Box<dyn ElevationRegistry>,
    settings: ControllerSettings,
}

impl ImpersonationController {
    pub fn new(
        roles: Box<dyn RoleRegistry>,
        preferences: Box<dyn PreferenceStore>,
        elevation: Box<dyn ElevationRegistry>,
        settings: ControllerSettings,
    ) -> Self {
        Self { roles, preferences, elevation, settings }
    }

    pub fn settings(&self) -> &ControllerSettings {
        &self.settings
    }

    pub fn registry(&self) -> &dyn RoleRegistry {
        self.roles.as_ref()
    }

    /// The identity's real primary role, or `None` when it has no roles.
    pub fn resolve_real_role(&self, identity: &Identity) -> Option<RoleId> {
        identity.primary_role().cloned()
    }

    /// The privilege gate. A missing role is never privileged.
    pub fn is_privileged(&self, real_role: Option<&RoleId>) -> bool {
        real_role == Some(&self.settings.privileged_role)
    }

    /// Decide which role to present, updating the stored preference.
    ///
    /// - `RestoreDefault` deletes the preference → `NoImpersonation`
    /// - `Role(r)` stores `r` verbatim → `Impersonate(r)`
    /// - no selection → the stored preference, or `NoImpersonation`
    pub fn resolve_desired(
        &self,
        identity: IdentityId,
        selection: Option<RoleSelection>,
    ) -> RolequickResult<DesiredRole> {
        let key = self.settings.preference_key.as_str();

        match selection {
            Some(RoleSelection::RestoreDefault) => {
                self.preferences.delete(identity, key)?;
                info!(identity = %identity, "role preference cleared");
                Ok(DesiredRole::NoImpersonation)
            }
            Some(RoleSelection::Role(role)) => {
                self.preferences.set(identity, key, role.as_str())?;
                info!(identity = %identity, role = %role, "role preference stored");
                Ok(DesiredRole::Impersonate(role))
            }
            None => {
                let stored = self.preferences.get(identity, key)?;
                debug!(identity = %identity, stored = ?stored, "role preference read");
                Ok(match stored.filter(|v| !v.is_empty()) {
                    Some(value) => DesiredRole::Impersonate(RoleId::new(value)),
                    None => DesiredRole::NoImpersonation,
                })
            }
        }
    }

    /// Compute the capability view for `desired`.
    ///
    /// Impersonating replaces the effective capabilities wholesale with the
    /// target role's set, swaps the assigned role entry from `real_role` to
    /// the target, and (for non-privileged targets) clears elevation on
    /// `scope`. An undeclared target returns `UnknownRole` and leaves
    /// `scope` untouched.
    pub fn apply(
        &self,
        identity: &Identity,
        real_role: &RoleId,
        desired: &DesiredRole,
        scope: &mut ElevationScope,
    ) -> RolequickResult<CapabilityView> {
        let target = match desired {
            DesiredRole::NoImpersonation => {
                return Ok(CapabilityView::real(identity, scope.contains(identity.id)));
            }
            DesiredRole::Impersonate(role) => role,
        };

        let definition = self.roles.role(target).ok_or_else(|| RolequickError::UnknownRole {
            role: target.0.clone(),
        })?;

        // Elevation bypasses capability checks entirely, so a lesser role
        // would have no effect while it is set.
        if target != &self.settings.privileged_role && scope.contains(identity.id) {
            scope.clear();
            info!(identity = %identity.id, role = %target, "elevation suppressed for this request");
        }

        let mut assigned = identity.assigned.clone();
        assigned.remove(&Capability::new(real_role.as_str()));
        assigned.grant(Capability::new(target.as_str()));

        Ok(CapabilityView {
            identity: identity.id,
            real_role: Some(real_role.clone()),
            primary_role: Some(target.clone()),
            capabilities: definition.capabilities,
            assigned,
            elevated: scope.contains(identity.id),
            impersonating: Some(target.clone()),
        })
    }

    /// Run the full role switch for one request.
    ///
    /// # Errors
    ///
    /// Preference store failures propagate. An unknown role always deletes
    /// the stored preference. It then propagates under
    /// `UnknownRolePolicy::Reject`; otherwise the request falls back to the
    /// real role.
    pub fn handle_request(&self, ctx: &RequestContext) -> RolequickResult<RequestOutcome> {
        let identity = &ctx.identity;

        let Some(real_role) = self.resolve_real_role(identity) else {
            debug!(request_id = %ctx.request_id, identity = %identity.id, "identity has no roles");
            return Ok(RequestOutcome::Skipped { reason: SkipReason::MissingRoleAssignment });
        };

        if !self.is_privileged(Some(&real_role)) {
            debug!(
                request_id = %ctx.request_id,
                identity = %identity.id,
                role = %real_role,
                "role switching not available for this role"
            );
            return Ok(RequestOutcome::Skipped { reason: SkipReason::NotPrivileged });
        }

        let desired = self.resolve_desired(identity.id, ctx.selection())?;
        let mut scope = ElevationScope::capture(self.elevation.as_ref());

        match self.apply(identity, &real_role, &desired, &mut scope) {
            Ok(view) => Ok(match desired {
                DesiredRole::NoImpersonation => RequestOutcome::Unchanged { view },
                DesiredRole::Impersonate(role) => {
                    debug!(request_id = %ctx.request_id, identity = %identity.id, role = %role, "impersonating");
                    RequestOutcome::Impersonated { role, view }
                }
            }),
            Err(RolequickError::UnknownRole { role }) => {
                // Forget the bad selection under either policy so the next
                // request starts from the real role.
                self.preferences.delete(identity.id, &self.settings.preference_key)?;
                match self.settings.unknown_role {
                    UnknownRolePolicy::FallBack => {
                        warn!(
                            request_id = %ctx.request_id,
                            identity = %identity.id,
                            role = %role,
                            "selected role is not declared; falling back to real role"
                        );
                        Ok(RequestOutcome::Rejected {
                            role: RoleId::new(role),
                            view: CapabilityView::real(identity, scope.contains(identity.id)),
                        })
                    }
                    UnknownRolePolicy::Reject => {
                        warn!(
                            request_id = %ctx.request_id,
                            identity = %identity.id,
                            role = %role,
                            "selected role is not declared; rejecting request"
                        );
                        Err(RolequickError::UnknownRole { role })
                    }
                }
            }
            Err(e) => Err(e),
        }
    }

    /// The override page for a denied page, or `None` when the host's own
    /// response should stand (the identity is not impersonating).
    pub fn access_denied(&self, outcome: &RequestOutcome) -> Option<AccessDeniedResponse> {
        let RequestOutcome::Impersonated { role, .. } = outcome else {
            return None;
        };

        let role_name = self.display_name(role);
        let privileged_name = self.display_name(&self.settings.privileged_role);
        info!(role = %role, "rendering access-denied recovery page");
        Some(AccessDeniedResponse::render(role, &role_name, &privileged_name))
    }

    /// The role switcher menu, for privileged requests only.
    pub fn menu(&self, outcome: &RequestOutcome) -> Option<RoleMenu> {
        let desired = match outcome {
            RequestOutcome::Skipped { .. } => return None,
            RequestOutcome::Impersonated { role, .. } => DesiredRole::Impersonate(role.clone()),
            RequestOutcome::Unchanged { .. } | RequestOutcome::Rejected { .. } => {
                DesiredRole::NoImpersonation
            }
        };
        Some(RoleMenu::build(self.roles.as_ref(), &self.settings.privileged_role, &desired))
    }

    /// Summarize a processed request for the host's logs.
    pub fn record(&self, ctx: &RequestContext, outcome: &RequestOutcome) -> RequestRecord {
        let desired = match outcome {
            RequestOutcome::Skipped { .. } => None,
            RequestOutcome::Impersonated { role, .. } => Some(DesiredRole::Impersonate(role.clone())),
            RequestOutcome::Unchanged { .. } | RequestOutcome::Rejected { .. } => {
                Some(DesiredRole::NoImpersonation)
            }
        };
        RequestRecord {
            request_id: ctx.request_id,
            identity: ctx.identity.id,
            real_role: self.resolve_real_role(&ctx.identity),
            desired,
            outcome: outcome.label().to_string(),
            timestamp: Utc::now(),
        }
    }

    fn display_name(&self, role: &RoleId) -> String {
        self.roles
            .role(role)
            .map(|d| d.name)
            .unwrap_or_else(|| role.0.clone())
    }
}

// ── Tests ────────────────────────────────────────────────────────────────────
