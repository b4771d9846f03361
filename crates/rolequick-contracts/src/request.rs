//! Request-level inputs and outcomes.
//!
//! `RequestOutcome` is what the controller hands back to the host after the
//! privilege gate and impersonation have run. `RequestRecord` is the flat
//! summary a host writes to its logs, one per request.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    identity::{Identity, IdentityId, RoleId},
    role::{DesiredRole, RoleSelection},
    view::CapabilityView,
};

/// Unique identifier for one request, used to correlate log lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RequestId(pub uuid::Uuid);

impl RequestId {
    /// Create a new, unique request ID.
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4())
    }
}

impl Default for RequestId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Everything the controller reads from the current request.
#[derive(Debug, Clone)]
pub struct RequestContext {
    pub request_id: RequestId,
    pub identity: Identity,
    /// The raw value of the role-switch form field, when one was posted.
    pub form_value: Option<String>,
}

impl RequestContext {
    pub fn new(identity: Identity, form_value: Option<String>) -> Self {
        Self {
            request_id: RequestId::new(),
            identity,
            form_value,
        }
    }

    /// The parsed inbound selection, if the request carried a form value.
    pub fn selection(&self) -> Option<RoleSelection> {
        self.form_value.as_deref().map(RoleSelection::from_form_value)
    }
}

/// Why the controller left a request alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SkipReason {
    /// The real primary role is not the privileged role.
    NotPrivileged,
    /// The identity has no roles at all.
    MissingRoleAssignment,
}

/// The result of running the controller for one request.
///
/// Hosts pattern-match on this:
/// - `Skipped` → use the identity as built; no role-switch UI
/// - `Unchanged` → privileged, not impersonating
/// - `Impersonated` → every capability check must go through `view`
/// - `Rejected` → an unknown role was selected and discarded
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestOutcome {
    Skipped { reason: SkipReason },
    Unchanged { view: CapabilityView },
    Impersonated { role: RoleId, view: CapabilityView },
    Rejected { role: RoleId, view: CapabilityView },
}

impl RequestOutcome {
    /// The capability view for privileged outcomes, `None` when skipped.
    pub fn view(&self) -> Option<&CapabilityView> {
        match self {
            Self::Skipped { .. } => None,
            Self::Unchanged { view }
            | Self::Impersonated { view, .. }
            | Self::Rejected { view, .. } => Some(view),
        }
    }

    /// Short label used in logs and request records.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Skipped { reason: SkipReason::NotPrivileged } => "skipped:not-privileged",
            Self::Skipped { reason: SkipReason::MissingRoleAssignment } => "skipped:no-role",
            Self::Unchanged { .. } => "unchanged",
            Self::Impersonated { .. } => "impersonated",
            Self::Rejected { .. } => "rejected",
        }
    }
}

/// A flat, serializable summary of one processed request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestRecord {
    pub request_id: RequestId,
    pub identity: IdentityId,
    pub real_role: Option<RoleId>,
    /// What was presented. `None` for skipped requests.
    pub desired: Option<DesiredRole>,
    pub outcome: String,
    /// Wall-clock time the record was created (UTC).
    pub timestamp: DateTime<Utc>,
}
