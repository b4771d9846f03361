//! Reference host demo scenarios.
//!
//! Each scenario builds a fresh `CmsHost` over an in-memory preference store
//! and walks through a sequence of requests showing one part of the role
//! switch lifecycle.

pub mod access_denied;
pub mod non_privileged;
pub mod persisted_preference;
pub mod switch_role;

use rolequick_contracts::request::RequestOutcome;

use crate::host::PageResponse;

pub(crate) fn describe_outcome(outcome: &RequestOutcome) -> String {
    match outcome {
        RequestOutcome::Skipped { reason } => format!("Skipped ({:?})", reason),
        RequestOutcome::Unchanged { .. } => "Unchanged (real role)".to_string(),
        RequestOutcome::Impersonated { role, .. } => format!("Impersonating '{}'", role),
        RequestOutcome::Rejected { role, .. } => format!("Rejected unknown role '{}'", role),
    }
}

pub(crate) fn describe_response(response: &PageResponse) -> String {
    match response {
        PageResponse::Rendered { path, role } => format!(
            "200 {} (as {})",
            path,
            role.as_ref().map(|r| r.as_str()).unwrap_or("no role")
        ),
        PageResponse::Recovery(page) => format!("403 recovery page for '{}'", page.role),
        PageResponse::Forbidden { path, capability } => {
            format!("403 {} (missing '{}')", path, capability)
        }
    }
}
