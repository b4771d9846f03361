//! Scenario 3: Access Denied Recovery
//!
//! An administrator impersonating a subscriber opens the settings page. The
//! host denies it, and instead of a dead end the controller serves a page
//! with a single button that restores the real role.

use rolequick_contracts::error::RolequickResult;
use rolequick_store::InMemoryPreferenceStore;

use crate::{
    host::{CmsHost, PageResponse},
    mock_data::{ADA, SETTINGS},
    scenarios::{describe_outcome, describe_response},
};

/// Run Scenario 3: Access Denied Recovery.
pub fn run_scenario() -> RolequickResult<()> {
    println!("=== Scenario 3: Access Denied Recovery ===");
    println!();

    let host = CmsHost::new(Box::new(InMemoryPreferenceStore::new()))?;

    println!("  {} selects 'subscriber', then opens {}", host.user(ADA)?.login, SETTINGS.path);
    let denied = host.visit(ADA, SETTINGS, Some("subscriber"))?;
    println!("  Outcome:   {}", describe_outcome(&denied.outcome));
    println!("  Response:  {}", describe_response(&denied.response));

    let PageResponse::Recovery(page) = &denied.response else {
        println!("  No recovery page was offered");
        println!();
        return Ok(());
    };
    println!("  Page body: {}", page.html);

    // Pressing the button posts the hidden field back.
    let posted = page.recovery.submit().form_value().to_string();
    println!("  Button posts: {}={}", page.recovery.field, page.recovery.value);

    let restored = host.visit(ADA, SETTINGS, Some(&posted))?;
    println!("  Outcome:   {}", describe_outcome(&restored.outcome));
    println!("  Response:  {}", describe_response(&restored.response));
    CmsHost::require_rendered(&restored, SETTINGS)?;

    println!("  RESULT: one-click recovery to administrator (expected)");
    println!();
    println!("  Scenario 3 complete.");
    println!();
    Ok(())
}
