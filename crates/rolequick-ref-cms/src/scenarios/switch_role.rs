//! Scenario 1: Switch Role
//!
//! An elevated administrator selects "editor" from the switcher menu. The
//! selection is stored, the request's capabilities become exactly the
//! editor set, and elevation is suppressed so the switch actually bites.

use rolequick_contracts::{capability::Capability, error::RolequickResult, PREFERENCE_KEY};
use rolequick_core::traits::PreferenceStore;
use rolequick_store::InMemoryPreferenceStore;

use crate::{
    host::CmsHost,
    mock_data::{ADA, OTHERS_POSTS, SETTINGS},
    scenarios::{describe_outcome, describe_response},
};

/// Run Scenario 1: Switch Role.
pub fn run_scenario() -> RolequickResult<()> {
    println!("=== Scenario 1: Switch Role ===");
    println!();

    let prefs = InMemoryPreferenceStore::new();
    let host = CmsHost::new(Box::new(prefs.clone()))?;

    println!("  User: {} (administrator, elevated)", host.user(ADA)?.login);
    println!("  Posted: rqc=editor");

    let visit = host.visit(ADA, OTHERS_POSTS, Some("editor"))?;
    println!("  Controller outcome:     {}", describe_outcome(&visit.outcome));
    println!("  Stored preference:      {:?}", prefs.get(ADA, PREFERENCE_KEY)?);
    println!("  Elevated this request:  {}", visit.view.elevated);
    println!(
        "  Can manage_options:     {}",
        visit.view.can(&Capability::new("manage_options"))
    );
    println!("  {}:  {}", OTHERS_POSTS.path, describe_response(&visit.response));
    CmsHost::require_rendered(&visit, OTHERS_POSTS)?;

    if let Some(menu) = &visit.menu {
        let active = menu.active().map(|e| e.name.as_str()).unwrap_or("none");
        println!("  Menu active entry:      {}", active);
    }

    let settings = host.visit(ADA, SETTINGS, None)?;
    println!("  {}:  {}", SETTINGS.path, describe_response(&settings.response));
    println!("  RESULT: editor capabilities only (expected)");
    println!();

    // Leave the store clean for anyone sharing it.
    host.visit(ADA, SETTINGS, Some("default"))?;

    println!("  Scenario 1 complete.");
    println!();
    Ok(())
}
