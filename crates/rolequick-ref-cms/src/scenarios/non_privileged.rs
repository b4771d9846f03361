//! Scenario 4: Non-privileged Users
//!
//! Users whose real primary role is not the privileged role get no role
//! switching at all: posted values and stored preferences are ignored and
//! no menu is offered.

use rolequick_contracts::{error::RolequickResult, PREFERENCE_KEY};
use rolequick_core::traits::PreferenceStore;
use rolequick_store::InMemoryPreferenceStore;

use crate::{
    host::CmsHost,
    mock_data::{ELI, NORA, OTHERS_POSTS, SAM, SETTINGS, DASHBOARD},
    scenarios::{describe_outcome, describe_response},
};

/// Run Scenario 4: Non-privileged Users.
pub fn run_scenario() -> RolequickResult<()> {
    println!("=== Scenario 4: Non-privileged Users ===");
    println!();

    let prefs = InMemoryPreferenceStore::new();
    // A preference planted for sam by some earlier misconfiguration.
    prefs.set(SAM, PREFERENCE_KEY, "administrator")?;
    let host = CmsHost::new(Box::new(prefs.clone()))?;

    println!("  {} (editor) posts rqc=subscriber", host.user(ELI)?.login);
    let eli = host.visit(ELI, OTHERS_POSTS, Some("subscriber"))?;
    println!("    Outcome:   {}", describe_outcome(&eli.outcome));
    println!("    Response:  {}", describe_response(&eli.response));
    println!("    Menu:      {}", if eli.menu.is_some() { "shown" } else { "hidden" });
    println!("    Stored:    {:?}", prefs.get(ELI, PREFERENCE_KEY)?);
    CmsHost::require_rendered(&eli, OTHERS_POSTS)?;

    println!("  {} (subscriber) has a stored 'administrator' preference", host.user(SAM)?.login);
    let sam = host.visit(SAM, SETTINGS, None)?;
    println!("    Outcome:   {}", describe_outcome(&sam.outcome));
    println!("    Response:  {}", describe_response(&sam.response));

    println!("  {} (no role) posts rqc=editor", host.user(NORA)?.login);
    let nora = host.visit(NORA, DASHBOARD, Some("editor"))?;
    println!("    Outcome:   {}", describe_outcome(&nora.outcome));
    println!("    Response:  {}", describe_response(&nora.response));

    println!("  RESULT: no capability changes for non-privileged users (expected)");
    println!();
    println!("  Scenario 4 complete.");
    println!();
    Ok(())
}
