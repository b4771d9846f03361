//! Scenario 2: Persisted Preference
//!
//! The selection survives across requests through the preference store and
//! is cleared only by posting the default sentinel.

use rolequick_contracts::{error::RolequickResult, PREFERENCE_KEY};
use rolequick_core::traits::PreferenceStore;
use rolequick_store::InMemoryPreferenceStore;

use crate::{
    host::CmsHost,
    mock_data::{ADA, POSTS, USERS},
    scenarios::{describe_outcome, describe_response},
};

/// Run Scenario 2: Persisted Preference.
pub fn run_scenario() -> RolequickResult<()> {
    println!("=== Scenario 2: Persisted Preference ===");
    println!();

    let prefs = InMemoryPreferenceStore::new();
    let host = CmsHost::new(Box::new(prefs.clone()))?;

    let steps: [(&str, Option<&str>); 4] = [
        ("select author", Some("author")),
        ("next request, nothing posted", None),
        ("post default", Some("default")),
        ("next request, nothing posted", None),
    ];

    for (i, (label, form)) in steps.iter().enumerate() {
        let visit = host.visit(ADA, USERS, *form)?;
        println!("  Request {} ({}):", i + 1, label);
        println!("    Outcome:     {}", describe_outcome(&visit.outcome));
        println!("    Stored:      {:?}", prefs.get(ADA, PREFERENCE_KEY)?);
        println!("    {}: {}", USERS.path, describe_response(&visit.response));
    }

    let posts = host.visit(ADA, POSTS, None)?;
    CmsHost::require_rendered(&posts, POSTS)?;

    println!("  Request log:");
    for record in host.records()? {
        println!(
            "    {}  {}  {}",
            record.timestamp.format("%H:%M:%S%.3f"),
            record.request_id,
            record.outcome
        );
    }
    println!("  RESULT: preference re-applied until cleared (expected)");
    println!();
    println!("  Scenario 2 complete.");
    println!();
    Ok(())
}
