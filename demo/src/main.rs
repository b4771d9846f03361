//! rolequick CMS Reference Host: Demo CLI
//!
//! Runs the reference scenarios, or drives the reference host against a JSON
//! preference file so a selection persists between invocations.
//!
//! Usage:
//!   cargo run -p demo -- run-all
//!   cargo run -p demo -- switch-role
//!   cargo run -p demo -- visit --user 1 --role editor --page settings
//!   cargo run -p demo -- visit --user 1 --page settings
//!   cargo run -p demo -- menu --user 1

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

use rolequick_contracts::{error::RolequickResult, identity::IdentityId};
use rolequick_ref_cms::{
    host::{CmsHost, PageResponse},
    mock_data::{self, Page},
    scenarios::{access_denied, non_privileged, persisted_preference, switch_role},
};
use rolequick_store::JsonFilePreferenceStore;

// ── CLI definition ────────────────────────────────────────────────────────────

/// rolequick: temporary role switching for CMS administrators.
#[derive(Parser)]
#[command(
    name = "demo",
    about = "rolequick CMS reference host demo",
    long_about = "Runs rolequick reference scenarios showing the privilege gate,\n\
                  persisted role selection, capability replacement, and access-denied recovery."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run all four scenarios in sequence.
    RunAll,
    /// Scenario 1: an administrator switches to editor.
    SwitchRole,
    /// Scenario 2: the selection persists until the default sentinel clears it.
    PersistedPreference,
    /// Scenario 3: a denied page offers one-click recovery.
    AccessDenied,
    /// Scenario 4: non-privileged users are never changed.
    NonPrivileged,
    /// Request one admin page as a mock user, optionally posting a role.
    Visit {
        /// Mock user id (1 = ada, 2 = eli, 3 = sam, 4 = nora).
        #[arg(long)]
        user: u64,
        /// Posted role-switch value ("default" restores the real role).
        #[arg(long)]
        role: Option<String>,
        #[arg(long, value_enum, default_value_t = PageArg::Dashboard)]
        page: PageArg,
        /// JSON file holding stored role preferences.
        #[arg(long, default_value = "rolequick-prefs.json")]
        store: PathBuf,
    },
    /// Print the switcher menu data for a mock user.
    Menu {
        #[arg(long)]
        user: u64,
        #[arg(long, default_value = "rolequick-prefs.json")]
        store: PathBuf,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum PageArg {
    Dashboard,
    Posts,
    OthersPosts,
    Users,
    Settings,
}

impl PageArg {
    fn page(self) -> Page {
        match self {
            PageArg::Dashboard => mock_data::DASHBOARD,
            PageArg::Posts => mock_data::POSTS,
            PageArg::OthersPosts => mock_data::OTHERS_POSTS,
            PageArg::Users => mock_data::USERS,
            PageArg::Settings => mock_data::SETTINGS,
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() {
    // Initialize structured logging.  Set RUST_LOG=debug for verbose output.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .compact()
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Command::RunAll => run_all(),
        Command::SwitchRole => switch_role::run_scenario(),
        Command::PersistedPreference => persisted_preference::run_scenario(),
        Command::AccessDenied => access_denied::run_scenario(),
        Command::NonPrivileged => non_privileged::run_scenario(),
        Command::Visit { user, role, page, store } => visit(user, role.as_deref(), page.page(), store),
        Command::Menu { user, store } => menu(user, store),
    };

    if let Err(e) = result {
        eprintln!("Demo error: {}", e);
        std::process::exit(1);
    }
}

// ── Commands ──────────────────────────────────────────────────────────────────

fn run_all() -> RolequickResult<()> {
    print_banner();
    switch_role::run_scenario()?;
    persisted_preference::run_scenario()?;
    access_denied::run_scenario()?;
    non_privileged::run_scenario()?;
    println!("All scenarios completed successfully.");
    Ok(())
}

fn visit(user: u64, role: Option<&str>, page: Page, store: PathBuf) -> RolequickResult<()> {
    info!(store = %store.display(), "using preference file");
    let host = CmsHost::new(Box::new(JsonFilePreferenceStore::new(store)))?;
    let visit = host.visit(IdentityId(user), page, role)?;

    println!("Outcome:      {}", visit.outcome.label());
    println!(
        "Presented as: {}",
        visit.view.primary_role.as_ref().map(|r| r.as_str()).unwrap_or("no role")
    );
    println!("Elevated:     {}", visit.view.elevated);

    match &visit.response {
        PageResponse::Rendered { path, .. } => println!("200 {}", path),
        PageResponse::Recovery(recovery) => {
            println!("403 {} (recovery offered)", page.path);
            println!("{}", recovery.html);
        }
        PageResponse::Forbidden { path, capability } => {
            println!("403 {} (missing '{}')", path, capability)
        }
    }
    Ok(())
}

fn menu(user: u64, store: PathBuf) -> RolequickResult<()> {
    let host = CmsHost::new(Box::new(JsonFilePreferenceStore::new(store)))?;
    let visit = host.visit(IdentityId(user), mock_data::DASHBOARD, None)?;

    match visit.menu {
        Some(menu) => {
            let data = serde_json::json!({ "node": menu.node, "script": menu.script_data() });
            match serde_json::to_string_pretty(&data) {
                Ok(text) => println!("{}", text),
                Err(e) => eprintln!("failed to encode menu: {}", e),
            }
        }
        None => println!("Role switching is not available for user {}.", user),
    }
    Ok(())
}

// ── Banner ────────────────────────────────────────────────────────────────────

fn print_banner() {
    println!();
    println!("rolequick — Role Quick Change");
    println!("CMS Reference Demo");
    println!("=============================");
    println!();
    println!("Per request:");
    println!("  [1] Gate: only the privileged real role may switch roles");
    println!("  [2] Resolve: posted value, else stored preference, else real role");
    println!("  [3] Apply: capabilities replaced with the chosen role's set");
    println!("  [4] Denied pages offer a one-click return to the real role");
    println!();
}
