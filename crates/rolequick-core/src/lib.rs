//! # rolequick-core
//!
//! The request-scoped role impersonation runtime for rolequick.
//!
//! This crate provides:
//! - The three host collaborator traits (`RoleRegistry`, `PreferenceStore`,
//!   `ElevationRegistry`)
//! - The `ImpersonationController` that gates, resolves, and applies a role
//!   switch once per request
//! - The access-denied recovery page and the role switcher menu model
//!
//! ## Usage
//!
//! ```rust,ignore
//! use rolequick_core::{ImpersonationController, ControllerSettings};
//!
//! let controller = ImpersonationController::new(roles, prefs, elevation, ControllerSettings::default());
//! let outcome = controller.handle_request(&ctx)?;
//! ```

pub mod controller;
pub mod denied;
pub mod elevation;
pub mod menu;
pub mod settings;
pub mod traits;

pub use controller::ImpersonationController;
pub use settings::{ControllerSettings, UnknownRolePolicy};
