//! # rolequick-roles
//!
//! A TOML-driven role catalogue for rolequick.
//!
//! ## Overview
//!
//! This crate provides [`TomlRoleRegistry`], which implements the
//! [`RoleRegistry`](rolequick_core::traits::RoleRegistry) trait. Roles are
//! declared in a TOML file together with an optional `[switcher]` table that
//! configures the controller.
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use std::path::Path;
//! use rolequick_roles::TomlRoleRegistry;
//!
//! let registry = TomlRoleRegistry::from_file(Path::new("roles.toml"))?;
//! // Pass `registry` and `registry.settings()` to `ImpersonationController::new(...)`.
//! ```

pub mod config;
pub mod registry;

pub use config::{RoleEntry, RolesConfig};
pub use registry::TomlRoleRegistry;

// ── Tests ─────────────────────────────────────────────────────────────────────
