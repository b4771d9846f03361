//! Error types for rolequick.
//!
//! Most conditions the controller meets (not privileged, no roles) are normal
//! no-op paths and never become errors. The variants here are the ones a
//! host may actually see.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RolequickError {
    /// The selected role is not declared in the role registry.
    #[error("unknown role '{role}' selected")]
    UnknownRole { role: String },

    /// The per-identity preference store could not be read or written.
    #[error("preference store error: {reason}")]
    PreferenceStore { reason: String },

    /// A required configuration value is missing or invalid.
    #[error("configuration error: {reason}")]
    ConfigError { reason: String },

    /// The presented role lacks a capability a page requires.
    #[error("role '{role}' lacks capability '{capability}'")]
    AccessDenied { role: String, capability: String },
}

/// Convenience alias used throughout the rolequick crates.
pub type RolequickResult<T> = Result<T, RolequickError>;
