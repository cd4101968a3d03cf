//! Error types for hostaudit operations.
//!
//! This module defines [`AuditError`], the primary error type used throughout
//! the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Every `AuditError` is fatal for the run that produced it
//! - Recoverable conditions never become errors; they are reported as
//!   warnings through a [`Reporter`](crate::ui::Reporter) and replaced with a
//!   default value at the point of detection
//! - Use `anyhow::Error` (via `AuditError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for hostaudit operations.
#[derive(Debug, Error)]
pub enum AuditError {
    /// A required component has no running binary among its candidates.
    #[error("need {component} executable but none of the candidates are running")]
    ExecutableNotRunning { component: String },

    /// A candidate config file could not be inspected for a reason other
    /// than it not existing.
    #[error("error looking for file {}: {source}", path.display())]
    ConfigLookup {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Component catalog not found at the expected location.
    #[error("Component catalog not found: {}", path.display())]
    CatalogNotFound { path: PathBuf },

    /// Failed to parse the component catalog.
    #[error("Failed to parse catalog at {}: {message}", path.display())]
    CatalogParse { path: PathBuf, message: String },

    /// Catalog parsed but its contents are inconsistent.
    #[error("Invalid catalog: {message}")]
    CatalogInvalid { message: String },

    /// An expected version baseline could not be understood.
    #[error("Invalid expected version '{input}': {message}")]
    InvalidVersion { input: String, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for hostaudit operations.
pub type Result<T> = std::result::Result<T, AuditError>;
