//! Error types for the reconciliation engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for the conditions that abort an operation. Per-shift problems are not
//! errors; they are reported as [`SkipReason`](crate::reconciliation::SkipReason)
//! diagnostics instead.

use thiserror::Error;

/// The main error type for the reconciliation engine.
///
/// Only failures that make a whole operation meaningless end up here:
/// configuration problems and transport failures from the record source
/// or the employee lookup.
///
/// # Example
///
/// ```
/// use punchclock_reconcile::error::ReconcileError;
///
/// let error = ReconcileError::ConfigNotFound {
///     path: "/missing/reconcile.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/reconcile.yaml");
/// ```
#[derive(Debug, Error)]
pub enum ReconcileError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Configuration parsed but holds a value the engine cannot work with.
    #[error("Invalid configuration field '{field}': {message}")]
    InvalidConfig {
        /// The offending field.
        field: String,
        /// Why the value was rejected.
        message: String,
    },

    /// A page size of zero was requested; such a fetch could never terminate.
    #[error("Page size must be greater than zero")]
    InvalidPageSize,

    /// A page fetch or employee lookup failed.
    #[error("Transport failure during {operation}: {message}")]
    Transport {
        /// The operation that failed (e.g. "fetch_page", "get_employee").
        operation: String,
        /// A description of the failure.
        message: String,
    },
}

impl ReconcileError {
    /// Creates a transport failure for the given operation.
    pub fn transport(operation: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Transport {
            operation: operation.into(),
            message: message.into(),
        }
    }
}

/// A type alias for Results that return ReconcileError.
pub type ReconcileResult<T> = Result<T, ReconcileError>;
