//! Contract error types for the employee search service
//!
//! These errors are transport-agnostic; the REST layer maps them to
//! HTTP Problem Details.

use thiserror::Error;

/// Employee service domain errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EmployeeError {
    /// No employee matched the request
    #[error("employee not found: {what}")]
    NotFound {
        /// Description of what was looked up
        what: String,
    },

    /// Request was structurally invalid
    #[error("validation error: {message}")]
    Validation {
        /// Validation error message
        message: String,
    },

    /// Failure in the underlying store
    #[error("internal error")]
    Internal,
}
