//! # Solver Errors
//!
//! Failures at the solver boundary.
//!
//! A solver that ran and found nothing is *not* an error: that outcome is
//! [`SolverResponse::Infeasible`](super::traits::SolverResponse::Infeasible).
//! These errors cover the call itself failing.
//!
//! # Examples
//!
//! ```
//! use trade_advisor::infrastructure::solver::error::SolverError;
//!
//! let error = SolverError::timeout("solver did not answer");
//! assert!(error.is_retryable());
//!
//! let error = SolverError::protocol("unexpected body");
//! assert!(!error.is_retryable());
//! ```

use crate::domain::errors::DomainError;
use thiserror::Error;

/// Error type for solver client operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolverError {
    /// The call timed out.
    #[error("solver timeout: {message}")]
    Timeout {
        /// Error message.
        message: String,
        /// Timeout duration in milliseconds.
        timeout_ms: Option<u64>,
    },

    /// Network or connection error.
    #[error("solver connection error: {message}")]
    Connection {
        /// Error message.
        message: String,
    },

    /// The solver rejected the request.
    #[error("solver invalid request: {message}")]
    InvalidRequest {
        /// Error message.
        message: String,
    },

    /// The response did not follow the solver protocol.
    #[error("solver protocol error: {message}")]
    Protocol {
        /// Error message.
        message: String,
    },

    /// The caller abandoned the call.
    #[error("solver call cancelled")]
    Cancelled,

    /// Failure inside the solver client itself.
    #[error("solver internal error: {message}")]
    Internal {
        /// Error message.
        message: String,
    },
}

impl SolverError {
    /// Creates a timeout error.
    #[must_use]
    pub fn timeout(message: impl Into<String>) -> Self {
        Self::Timeout {
            message: message.into(),
            timeout_ms: None,
        }
    }

    /// Creates a timeout error with duration.
    #[must_use]
    pub fn timeout_with_duration(message: impl Into<String>, timeout_ms: u64) -> Self {
        Self::Timeout {
            message: message.into(),
            timeout_ms: Some(timeout_ms),
        }
    }

    /// Creates a connection error.
    #[must_use]
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Creates an invalid request error.
    #[must_use]
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::InvalidRequest {
            message: message.into(),
        }
    }

    /// Creates a protocol error.
    #[must_use]
    pub fn protocol(message: impl Into<String>) -> Self {
        Self::Protocol {
            message: message.into(),
        }
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Returns true if retrying the same call may succeed.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Timeout { .. } | Self::Connection { .. })
    }

    /// Returns true if this is a timeout error.
    #[must_use]
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout { .. })
    }
}

impl From<DomainError> for SolverError {
    fn from(error: DomainError) -> Self {
        Self::protocol(error.to_string())
    }
}

/// Result type for solver operations.
pub type SolverResult<T> = Result<T, SolverError>;
