//! # Application Errors
//!
//! Error types for the application layer.
//!
//! # Error Hierarchy
//!
//! ```text
//! ApplicationError
//! ├── EmptyRequest               - Nothing to compute (expected outcome)
//! ├── Infeasible                 - Solver found no trade (expected outcome)
//! ├── SolverTransportFailure     - Solver unreachable, timed out or garbled
//! └── RateLookupInconsistency    - Allocated basket missing from rate table
//! ```
//!
//! # Examples
//!
//! ```
//! use trade_advisor::application::error::ApplicationError;
//! use trade_advisor::infrastructure::solver::SolverError;
//!
//! let err: ApplicationError = SolverError::connection("refused").into();
//! assert!(err.is_failure());
//! assert!(err.is_retryable());
//!
//! assert!(ApplicationError::EmptyRequest.is_no_result());
//! ```

use crate::domain::errors::DomainError;
use crate::domain::value_objects::ResourceCounts;
use crate::infrastructure::solver::error::SolverError;
use thiserror::Error;

/// Application layer error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApplicationError {
    /// The normalized request carries no usable field.
    #[error("empty request: nothing to compute")]
    EmptyRequest,

    /// The solver ran and found no valid trade.
    #[error("no feasible trade")]
    Infeasible,

    /// The solver could not be reached or answered with garbage.
    #[error("solver transport failure: {0}")]
    SolverTransportFailure(#[from] SolverError),

    /// An allocation has no entry in the accompanying rate table.
    #[error("rate lookup inconsistency: no rate for basket {allocation}")]
    RateLookupInconsistency {
        /// The basket that could not be valued.
        allocation: ResourceCounts,
    },
}

impl ApplicationError {
    /// Creates a rate lookup inconsistency error.
    #[must_use]
    pub fn rate_lookup_inconsistency(allocation: ResourceCounts) -> Self {
        Self::RateLookupInconsistency { allocation }
    }

    /// Returns true for the expected "no result" outcomes.
    #[must_use]
    pub fn is_no_result(&self) -> bool {
        matches!(self, Self::EmptyRequest | Self::Infeasible)
    }

    /// Returns true for genuine failures.
    #[must_use]
    pub fn is_failure(&self) -> bool {
        !self.is_no_result()
    }

    /// Returns true if retrying the same request may succeed.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::SolverTransportFailure(e) => e.is_retryable(),
            _ => false,
        }
    }
}

impl From<DomainError> for ApplicationError {
    fn from(error: DomainError) -> Self {
        match error {
            DomainError::RateNotFound(allocation) => Self::rate_lookup_inconsistency(allocation),
            other => Self::SolverTransportFailure(other.into()),
        }
    }
}

/// Result type for application operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
