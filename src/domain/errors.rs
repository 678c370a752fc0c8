//! # Domain Errors
//!
//! Errors raised by domain types independently of any solver or caller.

use crate::domain::value_objects::ResourceCounts;
use thiserror::Error;

/// Domain layer error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// A basket has no entry in the rate table.
    #[error("no rate for basket {0}")]
    RateNotFound(ResourceCounts),

    /// A rate-table key could not be decoded into a basket.
    #[error("invalid rate table key '{key}': {reason}")]
    InvalidRateKey {
        /// The offending key.
        key: String,
        /// Why decoding failed.
        reason: String,
    },
}

impl DomainError {
    /// Creates an invalid rate key error.
    #[must_use]
    pub fn invalid_rate_key(key: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidRateKey {
            key: key.into(),
            reason: reason.into(),
        }
    }
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
