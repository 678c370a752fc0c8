//! # Solver Client Trait
//!
//! Port definition for allocation solvers.
//!
//! Every solver, whatever its wire shape, is consumed through
//! [`SolverClient`] and answers with a [`SolverResponse`]. Ranking code only
//! ever sees a [`SolvedTrade`]: one rate table plus the solver's best
//! candidate.
//!
//! # Examples
//!
//! ```ignore
//! use trade_advisor::infrastructure::solver::traits::{SolverClient, SolverResponse};
//! use trade_advisor::infrastructure::solver::error::SolverResult;
//!
//! struct MySolver { /* ... */ }
//!
//! #[async_trait::async_trait]
//! impl SolverClient for MySolver {
//!     // ... implement required methods
//! }
//! ```

use crate::domain::entities::{CandidateTrade, RateTable, TradeRequest};
use crate::infrastructure::solver::error::SolverResult;
use async_trait::async_trait;
use std::collections::BTreeSet;
use std::fmt;

/// A solver answer with at least one usable candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolvedTrade {
    rate_table: RateTable,
    best: CandidateTrade,
    alternatives: Vec<CandidateTrade>,
}

impl SolvedTrade {
    /// Returns the rate table that accompanied the candidates.
    #[inline]
    #[must_use]
    pub fn rate_table(&self) -> &RateTable {
        &self.rate_table
    }

    /// Returns the solver's top-ranked candidate.
    #[inline]
    #[must_use]
    pub fn best(&self) -> &CandidateTrade {
        &self.best
    }

    /// Returns the remaining candidates, in solver order.
    #[inline]
    #[must_use]
    pub fn alternatives(&self) -> &[CandidateTrade] {
        &self.alternatives
    }

    /// Total number of candidates returned.
    #[must_use]
    pub fn candidate_count(&self) -> usize {
        1 + self.alternatives.len()
    }
}

/// Unified answer from any solver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolverResponse {
    /// The solver found at least one trade.
    Solved(SolvedTrade),
    /// The solver ran and found no valid trade.
    Infeasible,
}

impl SolverResponse {
    /// Builds a response from a rate table and solver-ranked candidates.
    ///
    /// An empty list, or a first candidate that gives up nothing, is
    /// infeasible.
    #[must_use]
    pub fn from_candidates(rate_table: RateTable, candidates: Vec<CandidateTrade>) -> Self {
        let mut candidates = candidates.into_iter();
        match candidates.next() {
            Some(best) if !best.is_empty() => Self::Solved(SolvedTrade {
                rate_table,
                best,
                alternatives: candidates.collect(),
            }),
            _ => Self::Infeasible,
        }
    }

    /// Returns true if the solver found no trade.
    #[must_use]
    pub fn is_infeasible(&self) -> bool {
        matches!(self, Self::Infeasible)
    }

    /// Returns the solved trade, if any.
    #[must_use]
    pub fn solved(&self) -> Option<&SolvedTrade> {
        match self {
            Self::Solved(solved) => Some(solved),
            Self::Infeasible => None,
        }
    }
}

/// Trait defining the interface for solver clients.
///
/// Implementations map their own transport and decoding failures to
/// `SolverError` and report "nothing found" as `SolverResponse::Infeasible`.
#[async_trait]
pub trait SolverClient: Send + Sync + fmt::Debug {
    /// Returns a short name used in logs.
    fn name(&self) -> &str;

    /// Returns the flag names this solver understands.
    fn recognized_flags(&self) -> &BTreeSet<String>;

    /// Solves a request.
    ///
    /// # Errors
    ///
    /// - `SolverError::Timeout` - The solver did not answer in time
    /// - `SolverError::Connection` - The solver could not be reached
    /// - `SolverError::InvalidRequest` - The solver refused the request
    /// - `SolverError::Protocol` - The answer could not be decoded
    async fn solve(&self, request: &TradeRequest) -> SolverResult<SolverResponse>;
}
