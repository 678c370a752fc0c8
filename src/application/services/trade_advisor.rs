//! # Trade Advisor
//!
//! End-to-end flow for one submission:
//!
//! ```text
//! raw fields ─► normalize ─► solver ─► rank best trade ─► assemble
//! ```
//!
//! The solver call is the only suspension point. "Nothing to compute" and
//! "no feasible trade" are ordinary [`Recommendation`]s; transport and
//! rate-table failures surface as [`ApplicationError`].
//!
//! # Examples
//!
//! ```ignore
//! use std::sync::Arc;
//! use trade_advisor::application::services::{TradeAdvisor, ValueThenUnitsStrategy};
//! use trade_advisor::infrastructure::solver::LocalSolver;
//!
//! let advisor = TradeAdvisor::with_defaults(
//!     Arc::new(LocalSolver::new()),
//!     Arc::new(ValueThenUnitsStrategy::new()),
//! );
//! let recommendation = advisor.advise([("d", "2"), ("c", "2")]).await?;
//! ```

use crate::application::error::{ApplicationError, ApplicationResult};
use crate::application::services::presentation;
use crate::application::services::ranking_strategy::RankingStrategy;
use crate::application::services::request_normalizer::normalize;
use crate::domain::entities::{TradeRequest, TradeResult};
use crate::infrastructure::solver::error::{SolverError, SolverResult};
use crate::infrastructure::solver::traits::{SolverClient, SolverResponse};
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::timeout;
use tracing::{Instrument, Span, debug, info, info_span, warn};
use uuid::Uuid;

/// Configuration for the trade advisor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdvisorConfig {
    /// Upper bound for one solver call in milliseconds, if any.
    pub solver_timeout_ms: Option<u64>,
}

impl AdvisorConfig {
    /// Sets the solver call timeout.
    #[must_use]
    pub fn with_solver_timeout(mut self, timeout_ms: u64) -> Self {
        self.solver_timeout_ms = Some(timeout_ms);
        self
    }
}

/// Outcome of a successful advisory call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Recommendation {
    /// The best trade, ranked for display.
    Trade(TradeResult),
    /// The request carried no usable field; the solver was not called.
    NothingToCompute,
    /// The solver found no valid trade.
    NoFeasibleTrade,
}

impl Recommendation {
    /// Returns the trade result, if any.
    #[must_use]
    pub fn trade(&self) -> Option<&TradeResult> {
        match self {
            Self::Trade(result) => Some(result),
            Self::NothingToCompute | Self::NoFeasibleTrade => None,
        }
    }

    /// Returns true if a trade was recommended.
    #[must_use]
    pub fn is_trade(&self) -> bool {
        matches!(self, Self::Trade(_))
    }

    /// Converts the no-result outcomes into their error kinds.
    ///
    /// # Errors
    ///
    /// - `ApplicationError::EmptyRequest` for [`Recommendation::NothingToCompute`]
    /// - `ApplicationError::Infeasible` for [`Recommendation::NoFeasibleTrade`]
    pub fn into_result(self) -> ApplicationResult<TradeResult> {
        match self {
            Self::Trade(result) => Ok(result),
            Self::NothingToCompute => Err(ApplicationError::EmptyRequest),
            Self::NoFeasibleTrade => Err(ApplicationError::Infeasible),
        }
    }
}

/// Orchestrates normalization, the solver call, ranking and assembly.
///
/// Holds no per-request state; share it behind an `Arc`.
#[derive(Debug, Clone)]
pub struct TradeAdvisor {
    solver: Arc<dyn SolverClient>,
    ranking_strategy: Arc<dyn RankingStrategy>,
    config: AdvisorConfig,
}

impl TradeAdvisor {
    /// Creates a new advisor.
    #[must_use]
    pub fn new(
        solver: Arc<dyn SolverClient>,
        ranking_strategy: Arc<dyn RankingStrategy>,
        config: AdvisorConfig,
    ) -> Self {
        Self {
            solver,
            ranking_strategy,
            config,
        }
    }

    /// Creates a new advisor with default configuration.
    #[must_use]
    pub fn with_defaults(
        solver: Arc<dyn SolverClient>,
        ranking_strategy: Arc<dyn RankingStrategy>,
    ) -> Self {
        Self::new(solver, ranking_strategy, AdvisorConfig::default())
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &AdvisorConfig {
        &self.config
    }

    /// Returns the name of the ranking strategy in use.
    #[must_use]
    pub fn ranking_strategy_name(&self) -> &'static str {
        self.ranking_strategy.name()
    }

    /// Runs the full flow for raw form fields.
    ///
    /// # Errors
    ///
    /// - `ApplicationError::SolverTransportFailure` - The solver call failed
    /// - `ApplicationError::RateLookupInconsistency` - An allocation has no rate
    pub async fn advise<I, K, V>(&self, fields: I) -> ApplicationResult<Recommendation>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        self.advise_until(fields, futures::future::pending()).await
    }

    /// Runs the full flow, abandoning the solver call once `cancel` completes.
    ///
    /// Abandoning only drops the pending answer. A [`LocalSolver`] search
    /// already handed to the blocking pool runs to completion and its result
    /// is discarded; the unit cap bounds that cost.
    ///
    /// [`LocalSolver`]: crate::infrastructure::solver::LocalSolver
    ///
    /// # Errors
    ///
    /// As [`TradeAdvisor::advise`]; cancellation is reported as
    /// `ApplicationError::SolverTransportFailure(SolverError::Cancelled)`.
    pub async fn advise_until<I, K, V, F>(
        &self,
        fields: I,
        cancel: F,
    ) -> ApplicationResult<Recommendation>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
        F: Future<Output = ()> + Send,
    {
        let span = self.call_span();
        let normalized = span.in_scope(|| normalize(fields, self.solver.recognized_flags()));

        match normalized {
            Ok(request) => self.process(&request, cancel).instrument(span).await,
            Err(ApplicationError::EmptyRequest) => {
                span.in_scope(|| debug!("nothing to compute"));
                Ok(Recommendation::NothingToCompute)
            }
            Err(e) => Err(e),
        }
    }

    /// Runs the flow for an already normalized request.
    ///
    /// # Errors
    ///
    /// As [`TradeAdvisor::advise`].
    pub async fn advise_request(
        &self,
        request: &TradeRequest,
    ) -> ApplicationResult<Recommendation> {
        let span = self.call_span();
        self.process(request, futures::future::pending())
            .instrument(span)
            .await
    }

    fn call_span(&self) -> Span {
        info_span!(
            "advise",
            call_id = %Uuid::new_v4(),
            solver = self.solver.name(),
            ranking = self.ranking_strategy.name(),
        )
    }

    async fn process<F>(
        &self,
        request: &TradeRequest,
        cancel: F,
    ) -> ApplicationResult<Recommendation>
    where
        F: Future<Output = ()> + Send,
    {
        if request.is_empty() {
            debug!("nothing to compute");
            return Ok(Recommendation::NothingToCompute);
        }

        let solved = match self.call_solver(request, cancel).await {
            Ok(SolverResponse::Solved(solved)) => solved,
            Ok(SolverResponse::Infeasible) => {
                debug!(%request, "no feasible trade");
                return Ok(Recommendation::NoFeasibleTrade);
            }
            Err(e) => {
                warn!(error = %e, retryable = e.is_retryable(), "solver call failed");
                return Err(e.into());
            }
        };

        let best = solved.best();
        let ranked = self
            .ranking_strategy
            .rank(best.allocations(), solved.rate_table())
            .inspect_err(|e| warn!(error = %e, trade = %best, "ranking failed"))?;

        let result = presentation::assemble(best, ranked);
        info!(%request, %result, candidates = solved.candidate_count(), "trade recommended");
        Ok(Recommendation::Trade(result))
    }

    async fn call_solver<F>(&self, request: &TradeRequest, cancel: F) -> SolverResult<SolverResponse>
    where
        F: Future<Output = ()> + Send,
    {
        let solve = async {
            match self.config.solver_timeout_ms {
                Some(timeout_ms) => {
                    timeout(Duration::from_millis(timeout_ms), self.solver.solve(request))
                        .await
                        .unwrap_or_else(|_| {
                            Err(SolverError::timeout_with_duration(
                                "solver call timed out",
                                timeout_ms,
                            ))
                        })
                }
                None => self.solver.solve(request).await,
            }
        };

        tokio::select! {
            result = solve => result,
            () = cancel => Err(SolverError::Cancelled),
        }
    }
}
