//! # Local Solver
//!
//! In-process [`SolverClient`] implementing the game's exchange search.
//!
//! The search tries every rate that fits the hand (in schedule order),
//! recurses on what is left, and keeps the most valuable combinations. Each
//! remaining hand is solved once per call; nothing is cached across calls.
//!
//! Two flags adjust the default schedule:
//!
//! - `shell_modifier`: three shards are worth 8 instead of 5
//! - `tool_modifier`: adds a three-tool rate worth 10

use crate::domain::entities::{CandidateTrade, RateTable, TradeRequest};
use crate::domain::value_objects::ResourceCounts;
use crate::infrastructure::solver::error::{SolverError, SolverResult};
use crate::infrastructure::solver::traits::{SolverClient, SolverResponse};
use async_trait::async_trait;
use std::collections::{BTreeSet, HashMap, HashSet};
use tracing::{debug, instrument};

/// Flag raising the value of three shards.
pub const SHELL_MODIFIER_FLAG: &str = "shell_modifier";
/// Flag adding a three-tool rate.
pub const TOOL_MODIFIER_FLAG: &str = "tool_modifier";
/// Default cap on the number of units in a hand.
pub const DEFAULT_MAX_UNITS: u32 = 40;

const SHELL_MODIFIER_BASKET: ResourceCounts = ResourceCounts::new(3, 0, 0, 0);
const SHELL_MODIFIER_VALUE: u32 = 8;
const TOOL_MODIFIER_BASKET: ResourceCounts = ResourceCounts::new(0, 3, 0, 0);
const TOOL_MODIFIER_VALUE: u32 = 10;

/// A basket and what it redeems for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExchangeRate {
    /// Resources required.
    pub basket: ResourceCounts,
    /// Value of redeeming the basket.
    pub value: u32,
}

impl ExchangeRate {
    /// Creates an exchange rate.
    #[must_use]
    pub const fn new(basket: ResourceCounts, value: u32) -> Self {
        Self { basket, value }
    }
}

/// The game's default rate schedule, in search order.
pub const DEFAULT_RATES: [ExchangeRate; 11] = [
    ExchangeRate::new(ResourceCounts::new(0, 0, 2, 2), 14),
    ExchangeRate::new(ResourceCounts::new(1, 1, 1, 1), 12),
    ExchangeRate::new(ResourceCounts::new(0, 0, 0, 3), 11),
    ExchangeRate::new(ResourceCounts::new(1, 1, 1, 0), 9),
    ExchangeRate::new(ResourceCounts::new(0, 1, 2, 0), 9),
    ExchangeRate::new(ResourceCounts::new(1, 2, 0, 0), 7),
    ExchangeRate::new(ResourceCounts::new(3, 0, 0, 0), 5),
    ExchangeRate::new(ResourceCounts::new(0, 0, 0, 1), 2),
    ExchangeRate::new(ResourceCounts::new(0, 0, 1, 0), 2),
    ExchangeRate::new(ResourceCounts::new(0, 1, 0, 0), 2),
    ExchangeRate::new(ResourceCounts::new(1, 0, 0, 0), 1),
];

/// In-process solver over a fixed rate schedule.
#[derive(Debug, Clone)]
pub struct LocalSolver {
    rates: Vec<ExchangeRate>,
    recognized_flags: BTreeSet<String>,
    max_units: u32,
}

impl Default for LocalSolver {
    fn default() -> Self {
        Self::new()
    }
}

impl LocalSolver {
    /// Creates a solver over the default schedule.
    #[must_use]
    pub fn new() -> Self {
        Self::with_rates(DEFAULT_RATES.to_vec())
    }

    /// Creates a solver over a custom schedule.
    ///
    /// Empty baskets are dropped; they would never consume anything.
    #[must_use]
    pub fn with_rates(rates: Vec<ExchangeRate>) -> Self {
        Self {
            rates: rates.into_iter().filter(|r| !r.basket.is_empty()).collect(),
            recognized_flags: [SHELL_MODIFIER_FLAG, TOOL_MODIFIER_FLAG]
                .into_iter()
                .map(String::from)
                .collect(),
            max_units: DEFAULT_MAX_UNITS,
        }
    }

    /// Sets the largest hand, in units, the solver accepts.
    #[must_use]
    pub fn with_max_units(mut self, max_units: u32) -> Self {
        self.max_units = max_units;
        self
    }

    /// Returns the unit cap.
    #[inline]
    #[must_use]
    pub fn max_units(&self) -> u32 {
        self.max_units
    }

    /// Returns the schedule in effect for `request`, in search order.
    #[must_use]
    pub fn schedule_for(&self, request: &TradeRequest) -> Vec<ExchangeRate> {
        let mut schedule = self.rates.clone();
        if request.has_flag(SHELL_MODIFIER_FLAG) {
            for rate in schedule
                .iter_mut()
                .filter(|r| r.basket == SHELL_MODIFIER_BASKET)
            {
                rate.value = SHELL_MODIFIER_VALUE;
            }
        }
        if request.has_flag(TOOL_MODIFIER_FLAG)
            && !schedule.iter().any(|r| r.basket == TOOL_MODIFIER_BASKET)
        {
            schedule.push(ExchangeRate::new(TOOL_MODIFIER_BASKET, TOOL_MODIFIER_VALUE));
        }
        schedule
    }

    /// Finds every distinct full exchange of `hand`, best first.
    ///
    /// Candidates are ordered by total value, then by number of baskets
    /// (more first); equal candidates keep discovery order.
    #[must_use]
    pub fn search(hand: ResourceCounts, schedule: &[ExchangeRate]) -> Vec<CandidateTrade> {
        let mut memo = HashMap::new();
        exchange(hand, schedule, &mut memo)
    }
}

/// Solves `hand`, memoizing the top-valued trades of every sub-hand.
fn exchange(
    hand: ResourceCounts,
    schedule: &[ExchangeRate],
    memo: &mut HashMap<ResourceCounts, Vec<CandidateTrade>>,
) -> Vec<CandidateTrade> {
    if let Some(cached) = memo.get(&hand) {
        return cached.clone();
    }

    let mut found = Vec::new();
    for rate in schedule {
        let Some(remaining) = hand.checked_sub(&rate.basket) else {
            continue;
        };

        if remaining.is_empty() {
            found.push(CandidateTrade::new(vec![rate.basket], rate.value));
            continue;
        }

        for trade in exchange(remaining, schedule, memo) {
            let mut allocations = Vec::with_capacity(trade.len() + 1);
            allocations.push(rate.basket);
            allocations.extend_from_slice(trade.allocations());
            found.push(CandidateTrade::new(
                allocations,
                rate.value.saturating_add(trade.total_value()),
            ));
        }
    }

    // Permutations of the same baskets are the same trade.
    let mut seen = HashSet::with_capacity(found.len());
    found.retain(|trade| {
        let mut key = trade.allocations().to_vec();
        key.sort_unstable();
        seen.insert(key)
    });

    found.sort_by(|a, b| {
        b.total_value()
            .cmp(&a.total_value())
            .then_with(|| b.len().cmp(&a.len()))
    });

    let best: Vec<CandidateTrade> = match found.first() {
        Some(top) => {
            let top_value = top.total_value();
            found
                .iter()
                .take_while(|t| t.total_value() == top_value)
                .cloned()
                .collect()
        }
        None => Vec::new(),
    };
    memo.insert(hand, best);

    found
}

#[async_trait]
impl SolverClient for LocalSolver {
    fn name(&self) -> &str {
        "local"
    }

    fn recognized_flags(&self) -> &BTreeSet<String> {
        &self.recognized_flags
    }

    #[instrument(skip_all)]
    async fn solve(&self, request: &TradeRequest) -> SolverResult<SolverResponse> {
        // The search is not interruptible: dropping this future leaves the
        // blocking task to finish on its own.
        let hand = request.holdings();
        if hand.unit_count() > u64::from(self.max_units) {
            return Err(SolverError::invalid_request(format!(
                "hand of {} units exceeds the limit of {}",
                hand.unit_count(),
                self.max_units
            )));
        }

        let schedule = self.schedule_for(request);
        let rate_table: RateTable = schedule.iter().map(|r| (r.basket, r.value)).collect();

        let candidates = tokio::task::spawn_blocking(move || LocalSolver::search(hand, &schedule))
            .await
            .map_err(|e| SolverError::internal(format!("search task failed: {}", e)))?;

        debug!(%hand, candidates = candidates.len(), "local search finished");
        Ok(SolverResponse::from_candidates(rate_table, candidates))
    }
}
