//! # Presentation Assembler
//!
//! Wraps a ranked allocation sequence into the read-only [`TradeResult`].

use crate::domain::entities::{CandidateTrade, RankedAllocation, TradeResult};
use tracing::warn;

/// Assembles the final result for a candidate trade.
///
/// The total value is taken from the solver as-is. A disagreement with the
/// sum of allocation values is logged, not corrected.
#[must_use]
pub fn assemble(candidate: &CandidateTrade, ranked: Vec<RankedAllocation>) -> TradeResult {
    let result = TradeResult::new(candidate.total_value(), ranked);

    let allocated = result.allocated_value();
    if allocated != u64::from(result.total_value()) {
        warn!(
            total_value = result.total_value(),
            allocated_value = allocated,
            "solver total disagrees with allocation values"
        );
    }

    result
}
