//! # Ranking Strategy
//!
//! Strategies for ordering the allocations of a chosen trade.
//!
//! This module provides the [`RankingStrategy`] trait and the default
//! [`ValueThenUnitsStrategy`].

use crate::application::error::ApplicationResult;
use crate::domain::entities::{RankedAllocation, RateTable};
use crate::domain::value_objects::ResourceCounts;
use std::cmp::Ordering;
use std::fmt;

/// Trait for ranking strategies.
///
/// Implementations value every allocation through the rate table and return
/// them in presentation order.
pub trait RankingStrategy: Send + Sync + fmt::Debug {
    /// Ranks the allocations of one trade.
    ///
    /// # Arguments
    ///
    /// * `allocations` - Baskets in solver order
    /// * `rate_table` - Rate table that accompanied the trade
    ///
    /// # Returns
    ///
    /// The allocations with their values and 1-based positions, best first.
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::RateLookupInconsistency` if any allocation
    /// is missing from the rate table.
    fn rank(
        &self,
        allocations: &[ResourceCounts],
        rate_table: &RateTable,
    ) -> ApplicationResult<Vec<RankedAllocation>>;

    /// Returns the name of this ranking strategy.
    fn name(&self) -> &'static str;
}

/// Orders allocations by value, then by size.
///
/// - Higher value first
/// - On equal value, more units first
/// - Full ties keep solver order
#[derive(Debug, Clone, Copy, Default)]
pub struct ValueThenUnitsStrategy;

impl ValueThenUnitsStrategy {
    /// Creates a new value-then-units strategy.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    fn compare(a: &(ResourceCounts, u32), b: &(ResourceCounts, u32)) -> Ordering {
        b.1.cmp(&a.1)
            .then_with(|| b.0.unit_count().cmp(&a.0.unit_count()))
    }
}

impl RankingStrategy for ValueThenUnitsStrategy {
    fn rank(
        &self,
        allocations: &[ResourceCounts],
        rate_table: &RateTable,
    ) -> ApplicationResult<Vec<RankedAllocation>> {
        let mut valued = allocations
            .iter()
            .map(|basket| -> ApplicationResult<(ResourceCounts, u32)> {
                Ok((*basket, rate_table.value_of(basket)?))
            })
            .collect::<ApplicationResult<Vec<_>>>()?;

        // sort_by is stable
        valued.sort_by(Self::compare);

        Ok(valued
            .into_iter()
            .enumerate()
            .map(|(i, (basket, value))| RankedAllocation::new(basket, value, i + 1))
            .collect())
    }

    fn name(&self) -> &'static str {
        "ValueThenUnits"
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use crate::application::error::ApplicationError;

    fn s(n: u32) -> ResourceCounts {
        ResourceCounts::new(n, 0, 0, 0)
    }

    fn t(n: u32) -> ResourceCounts {
        ResourceCounts::new(0, n, 0, 0)
    }

    fn baskets(ranked: &[RankedAllocation]) -> Vec<ResourceCounts> {
        ranked.iter().map(RankedAllocation::allocation).collect()
    }

    #[test]
    fn value_then_size_scenario() {
        let table = RateTable::new()
            .with_rate(s(1), 10)
            .with_rate(t(1), 10)
            .with_rate(s(2), 15);

        let ranked = ValueThenUnitsStrategy::new()
            .rank(&[t(1), s(1), s(2)], &table)
            .unwrap();

        assert_eq!(baskets(&ranked), vec![s(2), t(1), s(1)]);
        assert_eq!(ranked[0].value(), 15);
        assert_eq!(ranked[1].value(), 10);
        assert_eq!(ranked[2].value(), 10);
        assert_eq!(
            ranked.iter().map(RankedAllocation::position).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
    }

    #[test]
    fn larger_basket_wins_value_tie() {
        let big = ResourceCounts::new(1, 1, 0, 0);
        let table = RateTable::new().with_rate(s(1), 4).with_rate(big, 4);

        let ranked = ValueThenUnitsStrategy::new().rank(&[s(1), big], &table).unwrap();
        assert_eq!(baskets(&ranked), vec![big, s(1)]);
    }

    #[test]
    fn duplicates_are_kept() {
        let table = RateTable::new().with_rate(s(1), 1).with_rate(t(2), 7);
        let ranked = ValueThenUnitsStrategy::new()
            .rank(&[s(1), t(2), s(1)], &table)
            .unwrap();
        assert_eq!(baskets(&ranked), vec![t(2), s(1), s(1)]);
    }

    #[test]
    fn missing_rate_is_inconsistency() {
        let table = RateTable::new().with_rate(s(1), 1);
        let err = ValueThenUnitsStrategy::new()
            .rank(&[s(1), t(1)], &table)
            .unwrap_err();
        assert_eq!(err, ApplicationError::rate_lookup_inconsistency(t(1)));
    }

    #[test]
    fn empty_input() {
        let ranked = ValueThenUnitsStrategy::new()
            .rank(&[], &RateTable::new())
            .unwrap();
        assert!(ranked.is_empty());
    }

    #[test]
    fn strategy_name() {
        assert_eq!(ValueThenUnitsStrategy::new().name(), "ValueThenUnits");
    }
}
