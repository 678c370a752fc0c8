//! # Trade Result
//!
//! The ranked, immutable artifact handed to a presentation layer.
//!
//! A [`TradeResult`] carries no markup or formatting; renderers consume it
//! read-only through its accessors or its JSON form.

use crate::domain::value_objects::ResourceCounts;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A basket placed at a position in the final ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct RankedAllocation {
    /// The basket.
    allocation: ResourceCounts,
    /// Value looked up from the rate table.
    value: u32,
    /// Position in the ordering (1 = first).
    position: usize,
}

impl RankedAllocation {
    /// Creates a ranked allocation.
    #[must_use]
    pub fn new(allocation: ResourceCounts, value: u32, position: usize) -> Self {
        Self {
            allocation,
            value,
            position,
        }
    }

    /// Returns the basket.
    #[inline]
    #[must_use]
    pub fn allocation(&self) -> ResourceCounts {
        self.allocation
    }

    /// Returns the basket's value.
    #[inline]
    #[must_use]
    pub fn value(&self) -> u32 {
        self.value
    }

    /// Returns the 1-based position.
    #[inline]
    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Total units in the basket.
    #[inline]
    #[must_use]
    pub fn unit_count(&self) -> u64 {
        self.allocation.unit_count()
    }

    /// Returns true if this allocation is ranked first.
    #[inline]
    #[must_use]
    pub fn is_first(&self) -> bool {
        self.position == 1
    }
}

impl fmt::Display for RankedAllocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{} {} = {}", self.position, self.allocation, self.value)
    }
}

/// The recommended trade, ranked and ready for presentation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct TradeResult {
    /// Combined value of the trade.
    total_value: u32,
    /// Baskets in presentation order.
    allocations: Vec<RankedAllocation>,
}

impl TradeResult {
    /// Creates a trade result.
    #[must_use]
    pub fn new(total_value: u32, allocations: Vec<RankedAllocation>) -> Self {
        Self {
            total_value,
            allocations,
        }
    }

    /// Returns the combined value.
    #[inline]
    #[must_use]
    pub fn total_value(&self) -> u32 {
        self.total_value
    }

    /// Returns the ranked baskets.
    #[inline]
    #[must_use]
    pub fn allocations(&self) -> &[RankedAllocation] {
        &self.allocations
    }

    /// Returns the first-ranked basket, if any.
    #[must_use]
    pub fn first(&self) -> Option<&RankedAllocation> {
        self.allocations.first()
    }

    /// Number of baskets.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.allocations.len()
    }

    /// Returns true if there are no baskets.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.allocations.is_empty()
    }

    /// Sum of the per-basket values.
    #[must_use]
    pub fn allocated_value(&self) -> u64 {
        self.allocations.iter().map(|a| u64::from(a.value())).sum()
    }
}

impl fmt::Display for TradeResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "TradeResult(V={} baskets={})",
            self.total_value,
            self.allocations.len()
        )
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;

    fn sample() -> TradeResult {
        TradeResult::new(
            25,
            vec![
                RankedAllocation::new(ResourceCounts::new(2, 0, 0, 0), 15, 1),
                RankedAllocation::new(ResourceCounts::new(0, 1, 0, 0), 10, 2),
            ],
        )
    }

    #[test]
    fn accessors() {
        let result = sample();
        assert_eq!(result.total_value(), 25);
        assert_eq!(result.len(), 2);
        assert!(result.first().unwrap().is_first());
        assert!(!result.allocations()[1].is_first());
        assert_eq!(result.allocated_value(), 25);
    }

    #[test]
    fn ranked_allocation_unit_count() {
        let ranked = RankedAllocation::new(ResourceCounts::new(1, 1, 1, 0), 9, 1);
        assert_eq!(ranked.unit_count(), 3);
        assert_eq!(ranked.to_string(), "#1 s:1 t:1 d:1 c:0 = 9");
    }

    #[test]
    fn json_shape() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["total_value"], 25);
        assert_eq!(json["allocations"][0]["value"], 15);
        assert_eq!(json["allocations"][0]["position"], 1);
        assert_eq!(json["allocations"][0]["allocation"]["s"], 2);
    }

    #[test]
    fn display() {
        assert_eq!(sample().to_string(), "TradeResult(V=25 baskets=2)");
    }
}
