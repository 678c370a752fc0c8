//! # Candidate Trade
//!
//! A solver-proposed set of baskets to give up, with their combined worth.
//!
//! The wire form follows the solver protocol: `{"R": [<basket>...], "V": n}`.

use crate::domain::value_objects::ResourceCounts;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A candidate trade proposed by the solver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateTrade {
    /// Baskets traded away, in solver order.
    #[serde(rename = "R", default)]
    allocations: Vec<ResourceCounts>,
    /// Combined value of the baskets.
    #[serde(rename = "V", default)]
    total_value: u32,
}

impl CandidateTrade {
    /// Creates a candidate trade.
    #[must_use]
    pub fn new(allocations: Vec<ResourceCounts>, total_value: u32) -> Self {
        Self {
            allocations,
            total_value,
        }
    }

    /// Returns the baskets in solver order.
    #[inline]
    #[must_use]
    pub fn allocations(&self) -> &[ResourceCounts] {
        &self.allocations
    }

    /// Returns the combined value reported by the solver.
    #[inline]
    #[must_use]
    pub fn total_value(&self) -> u32 {
        self.total_value
    }

    /// Number of baskets.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.allocations.len()
    }

    /// Returns true if the trade gives up nothing.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.allocations.is_empty()
    }

    /// Sum of all baskets.
    #[must_use]
    pub fn combined_basket(&self) -> ResourceCounts {
        self.allocations
            .iter()
            .fold(ResourceCounts::EMPTY, |acc, basket| {
                ResourceCounts::new(
                    acc.shards.saturating_add(basket.shards),
                    acc.tools.saturating_add(basket.tools),
                    acc.demons.saturating_add(basket.demons),
                    acc.crystals.saturating_add(basket.crystals),
                )
            })
    }
}

impl fmt::Display for CandidateTrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "CandidateTrade(V={} baskets={})",
            self.total_value,
            self.allocations.len()
        )
    }
}
