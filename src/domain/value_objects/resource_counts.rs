//! # Resource Counts
//!
//! The basket value type shared by requests, rate tables and trades.
//!
//! Two baskets with the same four counts are the same basket: equality,
//! hashing and ordering are all derived from the fields, so a
//! [`RateTable`](crate::domain::entities::RateTable) can be keyed by the
//! value itself instead of by its serialized form.
//!
//! # Examples
//!
//! ```
//! use trade_advisor::domain::value_objects::ResourceCounts;
//!
//! let hand = ResourceCounts::new(3, 2, 0, 0);
//! let basket = ResourceCounts::new(1, 2, 0, 0);
//!
//! let rest = hand.checked_sub(&basket).unwrap();
//! assert_eq!(rest, ResourceCounts::new(2, 0, 0, 0));
//! assert_eq!(basket.unit_count(), 3);
//! assert_eq!(basket.canonical_key(), r#"{"s":1,"t":2,"d":0,"c":0}"#);
//! ```

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::value_objects::resource_kind::ResourceKind;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Quantity of each of the four resource kinds.
///
/// Missing fields deserialize as zero, so solvers that omit empty kinds
/// (`{"d":2,"c":2}`) produce the same value as fully spelled-out baskets.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    JsonSchema,
)]
#[serde(deny_unknown_fields)]
pub struct ResourceCounts {
    /// Number of shards.
    #[serde(rename = "s", default)]
    pub shards: u32,
    /// Number of tools.
    #[serde(rename = "t", default)]
    pub tools: u32,
    /// Number of demons.
    #[serde(rename = "d", default)]
    pub demons: u32,
    /// Number of crystals.
    #[serde(rename = "c", default)]
    pub crystals: u32,
}

impl ResourceCounts {
    /// The empty basket.
    pub const EMPTY: ResourceCounts = ResourceCounts::new(0, 0, 0, 0);

    /// Creates a basket from its four counts.
    #[must_use]
    pub const fn new(shards: u32, tools: u32, demons: u32, crystals: u32) -> Self {
        Self {
            shards,
            tools,
            demons,
            crystals,
        }
    }

    /// Returns the count held for `kind`.
    #[inline]
    #[must_use]
    pub const fn get(&self, kind: ResourceKind) -> u32 {
        match kind {
            ResourceKind::Shard => self.shards,
            ResourceKind::Tool => self.tools,
            ResourceKind::Demon => self.demons,
            ResourceKind::Crystal => self.crystals,
        }
    }

    /// Returns a copy with the count for `kind` replaced.
    #[must_use]
    pub const fn with(mut self, kind: ResourceKind, count: u32) -> Self {
        match kind {
            ResourceKind::Shard => self.shards = count,
            ResourceKind::Tool => self.tools = count,
            ResourceKind::Demon => self.demons = count,
            ResourceKind::Crystal => self.crystals = count,
        }
        self
    }

    /// Total number of physical units in the basket.
    #[inline]
    #[must_use]
    pub const fn unit_count(&self) -> u64 {
        self.shards as u64 + self.tools as u64 + self.demons as u64 + self.crystals as u64
    }

    /// Returns true if every count is zero.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.shards == 0 && self.tools == 0 && self.demons == 0 && self.crystals == 0
    }

    /// Returns true if `self` can be paid out of `hand`.
    #[must_use]
    pub const fn fits_within(&self, hand: &ResourceCounts) -> bool {
        self.shards <= hand.shards
            && self.tools <= hand.tools
            && self.demons <= hand.demons
            && self.crystals <= hand.crystals
    }

    /// Removes `basket` from this hand.
    ///
    /// Returns `None` if any kind would go negative; `self` is never modified.
    #[must_use]
    pub fn checked_sub(&self, basket: &ResourceCounts) -> Option<ResourceCounts> {
        Some(Self {
            shards: self.shards.checked_sub(basket.shards)?,
            tools: self.tools.checked_sub(basket.tools)?,
            demons: self.demons.checked_sub(basket.demons)?,
            crystals: self.crystals.checked_sub(basket.crystals)?,
        })
    }

    /// Canonical textual key of this basket.
    ///
    /// All four fields are always written, in `s`, `t`, `d`, `c` order, as
    /// compact JSON. Equal baskets yield identical keys and distinct baskets
    /// yield distinct keys.
    #[must_use]
    pub fn canonical_key(&self) -> String {
        format!(
            r#"{{"s":{},"t":{},"d":{},"c":{}}}"#,
            self.shards, self.tools, self.demons, self.crystals
        )
    }

    /// Decodes a rate-table key produced by a solver.
    ///
    /// Accepts the canonical form as well as JSON objects that omit zero
    /// fields.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidRateKey` if the key is not a JSON object
    /// made only of `s`, `t`, `d`, `c` non-negative integers.
    pub fn from_canonical_key(key: &str) -> DomainResult<Self> {
        serde_json::from_str(key).map_err(|e| DomainError::invalid_rate_key(key, e.to_string()))
    }
}

impl fmt::Display for ResourceCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "s:{} t:{} d:{} c:{}",
            self.shards, self.tools, self.demons, self.crystals
        )
    }
}
