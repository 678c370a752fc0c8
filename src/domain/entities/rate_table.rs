//! # Rate Table
//!
//! Valuation of individual baskets, as reported by a solver.
//!
//! On the wire a rate table is a JSON object whose keys are serialized
//! baskets. In memory it is keyed by [`ResourceCounts`] itself, so lookups
//! match by content and never depend on how a key string was spelled.
//!
//! # Examples
//!
//! ```
//! use trade_advisor::domain::entities::RateTable;
//! use trade_advisor::domain::value_objects::ResourceCounts;
//!
//! let table: RateTable = serde_json::from_str(r#"{"{\"d\":2,\"c\":2}": 14}"#).unwrap();
//! assert_eq!(table.value_of(&ResourceCounts::new(0, 0, 2, 2)).unwrap(), 14);
//! ```

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::value_objects::ResourceCounts;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// Mapping from basket to its non-negative value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BTreeMap<String, u32>", into = "BTreeMap<String, u32>")]
pub struct RateTable {
    rates: HashMap<ResourceCounts, u32>,
}

impl RateTable {
    /// Creates an empty rate table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a rate, returning the table.
    #[must_use]
    pub fn with_rate(mut self, basket: ResourceCounts, value: u32) -> Self {
        self.rates.insert(basket, value);
        self
    }

    /// Looks up the value of a basket.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::RateNotFound` if the basket has no entry.
    pub fn value_of(&self, basket: &ResourceCounts) -> DomainResult<u32> {
        self.get(basket).ok_or(DomainError::RateNotFound(*basket))
    }

    /// Looks up the value of a basket, if present.
    #[inline]
    #[must_use]
    pub fn get(&self, basket: &ResourceCounts) -> Option<u32> {
        self.rates.get(basket).copied()
    }

    /// Returns true if the basket has an entry.
    #[inline]
    #[must_use]
    pub fn contains(&self, basket: &ResourceCounts) -> bool {
        self.rates.contains_key(basket)
    }

    /// Number of entries.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.rates.len()
    }

    /// Returns true if the table has no entries.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }

    /// Iterates over entries in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&ResourceCounts, &u32)> {
        self.rates.iter()
    }

    /// Decodes a wire-form table keyed by serialized baskets.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidRateKey` if a key does not decode, or if
    /// two keys decode to the same basket with different values.
    pub fn from_wire<I>(entries: I) -> DomainResult<Self>
    where
        I: IntoIterator<Item = (String, u32)>,
    {
        let mut rates = HashMap::new();
        for (key, value) in entries {
            let basket = ResourceCounts::from_canonical_key(&key)?;
            match rates.insert(basket, value) {
                Some(previous) if previous != value => {
                    return Err(DomainError::invalid_rate_key(
                        key,
                        format!("conflicting values {} and {} for one basket", previous, value),
                    ));
                }
                _ => {}
            }
        }
        Ok(Self { rates })
    }

    /// Encodes the table with canonical keys.
    #[must_use]
    pub fn to_wire(&self) -> BTreeMap<String, u32> {
        self.rates
            .iter()
            .map(|(basket, value)| (basket.canonical_key(), *value))
            .collect()
    }
}

impl FromIterator<(ResourceCounts, u32)> for RateTable {
    fn from_iter<T: IntoIterator<Item = (ResourceCounts, u32)>>(iter: T) -> Self {
        Self {
            rates: iter.into_iter().collect(),
        }
    }
}

impl TryFrom<BTreeMap<String, u32>> for RateTable {
    type Error = DomainError;

    fn try_from(entries: BTreeMap<String, u32>) -> Result<Self, Self::Error> {
        Self::from_wire(entries)
    }
}

impl From<RateTable> for BTreeMap<String, u32> {
    fn from(table: RateTable) -> Self {
        table.to_wire()
    }
}
