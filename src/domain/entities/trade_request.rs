//! # Trade Request
//!
//! The user's holdings and preference flags, as sent to the solver.
//!
//! Holdings are tracked per kind as `Option<u32>`: an absent kind means
//! "unconstrained" and is left out of the wire form rather than sent as zero.
//!
//! # Examples
//!
//! ```
//! use trade_advisor::domain::entities::TradeRequest;
//! use trade_advisor::domain::value_objects::ResourceKind;
//!
//! let request = TradeRequest::new()
//!     .with_holding(ResourceKind::Shard, 3)
//!     .with_flag("shell_modifier");
//!
//! let json = serde_json::to_string(&request).unwrap();
//! assert_eq!(json, r#"{"s":3,"shell_modifier":true}"#);
//! ```

use crate::domain::value_objects::{ResourceCounts, ResourceKind};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// A normalized trade request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct TradeRequest {
    /// Shards held, if given.
    #[serde(rename = "s", default, skip_serializing_if = "Option::is_none")]
    shards: Option<u32>,
    /// Tools held, if given.
    #[serde(rename = "t", default, skip_serializing_if = "Option::is_none")]
    tools: Option<u32>,
    /// Demons held, if given.
    #[serde(rename = "d", default, skip_serializing_if = "Option::is_none")]
    demons: Option<u32>,
    /// Crystals held, if given.
    #[serde(rename = "c", default, skip_serializing_if = "Option::is_none")]
    crystals: Option<u32>,
    /// Solver-defined boolean flags; only set flags are present.
    #[serde(flatten)]
    flags: BTreeMap<String, bool>,
}

impl TradeRequest {
    /// Creates an empty request.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the holding for one kind.
    #[must_use]
    pub fn with_holding(mut self, kind: ResourceKind, count: u32) -> Self {
        self.set_holding(kind, count);
        self
    }

    /// Sets a named flag to `true`.
    ///
    /// Names that collide with a holding field (`s`, `t`, `d`, `c`) are
    /// ignored.
    #[must_use]
    pub fn with_flag(mut self, name: impl Into<String>) -> Self {
        self.set_flag(name);
        self
    }

    /// Sets the holding for one kind in place.
    pub fn set_holding(&mut self, kind: ResourceKind, count: u32) {
        *self.slot_mut(kind) = Some(count);
    }

    /// Sets a named flag to `true` in place.
    ///
    /// Names that collide with a holding field are ignored.
    pub fn set_flag(&mut self, name: impl Into<String>) {
        let name = name.into();
        if ResourceKind::from_field_name(&name).is_none() {
            self.flags.insert(name, true);
        }
    }

    /// Returns the holding for `kind`, or `None` if it was not given.
    #[must_use]
    pub fn holding(&self, kind: ResourceKind) -> Option<u32> {
        match kind {
            ResourceKind::Shard => self.shards,
            ResourceKind::Tool => self.tools,
            ResourceKind::Demon => self.demons,
            ResourceKind::Crystal => self.crystals,
        }
    }

    /// Returns the holdings as a basket, counting absent kinds as zero.
    #[must_use]
    pub fn holdings(&self) -> ResourceCounts {
        ResourceKind::ALL
            .into_iter()
            .fold(ResourceCounts::EMPTY, |acc, kind| {
                acc.with(kind, self.holding(kind).unwrap_or(0))
            })
    }

    /// Returns true if the flag is set.
    #[must_use]
    pub fn has_flag(&self, name: &str) -> bool {
        self.flags.get(name).copied().unwrap_or(false)
    }

    /// Returns the names of all set flags, in lexical order.
    pub fn flags(&self) -> impl Iterator<Item = &str> {
        self.flags
            .iter()
            .filter(|(_, set)| **set)
            .map(|(name, _)| name.as_str())
    }

    /// Number of fields (holdings and flags) present.
    #[must_use]
    pub fn field_count(&self) -> usize {
        let holdings = ResourceKind::ALL
            .into_iter()
            .filter(|kind| self.holding(*kind).is_some())
            .count();
        holdings + self.flags().count()
    }

    /// Returns true if no holding and no flag is present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.field_count() == 0
    }

    fn slot_mut(&mut self, kind: ResourceKind) -> &mut Option<u32> {
        match kind {
            ResourceKind::Shard => &mut self.shards,
            ResourceKind::Tool => &mut self.tools,
            ResourceKind::Demon => &mut self.demons,
            ResourceKind::Crystal => &mut self.crystals,
        }
    }
}

impl fmt::Display for TradeRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TradeRequest(")?;
        let mut first = true;
        for kind in ResourceKind::ALL {
            if let Some(count) = self.holding(kind) {
                if !first {
                    write!(f, " ")?;
                }
                write!(f, "{}:{}", kind.field_name(), count)?;
                first = false;
            }
        }
        for flag in self.flags() {
            if !first {
                write!(f, " ")?;
            }
            write!(f, "+{}", flag)?;
            first = false;
        }
        write!(f, ")")
    }
}
