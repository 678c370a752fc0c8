//! # Resource Kind
//!
//! The four kinds of resource a hand or basket can hold.

use std::fmt;

/// One of the four exchangeable resource kinds.
///
/// Each kind has a single-letter wire name (`s`, `t`, `d`, `c`) used both by
/// the solver protocol and by raw form fields.
///
/// # Examples
///
/// ```
/// use trade_advisor::domain::value_objects::ResourceKind;
///
/// assert_eq!(ResourceKind::from_field_name("d"), Some(ResourceKind::Demon));
/// assert_eq!(ResourceKind::Crystal.field_name(), "c");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ResourceKind {
    /// Shards (`s`).
    Shard,
    /// Tools (`t`).
    Tool,
    /// Demons (`d`).
    Demon,
    /// Crystals (`c`).
    Crystal,
}

impl ResourceKind {
    /// All kinds in canonical field order.
    pub const ALL: [ResourceKind; 4] = [Self::Shard, Self::Tool, Self::Demon, Self::Crystal];

    /// Returns the single-letter wire name of this kind.
    #[inline]
    #[must_use]
    pub const fn field_name(self) -> &'static str {
        match self {
            Self::Shard => "s",
            Self::Tool => "t",
            Self::Demon => "d",
            Self::Crystal => "c",
        }
    }

    /// Resolves a wire field name to a kind.
    #[must_use]
    pub fn from_field_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.field_name() == name)
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Shard => write!(f, "shard"),
            Self::Tool => write!(f, "tool"),
            Self::Demon => write!(f, "demon"),
            Self::Crystal => write!(f, "crystal"),
        }
    }
}
