//! # Value Objects
//!
//! Immutable types with structural identity.
//!
//! - [`ResourceCounts`]: a basket (or hand) of the four resource kinds
//! - [`ResourceKind`]: shard, tool, demon or crystal

pub mod resource_counts;
pub mod resource_kind;

pub use resource_counts::ResourceCounts;
pub use resource_kind::ResourceKind;
