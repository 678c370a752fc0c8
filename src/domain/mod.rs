//! # Domain Layer
//!
//! Baskets, requests, rate tables and ranked results, free of any I/O.

pub mod entities;
pub mod errors;
pub mod value_objects;

pub use errors::{DomainError, DomainResult};
