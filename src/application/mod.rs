//! # Application Layer
//!
//! Use cases built on the domain and the solver port.

pub mod error;
pub mod services;

pub use error::{ApplicationError, ApplicationResult};
