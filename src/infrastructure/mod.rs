//! # Infrastructure Layer
//!
//! Adapters to systems outside the core. The only collaborator is the
//! allocation solver.

pub mod solver;
