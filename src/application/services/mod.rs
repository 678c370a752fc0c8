//! # Application Services
//!
//! Services that orchestrate domain logic and the solver.
//!
//! This module provides application-level services including:
//! - [`request_normalizer`]: raw form fields to [`TradeRequest`](crate::domain::entities::TradeRequest)
//! - [`RankingStrategy`]: strategies for ordering a trade's allocations
//! - [`presentation`]: assembly of the final [`TradeResult`](crate::domain::entities::TradeResult)
//! - [`TradeAdvisor`]: the end-to-end flow

pub mod presentation;
pub mod ranking_strategy;
pub mod request_normalizer;
pub mod trade_advisor;

pub use ranking_strategy::{RankingStrategy, ValueThenUnitsStrategy};
pub use request_normalizer::normalize;
pub use trade_advisor::{AdvisorConfig, Recommendation, TradeAdvisor};
