//! # Trade Advisor
//!
//! Ranks and presents the most valuable resource exchange for a player's
//! holdings.
//!
//! A submission flows through four stages:
//!
//! 1. [`normalize`](application::services::normalize) raw form fields into a
//!    [`TradeRequest`](domain::entities::TradeRequest)
//! 2. ask a [`SolverClient`](infrastructure::solver::SolverClient) for the
//!    best trade and its rate table
//! 3. rank the trade's allocations with a
//!    [`RankingStrategy`](application::services::RankingStrategy)
//! 4. assemble a read-only [`TradeResult`](domain::entities::TradeResult)
//!
//! [`TradeAdvisor`](application::services::TradeAdvisor) runs the whole flow.
//!
//! # Layout
//!
//! - [`domain`]: baskets, requests, rate tables, results
//! - [`application`]: normalization, ranking, orchestration
//! - [`infrastructure`]: HTTP and in-process solvers
//! - [`config`]: layered settings
//! - [`telemetry`]: subscriber setup

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod telemetry;
