//! # Domain Entities
//!
//! - [`TradeRequest`]: holdings and flags sent to the solver
//! - [`RateTable`]: value of each basket
//! - [`CandidateTrade`]: a solver-proposed trade
//! - [`TradeResult`] and [`RankedAllocation`]: the ranked output

pub mod candidate_trade;
pub mod rate_table;
pub mod trade_request;
pub mod trade_result;

pub use candidate_trade::CandidateTrade;
pub use rate_table::RateTable;
pub use trade_request::TradeRequest;
pub use trade_result::{RankedAllocation, TradeResult};
