//! # Solver Wire Formats
//!
//! Adapters from the two solver response shapes to [`SolverResponse`].
//!
//! - [`WireFormat::BestTrade`]: one envelope `{"r": <rates>, "t": <trade>}`
//! - [`WireFormat::CandidateList`]: an array of trades, best first, with the
//!   rate table fetched separately

use crate::domain::entities::{CandidateTrade, RateTable};
use crate::infrastructure::solver::error::{SolverError, SolverResult};
use crate::infrastructure::solver::traits::SolverResponse;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Response shape spoken by a solver.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WireFormat {
    /// Single envelope carrying the rate table and the best trade.
    #[default]
    BestTrade,
    /// Ranked list of trades plus an independently fetched rate table.
    CandidateList,
}

impl fmt::Display for WireFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BestTrade => write!(f, "best_trade"),
            Self::CandidateList => write!(f, "candidate_list"),
        }
    }
}

impl FromStr for WireFormat {
    type Err = SolverError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "best_trade" => Ok(Self::BestTrade),
            "candidate_list" => Ok(Self::CandidateList),
            other => Err(SolverError::invalid_request(format!(
                "unknown wire format: {}",
                other
            ))),
        }
    }
}

/// Envelope of the `best_trade` wire format.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BestTradeEnvelope {
    /// Rate table, keyed by serialized basket.
    #[serde(rename = "r", default, skip_serializing_if = "Option::is_none")]
    pub rate_table: Option<RateTable>,
    /// Best trade; absent when nothing was found.
    #[serde(rename = "t", default, skip_serializing_if = "Option::is_none")]
    pub trade: Option<CandidateTrade>,
}

impl BestTradeEnvelope {
    /// Adapts the envelope to a unified response.
    ///
    /// # Errors
    ///
    /// Returns `SolverError::Protocol` if a trade is present without a rate
    /// table.
    pub fn into_response(self) -> SolverResult<SolverResponse> {
        match (self.rate_table, self.trade) {
            (_, None) => Ok(SolverResponse::Infeasible),
            (_, Some(trade)) if trade.is_empty() => Ok(SolverResponse::Infeasible),
            (Some(rate_table), Some(trade)) => {
                Ok(SolverResponse::from_candidates(rate_table, vec![trade]))
            }
            (None, Some(_)) => Err(SolverError::protocol(
                "best trade returned without a rate table",
            )),
        }
    }
}

/// Decodes a `best_trade` body.
///
/// # Errors
///
/// Returns `SolverError::Protocol` if the body is not a valid envelope.
pub fn decode_best_trade(body: &[u8]) -> SolverResult<SolverResponse> {
    let envelope: BestTradeEnvelope = serde_json::from_slice(body)
        .map_err(|e| SolverError::protocol(format!("Failed to parse best trade: {}", e)))?;
    envelope.into_response()
}

/// Decodes a `candidate_list` trade array.
///
/// A `null` body is treated as an empty list.
///
/// # Errors
///
/// Returns `SolverError::Protocol` if the body is not an array of trades.
pub fn decode_candidates(body: &[u8]) -> SolverResult<Vec<CandidateTrade>> {
    let candidates: Option<Vec<CandidateTrade>> = serde_json::from_slice(body)
        .map_err(|e| SolverError::protocol(format!("Failed to parse candidates: {}", e)))?;
    Ok(candidates.unwrap_or_default())
}

/// Decodes a standalone rate table.
///
/// # Errors
///
/// Returns `SolverError::Protocol` if a key or value is malformed, or if two
/// keys name the same basket with different values.
pub fn decode_rate_table(body: &[u8]) -> SolverResult<RateTable> {
    let entries: BTreeMap<String, u32> = serde_json::from_slice(body)
        .map_err(|e| SolverError::protocol(format!("Failed to parse rate table: {}", e)))?;
    Ok(RateTable::from_wire(entries)?)
}
