//! # HTTP Solver Client
//!
//! [`SolverClient`] implementation for solvers exposed over HTTP.
//!
//! Endpoints, relative to the configured base URL:
//!
//! - `best_trade`: `POST /best-trade` with the request, answering one envelope
//! - `candidate_list`: `POST /trades` with the request, answering a ranked
//!   array; then `GET /rate-table` when the array is not empty
//!
//! # Examples
//!
//! ```ignore
//! use trade_advisor::infrastructure::solver::http_client::HttpSolverClient;
//! use trade_advisor::infrastructure::solver::wire::WireFormat;
//!
//! let client = HttpSolverClient::new("http://127.0.0.1:8080", WireFormat::BestTrade, 5000)?;
//! let response = client.solve(&request).await?;
//! ```

use crate::domain::entities::TradeRequest;
use crate::infrastructure::solver::error::{SolverError, SolverResult};
use crate::infrastructure::solver::traits::{SolverClient, SolverResponse};
use crate::infrastructure::solver::wire::{
    WireFormat, decode_best_trade, decode_candidates, decode_rate_table,
};
use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use std::collections::BTreeSet;
use std::time::Duration;
use tracing::{debug, instrument};

/// Path of the single-envelope endpoint.
pub const BEST_TRADE_PATH: &str = "best-trade";
/// Path of the ranked candidate endpoint.
pub const TRADES_PATH: &str = "trades";
/// Path of the standalone rate table endpoint.
pub const RATE_TABLE_PATH: &str = "rate-table";

/// Solver client speaking JSON over HTTP.
#[derive(Debug, Clone)]
pub struct HttpSolverClient {
    /// Inner reqwest client.
    client: Client,
    /// Base URL without trailing slash.
    base_url: String,
    /// Response shape of the remote solver.
    wire_format: WireFormat,
    /// Request timeout in milliseconds.
    timeout_ms: u64,
    /// Flags forwarded to the remote solver.
    recognized_flags: BTreeSet<String>,
}

impl HttpSolverClient {
    /// Creates a new client.
    ///
    /// # Arguments
    ///
    /// * `base_url` - Solver base URL, e.g. `http://127.0.0.1:8080`.
    /// * `wire_format` - Response shape spoken by the solver.
    /// * `timeout_ms` - Per-request timeout in milliseconds.
    ///
    /// # Errors
    ///
    /// Returns `SolverError::Internal` if the HTTP client cannot be created.
    pub fn new(
        base_url: impl Into<String>,
        wire_format: WireFormat,
        timeout_ms: u64,
    ) -> SolverResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_millis(timeout_ms))
            .build()
            .map_err(|e| SolverError::internal(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            wire_format,
            timeout_ms,
            recognized_flags: BTreeSet::new(),
        })
    }

    /// Sets the flag names the remote solver understands.
    #[must_use]
    pub fn with_recognized_flags<I, S>(mut self, flags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.recognized_flags = flags.into_iter().map(Into::into).collect();
        self
    }

    /// Returns the base URL.
    #[inline]
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the configured wire format.
    #[inline]
    #[must_use]
    pub fn wire_format(&self) -> WireFormat {
        self.wire_format
    }

    /// Returns the configured timeout in milliseconds.
    #[inline]
    #[must_use]
    pub fn timeout_ms(&self) -> u64 {
        self.timeout_ms
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    async fn post(&self, path: &str, request: &TradeRequest) -> SolverResult<Vec<u8>> {
        let response = self
            .client
            .post(self.url(path))
            .json(request)
            .send()
            .await
            .map_err(|e| self.map_reqwest_error(e))?;

        self.handle_response(response).await
    }

    async fn get(&self, path: &str) -> SolverResult<Vec<u8>> {
        let response = self
            .client
            .get(self.url(path))
            .send()
            .await
            .map_err(|e| self.map_reqwest_error(e))?;

        self.handle_response(response).await
    }

    /// Checks the HTTP status and returns the raw body.
    async fn handle_response(&self, response: Response) -> SolverResult<Vec<u8>> {
        let status = response.status();

        if status.is_success() {
            response
                .bytes()
                .await
                .map(|b| b.to_vec())
                .map_err(|e| SolverError::protocol(format!("Failed to read response: {}", e)))
        } else {
            let error_body = response.text().await.unwrap_or_default();
            Err(self.map_status_error(status, &error_body))
        }
    }

    /// Maps a reqwest error to a SolverError.
    fn map_reqwest_error(&self, error: reqwest::Error) -> SolverError {
        if error.is_timeout() {
            SolverError::timeout_with_duration("Request timed out", self.timeout_ms)
        } else if error.is_connect() {
            SolverError::connection(format!("Connection failed: {}", error))
        } else {
            SolverError::connection(format!("HTTP request failed: {}", error))
        }
    }

    /// Maps an HTTP status code to a SolverError.
    fn map_status_error(&self, status: StatusCode, body: &str) -> SolverError {
        match status {
            StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
                SolverError::invalid_request(format!("Bad request: {}", body))
            }
            StatusCode::REQUEST_TIMEOUT | StatusCode::GATEWAY_TIMEOUT => {
                SolverError::timeout(format!("Solver timed out ({}): {}", status, body))
            }
            StatusCode::INTERNAL_SERVER_ERROR
            | StatusCode::BAD_GATEWAY
            | StatusCode::SERVICE_UNAVAILABLE => {
                SolverError::connection(format!("Server error ({}): {}", status, body))
            }
            _ => SolverError::protocol(format!("HTTP error ({}): {}", status, body)),
        }
    }
}

#[async_trait]
impl SolverClient for HttpSolverClient {
    fn name(&self) -> &str {
        "http"
    }

    fn recognized_flags(&self) -> &BTreeSet<String> {
        &self.recognized_flags
    }

    #[instrument(skip_all)]
    async fn solve(&self, request: &TradeRequest) -> SolverResult<SolverResponse> {
        debug!(base_url = %self.base_url, wire_format = %self.wire_format, %request, "calling solver");
        match self.wire_format {
            WireFormat::BestTrade => {
                let body = self.post(BEST_TRADE_PATH, request).await?;
                decode_best_trade(&body)
            }
            WireFormat::CandidateList => {
                let body = self.post(TRADES_PATH, request).await?;
                let candidates = decode_candidates(&body)?;
                if candidates.is_empty() {
                    debug!("solver returned no candidates");
                    return Ok(SolverResponse::Infeasible);
                }
                let rate_table = decode_rate_table(&self.get(RATE_TABLE_PATH).await?)?;
                Ok(SolverResponse::from_candidates(rate_table, candidates))
            }
        }
    }
}
