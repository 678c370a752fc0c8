//! # Solver Integration
//!
//! Clients for the external allocation solver.
//!
//! - [`traits`]: the [`SolverClient`] port and its unified response
//! - [`wire`]: adapters for the two solver response shapes
//! - [`http_client`]: remote solver over HTTP
//! - [`local`]: in-process reference solver
//! - [`error`]: solver boundary failures

pub mod error;
pub mod http_client;
pub mod local;
pub mod traits;
pub mod wire;

pub use error::{SolverError, SolverResult};
pub use http_client::HttpSolverClient;
pub use local::LocalSolver;
pub use traits::{SolvedTrade, SolverClient, SolverResponse};
pub use wire::WireFormat;

use crate::config::{SolverBackend, SolverSettings};
use std::sync::Arc;

/// Builds the solver client selected by `settings`.
///
/// # Errors
///
/// Returns `SolverError::Internal` if the HTTP client cannot be created.
pub fn build_solver(settings: &SolverSettings) -> SolverResult<Arc<dyn SolverClient>> {
    match settings.backend {
        SolverBackend::Local => Ok(Arc::new(
            LocalSolver::new().with_max_units(settings.max_units),
        )),
        SolverBackend::Http => {
            let client = HttpSolverClient::new(
                settings.base_url.clone(),
                settings.wire_format,
                settings.timeout_ms,
            )?
            .with_recognized_flags(settings.recognized_flags.iter().cloned());
            Ok(Arc::new(client))
        }
    }
}
