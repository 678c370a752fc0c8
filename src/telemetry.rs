//! # Telemetry
//!
//! `tracing` subscriber setup for the binaries.

use crate::config::LoggingSettings;
use thiserror::Error;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};
use tracing_subscriber::{EnvFilter, fmt};

/// Error raised while installing the subscriber.
#[derive(Debug, Error)]
pub enum TelemetryError {
    /// The configured filter directive is malformed.
    #[error("invalid log filter: {0}")]
    Filter(#[from] ParseError),

    /// A global subscriber is already installed.
    #[error("failed to install subscriber: {0}")]
    Init(#[from] TryInitError),
}

/// Builds the filter: `RUST_LOG` when set and valid, else `default_level`.
///
/// # Errors
///
/// Returns `TelemetryError::Filter` if `default_level` is malformed.
pub fn env_filter(default_level: &str) -> Result<EnvFilter, TelemetryError> {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .map_err(TelemetryError::from)
}

/// Installs the global subscriber.
///
/// # Errors
///
/// Returns `TelemetryError` if the filter is malformed or a subscriber is
/// already installed.
pub fn init_tracing(settings: &LoggingSettings) -> Result<(), TelemetryError> {
    let registry = tracing_subscriber::registry().with(env_filter(&settings.level)?);

    if settings.json {
        registry
            .with(fmt::layer().json().with_current_span(true))
            .try_init()?;
    } else {
        registry.with(fmt::layer().with_target(false)).try_init()?;
    }
    Ok(())
}
