//! # Configuration
//!
//! Layered settings: built-in defaults, then an optional
//! `trade_advisor.{toml,yaml,json}` file, then environment variables
//! prefixed with `TRADE_ADVISOR` (nested keys separated by `__`).
//!
//! ```text
//! TRADE_ADVISOR__SOLVER__BACKEND=http
//! TRADE_ADVISOR__SOLVER__BASE_URL=http://127.0.0.1:8080
//! TRADE_ADVISOR__SOLVER__RECOGNIZED_FLAGS=shell_modifier,tool_modifier
//! TRADE_ADVISOR__LOGGING__JSON=true
//! ```

use crate::application::services::trade_advisor::AdvisorConfig;
use crate::infrastructure::solver::local::{
    DEFAULT_MAX_UNITS, SHELL_MODIFIER_FLAG, TOOL_MODIFIER_FLAG,
};
use crate::infrastructure::solver::wire::WireFormat;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use std::fmt;

/// Default configuration file stem.
pub const DEFAULT_CONFIG_FILE: &str = "trade_advisor";
/// Environment variable prefix.
pub const ENV_PREFIX: &str = "TRADE_ADVISOR";

/// Which solver implementation to use.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SolverBackend {
    /// The in-process search.
    #[default]
    Local,
    /// A remote solver over HTTP.
    Http,
}

impl fmt::Display for SolverBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Local => write!(f, "local"),
            Self::Http => write!(f, "http"),
        }
    }
}

/// Solver settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SolverSettings {
    /// Solver implementation.
    pub backend: SolverBackend,
    /// Base URL of the HTTP solver.
    pub base_url: String,
    /// Response shape of the HTTP solver.
    pub wire_format: WireFormat,
    /// Timeout for one solver call, in milliseconds.
    pub timeout_ms: u64,
    /// Flag names forwarded to the HTTP solver.
    pub recognized_flags: Vec<String>,
    /// Largest hand accepted by the local solver.
    pub max_units: u32,
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingSettings {
    /// Default filter directive when `RUST_LOG` is unset.
    pub level: String,
    /// Emit JSON lines instead of human-readable output.
    pub json: bool,
}

/// Application settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AppConfig {
    /// Solver settings.
    pub solver: SolverSettings,
    /// Logging settings.
    pub logging: LoggingSettings,
}

impl AppConfig {
    /// Loads settings from the default file and the environment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a source is malformed or a value has the
    /// wrong type.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(DEFAULT_CONFIG_FILE)
    }

    /// Loads settings from `file` (optional, any supported format) and the
    /// environment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a source is malformed or a value has the
    /// wrong type.
    pub fn load_from(file: &str) -> Result<Self, ConfigError> {
        Self::builder()?
            .add_source(File::with_name(file).required(false))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("solver.recognized_flags")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }

    /// Builder preloaded with defaults.
    pub(crate) fn builder() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Config::builder()
            .set_default("solver.backend", SolverBackend::Local.to_string())?
            .set_default("solver.base_url", "http://127.0.0.1:8080")?
            .set_default("solver.wire_format", WireFormat::BestTrade.to_string())?
            .set_default("solver.timeout_ms", 5000)?
            .set_default(
                "solver.recognized_flags",
                vec![SHELL_MODIFIER_FLAG.to_string(), TOOL_MODIFIER_FLAG.to_string()],
            )?
            .set_default("solver.max_units", i64::from(DEFAULT_MAX_UNITS))?
            .set_default("logging.level", "info")?
            .set_default("logging.json", false)
    }

    /// Advisor settings derived from the solver section.
    #[must_use]
    pub fn advisor_config(&self) -> AdvisorConfig {
        AdvisorConfig::default().with_solver_timeout(self.solver.timeout_ms)
    }
}
