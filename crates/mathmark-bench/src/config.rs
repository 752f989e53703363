//! Harness configuration.
//!
//! The single tunable is the iteration count. It can come from a CLI flag,
//! the `MATHMARK_RUNS` environment variable, or a TOML file (`runs = N`),
//! with a documented default of 100,000,000. Non-numeric or non-positive
//! values fail fast, before any benchmark executes.

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Default iteration count when no override is supplied.
pub const DEFAULT_RUNS: u64 = 100_000_000;

/// Environment variable overriding the iteration count.
pub const RUNS_ENV_VAR: &str = "MATHMARK_RUNS";

/// Configuration error.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("iteration count must be a positive integer, got {0}")]
    NonPositiveRuns(i64),

    #[error("invalid iteration count `{value}`")]
    InvalidRuns {
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },
}

#[derive(Debug, Deserialize)]
struct ConfigFile {
    runs: Option<i64>,
}

/// Immutable harness configuration.
///
/// Constructed once at startup and passed by reference into every component
/// that needs it; there is no ambient global state.
///
/// # Example
///
/// ```
/// use mathmark_bench::HarnessConfig;
///
/// let config = HarnessConfig::new(1_000_000).unwrap();
/// assert_eq!(config.runs(), 1_000_000);
/// assert_eq!(config.inverse_runs(), 1e-6);
///
/// assert!(HarnessConfig::new(0).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct HarnessConfig {
    runs: u64,
    inverse_runs: f64,
}

impl HarnessConfig {
    /// Creates a configuration with the given iteration count.
    ///
    /// Fails with [`ConfigError::NonPositiveRuns`] when `runs` is zero.
    pub fn new(runs: u64) -> Result<Self, ConfigError> {
        if runs == 0 {
            return Err(ConfigError::NonPositiveRuns(0));
        }
        Ok(Self {
            runs,
            inverse_runs: 1.0 / runs as f64,
        })
    }

    fn from_signed(runs: i64) -> Result<Self, ConfigError> {
        if runs <= 0 {
            return Err(ConfigError::NonPositiveRuns(runs));
        }
        Self::new(runs as u64)
    }

    /// Reads the iteration count from [`RUNS_ENV_VAR`], falling back to the
    /// default when the variable is unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_env_var(RUNS_ENV_VAR)
    }

    /// Reads the iteration count from a named environment variable.
    pub fn from_env_var(name: &str) -> Result<Self, ConfigError> {
        match std::env::var(name) {
            Ok(value) => Self::parse_runs(&value),
            Err(_) => Ok(Self::default()),
        }
    }

    /// Parses an iteration-count override string.
    ///
    /// # Example
    ///
    /// ```
    /// use mathmark_bench::{ConfigError, HarnessConfig};
    ///
    /// assert_eq!(HarnessConfig::parse_runs("1000").unwrap().runs(), 1000);
    /// assert!(matches!(
    ///     HarnessConfig::parse_runs("-5"),
    ///     Err(ConfigError::NonPositiveRuns(-5))
    /// ));
    /// assert!(matches!(
    ///     HarnessConfig::parse_runs("a lot"),
    ///     Err(ConfigError::InvalidRuns { .. })
    /// ));
    /// ```
    pub fn parse_runs(value: &str) -> Result<Self, ConfigError> {
        let runs: i64 = value
            .trim()
            .parse()
            .map_err(|source| ConfigError::InvalidRuns {
                value: value.to_string(),
                source,
            })?;
        Self::from_signed(runs)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Example
    ///
    /// ```
    /// use mathmark_bench::HarnessConfig;
    ///
    /// let config = HarnessConfig::from_toml_str("runs = 5000").unwrap();
    /// assert_eq!(config.runs(), 5000);
    ///
    /// // An empty file means the default count.
    /// let config = HarnessConfig::from_toml_str("").unwrap();
    /// assert_eq!(config.runs(), mathmark_bench::DEFAULT_RUNS);
    /// ```
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let file: ConfigFile = toml::from_str(content)?;
        match file.runs {
            Some(runs) => Self::from_signed(runs),
            None => Ok(Self::default()),
        }
    }

    /// Loads configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Configured iteration count.
    pub fn runs(&self) -> u64 {
        self.runs
    }

    /// Reciprocal of the iteration count, used for input normalization.
    pub fn inverse_runs(&self) -> f64 {
        self.inverse_runs
    }
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            runs: DEFAULT_RUNS,
            inverse_runs: 1.0 / DEFAULT_RUNS as f64,
        }
    }
}
