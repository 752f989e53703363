//! Error types for the mathmark harness.

use mathmark_core::Function;
use thiserror::Error;

use crate::config::ConfigError;

/// Main error type for harness operations.
#[derive(Debug, Error)]
pub enum HarnessError {
    /// Invalid configuration; fatal before any benchmark executes.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A provider is missing a registered function (or exposes it with the
    /// wrong arity). Detected at registration time, never mid-run.
    #[error("provider `{provider}` does not implement `{function}`")]
    ProviderUnavailable {
        provider: &'static str,
        function: Function,
    },

    /// A provider produced a non-finite accumulated result: either an
    /// out-of-domain input or a defective implementation. Fails that case
    /// only; the run continues.
    #[error("provider `{provider}` produced a non-finite result for `{function}`")]
    NonFiniteAccumulator {
        provider: &'static str,
        function: Function,
    },

    /// The report sink rejected a write.
    #[error("report I/O error: {0}")]
    Report(#[from] std::io::Error),
}

/// Result type alias for harness operations.
pub type Result<T> = std::result::Result<T, HarnessError>;
