//! Benchmarking harness for mathmark.
//!
//! This crate measures and compares the execution cost of three
//! interchangeable math providers (baseline, candidate, standard) over
//! identical, deterministically generated input sequences, and renders a
//! fixed-width plain-text report.
//!
//! # Overview
//!
//! - [`HarnessConfig`] — iteration count (env/file/flag overridable) and its
//!   derived reciprocal, validated before anything runs
//! - [`RampSequence`] / [`GridSequence`] — pure, deterministic input domains
//! - [`timed_unary`] / [`timed_binary`] — monotonic-clock timed loops with an
//!   anti-dead-code accumulator
//! - [`run_case`] — one function, three providers, same inputs, fixed order
//! - [`ReportWriter`] — one header line, one row per case, failure lines,
//!   aggregate summary
//! - [`Harness`] — explicit case registration and the sequential runner loop
//!
//! # Measurement protocol
//!
//! Results are only comparable because every case follows the same protocol:
//! the three providers see the *same* sequence instance, run strictly
//! sequentially in baseline → candidate → standard order, and every
//! per-iteration result is summed into an accumulator that is observed after
//! timing stops. A non-finite accumulator fails that case (and only that
//! case); the run continues and reports the failure count at the end.
//!
//! # Example
//!
//! ```
//! use mathmark_bench::{Harness, HarnessConfig, ProviderSet};
//! use mathmark_core::{FastApprox, Function, Reference, StdMath};
//!
//! let config = HarnessConfig::new(1000).unwrap();
//! let providers = ProviderSet::new(Reference, FastApprox, StdMath);
//! let mut harness = Harness::new(config, providers);
//! harness.register(Function::Cos).unwrap();
//!
//! let mut report = Vec::new();
//! let summary = harness.run(&mut report, &["doctest"]).unwrap();
//! assert_eq!(summary.completed, 1);
//! assert_eq!(summary.failed, 0);
//! assert!(String::from_utf8(report).unwrap().contains("cos"));
//! ```

mod case;
mod config;
mod error;
mod input;
mod report;
mod result;
mod runner;
mod timing;

pub use case::{run_case, ProviderSet};
pub use config::{ConfigError, HarnessConfig, DEFAULT_RUNS, RUNS_ENV_VAR};
pub use error::{HarnessError, Result};
pub use input::{GridSequence, InputSequence, RampSequence};
pub use report::ReportWriter;
pub use result::{CaseResult, ProviderTiming};
pub use runner::{Harness, RunSummary};
pub use timing::{timed_binary, timed_unary, TimedSample};
