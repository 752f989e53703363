//! Sequential harness runner.

use std::io::Write;

use mathmark_core::{Function, Provider};
use tracing::{info, warn};

use crate::case::{run_case, ProviderSet};
use crate::config::HarnessConfig;
use crate::error::{HarnessError, Result};
use crate::report::ReportWriter;

/// Aggregate outcome of a harness run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Cases that completed and produced a report row.
    pub completed: usize,
    /// Cases that failed the finiteness check.
    pub failed: usize,
}

impl RunSummary {
    /// Total registered cases.
    pub fn total(&self) -> usize {
        self.completed + self.failed
    }

    /// Whether every case completed.
    pub fn is_clean(&self) -> bool {
        self.failed == 0
    }
}

/// The harness: an explicit ordered list of benchmark cases over one fixed
/// provider trio, executed strictly sequentially.
///
/// One pass: load configuration, emit the header once, then for each
/// registered function generate inputs, run the three providers, check
/// finiteness, compute ratios, and emit a row. A finiteness failure aborts
/// only that function's case; the runner reports it inline and proceeds, so
/// a fault in one benchmark does not invalidate the rest of the report.
///
/// # Example
///
/// ```
/// use mathmark_bench::{Harness, HarnessConfig, ProviderSet};
/// use mathmark_core::{FastApprox, Function, Reference, StdMath};
///
/// let config = HarnessConfig::new(2000).unwrap();
/// let mut harness = Harness::new(config, ProviderSet::new(Reference, FastApprox, StdMath));
/// harness.register(Function::Asin).unwrap();
/// harness.register(Function::Atan2).unwrap();
///
/// let mut out = Vec::new();
/// let summary = harness.run(&mut out, &["doctest"]).unwrap();
/// assert!(summary.is_clean());
/// assert_eq!(summary.total(), 2);
/// ```
pub struct Harness<B, C, S> {
    config: HarnessConfig,
    providers: ProviderSet<B, C, S>,
    functions: Vec<Function>,
    setup: Option<Box<dyn FnOnce()>>,
}

impl<B: Provider, C: Provider, S: Provider> Harness<B, C, S> {
    /// Creates a harness with an empty case list.
    pub fn new(config: HarnessConfig, providers: ProviderSet<B, C, S>) -> Self {
        Self {
            config,
            providers,
            functions: Vec::new(),
            setup: None,
        }
    }

    /// Registers one benchmark case, verifying the provider capability set
    /// immediately so a missing function fails here, not mid-run.
    pub fn register(&mut self, function: Function) -> Result<()> {
        self.providers.verify(&[function])?;
        self.functions.push(function);
        Ok(())
    }

    /// Registers all functions in report order.
    pub fn register_all(&mut self) -> Result<()> {
        for function in Function::ALL {
            self.register(function)?;
        }
        Ok(())
    }

    /// Installs a callback invoked once, before the first case executes.
    pub fn with_setup(mut self, setup: impl FnOnce() + 'static) -> Self {
        self.setup = Some(Box::new(setup));
        self
    }

    /// Registered cases, in execution order.
    pub fn functions(&self) -> &[Function] {
        &self.functions
    }

    /// Runs every registered case and writes the report to `sink`.
    ///
    /// `environment` strings are passed through to the header verbatim.
    /// Returns the aggregate summary; fatal errors (configuration, provider
    /// capability, sink I/O) abort the run, finiteness failures do not.
    pub fn run<W: Write>(mut self, sink: W, environment: &[&str]) -> Result<RunSummary> {
        let mut report = ReportWriter::new(sink);

        info!(
            event = "run_start",
            runs = self.config.runs(),
            cases = self.functions.len(),
        );
        report.header(self.config.runs(), environment)?;

        if let Some(setup) = self.setup.take() {
            setup();
        }

        let mut summary = RunSummary {
            completed: 0,
            failed: 0,
        };
        for &function in &self.functions {
            info!(event = "case_start", function = %function);
            match run_case(&self.providers, function, &self.config) {
                Ok(result) => {
                    report.case(&result)?;
                    summary.completed += 1;
                }
                Err(HarnessError::NonFiniteAccumulator { provider, function }) => {
                    warn!(event = "case_failed", function = %function, provider);
                    report.failure(function, provider)?;
                    summary.failed += 1;
                }
                Err(fatal) => return Err(fatal),
            }
        }

        report.summary(&summary)?;
        info!(
            event = "run_end",
            completed = summary.completed,
            failed = summary.failed,
        );
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mathmark_core::{FastApprox, FunctionImpl, Reference, StdMath};
    use std::cell::Cell;
    use std::rc::Rc;

    fn harness(runs: u64) -> Harness<Reference, FastApprox, StdMath> {
        Harness::new(
            HarnessConfig::new(runs).unwrap(),
            ProviderSet::new(Reference, FastApprox, StdMath),
        )
    }

    #[test]
    fn test_register_rejects_missing_capability() {
        struct Empty;
        impl Provider for Empty {
            fn name(&self) -> &'static str {
                "empty"
            }
            fn function(&self, _function: Function) -> Option<FunctionImpl> {
                None
            }
        }

        let mut harness = Harness::new(
            HarnessConfig::new(10).unwrap(),
            ProviderSet::new(Reference, Empty, StdMath),
        );
        assert!(matches!(
            harness.register(Function::Cos),
            Err(HarnessError::ProviderUnavailable { .. })
        ));
        assert!(harness.functions().is_empty());
    }

    #[test]
    fn test_setup_runs_once_before_cases() {
        let calls = Rc::new(Cell::new(0));
        let witness = Rc::clone(&calls);

        let mut harness = harness(100).with_setup(move || witness.set(witness.get() + 1));
        harness.register(Function::Cos).unwrap();
        harness.register(Function::Tanh).unwrap();

        let summary = harness.run(Vec::new(), &[]).unwrap();
        assert_eq!(summary.total(), 2);
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_empty_registry_still_emits_header_and_summary() {
        let mut out = Vec::new();
        let summary = harness(100).run(&mut out, &["env"]).unwrap();
        assert_eq!(summary.total(), 0);
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().count(), 2);
        assert!(text.contains("Runs=100"));
        assert!(text.contains("0 cases, 0 failed"));
    }

    #[test]
    fn test_registration_order_is_execution_order() {
        let mut h = harness(500);
        h.register(Function::Tanh).unwrap();
        h.register(Function::Asin).unwrap();
        assert_eq!(h.functions(), &[Function::Tanh, Function::Asin]);

        let mut out = Vec::new();
        h.run(&mut out, &[]).unwrap();
        let text = String::from_utf8(out).unwrap();
        let tanh_at = text.find("tanh").unwrap();
        let asin_at = text.find("asin").unwrap();
        assert!(tanh_at < asin_at);
    }
}
