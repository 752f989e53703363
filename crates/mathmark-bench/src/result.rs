//! Benchmark result types.

use std::time::Duration;

use mathmark_core::Function;

/// One provider's timing within a benchmark case.
#[derive(Debug, Clone, Copy)]
pub struct ProviderTiming {
    /// Provider name.
    pub provider: &'static str,
    /// Elapsed wall-clock time for the full timed loop.
    pub elapsed: Duration,
    /// Accumulated sum observed after the loop.
    pub accumulator: f64,
}

impl ProviderTiming {
    /// Average nanoseconds per call, truncated to an integer.
    ///
    /// # Example
    ///
    /// ```
    /// use std::time::Duration;
    /// use mathmark_bench::ProviderTiming;
    ///
    /// let timing = ProviderTiming {
    ///     provider: "reference",
    ///     elapsed: Duration::from_nanos(4500),
    ///     accumulator: 1.0,
    /// };
    /// assert_eq!(timing.avg_nanos(1000), 4);
    /// ```
    pub fn avg_nanos(&self, effective_calls: u64) -> u64 {
        if effective_calls == 0 {
            return 0;
        }
        (self.elapsed.as_nanos() / effective_calls as u128) as u64
    }
}

/// Result of one benchmark case: one function, three providers, identical
/// inputs.
///
/// Created fresh per function, consumed immediately by the report writer,
/// and discarded; nothing is persisted across functions or runs.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use mathmark_bench::{CaseResult, ProviderTiming};
/// use mathmark_core::Function;
///
/// let timing = |provider, nanos| ProviderTiming {
///     provider,
///     elapsed: Duration::from_nanos(nanos),
///     accumulator: 0.0,
/// };
/// let result = CaseResult {
///     function: Function::Cos,
///     effective_calls: 1000,
///     baseline: timing("reference", 2000),
///     candidate: timing("candidate", 1000),
///     standard: timing("standard", 3000),
/// };
///
/// assert_eq!(result.ratio(&result.baseline), 1.0);
/// assert_eq!(result.ratio(&result.candidate), 0.5);
/// assert_eq!(result.ratio(&result.standard), 1.5);
/// ```
#[derive(Debug, Clone)]
pub struct CaseResult {
    /// The benchmarked function.
    pub function: Function,
    /// Exact number of calls each provider performed: the configured run
    /// count for unary cases, the grid pair count for binary cases.
    pub effective_calls: u64,
    /// Baseline provider timing; the unit for ratios.
    pub baseline: ProviderTiming,
    /// Candidate provider timing.
    pub candidate: ProviderTiming,
    /// Standard-library provider timing.
    pub standard: ProviderTiming,
}

impl CaseResult {
    /// The three timings in report order: baseline, candidate, standard.
    pub fn timings(&self) -> [&ProviderTiming; 3] {
        [&self.baseline, &self.candidate, &self.standard]
    }

    /// Ratio of a timing to the baseline.
    ///
    /// The baseline's own ratio is exactly 1.0 (`elapsed / elapsed`). A
    /// zero-duration baseline only occurs in degenerate test setups; the
    /// ratio is then 1.0 for an equally-zero timing and infinite otherwise.
    pub fn ratio(&self, timing: &ProviderTiming) -> f64 {
        let base = self.baseline.elapsed;
        if base.is_zero() {
            if timing.elapsed.is_zero() {
                return 1.0;
            }
            return f64::INFINITY;
        }
        timing.elapsed.as_nanos() as f64 / base.as_nanos() as f64
    }
}
