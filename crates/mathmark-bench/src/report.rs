//! Plain-text report rendering.
//!
//! Line-oriented output: one header line before any case, one fixed-width
//! detail line per completed case, a `FAILED:` line per failed case, and an
//! aggregate summary line at the end. Formatting is purely presentational
//! and carries no control semantics.

use std::io::{self, Write};

use mathmark_core::Function;

use crate::result::CaseResult;
use crate::runner::RunSummary;

/// Writes the benchmark report to an `io::Write` sink.
///
/// # Example
///
/// ```
/// use mathmark_bench::ReportWriter;
///
/// let mut writer = ReportWriter::new(Vec::new());
/// writer.header(1000, &["mathmark 0.2.0", "linux x86_64"]).unwrap();
/// let text = String::from_utf8(writer.into_inner()).unwrap();
/// assert!(text.contains("Runs=1000"));
/// assert!(text.contains("reference"));
/// assert!(text.contains("linux x86_64"));
/// ```
#[derive(Debug)]
pub struct ReportWriter<W> {
    sink: W,
}

impl<W: Write> ReportWriter<W> {
    /// Wraps a sink.
    pub fn new(sink: W) -> Self {
        Self { sink }
    }

    /// Returns the underlying sink.
    pub fn into_inner(self) -> W {
        self.sink
    }

    /// Writes the single header line: column names spanning each provider's
    /// avg/ratio pair, the configured run count, and the caller's opaque
    /// environment descriptors.
    pub fn header(&mut self, runs: u64, environment: &[&str]) -> io::Result<()> {
        writeln!(
            self.sink,
            "{:<6} {:>19} {:>19} {:>19} Runs={} {}",
            "name",
            "reference",
            "candidate",
            "standard",
            runs,
            environment.join(" "),
        )
    }

    /// Writes one detail line: function name, then per provider in baseline,
    /// candidate, standard order the integer average nanoseconds per call
    /// and the 4-decimal ratio to baseline.
    pub fn case(&mut self, result: &CaseResult) -> io::Result<()> {
        write!(self.sink, "{:<6}", result.function)?;
        for timing in result.timings() {
            write!(
                self.sink,
                " {:>9} {:>9.4}",
                timing.avg_nanos(result.effective_calls),
                result.ratio(timing),
            )?;
        }
        writeln!(self.sink)
    }

    /// Writes the inline line replacing a normal row for a failed case.
    pub fn failure(&mut self, function: Function, provider: &str) -> io::Result<()> {
        writeln!(
            self.sink,
            "FAILED: {function} {provider} produced non-finite result"
        )
    }

    /// Writes the aggregate summary line.
    pub fn summary(&mut self, summary: &RunSummary) -> io::Result<()> {
        writeln!(
            self.sink,
            "{} cases, {} failed",
            summary.total(),
            summary.failed
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::result::ProviderTiming;
    use std::time::Duration;

    fn sample_result() -> CaseResult {
        let timing = |provider, nanos| ProviderTiming {
            provider,
            elapsed: Duration::from_nanos(nanos),
            accumulator: 1.5,
        };
        CaseResult {
            function: Function::Cos,
            effective_calls: 1000,
            baseline: timing("reference", 42_000),
            candidate: timing("candidate", 21_000),
            standard: timing("standard", 63_000),
        }
    }

    fn render(f: impl FnOnce(&mut ReportWriter<Vec<u8>>)) -> String {
        let mut writer = ReportWriter::new(Vec::new());
        f(&mut writer);
        String::from_utf8(writer.into_inner()).unwrap()
    }

    #[test]
    fn test_header_contains_columns_and_runs() {
        let text = render(|w| w.header(100_000_000, &["v0.2.0"]).unwrap());
        assert!(text.starts_with("name "));
        assert!(text.contains("reference"));
        assert!(text.contains("candidate"));
        assert!(text.contains("standard"));
        assert!(text.contains("Runs=100000000"));
        assert!(text.contains("v0.2.0"));
        assert_eq!(text.lines().count(), 1);
    }

    #[test]
    fn test_case_row_layout() {
        let text = render(|w| w.case(&sample_result()).unwrap());
        // name, then three (avg, ratio) pairs.
        let fields: Vec<&str> = text.split_whitespace().collect();
        assert_eq!(fields, ["cos", "42", "1.0000", "21", "0.5000", "63", "1.5000"]);
    }

    #[test]
    fn test_baseline_ratio_renders_as_one() {
        let text = render(|w| w.case(&sample_result()).unwrap());
        assert!(text.contains("1.0000"));
    }

    #[test]
    fn test_failure_line_names_function_and_provider() {
        let text = render(|w| w.failure(Function::Asin, "candidate").unwrap());
        assert_eq!(
            text,
            "FAILED: asin candidate produced non-finite result\n"
        );
    }

    #[test]
    fn test_summary_line() {
        let summary = RunSummary {
            completed: 9,
            failed: 1,
        };
        let text = render(|w| w.summary(&summary).unwrap());
        assert_eq!(text, "10 cases, 1 failed\n");
    }
}
