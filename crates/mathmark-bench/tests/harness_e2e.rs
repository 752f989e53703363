//! End-to-end harness runs over the full function set.

use mathmark_bench::{Harness, HarnessConfig, ProviderSet};
use mathmark_core::{FastApprox, Function, FunctionImpl, Provider, Reference, StdMath};

fn run_to_string<B, C, S>(harness: Harness<B, C, S>) -> (String, mathmark_bench::RunSummary)
where
    B: Provider,
    C: Provider,
    S: Provider,
{
    let mut out = Vec::new();
    let summary = harness
        .run(&mut out, &["mathmark-test", "it"])
        .expect("run should not fail fatally");
    (String::from_utf8(out).unwrap(), summary)
}

#[test]
fn full_function_set_completes_cleanly() {
    let config = HarnessConfig::new(1000).unwrap();
    let mut harness = Harness::new(config, ProviderSet::new(Reference, FastApprox, StdMath));
    harness.register_all().unwrap();

    let (report, summary) = run_to_string(harness);

    assert_eq!(summary.completed, Function::ALL.len());
    assert!(summary.is_clean());

    // Header + one row per function + summary.
    assert_eq!(report.lines().count(), Function::ALL.len() + 2);
    for function in Function::ALL {
        assert!(report.contains(function.name()), "missing row for {function}");
    }
    // Every row shows the baseline ratio of exactly one.
    for row in report.lines().skip(1).take(Function::ALL.len()) {
        assert!(row.contains("1.0000"), "row without unit baseline ratio: {row}");
    }
    assert!(report.ends_with("10 cases, 0 failed\n"));
}

/// Candidate whose asin returns NaN for every in-domain input.
struct NanAsinCandidate;

impl Provider for NanAsinCandidate {
    fn name(&self) -> &'static str {
        "candidate"
    }

    fn function(&self, function: Function) -> Option<FunctionImpl> {
        fn nan(_: f64) -> f64 {
            f64::NAN
        }
        match function {
            Function::Asin => Some(FunctionImpl::Unary(nan)),
            _ => FastApprox.function(function),
        }
    }
}

#[test]
fn nan_candidate_fails_only_its_own_case() {
    let config = HarnessConfig::new(1000).unwrap();
    let mut harness = Harness::new(
        config,
        ProviderSet::new(Reference, NanAsinCandidate, StdMath),
    );
    // asin first, cos afterwards: the cos case must still complete.
    harness.register(Function::Asin).unwrap();
    harness.register(Function::Cos).unwrap();

    let (report, summary) = run_to_string(harness);

    assert_eq!(summary.completed, 1);
    assert_eq!(summary.failed, 1);
    assert!(report.contains("FAILED: asin candidate produced non-finite result"));

    let cos_row = report
        .lines()
        .find(|line| line.starts_with("cos"))
        .expect("cos row missing");
    assert!(cos_row.contains("1.0000"));
    assert!(report.ends_with("2 cases, 1 failed\n"));
}

#[test]
fn same_runs_produce_identical_input_domains() {
    // Two separate runs over the same configuration must agree on every
    // accumulator bit: sequences are pure functions of the configuration.
    use mathmark_bench::{timed_unary, RampSequence};

    let config = HarnessConfig::new(5000).unwrap();
    let first = timed_unary(f64::cos, &RampSequence::new(100.0, &config));
    let second = timed_unary(f64::cos, &RampSequence::new(100.0, &config));
    assert_eq!(first.accumulator.to_bits(), second.accumulator.to_bits());
}
