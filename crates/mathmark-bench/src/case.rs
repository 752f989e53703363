//! One benchmark case: one function, three providers, identical inputs.

use mathmark_core::{Arity, Function, Provider};
use tracing::debug;

use crate::config::HarnessConfig;
use crate::error::{HarnessError, Result};
use crate::input::InputSequence;
use crate::result::{CaseResult, ProviderTiming};
use crate::timing::{timed_binary, timed_unary, TimedSample};

/// The fixed provider trio: baseline first, candidate second, standard third.
///
/// Providers are concrete type parameters rather than trait objects, so the
/// timed call sites monomorphize identically for every provider.
///
/// # Example
///
/// ```
/// use mathmark_bench::ProviderSet;
/// use mathmark_core::{FastApprox, Function, Reference, StdMath};
///
/// let providers = ProviderSet::new(Reference, FastApprox, StdMath);
/// assert!(providers.verify(&Function::ALL).is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct ProviderSet<B, C, S> {
    /// Baseline provider; its elapsed time is the ratio unit.
    pub baseline: B,
    /// Candidate provider under evaluation.
    pub candidate: C,
    /// Standard-library provider.
    pub standard: S,
}

impl<B: Provider, C: Provider, S: Provider> ProviderSet<B, C, S> {
    /// Creates the trio in execution order.
    pub fn new(baseline: B, candidate: C, standard: S) -> Self {
        Self {
            baseline,
            candidate,
            standard,
        }
    }

    /// Checks that every provider implements every listed function with the
    /// right arity. Run at registration time so a missing capability is a
    /// startup failure, not a mid-run one.
    pub fn verify(&self, functions: &[Function]) -> Result<()> {
        for &function in functions {
            match function.arity() {
                Arity::Unary => {
                    self.unary_trio(function)?;
                }
                Arity::Binary => {
                    self.binary_trio(function)?;
                }
            }
        }
        Ok(())
    }

    fn unary_trio(&self, function: Function) -> Result<[(&'static str, fn(f64) -> f64); 3]> {
        Ok([
            lookup_unary(&self.baseline, function)?,
            lookup_unary(&self.candidate, function)?,
            lookup_unary(&self.standard, function)?,
        ])
    }

    fn binary_trio(&self, function: Function) -> Result<[(&'static str, fn(f64, f64) -> f64); 3]> {
        Ok([
            lookup_binary(&self.baseline, function)?,
            lookup_binary(&self.candidate, function)?,
            lookup_binary(&self.standard, function)?,
        ])
    }
}

fn lookup_unary<P: Provider>(
    provider: &P,
    function: Function,
) -> Result<(&'static str, fn(f64) -> f64)> {
    provider
        .function(function)
        .and_then(|imp| imp.as_unary())
        .map(|f| (provider.name(), f))
        .ok_or(HarnessError::ProviderUnavailable {
            provider: provider.name(),
            function,
        })
}

fn lookup_binary<P: Provider>(
    provider: &P,
    function: Function,
) -> Result<(&'static str, fn(f64, f64) -> f64)> {
    provider
        .function(function)
        .and_then(|imp| imp.as_binary())
        .map(|f| (provider.name(), f))
        .ok_or(HarnessError::ProviderUnavailable {
            provider: provider.name(),
            function,
        })
}

/// Runs one benchmark case.
///
/// Generates the input sequence once and times the three providers against
/// that same instance, strictly sequentially, never interleaved. After all
/// three runs, every accumulator must be finite; the first non-finite one
/// fails the case, naming the offending provider. On success the per-call
/// averages and ratios-to-baseline are derivable from the returned
/// [`CaseResult`].
pub fn run_case<B: Provider, C: Provider, S: Provider>(
    providers: &ProviderSet<B, C, S>,
    function: Function,
    config: &HarnessConfig,
) -> Result<CaseResult> {
    let inputs = InputSequence::for_function(function, config);
    let effective_calls = inputs.effective_calls();

    let samples: [(&'static str, TimedSample); 3] = match &inputs {
        InputSequence::Unary(ramp) => {
            let trio = providers.unary_trio(function)?;
            trio.map(|(name, f)| (name, observe(name, function, timed_unary(f, ramp))))
        }
        InputSequence::Binary(grid) => {
            let trio = providers.binary_trio(function)?;
            trio.map(|(name, f)| (name, observe(name, function, timed_binary(f, grid))))
        }
    };

    for &(provider, sample) in &samples {
        if !sample.is_finite() {
            return Err(HarnessError::NonFiniteAccumulator { provider, function });
        }
    }

    let [baseline, candidate, standard] =
        samples.map(|(provider, sample)| ProviderTiming {
            provider,
            elapsed: sample.elapsed,
            accumulator: sample.accumulator,
        });

    Ok(CaseResult {
        function,
        effective_calls,
        baseline,
        candidate,
        standard,
    })
}

/// Logs the accumulator right after a timed run; part of the observation
/// that keeps the timed calls live.
fn observe(provider: &str, function: Function, sample: TimedSample) -> TimedSample {
    debug!(
        event = "timed_run",
        provider,
        function = %function,
        elapsed_ns = sample.elapsed.as_nanos() as u64,
        accumulator = sample.accumulator,
    );
    sample
}

#[cfg(test)]
mod tests {
    use super::*;
    use mathmark_core::{FastApprox, FunctionImpl, Reference, StdMath};

    /// Candidate whose asin is broken (returns NaN for every input) but whose
    /// other functions fall through to the standard library.
    struct BrokenAsin;

    impl Provider for BrokenAsin {
        fn name(&self) -> &'static str {
            "broken-asin"
        }

        fn function(&self, function: Function) -> Option<FunctionImpl> {
            fn nan(_: f64) -> f64 {
                f64::NAN
            }
            match function {
                Function::Asin => Some(FunctionImpl::Unary(nan)),
                _ => StdMath.function(function),
            }
        }
    }

    /// Provider with an empty capability set.
    struct Empty;

    impl Provider for Empty {
        fn name(&self) -> &'static str {
            "empty"
        }

        fn function(&self, _function: Function) -> Option<FunctionImpl> {
            None
        }
    }

    fn small_config() -> HarnessConfig {
        HarnessConfig::new(1000).unwrap()
    }

    #[test]
    fn test_case_produces_three_finite_timings() {
        let providers = ProviderSet::new(Reference, FastApprox, StdMath);
        let result = run_case(&providers, Function::Cos, &small_config()).unwrap();
        assert_eq!(result.effective_calls, 1000);
        for timing in result.timings() {
            assert!(timing.accumulator.is_finite());
        }
        assert_eq!(result.ratio(&result.baseline), 1.0);
    }

    #[test]
    fn test_binary_case_uses_grid_count() {
        let providers = ProviderSet::new(Reference, FastApprox, StdMath);
        let config = HarnessConfig::new(999).unwrap();
        let result = run_case(&providers, Function::Atan2, &config).unwrap();
        // floor(sqrt(999)) = 31, so 961 pairs rather than 999 calls.
        assert_eq!(result.effective_calls, 961);
    }

    #[test]
    fn test_hypot_case_measures_hypot() {
        // The magnitude case must call the magnitude function, not the angle
        // function: over a symmetric grid the angle sum is ~0 while the
        // magnitude sum is large and positive.
        let providers = ProviderSet::new(Reference, FastApprox, StdMath);
        let result = run_case(&providers, Function::Hypot, &small_config()).unwrap();
        for timing in result.timings() {
            assert!(timing.accumulator > 0.0);
        }
    }

    #[test]
    fn test_nan_provider_fails_case_with_names() {
        let providers = ProviderSet::new(Reference, BrokenAsin, StdMath);
        let err = run_case(&providers, Function::Asin, &small_config()).unwrap_err();
        match err {
            HarnessError::NonFiniteAccumulator { provider, function } => {
                assert_eq!(provider, "broken-asin");
                assert_eq!(function, Function::Asin);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_missing_capability_detected_by_verify() {
        let providers = ProviderSet::new(Reference, Empty, StdMath);
        let err = providers.verify(&[Function::Cos]).unwrap_err();
        assert!(matches!(
            err,
            HarnessError::ProviderUnavailable {
                provider: "empty",
                function: Function::Cos,
            }
        ));
    }

    #[test]
    fn test_wrong_arity_is_unavailable() {
        /// Claims a binary implementation for every function.
        struct AllBinary;

        impl Provider for AllBinary {
            fn name(&self) -> &'static str {
                "all-binary"
            }

            fn function(&self, _function: Function) -> Option<FunctionImpl> {
                Some(FunctionImpl::Binary(f64::atan2))
            }
        }

        let providers = ProviderSet::new(Reference, AllBinary, StdMath);
        assert!(matches!(
            providers.verify(&[Function::Cos]).unwrap_err(),
            HarnessError::ProviderUnavailable {
                provider: "all-binary",
                ..
            }
        ));
    }
}
