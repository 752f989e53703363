//! Deterministic input sequence generation.
//!
//! Sequences are value types holding only the domain parameters; elements
//! are computed on demand as a pure function of the index. Two sequences
//! built from the same iteration count and function are bit-identical,
//! independent of call order or provider, and one sequence instance is
//! shared by all three timed runs of a case.

use mathmark_core::{Arity, Function};

use crate::config::HarnessConfig;

/// Unary input ramp: `scale * (i - runs/2) * (1/runs)` for `i` in `[0, runs)`.
///
/// The midpoint uses integer-truncating division, matching the effective
/// iteration count exactly. With `scale = 100` and `runs = 1000` the ramp
/// covers `[-50, 50)`; with `scale = 0.999` it stays inside `[-1, 1]` with
/// margin, as `asin`/`acos` require.
///
/// # Example
///
/// ```
/// use mathmark_bench::{HarnessConfig, RampSequence};
///
/// let config = HarnessConfig::new(1000).unwrap();
/// let ramp = RampSequence::new(100.0, &config);
/// assert_eq!(ramp.len(), 1000);
/// assert_eq!(ramp.value(0), -50.0);
/// assert_eq!(ramp.value(500), 0.0);
/// assert_eq!(ramp.value(999), 49.9);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct RampSequence {
    scale: f64,
    runs: u64,
    midpoint: i64,
    inverse_runs: f64,
}

impl RampSequence {
    /// Creates the ramp for a domain scale and configuration.
    pub fn new(scale: f64, config: &HarnessConfig) -> Self {
        Self {
            scale,
            runs: config.runs(),
            midpoint: (config.runs() / 2) as i64,
            inverse_runs: config.inverse_runs(),
        }
    }

    /// Number of elements, equal to the configured iteration count.
    pub fn len(&self) -> u64 {
        self.runs
    }

    /// Whether the sequence is empty (never, for a valid configuration).
    pub fn is_empty(&self) -> bool {
        self.runs == 0
    }

    /// Element at index `i`.
    #[inline(always)]
    pub fn value(&self, i: u64) -> f64 {
        self.scale * ((i as i64 - self.midpoint) as f64) * self.inverse_runs
    }

    /// Iterates all elements in index order.
    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        (0..self.runs).map(move |i| self.value(i))
    }
}

/// Binary input grid with side `floor(sqrt(runs))`.
///
/// Produces `side * side` coordinate pairs
/// `((i - side/2) * (100/side), (j - side/2) * (100/side))`, keeping the
/// total evaluation count on the same order as the unary case while covering
/// a 2-D domain. The pair count is the exact effective call count for
/// averaging and may be strictly less than `runs`.
///
/// # Example
///
/// ```
/// use mathmark_bench::GridSequence;
///
/// assert_eq!(GridSequence::for_runs(1_000_000).len(), 1_000_000);
/// assert_eq!(GridSequence::for_runs(999_999).len(), 998_001);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct GridSequence {
    side: u64,
    midpoint: i64,
    step: f64,
}

impl GridSequence {
    /// Builds the grid whose side is the integer square root of `runs`.
    pub fn for_runs(runs: u64) -> Self {
        let mut side = (runs as f64).sqrt() as u64;
        // Float sqrt can land one off for large counts; settle exactly.
        while ((side + 1) as u128) * ((side + 1) as u128) <= runs as u128 {
            side += 1;
        }
        while side > 1 && (side as u128) * (side as u128) > runs as u128 {
            side -= 1;
        }
        Self {
            side,
            midpoint: (side / 2) as i64,
            step: 100.0 / side as f64,
        }
    }

    /// Grid side length.
    pub fn side(&self) -> u64 {
        self.side
    }

    /// Total number of pairs, `side * side`.
    pub fn len(&self) -> u64 {
        self.side * self.side
    }

    /// Whether the grid is empty (never, for a valid configuration).
    pub fn is_empty(&self) -> bool {
        self.side == 0
    }

    /// Coordinate component for a row or column index.
    #[inline(always)]
    pub fn component(&self, index: u64) -> f64 {
        ((index as i64 - self.midpoint) as f64) * self.step
    }

    /// Iterates all `(row, column)` coordinate pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        (0..self.side).flat_map(move |i| {
            (0..self.side).map(move |j| (self.component(i), self.component(j)))
        })
    }
}

/// Input sequence for one benchmark case, matching the function's arity.
#[derive(Debug, Clone, PartialEq)]
pub enum InputSequence {
    Unary(RampSequence),
    Binary(GridSequence),
}

impl InputSequence {
    /// Builds the sequence for a function under a configuration.
    pub fn for_function(function: Function, config: &HarnessConfig) -> Self {
        match function.arity() {
            Arity::Unary => {
                InputSequence::Unary(RampSequence::new(function.domain_scale(), config))
            }
            Arity::Binary => InputSequence::Binary(GridSequence::for_runs(config.runs())),
        }
    }

    /// Effective call count: the exact averaging denominator for the case.
    pub fn effective_calls(&self) -> u64 {
        match self {
            InputSequence::Unary(ramp) => ramp.len(),
            InputSequence::Binary(grid) => grid.len(),
        }
    }
}
