//! Catalog of benchmarked functions.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Number of arguments a benchmarked function takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    /// One `f64` argument.
    Unary,
    /// Two `f64` arguments.
    Binary,
}

/// A transcendental function measured by the harness.
///
/// Each function knows its display name, arity, and the per-function domain
/// scale used when generating unary input ramps: `0.999` keeps `asin`/`acos`
/// inputs inside `[-1, 1]` with margin, `100.0` spreads unbounded-domain
/// functions over roughly `[-50, 50)`.
///
/// # Example
///
/// ```
/// use mathmark_core::{Arity, Function};
///
/// assert_eq!(Function::Asin.name(), "asin");
/// assert_eq!(Function::Asin.domain_scale(), 0.999);
/// assert_eq!(Function::Atan2.arity(), Arity::Binary);
/// assert_eq!("cosh".parse::<Function>(), Ok(Function::Cosh));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Function {
    Asin,
    Cos,
    Acos,
    Atan,
    Atan2,
    Hypot,
    Cosh,
    Sinh,
    Tanh,
    Expm1,
}

impl Function {
    /// All benchmarked functions, in report order.
    pub const ALL: [Function; 10] = [
        Function::Asin,
        Function::Cos,
        Function::Acos,
        Function::Atan,
        Function::Atan2,
        Function::Hypot,
        Function::Cosh,
        Function::Sinh,
        Function::Tanh,
        Function::Expm1,
    ];

    /// Display name, as printed in the report's first column.
    pub fn name(self) -> &'static str {
        match self {
            Function::Asin => "asin",
            Function::Cos => "cos",
            Function::Acos => "acos",
            Function::Atan => "atan",
            Function::Atan2 => "atan2",
            Function::Hypot => "hypot",
            Function::Cosh => "cosh",
            Function::Sinh => "sinh",
            Function::Tanh => "tanh",
            Function::Expm1 => "expm1",
        }
    }

    /// Whether the function takes one or two arguments.
    pub fn arity(self) -> Arity {
        match self {
            Function::Atan2 | Function::Hypot => Arity::Binary,
            _ => Arity::Unary,
        }
    }

    /// Scale factor applied to the unary input ramp.
    ///
    /// `asin`/`acos` accept only `[-1, 1]`, so their ramp stays inside that
    /// interval with margin. Binary functions use a grid instead and do not
    /// consult this value.
    pub fn domain_scale(self) -> f64 {
        match self {
            Function::Asin | Function::Acos => 0.999,
            _ => 100.0,
        }
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // pad() keeps width specifiers working in the fixed-width report.
        f.pad(self.name())
    }
}

/// Error returned when parsing an unknown function name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown function `{0}`")]
pub struct ParseFunctionError(pub String);

impl FromStr for Function {
    type Err = ParseFunctionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Function::ALL
            .into_iter()
            .find(|f| f.name() == s)
            .ok_or_else(|| ParseFunctionError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_round_trip() {
        for function in Function::ALL {
            assert_eq!(function.name().parse::<Function>(), Ok(function));
        }
    }

    #[test]
    fn test_unknown_name_rejected() {
        let err = "sqrt".parse::<Function>().unwrap_err();
        assert_eq!(err, ParseFunctionError("sqrt".to_string()));
    }

    #[test]
    fn test_arity() {
        assert_eq!(Function::Atan2.arity(), Arity::Binary);
        assert_eq!(Function::Hypot.arity(), Arity::Binary);
        for function in [Function::Asin, Function::Cos, Function::Tanh, Function::Expm1] {
            assert_eq!(function.arity(), Arity::Unary);
        }
    }

    #[test]
    fn test_domain_scales() {
        assert_eq!(Function::Asin.domain_scale(), 0.999);
        assert_eq!(Function::Acos.domain_scale(), 0.999);
        assert_eq!(Function::Cos.domain_scale(), 100.0);
        assert_eq!(Function::Expm1.domain_scale(), 100.0);
    }
}
