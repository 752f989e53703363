//! Reference provider backed by the `libm` crate.

use crate::function::Function;
use crate::provider::{FunctionImpl, Provider};

/// Portable soft-float baseline provider.
///
/// Delegates to the `libm` crate, whose musl-derived implementations produce
/// the same bit patterns on every platform. This is the unit against which
/// the other providers' elapsed times are expressed.
///
/// # Example
///
/// ```
/// use mathmark_core::{Function, Provider, Reference};
///
/// assert_eq!(Reference.name(), "reference");
/// assert!(Reference.function(Function::Expm1).is_some());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Reference;

impl Provider for Reference {
    fn name(&self) -> &'static str {
        "reference"
    }

    fn function(&self, function: Function) -> Option<FunctionImpl> {
        Some(match function {
            Function::Asin => FunctionImpl::Unary(libm::asin),
            Function::Cos => FunctionImpl::Unary(libm::cos),
            Function::Acos => FunctionImpl::Unary(libm::acos),
            Function::Atan => FunctionImpl::Unary(libm::atan),
            Function::Atan2 => FunctionImpl::Binary(libm::atan2),
            Function::Hypot => FunctionImpl::Binary(libm::hypot),
            Function::Cosh => FunctionImpl::Unary(libm::cosh),
            Function::Sinh => FunctionImpl::Unary(libm::sinh),
            Function::Tanh => FunctionImpl::Unary(libm::tanh),
            Function::Expm1 => FunctionImpl::Unary(libm::expm1),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_capability_set() {
        for function in Function::ALL {
            assert!(
                Reference.function(function).is_some(),
                "reference is missing {function}"
            );
        }
    }

    #[test]
    fn test_spot_values() {
        let asin = Reference
            .function(Function::Asin)
            .unwrap()
            .as_unary()
            .unwrap();
        assert!((asin(1.0) - std::f64::consts::FRAC_PI_2).abs() < 1e-15);

        let hypot = Reference
            .function(Function::Hypot)
            .unwrap()
            .as_binary()
            .unwrap();
        assert_eq!(hypot(3.0, 4.0), 5.0);
    }
}
