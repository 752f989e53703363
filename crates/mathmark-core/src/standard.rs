//! Standard-library provider.

use crate::function::Function;
use crate::provider::{FunctionImpl, Provider};

/// Provider backed by the platform standard library.
///
/// Delegates to `f64` inherent methods, which typically lower to the system
/// libm (or compiler intrinsics). Accuracy and speed vary by platform.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdMath;

impl Provider for StdMath {
    fn name(&self) -> &'static str {
        "standard"
    }

    fn function(&self, function: Function) -> Option<FunctionImpl> {
        Some(match function {
            Function::Asin => FunctionImpl::Unary(f64::asin),
            Function::Cos => FunctionImpl::Unary(f64::cos),
            Function::Acos => FunctionImpl::Unary(f64::acos),
            Function::Atan => FunctionImpl::Unary(f64::atan),
            Function::Atan2 => FunctionImpl::Binary(f64::atan2),
            Function::Hypot => FunctionImpl::Binary(f64::hypot),
            Function::Cosh => FunctionImpl::Unary(f64::cosh),
            Function::Sinh => FunctionImpl::Unary(f64::sinh),
            Function::Tanh => FunctionImpl::Unary(f64::tanh),
            Function::Expm1 => FunctionImpl::Unary(f64::exp_m1),
        })
    }
}
