//! Provider capability contract.

use crate::function::Function;

/// A single function implementation exposed by a provider.
///
/// Plain `fn` pointers keep providers stateless and make the timed call site
/// a single indirect call, identical for every provider.
#[derive(Debug, Clone, Copy)]
pub enum FunctionImpl {
    /// `f(x)`.
    Unary(fn(f64) -> f64),
    /// `f(y, x)` for `atan2`, `f(x, y)` for `hypot`.
    Binary(fn(f64, f64) -> f64),
}

impl FunctionImpl {
    /// Returns the unary function pointer, if this is a unary implementation.
    pub fn as_unary(self) -> Option<fn(f64) -> f64> {
        match self {
            FunctionImpl::Unary(f) => Some(f),
            FunctionImpl::Binary(_) => None,
        }
    }

    /// Returns the binary function pointer, if this is a binary implementation.
    pub fn as_binary(self) -> Option<fn(f64, f64) -> f64> {
        match self {
            FunctionImpl::Binary(f) => Some(f),
            FunctionImpl::Unary(_) => None,
        }
    }
}

/// A named source of function implementations.
///
/// Providers are stateless and pure: the same arguments always produce the
/// same result, and looking up a function has no side effects. The harness
/// verifies the full capability set of every provider at registration time,
/// so a missing function is reported before any timing starts.
///
/// # Example
///
/// ```
/// use mathmark_core::{Function, FunctionImpl, Provider};
///
/// struct CosOnly;
///
/// impl Provider for CosOnly {
///     fn name(&self) -> &'static str {
///         "cos-only"
///     }
///
///     fn function(&self, function: Function) -> Option<FunctionImpl> {
///         match function {
///             Function::Cos => Some(FunctionImpl::Unary(f64::cos)),
///             _ => None,
///         }
///     }
/// }
///
/// assert!(CosOnly.function(Function::Cos).is_some());
/// assert!(CosOnly.function(Function::Asin).is_none());
/// ```
pub trait Provider {
    /// Provider name as shown in error messages and logs.
    fn name(&self) -> &'static str;

    /// Looks up the implementation of `function`, if this provider has one.
    fn function(&self, function: Function) -> Option<FunctionImpl>;
}
