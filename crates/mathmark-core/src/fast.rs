//! Fast approximate candidate provider.
//!
//! Trades accuracy and edge-case coverage for short dependency chains:
//! Cody-Waite reduction with fdlibm kernel polynomials for `cos`, a minimax
//! odd polynomial for `atan` (with `asin`/`acos`/`atan2` derived by
//! identity), and a table-free `exp` (power-of-two scaling plus a degree-7
//! polynomial) feeding `expm1` and the hyperbolics.
//!
//! Known limitations, by construction:
//! - trig reduction is two-constant Cody-Waite, so `cos` degrades for
//!   `|x|` beyond roughly `2^20` (no Payne-Hanek path)
//! - the `atan` family is accurate to about `2e-5` rad
//! - `hypot` is a bare `sqrt(x*x + y*y)` with no overflow protection

use crate::function::Function;
use crate::provider::{FunctionImpl, Provider};

const FRAC_PI_2: f64 = std::f64::consts::FRAC_PI_2;
const PI: f64 = std::f64::consts::PI;

// Two-constant split of pi/2 for Cody-Waite reduction.
const PIO2_HI: f64 = 1.57079632673412561417e+00; // 0x3FF921FB54400000
const PIO2_LO: f64 = 6.07710050650619224932e-11; // 0x3DD0B4611A626331
const INV_PIO2: f64 = 6.36619772367581382433e-01; // 2/pi

// fdlibm kernel coefficients for sin/cos on |r| <= pi/4.
const S1: f64 = -1.66666666666666324348e-01;
const S2: f64 = 8.33333333332248946124e-03;
const S3: f64 = -1.98412698298579493134e-04;
const S4: f64 = 2.75573137070700676789e-06;
const S5: f64 = -2.50507602534068634195e-08;
const S6: f64 = 1.58969099521155010221e-10;

const C1: f64 = 4.16666666666666019037e-02;
const C2: f64 = -1.38888888888741095749e-03;
const C3: f64 = 2.48015872894767294178e-05;
const C4: f64 = -2.75573143513906633035e-07;
const C5: f64 = 2.08757232129817482790e-09;
const C6: f64 = -1.13596475577881948265e-11;

// Minimax odd polynomial for atan on [-1, 1], |error| <~ 2e-5 rad.
const AT1: f64 = 0.99997726;
const AT3: f64 = -0.33262347;
const AT5: f64 = 0.19354346;
const AT7: f64 = -0.11643287;
const AT9: f64 = 0.05265332;
const AT11: f64 = -0.01172120;

// Two-constant split of ln(2) plus overflow bounds for exp.
const LOG2_E: f64 = std::f64::consts::LOG2_E;
const LN2_HI: f64 = 6.93147180369123816490e-01;
const LN2_LO: f64 = 1.90821492927058770002e-10;
const EXP_OVERFLOW: f64 = 709.782712893384;
const EXP_UNDERFLOW: f64 = -708.396418532264;

#[inline(always)]
fn kernel_sin(r: f64) -> f64 {
    let z = r * r;
    r + r * z * (S1 + z * (S2 + z * (S3 + z * (S4 + z * (S5 + z * S6)))))
}

#[inline(always)]
fn kernel_cos(r: f64) -> f64 {
    let z = r * r;
    1.0 - 0.5 * z + z * z * (C1 + z * (C2 + z * (C3 + z * (C4 + z * (C5 + z * C6)))))
}

/// Cosine via quadrant reduction onto the kernel polynomials.
pub fn cos(x: f64) -> f64 {
    if !x.is_finite() {
        return f64::NAN;
    }
    let n = (x * INV_PIO2).round();
    let r = (x - n * PIO2_HI) - n * PIO2_LO;
    match (n as i64) & 3 {
        0 => kernel_cos(r),
        1 => -kernel_sin(r),
        2 => -kernel_cos(r),
        _ => kernel_sin(r),
    }
}

#[inline(always)]
fn atan_poly(x: f64) -> f64 {
    // |x| <= 1
    let z = x * x;
    x * (AT1 + z * (AT3 + z * (AT5 + z * (AT7 + z * (AT9 + z * AT11)))))
}

/// Arctangent; polynomial on `[-1, 1]`, reciprocal identity outside.
pub fn atan(x: f64) -> f64 {
    if x.is_nan() {
        return f64::NAN;
    }
    if x.abs() <= 1.0 {
        atan_poly(x)
    } else {
        let head = if x > 0.0 { FRAC_PI_2 } else { -FRAC_PI_2 };
        head - atan_poly(1.0 / x)
    }
}

/// Arcsine via `atan(x / sqrt(1 - x^2))`.
pub fn asin(x: f64) -> f64 {
    if x.abs() > 1.0 {
        return f64::NAN;
    }
    if x.abs() == 1.0 {
        return x * FRAC_PI_2;
    }
    atan(x / (1.0 - x * x).sqrt())
}

/// Arccosine via `pi/2 - asin(x)`.
pub fn acos(x: f64) -> f64 {
    FRAC_PI_2 - asin(x)
}

/// Four-quadrant arctangent built on the fast `atan`.
pub fn atan2(y: f64, x: f64) -> f64 {
    if x.is_nan() || y.is_nan() {
        return f64::NAN;
    }
    if x == 0.0 {
        return if y == 0.0 {
            0.0
        } else if y > 0.0 {
            FRAC_PI_2
        } else {
            -FRAC_PI_2
        };
    }
    let base = atan(y / x);
    if x > 0.0 {
        base
    } else if y >= 0.0 {
        base + PI
    } else {
        base - PI
    }
}

/// Magnitude without overflow protection.
pub fn hypot(x: f64, y: f64) -> f64 {
    (x * x + y * y).sqrt()
}

/// Exponential: `2^k * e^r` with a degree-7 polynomial on `|r| <= ln(2)/2`.
pub fn exp(x: f64) -> f64 {
    if x.is_nan() {
        return f64::NAN;
    }
    if x > EXP_OVERFLOW {
        return f64::INFINITY;
    }
    if x < EXP_UNDERFLOW {
        return 0.0;
    }
    let k = (x * LOG2_E).round();
    let r = (x - k * LN2_HI) - k * LN2_LO;
    let p = 1.0
        + r * (1.0
            + r * (0.5
                + r * (1.0 / 6.0
                    + r * (1.0 / 24.0
                        + r * (1.0 / 120.0 + r * (1.0 / 720.0 + r * (1.0 / 5040.0)))))));
    let ki = k as i64;
    if ki >= 1024 {
        // Just below the overflow cutoff; split the power-of-two scaling so
        // the intermediate stays representable.
        let scale = f64::from_bits(((ki - 512 + 1023) as u64) << 52);
        return (p * scale) * f64::from_bits(((512 + 1023) as u64) << 52);
    }
    p * f64::from_bits(((ki + 1023) as u64) << 52)
}

/// `e^x - 1`; series near zero to dodge cancellation, `exp(x) - 1` elsewhere.
pub fn expm1(x: f64) -> f64 {
    if x.is_nan() {
        return f64::NAN;
    }
    if x.abs() < 0.25 {
        let p = 1.0 / 6.0
            + x * (1.0 / 24.0 + x * (1.0 / 120.0 + x * (1.0 / 720.0 + x * (1.0 / 5040.0))));
        return x + x * x * (0.5 + x * p);
    }
    if x > EXP_OVERFLOW {
        return f64::INFINITY;
    }
    if x < -37.0 {
        return -1.0;
    }
    exp(x) - 1.0
}

/// Hyperbolic cosine via `(e^|x| + e^-|x|) / 2`.
pub fn cosh(x: f64) -> f64 {
    let ax = x.abs();
    if ax > EXP_OVERFLOW {
        return f64::INFINITY;
    }
    let e = exp(ax);
    0.5 * (e + 1.0 / e)
}

/// Hyperbolic sine; `expm1` form below 1 to keep small inputs accurate.
pub fn sinh(x: f64) -> f64 {
    let ax = x.abs();
    let h = if x < 0.0 { -0.5 } else { 0.5 };
    if ax < 1.0 {
        let t = expm1(ax);
        return h * (t + t / (t + 1.0));
    }
    if ax > EXP_OVERFLOW {
        return if x < 0.0 { f64::NEG_INFINITY } else { f64::INFINITY };
    }
    let e = exp(ax);
    h * (e - 1.0 / e)
}

/// Hyperbolic tangent via `expm1(2|x|) / (expm1(2|x|) + 2)`, saturating.
pub fn tanh(x: f64) -> f64 {
    if x.is_nan() {
        return f64::NAN;
    }
    let ax = x.abs();
    if ax > 20.0 {
        return if x < 0.0 { -1.0 } else { 1.0 };
    }
    let t = expm1(2.0 * ax);
    let v = t / (t + 2.0);
    if x < 0.0 {
        -v
    } else {
        v
    }
}

/// Fast approximate candidate provider.
///
/// The default stand-in for an implementation under evaluation. The harness
/// only checks finiteness of accumulated results; the accuracy trade-offs
/// documented on this module are the candidate's own business.
///
/// # Example
///
/// ```
/// use mathmark_core::{FastApprox, Function, Provider};
///
/// assert_eq!(FastApprox.name(), "candidate");
/// let cos = FastApprox.function(Function::Cos).unwrap().as_unary().unwrap();
/// assert!((cos(1.0) - 0.5403023058681398).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct FastApprox;

impl Provider for FastApprox {
    fn name(&self) -> &'static str {
        "candidate"
    }

    fn function(&self, function: Function) -> Option<FunctionImpl> {
        Some(match function {
            Function::Asin => FunctionImpl::Unary(asin),
            Function::Cos => FunctionImpl::Unary(cos),
            Function::Acos => FunctionImpl::Unary(acos),
            Function::Atan => FunctionImpl::Unary(atan),
            Function::Atan2 => FunctionImpl::Binary(atan2),
            Function::Hypot => FunctionImpl::Binary(hypot),
            Function::Cosh => FunctionImpl::Unary(cosh),
            Function::Sinh => FunctionImpl::Unary(sinh),
            Function::Tanh => FunctionImpl::Unary(tanh),
            Function::Expm1 => FunctionImpl::Unary(expm1),
        })
    }
}
