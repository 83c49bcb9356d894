//! Accurate functions (about 1 ulp) allowed to use hardware FMA and the
//! hardware square root when the target has them.

use super::bits::FloatBits;
use super::{exp, hyperbolic, inverse_trig, log, pow, roots, sqrt_sel, trig};

#[inline(always)]
pub fn sin(x: f64) -> f64 {
    trig::sin::<true>(x)
}

#[inline(always)]
pub fn cos(x: f64) -> f64 {
    trig::cos::<true>(x)
}

/// `(sin x, cos x)` from a single range reduction.
#[inline(always)]
pub fn sin_cos(x: f64) -> (f64, f64) {
    trig::sin_cos::<true>(x)
}

#[inline(always)]
pub fn tan(x: f64) -> f64 {
    trig::tan::<true>(x)
}

/// NaN outside `[-1, 1]`.
#[inline(always)]
pub fn asin(x: f64) -> f64 {
    inverse_trig::asin::<true>(x)
}

#[inline(always)]
pub fn acos(x: f64) -> f64 {
    inverse_trig::acos::<true>(x)
}

/// `asin` with the argument clamped into `[-1, 1]` first.
#[inline(always)]
pub fn asin_in_range(x: f64) -> f64 {
    inverse_trig::asin_in_range::<true>(x)
}

#[inline(always)]
pub fn acos_in_range(x: f64) -> f64 {
    inverse_trig::acos_in_range::<true>(x)
}

#[inline(always)]
pub fn atan(x: f64) -> f64 {
    inverse_trig::atan::<true>(x)
}

/// Angle of the point `(x, y)` in `[-π, π]`, with C99 signed-zero rules.
#[inline(always)]
pub fn atan2(y: f64, x: f64) -> f64 {
    inverse_trig::atan2::<true>(y, x)
}

#[inline(always)]
pub fn sinh(x: f64) -> f64 {
    hyperbolic::sinh::<true>(x)
}

#[inline(always)]
pub fn cosh(x: f64) -> f64 {
    hyperbolic::cosh::<true>(x)
}

/// `cosh(x) - 1` without the cancellation near zero.
#[inline(always)]
pub fn cosh_m1(x: f64) -> f64 {
    hyperbolic::cosh_m1::<true>(x)
}

#[inline(always)]
pub fn sinh_cosh(x: f64) -> (f64, f64) {
    hyperbolic::sinh_cosh::<true>(x)
}

#[inline(always)]
pub fn tanh(x: f64) -> f64 {
    hyperbolic::tanh::<true>(x)
}

#[inline(always)]
pub fn asinh(x: f64) -> f64 {
    hyperbolic::asinh::<true>(x)
}

#[inline(always)]
pub fn acosh(x: f64) -> f64 {
    hyperbolic::acosh::<true>(x)
}

/// `acosh(1 + x)`, accurate for small `x`.
#[inline(always)]
pub fn acosh1p(x: f64) -> f64 {
    hyperbolic::acosh1p::<true>(x)
}

#[inline(always)]
pub fn atanh(x: f64) -> f64 {
    hyperbolic::atanh::<true>(x)
}

#[inline(always)]
pub fn exp(x: f64) -> f64 {
    exp::exp::<true>(x)
}

#[inline(always)]
pub fn expm1(x: f64) -> f64 {
    exp::expm1::<true>(x)
}

#[inline(always)]
pub fn ln(x: f64) -> f64 {
    log::ln::<true>(x)
}

/// Exact for powers of ten.
#[inline(always)]
pub fn log10(x: f64) -> f64 {
    log::log10::<true>(x)
}

#[inline(always)]
pub fn log1p(x: f64) -> f64 {
    log::log1p::<true>(x)
}

/// `x^y` with C99 special values.
#[inline(always)]
pub fn pow(x: f64, y: f64) -> f64 {
    pow::pow::<true>(x, y)
}

#[inline(always)]
pub fn pow_int(x: f64, n: i32) -> f64 {
    pow::pow_int::<true>(x, n)
}

#[inline(always)]
pub fn cbrt(x: f64) -> f64 {
    roots::cbrt::<true>(x)
}

/// `sqrt(x² + y²)` without intermediate overflow; an infinite argument wins over NaN.
#[inline(always)]
pub fn hypot(x: f64, y: f64) -> f64 {
    roots::hypot::<true>(x, y)
}

#[inline(always)]
pub fn hypot3(x: f64, y: f64, z: f64) -> f64 {
    roots::hypot3::<true>(x, y, z)
}

/// Exact `2^n`.
#[inline(always)]
pub fn two_pow(n: i32) -> f64 {
    exp::two_pow(n)
}

#[inline(always)]
pub fn pow2(x: f64) -> f64 {
    pow::pow2(x)
}

#[inline(always)]
pub fn pow3(x: f64) -> f64 {
    pow::pow3(x)
}

/// Hardware square root where available, correctly rounded either way.
#[inline(always)]
pub fn sqrt(x: f64) -> f64 {
    sqrt_sel::<true>(x)
}

/// Magnitude of `magnitude` with the raw sign bit of `sign`.
#[inline(always)]
pub fn copy_sign(magnitude: f64, sign: f64) -> f64 {
    magnitude.copy_sign(sign)
}
