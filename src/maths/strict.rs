//! Bit-reproducible functions: the same algorithms as [`fast`](super::fast),
//! evaluated with plain IEEE-754 arithmetic only, so every platform returns
//! identical bits.

use super::bits::FloatBits;
use super::{exp, hyperbolic, inverse_trig, log, pow, roots, sqrt_sel, trig};

#[inline(always)]
pub fn sin(x: f64) -> f64 {
    trig::sin::<false>(x)
}

#[inline(always)]
pub fn cos(x: f64) -> f64 {
    trig::cos::<false>(x)
}

/// `(sin x, cos x)` from a single range reduction.
#[inline(always)]
pub fn sin_cos(x: f64) -> (f64, f64) {
    trig::sin_cos::<false>(x)
}

#[inline(always)]
pub fn tan(x: f64) -> f64 {
    trig::tan::<false>(x)
}

/// NaN outside `[-1, 1]`.
#[inline(always)]
pub fn asin(x: f64) -> f64 {
    inverse_trig::asin::<false>(x)
}

#[inline(always)]
pub fn acos(x: f64) -> f64 {
    inverse_trig::acos::<false>(x)
}

/// `asin` with the argument clamped into `[-1, 1]` first.
#[inline(always)]
pub fn asin_in_range(x: f64) -> f64 {
    inverse_trig::asin_in_range::<false>(x)
}

#[inline(always)]
pub fn acos_in_range(x: f64) -> f64 {
    inverse_trig::acos_in_range::<false>(x)
}

#[inline(always)]
pub fn atan(x: f64) -> f64 {
    inverse_trig::atan::<false>(x)
}

/// Angle of the point `(x, y)` in `[-π, π]`, with C99 signed-zero rules.
#[inline(always)]
pub fn atan2(y: f64, x: f64) -> f64 {
    inverse_trig::atan2::<false>(y, x)
}

#[inline(always)]
pub fn sinh(x: f64) -> f64 {
    hyperbolic::sinh::<false>(x)
}

#[inline(always)]
pub fn cosh(x: f64) -> f64 {
    hyperbolic::cosh::<false>(x)
}

/// `cosh(x) - 1` without the cancellation near zero.
#[inline(always)]
pub fn cosh_m1(x: f64) -> f64 {
    hyperbolic::cosh_m1::<false>(x)
}

#[inline(always)]
pub fn sinh_cosh(x: f64) -> (f64, f64) {
    hyperbolic::sinh_cosh::<false>(x)
}

#[inline(always)]
pub fn tanh(x: f64) -> f64 {
    hyperbolic::tanh::<false>(x)
}

#[inline(always)]
pub fn asinh(x: f64) -> f64 {
    hyperbolic::asinh::<false>(x)
}

#[inline(always)]
pub fn acosh(x: f64) -> f64 {
    hyperbolic::acosh::<false>(x)
}

/// `acosh(1 + x)`, accurate for small `x`.
#[inline(always)]
pub fn acosh1p(x: f64) -> f64 {
    hyperbolic::acosh1p::<false>(x)
}

#[inline(always)]
pub fn atanh(x: f64) -> f64 {
    hyperbolic::atanh::<false>(x)
}

#[inline(always)]
pub fn exp(x: f64) -> f64 {
    exp::exp::<false>(x)
}

#[inline(always)]
pub fn expm1(x: f64) -> f64 {
    exp::expm1::<false>(x)
}

#[inline(always)]
pub fn ln(x: f64) -> f64 {
    log::ln::<false>(x)
}

/// Exact for powers of ten.
#[inline(always)]
pub fn log10(x: f64) -> f64 {
    log::log10::<false>(x)
}

#[inline(always)]
pub fn log1p(x: f64) -> f64 {
    log::log1p::<false>(x)
}

/// `x^y` with C99 special values.
#[inline(always)]
pub fn pow(x: f64, y: f64) -> f64 {
    pow::pow::<false>(x, y)
}

#[inline(always)]
pub fn pow_int(x: f64, n: i32) -> f64 {
    pow::pow_int::<false>(x, n)
}

#[inline(always)]
pub fn cbrt(x: f64) -> f64 {
    roots::cbrt::<false>(x)
}

/// `sqrt(x² + y²)` without intermediate overflow; an infinite argument wins over NaN.
#[inline(always)]
pub fn hypot(x: f64, y: f64) -> f64 {
    roots::hypot::<false>(x, y)
}

#[inline(always)]
pub fn hypot3(x: f64, y: f64, z: f64) -> f64 {
    roots::hypot3::<false>(x, y, z)
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

/// Correctly rounded square root computed in integer arithmetic.
#[inline(always)]
pub fn sqrt(x: f64) -> f64 {
    sqrt_sel::<false>(x)
}

/// Magnitude of `magnitude` with the sign of `sign`; a NaN `sign` counts as
/// positive.
#[inline(always)]
pub fn copy_sign(magnitude: f64, sign: f64) -> f64 {
    if sign.is_nan() {
        return magnitude.abs_bits();
    }
    magnitude.copy_sign(sign)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maths::fast;
    use proptest::prelude::*;

    fn ulps(got: f64, want: f64) -> f64 {
        if got == want || (got.is_nan() && want.is_nan()) {
            return 0.0;
        }
        (got - want).abs() / want.ulp()
    }

    #[test]
    fn copy_sign_treats_nan_as_positive() {
        assert_eq!(copy_sign(-2.0, f64::NAN), 2.0);
        assert_eq!(copy_sign(-2.0, -f64::NAN), 2.0);
        assert_eq!(copy_sign(2.0, -0.0), -2.0);
        assert!(copy_sign(f64::NAN, -1.0).is_nan());
    }

    #[test]
    fn special_values_match_fast() {
        let specials = [
            0.0,
            -0.0,
            1.0,
            -1.0,
            f64::INFINITY,
            f64::NEG_INFINITY,
            f64::NAN,
            f64::MIN_POSITIVE,
        ];
        for &x in &specials {
            for (s, f) in [
                (sin(x), fast::sin(x)),
                (tan(x), fast::tan(x)),
                (asin(x), fast::asin(x)),
                (acosh(x), fast::acosh(x)),
                (atanh(x), fast::atanh(x)),
                (expm1(x), fast::expm1(x)),
                (ln(x), fast::ln(x)),
                (log1p(x), fast::log1p(x)),
                (sqrt(x), fast::sqrt(x)),
                (cbrt(x), fast::cbrt(x)),
            ] {
                let same = s.to_bits() == f.to_bits() || (s.is_nan() && f.is_nan());
                assert!(same, "{x}: {s} vs {f}");
            }
        }
    }

    proptest! {
        #[test]
        fn agrees_with_fast_within_one_ulp(x in -1e6f64..1e6) {
            prop_assert!(ulps(sin(x), fast::sin(x)) <= 1.0);
            prop_assert!(ulps(cos(x), fast::cos(x)) <= 1.0);
            prop_assert!(ulps(atan(x), fast::atan(x)) <= 1.0);
            prop_assert!(ulps(asinh(x), fast::asinh(x)) <= 1.0);
            prop_assert!(ulps(cbrt(x), fast::cbrt(x)) <= 1.0);
            prop_assert!(ulps(hypot(x, 3.5), fast::hypot(x, 3.5)) <= 1.0);
        }

        #[test]
        fn exp_log_agree_with_fast(x in -700.0f64..700.0) {
            prop_assert!(ulps(exp(x), fast::exp(x)) <= 1.0);
            prop_assert!(ulps(tanh(x), fast::tanh(x)) <= 1.0);
            let y = x.abs() + 1e-3;
            prop_assert!(ulps(ln(y), fast::ln(y)) <= 1.0);
            prop_assert!(ulps(pow(y, 1.7), fast::pow(y, 1.7)) <= 1.0);
        }

        #[test]
        fn sqrt_is_bit_exact(bits in 0u64..0x7ff0_0000_0000_0000) {
            let x = f64::from_bits(bits);
            prop_assert_eq!(sqrt(x).to_bits(), x.sqrt().to_bits());
        }
    }
}
