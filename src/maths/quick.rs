//! Low-accuracy, high-throughput variants.
//!
//! Each function documents its worst-case error. Special values (NaN, ±0,
//! ±inf, negative domain) are still exact. The trig functions skip the heavy
//! reduction and are only meaningful for `|x| <= QUICK_TRIG_MAX_ARG`.

use core::f64::consts::{FRAC_2_PI, FRAC_PI_4, LN_2};

use super::pow::pow;
use super::reduce::{PIO2_1, PIO2_1T};
use super::rounding::{rint, trunc};
use super::{fabs, is_nan_or_inf};

/// Largest `|x|` for which `sin_quick`/`cos_quick` keep their error bound
/// (2^20·π/2). Beyond it the result is finite and in `[-1, 1]` but otherwise
/// unspecified.
pub const QUICK_TRIG_MAX_ARG: f64 = 1647099.3291652855;

pub const SIN_COS_QUICK_MAX_ABS_ERROR: f64 = 5e-7;
pub const EXP_QUICK_MAX_REL_ERROR: f64 = 3e-2;
pub const LOG_QUICK_MAX_REL_ERROR: f64 = 5e-6;
pub const POW_QUICK_MAX_REL_ERROR: f64 = 3.5e-2;
pub const SQRT_QUICK_MAX_REL_ERROR: f64 = 1.8e-3;
pub const INV_SQRT_QUICK_MAX_REL_ERROR: f64 = 2e-3;

// ========= sin / cos =========

const S3: f64 = -1.0 / 6.0;
const S5: f64 = 1.0 / 120.0;
const S7: f64 = -1.0 / 5040.0;
const C2: f64 = -0.5;
const C4: f64 = 1.0 / 24.0;
const C6: f64 = -1.0 / 720.0;
const C8: f64 = 1.0 / 40320.0;

#[inline(always)]
fn sin_taylor(r: f64) -> f64 {
    let r2 = r * r;
    r + r * r2 * (S3 + r2 * (S5 + r2 * S7))
}

#[inline(always)]
fn cos_taylor(r: f64) -> f64 {
    let r2 = r * r;
    1.0 + r2 * (C2 + r2 * (C4 + r2 * (C6 + r2 * C8)))
}

/// Two-term Cody-Waite step; the quadrant is meaningless past
/// `QUICK_TRIG_MAX_ARG` but the remainder stays in `[-π/4, π/4]`.
#[inline(always)]
fn reduce_quick(x: f64) -> (i64, f64) {
    if fabs(x) <= FRAC_PI_4 {
        return (0, x);
    }
    let k = rint(x * FRAC_2_PI);
    let r = (x - k * PIO2_1) - k * PIO2_1T;
    ((k as i64) & 3, r.clamp(-FRAC_PI_4, FRAC_PI_4))
}

/// Sine with absolute error below `5e-7` for `|x| <= QUICK_TRIG_MAX_ARG`.
pub fn sin_quick(x: f64) -> f64 {
    if is_nan_or_inf(x) {
        return f64::NAN;
    }
    // keeps the sign of zero, the polynomial turns -0 into +0
    if x == 0.0 {
        return x;
    }
    let (q, r) = reduce_quick(x);
    match q {
        0 => sin_taylor(r),
        1 => cos_taylor(r),
        2 => -sin_taylor(r),
        _ => -cos_taylor(r),
    }
}

/// Cosine with absolute error below `5e-7` for `|x| <= QUICK_TRIG_MAX_ARG`.
pub fn cos_quick(x: f64) -> f64 {
    if is_nan_or_inf(x) {
        return f64::NAN;
    }
    let (q, r) = reduce_quick(x);
    match q {
        0 => cos_taylor(r),
        1 => -sin_taylor(r),
        2 => -cos_taylor(r),
        _ => sin_taylor(r),
    }
}

// ========= exp / log / pow =========

/// 2^52 / ln2
const EXP_SCALE: f64 = 6497320848556798.0;
/// Exponent bias in place, shifted down to balance the linear mantissa error.
const EXP_OFFSET: f64 = ((1023u64 << 52) - (45799u64 << 32)) as f64;
const EXP_QUICK_MIN: f64 = -708.0;
const EXP_QUICK_MAX: f64 = 7.09782712893383973096e+02;

/// `e^x` by writing `x/ln2` straight into the exponent field. Relative error
/// below `3e-2` on `[-708, 709.78]`; 0 below that range, +inf above.
pub fn exp_quick(x: f64) -> f64 {
    if x.is_nan() {
        return x;
    }
    if x == 0.0 {
        return 1.0;
    }
    if x < EXP_QUICK_MIN {
        return 0.0;
    }
    if x > EXP_QUICK_MAX {
        return f64::INFINITY;
    }
    f64::from_bits((EXP_SCALE * x + EXP_OFFSET) as i64 as u64)
}

const SQRT2: f64 = core::f64::consts::SQRT_2;
const TWO54: f64 = super::TWO54;

/// Natural logarithm from the exponent field plus a three-term `atanh`
/// series on the mantissa. Relative error below `5e-6`.
pub fn log_quick(x: f64) -> f64 {
    if x.is_nan() || x < 0.0 {
        return f64::NAN;
    }
    if x == 0.0 {
        return f64::NEG_INFINITY;
    }
    if x == f64::INFINITY {
        return x;
    }
    if x == 1.0 {
        return 0.0;
    }
    let (x, mut k) = if x < f64::MIN_POSITIVE { (x * TWO54, -54) } else { (x, 0) };
    let bits = x.to_bits();
    k += ((bits >> 52) as i32) - 1023;
    let mut m = f64::from_bits((bits & super::MANT_MASK) | (1023u64 << 52));
    if m >= SQRT2 {
        m *= 0.5;
        k += 1;
    }
    let s = (m - 1.0) / (m + 1.0);
    let s2 = s * s;
    2.0 * s * (1.0 + s2 * (1.0 / 3.0 + s2 * 0.2)) + k as f64 * LN_2
}

/// `x^y` as `exp_quick(y·log_quick|x|)`. Relative error below `3.5e-2`
/// while `|y·ln x| <= 700`. Special cases follow the accurate `pow`.
pub fn pow_quick(x: f64, y: f64) -> f64 {
    if is_nan_or_inf(x) || is_nan_or_inf(y) || x == 0.0 || y == 0.0 || x == 1.0 {
        return pow::<true>(x, y);
    }
    let mut negate = false;
    if x < 0.0 {
        if trunc(y) != y {
            return f64::NAN;
        }
        // |y| >= 2^53 is always even
        negate = fabs(y) < 9007199254740992.0 && (y as i64) & 1 == 1;
    }
    let r = exp_quick(y * log_quick(fabs(x)));
    if negate { -r } else { r }
}

// ========= roots =========

const SUBNORMAL_SCALE: f64 = TWO54;
const SUBNORMAL_UNSCALE: f64 = 7.450580596923828125e-9; // 2^-27

/// Square root from a halved-exponent seed and one Newton step. Relative
/// error below `1.8e-3`.
pub fn sqrt_quick(x: f64) -> f64 {
    if x.is_nan() || x < 0.0 {
        return f64::NAN;
    }
    if x == 0.0 || x == f64::INFINITY {
        return x;
    }
    let (x, unscale) = if x < f64::MIN_POSITIVE {
        (x * SUBNORMAL_SCALE, SUBNORMAL_UNSCALE)
    } else {
        (x, 1.0)
    };
    let y = f64::from_bits((x.to_bits() >> 1) + 0x1ff8_0000_0000_0000);
    0.5 * (y + x / y) * unscale
}

/// `1/sqrt(x)` from the magic-constant seed and one Newton step. Relative
/// error below `2e-3`.
pub fn inv_sqrt_quick(x: f64) -> f64 {
    if x.is_nan() || x < 0.0 {
        return f64::NAN;
    }
    if x == 0.0 {
        return 1.0 / x;
    }
    if x == f64::INFINITY {
        return 0.0;
    }
    // 1/sqrt(x·2^54) = 2^-27/sqrt(x)
    let (x, rescale) = if x < f64::MIN_POSITIVE {
        (x * SUBNORMAL_SCALE, 134217728.0)
    } else {
        (x, 1.0)
    };
    let y = f64::from_bits(0x5fe6_eb50_c7b5_37a9 - (x.to_bits() >> 1));
    y * (1.5 - 0.5 * x * y * y) * rescale
}
