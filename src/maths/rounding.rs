//! Rounding to integral values without libm.
//!
//! The `*_to_int` and [`round`] conversions saturate at the integer range and
//! map NaN to zero.

use super::{EXP_MASK, MANT_MASK, SIGN_MASK};

const TOINT: f64 = 4503599627370496.0; // 2^52

/// Rounds towards zero.
#[inline]
pub fn trunc(x: f64) -> f64 {
    let u = x.to_bits();
    let e = ((u & EXP_MASK) >> 52) as i32 - 0x3ff;
    if e >= 52 {
        // integral, infinite or NaN
        return x;
    }
    if e < 0 {
        return f64::from_bits(u & SIGN_MASK);
    }
    f64::from_bits(u & !(MANT_MASK >> e))
}

#[inline]
pub fn floor(x: f64) -> f64 {
    let t = trunc(x);
    if t > x { t - 1.0 } else { t }
}

#[inline]
pub fn ceil(x: f64) -> f64 {
    let t = trunc(x);
    if t < x { t + 1.0 } else { t }
}

/// Rounds to the nearest integer, ties to even. Keeps the sign of zero.
#[inline]
pub fn rint(x: f64) -> f64 {
    let u = x.to_bits();
    let e = ((u & EXP_MASK) >> 52) as i32 - 0x3ff;
    if e >= 52 {
        return x;
    }
    let y = if u & SIGN_MASK != 0 {
        x - TOINT + TOINT
    } else {
        x + TOINT - TOINT
    };
    if y == 0.0 { f64::from_bits(u & SIGN_MASK) } else { y }
}

/// Alias of [`rint`].
#[inline]
pub fn round_even(x: f64) -> f64 {
    rint(x)
}

/// Nearest `i64`, ties towards positive infinity.
#[inline]
pub fn round(x: f64) -> i64 {
    round_half_up(x) as i64
}

/// Nearest `i32`, ties towards positive infinity.
#[inline]
pub fn round_to_int(x: f64) -> i32 {
    round_half_up(x) as i32
}

#[inline]
pub fn floor_to_int(x: f64) -> i32 {
    floor(x) as i32
}

#[inline]
pub fn ceil_to_int(x: f64) -> i32 {
    ceil(x) as i32
}

#[inline(always)]
fn round_half_up(x: f64) -> f64 {
    let f = floor(x);
    // exact: |x| < 2^52 whenever x has a fractional part
    if x - f >= 0.5 { f + 1.0 } else { f }
}
