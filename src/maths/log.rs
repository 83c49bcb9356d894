//! ln, log10, log1p.
//!
//! All three write the argument as `2^k·(1 + f)` with `sqrt(2)/2 < 1 + f <
//! sqrt(2)` and approximate `log(1 + f)` through `s = f/(2 + f)`:
//! `log(1 + f) = 2s + s·R(s²)`.

use super::{LN2_HI, LN2_LO, TWO54, hi_word, horner, lo_word, mla, trunc_lo, with_hi};

const LG1: f64 = 6.666666666666735130e-01; // 3FE55555 55555593
const LG2: f64 = 3.999999999940941908e-01; // 3FD99999 9997FA04
const LG3: f64 = 2.857142874366239149e-01; // 3FD24924 94229359
const LG4: f64 = 2.222219843214978396e-01; // 3FCC71C5 1D8E78AF
const LG5: f64 = 1.818357216161805012e-01; // 3FC74664 96CB03DE
const LG6: f64 = 1.531383769920937332e-01; // 3FC39A09 D078C69F
const LG7: f64 = 1.479819860511658591e-01; // 3FC2F112 DF3E5244

const IVLN10_HI: f64 = 4.34294481878168880939e-01; // 0x3fdbcb7b 15200000
const IVLN10_LO: f64 = 2.50829467116452752298e-11; // 0x3dbb9438 ca9aadd5
const LOG10_2_HI: f64 = 3.01029995663611771306e-01; // 0x3FD34413 509F6000
const LOG10_2_LO: f64 = 3.69423907715893078616e-13; // 0x3D59FEF3 11F12B36

/// `s·R(s²)` split into its odd and even halves for a shorter dependency chain.
#[inline(always)]
fn series<const NATIVE: bool>(z: f64) -> f64 {
    let w = z * z;
    let t1 = w * mla::<NATIVE>(w, mla::<NATIVE>(w, LG6, LG4), LG2);
    let t2 = z * mla::<NATIVE>(w, mla::<NATIVE>(w, mla::<NATIVE>(w, LG7, LG5), LG3), LG1);
    t2 + t1
}

/// Splits a positive finite normal-or-subnormal `x` into `k` and `x / 2^k`
/// in `[sqrt(2)/2, sqrt(2))`. Returns `(k, scaled, hx_of_mantissa)`.
#[inline(always)]
fn decompose(mut x: f64, mut hx: i32) -> (i32, f64, i32) {
    let mut k = 0;
    if hx < 0x0010_0000 {
        k -= 54;
        x *= TWO54;
        hx = hi_word(x) as i32;
    }
    k += (hx >> 20) - 1023;
    let m = hx & 0x000f_ffff;
    let i = (m + 0x95f64) & 0x10_0000;
    // x or x/2
    let x = with_hi(x, (m | (i ^ 0x3ff0_0000)) as u32);
    (k + (i >> 20), x, m)
}

/// Natural logarithm.
pub(crate) fn ln<const NATIVE: bool>(x: f64) -> f64 {
    let hx = hi_word(x) as i32;
    if hx < 0x0010_0000 {
        if (hx & 0x7fff_ffff) as u32 | lo_word(x) == 0 {
            return f64::NEG_INFINITY;
        }
        if hx < 0 {
            return f64::NAN;
        }
    }
    if hx >= 0x7ff0_0000 {
        return x + x;
    }

    let (k, x, m) = decompose(x, hx);
    let f = x - 1.0;
    let dk = k as f64;

    if (0x000f_ffff & (2 + m)) < 3 {
        // |f| < 2^-20
        if f == 0.0 {
            return if k == 0 { 0.0 } else { dk * LN2_HI + dk * LN2_LO };
        }
        let r = f * f * (0.5 - 0.33333333333333333 * f);
        return if k == 0 { f - r } else { dk * LN2_HI - ((r - dk * LN2_LO) - f) };
    }

    let s = f / (2.0 + f);
    let r = series::<NATIVE>(s * s);
    // f close to the ends of the interval: keep the f²/2 split
    if (m - 0x6147a) | (0x6b851 - m) > 0 {
        let hfsq = 0.5 * f * f;
        if k == 0 {
            f - (hfsq - s * (hfsq + r))
        } else {
            dk * LN2_HI - ((hfsq - (s * (hfsq + r) + dk * LN2_LO)) - f)
        }
    } else if k == 0 {
        f - s * (f - r)
    } else {
        dk * LN2_HI - ((s * (f - r) - dk * LN2_LO) - f)
    }
}

/// Base-10 logarithm, computed in extra precision so that exact powers of ten
/// give exact results.
pub(crate) fn log10<const NATIVE: bool>(x: f64) -> f64 {
    let hx = hi_word(x) as i32;
    if hx < 0x0010_0000 {
        if (hx & 0x7fff_ffff) as u32 | lo_word(x) == 0 {
            return f64::NEG_INFINITY;
        }
        if hx < 0 {
            return f64::NAN;
        }
    }
    if hx >= 0x7ff0_0000 {
        return x + x;
    }
    if hx == 0x3ff0_0000 && lo_word(x) == 0 {
        return 0.0;
    }

    let (k, x, _) = decompose(x, hx);
    let y = k as f64;
    let f = x - 1.0;
    let hfsq = 0.5 * f * f;
    let s = f / (2.0 + f);
    let r = s * (hfsq + series::<NATIVE>(s * s));

    // log(1+f) = hi + lo with hi exact in 32 bits
    let hi = trunc_lo(f - hfsq);
    let lo = (f - hi) - hfsq + r;
    let mut val_hi = hi * IVLN10_HI;
    let y2 = y * LOG10_2_HI;
    let mut val_lo = y * LOG10_2_LO + (lo + hi) * IVLN10_LO + lo * IVLN10_HI;

    let w = y2 + val_hi;
    val_lo += (y2 - w) + val_hi;
    val_hi = w;
    val_lo + val_hi
}

/// `ln(1 + x)`, accurate near zero.
pub(crate) fn log1p<const NATIVE: bool>(x: f64) -> f64 {
    let hx = hi_word(x) as i32;
    let ax = (hx & 0x7fff_ffff) as u32;

    let mut k = 1;
    let mut f = 0.0;
    let mut c = 0.0;
    let mut hu: u32 = 0;

    // 1 + x < sqrt(2)
    if hx < 0x3fda_827a {
        if ax >= 0x3ff0_0000 {
            return if x == -1.0 { f64::NEG_INFINITY } else { f64::NAN };
        }
        // |x| < 2^-29
        if ax < 0x3e20_0000 {
            return if ax < 0x3c90_0000 { x } else { x - x * x * 0.5 };
        }
        // sqrt(2)/2 <= 1 + x: no reduction needed
        if hx > 0 || hx <= 0xbfd2_bec4u32 as i32 {
            k = 0;
            f = x;
            hu = 1;
        }
    }
    if hx >= 0x7ff0_0000 {
        return x + x;
    }

    if k != 0 {
        let mut u;
        if hx < 0x4340_0000 {
            u = 1.0 + x;
            hu = hi_word(u);
            k = (hu >> 20) as i32 - 1023;
            // rounding error of 1 + x, relative to u
            c = if k > 0 { 1.0 - (u - x) } else { x - (u - 1.0) };
            c /= u;
        } else {
            u = x;
            hu = hi_word(u);
            k = (hu >> 20) as i32 - 1023;
            c = 0.0;
        }
        hu &= 0x000f_ffff;
        if hu < 0x6a09e {
            u = with_hi(u, hu | 0x3ff0_0000);
        } else {
            k += 1;
            u = with_hi(u, hu | 0x3fe0_0000);
            hu = (0x0010_0000 - hu) >> 2;
        }
        f = u - 1.0;
    }

    let dk = k as f64;
    let hfsq = 0.5 * f * f;
    if hu == 0 {
        // |f| < 2^-20
        if f == 0.0 {
            return if k == 0 { 0.0 } else { dk * LN2_HI + (c + dk * LN2_LO) };
        }
        let r = hfsq * (1.0 - 0.66666666666666666 * f);
        return if k == 0 { f - r } else { dk * LN2_HI - ((r - (dk * LN2_LO + c)) - f) };
    }

    let s = f / (2.0 + f);
    let z = s * s;
    let r = z * horner::<NATIVE>(z, &[LG1, LG2, LG3, LG4, LG5, LG6, LG7]);
    if k == 0 {
        f - (hfsq - s * (hfsq + r))
    } else {
        dk * LN2_HI - ((hfsq - (s * (hfsq + r) + (dk * LN2_LO + c))) - f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maths::bits::FloatBits;

    fn ulps(got: f64, want: f64) -> f64 {
        if got == want {
            return 0.0;
        }
        (got - want).abs() / want.ulp()
    }

    fn positives() -> std::vec::Vec<f64> {
        let mut v = std::vec::Vec::new();
        let mut x = 1e-310;
        while x < 1e300 {
            v.push(x);
            x *= 1.37;
        }
        for i in 1..3000 {
            v.push(i as f64 * 0.001);
        }
        v.extend_from_slice(&[
            f64::MIN_POSITIVE,
            f64::from_bits(1),
            f64::MAX,
            1.0000001,
            0.9999999,
        ]);
        v
    }

    #[test]
    fn ln_and_log10_within_two_ulps() {
        for x in positives() {
            assert!(ulps(ln::<false>(x), x.ln()) <= 2.0, "ln({x:e})");
            assert!(ulps(ln::<true>(x), x.ln()) <= 2.0, "ln({x:e})");
            assert!(ulps(log10::<false>(x), x.log10()) <= 2.0, "log10({x:e})");
        }
    }

    #[test]
    fn log10_of_powers_of_ten_is_exact() {
        let mut p = 1.0;
        for n in 0..16 {
            assert_eq!(log10::<false>(p), n as f64, "log10(1e{n})");
            p *= 10.0;
        }
    }

    #[test]
    fn log1p_within_two_ulps() {
        for i in -999..5000 {
            let x = i as f64 * 0.001;
            assert!(ulps(log1p::<false>(x), x.ln_1p()) <= 2.0, "log1p({x})");
            assert!(ulps(log1p::<true>(x), x.ln_1p()) <= 2.0, "log1p({x})");
        }
        for &x in &[1e-30, -1e-10, 3e-9, 1e20, 1e300, f64::MAX] {
            assert!(ulps(log1p::<false>(x), x.ln_1p()) <= 2.0, "log1p({x:e})");
        }
    }

    #[test]
    fn special_values() {
        for f in [ln::<false>, log10::<false>] {
            assert_eq!(f(0.0), f64::NEG_INFINITY);
            assert_eq!(f(-0.0), f64::NEG_INFINITY);
            assert!(f(-1.0).is_nan());
            assert!(f(f64::NEG_INFINITY).is_nan());
            assert!(f(f64::NAN).is_nan());
            assert_eq!(f(f64::INFINITY), f64::INFINITY);
            assert_eq!(f(1.0).to_bits(), 0);
        }
        assert_eq!(log1p::<false>(-1.0), f64::NEG_INFINITY);
        assert!(log1p::<false>(-1.5).is_nan());
        assert_eq!(log1p::<false>(-0.0).to_bits(), (-0.0f64).to_bits());
        assert_eq!(log1p::<false>(f64::INFINITY), f64::INFINITY);
        assert!(log1p::<false>(f64::NAN).is_nan());
    }
}
