//! Hyperbolic functions and their inverses, built on exp/expm1 and ln/log1p.

use super::exp::{exp, expm1};
use super::log::{ln, log1p};
use super::{fabs, hi_word, lo_word, sqrt_sel};

const LN2: f64 = 6.93147180559945286227e-01; // 0x3FE62E42 FEFA39EF
/// Above this `cosh` and `sinh` overflow: ln(2·f64::MAX).
const OVERFLOW_THRESHOLD: f64 = 710.4758600739439;

#[inline(always)]
fn with_sign(v: f64, negative: bool) -> f64 {
    if negative { -v } else { v }
}

/// `0.5·exp(|x|)` for `|x|` past the direct range, squaring `exp(|x|/2)` so
/// the band just below the overflow threshold stays finite.
#[inline(always)]
fn half_exp<const NATIVE: bool>(ax: f64) -> f64 {
    if ax < 709.78 {
        return 0.5 * exp::<NATIVE>(ax);
    }
    if ax > OVERFLOW_THRESHOLD {
        return f64::INFINITY;
    }
    let w = exp::<NATIVE>(0.5 * ax);
    (0.5 * w) * w
}

pub(crate) fn sinh<const NATIVE: bool>(x: f64) -> f64 {
    let hx = hi_word(x);
    let ix = hx & 0x7fff_ffff;
    let negative = hx >> 31 != 0;
    if ix >= 0x7ff0_0000 {
        return x + x;
    }
    let ax = fabs(x);

    // |x| < 22
    if ix < 0x4036_0000 {
        if ix < 0x3e30_0000 {
            return x;
        }
        let t = expm1::<NATIVE>(ax);
        let s = if ix < 0x3ff0_0000 {
            0.5 * (2.0 * t - t * t / (t + 1.0))
        } else {
            0.5 * (t + t / (t + 1.0))
        };
        return with_sign(s, negative);
    }
    with_sign(half_exp::<NATIVE>(ax), negative)
}

pub(crate) fn cosh<const NATIVE: bool>(x: f64) -> f64 {
    let ix = hi_word(x) & 0x7fff_ffff;
    if ix >= 0x7ff0_0000 {
        return x * x;
    }
    let ax = fabs(x);

    // |x| < ln2/2
    if ix < 0x3fd6_2e43 {
        let t = expm1::<NATIVE>(ax);
        let w = 1.0 + t;
        if ix < 0x3c80_0000 {
            return w;
        }
        return 1.0 + (t * t) / (w + w);
    }
    if ix < 0x4036_0000 {
        let t = exp::<NATIVE>(ax);
        return 0.5 * t + 0.5 / t;
    }
    half_exp::<NATIVE>(ax)
}

/// `cosh(x) - 1` without cancellation for small `x`.
pub(crate) fn cosh_m1<const NATIVE: bool>(x: f64) -> f64 {
    let ix = hi_word(x) & 0x7fff_ffff;
    if ix >= 0x4036_0000 {
        return cosh::<NATIVE>(x) - 1.0;
    }
    // (e^|x| - 1)² / (2·e^|x|)
    let t = expm1::<NATIVE>(fabs(x));
    (t * t) / (2.0 * (1.0 + t))
}

/// `(sinh x, cosh x)`.
pub(crate) fn sinh_cosh<const NATIVE: bool>(x: f64) -> (f64, f64) {
    let hx = hi_word(x);
    let ix = hx & 0x7fff_ffff;
    if ix >= 0x4036_0000 && ix < 0x7ff0_0000 {
        let h = half_exp::<NATIVE>(fabs(x));
        return (with_sign(h, hx >> 31 != 0), h);
    }
    (sinh::<NATIVE>(x), cosh::<NATIVE>(x))
}

pub(crate) fn tanh<const NATIVE: bool>(x: f64) -> f64 {
    let hx = hi_word(x);
    let ix = hx & 0x7fff_ffff;
    let negative = hx >> 31 != 0;
    if ix >= 0x7ff0_0000 {
        if x.is_nan() {
            return x + x;
        }
        return with_sign(1.0, negative);
    }

    // |x| < 22
    let z = if ix < 0x4036_0000 {
        // |x| < 2^-55
        if ix < 0x3c80_0000 {
            return x;
        }
        let ax = fabs(x);
        if ix >= 0x3ff0_0000 {
            let t = expm1::<NATIVE>(2.0 * ax);
            1.0 - 2.0 / (t + 2.0)
        } else {
            let t = expm1::<NATIVE>(-2.0 * ax);
            -t / (t + 2.0)
        }
    } else {
        1.0
    };
    with_sign(z, negative)
}

pub(crate) fn asinh<const NATIVE: bool>(x: f64) -> f64 {
    let hx = hi_word(x);
    let ix = hx & 0x7fff_ffff;
    if ix >= 0x7ff0_0000 {
        return x + x;
    }
    // |x| < 2^-28
    if ix < 0x3e30_0000 {
        return x;
    }
    let ax = fabs(x);
    let w = if ix > 0x41b0_0000 {
        // |x| > 2^28
        ln::<NATIVE>(ax) + LN2
    } else if ix > 0x4000_0000 {
        ln::<NATIVE>(2.0 * ax + 1.0 / (sqrt_sel::<NATIVE>(x * x + 1.0) + ax))
    } else {
        let t = x * x;
        log1p::<NATIVE>(ax + t / (1.0 + sqrt_sel::<NATIVE>(1.0 + t)))
    };
    with_sign(w, hx >> 31 != 0)
}

pub(crate) fn acosh<const NATIVE: bool>(x: f64) -> f64 {
    let hx = hi_word(x) as i32;
    if hx < 0x3ff0_0000 {
        return f64::NAN;
    }
    if hx >= 0x41b0_0000 {
        // x > 2^28, inf or NaN
        if hx >= 0x7ff0_0000 {
            return x + x;
        }
        return ln::<NATIVE>(x) + LN2;
    }
    if hx == 0x3ff0_0000 && lo_word(x) == 0 {
        return 0.0;
    }
    if hx > 0x4000_0000 {
        let t = x * x;
        return ln::<NATIVE>(2.0 * x - 1.0 / (x + sqrt_sel::<NATIVE>(t - 1.0)));
    }
    // 1 < x <= 2
    let t = x - 1.0;
    log1p::<NATIVE>(t + sqrt_sel::<NATIVE>(2.0 * t + t * t))
}

/// `acosh(1 + x)` without the rounding of `1 + x`; NaN for negative `x`.
pub(crate) fn acosh1p<const NATIVE: bool>(x: f64) -> f64 {
    if x.is_nan() || x < 0.0 {
        return f64::NAN;
    }
    if x >= 1.0 {
        return acosh::<NATIVE>(1.0 + x);
    }
    log1p::<NATIVE>(x + sqrt_sel::<NATIVE>(x * (2.0 + x)))
}

pub(crate) fn atanh<const NATIVE: bool>(x: f64) -> f64 {
    let hx = hi_word(x);
    let ix = hx & 0x7fff_ffff;
    let ax = fabs(x);
    if x.is_nan() {
        return x + x;
    }
    if ax > 1.0 {
        return f64::NAN;
    }
    if ax == 1.0 {
        return with_sign(f64::INFINITY, hx >> 31 != 0);
    }
    // |x| < 2^-28
    if ix < 0x3e30_0000 {
        return x;
    }
    let t = if ix < 0x3fe0_0000 {
        let t = ax + ax;
        0.5 * log1p::<NATIVE>(t + t * ax / (1.0 - ax))
    } else {
        0.5 * log1p::<NATIVE>((ax + ax) / (1.0 - ax))
    };
    with_sign(t, hx >> 31 != 0)
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

    fn rel(got: f64, want: f64) -> f64 {
        if got == want { 0.0 } else { ((got - want) / want).abs() }
    }

    #[test]
    fn sinh_cosh_tanh_within_three_ulps() {
        for i in -7100..7100 {
            let x = i as f64 * 0.1 + 0.0041;
            assert!(ulps(sinh::<false>(x), x.sinh()) <= 3.0, "sinh({x})");
            assert!(ulps(cosh::<false>(x), x.cosh()) <= 3.0, "cosh({x})");
            assert!(ulps(tanh::<true>(x), x.tanh()) <= 3.0, "tanh({x})");
            let (s, c) = sinh_cosh::<true>(x);
            assert!(ulps(s, x.sinh()) <= 3.0 && ulps(c, x.cosh()) <= 3.0, "sinh_cosh({x})");
        }
    }

    #[test]
    fn overflow_band_stays_finite() {
        let x = 710.0;
        assert!(sinh::<false>(x).is_finite());
        assert!(cosh::<false>(-x).is_finite());
        assert!(rel(cosh::<false>(x), x.cosh()) < 1e-15);
        assert_eq!(sinh::<false>(-710.5), f64::NEG_INFINITY);
        assert_eq!(cosh::<false>(711.0), f64::INFINITY);
    }

    #[test]
    fn hyperbolic_special_values() {
        assert_eq!(sinh::<false>(-0.0).to_bits(), (-0.0f64).to_bits());
        assert_eq!(tanh::<false>(-0.0).to_bits(), (-0.0f64).to_bits());
        assert_eq!(cosh::<false>(0.0), 1.0);
        assert_eq!(sinh::<false>(f64::NEG_INFINITY), f64::NEG_INFINITY);
        assert_eq!(cosh::<false>(f64::NEG_INFINITY), f64::INFINITY);
        assert_eq!(tanh::<false>(f64::NEG_INFINITY), -1.0);
        assert_eq!(tanh::<false>(30.0), 1.0);
        assert!(sinh::<false>(f64::NAN).is_nan());
        assert!(cosh::<false>(f64::NAN).is_nan());
        assert!(tanh::<false>(f64::NAN).is_nan());
    }

    #[test]
    fn cosh_m1_keeps_small_arguments() {
        for &x in &[1e-8f64, -3e-5, 1e-3, -2e-3] {
            let series = x * x / 2.0 + x * x * x * x / 24.0 + x.powi(6) / 720.0;
            assert!(rel(cosh_m1::<false>(x), series) < 1e-14, "cosh_m1({x})");
        }
        for &x in &[1.5, -4.0, 30.0] {
            assert!(rel(cosh_m1::<false>(x), x.cosh() - 1.0) < 1e-14, "cosh_m1({x})");
        }
        assert_eq!(cosh_m1::<false>(0.0), 0.0);
    }

    #[test]
    fn inverse_hyperbolic_pinned() {
        // correctly rounded values
        let asinh_cases = [
            (-0.5, -0.48121182505960347),
            (0.845711759011006, 0.7679665953804877),
            (7.5, 2.712465305184344),
            (-1e5, -12.206072645555174),
            (1e300, 691.4686750787737),
            (f64::MAX, 710.475860073944),
        ];
        let acosh_cases = [
            (1.0001, 0.014142017775251545),
            (1.5, 0.9624236501192069),
            (123.456, 5.509015594729667),
            (3e8, 20.21244021318042),
            (f64::MAX, 710.475860073944),
        ];
        let atanh_cases = [
            (-2e-5, -2.0000000002666668e-05),
            (0.4999, 0.5491728198882279),
            (-0.845711759011006, -1.2408988558070433),
            (-0.9993335554815062, -4.003183783825114),
            (-0.9999999999, -11.859499013855018),
        ];
        for (x, want) in asinh_cases {
            assert!(ulps(asinh::<false>(x), want) <= 2.0, "asinh({x:e})");
            assert!(ulps(asinh::<true>(x), want) <= 2.0, "asinh({x:e})");
        }
        for (x, want) in acosh_cases {
            assert!(ulps(acosh::<false>(x), want) <= 2.0, "acosh({x:e})");
            assert!(ulps(acosh::<true>(x), want) <= 2.0, "acosh({x:e})");
        }
        for (x, want) in atanh_cases {
            assert!(ulps(atanh::<false>(x), want) <= 2.0, "atanh({x:e})");
            assert!(ulps(atanh::<true>(x), want) <= 2.0, "atanh({x:e})");
        }
    }

    #[test]
    fn acosh_near_one() {
        for &t in &[1e-7f64, 3e-9, 1e-12] {
            let want = (2.0 * t).sqrt() * (1.0 - t / 12.0);
            assert!(rel(acosh1p::<false>(t), want) < 1e-14, "acosh1p({t})");
            assert!(rel(acosh::<false>(1.0 + t), (2.0 * ((1.0 + t) - 1.0)).sqrt()) < 1e-6);
        }
        assert_eq!(acosh1p::<false>(0.0), 0.0);
        assert!(acosh1p::<false>(-1e-3).is_nan());
        assert!(ulps(acosh1p::<false>(3.0), 2.0634370688955603) <= 2.0);
    }

    #[test]
    fn inverse_hyperbolic_special_values() {
        assert_eq!(acosh::<false>(1.0), 0.0);
        assert!(acosh::<false>(0.999).is_nan());
        assert!(acosh::<false>(-f64::NAN).is_nan());
        assert_eq!(acosh::<false>(f64::INFINITY), f64::INFINITY);
        assert_eq!(atanh::<false>(1.0), f64::INFINITY);
        assert_eq!(atanh::<false>(-1.0), f64::NEG_INFINITY);
        assert!(atanh::<false>(1.5).is_nan());
        assert_eq!(asinh::<false>(-0.0).to_bits(), (-0.0f64).to_bits());
        assert_eq!(asinh::<false>(f64::NEG_INFINITY), f64::NEG_INFINITY);
        assert_eq!(atanh::<false>(-0.0).to_bits(), (-0.0f64).to_bits());
    }
}
