//! `x^y` through `2^(y·log2 x)` with both factors carried in extra precision.
//!
//! `log2 |x|` is computed as `t1 + t2` where `t1` has 21 significant bits, `y`
//! is split the same way, so the product `y·log2 x` comes out as `p_h + p_l`
//! with `p_h` exact. Special values follow C99 Annex F.

use super::bits::FloatBits;
use super::{fabs, hi_word, horner, lo_word, sqrt_sel, trunc_lo, with_hi, with_hi_lo};

const BP: [f64; 2] = [1.0, 1.5];
const DP_H: [f64; 2] = [0.0, 5.84962487220764160156e-01]; // 0x3FE2B803 40000000
const DP_L: [f64; 2] = [0.0, 1.35003920212974897128e-08]; // 0x3E4CFDEB 43CFD006
const TWO53: f64 = 9007199254740992.0;

// (3/2)·(log(x) - 2s - 2/3·s³) on the reduced interval
const L1: f64 = 5.99999999999994648725e-01;
const L2: f64 = 4.28571428578550184252e-01;
const L3: f64 = 3.33333329818377432918e-01;
const L4: f64 = 2.72728123808534006489e-01;
const L5: f64 = 2.30660745775561754067e-01;
const L6: f64 = 2.06975017800338417784e-01;

const P1: f64 = 1.66666666666666019037e-01;
const P2: f64 = -2.77777777770155933842e-03;
const P3: f64 = 6.61375632143793436117e-05;
const P4: f64 = -1.65339022054652515390e-06;
const P5: f64 = 4.13813679705723846039e-08;

const LG2: f64 = 6.93147180559945286227e-01;
const LG2_H: f64 = 6.93147182464599609375e-01; // 0x3FE62E43 00000000
const LG2_L: f64 = -1.90465429995776804525e-09;
/// -(1024 - log2(overflow + 0.5ulp))
const OVT: f64 = 8.0085662595372944372e-17;
const CP: f64 = 9.61796693925975554329e-01; // 2/(3·ln2)
const CP_H: f64 = 9.61796700954437255859e-01;
const CP_L: f64 = -7.02846165095275826516e-09;
const IVLN2: f64 = 1.44269504088896338700e+00;
const IVLN2_H: f64 = 1.44269502162933349609e+00; // 24 bits of 1/ln2
const IVLN2_L: f64 = 1.92596299112661746887e-08;

/// 0: not an integer, 1: odd integer, 2: even integer. Only meaningful for
/// finite non-zero `y`.
fn integer_kind(iy: i32, ly: u32) -> i32 {
    if iy >= 0x4340_0000 {
        return 2;
    }
    if iy < 0x3ff0_0000 {
        return 0;
    }
    let k = (iy >> 20) - 0x3ff;
    if k > 20 {
        let j = ly >> (52 - k);
        if j << (52 - k) == ly {
            return 2 - (j & 1) as i32;
        }
    } else if ly == 0 {
        let j = iy >> (20 - k);
        if j << (20 - k) == iy {
            return 2 - (j & 1);
        }
    }
    0
}

pub(crate) fn pow<const NATIVE: bool>(x: f64, y: f64) -> f64 {
    let (hx, lx) = (hi_word(x) as i32, lo_word(x));
    let (hy, ly) = (hi_word(y) as i32, lo_word(y));
    let ix = hx & 0x7fff_ffff;
    let iy = hy & 0x7fff_ffff;

    // x^±0 = 1, 1^y = 1, even for NaN
    if iy as u32 | ly == 0 || (hx == 0x3ff0_0000 && lx == 0) {
        return 1.0;
    }
    if x.is_nan() || y.is_nan() {
        return x + y;
    }

    let yisint = if hx < 0 { integer_kind(iy, ly) } else { 0 };

    if ly == 0 {
        if iy == 0x7ff0_0000 {
            // y = ±inf
            if (ix - 0x3ff0_0000) as u32 | lx == 0 {
                return 1.0;
            }
            return if ix >= 0x3ff0_0000 {
                if hy >= 0 { y } else { 0.0 }
            } else if hy < 0 {
                -y
            } else {
                0.0
            };
        }
        if iy == 0x3ff0_0000 {
            return if hy < 0 { 1.0 / x } else { x };
        }
        if hy == 0x4000_0000 {
            return x * x;
        }
        // y = 0.5, x >= +0 (sqrt(-0) = -0 does not match (-0)^0.5 = +0)
        if hy == 0x3fe0_0000 && hx >= 0 && ix != 0 {
            return sqrt_sel::<NATIVE>(x);
        }
    }

    let mut ax = fabs(x);
    // x = ±0, ±inf, ±1
    if lx == 0 && (ix == 0x7ff0_0000 || ix == 0 || ix == 0x3ff0_0000) {
        let mut z = ax;
        if hy < 0 {
            z = 1.0 / z;
        }
        if hx < 0 {
            if (ix - 0x3ff0_0000) | yisint == 0 {
                return f64::NAN;
            }
            if yisint == 1 {
                z = -z;
            }
        }
        return z;
    }

    // (x < 0)^non-integer
    if hx < 0 && yisint == 0 {
        return f64::NAN;
    }
    let s = if hx < 0 && yisint == 1 { -1.0 } else { 1.0 };

    let (t1, t2);
    if iy > 0x41e0_0000 {
        // |y| > 2^31
        if iy > 0x43f0_0000 {
            // |y| > 2^64: over- or underflows unless x is exactly 1
            if ix <= 0x3fef_ffff {
                return if hy < 0 { f64::INFINITY } else { 0.0 };
            }
            if ix >= 0x3ff0_0000 {
                return if hy > 0 { f64::INFINITY } else { 0.0 };
            }
        }
        if ix < 0x3fef_ffff {
            return if hy < 0 { s * f64::INFINITY } else { s * 0.0 };
        }
        if ix > 0x3ff0_0000 {
            return if hy > 0 { s * f64::INFINITY } else { s * 0.0 };
        }
        // |1 - x| <= 2^-20: log(x) by its series
        let t = ax - 1.0;
        let w = (t * t) * (0.5 - t * (0.3333333333333333333333 - t * 0.25));
        let u = IVLN2_H * t;
        let v = t * IVLN2_L - w * IVLN2;
        t1 = trunc_lo(u + v);
        t2 = v - (t1 - u);
    } else {
        let mut n = 0;
        let mut ix = ix;
        if ix < 0x0010_0000 {
            ax *= TWO53;
            n -= 53;
            ix = hi_word(ax) as i32;
        }
        n += (ix >> 20) - 0x3ff;
        let j = ix & 0x000f_ffff;
        ix = j | 0x3ff0_0000;
        // |x| < sqrt(3/2), |x| < sqrt(3), else halve
        let k = if j <= 0x3988e {
            0
        } else if j < 0xbb67a {
            1
        } else {
            n += 1;
            ix -= 0x0010_0000;
            0
        };
        let ax = with_hi(ax, ix as u32);

        // ss = s_h + s_l = (x - bp) / (x + bp)
        let u = ax - BP[k];
        let v = 1.0 / (ax + BP[k]);
        let ss = u * v;
        let s_h = trunc_lo(ss);
        let t_hi = ((ix >> 1) | 0x2000_0000) + 0x0008_0000 + ((k as i32) << 18);
        let t_h = with_hi_lo(t_hi as u32, 0);
        let t_l = ax - (t_h - BP[k]);
        let s_l = v * ((u - s_h * t_h) - s_h * t_l);

        let s2 = ss * ss;
        let poly = horner::<NATIVE>(s2, &[L1, L2, L3, L4, L5, L6]);
        let r = s2 * s2 * poly + s_l * (s_h + ss);
        let s2 = s_h * s_h;
        let t_h = trunc_lo(3.0 + s2 + r);
        let t_l = r - ((t_h - 3.0) - s2);

        // 2/(3·ln2)·(ss + ...)
        let u = s_h * t_h;
        let v = s_l * t_h + t_l * ss;
        let p_h = trunc_lo(u + v);
        let p_l = v - (p_h - u);
        let z_h = CP_H * p_h;
        let z_l = CP_L * p_h + p_l * CP + DP_L[k];

        // log2(ax) = n + dp_h + z_h + z_l
        let t = n as f64;
        t1 = trunc_lo(((z_h + z_l) + DP_H[k]) + t);
        t2 = z_l - (((t1 - t) - DP_H[k]) - z_h);
    }

    // (y1 + y2)·(t1 + t2)
    let y1 = trunc_lo(y);
    let p_l = (y - y1) * t1 + y * t2;
    let mut p_h = y1 * t1;
    let z = p_l + p_h;
    let j = hi_word(z) as i32;
    let i = lo_word(z);
    if j >= 0x4090_0000 {
        // z >= 1024
        if (j - 0x4090_0000) as u32 | i != 0 || p_l + OVT > z - p_h {
            return s * f64::INFINITY;
        }
    } else if j & 0x7fff_ffff >= 0x4090_cc00 {
        // z <= -1075
        if (j as u32).wrapping_sub(0xc090_cc00) | i != 0 || p_l <= z - p_h {
            return s * 0.0;
        }
    }

    // 2^(p_h + p_l) = 2^n·2^r with |r| <= 0.5
    let i = j & 0x7fff_ffff;
    let mut k = (i >> 20) - 0x3ff;
    let mut n = 0;
    if i > 0x3fe0_0000 {
        n = j + (0x0010_0000 >> (k + 1));
        k = ((n & 0x7fff_ffff) >> 20) - 0x3ff;
        let t = with_hi_lo((n & !(0x000f_ffff >> k)) as u32, 0);
        n = ((n & 0x000f_ffff) | 0x0010_0000) >> (20 - k);
        if j < 0 {
            n = -n;
        }
        p_h -= t;
    }
    let t = trunc_lo(p_l + p_h);
    let u = t * LG2_H;
    let v = (p_l - (t - p_h)) * LG2 + t * LG2_L;
    let z = u + v;
    let w = v - (z - u);
    let t = z * z;
    let t1 = z - t * horner::<NATIVE>(t, &[P1, P2, P3, P4, P5]);
    let r = (z * t1) / (t1 - 2.0) - (w + z * w);
    let z = 1.0 - (r - z);

    let j = (hi_word(z) as i32).wrapping_add(n << 20);
    let z = if j >> 20 <= 0 {
        // subnormal result
        z.scalb(n)
    } else {
        with_hi(z, j as u32)
    };
    s * z
}

/// `x^n` for an integer exponent.
///
/// Exponents in `-1..=2` take one correctly rounded operation. Any longer
/// product chain rounds at every step and drifts past 1 ulp by `n = 29`, so
/// the rest go through [`pow`] and keep its bound.
pub(crate) fn pow_int<const NATIVE: bool>(x: f64, n: i32) -> f64 {
    match n {
        0 => 1.0,
        1 => x,
        2 => x * x,
        -1 => 1.0 / x,
        _ => pow::<NATIVE>(x, n as f64),
    }
}

#[inline(always)]
pub(crate) fn pow2(x: f64) -> f64 {
    x * x
}

#[inline(always)]
pub(crate) fn pow3(x: f64) -> f64 {
    x * x * x
}
