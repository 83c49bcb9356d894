//! sin, cos, tan on top of [`rem_pio2`](super::reduce::rem_pio2).
//!
//! The kernels work on a double-double `x + y` with `|x + y| <= π/4`.

use super::reduce::rem_pio2;
use super::{fabs, hi_word, horner, is_nan_or_inf, lo_word, mla, trunc_lo, with_hi_lo};

const HALF: f64 = 5.00000000000000000000e-01;

// sin(x) ≈ x + S1·x³ + ... + S6·x¹³ on [-π/4, π/4]
const S1: f64 = -1.66666666666666324348e-01;
const S2: f64 = 8.33333333332248946124e-03;
const S3: f64 = -1.98412698298579493134e-04;
const S4: f64 = 2.75573137070700676789e-06;
const S5: f64 = -2.50507602534068634195e-08;
const S6: f64 = 1.58969099521155010221e-10;

// cos(x) ≈ 1 - x²/2 + C1·x⁴ + ... + C6·x¹⁴
const C1: f64 = 4.16666666666666019037e-02;
const C2: f64 = -1.38888888888741095749e-03;
const C3: f64 = 2.48015872894767294178e-05;
const C4: f64 = -2.75573143513906633035e-07;
const C5: f64 = 2.08757232129817482790e-09;
const C6: f64 = -1.13596475577881948265e-11;

// tan(x) ≈ x + T0·x³ + ... + T12·x²⁷
const T: [f64; 13] = [
    3.33333333333334091986e-01,
    1.33333333333201242699e-01,
    5.39682539762260521377e-02,
    2.18694882948595424599e-02,
    8.86323982359930005737e-03,
    3.59207910759131235356e-03,
    1.45620945432529025516e-03,
    5.88041240820264096874e-04,
    2.46463134818469906812e-04,
    7.81794442939557092300e-05,
    7.14072491382608190305e-05,
    -1.85586374855275456654e-05,
    2.59073051863633712884e-05,
];
const PIO4: f64 = 7.85398163397448278999e-01;
const PIO4_LO: f64 = 3.06161699786838301793e-17;

/// sin(x + y). `y` is ignored when `has_tail` is false.
#[inline(always)]
fn kernel_sin<const NATIVE: bool>(x: f64, y: f64, has_tail: bool) -> f64 {
    let ix = hi_word(x) & 0x7fff_ffff;
    // |x| < 2^-27
    if ix < 0x3e40_0000 && (x as i32) == 0 {
        return x;
    }
    let z = x * x;
    let v = z * x;
    let r = horner::<NATIVE>(z, &[S2, S3, S4, S5, S6]);
    if !has_tail {
        x + v * mla::<NATIVE>(z, r, S1)
    } else {
        x - ((z * (HALF * y - v * r) - y) - v * S1)
    }
}

#[inline(always)]
fn kernel_cos<const NATIVE: bool>(x: f64, y: f64) -> f64 {
    let ix = hi_word(x) & 0x7fff_ffff;
    if ix < 0x3e40_0000 && (x as i32) == 0 {
        return 1.0;
    }
    let z = x * x;
    let poly = horner::<NATIVE>(z, &[C1, C2, C3, C4, C5, C6]);
    let r = z * poly;
    if ix < 0x3fd3_3333 {
        // |x| < 0.3
        return 1.0 - (HALF * z - (z * r - x * y));
    }
    // 1 - qx is exact and absorbs most of z/2
    let qx = if ix > 0x3fe9_0000 {
        0.28125
    } else {
        with_hi_lo(ix - 0x0020_0000, 0)
    };
    let hz = HALF * z - qx;
    let a = 1.0 - qx;
    a - (hz - (z * r - x * y))
}

/// tan(x + y) for `odd == false`, -1/tan(x + y) for `odd == true`.
fn kernel_tan<const NATIVE: bool>(mut x: f64, mut y: f64, odd: bool) -> f64 {
    let hx = hi_word(x) as i32;
    let ix = (hx & 0x7fff_ffff) as u32;

    if ix < 0x3e30_0000 && (x as i32) == 0 {
        // |x| < 2^-28
        if !odd {
            return x;
        }
        if ix | lo_word(x) == 0 {
            return 1.0 / fabs(x);
        }
        let w = x + y;
        let z = trunc_lo(w);
        let v = y - (z - x);
        let a = -1.0 / w;
        let t = trunc_lo(a);
        let s = 1.0 + t * z;
        return t + a * (s + t * v);
    }

    // |x| >= 0.6744: tan(π/4 - x) is better conditioned
    let big = ix >= 0x3fe5_9428;
    if big {
        if hx < 0 {
            x = -x;
            y = -y;
        }
        let z = PIO4 - x;
        let w = PIO4_LO - y;
        x = z + w;
        y = 0.0;
    }

    let z = x * x;
    let w = z * z;
    let r = horner::<NATIVE>(w, &[T[1], T[3], T[5], T[7], T[9], T[11]]);
    let v = z * horner::<NATIVE>(w, &[T[2], T[4], T[6], T[8], T[10], T[12]]);
    let s = z * x;
    let mut r = y + z * (s * (r + v) + y);
    r += T[0] * s;
    let w = x + r;

    if big {
        let v = if odd { -1.0 } else { 1.0 };
        let sign = (1 - ((hx >> 30) & 2)) as f64;
        return sign * (v - 2.0 * (x - (w * w / (w + v) - r)));
    }
    if !odd {
        return w;
    }

    // -1/w without cancellation: split w and the quotient into high parts
    let z = trunc_lo(w);
    let v = r - (z - x);
    let a = -1.0 / w;
    let t = trunc_lo(a);
    let s = 1.0 + t * z;
    t + a * (s + t * v)
}

pub(crate) fn sin<const NATIVE: bool>(x: f64) -> f64 {
    if hi_word(x) & 0x7fff_ffff <= 0x3fe9_21fb {
        return kernel_sin::<NATIVE>(x, 0.0, false);
    }
    if is_nan_or_inf(x) {
        return f64::NAN;
    }
    let r = rem_pio2(x);
    match r.quadrant() {
        0 => kernel_sin::<NATIVE>(r.hi, r.lo, true),
        1 => kernel_cos::<NATIVE>(r.hi, r.lo),
        2 => -kernel_sin::<NATIVE>(r.hi, r.lo, true),
        _ => -kernel_cos::<NATIVE>(r.hi, r.lo),
    }
}

pub(crate) fn cos<const NATIVE: bool>(x: f64) -> f64 {
    if hi_word(x) & 0x7fff_ffff <= 0x3fe9_21fb {
        return kernel_cos::<NATIVE>(x, 0.0);
    }
    if is_nan_or_inf(x) {
        return f64::NAN;
    }
    let r = rem_pio2(x);
    match r.quadrant() {
        0 => kernel_cos::<NATIVE>(r.hi, r.lo),
        1 => -kernel_sin::<NATIVE>(r.hi, r.lo, true),
        2 => -kernel_cos::<NATIVE>(r.hi, r.lo),
        _ => kernel_sin::<NATIVE>(r.hi, r.lo, true),
    }
}

/// `(sin x, cos x)` sharing one reduction.
pub(crate) fn sin_cos<const NATIVE: bool>(x: f64) -> (f64, f64) {
    if hi_word(x) & 0x7fff_ffff <= 0x3fe9_21fb {
        return (kernel_sin::<NATIVE>(x, 0.0, false), kernel_cos::<NATIVE>(x, 0.0));
    }
    if is_nan_or_inf(x) {
        return (f64::NAN, f64::NAN);
    }
    let r = rem_pio2(x);
    let s = kernel_sin::<NATIVE>(r.hi, r.lo, true);
    let c = kernel_cos::<NATIVE>(r.hi, r.lo);
    match r.quadrant() {
        0 => (s, c),
        1 => (c, -s),
        2 => (-s, -c),
        _ => (-c, s),
    }
}

pub(crate) fn tan<const NATIVE: bool>(x: f64) -> f64 {
    if hi_word(x) & 0x7fff_ffff <= 0x3fe9_21fb {
        return kernel_tan::<NATIVE>(x, 0.0, false);
    }
    if is_nan_or_inf(x) {
        return f64::NAN;
    }
    let r = rem_pio2(x);
    kernel_tan::<NATIVE>(r.hi, r.lo, r.n & 1 == 1)
}
