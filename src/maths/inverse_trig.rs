//! asin, acos, atan, atan2.

use super::bits::FloatBits;
use super::{fabs, hi_word, horner, lo_word, mla, sqrt_sel, trunc_lo};

const PIO2_HI: f64 = 1.57079632679489655800e+00; // 0x3FF921FB 54442D18
const PIO2_LO: f64 = 6.12323399573676603587e-17; // 0x3C91A626 33145C07
const PIO4_HI: f64 = 7.85398163397448278999e-01; // 0x3FE921FB 54442D18
const PI: f64 = core::f64::consts::PI;
const PI_LO: f64 = 1.2246467991473532072e-16; // 0x3CA1A626 33145C07

// asin(x) = x + x·x²·R(x²) on [-0.5, 0.5], R = P/Q
const P_S0: f64 = 1.66666666666666657415e-01;
const P_S1: f64 = -3.25565818622400915405e-01;
const P_S2: f64 = 2.01212532134862925881e-01;
const P_S3: f64 = -4.00555345006794114027e-02;
const P_S4: f64 = 7.91534994289814532176e-04;
const P_S5: f64 = 3.47933107596021167570e-05;
const Q_S1: f64 = -2.40339491173441421878e+00;
const Q_S2: f64 = 2.02094576023350569471e+00;
const Q_S3: f64 = -6.88283971605453293030e-01;
const Q_S4: f64 = 7.70381505559019352791e-02;

#[inline(always)]
fn ratio<const NATIVE: bool>(z: f64) -> f64 {
    let p = z * horner::<NATIVE>(z, &[P_S0, P_S1, P_S2, P_S3, P_S4, P_S5]);
    let q = horner::<NATIVE>(z, &[1.0, Q_S1, Q_S2, Q_S3, Q_S4]);
    p / q
}

pub(crate) fn asin<const NATIVE: bool>(x: f64) -> f64 {
    let hx = hi_word(x);
    let ix = hx & 0x7fff_ffff;

    if ix >= 0x3ff0_0000 {
        if (ix - 0x3ff0_0000) | lo_word(x) == 0 {
            // ±π/2 rounded
            return x * PIO2_HI + x * PIO2_LO;
        }
        return f64::NAN;
    }
    if ix < 0x3fe0_0000 {
        // |x| < 2^-26
        if ix < 0x3e50_0000 {
            return x;
        }
        return x + x * ratio::<NATIVE>(x * x);
    }

    // asin(x) = π/2 - 2·asin(sqrt((1-|x|)/2))
    let z = (1.0 - fabs(x)) * 0.5;
    let s = sqrt_sel::<NATIVE>(z);
    let r = ratio::<NATIVE>(z);
    let t = if ix >= 0x3fef_3333 {
        // |x| > 0.975
        PIO2_HI - (2.0 * (s + s * r) - PIO2_LO)
    } else {
        let f = trunc_lo(s);
        let c = (z - f * f) / (s + f);
        let p = 2.0 * s * r - (PIO2_LO - 2.0 * c);
        let q = PIO4_HI - 2.0 * f;
        PIO4_HI - (p - q)
    };
    if hx >> 31 != 0 { -t } else { t }
}

pub(crate) fn acos<const NATIVE: bool>(x: f64) -> f64 {
    let hx = hi_word(x);
    let ix = hx & 0x7fff_ffff;

    if ix >= 0x3ff0_0000 {
        if (ix - 0x3ff0_0000) | lo_word(x) == 0 {
            return if hx >> 31 != 0 { PI + 2.0 * PIO2_LO } else { 0.0 };
        }
        return f64::NAN;
    }
    if ix < 0x3fe0_0000 {
        // |x| < 2^-57
        if ix <= 0x3c60_0000 {
            return PIO2_HI + PIO2_LO;
        }
        return PIO2_HI - (x - (PIO2_LO - x * ratio::<NATIVE>(x * x)));
    }

    if hx >> 31 != 0 {
        // acos(x) = π - 2·asin(sqrt((1+x)/2))
        let z = (1.0 + x) * 0.5;
        let s = sqrt_sel::<NATIVE>(z);
        let w = ratio::<NATIVE>(z) * s - PIO2_LO;
        return 2.0 * (PIO2_HI - (s + w));
    }

    // acos(x) = 2·asin(sqrt((1-x)/2)), with sqrt split for an exact square
    let z = (1.0 - x) * 0.5;
    let s = sqrt_sel::<NATIVE>(z);
    let df = trunc_lo(s);
    let c = (z - df * df) / (s + df);
    let w = ratio::<NATIVE>(z) * s + c;
    2.0 * (df + w)
}

/// [`asin`] with the argument clamped to `[-1, 1]`; NaN still gives NaN.
pub(crate) fn asin_in_range<const NATIVE: bool>(x: f64) -> f64 {
    asin::<NATIVE>(x.clamp(-1.0, 1.0))
}

pub(crate) fn acos_in_range<const NATIVE: bool>(x: f64) -> f64 {
    acos::<NATIVE>(x.clamp(-1.0, 1.0))
}

// atan of the breakpoints 0.5, 1, 1.5, ∞ as double-doubles
const ATAN_HI: [f64; 4] = [
    4.63647609000806093515e-01,
    7.85398163397448278999e-01,
    9.82793723247329054082e-01,
    1.57079632679489655800e+00,
];
const ATAN_LO: [f64; 4] = [
    2.26987774529616870924e-17,
    3.06161699786838301793e-17,
    1.39033110312309984516e-17,
    6.12323399573676603587e-17,
];

const AT: [f64; 11] = [
    3.33333333333329318027e-01,
    -1.99999999998764832476e-01,
    1.42857142725034663711e-01,
    -1.11111104054623557880e-01,
    9.09088713343650656196e-02,
    -7.69187620504482999495e-02,
    6.66107313738753120669e-02,
    -5.83357013379057348645e-02,
    4.97687799461593236017e-02,
    -3.65315727442169155270e-02,
    1.62858201153657823623e-02,
];

pub(crate) fn atan<const NATIVE: bool>(x: f64) -> f64 {
    let hx = hi_word(x) as i32;
    let ix = hx & 0x7fff_ffff;

    // |x| >= 2^66
    if ix >= 0x4410_0000 {
        if x.is_nan() {
            return x + x;
        }
        let t = ATAN_HI[3] + ATAN_LO[3];
        return if hx > 0 { t } else { -t };
    }
    // |x| < 2^-27
    if ix < 0x3e40_0000 {
        return x;
    }

    let mut ax = fabs(x);
    let id = if ix < 0x3fdc_0000 {
        None
    } else if ix < 0x3fe6_0000 {
        // 7/16 <= |x| < 11/16
        ax = (2.0 * ax - 1.0) / (2.0 + ax);
        Some(0)
    } else if ix < 0x3ff3_0000 {
        ax = (ax - 1.0) / (ax + 1.0);
        Some(1)
    } else if ix < 0x4003_8000 {
        // |x| < 39/16
        ax = (ax - 1.5) / mla::<NATIVE>(1.5, ax, 1.0);
        Some(2)
    } else {
        ax = -1.0 / ax;
        Some(3)
    };

    // odd and even coefficients in parallel
    let z = ax * ax;
    let w = z * z;
    let s1 = z * horner::<NATIVE>(w, &[AT[0], AT[2], AT[4], AT[6], AT[8], AT[10]]);
    let s2 = w * horner::<NATIVE>(w, &[AT[1], AT[3], AT[5], AT[7], AT[9]]);

    let r = match id {
        None => ax - ax * (s1 + s2),
        Some(i) => ATAN_HI[i] - ((ax * (s1 + s2) - ATAN_LO[i]) - ax),
    };
    if hx < 0 { -r } else { r }
}

/// Angle of the point `(x, y)` in `[-π, π]`, with the C99 signed-zero and
/// infinity conventions.
pub(crate) fn atan2<const NATIVE: bool>(y: f64, x: f64) -> f64 {
    if x.is_nan() || y.is_nan() {
        return x + y;
    }
    let x_neg = x.is_sign_negative();
    let y_neg = y.is_sign_negative();
    let signed = |v: f64| if y_neg { -v } else { v };

    if x.is_infinite() {
        if y.is_infinite() {
            return signed(if x_neg { 3.0 * PIO4_HI } else { PIO4_HI });
        }
        return if x_neg { signed(PI) } else { 0.0f64.copy_sign(y) };
    }
    if y.is_infinite() {
        return signed(PIO2_HI);
    }
    if y == 0.0 {
        return if x_neg { signed(PI) } else { y };
    }
    if x == 0.0 {
        return signed(PIO2_HI);
    }
    if x == 1.0 {
        return atan::<NATIVE>(y);
    }

    let (ax, ay) = (fabs(x), fabs(y));
    let ex = hi_word(ax) >> 20;
    let ey = hi_word(ay) >> 20;

    // |y/x| > 2^60 or below 2^-60 with x < 0
    let z = if ey > ex + 60 {
        PIO2_HI + 0.5 * PIO2_LO
    } else if x_neg && ex > ey + 60 {
        0.0
    } else {
        atan::<NATIVE>(ay / ax)
    };

    match (x_neg, y_neg) {
        (false, false) => z,
        (false, true) => -z,
        (true, false) => PI - (z - PI_LO),
        (true, true) => (z - PI_LO) - PI,
    }
}
