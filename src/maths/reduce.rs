//! Range reduction and angle normalization.
//!
//! [`rem_pio2`] is the entry point of every accurate trigonometric function.
//! Arguments up to `2^19·π/2` use Cody–Waite reduction with up to three
//! correction terms; larger ones go through the Payne–Hanek reduction, which is
//! slower but keeps full accuracy up to `f64::MAX`.
//!
//! The `normalize_*` functions return an argument already inside their range
//! unchanged, bit for bit, and clamp everything else into the closed range.

use core::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI, TAU};

use super::payne_hanek::rem_pio2_large;
use super::rounding::{floor, rint};
use super::{fabs, hi_word, is_nan_or_inf};

const HALF: f64 = 5.00000000000000000000e-01;
const INVPIO2: f64 = 6.36619772367581382433e-01; // 0x3FE45F30 6DC9C883
const INV_PI: f64 = 3.18309886183790691216e-01; // 0x3FD45F30 6DC9C883
const INV_TWO_PI: f64 = 1.59154943091895345608e-01; // 0x3FC45F30 6DC9C883

pub(crate) const PIO2_1: f64 = 1.57079632673412561417e+00; // 0x3FF921FB 54400000
pub(crate) const PIO2_1T: f64 = 6.07710050650619224932e-11; // 0x3DD0B461 1A626331
const PIO2_2: f64 = 6.07710050630396597660e-11; // 0x3DD0B461 1A600000
const PIO2_2T: f64 = 2.02226624879595063154e-21; // 0x3BA3198A 2E037073
const PIO2_3: f64 = 2.02226624871116645580e-21; // 0x3BA3198A 2E000000
const PIO2_3T: f64 = 8.47842766036889956997e-32; // 0x397B839A 252049C1

/// π/2 as a double-double.
const PIO2_HI: f64 = FRAC_PI_2;
const PIO2_LO: f64 = 6.12323399573676603587e-17; // 0x3C91A626 33145C07

/// Largest magnitude handled by Cody–Waite reduction: `2^19·π/2`.
pub const MEDIUM_REDUCTION_MAX: f64 = 823549.6561538468;

/// Largest magnitude for which the `_fast` normalizers stay accurate.
pub const FAST_NORMALIZE_MAX_ARG: f64 = 3294198.6246153875; // 2^20·π

/// High words of n·π/2 for n = 1..=32, used to detect cancellation.
const NPIO2_HW: [u32; 32] = [
    0x3ff921fb, 0x400921fb, 0x4012d97c, 0x401921fb, 0x401f6a7a, 0x4022d97c, 0x4025fdbb,
    0x402921fb, 0x402c463a, 0x402f6a7a, 0x4031475c, 0x4032d97c, 0x40346b9c, 0x4035fdbb,
    0x40378fdb, 0x403921fb, 0x403ab41b, 0x403c463a, 0x403dd85a, 0x403f6a7a, 0x40407e4c,
    0x4041475c, 0x4042106c, 0x4042d97c, 0x4043a28c, 0x40446b9c, 0x404534ac, 0x4045fdbb,
    0x4046c6cb, 0x40478fdb, 0x404858eb, 0x404921fb,
];

/// An argument reduced modulo π/2: `x ≈ n·π/2 + hi + lo`.
///
/// `hi + lo` lies in about `[-π/4, π/4]` and `lo` is below half an ulp of
/// `hi`. For arguments past [`MEDIUM_REDUCTION_MAX`] only `n mod 8` is kept.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReducedArg {
    pub n: i32,
    pub hi: f64,
    pub lo: f64,
}

impl ReducedArg {
    /// Quadrant in `0..4`.
    #[inline]
    pub fn quadrant(&self) -> u32 {
        (self.n & 3) as u32
    }

    /// The reduced value rounded to one double.
    #[inline]
    pub fn value(&self) -> f64 {
        self.hi + self.lo
    }
}

/// Reduces `x` modulo π/2. NaN and infinities give `n = 0` with NaN parts.
pub fn rem_pio2(x: f64) -> ReducedArg {
    let hx = hi_word(x) as i32;
    let ix = (hx & 0x7fff_ffff) as u32;

    // |x| <= π/4
    if ix <= 0x3fe9_21fb {
        return ReducedArg { n: 0, hi: x, lo: 0.0 };
    }

    // |x| < 3π/4: n = ±1
    if ix < 0x4002_d97c {
        let (n, hi, lo) = reduce_one(fabs(x), ix);
        return if hx > 0 {
            ReducedArg { n, hi, lo }
        } else {
            ReducedArg { n: -n, hi: -hi, lo: -lo }
        };
    }

    if ix <= 0x4139_21fb {
        let (n, hi, lo) = reduce_medium(fabs(x), ix);
        return if hx < 0 {
            ReducedArg { n: -n, hi: -hi, lo: -lo }
        } else {
            ReducedArg { n, hi, lo }
        };
    }

    if ix >= 0x7ff0_0000 {
        return ReducedArg { n: 0, hi: f64::NAN, lo: f64::NAN };
    }

    log::trace!("rem_pio2: heavy reduction for {x:e}");
    let (n, hi, lo) = rem_pio2_large(x);
    ReducedArg { n, hi, lo }
}

#[inline(always)]
fn reduce_one(t: f64, ix: u32) -> (i32, f64, f64) {
    let z = t - PIO2_1;
    if ix != 0x3ff9_21fb {
        let y0 = z - PIO2_1T;
        (1, y0, (z - y0) - PIO2_1T)
    } else {
        // t is close to π/2: 33 more bits of π/2
        let z = z - PIO2_2;
        let y0 = z - PIO2_2T;
        (1, y0, (z - y0) - PIO2_2T)
    }
}

#[inline(always)]
fn reduce_medium(t: f64, ix: u32) -> (i32, f64, f64) {
    let n = (t * INVPIO2 + HALF) as i32;
    let fnn = n as f64;

    // fnn·PIO2_1 is exact; the first round is good to 85 bits
    let mut r = t - fnn * PIO2_1;
    let mut w = fnn * PIO2_1T;
    let mut y0 = r - w;

    if n >= 32 || ix == NPIO2_HW[(n - 1) as usize] {
        let j = (ix >> 20) as i32;
        let lost = |y: f64| j - ((hi_word(y) >> 20) & 0x7ff) as i32;
        if lost(y0) > 16 {
            let t = r;
            w = fnn * PIO2_2;
            r = t - w;
            w = fnn * PIO2_2T - ((t - r) - w);
            y0 = r - w;
            if lost(y0) > 49 {
                let t = r;
                w = fnn * PIO2_3;
                r = t - w;
                w = fnn * PIO2_3T - ((t - r) - w);
                y0 = r - w;
            }
        }
    }
    (n, y0, (r - y0) - w)
}

// ========= remainders =========

/// `hi + lo + k·π/2` as a double-double, for small integer `k` with
/// `|k·π/2| >= |hi|`.
#[inline(always)]
fn add_pio2_multiple(k: f64, hi: f64, lo: f64) -> (f64, f64) {
    let s = k * PIO2_HI + hi;
    let e = (k * PIO2_HI - s) + hi;
    (s, e + (k * PIO2_LO + lo))
}

/// Remainder of `x` modulo 2π as a double-double in `[-π, π]`.
fn rem_two_pi_dd(x: f64) -> (f64, f64) {
    let red = rem_pio2(x);
    let k = match red.quadrant() {
        0 => return (red.hi, red.lo),
        1 => 1.0,
        2 if red.value() > 0.0 => -2.0,
        2 => 2.0,
        _ => -1.0,
    };
    add_pio2_multiple(k, red.hi, red.lo)
}

/// Remainder of `x` modulo 2π in `[-π, π]`. NaN for NaN and infinities.
pub fn remainder_two_pi(x: f64) -> f64 {
    if is_nan_or_inf(x) {
        return f64::NAN;
    }
    let (hi, lo) = rem_two_pi_dd(x);
    (hi + lo).clamp(-PI, PI)
}

/// Remainder of `x` modulo π in `[-π/2, π/2]`. NaN for NaN and infinities.
pub fn remainder_pi(x: f64) -> f64 {
    if is_nan_or_inf(x) {
        return f64::NAN;
    }
    let red = rem_pio2(x);
    let r = red.value();
    if red.n & 1 == 0 {
        return r.clamp(-FRAC_PI_2, FRAC_PI_2);
    }
    let k = if r > 0.0 { -1.0 } else { 1.0 };
    let (hi, lo) = add_pio2_multiple(k, red.hi, red.lo);
    (hi + lo).clamp(-FRAC_PI_2, FRAC_PI_2)
}

/// Remainder of `x` modulo π/2 in `[-π/4, π/4]`. NaN for NaN and infinities.
pub fn remainder_pi_o2(x: f64) -> f64 {
    if is_nan_or_inf(x) {
        return f64::NAN;
    }
    rem_pio2(x).value().clamp(-FRAC_PI_4, FRAC_PI_4)
}

// ========= normalization =========

/// Equivalent angle in `[-π, π]`.
pub fn normalize_minus_pi_pi(x: f64) -> f64 {
    if (-PI..=PI).contains(&x) {
        return x;
    }
    remainder_two_pi(x)
}

/// Equivalent angle in `[0, 2π]`.
pub fn normalize_zero_two_pi(x: f64) -> f64 {
    if (0.0..=TAU).contains(&x) {
        return x;
    }
    if is_nan_or_inf(x) {
        return f64::NAN;
    }
    let (hi, lo) = rem_two_pi_dd(x);
    if hi + lo >= 0.0 {
        return (hi + lo).clamp(0.0, TAU);
    }
    let (hi, lo) = add_pio2_multiple(4.0, hi, lo);
    (hi + lo).clamp(0.0, TAU)
}

/// Equivalent angle modulo π in `[-π/2, π/2]`.
pub fn normalize_minus_half_pi_half_pi(x: f64) -> f64 {
    if (-FRAC_PI_2..=FRAC_PI_2).contains(&x) {
        return x;
    }
    remainder_pi(x)
}

// Two-term Cody–Waite: k·HI is exact while k < 2^20.
const TWO_PI_HI: f64 = 4.0 * PIO2_1;
const TWO_PI_LO: f64 = 4.0 * PIO2_1T;
const PI_HI: f64 = 2.0 * PIO2_1;
const PI_LO: f64 = 2.0 * PIO2_1T;

/// [`normalize_minus_pi_pi`] with a single reduction step. Absolute error
/// below `1e-12` for `|x| <= FAST_NORMALIZE_MAX_ARG`, in range but otherwise
/// unspecified beyond.
pub fn normalize_minus_pi_pi_fast(x: f64) -> f64 {
    if (-PI..=PI).contains(&x) {
        return x;
    }
    if is_nan_or_inf(x) {
        return f64::NAN;
    }
    let k = rint(x * INV_TWO_PI);
    ((x - k * TWO_PI_HI) - k * TWO_PI_LO).clamp(-PI, PI)
}

/// [`normalize_zero_two_pi`] with a single reduction step; same accuracy as
/// [`normalize_minus_pi_pi_fast`].
pub fn normalize_zero_two_pi_fast(x: f64) -> f64 {
    if (0.0..=TAU).contains(&x) {
        return x;
    }
    if is_nan_or_inf(x) {
        return f64::NAN;
    }
    let k = floor(x * INV_TWO_PI);
    let mut r = (x - k * TWO_PI_HI) - k * TWO_PI_LO;
    if r < 0.0 {
        r += TAU;
    }
    r.clamp(0.0, TAU)
}

/// [`normalize_minus_half_pi_half_pi`] with a single reduction step; same
/// accuracy as [`normalize_minus_pi_pi_fast`].
pub fn normalize_minus_half_pi_half_pi_fast(x: f64) -> f64 {
    if (-FRAC_PI_2..=FRAC_PI_2).contains(&x) {
        return x;
    }
    if is_nan_or_inf(x) {
        return f64::NAN;
    }
    let k = rint(x * INV_PI);
    ((x - k * PI_HI) - k * PI_LO).clamp(-FRAC_PI_2, FRAC_PI_2)
}
