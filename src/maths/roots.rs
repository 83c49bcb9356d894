//! Square root, cube root and Euclidean norms.

use super::bits::FloatBits;
use super::{MANT_MASK, fabs, hi_word, mla, sqrt_sel};

/// Correctly rounded square root with integer arithmetic only.
///
/// Agrees bit for bit with the IEEE-754 `sqrt` operation. `sqrt(-0) = -0`,
/// negative arguments give NaN.
pub(crate) fn sqrt_soft(x: f64) -> f64 {
    let u = x.to_bits();
    if x.is_nan() || x == 0.0 || x == f64::INFINITY {
        return x;
    }
    if u >> 63 != 0 {
        return f64::NAN;
    }

    let mut exp = ((u >> 52) & 0x7ff) as i32;
    let mut m = u & MANT_MASK;
    if exp == 0 {
        let shift = m.leading_zeros() - 11;
        m <<= shift;
        exp = 1 - shift as i32;
    } else {
        m |= 1 << 52;
    }

    // x = (m / 2^52)·2^e with e even, m in [2^52, 2^54)
    let mut e = exp - 1023;
    if e & 1 != 0 {
        m <<= 1;
        e -= 1;
    }

    // floor(sqrt(m·2^54)) lies in [2^53, 2^54): one guard bit past the result
    let n = (m as u128) << 54;
    let mut rem = n;
    let mut root: u128 = 0;
    let mut bit: u128 = 1 << 106;
    while bit != 0 {
        if rem >= root + bit {
            rem -= root + bit;
            root = (root >> 1) + bit;
        } else {
            root >>= 1;
        }
        bit >>= 2;
    }

    let mut q = (root >> 1) as u64;
    if root & 1 == 1 && (rem != 0 || q & 1 == 1) {
        q += 1;
    }
    // q carries the implicit bit; a carry out of it bumps the exponent
    f64::from_bits((((e / 2 + 1022) as u64) << 52) + q)
}

const B1: u32 = 715094163; // (1023 - 1023/3 - 0.03306235651)·2^20
const B2: u32 = 696219795; // (1023 - 1023/3 - 54/3 - 0.03306235651)·2^20

const P0: f64 = 1.87595182427177009643; // 0x3ffe03e6 0f61e692
const P1: f64 = -1.88497979543377169875; // 0xbffe28e0 92f02420
const P2: f64 = 1.621429720105354466140; // 0x3ff9f160 4a49d6c2
const P3: f64 = -0.758397934778766047437; // 0xbfe844cb bee751d9
const P4: f64 = 0.145996192886612446982; // 0x3fc2b000 d4e4edd7

/// Cube root: exponent division seed, a polynomial step to 23 bits, then one
/// Newton step from a 22-bit rounded estimate.
pub(crate) fn cbrt<const NATIVE: bool>(x: f64) -> f64 {
    let mut hx = hi_word(x) & 0x7fff_ffff;
    if hx >= 0x7ff0_0000 {
        return x + x;
    }

    let hseed = if hx < 0x0010_0000 {
        let scaled = x * f64::from_bits(0x4350_0000_0000_0000); // 2^54
        hx = hi_word(scaled) & 0x7fff_ffff;
        if hx == 0 {
            return x;
        }
        hx / 3 + B2
    } else {
        hx / 3 + B1
    };

    let sign = x.to_bits() & (1 << 63);
    let mut t = f64::from_bits(sign | ((hseed as u64) << 32));

    // |t - cbrt(x)| / cbrt(x) < 2^-23 after this
    let r = (t * t) * (t / x);
    let poly = mla::<NATIVE>(r, mla::<NATIVE>(r, P2, P1), P0);
    t *= poly + ((r * r) * r) * mla::<NATIVE>(r, P4, P3);

    // round to 22 bits away from zero so t*t is exact
    t = f64::from_bits((t.to_bits() + 0x8000_0000) & 0xffff_ffff_c000_0000);

    let s = t * t;
    let r = x / s;
    let w = t + t;
    let r = (r - t) / (w + r);
    t + t * r
}

const SPLIT: f64 = 134217729.0; // 2^27 + 1

/// `x²` as an exact double-double.
#[inline(always)]
fn square(x: f64) -> (f64, f64) {
    let xc = x * SPLIT;
    let xh = x - xc + xc;
    let xl = x - xh;
    let hi = x * x;
    (hi, xh * xh - hi + 2.0 * xh * xl + xl * xl)
}

/// `sqrt(x² + y²)` without undue overflow or underflow. An infinite argument
/// wins over NaN.
pub(crate) fn hypot<const NATIVE: bool>(x: f64, y: f64) -> f64 {
    let mut ux = fabs(x).to_bits();
    let mut uy = fabs(y).to_bits();
    if ux < uy {
        core::mem::swap(&mut ux, &mut uy);
    }
    let ex = (ux >> 52) as i32;
    let ey = (uy >> 52) as i32;
    let mut x = f64::from_bits(ux);
    let mut y = f64::from_bits(uy);

    // both non-finite: the smaller bit pattern is +inf unless both are NaN
    if ey == 0x7ff {
        return y;
    }
    if ex == 0x7ff || uy == 0 {
        return x;
    }
    if ex - ey > 64 {
        return x + y;
    }

    let mut z = 1.0;
    if ex > 0x3ff + 510 {
        z = f64::from_bits(0x6bb0_0000_0000_0000); // 2^700
        x *= f64::from_bits(0x1430_0000_0000_0000);
        y *= f64::from_bits(0x1430_0000_0000_0000);
    } else if ey < 0x3ff - 450 {
        z = f64::from_bits(0x1430_0000_0000_0000); // 2^-700
        x *= f64::from_bits(0x6bb0_0000_0000_0000);
        y *= f64::from_bits(0x6bb0_0000_0000_0000);
    }

    let (hx, lx) = square(x);
    let (hy, ly) = square(y);
    z * sqrt_sel::<NATIVE>(ly + lx + hy + hx)
}

/// `sqrt(x² + y² + z²)`, scaled by the exponent of the largest component.
pub(crate) fn hypot3<const NATIVE: bool>(x: f64, y: f64, z: f64) -> f64 {
    let (ax, ay, az) = (fabs(x), fabs(y), fabs(z));
    if ax == f64::INFINITY || ay == f64::INFINITY || az == f64::INFINITY {
        return f64::INFINITY;
    }
    if ax.is_nan() || ay.is_nan() || az.is_nan() {
        return f64::NAN;
    }

    let big = ax.max(ay).max(az);
    if big == 0.0 {
        return 0.0;
    }
    let e = big.get_exponent();
    let (sx, sy, sz) = (ax.scalb(-e), ay.scalb(-e), az.scalb(-e));

    // smallest terms first
    let (lo, mid, hi) = sort3(sx * sx, sy * sy, sz * sz);
    sqrt_sel::<NATIVE>((lo + mid) + hi).scalb(e)
}

#[inline(always)]
fn sort3(a: f64, b: f64, c: f64) -> (f64, f64, f64) {
    let (a, b) = if a <= b { (a, b) } else { (b, a) };
    let (b, c) = if b <= c { (b, c) } else { (c, b) };
    let (a, b) = if a <= b { (a, b) } else { (b, a) };
    (a, b, c)
}
