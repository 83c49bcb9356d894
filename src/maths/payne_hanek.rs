//! Heavy reduction modulo π/2 for huge finite arguments.
//!
//! The argument is split into 24-bit limbs and multiplied against the bits of
//! 2/π stored below, only keeping the window that influences the fractional
//! part. Work is bounded: at most a handful of extra limbs are pulled in when
//! the leading bits of the fraction cancel.

use super::bits::FloatBits;
use super::rounding::floor;
use super::{hi_word, lo_word, with_hi_lo};

/// 2/π in 24-bit limbs, most significant first (1584 bits).
const TWO_OVER_PI: [u32; 66] = [
    0xa2f983, 0x6e4e44, 0x1529fc, 0x2757d1, 0xf534dd, 0xc0db62, 0x95993c, 0x439041, 0xfe5163,
    0xabdebb, 0xc561b7, 0x246e3a, 0x424dd2, 0xe00649, 0x2eea09, 0xd1921c, 0xfe1deb, 0x1cb129,
    0xa73ee8, 0x8235f5, 0x2ebb44, 0x84e99c, 0x7026b4, 0x5f7e41, 0x3991d6, 0x398353, 0x39f49c,
    0x845f8b, 0xbdf928, 0x3b1ff8, 0x97ffde, 0x05980f, 0xef2f11, 0x8b5a0a, 0x6d1f6d, 0x367ecf,
    0x27cb09, 0xb74f46, 0x3f669e, 0x5fea2d, 0x7527ba, 0xc7ebe5, 0xf17b3d, 0x0739f7, 0x8a5292,
    0xea6bfb, 0x5fb11f, 0x8d5d08, 0x560330, 0x46fc7b, 0x6babf0, 0xcfbc20, 0x9af436, 0x1da9e3,
    0x91615e, 0xe61b08, 0x659985, 0x5f14a0, 0x68408d, 0xffd880, 0x4d7327, 0x310606, 0x1556ca,
    0x73a8c9, 0x60e27b, 0xc08c6b,
];

/// π/2 as a sum of 24-bit chunks.
const PIO2_LIMBS: [f64; 8] = [
    1.57079625129699707031e+00,
    7.54978941586159635335e-08,
    5.39030252995776476554e-15,
    3.28200341580791294123e-22,
    1.27065575308067607349e-29,
    1.22933308981111328932e-36,
    2.73370053816464559624e-44,
    2.16741683877804819444e-51,
];

const TWO24: f64 = 1.67772160000000000000e+07;
const TWON24: f64 = 5.96046447753906250000e-08;

/// Terms of 2/π kept beyond the argument, for a two-double result.
const EXTRA_TERMS: usize = 4;
const WORK: usize = 20;

/// Reduces a finite `x` with `|x| > 2^19·π/2`. Returns `(n mod 8, hi, lo)`
/// with `x ≈ n·π/2 + hi + lo` and the sign of `x` applied to all three.
pub(crate) fn rem_pio2_large(x: f64) -> (i32, f64, f64) {
    let hx = hi_word(x);
    let ix = hx & 0x7fff_ffff;

    // scale |x| into [2^23, 2^24) and cut into three 24-bit limbs
    let e0 = (ix >> 20) as i32 - 1046;
    let mut z = with_hi_lo(ix.wrapping_sub((e0 as u32) << 20), lo_word(x));
    let mut limbs = [0.0f64; 3];
    for limb in limbs.iter_mut().take(2) {
        *limb = (z as i32) as f64;
        z = (z - *limb) * TWO24;
    }
    limbs[2] = z;

    let mut len = 3;
    while len > 0 && limbs[len - 1] == 0.0 {
        len -= 1;
    }

    let (n, hi, lo) = reduce_limbs(&limbs[..len], e0);
    if hx >> 31 != 0 { (-n, -hi, -lo) } else { (n, hi, lo) }
}

/// Multiplies the limbs by the relevant window of 2/π and returns the octant
/// together with the fractional part times π/2 as a double-double.
fn reduce_limbs(limbs: &[f64], e0: i32) -> (i32, f64, f64) {
    let mut iq = [0i32; WORK];
    let mut f = [0.0f64; WORK];
    let mut fq = [0.0f64; WORK];
    let mut q = [0.0f64; WORK];

    let jk = EXTRA_TERMS;
    let jx = limbs.len() - 1;
    let jv = ((e0 - 3) / 24).max(0) as usize;
    let mut q0 = e0 - 24 * (jv as i32 + 1);

    // f[0..=jx+jk] = TWO_OVER_PI[jv-jx ..= jv+jk], zero-padded on the left
    for (i, slot) in f.iter_mut().enumerate().take(jx + jk + 1) {
        let idx = jv as isize - jx as isize + i as isize;
        *slot = if idx < 0 { 0.0 } else { TWO_OVER_PI[idx as usize] as f64 };
    }
    for (i, out) in q.iter_mut().enumerate().take(jk + 1) {
        *out = (0..=jx).map(|j| limbs[j] * f[jx + i - j]).sum();
    }

    let mut jz = jk;
    loop {
        // split q[] into 24-bit integers, least significant first
        let mut z = q[jz];
        for (i, j) in (1..=jz).rev().enumerate() {
            let fw = ((TWON24 * z) as i32) as f64;
            iq[i] = (z - TWO24 * fw) as i32;
            z = q[j - 1] + fw;
        }

        // integer part modulo 8
        z = z.scalb(q0);
        z -= 8.0 * floor(z * 0.125);
        let mut n = z as i32;
        z -= n as f64;

        let mut ih = 0;
        if q0 > 0 {
            let top = iq[jz - 1] >> (24 - q0);
            n += top;
            iq[jz - 1] -= top << (24 - q0);
            ih = iq[jz - 1] >> (23 - q0);
        } else if q0 == 0 {
            ih = iq[jz - 1] >> 23;
        } else if z >= 0.5 {
            ih = 2;
        }

        // fraction >= 0.5: take 1 - fraction and bump n
        if ih > 0 {
            n += 1;
            let mut borrow = false;
            for limb in iq.iter_mut().take(jz) {
                let v = *limb;
                if borrow {
                    *limb = 0xff_ffff - v;
                } else if v != 0 {
                    borrow = true;
                    *limb = 0x100_0000 - v;
                }
            }
            match q0 {
                1 => iq[jz - 1] &= 0x7f_ffff,
                2 => iq[jz - 1] &= 0x3f_ffff,
                _ => {}
            }
            if ih == 2 {
                z = 1.0 - z;
                if borrow {
                    z -= 1.0f64.scalb(q0);
                }
            }
        }

        // every computed bit of the fraction cancelled: pull in more of 2/π
        if z == 0.0 && iq[jk..jz].iter().all(|&v| v == 0) {
            let mut k = 1;
            while iq[jk - k] == 0 {
                k += 1;
            }
            log::trace!("payne-hanek: extending 2/pi window by {k} limbs at e0={e0}");
            for i in (jz + 1)..=(jz + k) {
                f[jx + i] = TWO_OVER_PI[jv + i] as f64;
                q[i] = (0..=jx).map(|j| limbs[j] * f[jx + i - j]).sum();
            }
            jz += k;
            continue;
        }

        // drop trailing zero limbs or append the leftover fraction
        if z == 0.0 {
            jz -= 1;
            q0 -= 24;
            while iq[jz] == 0 {
                jz -= 1;
                q0 -= 24;
            }
        } else {
            z = z.scalb(-q0);
            if z >= TWO24 {
                let fw = ((TWON24 * z) as i32) as f64;
                iq[jz] = (z - TWO24 * fw) as i32;
                jz += 1;
                q0 += 24;
                iq[jz] = fw as i32;
            } else {
                iq[jz] = z as i32;
            }
        }

        let mut scale = 1.0f64.scalb(q0);
        for i in (0..=jz).rev() {
            q[i] = scale * iq[i] as f64;
            scale *= TWON24;
        }

        // fraction times π/2
        for i in (0..=jz).rev() {
            let terms = jk.min(jz - i);
            fq[jz - i] = (0..=terms).map(|k| PIO2_LIMBS[k] * q[i + k]).sum();
        }

        // fold into two doubles
        let mut hi = 0.0;
        for &v in fq[..=jz].iter().rev() {
            hi += v;
        }
        let mut lo = fq[0] - hi;
        for &v in &fq[1..=jz] {
            lo += v;
        }
        return if ih == 0 { (n & 7, hi, lo) } else { (n & 7, -hi, -lo) };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_known_reductions() {
        // 1e22 = n·π/2 + r with r = -0.39432... sin(1e22) = -0.8522008497671888
        let (n, hi, lo) = rem_pio2_large(1e22);
        let s = match n & 3 {
            0 => (hi + lo).sin(),
            1 => (hi + lo).cos(),
            2 => -(hi + lo).sin(),
            _ => -(hi + lo).cos(),
        };
        assert!((s - (-0.8522008497671888)).abs() < 1e-15, "sin(1e22) via reduction = {s}");
    }

    #[test]
    fn sign_is_mirrored() {
        for &x in &[1e10, 3.0e15, 1e300, f64::MAX] {
            let (n, hi, lo) = rem_pio2_large(x);
            let (m, nhi, nlo) = rem_pio2_large(-x);
            assert_eq!(n, -m);
            assert_eq!(hi, -nhi);
            assert_eq!(lo, -nlo);
            assert!(hi.abs() <= core::f64::consts::FRAC_PI_4 + 1e-15);
        }
    }
}
