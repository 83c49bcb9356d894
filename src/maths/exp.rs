//! exp, expm1 and exact powers of two.
//!
//! Both functions reduce `x = k·ln2 + r` with `|r| <= ln2/2` and evaluate a
//! rational approximation of `exp(r)` built from a degree-5 even polynomial.

use super::bits::FloatBits;
use super::{LN2_HI, LN2_LO, hi_word, horner, lo_word, mla, with_hi};

const HALF: [f64; 2] = [0.5, -0.5];
const TINY: f64 = 1.0e-300;
const O_THRESHOLD: f64 = 7.09782712893383973096e+02; // 0x40862E42 FEFA39EF
const U_THRESHOLD: f64 = -7.45133219101941108420e+02; // 0xc0874910 D52D3051
const INVLN2: f64 = 1.44269504088896338700e+00; // 0x3ff71547 652b82fe

const P1: f64 = 1.66666666666666019037e-01;
const P2: f64 = -2.77777777770155933842e-03;
const P3: f64 = 6.61375632143793436117e-05;
const P4: f64 = -1.65339022054652515390e-06;
const P5: f64 = 4.13813679705723846039e-08;

pub(crate) fn exp<const NATIVE: bool>(x: f64) -> f64 {
    let hx = hi_word(x);
    let sign = (hx >> 31) as usize;
    let ix = hx & 0x7fff_ffff;

    // |x| >= 709.78
    if ix >= 0x4086_2e42 {
        if ix >= 0x7ff0_0000 {
            if (ix & 0xfffff) | lo_word(x) != 0 {
                return x + x;
            }
            return if sign == 0 { x } else { 0.0 };
        }
        if x > O_THRESHOLD {
            return f64::INFINITY;
        }
        if x < U_THRESHOLD {
            return 0.0;
        }
    }

    let (k, hi, lo) = if ix > 0x3fd6_2e42 {
        if ix < 0x3ff0_a2b2 {
            // 0.5·ln2 < |x| < 1.5·ln2
            let s = if sign == 0 { 1.0 } else { -1.0 };
            (1 - 2 * sign as i32, x - s * LN2_HI, s * LN2_LO)
        } else {
            let k = (INVLN2 * x + HALF[sign]) as i32;
            let t = k as f64;
            // t·LN2_HI is exact
            (k, x - t * LN2_HI, t * LN2_LO)
        }
    } else if ix < 0x3e30_0000 {
        // |x| < 2^-28
        return 1.0 + x;
    } else {
        (0, x, 0.0)
    };

    let r = hi - lo;
    let t = r * r;
    let poly = horner::<NATIVE>(t, &[P1, P2, P3, P4, P5]);
    let c = r - t * poly;
    if k == 0 {
        return 1.0 - ((r * c) / (c - 2.0) - r);
    }
    let y = 1.0 - ((lo - (r * c) / (2.0 - c)) - hi);
    y.scalb(k)
}

const Q: [f64; 6] = [
    1.0,
    -3.33333333333331316428e-02, // 0xBFA11111 111110F4
    1.58730158725481460165e-03,  // 0x3F5A01A0 19FE5585
    -7.93650757867487942473e-05, // 0xBF14CE19 9EAADBB7
    4.00821782732936239552e-06,  // 0x3ED0CFCA 86E65239
    -2.01099218183624371326e-07, // 0xBE8AFDB7 6E09C32D
];

/// `exp(x) - 1`, accurate near zero.
pub(crate) fn expm1<const NATIVE: bool>(x: f64) -> f64 {
    let hx = hi_word(x);
    let negative = hx >> 31 != 0;
    let ix = hx & 0x7fff_ffff;

    // |x| >= 56·ln2
    if ix >= 0x4043_687a {
        if ix >= 0x7ff0_0000 {
            if (ix & 0xfffff) | lo_word(x) != 0 {
                return x + x;
            }
            return if negative { -1.0 } else { x };
        }
        if x > O_THRESHOLD {
            return f64::INFINITY;
        }
        if negative {
            return TINY - 1.0;
        }
    }

    let (k, r, c) = if ix > 0x3fd6_2e42 {
        let (k, hi, lo) = if ix < 0x3ff0_a2b2 {
            if negative { (-1, x + LN2_HI, -LN2_LO) } else { (1, x - LN2_HI, LN2_LO) }
        } else {
            let k = (INVLN2 * x + if negative { -0.5 } else { 0.5 }) as i32;
            let t = k as f64;
            (k, x - t * LN2_HI, t * LN2_LO)
        };
        let r = hi - lo;
        (k, r, (hi - r) - lo)
    } else if ix < 0x3c90_0000 {
        // |x| < 2^-54
        return x;
    } else {
        (0, x, 0.0)
    };

    let hfx = 0.5 * r;
    let hxs = r * hfx;
    let h2 = hxs * hxs;
    let h4 = h2 * h2;
    let r1 = mla::<NATIVE>(hxs, Q[1], Q[0]);
    let r2 = mla::<NATIVE>(hxs, Q[3], Q[2]);
    let r3 = mla::<NATIVE>(hxs, Q[5], Q[4]);
    let r1 = mla::<NATIVE>(h4, r3, mla::<NATIVE>(h2, r2, r1));
    let t = 3.0 - r1 * hfx;
    let e = hxs * ((r1 - t) / (6.0 - r * t));

    if k == 0 {
        return r - (r * e - hxs);
    }

    let e = (r * (e - c) - c) - hxs;
    match k {
        -1 => return 0.5 * (r - e) - 0.5,
        1 if r < -0.25 => return -2.0 * (e - (r + 0.5)),
        1 => return 1.0 + 2.0 * (r - e),
        _ => {}
    }

    let bump = |y: f64| with_hi(y, hi_word(y).wrapping_add((k as u32) << 20));
    if k <= -2 || k > 56 {
        // 2^k·(1 + r) - 1 with the -1 lost or negligible
        let y = 1.0 - (e - r);
        let y = if k == 1024 {
            y * 2.0 * f64::from_bits(0x7fe0_0000_0000_0000)
        } else {
            bump(y)
        };
        return y - 1.0;
    }
    if k < 20 {
        // 1 - 2^-k
        let t = f64::from_bits(((0x3ff0_0000 - (0x0020_0000 >> k)) as u64) << 32);
        return bump(t - (e - r));
    }
    // 2^-k
    let t = f64::from_bits(((0x3ff - k) as u64) << 52);
    bump((r - (e + t)) + 1.0)
}

/// `2^n` exactly: subnormal below -1022, zero below -1074, infinite above 1023.
pub(crate) fn two_pow(n: i32) -> f64 {
    if n > 1023 {
        f64::INFINITY
    } else if n >= -1022 {
        f64::from_bits(((n + 1023) as u64) << 52)
    } else if n >= -1074 {
        f64::from_bits(1u64 << (n + 1074))
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ulps(got: f64, want: f64) -> f64 {
        if got == want {
            return 0.0;
        }
        (got - want).abs() / want.ulp()
    }

    #[test]
    fn exp_within_two_ulps() {
        for i in -7400..7090 {
            let x = i as f64 * 0.1 + 0.013;
            let want = x.exp();
            assert!(ulps(exp::<false>(x), want) <= 2.0, "exp({x})");
            assert!(ulps(exp::<true>(x), want) <= 2.0, "exp({x})");
        }
        for &x in &[1e-20, -1e-20, 0.3, -0.3, 1.0, -1.0, 709.7, -708.4] {
            assert!(ulps(exp::<false>(x), x.exp()) <= 1.0, "exp({x})");
        }
    }

    #[test]
    fn exp_special_values() {
        assert_eq!(exp::<false>(0.0), 1.0);
        assert_eq!(exp::<false>(-0.0), 1.0);
        assert_eq!(exp::<false>(f64::INFINITY), f64::INFINITY);
        assert_eq!(exp::<false>(f64::NEG_INFINITY), 0.0);
        assert!(exp::<false>(f64::NAN).is_nan());
        assert_eq!(exp::<false>(709.79), f64::INFINITY);
        assert_eq!(exp::<false>(-745.2), 0.0);
        assert_eq!(exp::<false>(-745.1), f64::from_bits(1));
        let sub = exp::<false>(-740.0);
        assert!(sub > 0.0 && sub < f64::MIN_POSITIVE);
    }

    #[test]
    fn expm1_within_two_ulps() {
        for i in -4000..7090 {
            let x = i as f64 * 0.1 + 0.007;
            let want = x.exp_m1();
            assert!(ulps(expm1::<false>(x), want) <= 2.0, "expm1({x})");
            assert!(ulps(expm1::<true>(x), want) <= 2.0, "expm1({x})");
        }
        for i in 1..200 {
            let x = i as f64 * 1e-3 - 0.1;
            assert!(ulps(expm1::<false>(x), x.exp_m1()) <= 2.0, "expm1({x})");
        }
        assert_eq!(expm1::<false>(1e-300), 1e-300);
        assert_eq!(expm1::<false>(-0.0).to_bits(), (-0.0f64).to_bits());
        assert_eq!(expm1::<false>(-50.0), -1.0);
        assert_eq!(expm1::<false>(f64::NEG_INFINITY), -1.0);
        assert_eq!(expm1::<false>(710.0), f64::INFINITY);
        assert!(expm1::<false>(f64::NAN).is_nan());
    }

    #[test]
    fn powers_of_two_are_exact() {
        assert_eq!(two_pow(0), 1.0);
        assert_eq!(two_pow(10), 1024.0);
        assert_eq!(two_pow(-1), 0.5);
        assert_eq!(two_pow(1023), 2f64.powi(1023));
        assert_eq!(two_pow(1024), f64::INFINITY);
        assert_eq!(two_pow(-1022), f64::MIN_POSITIVE);
        assert_eq!(two_pow(-1074), f64::from_bits(1));
        assert_eq!(two_pow(-1075), 0.0);
        assert_eq!(two_pow(i32::MIN), 0.0);
    }
}
