//! Elementary functions in three families.
//!
//! * [`fast`]: about 1 ulp, may use hardware FMA and square root.
//! * [`strict`]: same algorithms, plain IEEE-754 arithmetic only, bit-reproducible.
//! * [`quick`]: shorter polynomials and bit tricks with documented error bounds.
//!
//! Range reduction lives in [`reduce`], bit-level helpers in [`bits`], integer
//! helpers with defined overflow behaviour in [`exact`].

#![allow(clippy::excessive_precision)]
#![allow(clippy::unreadable_literal)]
#![allow(clippy::approx_constant)]

mod arch;
mod exp;
mod hyperbolic;
mod inverse_trig;
mod log;
mod payne_hanek;
mod pow;
mod roots;
mod trig;

pub mod angles;
pub mod bits;
pub mod error;
pub mod exact;
pub mod fast;
pub mod quick;
pub mod reduce;
pub mod rounding;
pub mod strategy;
pub mod strict;

// ========= shared constants =========

pub(crate) const SIGN_MASK: u64 = 0x8000_0000_0000_0000;
pub(crate) const EXP_MASK: u64 = 0x7ff0_0000_0000_0000;
pub(crate) const MANT_MASK: u64 = 0x000f_ffff_ffff_ffff;

pub(crate) const LN2_HI: f64 = 6.93147180369123816490e-01; // 0x3fe62e42 fee00000
pub(crate) const LN2_LO: f64 = 1.90821492927058770002e-10; // 0x3dea39ef 35793c76
pub(crate) const TWO54: f64 = 1.80143985094819840000e+16; // 0x43500000 00000000

/// Hardware FMA is only emitted when the build target guarantees it.
pub(crate) const HAS_FMA: bool = cfg!(all(
    not(feature = "soft-fma"),
    any(
        all(target_arch = "x86_64", target_feature = "fma"),
        target_arch = "aarch64"
    )
));

// ========= word access =========

#[inline(always)]
pub(crate) fn hi_word(x: f64) -> u32 {
    (x.to_bits() >> 32) as u32
}

#[inline(always)]
pub(crate) fn lo_word(x: f64) -> u32 {
    x.to_bits() as u32
}

#[inline(always)]
pub(crate) fn with_hi_lo(hi: u32, lo: u32) -> f64 {
    f64::from_bits(((hi as u64) << 32) | lo as u64)
}

/// Replaces the high word of `x`.
#[inline(always)]
pub(crate) fn with_hi(x: f64, hi: u32) -> f64 {
    with_hi_lo(hi, lo_word(x))
}

/// Clears the low word of `x`, leaving 21 significant bits.
#[inline(always)]
pub(crate) fn trunc_lo(x: f64) -> f64 {
    f64::from_bits(x.to_bits() & 0xffff_ffff_0000_0000)
}

#[inline(always)]
pub(crate) fn fabs(x: f64) -> f64 {
    f64::from_bits(x.to_bits() & !SIGN_MASK)
}

#[inline(always)]
pub(crate) fn is_nan_or_inf(x: f64) -> bool {
    (x.to_bits() & EXP_MASK) == EXP_MASK
}

// ========= native / portable selection =========

/// `a * b + c`, fused when `NATIVE` and the target has FMA.
#[inline(always)]
pub(crate) fn mla<const NATIVE: bool>(a: f64, b: f64, c: f64) -> f64 {
    if NATIVE && HAS_FMA {
        arch::fma_hw(a, b, c)
    } else {
        a * b + c
    }
}

/// `c[0] + x·c[1] + ... + x^n·c[n]` in Horner form, one [`mla`] per step.
#[inline(always)]
pub(crate) fn horner<const NATIVE: bool>(x: f64, c: &[f64]) -> f64 {
    let Some((&last, rest)) = c.split_last() else {
        return 0.0;
    };
    rest.iter().rev().fold(last, |acc, &ci| mla::<NATIVE>(x, acc, ci))
}

/// Correctly rounded square root: the FPU instruction when `NATIVE`, the
/// integer algorithm otherwise. Both agree bit for bit.
#[inline(always)]
pub(crate) fn sqrt_sel<const NATIVE: bool>(x: f64) -> f64 {
    if NATIVE {
        arch::sqrt_hw(x)
    } else {
        roots::sqrt_soft(x)
    }
}
