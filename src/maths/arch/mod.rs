// Native FMA and square root. Callers only reach `fma_hw` when `HAS_FMA` is set.

#[cfg(target_arch = "aarch64")]
mod aarch64;
#[cfg(target_arch = "x86_64")]
mod x86;

#[cfg(target_arch = "aarch64")]
pub(crate) use aarch64::{fma_hw, sqrt_hw};
#[cfg(target_arch = "x86_64")]
pub(crate) use x86::{fma_hw, sqrt_hw};

#[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
#[inline(always)]
pub(crate) fn fma_hw(a: f64, b: f64, c: f64) -> f64 {
    a * b + c
}

#[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
#[inline(always)]
pub(crate) fn sqrt_hw(x: f64) -> f64 {
    super::roots::sqrt_soft(x)
}
