use core::arch::x86_64::{_mm_cvtsd_f64, _mm_fmadd_sd, _mm_set_sd, _mm_sqrt_sd};

#[target_feature(enable = "fma")]
fn fmadd_sd(a: f64, b: f64, c: f64) -> f64 {
    _mm_cvtsd_f64(_mm_fmadd_sd(_mm_set_sd(a), _mm_set_sd(b), _mm_set_sd(c)))
}

#[target_feature(enable = "sse2")]
fn sqrt_sd(x: f64) -> f64 {
    _mm_cvtsd_f64(_mm_sqrt_sd(_mm_set_sd(0.0), _mm_set_sd(x)))
}

#[inline(always)]
pub(crate) fn fma_hw(a: f64, b: f64, c: f64) -> f64 {
    if cfg!(target_feature = "fma") {
        // SAFETY: the build target enables FMA.
        unsafe { fmadd_sd(a, b, c) }
    } else {
        a * b + c
    }
}

#[inline(always)]
pub(crate) fn sqrt_hw(x: f64) -> f64 {
    // SAFETY: SSE2 is part of the x86_64 baseline.
    unsafe { sqrt_sd(x) }
}
