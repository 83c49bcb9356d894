//! Shared helpers for the integration tests: ulp distance, the tolerance
//! policy and seeded input generators.

#![allow(dead_code)]

use brisk_math::FloatBits;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub const SEED: u64 = 0x00b5_15c0_ffee;

pub fn ulp_error(actual: f64, expected: f64) -> f64 {
    let diff = (actual - expected).abs();
    if diff == 0.0 {
        return 0.0;
    }
    let ulp = expected.ulp();
    if !ulp.is_finite() {
        return f64::INFINITY;
    }
    diff / ulp
}

/// Absolute and/or relative bound. A value passes when it satisfies either
/// bound that is set; with neither set only an exact match passes.
#[derive(Debug, Clone, Copy, Default)]
pub struct Tolerance {
    pub abs: Option<f64>,
    pub rel: Option<f64>,
}

impl Tolerance {
    pub const EXACT: Tolerance = Tolerance { abs: None, rel: None };

    pub fn abs(bound: f64) -> Self {
        Tolerance { abs: Some(bound), rel: None }
    }

    pub fn rel(bound: f64) -> Self {
        Tolerance { abs: None, rel: Some(bound) }
    }

    pub fn either(abs: f64, rel: f64) -> Self {
        Tolerance { abs: Some(abs), rel: Some(rel) }
    }

    pub fn accepts(&self, actual: f64, expected: f64) -> bool {
        if actual.is_nan() || expected.is_nan() {
            return actual.is_nan() && expected.is_nan();
        }
        if actual == expected {
            return true;
        }
        let diff = (actual - expected).abs();
        self.abs.is_some_and(|a| diff <= a) || self.rel.is_some_and(|r| diff <= r * expected.abs())
    }
}

pub fn assert_within(actual: f64, expected: f64, tol: Tolerance, context: &str) {
    assert!(
        tol.accepts(actual, expected),
        "{context}: expected {expected:e}, got {actual:e} ({tol:?})"
    );
}

pub fn assert_ulps(actual: f64, expected: f64, max_ulps: f64, context: &str) {
    if actual.is_nan() && expected.is_nan() {
        return;
    }
    if actual.is_infinite() || expected.is_infinite() {
        assert_eq!(actual, expected, "{context}");
        return;
    }
    let ulps = ulp_error(actual, expected);
    assert!(ulps <= max_ulps, "{context}: expected {expected:e}, got {actual:e} (ulps={ulps})");
}

pub fn rng() -> StdRng {
    StdRng::seed_from_u64(SEED)
}

pub fn uniform(rng: &mut StdRng, lo: f64, hi: f64, n: usize) -> Vec<f64> {
    (0..n).map(|_| rng.random_range(lo..hi)).collect()
}

/// Finite values spread over the whole exponent range, both signs.
pub fn any_finite(rng: &mut StdRng, n: usize) -> Vec<f64> {
    (0..n)
        .map(|_| {
            let exp: u64 = rng.random_range(1..0x7ff);
            let mant: u64 = rng.random::<u64>() & 0x000f_ffff_ffff_ffff;
            let sign: u64 = rng.random::<u64>() & (1 << 63);
            f64::from_bits(sign | (exp << 52) | mant)
        })
        .collect()
}

/// `e^u` for `u` uniform in `[lo, hi)`: positive values spread by magnitude.
pub fn log_uniform(rng: &mut StdRng, lo: f64, hi: f64, n: usize) -> Vec<f64> {
    (0..n).map(|_| rng.random_range(lo..hi).exp()).collect()
}
