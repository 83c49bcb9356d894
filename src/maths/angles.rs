//! Degree, radian and degree-minute-second conversions.

use core::f64::consts::PI;

use super::reduce::normalize_minus_pi_pi;
use super::rounding::trunc;

const DEGREES_PER_RADIAN: f64 = 57.2957795130823208767981548141051703;
const RADIANS_PER_DEGREE: f64 = PI / 180.0;

/// An angle split into sign, whole degrees, whole minutes and seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dms {
    pub negative: bool,
    pub degrees: u32,
    pub minutes: u32,
    pub seconds: f64,
}

impl Dms {
    pub fn to_radians(&self) -> f64 {
        to_radians_dms(self.negative, self.degrees, self.minutes, self.seconds)
    }
}

#[inline]
pub fn to_degrees(radians: f64) -> f64 {
    radians * DEGREES_PER_RADIAN
}

#[inline]
pub fn to_radians(degrees: f64) -> f64 {
    degrees * RADIANS_PER_DEGREE
}

/// Splits `angle` (radians, first brought into `[-π, π]`) into degrees,
/// minutes and seconds. Minutes and seconds stay below 60; NaN and infinities
/// give zero degrees and minutes with NaN seconds.
pub fn to_dms(angle: f64) -> Dms {
    let a = normalize_minus_pi_pi(angle);
    if a.is_nan() {
        return Dms { negative: false, degrees: 0, minutes: 0, seconds: f64::NAN };
    }
    let negative = a < 0.0;
    let deg = to_degrees(if negative { -a } else { a });

    let whole = trunc(deg);
    let min = (deg - whole) * 60.0;
    let whole_min = trunc(min);
    let mut seconds = (min - whole_min) * 60.0;
    let mut degrees = whole as u32;
    let mut minutes = whole_min as u32;

    // products above can round up to a full unit
    if seconds >= 60.0 {
        seconds -= 60.0;
        minutes += 1;
    }
    if minutes >= 60 {
        minutes -= 60;
        degrees += 1;
    }
    Dms { negative, degrees, minutes, seconds }
}

/// Radians of `±(d + m/60 + s/3600)` degrees.
pub fn to_radians_dms(negative: bool, degrees: u32, minutes: u32, seconds: f64) -> f64 {
    let deg = degrees as f64 + minutes as f64 / 60.0 + seconds / 3600.0;
    let r = to_radians(deg);
    if negative { -r } else { r }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::f64::consts::{FRAC_PI_2, FRAC_PI_4};

    #[test]
    fn degrees_and_radians() {
        assert_eq!(to_degrees(PI), 180.0);
        assert_eq!(to_radians(180.0), PI);
        assert_eq!(to_degrees(-0.0).to_bits(), (-0.0f64).to_bits());
        assert!(to_degrees(f64::NAN).is_nan());
        assert_eq!(to_radians(f64::INFINITY), f64::INFINITY);
        for i in -720..720 {
            let d = i as f64 * 0.5;
            assert!((to_degrees(to_radians(d)) - d).abs() <= 1e-12, "{d}");
        }
    }

    #[test]
    fn dms_of_common_angles() {
        let right = to_dms(FRAC_PI_2);
        assert!(!right.negative);
        assert_eq!((right.degrees, right.minutes), (90, 0));
        assert!(right.seconds.abs() < 1e-9);

        let d = to_dms(-FRAC_PI_4);
        assert!(d.negative);
        assert_eq!(d.degrees, 45);

        // 12°30'36" = 12.51°
        let d = to_dms(to_radians(12.51));
        assert_eq!((d.degrees, d.minutes), (12, 30));
        assert!((d.seconds - 36.0).abs() < 1e-8);
    }

    #[test]
    fn dms_normalizes_first() {
        let d = to_dms(2.0 * PI + 0.5);
        let want = to_dms(0.5);
        assert_eq!((d.negative, d.degrees, d.minutes), (want.negative, want.degrees, want.minutes));
        assert!((d.seconds - want.seconds).abs() < 1e-6);
        assert!(to_dms(f64::INFINITY).seconds.is_nan());
    }

    #[test]
    fn dms_round_trip_keeps_fields_in_range() {
        for i in -3141..=3141 {
            let a = i as f64 * 1e-3;
            let d = to_dms(a);
            assert!(d.minutes < 60 && d.seconds >= 0.0 && d.seconds < 60.0, "{a}: {d:?}");
            assert!((d.to_radians() - a).abs() < 1e-12, "{a}: {d:?}");
        }
        assert_eq!(to_radians_dms(true, 180, 0, 0.0), -PI);
    }
}
