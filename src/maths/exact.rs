//! Integer arithmetic with defined overflow behaviour.
//!
//! The `*_exact` operations fail with [`MathError::Overflow`] when the
//! mathematical result does not fit, the `*_bounded` operations saturate, and
//! [`floor_div`]/[`floor_mod`] round towards negative infinity so that
//! `x == floor_div(x, y) * y + floor_mod(x, y)` for every non-zero `y`.

use super::error::{MathError, Result};

mod sealed {
    pub trait Sealed {}
    impl Sealed for i32 {}
    impl Sealed for i64 {}
}

/// Exact and bounded arithmetic for `i32` and `i64`.
pub trait Integer: Copy + Ord + sealed::Sealed {
    fn add_exact(self, other: Self) -> Result<Self>;
    fn subtract_exact(self, other: Self) -> Result<Self>;
    fn multiply_exact(self, other: Self) -> Result<Self>;
    fn negate_exact(self) -> Result<Self>;
    fn increment_exact(self) -> Result<Self>;
    fn decrement_exact(self) -> Result<Self>;
    fn abs_exact(self) -> Result<Self>;

    fn add_bounded(self, other: Self) -> Self;
    fn subtract_bounded(self, other: Self) -> Self;
    fn multiply_bounded(self, other: Self) -> Self;

    fn floor_div(self, divisor: Self) -> Result<Self>;
    fn floor_mod(self, divisor: Self) -> Result<Self>;

    /// Floor of the base-2 logarithm.
    fn log2(self) -> Result<u32>;
    fn is_power_of_two(self) -> bool;
}

macro_rules! integer_impl {
    ($t:ty) => {
        impl Integer for $t {
            #[inline]
            fn add_exact(self, other: Self) -> Result<Self> {
                self.checked_add(other)
                    .ok_or(MathError::Overflow { op: "add_exact" })
            }

            #[inline]
            fn subtract_exact(self, other: Self) -> Result<Self> {
                self.checked_sub(other)
                    .ok_or(MathError::Overflow { op: "subtract_exact" })
            }

            #[inline]
            fn multiply_exact(self, other: Self) -> Result<Self> {
                self.checked_mul(other)
                    .ok_or(MathError::Overflow { op: "multiply_exact" })
            }

            #[inline]
            fn negate_exact(self) -> Result<Self> {
                self.checked_neg()
                    .ok_or(MathError::Overflow { op: "negate_exact" })
            }

            #[inline]
            fn increment_exact(self) -> Result<Self> {
                self.checked_add(1)
                    .ok_or(MathError::Overflow { op: "increment_exact" })
            }

            #[inline]
            fn decrement_exact(self) -> Result<Self> {
                self.checked_sub(1)
                    .ok_or(MathError::Overflow { op: "decrement_exact" })
            }

            #[inline]
            fn abs_exact(self) -> Result<Self> {
                self.checked_abs()
                    .ok_or(MathError::Overflow { op: "abs_exact" })
            }

            #[inline]
            fn add_bounded(self, other: Self) -> Self {
                self.saturating_add(other)
            }

            #[inline]
            fn subtract_bounded(self, other: Self) -> Self {
                self.saturating_sub(other)
            }

            #[inline]
            fn multiply_bounded(self, other: Self) -> Self {
                self.saturating_mul(other)
            }

            #[inline]
            fn floor_div(self, divisor: Self) -> Result<Self> {
                if divisor == 0 {
                    return Err(MathError::DivisionByZero { op: "floor_div" });
                }
                let q = self
                    .checked_div(divisor)
                    .ok_or(MathError::Overflow { op: "floor_div" })?;
                if (self % divisor != 0) && ((self ^ divisor) < 0) {
                    Ok(q - 1)
                } else {
                    Ok(q)
                }
            }

            #[inline]
            fn floor_mod(self, divisor: Self) -> Result<Self> {
                if divisor == 0 {
                    return Err(MathError::DivisionByZero { op: "floor_mod" });
                }
                // MIN % -1 is zero, not an overflow
                let r = self.wrapping_rem(divisor);
                if r != 0 && ((r ^ divisor) < 0) {
                    Ok(r + divisor)
                } else {
                    Ok(r)
                }
            }

            #[inline]
            fn log2(self) -> Result<u32> {
                if self <= 0 {
                    return Err(MathError::NonPositive {
                        op: "log2",
                        value: self as i64,
                    });
                }
                Ok(self.ilog2())
            }

            #[inline]
            fn is_power_of_two(self) -> bool {
                self > 0 && (self & (self - 1)) == 0
            }
        }
    };
}

integer_impl!(i32);
integer_impl!(i64);

#[inline]
pub fn add_exact<T: Integer>(a: T, b: T) -> Result<T> {
    a.add_exact(b)
}

#[inline]
pub fn subtract_exact<T: Integer>(a: T, b: T) -> Result<T> {
    a.subtract_exact(b)
}

#[inline]
pub fn multiply_exact<T: Integer>(a: T, b: T) -> Result<T> {
    a.multiply_exact(b)
}

#[inline]
pub fn negate_exact<T: Integer>(a: T) -> Result<T> {
    a.negate_exact()
}

#[inline]
pub fn increment_exact<T: Integer>(a: T) -> Result<T> {
    a.increment_exact()
}

#[inline]
pub fn decrement_exact<T: Integer>(a: T) -> Result<T> {
    a.decrement_exact()
}

#[inline]
pub fn abs_exact<T: Integer>(a: T) -> Result<T> {
    a.abs_exact()
}

#[inline]
pub fn add_bounded<T: Integer>(a: T, b: T) -> T {
    a.add_bounded(b)
}

#[inline]
pub fn subtract_bounded<T: Integer>(a: T, b: T) -> T {
    a.subtract_bounded(b)
}

#[inline]
pub fn multiply_bounded<T: Integer>(a: T, b: T) -> T {
    a.multiply_bounded(b)
}

#[inline]
pub fn floor_div<T: Integer>(a: T, b: T) -> Result<T> {
    a.floor_div(b)
}

#[inline]
pub fn floor_mod<T: Integer>(a: T, b: T) -> Result<T> {
    a.floor_mod(b)
}

#[inline]
pub fn log2<T: Integer>(value: T) -> Result<u32> {
    value.log2()
}

#[inline]
pub fn is_power_of_two<T: Integer>(value: T) -> bool {
    value.is_power_of_two()
}

/// Narrows to `i32`, failing when the value does not fit.
#[inline]
pub fn to_int_exact(value: i64) -> Result<i32> {
    i32::try_from(value).map_err(|_| MathError::Overflow { op: "to_int_exact" })
}

/// Narrows to `i32`, saturating at the `i32` range.
#[inline]
pub fn to_int(value: i64) -> i32 {
    value.clamp(i32::MIN as i64, i32::MAX as i64) as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_ops_report_overflow() {
        assert_eq!(add_exact(i32::MAX, 1), Err(MathError::Overflow { op: "add_exact" }));
        assert_eq!(add_exact(i32::MAX - 1, 1), Ok(i32::MAX));
        assert!(subtract_exact(i64::MIN, 1).is_err());
        assert!(multiply_exact(1i64 << 32, 1i64 << 31).is_err());
        assert_eq!(multiply_exact(-46341i32, 46340), Ok(-2_147_441_940));
        assert!(negate_exact(i32::MIN).is_err());
        assert_eq!(negate_exact(i32::MAX), Ok(-i32::MAX));
        assert!(increment_exact(i64::MAX).is_err());
        assert!(decrement_exact(i32::MIN).is_err());
        assert!(abs_exact(i64::MIN).is_err());
        assert_eq!(abs_exact(-5i64), Ok(5));
    }

    #[test]
    fn bounded_ops_saturate() {
        assert_eq!(add_bounded(i32::MAX, 1), i32::MAX);
        assert_eq!(add_bounded(i64::MIN, -1), i64::MIN);
        assert_eq!(subtract_bounded(i32::MIN, 1), i32::MIN);
        assert_eq!(multiply_bounded(i64::MAX, -2), i64::MIN);
        assert_eq!(multiply_bounded(-3i32, 7), -21);
    }

    #[test]
    fn floor_division() {
        assert_eq!(floor_div(7, 2), Ok(3));
        assert_eq!(floor_div(-7, 2), Ok(-4));
        assert_eq!(floor_div(7, -2), Ok(-4));
        assert_eq!(floor_div(-7, -2), Ok(3));
        assert_eq!(floor_mod(-7, 2), Ok(1));
        assert_eq!(floor_mod(7, -2), Ok(-1));
        assert_eq!(floor_mod(-6i64, 3), Ok(0));
        assert_eq!(floor_mod(i32::MIN, -1), Ok(0));
        assert_eq!(floor_div(i32::MIN, -1), Err(MathError::Overflow { op: "floor_div" }));
        assert_eq!(floor_div(1, 0), Err(MathError::DivisionByZero { op: "floor_div" }));
        assert_eq!(floor_mod(1i64, 0), Err(MathError::DivisionByZero { op: "floor_mod" }));
    }

    #[test]
    fn narrowing() {
        assert_eq!(to_int_exact(i32::MAX as i64), Ok(i32::MAX));
        assert!(to_int_exact(i32::MAX as i64 + 1).is_err());
        assert_eq!(to_int(i64::MAX), i32::MAX);
        assert_eq!(to_int(i64::MIN), i32::MIN);
        assert_eq!(to_int(-12), -12);
    }

    #[test]
    fn integer_log2() {
        assert_eq!(log2(1024i32), Ok(10));
        assert_eq!(log2(1024i64), Ok(10));
        assert_eq!(log2(1023i32), Ok(9));
        assert_eq!(log2(i64::MAX), Ok(62));
        assert_eq!(log2(0i32), Err(MathError::NonPositive { op: "log2", value: 0 }));
        assert!(log2(-8i64).is_err());
        assert!(is_power_of_two(4096i64));
        assert!(!is_power_of_two(0i32));
        assert!(!is_power_of_two(i32::MIN));
    }

    use proptest::prelude::*;
    proptest! {
        #[test]
        fn ptest_floor_div_identity(x in any::<i64>(), y in any::<i64>()) {
            prop_assume!(y != 0 && !(x == i64::MIN && y == -1));
            let q = floor_div(x, y).unwrap();
            let r = floor_mod(x, y).unwrap();
            prop_assert_eq!(q.wrapping_mul(y).wrapping_add(r), x);
            prop_assert!(r == 0 || (r < 0) == (y < 0));
        }

        #[test]
        fn ptest_bounded_matches_wide(x in any::<i32>(), y in any::<i32>()) {
            let wide = (x as i64) * (y as i64);
            let clamped = wide.clamp(i32::MIN as i64, i32::MAX as i64);
            prop_assert_eq!(multiply_bounded(x, y) as i64, clamped);
            let exact = multiply_exact(x, y).ok().map(i64::from);
            prop_assert_eq!(exact, i32::try_from(wide).ok().map(i64::from));
        }
    }
}
