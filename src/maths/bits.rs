//! Exact bit-level operations on `f32` and `f64`.
//!
//! Everything here reproduces IEEE-754 semantics bit for bit. NaN inputs are
//! recognised by their exponent field, so any payload behaves the same.

mod sealed {
    pub trait Sealed {}
    impl Sealed for f32 {}
    impl Sealed for f64 {}
}

/// Bit-level float utilities shared by `f32` and `f64`.
///
/// Where `f64` also has inherent `next_up`/`next_down`, both agree; call the
/// trait versions as `FloatBits::next_up(x)`.
pub trait FloatBits: Copy + sealed::Sealed {
    /// Largest unbiased exponent of a finite value.
    const MAX_EXPONENT: i32;
    /// Smallest unbiased exponent of a normal value.
    const MIN_EXPONENT: i32;

    /// Unbiased exponent. NaN and infinities give `MAX_EXPONENT + 1`, zeros
    /// and subnormals give `MIN_EXPONENT - 1`.
    fn get_exponent(self) -> i32;

    /// Distance to the next value of larger magnitude. `ulp(±0)` is the
    /// smallest subnormal, `ulp(±inf)` is `+inf`.
    fn ulp(self) -> Self;

    /// Adjacent value towards `+inf`.
    fn next_up(self) -> Self;

    /// Adjacent value towards `-inf`.
    fn next_down(self) -> Self;

    /// Adjacent value towards `direction`; `direction` itself when both
    /// compare equal, NaN when either is NaN.
    fn next_after(self, direction: Self) -> Self;

    /// `self * 2^n` with a single rounding.
    fn scalb(self, n: i32) -> Self;

    /// Magnitude of `self` with the raw sign bit of `sign`.
    fn copy_sign(self, sign: Self) -> Self;

    /// `-1` when the sign bit is set, `1` otherwise (NaN included).
    fn sign_from_bit(self) -> i32;

    fn abs_bits(self) -> Self;

    /// `±1` for non-zero values, the argument itself for zeros and NaN.
    fn signum_bits(self) -> Self;

    fn is_nan_or_infinite(self) -> bool;
}

macro_rules! float_bits_impl {
    ($f:ty, $u:ty, $mant:expr, $bias:expr) => {
        impl FloatBits for $f {
            const MAX_EXPONENT: i32 = $bias;
            const MIN_EXPONENT: i32 = 1 - $bias;

            #[inline]
            fn get_exponent(self) -> i32 {
                let field = ((self.to_bits() >> $mant) & (2 * $bias + 1)) as i32;
                field - $bias
            }

            #[inline]
            fn ulp(self) -> Self {
                let exp = self.get_exponent();
                if exp == Self::MAX_EXPONENT + 1 {
                    return self.abs_bits();
                }
                if exp == Self::MIN_EXPONENT - 1 {
                    return <$f>::from_bits(1);
                }
                let e = exp - $mant;
                if e >= Self::MIN_EXPONENT {
                    <$f>::from_bits(((e + $bias) as $u) << $mant)
                } else {
                    <$f>::from_bits(1 << (e - Self::MIN_EXPONENT + $mant))
                }
            }

            #[inline]
            fn next_up(self) -> Self {
                let u = self.to_bits();
                if self.is_nan() || self == <$f>::INFINITY {
                    return self;
                }
                if self == 0.0 {
                    return <$f>::from_bits(1);
                }
                if u >> (<$u>::BITS - 1) == 0 {
                    <$f>::from_bits(u + 1)
                } else {
                    <$f>::from_bits(u - 1)
                }
            }

            #[inline]
            fn next_down(self) -> Self {
                let u = self.to_bits();
                if self.is_nan() || self == <$f>::NEG_INFINITY {
                    return self;
                }
                if self == 0.0 {
                    return -<$f>::from_bits(1);
                }
                if u >> (<$u>::BITS - 1) == 0 {
                    <$f>::from_bits(u - 1)
                } else {
                    <$f>::from_bits(u + 1)
                }
            }

            #[inline]
            fn next_after(self, direction: Self) -> Self {
                if self.is_nan() || direction.is_nan() {
                    return self + direction;
                }
                if self == direction {
                    return direction;
                }
                if direction > self {
                    FloatBits::next_up(self)
                } else {
                    FloatBits::next_down(self)
                }
            }

            fn scalb(self, mut n: i32) -> Self {
                const MAX_SCALE: $f = <$f>::from_bits(((2 * $bias) as $u) << $mant);
                // 2^(MIN_EXPONENT + mantissa bits + 1): stays normal, keeps one rounding.
                const MIN_SCALE: $f = <$f>::from_bits((($mant + 2) as $u) << $mant);
                const MIN_STEP: i32 = ($bias - 1) - ($mant + 1);

                let mut y = self;
                if n > $bias {
                    y *= MAX_SCALE;
                    n -= $bias;
                    if n > $bias {
                        y *= MAX_SCALE;
                        n -= $bias;
                        if n > $bias {
                            n = $bias;
                        }
                    }
                } else if n < Self::MIN_EXPONENT {
                    y *= MIN_SCALE;
                    n += MIN_STEP;
                    if n < Self::MIN_EXPONENT {
                        y *= MIN_SCALE;
                        n += MIN_STEP;
                        if n < Self::MIN_EXPONENT {
                            n = Self::MIN_EXPONENT;
                        }
                    }
                }
                y * <$f>::from_bits(((n + $bias) as $u) << $mant)
            }

            #[inline]
            fn copy_sign(self, sign: Self) -> Self {
                const SIGN: $u = 1 << (<$u>::BITS - 1);
                <$f>::from_bits((self.to_bits() & !SIGN) | (sign.to_bits() & SIGN))
            }

            #[inline]
            fn sign_from_bit(self) -> i32 {
                if self.to_bits() >> (<$u>::BITS - 1) == 0 { 1 } else { -1 }
            }

            #[inline]
            fn abs_bits(self) -> Self {
                const SIGN: $u = 1 << (<$u>::BITS - 1);
                <$f>::from_bits(self.to_bits() & !SIGN)
            }

            #[inline]
            fn signum_bits(self) -> Self {
                if self.is_nan() || self == 0.0 {
                    self
                } else {
                    (1.0 as $f).copy_sign(self)
                }
            }

            #[inline]
            fn is_nan_or_infinite(self) -> bool {
                self.get_exponent() == Self::MAX_EXPONENT + 1
            }
        }
    };
}

float_bits_impl!(f64, u64, 52, 1023);
float_bits_impl!(f32, u32, 23, 127);
