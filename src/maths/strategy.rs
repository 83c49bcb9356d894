//! Run-time choice between the fast, strict and quick families.
//!
//! [`MathFamily`] is the contract every family implements: the same function
//! names, the same special values, and an [`Accuracy`] bound per function.
//! [`Strategy`] selects a family at run time and forwards to it.

use super::bits::FloatBits;
use super::{fast, quick, strict};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    Fast,
    Strict,
    Quick,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Function {
    Sin,
    Cos,
    Tan,
    Asin,
    Acos,
    Atan,
    Atan2,
    Sinh,
    Cosh,
    Tanh,
    Asinh,
    Acosh,
    Atanh,
    Exp,
    Expm1,
    Ln,
    Log10,
    Log1p,
    Pow,
    Sqrt,
    Cbrt,
    Hypot,
}

impl Function {
    pub const ALL: [Function; 22] = [
        Function::Sin,
        Function::Cos,
        Function::Tan,
        Function::Asin,
        Function::Acos,
        Function::Atan,
        Function::Atan2,
        Function::Sinh,
        Function::Cosh,
        Function::Tanh,
        Function::Asinh,
        Function::Acosh,
        Function::Atanh,
        Function::Exp,
        Function::Expm1,
        Function::Ln,
        Function::Log10,
        Function::Log1p,
        Function::Pow,
        Function::Sqrt,
        Function::Cbrt,
        Function::Hypot,
    ];

    pub fn arity(self) -> usize {
        match self {
            Function::Atan2 | Function::Pow | Function::Hypot => 2,
            _ => 1,
        }
    }

    /// Closed interval of first arguments with a real result. Outside it every
    /// family returns NaN.
    pub fn domain(self) -> (f64, f64) {
        match self {
            Function::Asin | Function::Acos | Function::Atanh => (-1.0, 1.0),
            Function::Acosh => (1.0, f64::INFINITY),
            Function::Ln | Function::Log10 | Function::Sqrt => (0.0, f64::INFINITY),
            Function::Log1p => (-1.0, f64::INFINITY),
            _ => (f64::NEG_INFINITY, f64::INFINITY),
        }
    }
}

/// Worst-case error of a function over its documented range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Accuracy {
    /// Units in the last place of the exact result.
    Ulps(f64),
    Relative(f64),
    Absolute(f64),
}

impl Accuracy {
    /// Whether `got` is within this bound of `want`. Two NaNs agree.
    pub fn admits(self, got: f64, want: f64) -> bool {
        if got.is_nan() || want.is_nan() {
            return got.is_nan() && want.is_nan();
        }
        if got == want {
            return true;
        }
        let err = (got - want).abs_bits();
        match self {
            Accuracy::Ulps(n) => err <= n * want.ulp(),
            Accuracy::Relative(r) => err <= r * want.abs_bits(),
            Accuracy::Absolute(a) => err <= a,
        }
    }
}

/// One family of implementations.
pub trait MathFamily {
    const STRATEGY: Strategy;

    fn accuracy(f: Function) -> Accuracy;

    fn sin(x: f64) -> f64;
    fn cos(x: f64) -> f64;
    fn tan(x: f64) -> f64;
    fn asin(x: f64) -> f64;
    fn acos(x: f64) -> f64;
    fn atan(x: f64) -> f64;
    fn atan2(y: f64, x: f64) -> f64;
    fn sinh(x: f64) -> f64;
    fn cosh(x: f64) -> f64;
    fn tanh(x: f64) -> f64;
    fn asinh(x: f64) -> f64;
    fn acosh(x: f64) -> f64;
    fn atanh(x: f64) -> f64;
    fn exp(x: f64) -> f64;
    fn expm1(x: f64) -> f64;
    fn ln(x: f64) -> f64;
    fn log10(x: f64) -> f64;
    fn log1p(x: f64) -> f64;
    fn pow(x: f64, y: f64) -> f64;
    fn sqrt(x: f64) -> f64;
    fn cbrt(x: f64) -> f64;
    fn hypot(x: f64, y: f64) -> f64;
}

pub struct Fast;
pub struct Strict;
/// Quick forms where they exist, [`Fast`] for everything else.
pub struct Quick;

/// Bounds shared by the fast and strict families.
fn accurate_bound(f: Function) -> Accuracy {
    match f {
        Function::Sinh
        | Function::Cosh
        | Function::Tanh
        | Function::Asinh
        | Function::Acosh
        | Function::Atanh => Accuracy::Ulps(2.0),
        Function::Sqrt => Accuracy::Ulps(0.5),
        _ => Accuracy::Ulps(1.0),
    }
}

macro_rules! forward {
    ($module:ident; $($name:ident),* ; $($name2:ident),*) => {
        $(
            #[inline(always)]
            fn $name(x: f64) -> f64 {
                $module::$name(x)
            }
        )*
        $(
            #[inline(always)]
            fn $name2(a: f64, b: f64) -> f64 {
                $module::$name2(a, b)
            }
        )*
    };
}

impl MathFamily for Fast {
    const STRATEGY: Strategy = Strategy::Fast;

    fn accuracy(f: Function) -> Accuracy {
        accurate_bound(f)
    }

    forward!(fast;
        sin, cos, tan, asin, acos, atan, sinh, cosh, tanh, asinh, acosh, atanh,
        exp, expm1, ln, log10, log1p, sqrt, cbrt;
        atan2, pow, hypot);
}

impl MathFamily for Strict {
    const STRATEGY: Strategy = Strategy::Strict;

    fn accuracy(f: Function) -> Accuracy {
        accurate_bound(f)
    }

    forward!(strict;
        sin, cos, tan, asin, acos, atan, sinh, cosh, tanh, asinh, acosh, atanh,
        exp, expm1, ln, log10, log1p, sqrt, cbrt;
        atan2, pow, hypot);
}

impl MathFamily for Quick {
    const STRATEGY: Strategy = Strategy::Quick;

    fn accuracy(f: Function) -> Accuracy {
        match f {
            Function::Sin | Function::Cos => Accuracy::Absolute(quick::SIN_COS_QUICK_MAX_ABS_ERROR),
            Function::Exp => Accuracy::Relative(quick::EXP_QUICK_MAX_REL_ERROR),
            Function::Ln => Accuracy::Relative(quick::LOG_QUICK_MAX_REL_ERROR),
            Function::Pow => Accuracy::Relative(quick::POW_QUICK_MAX_REL_ERROR),
            Function::Sqrt => Accuracy::Relative(quick::SQRT_QUICK_MAX_REL_ERROR),
            _ => accurate_bound(f),
        }
    }

    fn sin(x: f64) -> f64 {
        quick::sin_quick(x)
    }

    fn cos(x: f64) -> f64 {
        quick::cos_quick(x)
    }

    fn exp(x: f64) -> f64 {
        quick::exp_quick(x)
    }

    fn ln(x: f64) -> f64 {
        quick::log_quick(x)
    }

    fn pow(x: f64, y: f64) -> f64 {
        quick::pow_quick(x, y)
    }

    fn sqrt(x: f64) -> f64 {
        quick::sqrt_quick(x)
    }

    forward!(fast;
        tan, asin, acos, atan, sinh, cosh, tanh, asinh, acosh, atanh,
        expm1, log10, log1p, cbrt;
        atan2, hypot);
}

macro_rules! dispatch {
    ($($name:ident),* ; $($name2:ident),*) => {
        $(
            #[inline]
            pub fn $name(self, x: f64) -> f64 {
                match self {
                    Strategy::Fast => Fast::$name(x),
                    Strategy::Strict => Strict::$name(x),
                    Strategy::Quick => Quick::$name(x),
                }
            }
        )*
        $(
            #[inline]
            pub fn $name2(self, a: f64, b: f64) -> f64 {
                match self {
                    Strategy::Fast => Fast::$name2(a, b),
                    Strategy::Strict => Strict::$name2(a, b),
                    Strategy::Quick => Quick::$name2(a, b),
                }
            }
        )*
    };
}

impl Strategy {
    pub const ALL: [Strategy; 3] = [Strategy::Fast, Strategy::Strict, Strategy::Quick];

    dispatch!(
        sin, cos, tan, asin, acos, atan, sinh, cosh, tanh, asinh, acosh, atanh,
        exp, expm1, ln, log10, log1p, sqrt, cbrt;
        atan2, pow, hypot);

    pub fn accuracy(self, f: Function) -> Accuracy {
        match self {
            Strategy::Fast => Fast::accuracy(f),
            Strategy::Strict => Strict::accuracy(f),
            Strategy::Quick => Quick::accuracy(f),
        }
    }

    /// Evaluates `f` on `x`. Two-argument functions take `(x, y)` in order,
    /// so `Function::Atan2` computes `atan2(x, y)`.
    pub fn evaluate(self, f: Function, x: f64, y: f64) -> f64 {
        match f {
            Function::Sin => self.sin(x),
            Function::Cos => self.cos(x),
            Function::Tan => self.tan(x),
            Function::Asin => self.asin(x),
            Function::Acos => self.acos(x),
            Function::Atan => self.atan(x),
            Function::Atan2 => self.atan2(x, y),
            Function::Sinh => self.sinh(x),
            Function::Cosh => self.cosh(x),
            Function::Tanh => self.tanh(x),
            Function::Asinh => self.asinh(x),
            Function::Acosh => self.acosh(x),
            Function::Atanh => self.atanh(x),
            Function::Exp => self.exp(x),
            Function::Expm1 => self.expm1(x),
            Function::Ln => self.ln(x),
            Function::Log10 => self.log10(x),
            Function::Log1p => self.log1p(x),
            Function::Pow => self.pow(x, y),
            Function::Sqrt => self.sqrt(x),
            Function::Cbrt => self.cbrt(x),
            Function::Hypot => self.hypot(x, y),
        }
    }
}
