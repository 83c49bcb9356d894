//! Fast, strict and quick elementary functions for `no_std` targets.
//!
//! * [`fast`]: about 1 ulp, free to use hardware FMA and square root.
//! * [`strict`]: the same algorithms in plain IEEE-754 arithmetic, identical
//!   bits on every platform.
//! * [`quick`]: bit tricks and short polynomials with documented error bounds.
//!
//! [`Strategy`] picks one of the three at run time.

#![no_std]

#[cfg(test)]
extern crate std;

pub mod maths;

pub use maths::bits::FloatBits;
pub use maths::error::{MathError, Result};
pub use maths::strategy::{Accuracy, Function, MathFamily, Strategy};
pub use maths::{angles, exact, fast, quick, reduce, rounding, strict};
