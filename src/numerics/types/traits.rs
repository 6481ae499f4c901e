// src/numerics/types/traits.rs
// Scalar trait shared by the numerics types.

use core::fmt::{Debug, Display};
use core::str::FromStr;

/// FloatingPoint is the scalar a `Vector3` is built from.
///
/// Implemented for `f64` (the default everywhere) and `f32`. Besides the
/// arithmetic operators it carries what the vector needs for its length,
/// its text form and tolerance checks.
pub trait FloatingPoint:
Copy + PartialOrd + Debug + Display + FromStr
+ core::ops::Add<Output = Self>
+ core::ops::Sub<Output = Self>
+ core::ops::Mul<Output = Self>
+ core::ops::Neg<Output = Self>
{
    const ZERO: Self;
    const ONE: Self;

    /// `sqrt(self² + other²)` without intermediate overflow or underflow.
    fn hypot(self, other: Self) -> Self;

    /// Widen to `f64` for precision-independent comparisons.
    fn to_f64(self) -> f64;
}

impl FloatingPoint for f32 {
    const ZERO: Self = 0.0;
    const ONE: Self = 1.0;

    fn hypot(self, other: Self) -> Self { f32::hypot(self, other) }
    fn to_f64(self) -> f64 { f64::from(self) }
}

impl FloatingPoint for f64 {
    const ZERO: Self = 0.0;
    const ONE: Self = 1.0;

    fn hypot(self, other: Self) -> Self { f64::hypot(self, other) }
    fn to_f64(self) -> f64 { self }
}
