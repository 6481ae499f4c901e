// src/numerics/types/vector.rs
// Vector3 value type, double precision by default.
// Uses the FloatingPoint trait from super::traits.

use core::fmt;
use core::ops::{Add, Mul, Neg, Sub};
use serde::{Serialize, Deserialize};

use super::traits::FloatingPoint;
use crate::numerics::tolerance::Tolerance;

/// Vector3 is a 3D vector of three scalar components.
///
/// The scalar defaults to `f64`, so a bare `Vector3` in type position is the
/// double-precision vector. Values are never modified in place: every
/// operation takes its operands by value and returns a new result.
///
/// Scaling by a bare scalar (`v * 2.0`, `2.0 * v`) is implemented for `f32`
/// and `f64` separately, so when neither operand fixes the precision the
/// vector needs a type annotation:
///
/// ```rust
/// use geometry::Vector3;
///
/// let a: Vector3 = Vector3::new(1.0, 2.0, 3.0);
/// let big = a * 1e160;
/// assert!(big.length().is_finite());
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Vector3<T: FloatingPoint = f64> {
    pub x: T,
    pub y: T,
    pub z: T,
}

// Serialized as a plain (x, y, z) tuple.
impl<T> Serialize for Vector3<T>
where
    T: FloatingPoint + Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        (&self.x, &self.y, &self.z).serialize(serializer)
    }
}

impl<'de, T> Deserialize<'de> for Vector3<T>
where
    T: FloatingPoint + Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let (x, y, z) = <(T, T, T)>::deserialize(deserializer)?;
        Ok(Vector3 { x, y, z })
    }
}

impl<T: FloatingPoint> Vector3<T> {
    /// The origin, additive identity.
    pub const ZERO: Self = Self::new(T::ZERO, T::ZERO, T::ZERO);

    /// Construct a new Vector3. Components are taken as given; NaN and
    /// infinities are not rejected.
    pub const fn new(x: T, y: T, z: T) -> Self {
        Self { x, y, z }
    }

    /// Vector of all zeros
    pub fn zero() -> Self {
        Self::ZERO
    }

    /// Vector of all ones
    pub fn one() -> Self {
        Self::new(T::ONE, T::ONE, T::ONE)
    }

    /// Componentwise sum.
    pub fn plus(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }

    /// Componentwise difference `self - other`.
    pub fn minus(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }

    /// Scale every component by `s`.
    pub fn times(self, s: T) -> Self {
        Self::new(self.x * s, self.y * s, self.z * s)
    }

    /// Dot product. The `*` operator between two vectors resolves here.
    pub fn dot(self, other: Self) -> T {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Cross product `self × other`, orthogonal to both operands.
    ///
    /// Anticommutative, and the zero vector when the operands are parallel
    /// or either one is zero.
    pub fn cross(self, other: Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Return the squared length (avoids sqrt)
    pub fn length_squared(self) -> T {
        self.dot(self)
    }

    /// Return the Euclidean length.
    ///
    /// Chained `hypot`, so components whose squares would overflow or
    /// underflow still give a finite, non-zero length.
    pub fn length(self) -> T {
        self.x.hypot(self.y).hypot(self.z)
    }

    /// Synonym for [`Vector3::length`].
    pub fn magnitude(self) -> T {
        self.length()
    }

    /// Componentwise comparison under `tolerance`, with `expected` as the
    /// reference value.
    pub fn approx_eq(self, expected: Self, tolerance: Tolerance) -> bool {
        tolerance.accepts(self.x.to_f64(), expected.x.to_f64())
            && tolerance.accepts(self.y.to_f64(), expected.y.to_f64())
            && tolerance.accepts(self.z.to_f64(), expected.z.to_f64())
    }
}

impl<T: FloatingPoint> Default for Vector3<T> {
    fn default() -> Self {
        Self::ZERO
    }
}

/// Formats as `(x, y, z)` using the scalar's own `Display`, so
/// `Vector3::new(1.0, 2.5, -3.14)` prints `(1, 2.5, -3.14)`.
impl<T: FloatingPoint> fmt::Display for Vector3<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

// Implement operator + for Vector3<T>
impl<T: FloatingPoint> Add for Vector3<T> {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        self.plus(other)
    }
}

// Implement operator - for Vector3<T>
impl<T: FloatingPoint> Sub for Vector3<T> {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        self.minus(other)
    }
}

impl<T: FloatingPoint> Neg for Vector3<T> {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

// vector * vector is the dot product and yields a scalar
impl<T: FloatingPoint> Mul for Vector3<T> {
    type Output = T;

    fn mul(self, other: Self) -> T {
        self.dot(other)
    }
}

// vector * scalar and scalar * vector both scale
macro_rules! impl_scalar_mul {
    ($($t:ty),*) => {$(
        impl Mul<$t> for Vector3<$t> {
            type Output = Self;

            fn mul(self, s: $t) -> Self {
                self.times(s)
            }
        }

        impl Mul<Vector3<$t>> for $t {
            type Output = Vector3<$t>;

            fn mul(self, v: Vector3<$t>) -> Vector3<$t> {
                v.times(self)
            }
        }
    )*};
}

impl_scalar_mul!(f32, f64);

// Conversions between Vector3<T> and tuples

impl<T: FloatingPoint> From<(T, T, T)> for Vector3<T> {
    fn from(tuple: (T, T, T)) -> Self {
        Self::new(tuple.0, tuple.1, tuple.2)
    }
}

impl<T: FloatingPoint> From<Vector3<T>> for (T, T, T) {
    fn from(v: Vector3<T>) -> Self {
        (v.x, v.y, v.z)
    }
}

// Conversions between Vector3<T> and arrays [T; 3]

impl<T: FloatingPoint> From<[T; 3]> for Vector3<T> {
    fn from(array: [T; 3]) -> Self {
        let [x, y, z] = array;
        Self::new(x, y, z)
    }
}

impl<T: FloatingPoint> From<Vector3<T>> for [T; 3] {
    fn from(v: Vector3<T>) -> Self {
        [v.x, v.y, v.z]
    }
}

// Conversions from references

impl<T: FloatingPoint> From<&(T, T, T)> for Vector3<T> {
    fn from(tuple: &(T, T, T)) -> Self {
        Self::from(*tuple)
    }
}

impl<T: FloatingPoint> From<&[T; 3]> for Vector3<T> {
    fn from(array: &[T; 3]) -> Self {
        Self::from(*array)
    }
}

impl<T: FloatingPoint> From<&Vector3<T>> for (T, T, T) {
    fn from(v: &Vector3<T>) -> Self {
        (*v).into()
    }
}

impl<T: FloatingPoint> From<&Vector3<T>> for [T; 3] {
    fn from(v: &Vector3<T>) -> Self {
        (*v).into()
    }
}
