// src/numerics/tolerance.rs
// Closeness policy for floating point results.

use serde::{Deserialize, Serialize};

/// Tolerance used when comparing computed values against expected ones.
///
/// A value is accepted if it is within `relative` of the larger of the two
/// magnitudes OR within `absolute` of the expected value. Whichever bound is
/// looser wins, so the same policy works for results near zero and for
/// large-magnitude results.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tolerance {
    /// Allowed difference as a fraction of the larger magnitude (0.001 = 0.1%).
    pub relative: f64,
    /// Allowed difference in absolute units.
    pub absolute: f64,
}

impl Default for Tolerance {
    /// 0.1% relative or 1e-5 absolute.
    fn default() -> Self {
        Self {
            relative: 0.001,
            absolute: 0.00001,
        }
    }
}

impl Tolerance {
    pub fn new(relative: f64, absolute: f64) -> Self {
        Self { relative, absolute }
    }

    /// Only equal values pass (and equal infinities).
    pub fn exact() -> Self {
        Self::new(0.0, 0.0)
    }

    /// Purely relative comparison.
    pub fn relative(relative: f64) -> Self {
        Self::new(relative, 0.0)
    }

    /// Purely absolute comparison.
    pub fn absolute(absolute: f64) -> Self {
        Self::new(0.0, absolute)
    }

    /// Whether `actual` is close enough to `expected`. NaN is never accepted,
    /// and an infinity only matches the same infinity.
    pub fn accepts(&self, actual: f64, expected: f64) -> bool {
        if actual == expected {
            return true;
        }
        let diff = (actual - expected).abs();
        if !diff.is_finite() {
            return false;
        }
        diff <= self.absolute || diff <= self.relative * actual.abs().max(expected.abs())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_policy() {
        let tol = Tolerance::default();
        assert_eq!(tol.relative, 0.001);
        assert_eq!(tol.absolute, 0.00001);
    }

    #[test]
    fn test_absolute_bound_covers_values_near_zero() {
        let tol = Tolerance::default();
        assert!(tol.accepts(0.000005, 0.0));
        assert!(tol.accepts(-0.000009, 0.0));
        assert!(!tol.accepts(0.0001, 0.0));
    }

    #[test]
    fn test_relative_bound_covers_large_values() {
        let tol = Tolerance::default();
        assert!(tol.accepts(3_200_000_000.0 + 1000.0, 3_200_000_000.0));
        assert!(!tol.accepts(3_200_000_000.0 * 1.01, 3_200_000_000.0));
    }

    #[test]
    fn test_either_bound_is_enough() {
        let rel_only = Tolerance::relative(0.01);
        let abs_only = Tolerance::absolute(0.5);
        assert!(rel_only.accepts(100.5, 100.0));
        assert!(!rel_only.accepts(0.4, 0.0));
        assert!(abs_only.accepts(0.4, 0.0));
        assert!(!abs_only.accepts(101.0, 100.0));
        assert!(Tolerance::new(0.01, 0.5).accepts(0.4, 0.0));
        assert!(Tolerance::new(0.01, 0.5).accepts(100.9, 100.0));
    }

    #[test]
    fn test_exact_and_non_finite() {
        let exact = Tolerance::exact();
        assert!(exact.accepts(2.5, 2.5));
        assert!(!exact.accepts(2.5, 2.5000001));
        assert!(exact.accepts(f64::INFINITY, f64::INFINITY));
        assert!(exact.accepts(-0.0, 0.0));

        let tol = Tolerance::default();
        assert!(!tol.accepts(f64::NAN, f64::NAN));
        assert!(!tol.accepts(f64::NAN, 0.0));
        assert!(!tol.accepts(f64::INFINITY, f64::NEG_INFINITY));
        assert!(!tol.accepts(f64::INFINITY, 1.0));
    }

    #[test]
    fn test_bincode_roundtrip() {
        let config = bincode::config::standard();
        let tol = Tolerance::new(0.05, 1e-9);
        let bytes = bincode::serde::encode_to_vec(tol, config).unwrap();
        let (decoded, _): (Tolerance, usize) =
            bincode::serde::decode_from_slice(&bytes, config).unwrap();
        assert_eq!(decoded, tol);
    }
}
