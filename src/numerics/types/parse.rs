// src/numerics/types/parse.rs
// Reading a Vector3 back from its `(x, y, z)` display form.

use core::str::FromStr;

use super::traits::FloatingPoint;
use super::vector::Vector3;

/// Errors returned when text is not a `(x, y, z)` vector.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseVectorError {
    #[error("vector text must be enclosed in parentheses")]
    MissingParentheses,

    #[error("expected 3 comma-separated components, found {found}")]
    ComponentCount { found: usize },

    #[error("invalid {axis} component: {value:?}")]
    InvalidComponent { axis: char, value: String },
}

const AXES: [char; 3] = ['x', 'y', 'z'];

fn parse_components<T: FloatingPoint>(text: &str) -> Result<Vector3<T>, ParseVectorError> {
    let inner = text
        .trim()
        .strip_prefix('(')
        .and_then(|rest| rest.strip_suffix(')'))
        .ok_or(ParseVectorError::MissingParentheses)?;

    let parts: Vec<&str> = inner.split(',').map(str::trim).collect();
    if parts.len() != AXES.len() {
        return Err(ParseVectorError::ComponentCount { found: parts.len() });
    }

    let mut components = [T::ZERO; 3];
    for ((slot, part), axis) in components.iter_mut().zip(&parts).zip(AXES) {
        *slot = part.parse().map_err(|_| ParseVectorError::InvalidComponent {
            axis,
            value: (*part).to_string(),
        })?;
    }
    Ok(Vector3::from(components))
}

/// Accepts the output of `Display`, e.g. `"(1, 2.5, -3.14)"`. Whitespace
/// around the parentheses and around each component is ignored.
impl<T: FloatingPoint> FromStr for Vector3<T> {
    type Err = ParseVectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_components(s).map_err(|err| {
            tracing::debug!(input = s, error = %err, "rejected vector text");
            err
        })
    }
}

#[cfg(test)]
#[allow(clippy::approx_constant)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_display_form() {
        let v: Vector3 = "(1, 2.5, -3.14)".parse().unwrap();
        assert_eq!(v, Vector3::new(1.0, 2.5, -3.14));
    }

    #[test]
    fn test_whitespace_is_ignored() {
        let v: Vector3 = "  ( 1 ,2,   3 )\n".parse().unwrap();
        assert_eq!(v, Vector3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_text_roundtrip() {
        let v = Vector3::new(7.65, -3.4, 1e-12);
        let back: Vector3 = v.to_string().parse().unwrap();
        assert_eq!(back, v);

        let v32 = Vector3::new(0.1_f32, -2.0, 3.25);
        let back32: Vector3<f32> = v32.to_string().parse().unwrap();
        assert_eq!(back32, v32);
    }

    #[test]
    fn test_non_finite_components() {
        let v: Vector3 = "(inf, -inf, NaN)".parse().unwrap();
        assert_eq!(v.x, f64::INFINITY);
        assert_eq!(v.y, f64::NEG_INFINITY);
        assert!(v.z.is_nan());
    }

    #[test]
    fn test_missing_parentheses() {
        for text in ["1, 2, 3", "(1, 2, 3", "1, 2, 3)", ""] {
            assert_eq!(
                text.parse::<Vector3>(),
                Err(ParseVectorError::MissingParentheses),
                "input {text:?}"
            );
        }
    }

    #[test]
    fn test_wrong_component_count() {
        assert_eq!(
            "(1, 2)".parse::<Vector3>(),
            Err(ParseVectorError::ComponentCount { found: 2 })
        );
        assert_eq!(
            "(1, 2, 3, 4)".parse::<Vector3>(),
            Err(ParseVectorError::ComponentCount { found: 4 })
        );
        assert_eq!(
            "()".parse::<Vector3>(),
            Err(ParseVectorError::ComponentCount { found: 1 })
        );
    }

    #[test]
    fn test_invalid_component_names_axis() {
        let err = "(1, two, 3)".parse::<Vector3>().unwrap_err();
        assert_eq!(
            err,
            ParseVectorError::InvalidComponent { axis: 'y', value: "two".to_string() }
        );
        assert_eq!(err.to_string(), "invalid y component: \"two\"");

        assert_eq!(
            "(1, 2, )".parse::<Vector3>(),
            Err(ParseVectorError::InvalidComponent { axis: 'z', value: String::new() })
        );
    }
}
