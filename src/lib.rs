//! # geometry
//!
//! A small 3D vector value type: addition, subtraction, scaling, dot and
//! cross products, length, and `(x, y, z)` text output.
//!
//! ```rust
//! use geometry::Vector3;
//!
//! let a: Vector3 = Vector3::new(1.0, 2.0, 3.0);
//! let b = Vector3::new(4.0, 5.0, 6.0);
//!
//! assert_eq!(a + b, Vector3::new(5.0, 7.0, 9.0));
//! assert_eq!(a * b, 32.0); // vector * vector is the dot product
//! assert_eq!(a * 2.5, Vector3::new(2.5, 5.0, 7.5)); // vector * scalar scales
//! assert!((Vector3::<f64>::new(3.0, 4.0, 0.0).length() - 5.0).abs() < 1e-12);
//! assert_eq!(Vector3::new(1.0, 2.5, -3.14).to_string(), "(1, 2.5, -3.14)");
//! ```

pub mod numerics;

pub use numerics::tolerance::Tolerance;
pub use numerics::types::parse::ParseVectorError;
pub use numerics::types::point::Point3;
pub use numerics::types::traits::FloatingPoint;
pub use numerics::types::vector::Vector3;
