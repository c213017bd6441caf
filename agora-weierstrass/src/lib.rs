#![deny(clippy::all)]
#![deny(clippy::dbg_macro)]

//! Brute-force arithmetic on short Weierstrass curves `y^2 = x^3 + ax + b`
//! over small prime fields.
//!
//! ```
//! use agora_weierstrass::{Curve, Point};
//!
//! let curve = Curve::new(2, 3, 97).unwrap();
//! assert!(curve.is_valid());
//!
//! let p = curve.point(3, 6).unwrap();
//! let order = curve.order_of(&p).unwrap();
//! assert_eq!(curve.scalar_mul(&p, order).unwrap(), Point::Identity);
//! ```

mod curve;
mod enumerate;
pub mod modular;
mod order;
mod point;

pub use curve::{Curve, CurveParams};
pub use enumerate::Points;
pub use point::Point;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CurveError {
    #[error("modulus must be at least 2, got {0}")]
    InvalidModulus(u64),
    #[error("invalid curve (singular: {singular}, composite modulus: {composite_modulus})")]
    InvalidCurve {
        singular: bool,
        composite_modulus: bool,
    },
    #[error("{value} has no inverse modulo {modulus}")]
    NoInverse { value: u64, modulus: u64 },
    #[error("point {0} is not on the curve")]
    NotOnCurve(Point),
    #[error("point {point} did not reach the identity within {limit} additions")]
    OrderLimitExceeded { point: Point, limit: u64 },
}
