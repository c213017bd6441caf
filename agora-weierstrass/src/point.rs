use crate::curve::Curve;
use crate::modular::{add_mod, modular_inverse, mul_mod, neg_mod, sqrt_mod, sub_mod};
use crate::CurveError;

use serde::{Deserialize, Serialize};

use std::fmt;

/// A point of some curve. Coordinates only mean something relative to the
/// [`Curve`] they are used with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Point {
    /// The point at infinity.
    Identity,
    Affine { x: u64, y: u64 },
}

impl Point {
    pub fn is_identity(&self) -> bool {
        matches!(self, Self::Identity)
    }

    pub fn x(&self) -> Option<u64> {
        match self {
            Self::Identity => None,
            Self::Affine { x, .. } => Some(*x),
        }
    }

    pub fn y(&self) -> Option<u64> {
        match self {
            Self::Identity => None,
            Self::Affine { y, .. } => Some(*y),
        }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Identity => write!(f, "O"),
            Self::Affine { x, y } => write!(f, "({}, {})", x, y),
        }
    }
}

impl Curve {
    /// Affine point `(x, y)`, checked against the curve equation.
    pub fn point(&self, x: u64, y: u64) -> Result<Point, CurveError> {
        let point = Point::Affine { x, y };
        if self.is_on_curve(&point) {
            Ok(point)
        } else {
            Err(CurveError::NotOnCurve(point))
        }
    }

    pub fn is_on_curve(&self, point: &Point) -> bool {
        match *point {
            Point::Identity => true,
            Point::Affine { x, y } => {
                let p = self.modulus();
                x < p && y < p && mul_mod(y, y, p) == self.rhs(x)
            }
        }
    }

    /// `x^3 + ax + b mod p`
    pub(crate) fn rhs(&self, x: u64) -> u64 {
        let p = self.modulus();
        let x3 = mul_mod(mul_mod(x, x, p), x, p);
        add_mod(add_mod(x3, mul_mod(self.a(), x, p), p), self.b(), p)
    }

    /// The affine points with the given x-coordinate, ascending in y.
    pub fn lift_x(&self, x: u64) -> Vec<Point> {
        if x >= self.modulus() {
            return Vec::new();
        }
        sqrt_mod(self.rhs(x), self.modulus())
            .into_iter()
            .map(|y| Point::Affine { x, y })
            .collect()
    }

    pub fn negate(&self, point: &Point) -> Point {
        match *point {
            Point::Identity => Point::Identity,
            Point::Affine { x, y } => Point::Affine {
                x,
                y: neg_mod(y, self.modulus()),
            },
        }
    }

    /// The chord-and-tangent group law. Affine coordinates are expected to be
    /// reduced modulo `p`.
    ///
    /// Fails only if a gradient denominator has no inverse, which cannot
    /// happen for points of a valid curve.
    pub fn add(&self, lhs: &Point, rhs: &Point) -> Result<Point, CurveError> {
        let p = self.modulus();
        let ((x1, y1), (x2, y2)) = match (*lhs, *rhs) {
            (Point::Identity, _) => return Ok(*rhs),
            (_, Point::Identity) => return Ok(*lhs),
            (Point::Affine { x: x1, y: y1 }, Point::Affine { x: x2, y: y2 }) => {
                ((x1, y1), (x2, y2))
            }
        };

        let gradient = if x1 == x2 {
            // same x and different y means rhs = -lhs, and a point with
            // y = -y is its own inverse
            if y1 != y2 || neg_mod(y1, p) == y1 {
                return Ok(Point::Identity);
            }
            let numerator = add_mod(mul_mod(3, mul_mod(x1, x1, p), p), self.a(), p);
            let denominator = modular_inverse(mul_mod(2, y1, p), p)?;
            mul_mod(numerator, denominator, p)
        } else {
            let numerator = sub_mod(y2, y1, p);
            let denominator = modular_inverse(sub_mod(x2, x1, p), p)?;
            mul_mod(numerator, denominator, p)
        };

        let x3 = sub_mod(sub_mod(mul_mod(gradient, gradient, p), x1, p), x2, p);
        let y3 = add_mod(mul_mod(gradient, sub_mod(x3, x1, p), p), y1, p);
        Ok(Point::Affine {
            x: x3,
            y: neg_mod(y3, p),
        })
    }

    pub fn double(&self, point: &Point) -> Result<Point, CurveError> {
        self.add(point, point)
    }

    pub fn sub(&self, lhs: &Point, rhs: &Point) -> Result<Point, CurveError> {
        self.add(lhs, &self.negate(rhs))
    }

    /// `k`-fold sum of `point` by double-and-add, most significant bit first.
    pub fn scalar_mul(&self, point: &Point, k: u64) -> Result<Point, CurveError> {
        let mut q = Point::Identity;
        for bit in (0..u64::BITS - k.leading_zeros()).rev() {
            q = self.double(&q)?;
            if (k >> bit) & 1 == 1 {
                q = self.add(&q, point)?;
            }
        }
        Ok(q)
    }
}
