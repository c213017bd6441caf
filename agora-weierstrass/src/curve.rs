use crate::modular::{add_mod, is_prime, mul_mod, power, reduce};
use crate::CurveError;

use serde::{Deserialize, Serialize};

use std::fmt;

/// Unreduced curve parameters, as they appear in serialized form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurveParams {
    pub a: i64,
    pub b: i64,
    pub p: u64,
}

/// The curve `y^2 = x^3 + ax + b (mod p)`.
///
/// Coefficients are stored reduced modulo `p`. Construction only rejects
/// moduli below 2; whether the curve is non-singular and defined over a
/// prime field is answered by [`Curve::validate`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "CurveParams", into = "CurveParams")]
pub struct Curve {
    a: u64,
    b: u64,
    p: u64,
}

impl Curve {
    pub fn new(a: i64, b: i64, p: u64) -> Result<Self, CurveError> {
        if p < 2 {
            return Err(CurveError::InvalidModulus(p));
        }
        Ok(Self {
            a: reduce(a, p),
            b: reduce(b, p),
            p,
        })
    }

    pub fn a(&self) -> u64 {
        self.a
    }

    pub fn b(&self) -> u64 {
        self.b
    }

    pub fn modulus(&self) -> u64 {
        self.p
    }

    /// `4a^3 + 27b^2 mod p`, zero iff the curve is singular for odd `p`.
    pub fn discriminant(&self) -> u64 {
        let four_a_cubed = mul_mod(4, power(self.a, 3, self.p), self.p);
        let twenty_seven_b_squared = mul_mod(27, power(self.b, 2, self.p), self.p);
        add_mod(four_a_cubed, twenty_seven_b_squared, self.p)
    }

    /// Checks both non-singularity and primality of the modulus, reporting
    /// every failed condition.
    pub fn validate(&self) -> Result<(), CurveError> {
        // the full discriminant is -16(4a^3 + 27b^2), so every curve of
        // this form over F_2 is singular
        let singular = self.p == 2 || self.discriminant() == 0;
        let composite_modulus = !is_prime(self.p);
        if singular || composite_modulus {
            log::debug!(
                "{} rejected (singular: {}, composite modulus: {})",
                self,
                singular,
                composite_modulus
            );
            return Err(CurveError::InvalidCurve {
                singular,
                composite_modulus,
            });
        }
        Ok(())
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }
}

impl TryFrom<CurveParams> for Curve {
    type Error = CurveError;
    fn try_from(params: CurveParams) -> Result<Self, Self::Error> {
        Self::new(params.a, params.b, params.p)
    }
}

impl From<Curve> for CurveParams {
    fn from(curve: Curve) -> Self {
        // reduced coefficients are below p but may not fit an i64 for huge p
        let signed = |c: u64| i64::try_from(c).unwrap_or_else(|_| -((curve.p - c) as i64));
        Self {
            a: signed(curve.a),
            b: signed(curve.b),
            p: curve.p,
        }
    }
}

impl fmt::Display for Curve {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "y^2 = x^3 + {}x + {} (mod {})",
            self.a, self.b, self.p
        )
    }
}
