//! Residue arithmetic with an explicit modulus.
//!
//! Every helper takes the modulus as an argument and expects it to be
//! nonzero. Operands may be unreduced; products are computed in `u128`.

use crate::CurveError;

use num_integer::{Integer, Roots};

/// Trial division up to `⌊√n⌋`.
pub fn is_prime(n: u64) -> bool {
    if n <= 1 {
        return false;
    }
    (2..=n.sqrt()).all(|i| n % i != 0)
}

/// Reduces a signed integer into `[0, modulus)`.
pub fn reduce(value: i64, modulus: u64) -> u64 {
    // the floor-mod result is in [0, modulus), so it fits back into u64
    i128::from(value).mod_floor(&i128::from(modulus)) as u64
}

pub fn add_mod(lhs: u64, rhs: u64, modulus: u64) -> u64 {
    ((u128::from(lhs) + u128::from(rhs)) % u128::from(modulus)) as u64
}

pub fn sub_mod(lhs: u64, rhs: u64, modulus: u64) -> u64 {
    add_mod(lhs, neg_mod(rhs, modulus), modulus)
}

pub fn neg_mod(value: u64, modulus: u64) -> u64 {
    let reduced = value % modulus;
    if reduced == 0 {
        0
    } else {
        modulus - reduced
    }
}

pub fn mul_mod(lhs: u64, rhs: u64, modulus: u64) -> u64 {
    ((u128::from(lhs) * u128::from(rhs)) % u128::from(modulus)) as u64
}

/// Square-and-multiply, least significant bit first.
pub fn power(base: u64, exponent: u64, modulus: u64) -> u64 {
    let mut result = 1 % modulus;
    let mut base = base % modulus;
    let mut exponent = exponent;
    while exponent > 0 {
        if exponent & 1 == 1 {
            result = mul_mod(result, base, modulus);
        }
        base = mul_mod(base, base, modulus);
        exponent >>= 1;
    }
    result
}

/// Euclid's algorithm with `gcd(0, b) = b`.
pub fn gcd(a: u64, b: u64) -> u64 {
    let (mut a, mut b) = (a, b);
    while a != 0 {
        (a, b) = (b % a, a);
    }
    b
}

/// Inverse of `value` modulo a prime via Fermat's little theorem,
/// `value^(p - 2) mod p`.
///
/// The modulus is not checked for primality; with a composite modulus the
/// gcd check still rejects non-units but the returned value is meaningless.
pub fn modular_inverse(value: u64, prime_modulus: u64) -> Result<u64, CurveError> {
    if prime_modulus < 2 || gcd(value % prime_modulus, prime_modulus) != 1 {
        return Err(CurveError::NoInverse {
            value,
            modulus: prime_modulus,
        });
    }
    Ok(power(value, prime_modulus - 2, prime_modulus))
}

/// Every `r` in `[0, modulus)` with `r^2 = value`, ascending.
pub fn sqrt_mod(value: u64, modulus: u64) -> Vec<u64> {
    let value = value % modulus;
    (0..modulus)
        .filter(|&r| mul_mod(r, r, modulus) == value)
        .collect()
}
