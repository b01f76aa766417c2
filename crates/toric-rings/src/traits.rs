//! Algebraic structure traits.
//!
//! This module defines the coefficient traits used by polynomials and by
//! the invariant computations built on top of them.

use std::fmt::Debug;
use std::ops::{Add, Mul, Neg, Sub};

/// A ring is a set with addition and multiplication operations.
///
/// # Laws
///
/// - Addition is associative and commutative with identity `zero()`
/// - Multiplication is associative with identity `one()`
/// - Multiplication distributes over addition
/// - Every element has an additive inverse (`neg`)
pub trait Ring:
    Clone + Eq + Debug + Add<Output = Self> + Sub<Output = Self> + Mul<Output = Self> + Neg<Output = Self>
{
    /// The additive identity.
    fn zero() -> Self;

    /// The multiplicative identity.
    fn one() -> Self;

    /// Returns true if this is the additive identity.
    fn is_zero(&self) -> bool;

    /// Returns true if this is the multiplicative identity.
    fn is_one(&self) -> bool;

    /// Computes `n * self` by doubling.
    fn mul_by_scalar(&self, n: i64) -> Self {
        let mut result = Self::zero();
        let mut base = self.clone();
        let mut k = n.unsigned_abs();

        while k > 0 {
            if k & 1 == 1 {
                result = result + base.clone();
            }
            k >>= 1;
            if k > 0 {
                base = base.clone() + base;
            }
        }

        if n < 0 {
            -result
        } else {
            result
        }
    }

    /// The image of an integer under the canonical map `Z -> R`.
    fn from_int(n: i64) -> Self {
        Self::one().mul_by_scalar(n)
    }

    /// Computes self^n for non-negative n.
    fn pow(&self, n: u32) -> Self {
        if n == 0 {
            return Self::one();
        }

        let mut result = Self::one();
        let mut base = self.clone();
        let mut exp = n;

        while exp > 0 {
            if exp & 1 == 1 {
                result = result * base.clone();
            }
            exp >>= 1;
            if exp > 0 {
                base = base.clone() * base;
            }
        }

        result
    }
}

/// A commutative ring where multiplication is commutative.
///
/// Every coefficient ring accepted by the reduction is commutative.
pub trait CommutativeRing: Ring {}

/// An integral domain is a commutative ring with no zero divisors.
///
/// If a * b = 0, then a = 0 or b = 0.
pub trait IntegralDomain: CommutativeRing {}

/// A field is a ring where every non-zero element has a multiplicative inverse.
pub trait Field: IntegralDomain {
    /// Computes the multiplicative inverse.
    ///
    /// Returns `None` if the element is zero.
    fn inv(&self) -> Option<Self>;

    /// Divides by another element.
    ///
    /// Returns `None` if `other` is zero.
    fn field_div(&self, other: &Self) -> Option<Self> {
        other.inv().map(|inv| self.clone() * inv)
    }
}

/// Exact division by small integers.
///
/// The normalizations of the curve invariants divide by fixed constants
/// such as 4, 48 and 1296. A ring supports them when the quotient exists;
/// `None` signals that it does not (for instance `3 / 4` in `Z`, or any
/// division by 2 or 3 in characteristic 2 or 3).
pub trait ExactDivision: Ring {
    /// Returns `q` with `q * divisor == self`, if such an element exists.
    fn try_div_int(&self, divisor: i64) -> Option<Self>;
}
