//! The field of rational numbers Q.

use crate::traits::{CommutativeRing, ExactDivision, Field, IntegralDomain, Ring};
use dashu::base::Inverse;
use dashu::integer::{IBig, UBig};
use dashu::rational::RBig;

/// The field of rational numbers.
///
/// This is a wrapper around `dashu::rational::RBig` that implements
/// the algebraic traits. Values are always in lowest terms with a
/// positive denominator.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Q(pub RBig);

impl Q {
    /// Creates a new rational from numerator and denominator.
    ///
    /// For denominators that come from user input, use [`Q::try_new`].
    ///
    /// # Panics
    ///
    /// Panics if the denominator is zero.
    #[must_use]
    pub fn new(num: i64, den: i64) -> Self {
        Self::try_new(num, den).expect("denominator cannot be zero")
    }

    /// Creates `num / den`, or `None` when `den` is zero.
    #[must_use]
    pub fn try_new(num: i64, den: i64) -> Option<Self> {
        if den == 0 {
            return None;
        }
        let num = if den < 0 { -IBig::from(num) } else { IBig::from(num) };
        Some(Self(RBig::from_parts(num, UBig::from(den.unsigned_abs()))))
    }

    /// Creates a rational from an integer.
    #[must_use]
    pub fn from_integer(n: i64) -> Self {
        Self(RBig::from(IBig::from(n)))
    }

    /// Returns the numerator.
    #[must_use]
    pub fn numerator(&self) -> &IBig {
        self.0.numerator()
    }

    /// Returns the (positive) denominator.
    #[must_use]
    pub fn denominator(&self) -> &UBig {
        self.0.denominator()
    }

}

impl Ring for Q {
    fn zero() -> Self {
        Self(RBig::ZERO)
    }

    fn one() -> Self {
        Self(RBig::ONE)
    }

    fn is_zero(&self) -> bool {
        self.0 == RBig::ZERO
    }

    fn is_one(&self) -> bool {
        self.0 == RBig::ONE
    }

    fn mul_by_scalar(&self, n: i64) -> Self {
        Self(self.0.clone() * RBig::from(IBig::from(n)))
    }
}

impl CommutativeRing for Q {}
impl IntegralDomain for Q {}

impl Field for Q {
    fn inv(&self) -> Option<Self> {
        if self.is_zero() {
            None
        } else {
            Some(Self(self.0.clone().inv()))
        }
    }
}

impl ExactDivision for Q {
    fn try_div_int(&self, divisor: i64) -> Option<Self> {
        if divisor == 0 {
            None
        } else {
            Some(Self(self.0.clone() / RBig::from(IBig::from(divisor))))
        }
    }
}

// Implement arithmetic operations
impl std::ops::Add for Q {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl std::ops::Sub for Q {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl std::ops::Mul for Q {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self(self.0 * rhs.0)
    }
}

impl std::ops::Neg for Q {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl From<i64> for Q {
    fn from(value: i64) -> Self {
        Self::from_integer(value)
    }
}

impl From<RBig> for Q {
    fn from(value: RBig) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for Q {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if *self.denominator() == UBig::ONE {
            write!(f, "{}", self.numerator())
        } else {
            write!(f, "{}/{}", self.numerator(), self.denominator())
        }
    }
}

impl std::fmt::Debug for Q {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_laws() {
        let a = Q::new(2, 3);
        let b = Q::new(3, 4);

        // 2/3 + 3/4 = 17/12
        assert_eq!(a.clone() + b.clone(), Q::new(17, 12));

        // 2/3 * 3/4 = 1/2
        assert_eq!(a * b, Q::new(1, 2));
    }

    #[test]
    fn test_negative_denominator() {
        assert_eq!(Q::new(1, -2), Q::new(-1, 2));
        assert_eq!(Q::new(-3, -6), Q::new(1, 2));
        assert_eq!(Q::new(4, -2), Q::from_integer(-2));
    }

    #[test]
    fn test_zero_denominator() {
        assert_eq!(Q::try_new(3, 0), None);
        assert_eq!(Q::try_new(3, -6), Some(Q::new(-1, 2)));
    }

    #[test]
    #[should_panic(expected = "denominator cannot be zero")]
    fn test_new_panics_on_zero_denominator() {
        let _ = Q::new(1, 0);
    }

    #[test]
    fn test_inverse() {
        let a = Q::new(3, 5);
        let inv = a.inv().unwrap();

        assert!((a * inv).is_one());
        assert_eq!(Q::zero().inv(), None);
    }

    #[test]
    fn test_exact_division() {
        assert_eq!(Q::from_integer(-27).try_div_int(4), Some(Q::new(-27, 4)));
        assert_eq!(Q::one().try_div_int(0), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(Q::new(-27, 4).to_string(), "-27/4");
        assert_eq!(Q::new(6, 3).to_string(), "2");
        assert_eq!(format!("{:?}", Q::new(128, 27)), "128/27");
    }
}
