//! Prime fields Z_p.

use crate::traits::{CommutativeRing, ExactDivision, Field, IntegralDomain, Ring};

/// A finite field Z_p for prime p.
///
/// Elements are stored as their canonical representative in `[0, P)`.
/// `P` must be a prime below `2^32` so products fit in a `u64`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct FiniteField<const P: u64>(u64);

impl<const P: u64> FiniteField<P> {
    /// Creates a new field element.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value % P)
    }

    /// Creates a field element from a signed value.
    #[must_use]
    pub fn from_signed(value: i64) -> Self {
        let r = value.unsigned_abs() % P;
        if value < 0 && r != 0 {
            Self(P - r)
        } else {
            Self(r)
        }
    }

    /// Returns the value.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }

    /// Returns the characteristic (the prime p).
    #[must_use]
    pub const fn characteristic() -> u64 {
        P
    }
}

impl<const P: u64> Ring for FiniteField<P> {
    fn zero() -> Self {
        Self(0)
    }

    fn one() -> Self {
        Self::new(1)
    }

    fn is_zero(&self) -> bool {
        self.0 == 0
    }

    fn is_one(&self) -> bool {
        self.0 == 1 % P
    }

    fn mul_by_scalar(&self, n: i64) -> Self {
        *self * Self::from_signed(n)
    }
}

impl<const P: u64> CommutativeRing for FiniteField<P> {}
impl<const P: u64> IntegralDomain for FiniteField<P> {}

impl<const P: u64> Field for FiniteField<P> {
    /// Inverse by the extended Euclidean algorithm.
    fn inv(&self) -> Option<Self> {
        if self.0 == 0 {
            return None;
        }

        let mut t = 0i128;
        let mut new_t = 1i128;
        let mut r = i128::from(P);
        let mut new_r = i128::from(self.0);

        while new_r != 0 {
            let quotient = r / new_r;
            (t, new_t) = (new_t, t - quotient * new_t);
            (r, new_r) = (new_r, r - quotient * new_r);
        }

        if r > 1 {
            return None;
        }

        let p = i128::from(P);
        u64::try_from(t.rem_euclid(p)).ok().map(Self)
    }
}

impl<const P: u64> ExactDivision for FiniteField<P> {
    fn try_div_int(&self, divisor: i64) -> Option<Self> {
        Self::from_signed(divisor).inv().map(|inv| *self * inv)
    }
}

impl<const P: u64> std::ops::Add for FiniteField<P> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self((self.0 + rhs.0) % P)
    }
}

impl<const P: u64> std::ops::Sub for FiniteField<P> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self((self.0 + P - rhs.0) % P)
    }
}

impl<const P: u64> std::ops::Mul for FiniteField<P> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self(self.0 * rhs.0 % P)
    }
}

impl<const P: u64> std::ops::Neg for FiniteField<P> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self((P - self.0) % P)
    }
}

impl<const P: u64> From<u64> for FiniteField<P> {
    fn from(value: u64) -> Self {
        Self::new(value)
    }
}

impl<const P: u64> From<i64> for FiniteField<P> {
    fn from(value: i64) -> Self {
        Self::from_signed(value)
    }
}

impl<const P: u64> std::fmt::Display for FiniteField<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl<const P: u64> std::fmt::Debug for FiniteField<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (mod {P})", self.0)
    }
}

/// The field with three elements; every normalization constant is a zero divisor here.
pub type GF3 = FiniteField<3>;

/// The field with seven elements.
pub type GF7 = FiniteField<7>;
