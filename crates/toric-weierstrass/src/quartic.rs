//! Partial discriminants and binary quartic invariants.
//!
//! A curve that is quadratic in one pair of variables becomes, after taking
//! the discriminant in that pair, a binary quartic in the other pair. The
//! quartic's invariants `I` and `J` then give the Weierstrass coefficients.

use toric_poly::{SparsePoly, Var};
use toric_rings::Ring;

use crate::error::{divide, Result};
use crate::extract::extract_coefficients;
use crate::Coefficient;

/// The discriminant of `poly` viewed as a quadratic form in `(y0, y1)`.
///
/// With `y1` absent the form is dehomogenized, `y1 = 1`. The coefficients
/// `c2, c1, c0` of `y1^2, y0*y1, y0^2` give `c1^2 - 4*c0*c2`.
///
/// # Errors
///
/// [`crate::WeierstrassError::UnexpectedMonomials`] if `poly` is not
/// quadratic in the pair.
pub fn partial_discriminant<R: Coefficient>(
    poly: &SparsePoly<R>,
    y0: Var,
    y1: Option<Var>,
) -> Result<SparsePoly<R>> {
    let c = match y1 {
        Some(y1) => extract_coefficients(poly, &[&[0, 2], &[1, 1], &[2, 0]], &[y0, y1])?,
        None => extract_coefficients(poly, &[&[0], &[1], &[2]], &[y0])?,
    };
    let (c2, c1, c0) = (&c[0], &c[1], &c[2]);
    Ok(&(c1 * c1) - &(c0 * c2).mul_by_scalar(4))
}

/// A binary quartic `Σ binomial(4, k) e_k x0^(4-k) x1^k`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BinaryQuartic<K> {
    e: [K; 5],
}

impl<K: Coefficient> BinaryQuartic<K> {
    /// Creates a quartic from its binomially normalized coefficients.
    #[must_use]
    pub fn new(e: [K; 5]) -> Self {
        Self { e }
    }

    /// Creates a quartic from plain coefficients `c_k` of `x0^(4-k) x1^k`.
    ///
    /// # Errors
    ///
    /// Fails if 4 or 6 cannot be divided out.
    pub fn from_coefficients(c: [K; 5]) -> Result<Self> {
        let [c0, c1, c2, c3, c4] = c;
        Ok(Self::new([c0, divide(&c1, 4)?, divide(&c2, 6)?, divide(&c3, 4)?, c4]))
    }

    /// The invariant `I = e0 e4 - 4 e1 e3 + 3 e2^2`, of degree 2.
    #[must_use]
    pub fn invariant_i(&self) -> K {
        let [e0, e1, e2, e3, e4] = &self.e;
        e0.clone() * e4.clone() - (e1.clone() * e3.clone()).mul_by_scalar(4)
            + (e2.clone() * e2.clone()).mul_by_scalar(3)
    }

    /// The invariant `J`, the determinant of the catalecticant, of degree 3.
    #[must_use]
    pub fn invariant_j(&self) -> K {
        let [e0, e1, e2, e3, e4] = &self.e;
        e0.clone() * e2.clone() * e4.clone() - e0.clone() * e3.clone() * e3.clone()
            - e1.clone() * e1.clone() * e4.clone()
            + (e1.clone() * e2.clone() * e3.clone()).mul_by_scalar(2)
            - e2.clone() * e2.clone() * e2.clone()
    }
}

impl<R: Coefficient> BinaryQuartic<SparsePoly<R>> {
    /// Reads the quartic off a polynomial in `x0` and optionally `x1`.
    ///
    /// # Errors
    ///
    /// [`crate::WeierstrassError::UnexpectedMonomials`] if `poly` is not a
    /// quartic in the given variables, or a division failure.
    pub fn from_polynomial(poly: &SparsePoly<R>, x0: Var, x1: Option<Var>) -> Result<Self> {
        let c = match x1 {
            Some(x1) => extract_coefficients(
                poly,
                &[&[4, 0], &[3, 1], &[2, 2], &[1, 3], &[0, 4]],
                &[x0, x1],
            )?,
            None => extract_coefficients(poly, &[&[4], &[3], &[2], &[1], &[0]], &[x0])?,
        };
        let mut c = c.into_iter();
        let mut next = || c.next().unwrap_or_else(SparsePoly::zero);
        Self::from_coefficients([next(), next(), next(), next(), next()])
    }
}
