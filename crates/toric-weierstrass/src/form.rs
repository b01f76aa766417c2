//! Weierstrass forms and their derived invariants.

use toric_poly::SparsePoly;
use toric_rings::{Field, Ring};

use crate::error::{divide, Result, WeierstrassError};
use crate::family::Family;
use crate::Coefficient;

/// The short Weierstrass form `y^2 = x^3 + f*x + g`.
///
/// `f` and `g` are polynomials in the parameters of the input curve, and
/// constants when it has none.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WeierstrassForm<R: Ring> {
    /// The family the curve was reduced through.
    pub family: Family,
    /// The coefficient of `x`, of weight 4.
    pub f: SparsePoly<R>,
    /// The constant coefficient, of weight 6.
    pub g: SparsePoly<R>,
}

impl<R: Coefficient> WeierstrassForm<R> {
    /// Creates a form from its coefficients.
    #[must_use]
    pub fn new(family: Family, f: SparsePoly<R>, g: SparsePoly<R>) -> Self {
        Self { family, f, g }
    }

    /// Assembles `f = 27*S` and `g = -(27/4)*T` from the Aronhold invariants
    /// of a plane cubic.
    ///
    /// # Errors
    ///
    /// [`WeierstrassError::ExactDivisionFailure`] if 4 cannot be divided out.
    pub fn from_cubic_invariants(s: &SparsePoly<R>, t: &SparsePoly<R>) -> Result<Self> {
        let f = s.mul_by_scalar(27);
        let g = divide(&t.mul_by_scalar(-27), 4)?;
        Ok(Self::new(Family::Cubic, f, g))
    }

    /// Assembles `f = -I/4` and `g = -J/4` from the invariants of the
    /// binary quartic of a quartic family.
    ///
    /// # Errors
    ///
    /// [`WeierstrassError::ExactDivisionFailure`] if 4 cannot be divided out.
    pub fn from_quartic_invariants(family: Family, i: &SparsePoly<R>, j: &SparsePoly<R>) -> Result<Self> {
        let f = divide(&-i, 4)?;
        let g = divide(&-j, 4)?;
        Ok(Self::new(family, f, g))
    }

    /// The discriminant `4f^3 + 27g^2`.
    #[must_use]
    pub fn discriminant(&self) -> SparsePoly<R> {
        &self.f.pow(3).mul_by_scalar(4) + &self.g.pow(2).mul_by_scalar(27)
    }
}

/// The j-invariant `1728 * 4f^3 / (4f^3 + 27g^2)`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum JInvariant<R: Ring> {
    /// The quotient is a polynomial.
    Finite(SparsePoly<R>),
    /// The quotient does not simplify to a polynomial.
    Quotient {
        /// `6912 f^3`.
        numerator: SparsePoly<R>,
        /// The discriminant.
        denominator: SparsePoly<R>,
    },
    /// The discriminant vanishes while `f` does not.
    Infinity,
}

impl<R: Coefficient + Field> WeierstrassForm<R> {
    /// Computes the j-invariant.
    ///
    /// # Errors
    ///
    /// [`WeierstrassError::UndefinedJInvariant`] if `f` and the
    /// discriminant both vanish.
    pub fn j_invariant(&self) -> Result<JInvariant<R>> {
        let denominator = self.discriminant();
        if denominator.is_zero() {
            return if self.f.is_zero() {
                Err(WeierstrassError::UndefinedJInvariant)
            } else {
                Ok(JInvariant::Infinity)
            };
        }

        let numerator = self.f.pow(3).mul_by_scalar(6912);
        Ok(match numerator.div_exact(&denominator) {
            Some(j) => JInvariant::Finite(j),
            None => JInvariant::Quotient {
                numerator,
                denominator,
            },
        })
    }
}
