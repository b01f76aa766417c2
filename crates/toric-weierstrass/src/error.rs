//! Errors raised while reducing a curve to Weierstrass form.

use thiserror::Error;
use toric_polygon::ClassifyError;

/// Errors that can occur during reduction.
///
/// Every error is terminal: a reduction either completes or stops at the
/// first failing stage.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum WeierstrassError {
    /// The number of curve variables does not fit the requested family.
    #[error("expected {expected} variables, got {got}")]
    TooManyOrFewVariables {
        /// The admissible counts, for example `"2 or 3"`.
        expected: &'static str,
        /// The number of variables supplied.
        got: usize,
    },
    /// Some term has the wrong weighted degree.
    #[error("polynomial is not homogeneous with weights {weights:?}")]
    NotHomogeneous {
        /// The grading that failed.
        weights: Vec<i64>,
    },
    /// The Newton polytope does not embed into a reflexive polygon.
    #[error("Newton polytope is not reflexive: {0}")]
    NotReflexive(#[from] ClassifyError),
    /// Monomials outside the family's basis are present.
    #[error("polynomial has monomials outside the expected basis: {terms}")]
    UnexpectedMonomials {
        /// The offending terms.
        terms: String,
    },
    /// A normalization constant has no inverse in the coefficient ring.
    #[error("coefficient ring has no exact division by {divisor}")]
    ExactDivisionFailure {
        /// The constant that could not be divided out.
        divisor: i64,
    },
    /// Both `f` and `g` vanish.
    #[error("j-invariant is undefined: f and g both vanish")]
    UndefinedJInvariant,
    /// The requested output needs a collaborator that was not supplied.
    #[error("no {0} was configured")]
    MissingCollaborator(&'static str),
}

/// Result type for reductions.
pub type Result<T> = std::result::Result<T, WeierstrassError>;

/// Divides by a small constant, mapping failure to [`WeierstrassError::ExactDivisionFailure`].
///
/// A constant that vanishes in the ring fails even when `value` is zero.
pub(crate) fn divide<R: toric_rings::ExactDivision>(value: &R, divisor: i64) -> Result<R> {
    let failure = WeierstrassError::ExactDivisionFailure { divisor };
    if R::from_int(divisor).is_zero() {
        return Err(failure);
    }
    value.try_div_int(divisor).ok_or(failure)
}
