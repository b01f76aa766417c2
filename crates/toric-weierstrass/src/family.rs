//! The three canonical curve families.
//!
//! Each family is the anticanonical hypersurface of one toric surface:
//!
//! | Family | Ambient | Homogeneous variables | Gradings |
//! |---|---|---|---|
//! | `Cubic` | `P^2` | `x, y, z` | `(1,1,1)/3` |
//! | `Biquadric` | `P^1 x P^1` | `x, y, s, t` | `(1,1,0,0)/2`, `(0,0,1,1)/2` |
//! | `WeightedQuartic` | `P^2[1,1,2]` | `x, y, z, t` | `(1,0,1,-2)/0`, `(0,1,0,1)/2` |
//!
//! A family accepts either the full list of homogeneous variables, in which
//! case every grading is checked, or exactly two variables, in which case
//! the remaining ambient variables are set to one.

use toric_poly::{SparsePoly, Var};
use toric_polygon::ReflexivePolygon;
use tracing::trace;

use crate::cubic::TernaryCubic;
use crate::error::{Result, WeierstrassError};
use crate::extract::extract_coefficients;
use crate::form::WeierstrassForm;
use crate::homogeneity::{check_gradings, Grading};
use crate::quartic::{partial_discriminant, BinaryQuartic};
use crate::Coefficient;

const CUBIC_GRADINGS: [Grading; 1] = [Grading {
    weights: &[1, 1, 1],
    total: 3,
}];

const BIQUADRIC_GRADINGS: [Grading; 2] = [
    Grading {
        weights: &[1, 1, 0, 0],
        total: 2,
    },
    Grading {
        weights: &[0, 0, 1, 1],
        total: 2,
    },
];

const WEIGHTED_QUARTIC_GRADINGS: [Grading; 2] = [
    Grading {
        weights: &[1, 0, 1, -2],
        total: 0,
    },
    Grading {
        weights: &[0, 1, 0, 1],
        total: 2,
    },
];

/// A canonical family of genus-one curves.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Family {
    /// Plane cubics.
    Cubic,
    /// Curves of bidegree `(2, 2)` in `P^1 x P^1`.
    Biquadric,
    /// Quartics in the weighted plane `P^2[1,1,2]`.
    WeightedQuartic,
}

impl Family {
    /// The family whose Newton polygon is `polygon`.
    #[must_use]
    pub const fn from_polygon(polygon: ReflexivePolygon) -> Self {
        match polygon {
            ReflexivePolygon::P2 => Self::Cubic,
            ReflexivePolygon::P1xP1 => Self::Biquadric,
            ReflexivePolygon::P112 => Self::WeightedQuartic,
        }
    }

    /// The reference polygon of the family.
    #[must_use]
    pub const fn polygon(self) -> ReflexivePolygon {
        match self {
            Self::Cubic => ReflexivePolygon::P2,
            Self::Biquadric => ReflexivePolygon::P1xP1,
            Self::WeightedQuartic => ReflexivePolygon::P112,
        }
    }

    /// The number of homogeneous coordinates of the ambient surface.
    #[must_use]
    pub const fn homogeneous_variables(self) -> usize {
        match self {
            Self::Cubic => 3,
            Self::Biquadric | Self::WeightedQuartic => 4,
        }
    }

    /// The gradings a homogeneous equation must respect.
    #[must_use]
    pub fn gradings(self) -> &'static [Grading] {
        match self {
            Self::Cubic => &CUBIC_GRADINGS,
            Self::Biquadric => &BIQUADRIC_GRADINGS,
            Self::WeightedQuartic => &WEIGHTED_QUARTIC_GRADINGS,
        }
    }

    fn expected_variables(self) -> &'static str {
        match self {
            Self::Cubic => "2 or 3",
            Self::Biquadric | Self::WeightedQuartic => "2 or 4",
        }
    }

    /// Computes the Weierstrass form of an equation already written in the
    /// family's standard form.
    ///
    /// `variables` are the curve coordinates in slot order; every other
    /// variable is a parameter.
    ///
    /// # Errors
    ///
    /// - [`WeierstrassError::TooManyOrFewVariables`] for a wrong variable count
    /// - [`WeierstrassError::NotHomogeneous`] if a grading fails
    /// - [`WeierstrassError::UnexpectedMonomials`] for terms outside the
    ///   family's basis
    /// - [`WeierstrassError::ExactDivisionFailure`] if the coefficient ring
    ///   cannot divide by a normalization constant
    pub fn weierstrass_form<R: Coefficient>(
        self,
        poly: &SparsePoly<R>,
        variables: &[Var],
    ) -> Result<WeierstrassForm<R>> {
        let homogeneous = variables.len() == self.homogeneous_variables();
        if variables.len() != 2 && !homogeneous {
            return Err(WeierstrassError::TooManyOrFewVariables {
                expected: self.expected_variables(),
                got: variables.len(),
            });
        }
        if homogeneous {
            check_gradings(poly, variables, self.gradings())?;
        } else {
            self.check_basis(poly, variables)?;
        }
        trace!(target: "weierstrass", family = %self, homogeneous, "standard form validated");

        match (self, variables) {
            (Self::Cubic, &[x, y]) => cubic_form(poly, x, y, None),
            (Self::Cubic, &[x, y, z]) => cubic_form(poly, x, y, Some(z)),
            (Self::Biquadric, &[x, s]) => self.quartic_form(poly, (s, None), (x, None)),
            (Self::Biquadric, &[x, y, s, t]) => self.quartic_form(poly, (s, Some(t)), (x, Some(y))),
            (Self::WeightedQuartic, &[x, y]) => self.quartic_form(poly, (y, None), (x, None)),
            (Self::WeightedQuartic, &[x, y, z, t]) => {
                self.quartic_form(poly, (y, Some(t)), (x, Some(z)))
            }
            _ => Err(WeierstrassError::TooManyOrFewVariables {
                expected: self.expected_variables(),
                got: variables.len(),
            }),
        }
    }

    /// Rejects dehomogenized terms outside the reference polygon.
    fn check_basis<R: Coefficient>(self, poly: &SparsePoly<R>, variables: &[Var]) -> Result<()> {
        let basis: Vec<[u32; 2]> = self
            .polygon()
            .lattice_points()
            .into_iter()
            .filter_map(|[i, j]| Some([u32::try_from(i).ok()?, u32::try_from(j).ok()?]))
            .collect();
        let monomials: Vec<&[u32]> = basis.iter().map(|m| &m[..]).collect();
        extract_coefficients(poly, &monomials, variables).map(|_| ())
    }

    /// Eliminates the pair `quadratic` and reads the invariants of the
    /// binary quartic left in `quartic`.
    fn quartic_form<R: Coefficient>(
        self,
        poly: &SparsePoly<R>,
        quadratic: (Var, Option<Var>),
        quartic: (Var, Option<Var>),
    ) -> Result<WeierstrassForm<R>> {
        let delta = partial_discriminant(poly, quadratic.0, quadratic.1)?;
        let q = BinaryQuartic::from_polynomial(&delta, quartic.0, quartic.1)?;
        let (i, j) = (q.invariant_i(), q.invariant_j());
        trace!(target: "weierstrass", %i, %j, "binary quartic invariants");
        WeierstrassForm::from_quartic_invariants(self, &i, &j)
    }
}

fn cubic_form<R: Coefficient>(
    poly: &SparsePoly<R>,
    x: Var,
    y: Var,
    z: Option<Var>,
) -> Result<WeierstrassForm<R>> {
    let cubic = TernaryCubic::from_polynomial(poly, x, y, z)?;
    let (s, t) = (cubic.s_invariant()?, cubic.t_invariant()?);
    trace!(target: "weierstrass", %s, %t, "Aronhold invariants");
    WeierstrassForm::from_cubic_invariants(&s, &t)
}

impl std::fmt::Display for Family {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Cubic => "cubic",
            Self::Biquadric => "biquadric",
            Self::WeightedQuartic => "weighted quartic",
        };
        write!(f, "{name}")
    }
}

/// Weierstrass form of a plane cubic in `(x, y)` or `(x, y, z)`.
///
/// # Errors
///
/// As [`Family::weierstrass_form`].
pub fn weierstrass_form_p2<R: Coefficient>(poly: &SparsePoly<R>, variables: &[Var]) -> Result<WeierstrassForm<R>> {
    Family::Cubic.weierstrass_form(poly, variables)
}

/// Weierstrass form of a biquadric in `(x, s)` or `(x, y, s, t)`.
///
/// # Errors
///
/// As [`Family::weierstrass_form`].
pub fn weierstrass_form_p1xp1<R: Coefficient>(
    poly: &SparsePoly<R>,
    variables: &[Var],
) -> Result<WeierstrassForm<R>> {
    Family::Biquadric.weierstrass_form(poly, variables)
}

/// Weierstrass form of a weighted quartic in `(x, y)` or `(x, y, z, t)`.
///
/// # Errors
///
/// As [`Family::weierstrass_form`].
pub fn weierstrass_form_p2_112<R: Coefficient>(
    poly: &SparsePoly<R>,
    variables: &[Var],
) -> Result<WeierstrassForm<R>> {
    Family::WeightedQuartic.weierstrass_form(poly, variables)
}
