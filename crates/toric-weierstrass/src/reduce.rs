//! The reduction pipeline.
//!
//! A [`Reducer`] takes a curve through support extraction, classification
//! of its Newton polytope, re-embedding into the reference polygon and
//! the family's invariant computation. The polygon classifier is a
//! strategy; reductions of quadric pairs and explicit covering maps are
//! delegated to optional collaborators.

use toric_poly::{SparsePoly, Var};
use toric_polygon::{PolygonClassifier, ReflexiveEmbedder};
use toric_rings::{Field, Ring};
use tracing::{debug, trace};

use crate::embed::canonical_form;
use crate::error::{Result, WeierstrassError};
use crate::family::Family;
use crate::form::{JInvariant, WeierstrassForm};
use crate::support::Support;
use crate::Coefficient;

/// A genus-one curve.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CurveEquation<R: Ring> {
    /// A single equation in a toric surface.
    Hypersurface(SparsePoly<R>),
    /// The intersection of two quadrics in 3-space.
    QuadricPair(SparsePoly<R>, SparsePoly<R>),
}

/// Options for [`Reducer::reduce`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReductionOptions {
    /// The curve coordinates; all occurring variables when `None`.
    pub variables: Option<Vec<Var>>,
    /// Whether to produce the covering map instead of `(f, g)`.
    pub transformation: bool,
}

impl ReductionOptions {
    /// Default options: all variables, no transformation.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the curve coordinates.
    #[must_use]
    pub fn with_variables(mut self, variables: Vec<Var>) -> Self {
        self.variables = Some(variables);
        self
    }

    /// Requests the covering map.
    #[must_use]
    pub fn with_transformation(mut self, transformation: bool) -> Self {
        self.transformation = transformation;
        self
    }
}

/// A rational map from the curve onto its Weierstrass model.
///
/// `(x : y : z)` are the images of the Weierstrass coordinates, as
/// polynomials in the curve's variables.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CoveringMap<R: Ring> {
    /// The target Weierstrass form.
    pub form: WeierstrassForm<R>,
    /// Image of `x`.
    pub x: SparsePoly<R>,
    /// Image of `y`.
    pub y: SparsePoly<R>,
    /// Image of `z`.
    pub z: SparsePoly<R>,
}

/// The result of [`Reducer::reduce`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Reduction<R: Ring> {
    /// The Weierstrass coefficients.
    Form(WeierstrassForm<R>),
    /// The covering map, with its target form.
    Map(CoveringMap<R>),
}

/// Reduces the intersection of two quadrics.
pub trait QuadricPairReducer<R: Ring> {
    /// Computes the Weierstrass form of `q1 = q2 = 0`.
    ///
    /// # Errors
    ///
    /// Any [`WeierstrassError`] describing why the pair is not reducible.
    fn reduce_pair(
        &self,
        q1: &SparsePoly<R>,
        q2: &SparsePoly<R>,
        variables: Option<&[Var]>,
    ) -> Result<WeierstrassForm<R>>;
}

/// Builds explicit covering maps.
pub trait CoveringMapBuilder<R: Ring> {
    /// Computes the map from `curve` onto `form`.
    ///
    /// # Errors
    ///
    /// Any [`WeierstrassError`] describing why no map could be built.
    fn covering_map(
        &self,
        curve: &CurveEquation<R>,
        variables: Option<&[Var]>,
        form: &WeierstrassForm<R>,
    ) -> Result<CoveringMap<R>>;
}

/// Reduces genus-one curves to Weierstrass form.
///
/// # Example
///
/// ```
/// use toric_poly::PolyRing;
/// use toric_rings::{Ring, Q};
/// use toric_weierstrass::Reducer;
///
/// let ring = PolyRing::new(&["x", "y"]);
/// let g = ring.gens::<Q>();
/// let curve = &(&g[0].pow(3) + &g[1].pow(3)) + &toric_poly::SparsePoly::one();
///
/// let form = Reducer::new().weierstrass_form(&curve, None).unwrap();
/// assert!(form.f.is_zero());
/// assert_eq!(form.g.to_string(), "-27/4");
/// ```
pub struct Reducer<R: Ring> {
    classifier: Box<dyn PolygonClassifier + Send + Sync>,
    pair_reducer: Option<Box<dyn QuadricPairReducer<R> + Send + Sync>>,
    map_builder: Option<Box<dyn CoveringMapBuilder<R> + Send + Sync>>,
}

impl<R: Ring> Default for Reducer<R> {
    fn default() -> Self {
        Self {
            classifier: Box::new(ReflexiveEmbedder::new()),
            pair_reducer: None,
            map_builder: None,
        }
    }
}

impl<R: Coefficient> Reducer<R> {
    /// A reducer with the default classifier and no collaborators.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the polygon classifier.
    #[must_use]
    pub fn with_classifier(mut self, classifier: impl PolygonClassifier + Send + Sync + 'static) -> Self {
        self.classifier = Box::new(classifier);
        self
    }

    /// Installs a reducer for quadric pairs.
    #[must_use]
    pub fn with_quadric_pair_reducer(
        mut self,
        reducer: impl QuadricPairReducer<R> + Send + Sync + 'static,
    ) -> Self {
        self.pair_reducer = Some(Box::new(reducer));
        self
    }

    /// Installs a covering map builder.
    #[must_use]
    pub fn with_covering_map_builder(
        mut self,
        builder: impl CoveringMapBuilder<R> + Send + Sync + 'static,
    ) -> Self {
        self.map_builder = Some(Box::new(builder));
        self
    }

    /// Reduces a curve as configured by `options`.
    ///
    /// # Errors
    ///
    /// [`WeierstrassError::MissingCollaborator`] if the input or the
    /// requested output needs a collaborator that is not installed, and
    /// any error of the reduction itself.
    pub fn reduce(&self, curve: &CurveEquation<R>, options: &ReductionOptions) -> Result<Reduction<R>> {
        let variables = options.variables.as_deref();
        let builder = if options.transformation {
            Some(
                self.map_builder
                    .as_deref()
                    .ok_or(WeierstrassError::MissingCollaborator("covering map builder"))?,
            )
        } else {
            None
        };

        let form = match curve {
            CurveEquation::Hypersurface(poly) => self.weierstrass_form(poly, variables)?,
            CurveEquation::QuadricPair(q1, q2) => {
                let reducer = self
                    .pair_reducer
                    .as_deref()
                    .ok_or(WeierstrassError::MissingCollaborator("quadric pair reducer"))?;
                reducer.reduce_pair(q1, q2, variables)?
            }
        };

        match builder {
            Some(builder) => builder.covering_map(curve, variables, &form).map(Reduction::Map),
            None => Ok(Reduction::Form(form)),
        }
    }

    /// Computes the Weierstrass form of a hypersurface.
    ///
    /// `variables` are the curve coordinates, at least two of them; every
    /// other variable is a parameter. `None` takes all variables of `poly`.
    ///
    /// # Errors
    ///
    /// - [`WeierstrassError::TooManyOrFewVariables`] for fewer than two
    ///   variables
    /// - [`WeierstrassError::NotReflexive`] if the Newton polytope embeds in
    ///   no reference polygon
    /// - [`WeierstrassError::ExactDivisionFailure`] if the coefficient ring
    ///   cannot divide by a normalization constant
    pub fn weierstrass_form(&self, poly: &SparsePoly<R>, variables: Option<&[Var]>) -> Result<WeierstrassForm<R>> {
        let variables = variables.map_or_else(|| poly.variables(), <[Var]>::to_vec);
        let (x0, x1) = match variables.as_slice() {
            [x0, x1, ..] => (*x0, *x1),
            _ => {
                return Err(WeierstrassError::TooManyOrFewVariables {
                    expected: "at least 2",
                    got: variables.len(),
                })
            }
        };

        let support = Support::extract(poly, &variables);
        trace!(target: "weierstrass", terms = support.len(), variables = variables.len(), "support extracted");

        let classification = self.classifier.classify(&support.lattice_points())?;
        let family = Family::from_polygon(classification.polygon);
        debug!(
            target: "weierstrass",
            polygon = %classification.polygon,
            dimension = classification.polytope.dimension(),
            %family,
            "classified Newton polytope"
        );

        let canonical = canonical_form(&support, &classification.images, x0, x1)?;
        let form = family.weierstrass_form(&canonical, &[x0, x1])?;
        debug!(target: "weierstrass", f = %form.f, g = %form.g, "reduced to Weierstrass form");
        Ok(form)
    }

    /// Computes the discriminant `4f^3 + 27g^2` of a hypersurface.
    ///
    /// # Errors
    ///
    /// As [`Reducer::weierstrass_form`].
    pub fn discriminant(&self, poly: &SparsePoly<R>, variables: Option<&[Var]>) -> Result<SparsePoly<R>> {
        Ok(self.weierstrass_form(poly, variables)?.discriminant())
    }
}

impl<R: Coefficient + Field> Reducer<R> {
    /// Computes the j-invariant of a hypersurface.
    ///
    /// # Errors
    ///
    /// As [`Reducer::weierstrass_form`], and
    /// [`WeierstrassError::UndefinedJInvariant`] when `f = g = 0`.
    pub fn j_invariant(&self, poly: &SparsePoly<R>, variables: Option<&[Var]>) -> Result<JInvariant<R>> {
        self.weierstrass_form(poly, variables)?.j_invariant()
    }
}

/// [`Reducer::weierstrass_form`] with the default reducer.
///
/// # Errors
///
/// As [`Reducer::weierstrass_form`].
pub fn weierstrass_form<R: Coefficient>(poly: &SparsePoly<R>, variables: Option<&[Var]>) -> Result<WeierstrassForm<R>> {
    Reducer::new().weierstrass_form(poly, variables)
}

/// [`Reducer::discriminant`] with the default reducer.
///
/// # Errors
///
/// As [`Reducer::weierstrass_form`].
pub fn discriminant<R: Coefficient>(poly: &SparsePoly<R>, variables: Option<&[Var]>) -> Result<SparsePoly<R>> {
    Reducer::new().discriminant(poly, variables)
}

/// [`Reducer::j_invariant`] with the default reducer.
///
/// # Errors
///
/// As [`Reducer::j_invariant`].
pub fn j_invariant<R: Coefficient + Field>(poly: &SparsePoly<R>, variables: Option<&[Var]>) -> Result<JInvariant<R>> {
    Reducer::new().j_invariant(poly, variables)
}
