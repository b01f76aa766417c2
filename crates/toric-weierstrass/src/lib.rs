//! # toric-weierstrass
//!
//! Weierstrass normal forms of genus-one curves in toric surfaces.
//!
//! A genus-one curve given as the anticanonical hypersurface of `P^2`,
//! `P^1 x P^1` or `P^2[1,1,2]` (or any curve whose Newton polygon embeds
//! into one of their polygons) is reduced to `y^2 = x^3 + f*x + g`.
//!
//! This crate provides:
//! - Support extraction and re-embedding into the reference polygons
//! - Aronhold invariants of ternary cubics
//! - Partial discriminants and binary quartic invariants
//! - The assembled form with its discriminant and j-invariant
//! - A [`Reducer`] with an injectable polygon classifier
//!
//! ## Example
//!
//! ```
//! use toric_poly::{PolyRing, SparsePoly};
//! use toric_rings::{Ring, Q};
//! use toric_weierstrass::{weierstrass_form, Family};
//!
//! // x^4 + y^2 + 1 is a quartic in P^2[1,1,2]
//! let ring = PolyRing::new(&["x", "y"]);
//! let g = ring.gens::<Q>();
//! let curve = &(&g[0].pow(4) + &g[1].pow(2)) + &SparsePoly::one();
//!
//! let form = weierstrass_form(&curve, None).unwrap();
//! assert_eq!(form.family, Family::WeightedQuartic);
//! assert_eq!(form.f, SparsePoly::constant(Q::from_integer(-4)));
//! assert!(form.g.is_zero());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod cubic;
pub mod embed;
pub mod error;
pub mod extract;
pub mod family;
pub mod form;
pub mod homogeneity;
pub mod quartic;
pub mod reduce;
pub mod support;

#[cfg(test)]
mod proptests;

use toric_rings::{CommutativeRing, ExactDivision};

pub use cubic::TernaryCubic;
pub use error::{Result, WeierstrassError};
pub use family::{weierstrass_form_p1xp1, weierstrass_form_p2, weierstrass_form_p2_112, Family};
pub use form::{JInvariant, WeierstrassForm};
pub use quartic::BinaryQuartic;
pub use reduce::{
    discriminant, j_invariant, weierstrass_form, CoveringMap, CoveringMapBuilder, CurveEquation,
    QuadricPairReducer, Reducer, Reduction, ReductionOptions,
};
pub use support::Support;

/// A coefficient ring the reduction can work over.
///
/// Every normalization divides by a small constant; rings in which such a
/// division does not exist make the reduction fail rather than panic.
pub trait Coefficient: CommutativeRing + ExactDivision {}

impl<R: CommutativeRing + ExactDivision> Coefficient for R {}
