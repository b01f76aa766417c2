//! # toric-polygon
//!
//! Lattice polygons and the maximal reflexive polygons.
//!
//! This crate provides:
//! - Coordinates on the saturated affine lattice of a point set
//! - Lattice polytopes of dimension at most two, with their vertices
//! - The reference polygons of `P^2`, `P^1 x P^1` and `P^2[1,1,2]`
//! - A [`PolygonClassifier`] trait and a default exhaustive embedder
//!
//! ## Example
//!
//! ```
//! use toric_polygon::{PolygonClassifier, ReflexiveEmbedder, ReflexivePolygon};
//!
//! // Exponents of x^4 + y^2 + 1
//! let points = vec![vec![4, 0], vec![0, 2], vec![0, 0]];
//! let found = ReflexiveEmbedder::new().classify(&points).unwrap();
//! assert_eq!(found.polygon, ReflexivePolygon::P112);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod classify;
pub mod lattice;
pub mod polytope;
pub mod reference;

#[cfg(test)]
mod proptests;

pub use classify::{Classification, ClassifyError, PolygonClassifier, ReflexiveEmbedder};
pub use lattice::AffineLattice;
pub use polytope::LatticePolytope;
pub use reference::ReflexivePolygon;
