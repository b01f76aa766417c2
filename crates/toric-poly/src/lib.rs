//! # toric-poly
//!
//! Sparse multivariate polynomial arithmetic.
//!
//! This crate provides:
//! - Monomials over any number of variables, compared in lex order
//! - Sparse polynomials over any coefficient ring, themselves a ring
//! - Exact division by integers, monomials and (over a field) polynomials
//! - Substitution and named rings for display

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod monomial;
pub mod ring;
pub mod sparse;

#[cfg(test)]
mod proptests;

pub use monomial::{Monomial, Var};
pub use ring::PolyRing;
pub use sparse::SparsePoly;
