//! # toric-rings
//!
//! Coefficient rings for Weierstrass reduction.
//!
//! This crate provides:
//! - Abstract traits: `Ring`, `Field`, `ExactDivision`
//! - Concrete implementations: Z, Q, Z_p
//!
//! ## Trait Hierarchy
//!
//! ```text
//! Ring
//!  ├── CommutativeRing
//!  │    └── IntegralDomain
//!  │         └── Field
//!  └── ExactDivision
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod finite_field;
pub mod integers;
pub mod rationals;
pub mod traits;

#[cfg(test)]
mod proptests;

pub use finite_field::{FiniteField, GF3, GF7};
pub use integers::Z;
pub use rationals::Q;
pub use traits::{CommutativeRing, ExactDivision, Field, IntegralDomain, Ring};
