//! Named polynomial rings.

use toric_rings::traits::Ring;

use crate::monomial::Var;
use crate::sparse::SparsePoly;

/// A polynomial ring `R[names...]`, used to create generators by name and
/// to print polynomials with those names.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PolyRing {
    names: Vec<String>,
}

impl PolyRing {
    /// Creates a ring whose `i`-th generator is called `names[i]`.
    #[must_use]
    pub fn new(names: &[&str]) -> Self {
        Self {
            names: names.iter().map(|s| (*s).to_string()).collect(),
        }
    }

    /// Returns the number of generators.
    #[must_use]
    pub fn num_vars(&self) -> usize {
        self.names.len()
    }

    /// Returns the generator names.
    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Looks up a generator by name.
    #[must_use]
    pub fn var(&self, name: &str) -> Option<Var> {
        self.names.iter().position(|n| n == name).map(Var)
    }

    /// Returns all generators as variables.
    #[must_use]
    pub fn vars(&self) -> Vec<Var> {
        (0..self.names.len()).map(Var).collect()
    }

    /// Returns all generators as polynomials.
    #[must_use]
    pub fn gens<R: Ring>(&self) -> Vec<SparsePoly<R>> {
        self.vars().into_iter().map(SparsePoly::var).collect()
    }

    /// Formats a polynomial with this ring's names.
    #[must_use]
    pub fn format<R: Ring>(&self, p: &SparsePoly<R>) -> String {
        p.to_string_with(&self.names)
    }
}
