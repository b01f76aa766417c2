//! Newton support of a polynomial with respect to chosen variables.

use rustc_hash::FxHashMap;
use toric_poly::{Monomial, SparsePoly, Var};
use toric_rings::Ring;

/// The exponent-to-coefficient map of a polynomial.
///
/// Only the chosen variables contribute to the exponent tuples; every other
/// variable is folded into the coefficients, which are polynomials free of
/// the chosen variables.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Support<R: Ring> {
    variables: Vec<Var>,
    entries: Vec<(Vec<u32>, SparsePoly<R>)>,
}

impl<R: Ring> Support<R> {
    /// Splits `poly` by its exponents in `variables`.
    ///
    /// Entries are sorted by exponent tuple.
    #[must_use]
    pub fn extract(poly: &SparsePoly<R>, variables: &[Var]) -> Self {
        let mut groups: FxHashMap<Vec<u32>, Vec<(Monomial, R)>> = FxHashMap::default();
        for (m, c) in poly.iter() {
            groups
                .entry(m.project(variables))
                .or_default()
                .push((m.without(variables), c.clone()));
        }

        let mut entries: Vec<(Vec<u32>, SparsePoly<R>)> = groups
            .into_iter()
            .map(|(key, terms)| (key, SparsePoly::new(terms)))
            .collect();
        entries.sort_by(|a, b| a.0.cmp(&b.0));

        Self {
            variables: variables.to_vec(),
            entries,
        }
    }

    /// Returns the chosen variables.
    #[must_use]
    pub fn variables(&self) -> &[Var] {
        &self.variables
    }

    /// Returns the number of distinct exponent tuples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true for the zero polynomial.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over `(exponents, coefficient)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&[u32], &SparsePoly<R>)> {
        self.entries.iter().map(|(e, c)| (e.as_slice(), c))
    }

    /// Returns the coefficient of an exponent tuple, if present.
    #[must_use]
    pub fn coefficient(&self, exponents: &[u32]) -> Option<&SparsePoly<R>> {
        self.entries
            .binary_search_by(|(e, _)| e.as_slice().cmp(exponents))
            .ok()
            .map(|i| &self.entries[i].1)
    }

    /// The exponent tuples as lattice points.
    #[must_use]
    pub fn lattice_points(&self) -> Vec<Vec<i64>> {
        self.entries
            .iter()
            .map(|(e, _)| e.iter().map(|&x| i64::from(x)).collect())
            .collect()
    }

    /// Rebuilds the polynomial.
    #[must_use]
    pub fn reconstruct(&self) -> SparsePoly<R> {
        let mut terms = Vec::new();
        for (exponents, coefficient) in &self.entries {
            let m = Monomial::from_var_exponents(&self.variables, exponents);
            for (cm, c) in coefficient.iter() {
                terms.push((cm.mul(&m), c.clone()));
            }
        }
        SparsePoly::new(terms)
    }
}
