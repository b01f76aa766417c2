//! Sparse multivariate polynomials.
//!
//! This module provides sparse polynomial representation for
//! efficient handling of polynomials with few non-zero terms.
//! A polynomial does not record how many variables its ring has; every
//! `SparsePoly<R>` lives in `R[x0, x1, ...]`, which lets coefficients that
//! depend on parameters be represented in the same ring as the curve.

use std::ops::{Add, Mul, Neg, Sub};

use rustc_hash::FxHashMap;

use toric_rings::traits::{CommutativeRing, ExactDivision, Field, IntegralDomain, Ring};

use crate::monomial::{Monomial, Var};

/// A sparse multivariate polynomial.
///
/// Terms are stored as (monomial, coefficient) pairs, sorted by
/// descending lex order, with like terms merged and zero terms removed.
#[derive(Clone, PartialEq, Eq, Debug, Hash)]
pub struct SparsePoly<R: Ring> {
    terms: Vec<(Monomial, R)>,
}

impl<R: Ring> SparsePoly<R> {
    /// Creates a new polynomial from terms.
    ///
    /// Terms are automatically sorted and combined.
    #[must_use]
    pub fn new(terms: Vec<(Monomial, R)>) -> Self {
        let mut poly = Self { terms };
        poly.normalize();
        poly
    }

    /// Creates the zero polynomial.
    #[must_use]
    pub fn zero() -> Self {
        Self { terms: Vec::new() }
    }

    /// Creates the constant polynomial 1.
    #[must_use]
    pub fn one() -> Self {
        Self::constant(R::one())
    }

    /// Creates a constant polynomial.
    #[must_use]
    pub fn constant(c: R) -> Self {
        Self::monomial(Monomial::one(), c)
    }

    /// Creates a single variable.
    #[must_use]
    pub fn var(v: Var) -> Self {
        Self::monomial(Monomial::var(v), R::one())
    }

    /// Creates the single term `c * m`.
    #[must_use]
    pub fn monomial(m: Monomial, c: R) -> Self {
        if c.is_zero() {
            Self::zero()
        } else {
            Self { terms: vec![(m, c)] }
        }
    }

    /// Returns true if this is the zero polynomial.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.terms.is_empty()
    }

    /// Returns the number of terms.
    #[must_use]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Returns true if there are no terms.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Returns the terms.
    #[must_use]
    pub fn terms(&self) -> &[(Monomial, R)] {
        &self.terms
    }

    /// Iterates over `(monomial, coefficient)` pairs, leading term first.
    pub fn iter(&self) -> impl Iterator<Item = (&Monomial, &R)> {
        self.terms.iter().map(|(m, c)| (m, c))
    }

    /// Returns the leading monomial.
    #[must_use]
    pub fn leading_monomial(&self) -> Option<&Monomial> {
        self.terms.first().map(|(m, _)| m)
    }

    /// Returns the leading term (monomial, coefficient).
    #[must_use]
    pub fn leading_term(&self) -> Option<&(Monomial, R)> {
        self.terms.first()
    }

    /// Returns the value of a constant polynomial.
    #[must_use]
    pub fn constant_value(&self) -> Option<R> {
        match self.terms.as_slice() {
            [] => Some(R::zero()),
            [(m, c)] if m.is_one() => Some(c.clone()),
            _ => None,
        }
    }

    /// Returns the variables that occur, in increasing index order.
    #[must_use]
    pub fn variables(&self) -> Vec<Var> {
        let mut vars: Vec<Var> = self.terms.iter().flat_map(|(m, _)| m.support()).collect();
        vars.sort_unstable();
        vars.dedup();
        vars
    }

    /// Computes the total degree.
    #[must_use]
    pub fn total_degree(&self) -> u32 {
        self.terms
            .iter()
            .map(|(m, _)| m.total_degree())
            .max()
            .unwrap_or(0)
    }

    /// Computes the degree in a single variable.
    #[must_use]
    pub fn degree_in(&self, v: Var) -> u32 {
        self.terms.iter().map(|(m, _)| m.exponent(v)).max().unwrap_or(0)
    }

    /// Sorts terms and combines like terms.
    fn normalize(&mut self) {
        // Sort descending so the leading term comes first
        self.terms.sort_by(|a, b| b.0.cmp(&a.0));

        let mut merged: Vec<(Monomial, R)> = Vec::with_capacity(self.terms.len());
        for (m, c) in self.terms.drain(..) {
            match merged.last_mut() {
                Some((last, acc)) if *last == m => *acc = acc.clone() + c,
                _ => merged.push((m, c)),
            }
        }
        merged.retain(|(_, c)| !c.is_zero());
        self.terms = merged;
    }

    /// Adds two polynomials.
    #[must_use]
    pub fn add(&self, other: &Self) -> Self {
        let mut terms = self.terms.clone();
        terms.extend(other.terms.iter().cloned());
        Self::new(terms)
    }

    /// Negates a polynomial.
    #[must_use]
    pub fn neg(&self) -> Self {
        Self {
            terms: self.terms.iter().map(|(m, c)| (m.clone(), -c.clone())).collect(),
        }
    }

    /// Subtracts two polynomials.
    #[must_use]
    pub fn sub(&self, other: &Self) -> Self {
        self.add(&other.neg())
    }

    /// Multiplies two polynomials, accumulating like products in a hash map.
    #[must_use]
    pub fn mul(&self, other: &Self) -> Self {
        if self.is_zero() || other.is_zero() {
            return Self::zero();
        }

        let mut products: FxHashMap<Monomial, R> = FxHashMap::default();

        for (m1, c1) in &self.terms {
            for (m2, c2) in &other.terms {
                let slot = products.entry(m1.mul(m2)).or_insert_with(R::zero);
                *slot = slot.clone() + c1.clone() * c2.clone();
            }
        }

        Self::new(products.into_iter().collect())
    }

    /// Multiplies by a scalar.
    #[must_use]
    pub fn scale(&self, c: &R) -> Self {
        if c.is_zero() {
            return Self::zero();
        }

        // Zero divisors in R can annihilate terms, so renormalize.
        Self::new(
            self.terms
                .iter()
                .map(|(m, x)| (m.clone(), x.clone() * c.clone()))
                .collect(),
        )
    }

    /// Multiplies by the term `c * m`.
    #[must_use]
    pub fn mul_monomial(&self, m: &Monomial, c: &R) -> Self {
        if c.is_zero() {
            return Self::zero();
        }

        Self::new(
            self.terms
                .iter()
                .map(|(m2, c2)| (m.mul(m2), c2.clone() * c.clone()))
                .collect(),
        )
    }

    /// Divides every term by a monomial.
    ///
    /// Returns `None` unless `m` divides every monomial of `self`.
    #[must_use]
    pub fn div_monomial(&self, m: &Monomial) -> Option<Self> {
        let terms = self
            .terms
            .iter()
            .map(|(m2, c)| m2.div(m).map(|q| (q, c.clone())))
            .collect::<Option<Vec<_>>>()?;
        Some(Self { terms })
    }

    /// Substitutes `value` for the variable `v`.
    #[must_use]
    pub fn substitute(&self, v: Var, value: &Self) -> Self {
        let mut powers: Vec<Self> = vec![Self::one()];
        let mut result = Vec::new();

        for (m, c) in &self.terms {
            let e = m.exponent(v) as usize;
            while powers.len() <= e {
                let next = Self::mul(&powers[powers.len() - 1], value);
                powers.push(next);
            }
            let rest = m.without(&[v]);
            for (pm, pc) in &powers[e].terms {
                result.push((rest.mul(pm), c.clone() * pc.clone()));
            }
        }

        Self::new(result)
    }

    /// Computes the formal partial derivative in `v`.
    #[must_use]
    pub fn derivative(&self, v: Var) -> Self {
        let dv = Monomial::var(v);
        Self::new(
            self.terms
                .iter()
                .filter_map(|(m, c)| {
                    let q = m.div(&dv)?;
                    Some((q, c.mul_by_scalar(i64::from(m.exponent(v)))))
                })
                .collect(),
        )
    }

    /// Formats the polynomial with the given variable names.
    #[must_use]
    pub fn to_string_with(&self, names: &[String]) -> String {
        if self.is_zero() {
            return "0".to_string();
        }

        let terms: Vec<_> = self
            .terms
            .iter()
            .map(|(m, c)| {
                let mon = m.to_string_with(names);
                if mon == "1" {
                    format!("{c:?}")
                } else if c.is_one() {
                    mon
                } else {
                    format!("{c:?}*{mon}")
                }
            })
            .collect();

        terms.join(" + ")
    }
}

impl<R: Field> SparsePoly<R> {
    /// Exact division by a non-zero polynomial.
    ///
    /// Runs multivariate division in lex order and returns the quotient
    /// only when the remainder is zero.
    #[must_use]
    pub fn div_exact(&self, divisor: &Self) -> Option<Self> {
        let (lm, lc) = divisor.leading_term()?;
        let lc_inv = lc.inv()?;

        let mut remainder = self.clone();
        let mut quotient = Vec::new();

        while let Some((m, c)) = remainder.leading_term() {
            let qm = m.div(lm)?;
            let qc = c.clone() * lc_inv.clone();
            remainder = Self::sub(&remainder, &divisor.mul_monomial(&qm, &qc));
            quotient.push((qm, qc));
        }

        Some(Self::new(quotient))
    }
}

impl<R: Ring> Ring for SparsePoly<R> {
    fn zero() -> Self {
        Self::zero()
    }

    fn one() -> Self {
        Self::one()
    }

    fn is_zero(&self) -> bool {
        self.terms.is_empty()
    }

    fn is_one(&self) -> bool {
        matches!(self.terms.as_slice(), [(m, c)] if m.is_one() && c.is_one())
    }

    fn mul_by_scalar(&self, n: i64) -> Self {
        Self::new(
            self.terms
                .iter()
                .map(|(m, c)| (m.clone(), c.mul_by_scalar(n)))
                .collect(),
        )
    }
}

impl<R: CommutativeRing> CommutativeRing for SparsePoly<R> {}
impl<R: IntegralDomain> IntegralDomain for SparsePoly<R> {}

impl<R: ExactDivision> ExactDivision for SparsePoly<R> {
    fn try_div_int(&self, divisor: i64) -> Option<Self> {
        let terms = self
            .terms
            .iter()
            .map(|(m, c)| c.try_div_int(divisor).map(|q| (m.clone(), q)))
            .collect::<Option<Vec<_>>>()?;
        Some(Self::new(terms))
    }
}

impl<R: Ring> Add for SparsePoly<R> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        SparsePoly::add(&self, &rhs)
    }
}

impl<R: Ring> Sub for SparsePoly<R> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        SparsePoly::sub(&self, &rhs)
    }
}

impl<R: Ring> Mul for SparsePoly<R> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        SparsePoly::mul(&self, &rhs)
    }
}

impl<R: Ring> Neg for SparsePoly<R> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        SparsePoly::neg(&self)
    }
}

impl<'a, R: Ring> Add<&'a SparsePoly<R>> for &'a SparsePoly<R> {
    type Output = SparsePoly<R>;

    fn add(self, rhs: Self) -> Self::Output {
        SparsePoly::add(self, rhs)
    }
}

impl<'a, R: Ring> Sub<&'a SparsePoly<R>> for &'a SparsePoly<R> {
    type Output = SparsePoly<R>;

    fn sub(self, rhs: Self) -> Self::Output {
        SparsePoly::sub(self, rhs)
    }
}

impl<'a, R: Ring> Mul<&'a SparsePoly<R>> for &'a SparsePoly<R> {
    type Output = SparsePoly<R>;

    fn mul(self, rhs: Self) -> Self::Output {
        SparsePoly::mul(self, rhs)
    }
}

impl<R: Ring> Neg for &SparsePoly<R> {
    type Output = SparsePoly<R>;

    fn neg(self) -> Self::Output {
        SparsePoly::neg(self)
    }
}

impl<R: Ring> From<R> for SparsePoly<R> {
    fn from(c: R) -> Self {
        Self::constant(c)
    }
}

impl<R: Ring> std::fmt::Display for SparsePoly<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_string_with(&[]))
    }
}
