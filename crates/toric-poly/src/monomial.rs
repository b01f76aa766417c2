//! Monomials over an unbounded set of variables.
//!
//! A monomial is an exponent vector indexed by variable. Trailing zero
//! exponents are never stored, so two monomials are equal exactly when they
//! denote the same power product, regardless of how many variables the
//! surrounding ring has.

use smallvec::SmallVec;
use std::cmp::Ordering;

/// A polynomial variable, identified by its generator index.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct Var(pub usize);

impl Var {
    /// Returns the generator index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl std::fmt::Display for Var {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", default_name(self.0))
    }
}

/// The display name used when no ring names are available.
pub(crate) fn default_name(i: usize) -> String {
    const VARS: [char; 6] = ['x', 'y', 'z', 'w', 'u', 'v'];
    if i < VARS.len() {
        VARS[i].to_string()
    } else {
        format!("x{i}")
    }
}

/// A power product of variables.
///
/// The derived ordering compares exponent vectors lexicographically with
/// variable 0 most significant, which is the lex monomial order.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Default)]
pub struct Monomial(SmallVec<[u32; 6]>);

impl Monomial {
    /// Creates the monomial 1 (all exponents zero).
    #[must_use]
    pub fn one() -> Self {
        Self(SmallVec::new())
    }

    /// Creates the monomial `v`.
    #[must_use]
    pub fn var(v: Var) -> Self {
        Self::var_pow(v, 1)
    }

    /// Creates the monomial `v^e`.
    #[must_use]
    pub fn var_pow(v: Var, e: u32) -> Self {
        let mut exps = SmallVec::from_elem(0, v.0 + 1);
        exps[v.0] = e;
        Self::from_smallvec(exps)
    }

    /// Creates a monomial from exponents, indexed by variable.
    #[must_use]
    pub fn from_exponents(exps: &[u32]) -> Self {
        Self::from_smallvec(SmallVec::from_slice(exps))
    }

    /// Creates the power product `Π vars[i]^exps[i]`.
    ///
    /// Repeated variables accumulate their exponents.
    #[must_use]
    pub fn from_var_exponents(vars: &[Var], exps: &[u32]) -> Self {
        let len = vars.iter().map(|v| v.0 + 1).max().unwrap_or(0);
        let mut out: SmallVec<[u32; 6]> = SmallVec::from_elem(0, len);
        for (v, &e) in vars.iter().zip(exps) {
            out[v.0] += e;
        }
        Self::from_smallvec(out)
    }

    fn from_smallvec(mut exps: SmallVec<[u32; 6]>) -> Self {
        while exps.last() == Some(&0) {
            exps.pop();
        }
        Self(exps)
    }

    /// Returns true for the monomial 1.
    #[must_use]
    pub fn is_one(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the exponent of variable `v`.
    #[must_use]
    pub fn exponent(&self, v: Var) -> u32 {
        self.0.get(v.0).copied().unwrap_or(0)
    }

    /// Returns the stored exponents; entries past the end are zero.
    #[must_use]
    pub fn exponents(&self) -> &[u32] {
        &self.0
    }

    /// Returns the exponents of `vars`, in order.
    #[must_use]
    pub fn project(&self, vars: &[Var]) -> Vec<u32> {
        vars.iter().map(|&v| self.exponent(v)).collect()
    }

    /// Returns this monomial with the exponents of `vars` set to zero.
    #[must_use]
    pub fn without(&self, vars: &[Var]) -> Self {
        let mut exps = self.0.clone();
        for v in vars {
            if let Some(e) = exps.get_mut(v.0) {
                *e = 0;
            }
        }
        Self::from_smallvec(exps)
    }

    /// Multiplies two monomials (adds exponents).
    #[must_use]
    pub fn mul(&self, other: &Self) -> Self {
        let (long, short) = if self.0.len() >= other.0.len() {
            (self, other)
        } else {
            (other, self)
        };
        let mut exps = long.0.clone();
        for (e, &f) in exps.iter_mut().zip(short.0.iter()) {
            *e += f;
        }
        Self(exps)
    }

    /// Divides by another monomial if possible.
    ///
    /// Returns `Some(quotient)` if self is divisible by other.
    #[must_use]
    pub fn div(&self, other: &Self) -> Option<Self> {
        if other.0.len() > self.0.len() {
            return None;
        }
        let mut exps = self.0.clone();
        for (e, &f) in exps.iter_mut().zip(other.0.iter()) {
            *e = e.checked_sub(f)?;
        }
        Some(Self::from_smallvec(exps))
    }

    /// Returns true if self divides other.
    #[must_use]
    pub fn divides(&self, other: &Self) -> bool {
        other.div(self).is_some()
    }

    /// Raises the monomial to a power.
    #[must_use]
    pub fn pow(&self, n: u32) -> Self {
        if n == 0 {
            return Self::one();
        }
        Self(self.0.iter().map(|&e| e * n).collect())
    }

    /// Computes the total degree.
    #[must_use]
    pub fn total_degree(&self) -> u32 {
        self.0.iter().sum()
    }

    /// Variables with a non-zero exponent, in increasing order.
    pub fn support(&self) -> impl Iterator<Item = Var> + '_ {
        self.0
            .iter()
            .enumerate()
            .filter(|(_, &e)| e > 0)
            .map(|(i, _)| Var(i))
    }

    /// Formats the monomial with the given variable names.
    ///
    /// Variables without a name fall back to the default naming.
    #[must_use]
    pub fn to_string_with(&self, names: &[String]) -> String {
        let parts: Vec<String> = self
            .0
            .iter()
            .enumerate()
            .filter(|(_, &e)| e > 0)
            .map(|(i, &e)| {
                let var_name = names.get(i).cloned().unwrap_or_else(|| default_name(i));
                if e == 1 {
                    var_name
                } else {
                    format!("{var_name}^{e}")
                }
            })
            .collect();

        if parts.is_empty() {
            "1".to_string()
        } else {
            parts.join("*")
        }
    }
}

impl PartialOrd for Monomial {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Monomial {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

impl std::fmt::Display for Monomial {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_string_with(&[]))
    }
}
