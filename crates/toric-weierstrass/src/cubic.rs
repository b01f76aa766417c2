//! Invariants of ternary cubics.
//!
//! A ternary cubic is written
//! `Σ a_ij x^i y^j z^(3-i-j)` over `i + j <= 3`. Its ring of `SL(3)`
//! invariants is generated by the Aronhold invariants `S` (degree 4) and
//! `T` (degree 6), normalized so that on the Hesse pencil
//! `x^3 + y^3 + z^3 + 6m*xyz` they read `S = m - m^4` and
//! `T = 1 - 20m^3 - 8m^6`.
//!
//! Both are built from the Hessian covariant of the generic cubic `F`,
//! whose coefficients are independent variables. With `M_F` the matrix of
//! second partials and `H = det M_F`, the mixed determinant
//! `tr(adj(M_F) M_H)` equals `-12 N4 * F`, and polarizing `N4` along `H`
//! gives `-8 N6`. Then `S = N4 / 1296` and `T = -N6 / 5832`. The integer
//! numerators are derived once and evaluated on concrete coefficients.

use std::sync::OnceLock;

use toric_poly::{Monomial, SparsePoly, Var};
use toric_rings::{ExactDivision, Ring, Z};

use crate::error::{divide, Result};
use crate::extract::extract_coefficients;
use crate::Coefficient;

/// Exponents `(i, j)` of `x` and `y` for each coefficient slot.
pub const CUBIC_MONOMIALS: [[u32; 2]; 10] = [
    [3, 0],
    [2, 1],
    [1, 2],
    [0, 3],
    [2, 0],
    [1, 1],
    [0, 2],
    [1, 0],
    [0, 1],
    [0, 0],
];

/// A signed product of coefficient slots, with repeated slots for powers.
type SlotProduct = (i64, Vec<usize>);

/// The integer numerators `N4` and `N6`.
struct Numerators {
    s: Vec<SlotProduct>,
    t: Vec<SlotProduct>,
}

static NUMERATORS: OnceLock<Numerators> = OnceLock::new();

fn numerators() -> &'static Numerators {
    NUMERATORS.get_or_init(derive_numerators)
}

const XYZ: [Var; 3] = [Var(0), Var(1), Var(2)];

/// The variable carrying the coefficient of slot `k` in the generic cubic.
const fn slot(k: usize) -> Var {
    Var(3 + k)
}

type Matrix = [[SparsePoly<Z>; 3]; 3];

fn hessian_matrix(poly: &SparsePoly<Z>) -> Matrix {
    std::array::from_fn(|i| std::array::from_fn(|j| poly.derivative(XYZ[i]).derivative(XYZ[j])))
}

/// The signed cofactor of entry `(r, c)`; cyclic indices carry the sign.
fn cofactor(m: &Matrix, r: usize, c: usize) -> SparsePoly<Z> {
    let (r1, r2) = ((r + 1) % 3, (r + 2) % 3);
    let (c1, c2) = ((c + 1) % 3, (c + 2) % 3);
    &(&m[r1][c1] * &m[r2][c2]) - &(&m[r1][c2] * &m[r2][c1])
}

/// The coefficient of `x^e0 y^e1 z^e2`, as a polynomial in the slots.
fn xyz_coefficient(poly: &SparsePoly<Z>, exponents: [u32; 3]) -> SparsePoly<Z> {
    SparsePoly::new(
        poly.iter()
            .filter(|(m, _)| XYZ.iter().zip(exponents).all(|(&v, e)| m.exponent(v) == e))
            .map(|(m, c)| (m.without(&XYZ), c.clone()))
            .collect(),
    )
}

fn slot_products(poly: &SparsePoly<Z>) -> Vec<SlotProduct> {
    poly.iter()
        .map(|(m, c)| {
            let factors = (0..10)
                .flat_map(|k| std::iter::repeat(k).take(m.exponent(slot(k)) as usize))
                .collect();
            let c = i64::try_from(c.as_inner()).expect("invariant coefficients fit in i64");
            (c, factors)
        })
        .collect()
}

fn derive_numerators() -> Numerators {
    let cubic = CUBIC_MONOMIALS
        .iter()
        .enumerate()
        .fold(SparsePoly::<Z>::zero(), |acc, (k, &[i, j])| {
            let m = Monomial::from_exponents(&[i, j, 3 - i - j]).mul(&Monomial::var(slot(k)));
            &acc + &SparsePoly::monomial(m, Z::one())
        });
    let m_f = hessian_matrix(&cubic);
    let hessian = (0..3).fold(SparsePoly::<Z>::zero(), |acc, c| {
        &acc + &(&m_f[0][c] * &cofactor(&m_f, 0, c))
    });
    let m_h = hessian_matrix(&hessian);

    // tr(adj(M_F) M_H) = -12 N4 * F, read at x^3 (slot 0)
    let mixed = (0..9).fold(SparsePoly::<Z>::zero(), |acc, n| {
        let (i, j) = (n / 3, n % 3);
        &acc + &(&cofactor(&m_f, i, j) * &m_h[i][j])
    });
    let n4 = xyz_coefficient(&mixed, [3, 0, 0])
        .div_monomial(&Monomial::var(slot(0)))
        .and_then(|p| p.try_div_int(-12))
        .expect("mixed Hessian determinant is a multiple of the cubic");

    // sum_k dN4/da_k * H_k = -8 N6
    let polar = CUBIC_MONOMIALS
        .iter()
        .enumerate()
        .fold(SparsePoly::<Z>::zero(), |acc, (k, &[i, j])| {
            &acc + &(&n4.derivative(slot(k)) * &xyz_coefficient(&hessian, [i, j, 3 - i - j]))
        });
    let n6 = polar
        .try_div_int(-8)
        .expect("polar of N4 along the Hessian is a multiple of N6");

    Numerators {
        s: slot_products(&n4),
        t: slot_products(&n6),
    }
}

/// A ternary cubic, stored by its ten coefficients.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TernaryCubic<K> {
    coefficients: [K; 10],
}

impl<K: Coefficient> TernaryCubic<K> {
    /// Creates a cubic from coefficients ordered as [`CUBIC_MONOMIALS`].
    #[must_use]
    pub fn new(coefficients: [K; 10]) -> Self {
        Self { coefficients }
    }

    /// Returns the coefficient of `x^i y^j z^(3-i-j)`.
    #[must_use]
    pub fn coefficient(&self, i: u32, j: u32) -> Option<&K> {
        CUBIC_MONOMIALS
            .iter()
            .position(|&m| m == [i, j])
            .map(|k| &self.coefficients[k])
    }

    /// The Aronhold invariant `S`, of degree 4.
    ///
    /// # Errors
    ///
    /// Fails if the ring cannot divide `N4` by 1296.
    pub fn s_invariant(&self) -> Result<K> {
        divide(&self.evaluate(&numerators().s), 1296)
    }

    /// The Aronhold invariant `T`, of degree 6.
    ///
    /// # Errors
    ///
    /// Fails if the ring cannot divide `N6` by 5832.
    pub fn t_invariant(&self) -> Result<K> {
        divide(&-self.evaluate(&numerators().t), 5832)
    }

    fn evaluate(&self, numerator: &[SlotProduct]) -> K {
        let a = &self.coefficients;
        numerator
            .iter()
            .filter(|(_, factors)| factors.iter().all(|&k| !a[k].is_zero()))
            .fold(K::zero(), |acc, (c, factors)| {
                let product = factors
                    .iter()
                    .fold(K::one(), |p, &k| p * a[k].clone());
                acc + product.mul_by_scalar(*c)
            })
    }
}

impl<R: Coefficient> TernaryCubic<SparsePoly<R>> {
    /// Reads the cubic off a polynomial in `x`, `y` and optionally `z`.
    ///
    /// Without `z` the polynomial is taken as the dehomogenization `z = 1`.
    /// Other variables are parameters and stay in the coefficients.
    ///
    /// # Errors
    ///
    /// [`crate::WeierstrassError::UnexpectedMonomials`] if `poly` is not a
    /// cubic in the given variables.
    pub fn from_polynomial(poly: &SparsePoly<R>, x: Var, y: Var, z: Option<Var>) -> Result<Self> {
        let homogeneous: Vec<[u32; 3]> = CUBIC_MONOMIALS
            .iter()
            .map(|&[i, j]| [i, j, 3 - i - j])
            .collect();
        let (variables, monomials): (Vec<Var>, Vec<&[u32]>) = match z {
            Some(z) => (vec![x, y, z], homogeneous.iter().map(|m| &m[..]).collect()),
            None => (vec![x, y], CUBIC_MONOMIALS.iter().map(|m| &m[..]).collect()),
        };

        let coefficients = extract_coefficients(poly, &monomials, &variables)?;
        let coefficients: [SparsePoly<R>; 10] = coefficients
            .try_into()
            .map_err(|_| crate::WeierstrassError::UnexpectedMonomials {
                terms: poly.to_string(),
            })?;
        Ok(Self::new(coefficients))
    }
}
