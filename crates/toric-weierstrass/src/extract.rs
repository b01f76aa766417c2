//! Coefficients of a fixed monomial basis.

use rustc_hash::FxHashMap;
use toric_poly::{Monomial, SparsePoly, Var};
use toric_rings::Ring;

use crate::error::{Result, WeierstrassError};

/// Extracts the coefficients of `monomials` from `poly`.
///
/// Each requested monomial is an exponent tuple over `variables`; its
/// coefficient is a polynomial in the remaining variables, or zero if the
/// monomial does not occur. Coefficients come back in request order.
///
/// # Errors
///
/// [`WeierstrassError::UnexpectedMonomials`] if `poly` contains a monomial
/// in `variables` that was not requested.
pub fn extract_coefficients<R: Ring>(
    poly: &SparsePoly<R>,
    monomials: &[&[u32]],
    variables: &[Var],
) -> Result<Vec<SparsePoly<R>>> {
    let mut groups: FxHashMap<Vec<u32>, Vec<(Monomial, R)>> = FxHashMap::default();
    for (m, c) in poly.iter() {
        groups
            .entry(m.project(variables))
            .or_default()
            .push((m.without(variables), c.clone()));
    }

    let coefficients = monomials
        .iter()
        .map(|&exponents| {
            groups
                .remove(exponents)
                .map_or_else(SparsePoly::zero, SparsePoly::new)
        })
        .collect();

    if groups.is_empty() {
        return Ok(coefficients);
    }

    let leftover: Vec<(Monomial, R)> = poly
        .iter()
        .filter(|(m, _)| groups.contains_key(&m.project(variables)))
        .map(|(m, c)| (m.clone(), c.clone()))
        .collect();
    Err(WeierstrassError::UnexpectedMonomials {
        terms: SparsePoly::new(leftover).to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use toric_poly::PolyRing;
    use toric_rings::{Ring, Q};

    #[test]
    fn test_extract_quadratic() {
        let ring = PolyRing::new(&["x", "y", "t"]);
        let g = ring.gens::<Q>();
        let (x, y, t) = (&g[0], &g[1], &g[2]);

        // (x + 1)*y^2 + 3*x*y*t, coefficients of t^2, y*t, y^2
        let p = &(&(x + &SparsePoly::one()) * &y.pow(2)) + &(x * &(y * t)).mul_by_scalar(3);
        let c = extract_coefficients(&p, &[&[0, 2], &[1, 1], &[2, 0]], &[Var(1), Var(2)]).unwrap();

        assert!(c[0].is_zero());
        assert_eq!(c[1], x.mul_by_scalar(3));
        assert_eq!(c[2], x + &SparsePoly::one());
    }

    #[test]
    fn test_unexpected_monomial() {
        let ring = PolyRing::new(&["x", "y"]);
        let g = ring.gens::<Q>();
        let (x, y) = (&g[0], &g[1]);

        let p = &(x + y) + &(x * y);
        let err = extract_coefficients(&p, &[&[1, 0], &[0, 1]], &[Var(0), Var(1)]).unwrap_err();
        assert_eq!(
            err,
            WeierstrassError::UnexpectedMonomials {
                terms: "x*y".to_string()
            }
        );
    }
}
