//! Weighted homogeneity checks.

use toric_poly::{SparsePoly, Var};
use toric_rings::Ring;

use crate::error::{Result, WeierstrassError};

/// A grading of the curve variables and the degree a family requires.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Grading {
    /// One weight per variable.
    pub weights: &'static [i64],
    /// The required weighted degree of every term.
    pub total: i64,
}

/// The weighted degree of a monomial, given by its exponents in `variables`.
fn weighted_degree(exponents: &[u32], weights: &[i64]) -> i64 {
    exponents
        .iter()
        .zip(weights)
        .map(|(&e, &w)| i64::from(e) * w)
        .sum()
}

/// Checks that every term of `poly` has the same weighted degree, equal to
/// `total` when one is given.
///
/// # Errors
///
/// [`WeierstrassError::NotHomogeneous`] naming the failing weights.
pub fn check_homogeneity<R: Ring>(
    poly: &SparsePoly<R>,
    variables: &[Var],
    weights: &[i64],
    total: Option<i64>,
) -> Result<()> {
    let mut degrees = poly
        .iter()
        .map(|(m, _)| weighted_degree(&m.project(variables), weights));

    let expected = match total {
        Some(total) => Some(total),
        None => degrees.next(),
    };
    match expected {
        Some(d) if degrees.any(|x| x != d) => Err(WeierstrassError::NotHomogeneous {
            weights: weights.to_vec(),
        }),
        _ => Ok(()),
    }
}

/// Checks every grading in turn.
///
/// # Errors
///
/// The first failing grading, as in [`check_homogeneity`].
pub fn check_gradings<R: Ring>(poly: &SparsePoly<R>, variables: &[Var], gradings: &[Grading]) -> Result<()> {
    gradings
        .iter()
        .try_for_each(|g| check_homogeneity(poly, variables, g.weights, Some(g.total)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use toric_poly::PolyRing;
    use toric_rings::Q;

    #[test]
    fn test_cubic_grading() {
        let ring = PolyRing::new(&["x", "y", "z"]);
        let g = ring.gens::<Q>();
        let vars = ring.vars();

        let cubic = &(&g[0].pow(3) + &g[1].pow(3)) + &(&g[0] * &(&g[1] * &g[2]));
        assert!(check_homogeneity(&cubic, &vars, &[1, 1, 1], Some(3)).is_ok());
        assert!(check_homogeneity(&cubic, &vars, &[1, 1, 1], None).is_ok());

        // Homogeneous, but of the wrong degree.
        let quartic = &g[0].pow(4) + &g[2].pow(4);
        assert!(check_homogeneity(&quartic, &vars, &[1, 1, 1], None).is_ok());
        assert_eq!(
            check_homogeneity(&quartic, &vars, &[1, 1, 1], Some(3)),
            Err(WeierstrassError::NotHomogeneous {
                weights: vec![1, 1, 1]
            })
        );

        let mixed = &g[0].pow(3) + &g[1];
        assert!(check_homogeneity(&mixed, &vars, &[1, 1, 1], None).is_err());
    }

    #[test]
    fn test_negative_weights() {
        let ring = PolyRing::new(&["x", "y", "z", "t"]);
        let g = ring.gens::<Q>();
        let vars = ring.vars();

        // x^4*t^2 has weight 4 - 4 = 0 for (1, 0, 1, -2)
        let p = &(&g[0].pow(4) * &g[3].pow(2)) + &g[1].pow(2);
        let gradings = [
            Grading { weights: &[1, 0, 1, -2], total: 0 },
            Grading { weights: &[0, 1, 0, 1], total: 2 },
        ];
        assert!(check_gradings(&p, &vars, &gradings).is_ok());
        assert!(check_gradings(&(&p + &g[2]), &vars, &gradings).is_err());
    }
}
