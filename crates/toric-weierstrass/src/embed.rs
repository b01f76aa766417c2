//! Rewriting a curve in the coordinates of its reference polygon.

use toric_poly::{Monomial, SparsePoly, Var};
use toric_polygon::ClassifyError;
use toric_rings::Ring;

use crate::error::{Result, WeierstrassError};
use crate::support::Support;

/// Moves every support entry to its image in the reference polygon.
///
/// The entry with exponents `images[k]` is written as
/// `coefficient * x0^a * x1^b`, so the Newton polygon of the result, taken
/// in `(x0, x1)`, is the image of the input's. `images` must list one point
/// per support entry, in the support's order.
///
/// # Errors
///
/// [`WeierstrassError::NotReflexive`] if an image has a negative
/// coordinate or the counts disagree.
pub fn canonical_form<R: Ring>(
    support: &Support<R>,
    images: &[[i64; 2]],
    x0: Var,
    x1: Var,
) -> Result<SparsePoly<R>> {
    if images.len() != support.len() {
        return Err(ClassifyError::NoEmbedding.into());
    }

    let mut terms = Vec::new();
    for ((_, coefficient), &[a, b]) in support.iter().zip(images) {
        let (a, b) = match (u32::try_from(a), u32::try_from(b)) {
            (Ok(a), Ok(b)) => (a, b),
            _ => return Err(WeierstrassError::NotReflexive(ClassifyError::NoEmbedding)),
        };
        let m = Monomial::from_var_exponents(&[x0, x1], &[a, b]);
        terms.extend(coefficient.iter().map(|(cm, c)| (cm.mul(&m), c.clone())));
    }
    Ok(SparsePoly::new(terms))
}

#[cfg(test)]
mod tests {
    use super::*;
    use toric_poly::PolyRing;
    use toric_rings::Q;

    #[test]
    fn test_parameters_survive_reembedding() {
        let ring = PolyRing::new(&["x", "y", "a"]);
        let g = ring.gens::<Q>();
        let (x, y, a) = (&g[0], &g[1], &g[2]);

        // a*x^2*y + x*y^2: shift down by (1, 1)
        let p = &(a * &(&x.pow(2) * y)) + &(x * &y.pow(2));
        let vars = [Var(0), Var(1)];
        let support = Support::extract(&p, &vars);
        assert_eq!(support.lattice_points(), vec![vec![1, 2], vec![2, 1]]);

        let q = canonical_form(&support, &[[0, 1], [1, 0]], Var(0), Var(1)).unwrap();
        assert_eq!(q, &(a * x) + y);
    }

    #[test]
    fn test_negative_image() {
        let ring = PolyRing::new(&["x", "y"]);
        let g = ring.gens::<Q>();
        let support = Support::extract(&(&g[0] + &g[1]), &ring.vars());

        let err = canonical_form(&support, &[[0, 1], [-1, 0]], Var(0), Var(1)).unwrap_err();
        assert_eq!(err, WeierstrassError::NotReflexive(ClassifyError::NoEmbedding));
    }
}
