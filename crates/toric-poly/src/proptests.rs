//! Property-based tests for polynomial arithmetic.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::monomial::{Monomial, Var};
    use crate::sparse::SparsePoly;
    use toric_rings::{ExactDivision, Q};

    // Strategy for generating small rational coefficients
    fn small_coeff() -> impl Strategy<Value = Q> {
        (-20i64..20i64).prop_map(Q::from_integer)
    }

    // Strategy for small monomials in three variables
    fn small_monomial() -> impl Strategy<Value = Monomial> {
        proptest::collection::vec(0u32..3u32, 3).prop_map(|e| Monomial::from_exponents(&e))
    }

    // Strategy for generating small polynomials (at most 4 terms)
    fn small_poly() -> impl Strategy<Value = SparsePoly<Q>> {
        proptest::collection::vec((small_monomial(), small_coeff()), 0..=4).prop_map(SparsePoly::new)
    }

    // Strategy for generating non-zero polynomials
    fn nonzero_poly() -> impl Strategy<Value = SparsePoly<Q>> {
        small_poly().prop_filter("polynomial must be non-zero", |p| !p.is_zero())
    }

    proptest! {
        // Polynomial ring axioms

        #[test]
        fn poly_add_commutative(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(a.add(&b), b.add(&a));
        }

        #[test]
        fn poly_mul_commutative(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(a.mul(&b), b.mul(&a));
        }

        #[test]
        fn poly_mul_associative(a in small_poly(), b in small_poly(), c in small_poly()) {
            prop_assert_eq!(a.mul(&b).mul(&c), a.mul(&b.mul(&c)));
        }

        #[test]
        fn poly_distributive(a in small_poly(), b in small_poly(), c in small_poly()) {
            // a * (b + c) = a * b + a * c
            let left = a.mul(&b.add(&c));
            let right = a.mul(&b).add(&a.mul(&c));
            prop_assert_eq!(left, right);
        }

        #[test]
        fn poly_additive_inverse(a in small_poly()) {
            prop_assert!(a.add(&a.neg()).is_zero());
        }

        #[test]
        fn poly_div_exact_recovers_factor(a in small_poly(), b in nonzero_poly()) {
            prop_assert_eq!(a.mul(&b).div_exact(&b), Some(a));
        }

        #[test]
        fn poly_div_monomial_inverts_mul(a in small_poly(), m in small_monomial()) {
            let shifted = a.mul_monomial(&m, &Q::from_integer(1));
            prop_assert_eq!(shifted.div_monomial(&m), Some(a));
        }

        #[test]
        fn poly_try_div_int_inverts_scaling(a in small_poly(), d in 1i64..30i64) {
            let scaled = a.scale(&Q::from_integer(d));
            prop_assert_eq!(scaled.try_div_int(d), Some(a));
        }

        #[test]
        fn poly_substitute_is_ring_map(a in small_poly(), b in small_poly(), v in small_poly()) {
            // Substitution commutes with multiplication
            let left = a.mul(&b).substitute(Var(1), &v);
            let right = a.substitute(Var(1), &v).mul(&b.substitute(Var(1), &v));
            prop_assert_eq!(left, right);
        }
    }
}
