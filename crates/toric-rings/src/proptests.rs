//! Property-based tests for the coefficient rings.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::{ExactDivision, Field, FiniteField, Ring, Q, Z};

    type F101 = FiniteField<101>;

    fn small_rational() -> impl Strategy<Value = Q> {
        (-50i64..50i64, 1i64..20i64).prop_map(|(n, d)| Q::new(n, d))
    }

    fn small_divisor() -> impl Strategy<Value = i64> {
        (-40i64..40i64).prop_filter("divisor must be non-zero", |d| *d != 0)
    }

    proptest! {
        #[test]
        fn q_distributive(a in small_rational(), b in small_rational(), c in small_rational()) {
            let left = a.clone() * (b.clone() + c.clone());
            let right = a.clone() * b + a * c;
            prop_assert_eq!(left, right);
        }

        #[test]
        fn q_mul_by_scalar_is_multiplication(a in small_rational(), n in -100i64..100i64) {
            prop_assert_eq!(a.mul_by_scalar(n), a * Q::from_integer(n));
        }

        #[test]
        fn q_division_inverts_scaling(a in small_rational(), d in small_divisor()) {
            let q = a.try_div_int(d).unwrap();
            prop_assert_eq!(q.mul_by_scalar(d), a);
        }

        #[test]
        fn z_division_is_exact_or_none(a in -1000i64..1000i64, d in small_divisor()) {
            match Z::new(a).try_div_int(d) {
                Some(q) => prop_assert_eq!(q.mul_by_scalar(d), Z::new(a)),
                None => prop_assert!(a % d != 0),
            }
        }

        #[test]
        fn z_pow_matches_i64(a in -9i64..9i64, n in 0u32..8u32) {
            prop_assert_eq!(Z::new(a).pow(n), Z::new(a.pow(n)));
        }

        #[test]
        fn fp_inverse(v in 1u64..101u64) {
            let a = F101::new(v);
            prop_assert!((a * a.inv().unwrap()).is_one());
        }

        #[test]
        fn fp_from_int_is_reduction(n in any::<i64>()) {
            let expected = u64::try_from(i128::from(n).rem_euclid(101)).unwrap();
            prop_assert_eq!(F101::from_int(n).value(), expected);
        }
    }
}
