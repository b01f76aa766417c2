//! Property-based tests for Weierstrass reduction.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use toric_poly::{Monomial, SparsePoly, Var};
    use toric_rings::{Ring, Q};

    use crate::cubic::TernaryCubic;
    use crate::family::Family;

    fn family() -> impl Strategy<Value = Family> {
        prop_oneof![
            Just(Family::Cubic),
            Just(Family::Biquadric),
            Just(Family::WeightedQuartic),
        ]
    }

    // Small integer coefficients, one per lattice point of the largest polygon
    fn coefficients() -> impl Strategy<Value = Vec<i64>> {
        proptest::collection::vec(-3i64..=3, 10)
    }

    fn unit() -> impl Strategy<Value = Q> {
        (1i64..5, 1i64..5, any::<bool>()).prop_map(|(n, d, neg)| Q::new(if neg { -n } else { n }, d))
    }

    /// The dehomogenized curve of `family` in `x = Var(0)`, `y = Var(1)`.
    fn curve(family: Family, coefficients: &[i64]) -> SparsePoly<Q> {
        let terms = family
            .polygon()
            .lattice_points()
            .into_iter()
            .zip(coefficients)
            .map(|([i, j], &c)| {
                let exponents = [u32::try_from(i).unwrap(), u32::try_from(j).unwrap()];
                (Monomial::from_exponents(&exponents), Q::from_integer(c))
            })
            .collect();
        SparsePoly::new(terms)
    }

    /// Homogenizes an affine cubic in `x, y` with `z = Var(2)`.
    fn homogenize(affine: &SparsePoly<Q>) -> SparsePoly<Q> {
        let terms = affine
            .iter()
            .map(|(m, q)| {
                let (i, j) = (m.exponent(Var(0)), m.exponent(Var(1)));
                (Monomial::from_exponents(&[i, j, 3 - i - j]), q.clone())
            })
            .collect();
        SparsePoly::new(terms)
    }

    fn unimodular() -> impl Strategy<Value = [[i64; 2]; 2]> {
        prop_oneof![
            Just([[2, 1], [1, 1]]),
            Just([[0, 1], [1, 0]]),
            Just([[3, 2], [1, 1]]),
            Just([[1, -1], [0, 1]]),
            Just([[-1, 0], [0, 1]]),
        ]
    }

    /// Applies the exponent map `m` to every term of `p`, shifted back
    /// into the first quadrant.
    fn map_exponents(p: &SparsePoly<Q>, m: [[i64; 2]; 2]) -> SparsePoly<Q> {
        let images: Vec<[i64; 2]> = p
            .iter()
            .map(|(mono, _)| {
                let (i, j) = (i64::from(mono.exponent(Var(0))), i64::from(mono.exponent(Var(1))));
                [m[0][0] * i + m[0][1] * j, m[1][0] * i + m[1][1] * j]
            })
            .collect();
        let low = |axis: usize| images.iter().map(|e| e[axis]).min().unwrap_or(0);
        let (dx, dy) = (low(0), low(1));
        let terms = images
            .iter()
            .zip(p.iter())
            .map(|(e, (_, c))| {
                let exponents = [u32::try_from(e[0] - dx).unwrap(), u32::try_from(e[1] - dy).unwrap()];
                (Monomial::from_exponents(&exponents), c.clone())
            })
            .collect();
        SparsePoly::new(terms)
    }

    const XY: [Var; 2] = [Var(0), Var(1)];

    proptest! {
        #[test]
        fn scaling_weights_f_and_g(family in family(), c in coefficients(), lambda in unit()) {
            let p = curve(family, &c);
            let scaled = p.scale(&lambda);

            let form = family.weierstrass_form(&p, &XY).unwrap();
            let scaled_form = family.weierstrass_form(&scaled, &XY).unwrap();
            prop_assert_eq!(scaled_form.f, form.f.scale(&lambda.pow(4)));
            prop_assert_eq!(scaled_form.g, form.g.scale(&lambda.pow(6)));
        }

        #[test]
        fn translation_leaves_form_unchanged(
            family in family(),
            c in coefficients(),
            shift in -3i64..=3,
            shear in -2i64..=2,
        ) {
            let p = curve(family, &c);
            // x -> x + shift, plus x -> x + shear*y on plane cubics
            let mut image = &SparsePoly::var(Var(0)) + &SparsePoly::constant(Q::from_integer(shift));
            if family == Family::Cubic {
                image = &image + &SparsePoly::var(Var(1)).mul_by_scalar(shear);
            }
            let moved = p.substitute(Var(0), &image);

            let form = family.weierstrass_form(&p, &XY).unwrap();
            let moved_form = family.weierstrass_form(&moved, &XY).unwrap();
            prop_assert_eq!(moved_form, form);
        }

        #[test]
        fn homogeneous_and_affine_cubics_agree(c in coefficients()) {
            let affine = curve(Family::Cubic, &c);
            let projective = homogenize(&affine);

            let form = Family::Cubic.weierstrass_form(&affine, &XY).unwrap();
            let projective_form = Family::Cubic
                .weierstrass_form(&projective, &[Var(0), Var(1), Var(2)])
                .unwrap();
            prop_assert_eq!(projective_form, form);
        }

        #[test]
        fn classifier_matches_direct_reduction(family in family(), c in coefficients()) {
            let p = curve(family, &c);
            // Skip curves that lose a vertex and may land in a smaller family.
            let vertices = family.polygon().vertices().len();
            prop_assume!(c[..vertices].iter().all(|&v| v != 0));

            let direct = family.weierstrass_form(&p, &XY).unwrap();
            let classified = crate::weierstrass_form(&p, Some(&XY)).unwrap();
            prop_assert_eq!(classified.f, direct.f);
            prop_assert_eq!(classified.g, direct.g);
        }

        #[test]
        fn unimodular_maps_leave_form_unchanged(
            family in family(),
            c in coefficients(),
            m in unimodular(),
        ) {
            let p = curve(family, &c);
            let vertices = family.polygon().vertices().len();
            prop_assume!(c[..vertices].iter().all(|&v| v != 0));

            let direct = family.weierstrass_form(&p, &XY).unwrap();
            let moved = crate::weierstrass_form(&map_exponents(&p, m), Some(&XY)).unwrap();
            prop_assert_eq!(moved.f, direct.f);
            prop_assert_eq!(moved.g, direct.g);
        }

        #[test]
        fn aronhold_invariants_are_covariant(
            c in coefficients(),
            m in proptest::array::uniform9(-2i64..=2),
        ) {
            // S(C∘M) = det(M)^4 S(C) and T(C∘M) = det(M)^6 T(C)
            let det = m[0] * (m[4] * m[8] - m[5] * m[7]) - m[1] * (m[3] * m[8] - m[5] * m[6])
                + m[2] * (m[3] * m[7] - m[4] * m[6]);
            let p = homogenize(&curve(Family::Cubic, &c));
            let image = |i: usize| {
                (0..3).fold(SparsePoly::<Q>::zero(), |acc, j| {
                    &acc + &SparsePoly::var(Var(3 + j)).mul_by_scalar(m[3 * i + j])
                })
            };
            let moved = (0..3).fold(p.clone(), |q, i| q.substitute(Var(i), &image(i)));

            let before = TernaryCubic::from_polynomial(&p, Var(0), Var(1), Some(Var(2))).unwrap();
            let after = TernaryCubic::from_polynomial(&moved, Var(3), Var(4), Some(Var(5))).unwrap();
            let det = Q::from_integer(det);
            prop_assert_eq!(
                after.s_invariant().unwrap(),
                before.s_invariant().unwrap().scale(&det.pow(4))
            );
            prop_assert_eq!(
                after.t_invariant().unwrap(),
                before.t_invariant().unwrap().scale(&det.pow(6))
            );
        }
    }
}
