//! Property-based tests for polygon classification.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::classify::{PolygonClassifier, ReflexiveEmbedder};
    use crate::reference::ReflexivePolygon;

    /// A unimodular matrix built from shears and an optional reflection.
    fn unimodular() -> impl Strategy<Value = [[i64; 2]; 2]> {
        (-3i64..=3, -3i64..=3, any::<bool>()).prop_map(|(a, b, flip)| {
            // [[1, a], [0, 1]] * [[1, 0], [b, 1]]
            let m = [[1 + a * b, a], [b, 1]];
            if flip {
                [m[1], m[0]]
            } else {
                m
            }
        })
    }

    fn polygon() -> impl Strategy<Value = ReflexivePolygon> {
        prop_oneof![
            Just(ReflexivePolygon::P2),
            Just(ReflexivePolygon::P1xP1),
            Just(ReflexivePolygon::P112),
        ]
    }

    proptest! {
        #[test]
        fn classification_is_affine_invariant(
            polygon in polygon(),
            m in unimodular(),
            shift in (-5i64..5, -5i64..5),
            lift in 0usize..2,
        ) {
            let points: Vec<Vec<i64>> = polygon
                .lattice_points()
                .iter()
                .map(|&[x, y]| {
                    let u = m[0][0] * x + m[0][1] * y + shift.0;
                    let v = m[1][0] * x + m[1][1] * y + shift.1;
                    // Optionally embed the plane in Z^3 as (u, v, u + v)
                    if lift == 1 { vec![u, v, u + v] } else { vec![u, v] }
                })
                .collect();

            let found = ReflexiveEmbedder::new().classify(&points).unwrap();
            prop_assert_eq!(found.polygon, polygon);

            let mut images = found.images.clone();
            images.sort_unstable();
            let mut expected = polygon.lattice_points();
            expected.sort_unstable();
            prop_assert_eq!(images, expected);
        }
    }
}
