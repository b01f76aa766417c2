//! Embedding lattice point sets into the maximal reflexive polygons.

use thiserror::Error;

use crate::lattice::gcd;
use crate::polytope::LatticePolytope;
use crate::reference::ReflexivePolygon;

/// Errors that can occur during classification.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ClassifyError {
    /// There are no points to classify.
    #[error("the Newton polytope is empty")]
    Empty,
    /// The points span more than a plane.
    #[error("the Newton polytope has dimension {0}, at most 2 is supported")]
    DimensionTooLarge(usize),
    /// The polygon fits in none of the candidate reference polygons.
    #[error("the Newton polytope is not contained in a reflexive polygon")]
    NoEmbedding,
}

/// The result of a successful classification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Classification {
    /// The polytope of the input points.
    pub polytope: LatticePolytope,
    /// The reference polygon the points were embedded into.
    pub polygon: ReflexivePolygon,
    /// The image of each input point, in input order.
    pub images: Vec<[i64; 2]>,
}

/// Finds an affine unimodular embedding of a lattice point set into one
/// of the maximal reflexive polygons.
pub trait PolygonClassifier {
    /// Classifies `points`, all of the same length.
    ///
    /// # Errors
    ///
    /// Returns a [`ClassifyError`] when no embedding exists.
    fn classify(&self, points: &[Vec<i64>]) -> Result<Classification, ClassifyError>;
}

/// Embeds point sets into the reference polygons, trying them in a fixed
/// order.
///
/// The coordinate embedding (the first two coordinates, shifted so their
/// minima are zero) is tried first, so input that already sits in a
/// reference polygon keeps its shape. Otherwise an exhaustive search over
/// affine unimodular maps runs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReflexiveEmbedder {
    search_order: Vec<ReflexivePolygon>,
}

impl Default for ReflexiveEmbedder {
    fn default() -> Self {
        Self::new()
    }
}

impl ReflexiveEmbedder {
    /// Searches `P2`, then `P1xP1`, then `P112`.
    #[must_use]
    pub fn new() -> Self {
        Self::with_search_order(ReflexivePolygon::ALL.to_vec())
    }

    /// Searches only the given polygons, in the given order.
    #[must_use]
    pub fn with_search_order(search_order: Vec<ReflexivePolygon>) -> Self {
        Self { search_order }
    }

    /// Returns the search order.
    #[must_use]
    pub fn search_order(&self) -> &[ReflexivePolygon] {
        &self.search_order
    }

    fn embed_by_projection(
        &self,
        polytope: &LatticePolytope,
    ) -> Option<(ReflexivePolygon, Vec<[i64; 2]>)> {
        let mut images: Vec<[i64; 2]> = polytope
            .points()
            .iter()
            .map(|p| [p.first().copied().unwrap_or(0), p.get(1).copied().unwrap_or(0)])
            .collect();
        let min = [
            images.iter().map(|p| p[0]).min()?,
            images.iter().map(|p| p[1]).min()?,
        ];
        for image in &mut images {
            *image = sub(*image, min);
        }

        let local = polytope.local_coordinates();
        let v = polytope.vertices();
        let unimodular = match polytope.dimension() {
            0 => true,
            1 => {
                let d = sub(images[v[1]], images[v[0]]);
                gcd(d[0], d[1]) == (local[v[1]][0] - local[v[0]][0]).abs()
            }
            _ => {
                let q = (sub(local[v[1]], local[v[0]]), sub(local[v[2]], local[v[0]]));
                let m = (sub(images[v[1]], images[v[0]]), sub(images[v[2]], images[v[0]]));
                det(m.0, m.1).abs() == det(q.0, q.1).abs()
            }
        };
        if !unimodular {
            return None;
        }

        let polygon = self
            .search_order
            .iter()
            .copied()
            .find(|polygon| images.iter().all(|&p| polygon.contains(p)))?;
        Some((polygon, images))
    }

    fn embed_point(&self, polytope: &LatticePolytope) -> Option<(ReflexivePolygon, Vec<[i64; 2]>)> {
        let polygon = *self.search_order.first()?;
        let target = polygon.vertices()[0];
        Some((polygon, vec![target; polytope.points().len()]))
    }

    fn embed_segment(&self, polytope: &LatticePolytope) -> Option<(ReflexivePolygon, Vec<[i64; 2]>)> {
        let local = polytope.local_coordinates();
        let [lo, hi] = [polytope.vertices()[0], polytope.vertices()[1]];
        let start = local[lo][0];
        let length = local[hi][0] - start;

        for &polygon in &self.search_order {
            let points = polygon.lattice_points();
            for &r0 in &points {
                for &r1 in &points {
                    let d = [r1[0] - r0[0], r1[1] - r0[1]];
                    if d == [0, 0] || d[0] % length != 0 || d[1] % length != 0 {
                        continue;
                    }
                    let step = [d[0] / length, d[1] / length];
                    if gcd(step[0], step[1]) != 1 {
                        continue;
                    }
                    let images = local
                        .iter()
                        .map(|p| {
                            let k = p[0] - start;
                            [r0[0] + k * step[0], r0[1] + k * step[1]]
                        })
                        .collect();
                    return Some((polygon, images));
                }
            }
        }
        None
    }

    fn embed_polygon(&self, polytope: &LatticePolytope) -> Option<(ReflexivePolygon, Vec<[i64; 2]>)> {
        let local = polytope.local_coordinates();
        let vertices = polytope.vertices();
        let q0 = local[vertices[0]];
        let q1 = sub(local[vertices[1]], q0);
        let q2 = sub(local[vertices[2]], q0);
        let det_q = det(q1, q2);

        for &polygon in &self.search_order {
            let points = polygon.lattice_points();
            for &r0 in &points {
                for &r1 in &points {
                    for &r2 in &points {
                        let (m1, m2) = (sub(r1, r0), sub(r2, r0));
                        if det(m1, m2).abs() != det_q.abs() {
                            continue;
                        }
                        // A = [m1 m2] * adj([q1 q2]) / det_q
                        let a = [
                            [m1[0] * q2[1] - m2[0] * q1[1], m2[0] * q1[0] - m1[0] * q2[0]],
                            [m1[1] * q2[1] - m2[1] * q1[1], m2[1] * q1[0] - m1[1] * q2[0]],
                        ];
                        if a.iter().flatten().any(|x| x % det_q != 0) {
                            continue;
                        }
                        let a = a.map(|row| row.map(|x| x / det_q));
                        let map = |p: [i64; 2]| {
                            let v = sub(p, q0);
                            [
                                r0[0] + a[0][0] * v[0] + a[0][1] * v[1],
                                r0[1] + a[1][0] * v[0] + a[1][1] * v[1],
                            ]
                        };
                        if vertices.iter().all(|&i| polygon.contains(map(local[i]))) {
                            return Some((polygon, local.iter().map(|&p| map(p)).collect()));
                        }
                    }
                }
            }
        }
        None
    }
}

fn sub(a: [i64; 2], b: [i64; 2]) -> [i64; 2] {
    [a[0] - b[0], a[1] - b[1]]
}

fn det(a: [i64; 2], b: [i64; 2]) -> i64 {
    a[0] * b[1] - a[1] * b[0]
}

impl PolygonClassifier for ReflexiveEmbedder {
    fn classify(&self, points: &[Vec<i64>]) -> Result<Classification, ClassifyError> {
        let polytope = LatticePolytope::new(points.to_vec())?;

        let found = self
            .embed_by_projection(&polytope)
            .or_else(|| match polytope.dimension() {
                0 => self.embed_point(&polytope),
                1 => self.embed_segment(&polytope),
                _ => self.embed_polygon(&polytope),
            });
        let (polygon, images) = found.ok_or(ClassifyError::NoEmbedding)?;

        tracing::trace!(
            target: "polygon",
            dimension = polytope.dimension(),
            vertices = polytope.vertices().len(),
            %polygon,
            "embedded Newton polytope"
        );

        Ok(Classification {
            polytope,
            polygon,
            images,
        })
    }
}
