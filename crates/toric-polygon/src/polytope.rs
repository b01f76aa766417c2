//! Lattice polytopes of dimension at most two.

use crate::classify::ClassifyError;
use crate::lattice::AffineLattice;

/// The convex hull of a finite set of lattice points, together with the
/// points' coordinates in its own affine lattice.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LatticePolytope {
    points: Vec<Vec<i64>>,
    local: Vec<[i64; 2]>,
    dimension: usize,
    vertices: Vec<usize>,
}

impl LatticePolytope {
    /// Builds the polytope of `points`.
    ///
    /// # Errors
    ///
    /// [`ClassifyError::Empty`] for no points and
    /// [`ClassifyError::DimensionTooLarge`] if the affine span has
    /// dimension greater than two.
    pub fn new(points: Vec<Vec<i64>>) -> Result<Self, ClassifyError> {
        let lattice = AffineLattice::spanned_by(&points).ok_or(ClassifyError::Empty)?;
        let dimension = lattice.rank();
        if dimension > 2 {
            return Err(ClassifyError::DimensionTooLarge(dimension));
        }

        let local: Vec<[i64; 2]> = points
            .iter()
            .map(|p| {
                let c = lattice.coordinates(p);
                [c.first().copied().unwrap_or(0), c.get(1).copied().unwrap_or(0)]
            })
            .collect();

        let vertices = match dimension {
            0 => vec![0],
            1 => segment_ends(&local),
            _ => convex_hull(&local),
        };

        Ok(Self {
            points,
            local,
            dimension,
            vertices,
        })
    }

    /// Returns the points the polytope was built from.
    #[must_use]
    pub fn points(&self) -> &[Vec<i64>] {
        &self.points
    }

    /// Returns the coordinates of each point in the affine lattice basis.
    ///
    /// Unused trailing coordinates are zero.
    #[must_use]
    pub fn local_coordinates(&self) -> &[[i64; 2]] {
        &self.local
    }

    /// Returns the dimension of the affine span.
    #[must_use]
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Returns the indices of the vertices, counter-clockwise in local
    /// coordinates for polygons.
    #[must_use]
    pub fn vertices(&self) -> &[usize] {
        &self.vertices
    }
}

fn segment_ends(local: &[[i64; 2]]) -> Vec<usize> {
    let min = (0..local.len()).min_by_key(|&i| local[i][0]).unwrap_or(0);
    let max = (0..local.len()).max_by_key(|&i| local[i][0]).unwrap_or(0);
    vec![min, max]
}

fn cross(o: [i64; 2], a: [i64; 2], b: [i64; 2]) -> i64 {
    (a[0] - o[0]) * (b[1] - o[1]) - (a[1] - o[1]) * (b[0] - o[0])
}

/// Andrew's monotone chain; collinear boundary points are dropped.
fn convex_hull(local: &[[i64; 2]]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..local.len()).collect();
    order.sort_by_key(|&i| local[i]);
    order.dedup_by_key(|i| local[*i]);

    let half = |indices: &mut dyn Iterator<Item = usize>| {
        let mut chain: Vec<usize> = Vec::new();
        for i in indices {
            while chain.len() >= 2
                && cross(local[chain[chain.len() - 2]], local[chain[chain.len() - 1]], local[i]) <= 0
            {
                chain.pop();
            }
            chain.push(i);
        }
        chain.pop();
        chain
    };

    let mut hull = half(&mut order.iter().copied());
    hull.extend(half(&mut order.iter().rev().copied()));
    hull
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_triangle_vertices() {
        let points = vec![
            vec![3, 0, 0],
            vec![0, 3, 0],
            vec![0, 0, 3],
            vec![1, 1, 1],
            vec![2, 1, 0],
        ];
        let polytope = LatticePolytope::new(points).unwrap();
        assert_eq!(polytope.dimension(), 2);
        let mut vertices = polytope.vertices().to_vec();
        vertices.sort_unstable();
        assert_eq!(vertices, vec![0, 1, 2]);
    }

    #[test]
    fn test_square_vertices_counter_clockwise() {
        let points = vec![vec![0, 0], vec![1, 0], vec![2, 0], vec![2, 2], vec![0, 2], vec![1, 1]];
        let polytope = LatticePolytope::new(points).unwrap();
        let v = polytope.vertices();
        assert_eq!(v.len(), 4);
        let local = polytope.local_coordinates();
        for k in 0..4 {
            let (a, b, c) = (local[v[k]], local[v[(k + 1) % 4]], local[v[(k + 2) % 4]]);
            assert!(cross(a, b, c) > 0);
        }
    }

    #[test]
    fn test_segment_and_point() {
        let segment = LatticePolytope::new(vec![vec![1, 1], vec![3, 3], vec![2, 2]]).unwrap();
        assert_eq!(segment.dimension(), 1);
        let mut ends = segment.vertices().to_vec();
        ends.sort_unstable();
        assert_eq!(ends, vec![0, 1]);

        let point = LatticePolytope::new(vec![vec![1, 1, 1]]).unwrap();
        assert_eq!(point.dimension(), 0);
        assert_eq!(point.vertices(), &[0]);
    }

    #[test]
    fn test_rejections() {
        assert_eq!(LatticePolytope::new(vec![]), Err(ClassifyError::Empty));
        let simplex = vec![vec![0, 0, 0], vec![1, 0, 0], vec![0, 1, 0], vec![0, 0, 1]];
        assert_eq!(LatticePolytope::new(simplex), Err(ClassifyError::DimensionTooLarge(3)));
    }
}
