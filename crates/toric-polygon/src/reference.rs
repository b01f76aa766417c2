//! The three maximal reflexive polygons.
//!
//! Every two-dimensional reflexive polygon is a lattice subpolygon of one
//! of these, up to affine unimodular transformations. Each is the Newton
//! polygon of the generic anticanonical section of a toric surface.

/// A maximal reflexive polygon, in its standard position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ReflexivePolygon {
    /// `conv{(0,0), (3,0), (0,3)}`: plane cubics in `P^2`.
    P2,
    /// `conv{(0,0), (2,0), (0,2), (2,2)}`: biquadrics in `P^1 x P^1`.
    P1xP1,
    /// `conv{(0,0), (4,0), (0,2)}`: quartics in `P^2[1,1,2]`.
    P112,
}

impl ReflexivePolygon {
    /// All three polygons, in the default search order.
    pub const ALL: [Self; 3] = [Self::P2, Self::P1xP1, Self::P112];

    /// Returns the vertices in counter-clockwise order.
    #[must_use]
    pub fn vertices(self) -> &'static [[i64; 2]] {
        match self {
            Self::P2 => &[[0, 0], [3, 0], [0, 3]],
            Self::P1xP1 => &[[0, 0], [2, 0], [2, 2], [0, 2]],
            Self::P112 => &[[0, 0], [4, 0], [0, 2]],
        }
    }

    /// Returns true if `p` lies in the polygon.
    #[must_use]
    pub fn contains(self, p: [i64; 2]) -> bool {
        let [x, y] = p;
        match self {
            Self::P2 => x >= 0 && y >= 0 && x + y <= 3,
            Self::P1xP1 => (0..=2).contains(&x) && (0..=2).contains(&y),
            Self::P112 => x >= 0 && y >= 0 && x + 2 * y <= 4,
        }
    }

    /// Returns all lattice points: the vertices first, then the remaining
    /// points in lexicographic order.
    #[must_use]
    pub fn lattice_points(self) -> Vec<[i64; 2]> {
        let vertices = self.vertices();
        let mut points = vertices.to_vec();
        for x in 0..=4 {
            for y in 0..=3 {
                let p = [x, y];
                if self.contains(p) && !vertices.contains(&p) {
                    points.push(p);
                }
            }
        }
        points
    }
}

impl std::fmt::Display for ReflexivePolygon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::P2 => "P2",
            Self::P1xP1 => "P1xP1",
            Self::P112 => "P2_112",
        };
        write!(f, "{name}")
    }
}
