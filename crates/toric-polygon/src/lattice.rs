//! Coordinates on the affine lattice spanned by a point set.
//!
//! The differences `p - p0` are reduced by unimodular integer column
//! operations, the same elementary moves used for Smith normal form. If
//! `V` is the accumulated transform, `(p - p0) * V` vanishes beyond the
//! rank `r`, and its first `r` entries are coordinates of `p` in a basis of
//! the saturated lattice `Z^n ∩ aff(points)`.

/// Extended Euclidean algorithm on `i64`.
///
/// Returns `(g, s, t)` with `g = s*a + t*b` and `g >= 0`.
#[must_use]
pub fn extended_gcd(a: i64, b: i64) -> (i64, i64, i64) {
    let (mut old_r, mut r) = (a, b);
    let (mut old_s, mut s) = (1i64, 0i64);
    let (mut old_t, mut t) = (0i64, 1i64);

    while r != 0 {
        let q = old_r / r;
        (old_r, r) = (r, old_r - q * r);
        (old_s, s) = (s, old_s - q * s);
        (old_t, t) = (t, old_t - q * t);
    }

    if old_r < 0 {
        (-old_r, -old_s, -old_t)
    } else {
        (old_r, old_s, old_t)
    }
}

/// Greatest common divisor of two integers, always non-negative.
#[must_use]
pub fn gcd(a: i64, b: i64) -> i64 {
    extended_gcd(a, b).0
}

/// A basis of the saturated affine lattice through a set of points.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AffineLattice {
    origin: Vec<i64>,
    transform: Vec<Vec<i64>>,
    rank: usize,
}

impl AffineLattice {
    /// Computes the affine lattice spanned by `points`.
    ///
    /// Returns `None` for an empty point set. All points must have the
    /// same length.
    #[must_use]
    pub fn spanned_by(points: &[Vec<i64>]) -> Option<Self> {
        let origin = points.first()?.clone();
        let n = origin.len();

        let mut rows: Vec<Vec<i64>> = points
            .iter()
            .map(|p| p.iter().zip(&origin).map(|(a, b)| a - b).collect())
            .collect();
        let mut transform: Vec<Vec<i64>> = (0..n)
            .map(|i| (0..n).map(|j| i64::from(i == j)).collect())
            .collect();

        let mut pivot = 0;
        for i in 0..rows.len() {
            if pivot == n {
                break;
            }
            for j in pivot + 1..n {
                let (a, b) = (rows[i][pivot], rows[i][j]);
                if b == 0 {
                    continue;
                }
                let (g, s, t) = extended_gcd(a, b);
                let (bg, ag) = (b / g, a / g);
                // [col_pivot, col_j] <- [s*col_pivot + t*col_j, -b/g*col_pivot + a/g*col_j]
                combine_columns(&mut rows, pivot, j, (s, t, -bg, ag));
                combine_columns(&mut transform, pivot, j, (s, t, -bg, ag));
            }
            if rows[i][pivot] != 0 {
                pivot += 1;
            }
        }

        Some(Self {
            origin,
            transform,
            rank: pivot,
        })
    }

    /// Returns the dimension of the affine span.
    #[must_use]
    pub fn rank(&self) -> usize {
        self.rank
    }

    /// Coordinates of `p` in the lattice basis.
    ///
    /// Meaningful only for points of the affine span.
    #[must_use]
    pub fn coordinates(&self, p: &[i64]) -> Vec<i64> {
        (0..self.rank)
            .map(|col| {
                p.iter()
                    .zip(&self.origin)
                    .zip(&self.transform)
                    .map(|((a, b), row)| (a - b) * row[col])
                    .sum()
            })
            .collect()
    }
}

/// Replaces columns `c` and `d` by `s*c + t*d` and `u*c + v*d`.
fn combine_columns(matrix: &mut [Vec<i64>], c: usize, d: usize, (s, t, u, v): (i64, i64, i64, i64)) {
    for row in matrix.iter_mut() {
        let (x, y) = (row[c], row[d]);
        row[c] = s * x + t * y;
        row[d] = u * x + v * y;
    }
}
