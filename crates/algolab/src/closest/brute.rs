//! Exhaustive O(k^2) scan: recursion base case and test oracle.

use super::types::{dist, Closest, ClosestError, DistStats, Point};

/// Compare every pair and return the minimum. Exact ties keep the first pair
/// found in index order (strict `<`), so the result is deterministic.
///
/// Public so tests can use it as the oracle against the recursive kernel.
pub fn brute_force(points: &[Point]) -> Result<Closest, ClosestError> {
    if points.len() < 2 {
        return Err(ClosestError::InsufficientPoints { got: points.len() });
    }
    let mut stats = DistStats::default();
    Ok(scan(points, &mut stats))
}

/// Scan shared with the recursion base case. Caller guarantees `len >= 2`.
pub(super) fn scan(points: &[Point], stats: &mut DistStats) -> Closest {
    debug_assert!(points.len() >= 2, "base case needs at least two points");
    let mut best = Closest {
        dist: f64::INFINITY,
        pair: (points[0], points[1]),
    };
    for i in 0..points.len() {
        for j in (i + 1)..points.len() {
            stats.dist_evals += 1;
            let d = dist(points[i], points[j]);
            if d < best.dist {
                best = Closest {
                    dist: d,
                    pair: (points[i], points[j]),
                };
            }
        }
    }
    best
}
