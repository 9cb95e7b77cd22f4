//! Presort, recursion and strip merge.

use super::brute;
use super::types::{cmp_xy, cmp_yx, dist, Closest, ClosestError, DistStats, Point};

/// Closest pair of `points`, O(n log n).
///
/// Fails when fewer than two points are supplied; otherwise the returned
/// distance is always achieved by the returned pair. Exact ties resolve
/// deterministically (left subproblem, then first found in scan order).
pub fn closest_pair(points: &[Point]) -> Result<Closest, ClosestError> {
    closest_pair_with_stats(points).map(|(best, _)| best)
}

/// Same as [`closest_pair`] but also reports the distance-evaluation count,
/// so tests can assert the n log n bound instead of only output correctness.
pub fn closest_pair_with_stats(points: &[Point]) -> Result<(Closest, DistStats), ClosestError> {
    if points.len() < 2 {
        return Err(ClosestError::InsufficientPoints { got: points.len() });
    }
    // Presort exactly once; the recursion never re-sorts.
    let mut px: Vec<Point> = points.to_vec();
    px.sort_by(cmp_xy);
    let mut py: Vec<usize> = (0..px.len()).collect();
    py.sort_by(|&a, &b| cmp_yx(&px[a], &px[b]));

    let mut stats = DistStats::default();
    let best = recurse(&px, 0, px.len(), &py, &mut stats);
    Ok((best, stats))
}

/// Solve the subproblem `px[lo..hi]`. `py` holds the same index set in global
/// y-order; it is stably partitioned (never re-sorted) on the way down, which
/// keeps each recursion level at O(n) total work.
fn recurse(px: &[Point], lo: usize, hi: usize, py: &[usize], stats: &mut DistStats) -> Closest {
    if hi - lo <= 3 {
        return brute::scan(&px[lo..hi], stats);
    }

    // Midpoint index split: balanced depth even for degenerate coordinates.
    let mid = lo + (hi - lo) / 2;
    let mid_x = px[mid - 1].x;

    // Half membership is structural (index below/above the split), so points
    // sharing mid_x partition unambiguously.
    let mut left_y = Vec::with_capacity(mid - lo);
    let mut right_y = Vec::with_capacity(hi - mid);
    for &i in py {
        if i < mid {
            left_y.push(i);
        } else {
            right_y.push(i);
        }
    }

    let left = recurse(px, lo, mid, &left_y, stats);
    let right = recurse(px, mid, hi, &right_y, stats);
    // `<=` keeps the left pair on exact ties.
    let mut best = if left.dist <= right.dist { left } else { right };

    // Strip within best.dist of the split line, taken from the full y-view of
    // this subproblem, hence already y-ordered.
    let strip: Vec<usize> = py
        .iter()
        .copied()
        .filter(|&i| (px[i].x - mid_x).abs() < best.dist)
        .collect();

    // Any two strip points closer than best.dist lie within 7 positions of
    // each other in y-order: at most 8 points fit in a d x 2d box without two
    // of them being closer than d.
    for a in 0..strip.len() {
        let stop = strip.len().min(a + 8);
        for b in (a + 1)..stop {
            stats.dist_evals += 1;
            let d = dist(px[strip[a]], px[strip[b]]);
            if d < best.dist {
                best = Closest {
                    dist: d,
                    pair: (px[strip[a]], px[strip[b]]),
                };
            }
        }
    }
    best
}
