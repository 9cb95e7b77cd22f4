//! Point, result and error types plus the distance primitive.

use std::cmp::Ordering;

use nalgebra::Vector2;
use thiserror::Error;

/// Planar point. Points are opaque coordinate values, not identities:
/// duplicate pairs are legal and stay distinct elements of the input multiset.
pub type Point = Vector2<f64>;

/// Minimum distance together with the (unordered) pair achieving it.
#[derive(Clone, Copy, Debug)]
pub struct Closest {
    pub dist: f64,
    pub pair: (Point, Point),
}

/// Counters threaded through a single run, for complexity assertions.
#[derive(Clone, Copy, Debug, Default)]
pub struct DistStats {
    /// Number of calls to the distance primitive.
    pub dist_evals: u64,
}

#[derive(Debug, Error)]
pub enum ClosestError {
    /// No pair can be formed from fewer than two points.
    #[error("need at least two points, got {got}")]
    InsufficientPoints { got: usize },
}

/// Euclidean distance. `hypot` avoids overflow/underflow of the naive
/// square-then-sqrt form on large coordinate magnitudes.
#[inline]
pub fn dist(p: Point, q: Point) -> f64 {
    (p.x - q.x).hypot(p.y - q.y)
}

/// Lexicographic order on (x, y). Only used for sorting.
#[inline]
pub(super) fn cmp_xy(a: &Point, b: &Point) -> Ordering {
    match a.x.partial_cmp(&b.x).unwrap_or(Ordering::Equal) {
        Ordering::Equal => a.y.partial_cmp(&b.y).unwrap_or(Ordering::Equal),
        o => o,
    }
}

/// Lexicographic order on (y, x). Only used for sorting.
#[inline]
pub(super) fn cmp_yx(a: &Point, b: &Point) -> Ordering {
    match a.y.partial_cmp(&b.y).unwrap_or(Ordering::Equal) {
        Ordering::Equal => a.x.partial_cmp(&b.x).unwrap_or(Ordering::Equal),
        o => o,
    }
}
