//! Closest pair of points in the plane (divide and conquer, O(n log n)).
//!
//! Purpose
//! - Find the two points of a finite multiset minimizing Euclidean distance,
//!   with the classic presort / halve / strip-merge recursion instead of the
//!   O(n^2) exhaustive scan.
//!
//! Design
//! - One x-sorted buffer is shared by the whole recursion; subproblems are
//!   index ranges into it, never copies.
//! - The y-order of each subproblem is a vector of indices into that buffer,
//!   stably partitioned on the way down. Half membership is decided by index
//!   (left half = indices below the split), so duplicate x-coordinates at the
//!   split line are unambiguous.
//! - The merge scans a strip of width 2d around the split line and compares
//!   each strip point against at most 7 y-successors.

mod brute;
mod divide;
pub mod rand;
mod types;

pub use brute::brute_force;
pub use divide::{closest_pair, closest_pair_with_stats};
pub use types::{dist, Closest, ClosestError, DistStats, Point};
