//! Classic algorithm kernels, one module per problem.
//!
//! - `closest`: closest pair of points in the plane, divide and conquer,
//!   O(n log n). The main kernel of this repository.
//! - `turing`: two-tape Turing machine interpreter driven by a YAML
//!   transition table, with a built-in binary-addition machine.
//! - `align`: Needleman-Wunsch global sequence alignment (score matrix
//!   plus one optimal traceback).
//!
//! The kernels are independent of each other and share no state. All
//! presentation concerns (argument parsing, dataset generation from the
//! command line, formatting) live in the `cli` crate.

pub mod align;
pub mod closest;
pub mod turing;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Planar vector alias used throughout the closest-pair kernel.
pub use nalgebra::Vector2 as Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::align::{global_align, Alignment, ScoreCfg};
    pub use crate::closest::{
        brute_force, closest_pair, closest_pair_with_stats, dist, Closest, ClosestError, Point,
    };
    pub use crate::turing::{binary_addition, Machine, Run, SparseTape};
}
