//! Disjoint-disk selection by multi-directional greedy sweeps.
//!
//! Given points on an integer grid and a radius `r`, pick a large subset whose
//! disks of radius `r` are pairwise disjoint (no two picks at distance ≤ 2r).
//!
//! Layout
//! - `geom`: integer points, scaled sweep directions, the exclusion rule.
//! - `candidates`: projection-ordered index with slab range removal.
//! - `greedy`: one sweep along a fixed direction.
//! - `search`: restarts over evenly spaced directions, keeps the largest pick.
//! - `verify`: independence and maximality checks.
//! - `rand`: reproducible random instances.
//!
//! API Policy
//! - Project-internal crate, no stable public API. The CLI crate is the only
//!   consumer outside tests and benches.

pub mod candidates;
pub mod error;
pub mod geom;
pub mod greedy;
pub mod rand;
pub mod search;
pub mod verify;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::SolveError;
pub use search::{solve, solve_with_defaults, SearchCfg, SearchOutcome};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::candidates::CandidateSet;
    pub use crate::error::SolveError;
    pub use crate::geom::{Direction, Exclusion, Point, ScaleCfg};
    pub use crate::greedy::{greedy, GreedyPass, PassState};
    pub use crate::rand::{draw_points, Layout, RandomCfg, ReplayToken};
    pub use crate::search::{directions, solve, solve_with_defaults, SearchCfg, SearchOutcome};
    pub use crate::verify::{find_overlap, find_uncovered, is_independent, is_maximal};
}
