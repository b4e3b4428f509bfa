//! Integer plane geometry for the disk-selection sweeps.
//!
//! Purpose
//! - Exact integer points (`Point`) and scaled sweep directions (`Direction`)
//!   so the projection order never sees NaN or rounding drift.
//! - The exclusion rule (`Exclusion`): squared threshold `(2r)²` plus the slab
//!   half-width bounding any conflict's projection offset along a direction.
//!
//! Code cross-refs: `candidates::CandidateSet`, `search::directions`

mod cfg;
mod types;
mod util;

pub use cfg::{DEFAULT_DIRECTION_SCALE, MAX_DIRECTION_SCALE};
pub use types::{Direction, Exclusion, Point, ScaleCfg};
pub use util::ceil_sqrt;
