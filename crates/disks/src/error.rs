//! Error type for the solver entry points and the random instance generator.
//!
//! All variants are invalid-input conditions detected before any sweep or
//! draw runs.
//! An empty point list is not an error.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SolveError {
    #[error("radius must be non-negative, got {0}")]
    NegativeRadius(i64),

    #[error("direction count must be positive")]
    NoDirections,

    #[error("direction scale must lie in 1..=2^31, got {0}")]
    DirectionScale(i64),

    #[error("radius {0} is too large: squared exclusion distance overflows")]
    RadiusOverflow(i64),

    #[error("random instance extent {extent} plus jitter {jitter} leaves the i64 range")]
    ExtentOverflow { extent: i64, jitter: i64 },
}
