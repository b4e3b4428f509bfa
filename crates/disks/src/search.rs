//! Multi-direction restarts of the greedy sweep.
//!
//! For `i in 0..direction_count` sweep along the heading at `i / count` of a
//! full turn, and keep the largest solution. A later pass replaces the best
//! only when strictly larger, so ties keep the earliest heading. Sizes of every
//! pass are reported in evaluation order.
//!
//! Passes share nothing but the best-so-far accumulator; each builds and drops
//! its own candidate set.

use crate::error::SolveError;
use crate::geom::{Direction, Exclusion, Point, ScaleCfg};
use crate::greedy::greedy;

/// Search configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchCfg {
    /// Number of evenly spaced sweep headings.
    pub direction_count: usize,
    pub scale: ScaleCfg,
}

impl Default for SearchCfg {
    fn default() -> Self {
        Self {
            direction_count: 8,
            scale: ScaleCfg::default(),
        }
    }
}

impl SearchCfg {
    pub fn with_directions(direction_count: usize) -> Self {
        Self {
            direction_count,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), SolveError> {
        if self.direction_count == 0 {
            return Err(SolveError::NoDirections);
        }
        self.scale.validate()
    }
}

/// Best solution plus per-direction diagnostics.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchOutcome {
    /// Largest solution found, in acceptance order.
    pub best: Vec<Point>,
    /// Solution size of every heading, in evaluation order.
    pub sizes: Vec<usize>,
    /// Index of the heading that produced `best`; None if every pass was empty.
    pub best_direction: Option<usize>,
}

impl SearchOutcome {
    #[inline]
    pub fn best_size(&self) -> usize {
        self.best.len()
    }
}

/// The sweep headings used by `solve`, in evaluation order.
pub fn directions(cfg: &SearchCfg) -> Vec<Direction> {
    (0..cfg.direction_count)
        .map(|i| Direction::from_turn(i, cfg.direction_count, cfg.scale.direction_scale))
        .collect()
}

/// Run one greedy sweep per heading and keep the largest result.
///
/// Errors only on invalid input: negative or overflowing radius, zero
/// headings, or an out-of-range direction scale. Empty `points` is valid and
/// yields an empty best solution.
pub fn solve(points: &[Point], radius: i64, cfg: SearchCfg) -> Result<SearchOutcome, SolveError> {
    cfg.validate()?;
    let exclusion = Exclusion::new(radius)?;
    tracing::debug!(
        points = points.len(),
        radius,
        directions = cfg.direction_count,
        "search start"
    );

    let mut out = SearchOutcome {
        sizes: Vec::with_capacity(cfg.direction_count),
        ..SearchOutcome::default()
    };
    for (i, dir) in directions(&cfg).into_iter().enumerate() {
        let solution = greedy(points, dir, exclusion);
        let improved = solution.len() > out.best.len();
        tracing::debug!(
            direction = i,
            dx = dir.x,
            dy = dir.y,
            size = solution.len(),
            improved,
            "pass done"
        );
        out.sizes.push(solution.len());
        if improved {
            out.best = solution;
            out.best_direction = Some(i);
        }
    }
    tracing::info!(
        best = out.best.len(),
        best_direction = ?out.best_direction,
        "search done"
    );
    Ok(out)
}

/// Convenience: eight headings, default direction scale.
pub fn solve_with_defaults(points: &[Point], radius: i64) -> Result<SearchOutcome, SolveError> {
    solve(points, radius, SearchCfg::default())
}
