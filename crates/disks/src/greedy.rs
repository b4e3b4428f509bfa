//! One greedy sweep along a fixed direction.
//!
//! Repeatedly take the live point with the smallest projection, accept it, and
//! drop everything within `2r` of it. The pass is `Running` while candidates
//! remain and `Done` once the set is empty; every step removes at least the
//! accepted point, so a pass over `n` distinct points takes at most `n` steps.
//!
//! The result is a maximal independent set for its direction: every input
//! point is either accepted or conflicts with an accepted point.

use crate::candidates::CandidateSet;
use crate::geom::{Direction, Exclusion, Point};

/// Lifecycle of a sweep.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PassState {
    Running,
    Done,
}

/// Greedy sweep driver owning its candidate set.
#[derive(Clone, Debug)]
pub struct GreedyPass {
    set: CandidateSet,
    solution: Vec<Point>,
}

impl GreedyPass {
    pub fn new(points: &[Point], dir: Direction, exclusion: Exclusion) -> Self {
        let set = CandidateSet::build(points, dir, exclusion);
        let dropped = points.len() - set.len();
        if dropped > 0 {
            tracing::debug!(dropped, "duplicate points collapsed");
        }
        Self {
            solution: Vec::with_capacity(set.len()),
            set,
        }
    }

    #[inline]
    pub fn state(&self) -> PassState {
        if self.set.is_empty() {
            PassState::Done
        } else {
            PassState::Running
        }
    }

    /// Accept the next point and remove its conflicts. None once `Done`.
    pub fn step(&mut self) -> Option<Point> {
        let p = self.set.take_min()?;
        self.solution.push(p);
        let eliminated = self.set.remove_conflicting(p);
        tracing::trace!(x = p.x, y = p.y, eliminated, "accept");
        Some(p)
    }

    /// Points accepted so far, in acceptance order.
    #[inline]
    pub fn solution(&self) -> &[Point] {
        &self.solution
    }

    /// Live candidates left.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.set.len()
    }

    /// Drive the pass to `Done` and return the solution.
    pub fn run(mut self) -> Vec<Point> {
        while self.step().is_some() {}
        debug_assert_eq!(self.state(), PassState::Done);
        self.solution
    }
}

/// Convenience: full greedy sweep of `points` along `dir`.
pub fn greedy(points: &[Point], dir: Direction, exclusion: Exclusion) -> Vec<Point> {
    GreedyPass::new(points, dir, exclusion).run()
}
