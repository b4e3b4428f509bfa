//! Independence and maximality checks for a selection.
//!
//! Both checks index the selection in a `CandidateSet` along the x axis and
//! use its slab query, so they stay near-linear on large inputs.

use std::collections::BTreeSet;

use crate::candidates::CandidateSet;
use crate::geom::{Direction, Exclusion, Point};

fn index(selection: &[Point], exclusion: Exclusion) -> CandidateSet {
    CandidateSet::build(selection, Direction::new(1, 0), exclusion)
}

/// First conflicting pair in `selection`, if any. A repeated point counts as
/// overlapping itself.
pub fn find_overlap(selection: &[Point], exclusion: Exclusion) -> Option<(Point, Point)> {
    let mut seen = BTreeSet::new();
    if let Some(&p) = selection.iter().find(|&&p| !seen.insert(p)) {
        return Some((p, p));
    }
    let set = index(selection, exclusion);
    selection
        .iter()
        .find_map(|&p| set.find_conflicting(p).map(|q| (p, q)))
}

/// No two selected disks overlap or touch.
pub fn is_independent(selection: &[Point], exclusion: Exclusion) -> bool {
    find_overlap(selection, exclusion).is_none()
}

/// First point of `instance` (input order) that is not selected and does not
/// conflict with any selected point, i.e. a witness that `selection` could be
/// extended.
pub fn find_uncovered(
    instance: &[Point],
    selection: &[Point],
    exclusion: Exclusion,
) -> Option<Point> {
    let set = index(selection, exclusion);
    instance
        .iter()
        .copied()
        .find(|&q| !set.contains(q) && set.find_conflicting(q).is_none())
}

/// No instance point can be added to `selection` without a conflict.
pub fn is_maximal(instance: &[Point], selection: &[Point], exclusion: Exclusion) -> bool {
    find_uncovered(instance, selection, exclusion).is_none()
}
