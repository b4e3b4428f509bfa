//! Projection-ordered candidate set (live points of one sweep).
//!
//! Purpose
//! - Keep the still-eligible points ordered by `proj(p) = p · d` for one fixed
//!   sweep direction `d`, with point order as the tie-break.
//! - Remove every point conflicting with a center without scanning the whole
//!   set: narrow to the projection slab `[proj(c) - h, proj(c) + h]` by range
//!   query, then apply the exact squared-distance test inside it.
//!
//! Invariants
//! - Keys are unique `(proj, point)` pairs; duplicate input points collapse.
//! - After `remove_conflicting(c)` no remaining point conflicts with `c`, and
//!   `c` itself is gone.
//!
//! Code cross-refs: `geom::{Direction, Exclusion}`, `greedy::GreedyPass`

use std::collections::BTreeSet;
use std::ops::RangeInclusive;

use crate::geom::{Direction, Exclusion, Point};

/// Ordering key: projection first, then the point itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
struct Key {
    proj: i128,
    point: Point,
}

/// Live points of one sweep, ordered by projection onto `dir`.
#[derive(Clone, Debug)]
pub struct CandidateSet {
    dir: Direction,
    exclusion: Exclusion,
    half_width: i128,
    keys: BTreeSet<Key>,
}

impl CandidateSet {
    /// Index all `points` along `dir`. O(n log n).
    pub fn build(points: &[Point], dir: Direction, exclusion: Exclusion) -> Self {
        let keys = points
            .iter()
            .map(|&point| Key {
                proj: dir.project(point),
                point,
            })
            .collect();
        Self {
            dir,
            exclusion,
            half_width: exclusion.slab_half_width(dir),
            keys,
        }
    }

    #[inline]
    pub fn direction(&self) -> Direction {
        self.dir
    }

    #[inline]
    pub fn exclusion(&self) -> Exclusion {
        self.exclusion
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Slab half-width used to narrow conflict searches.
    #[inline]
    pub fn slab_half_width(&self) -> i128 {
        self.half_width
    }

    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.keys.contains(&Key {
            proj: self.dir.project(p),
            point: p,
        })
    }

    /// Smallest live point without removing it.
    #[inline]
    pub fn peek_min(&self) -> Option<Point> {
        self.keys.first().map(|k| k.point)
    }

    /// Remove and return the point with the smallest projection. O(log n).
    #[inline]
    pub fn take_min(&mut self) -> Option<Point> {
        self.keys.pop_first().map(|k| k.point)
    }

    /// Live points with `lo ≤ proj ≤ hi`, in key order.
    pub fn range(&self, lo: i128, hi: i128) -> impl Iterator<Item = Point> + '_ {
        let bounds = if lo <= hi {
            Some(Self::key_range(lo, hi))
        } else {
            None
        };
        bounds
            .into_iter()
            .flat_map(move |r| self.keys.range(r))
            .map(|k| k.point)
    }

    /// Remove every live point `q` with `|q - center|² ≤ (2r)²`, the center
    /// included if present. Returns how many points were removed.
    pub fn remove_conflicting(&mut self, center: Point) -> usize {
        let doomed: Vec<Key> = self
            .keys
            .range(self.slab(center))
            .filter(|k| self.exclusion.conflicts(center, k.point))
            .copied()
            .collect();
        for k in &doomed {
            self.keys.remove(k);
        }
        doomed.len()
    }

    /// First live point (in key order) other than `center` that conflicts
    /// with it, if any.
    pub fn find_conflicting(&self, center: Point) -> Option<Point> {
        self.keys
            .range(self.slab(center))
            .map(|k| k.point)
            .find(|&q| q != center && self.exclusion.conflicts(center, q))
    }

    /// Remaining points in key order.
    pub fn iter(&self) -> impl Iterator<Item = Point> + '_ {
        self.keys.iter().map(|k| k.point)
    }

    fn slab(&self, center: Point) -> RangeInclusive<Key> {
        let proj = self.dir.project(center);
        Self::key_range(
            proj.saturating_sub(self.half_width),
            proj.saturating_add(self.half_width),
        )
    }

    fn key_range(lo: i128, hi: i128) -> RangeInclusive<Key> {
        Key {
            proj: lo,
            point: Point::MIN,
        }..=Key {
            proj: hi,
            point: Point::MAX,
        }
    }
}

#[cfg(test)]
mod tests;
