//! Reproducible random instances.
//!
//! Purpose
//! - Deterministic point clouds for tests, benches and `disks-cli generate`.
//!
//! Model
//! - `Layout::Uniform`: `count` points uniform in the square `[-extent, extent]²`.
//! - `Layout::Lattice`: points on a square lattice of the given spacing inside
//!   the same square, each nudged by up to `jitter` per axis. At most one point
//!   per lattice site, so `count` is capped at the number of sites.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::SolveError;
use crate::geom::Point;

/// Spatial layout of a random instance.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Layout {
    Uniform,
    Lattice { spacing: i64, jitter: i64 },
}

/// Random instance configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RandomCfg {
    pub count: usize,
    /// Half side length of the sampling square. Clamped to at least 0.
    pub extent: i64,
    pub layout: Layout,
}

impl Default for RandomCfg {
    fn default() -> Self {
        Self {
            count: 1_000,
            extent: 1_000,
            layout: Layout::Uniform,
        }
    }
}

impl RandomCfg {
    /// Every drawn coordinate must fit `i64`: `extent + jitter` may not overflow.
    pub fn validate(&self) -> Result<(), SolveError> {
        let jitter = match self.layout {
            Layout::Uniform => 0,
            Layout::Lattice { jitter, .. } => jitter.max(0),
        };
        let extent = self.extent.max(0);
        if extent.checked_add(jitter).is_none() {
            return Err(SolveError::ExtentOverflow {
                extent: self.extent,
                jitter,
            });
        }
        Ok(())
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    pub fn new(seed: u64, index: u64) -> Self {
        Self { seed, index }
    }

    fn to_std_rng(self) -> StdRng {
        // SplitMix64 finalizer
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        StdRng::seed_from_u64(mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15))))
    }
}

/// Draw a random instance. Duplicates are possible for dense uniform draws;
/// the solver collapses them.
pub fn draw_points(cfg: RandomCfg, tok: ReplayToken) -> Result<Vec<Point>, SolveError> {
    cfg.validate()?;
    let mut rng = tok.to_std_rng();
    let e = cfg.extent.max(0);
    let points = match cfg.layout {
        Layout::Uniform => (0..cfg.count)
            .map(|_| Point::new(rng.gen_range(-e..=e), rng.gen_range(-e..=e)))
            .collect(),
        Layout::Lattice { spacing, jitter } => {
            // site offsets stay within [0, 2e], so i128 never overflows and
            // every coordinate lands in [-e - jitter, e + jitter]
            let spacing = spacing.max(1) as i128;
            let jitter = jitter.max(0);
            let (lo, span) = (-(e as i128), 2 * e as i128);
            let per_row = usize::try_from(span / spacing + 1).unwrap_or(usize::MAX);
            let count = cfg.count.min(per_row.saturating_mul(per_row));
            if count < cfg.count {
                tracing::debug!(requested = cfg.count, count, "lattice full, count capped");
            }
            (0..count)
                .map(|k| {
                    let (row, col) = ((k / per_row) as i128, (k % per_row) as i128);
                    let x = (lo + col * spacing) as i64 + rng.gen_range(-jitter..=jitter);
                    let y = (lo + row * spacing) as i64 + rng.gen_range(-jitter..=jitter);
                    Point::new(x, y)
                })
                .collect()
        }
    };
    Ok(points)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_token_same_points() {
        let cfg = RandomCfg {
            count: 50,
            ..RandomCfg::default()
        };
        let a = draw_points(cfg, ReplayToken::new(3, 0)).unwrap();
        let b = draw_points(cfg, ReplayToken::new(3, 0)).unwrap();
        let c = draw_points(cfg, ReplayToken::new(3, 1)).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(a.len(), 50);
    }

    #[test]
    fn uniform_stays_in_square() {
        let cfg = RandomCfg {
            count: 500,
            extent: 20,
            layout: Layout::Uniform,
        };
        for p in draw_points(cfg, ReplayToken::new(1, 2)).unwrap() {
            assert!((-20..=20).contains(&p.x) && (-20..=20).contains(&p.y));
        }
    }

    #[test]
    fn lattice_without_jitter_is_regular() {
        let cfg = RandomCfg {
            count: 6,
            extent: 10,
            layout: Layout::Lattice {
                spacing: 10,
                jitter: 0,
            },
        };
        let got = draw_points(cfg, ReplayToken::new(0, 0)).unwrap();
        let want: Vec<Point> = [(-10, -10), (0, -10), (10, -10), (-10, 0), (0, 0), (10, 0)]
            .iter()
            .map(|&(x, y)| Point::new(x, y))
            .collect();
        assert_eq!(got, want);
    }

    #[test]
    fn lattice_is_capped_at_its_sites() {
        let cfg = RandomCfg {
            count: 20,
            extent: 10,
            layout: Layout::Lattice {
                spacing: 10,
                jitter: 0,
            },
        };
        let got = draw_points(cfg, ReplayToken::new(0, 0)).unwrap();
        assert_eq!(got.len(), 9);
        assert!(got
            .iter()
            .all(|p| (-10..=10).contains(&p.x) && (-10..=10).contains(&p.y)));
    }

    #[test]
    fn huge_extent_stays_in_range() {
        let e = i64::MAX / 2 + 10;
        let cfg = RandomCfg {
            count: 3,
            extent: e,
            layout: Layout::Lattice {
                spacing: 1,
                jitter: 0,
            },
        };
        let got = draw_points(cfg, ReplayToken::new(4, 0)).unwrap();
        assert_eq!(
            got,
            vec![Point::new(-e, -e), Point::new(-e + 1, -e), Point::new(-e + 2, -e)]
        );

        let full = RandomCfg {
            count: 9,
            extent: i64::MAX,
            layout: Layout::Lattice {
                spacing: i64::MAX,
                jitter: 0,
            },
        };
        let corners = draw_points(full, ReplayToken::new(4, 0)).unwrap();
        assert_eq!(corners[1], Point::new(0, -i64::MAX));
        assert_eq!(corners[2], Point::new(i64::MAX, -i64::MAX));
        assert_eq!(corners[8], Point::new(i64::MAX, i64::MAX));
    }

    #[test]
    fn extent_plus_jitter_must_fit() {
        let cfg = RandomCfg {
            count: 1,
            extent: i64::MAX - 1,
            layout: Layout::Lattice {
                spacing: 5,
                jitter: 2,
            },
        };
        assert_eq!(
            draw_points(cfg, ReplayToken::new(0, 0)),
            Err(SolveError::ExtentOverflow {
                extent: i64::MAX - 1,
                jitter: 2
            })
        );
        let uniform = RandomCfg {
            count: 2,
            extent: i64::MAX,
            layout: Layout::Uniform,
        };
        assert_eq!(draw_points(uniform, ReplayToken::new(0, 0)).map(|v| v.len()), Ok(2));
    }
}
