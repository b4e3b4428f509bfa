//! JSON result file written by `solve` and read back by `check`.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use disks::geom::Point;
use disks::SearchOutcome;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridPoint {
    pub x: i64,
    pub y: i64,
}

impl From<Point> for GridPoint {
    fn from(p: Point) -> Self {
        Self { x: p.x, y: p.y }
    }
}

impl From<GridPoint> for Point {
    fn from(p: GridPoint) -> Self {
        Point::new(p.x, p.y)
    }
}

/// Search result in grid coordinates.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SolveRecord {
    pub radius: i64,
    pub unit: f64,
    pub direction_count: usize,
    pub sizes: Vec<usize>,
    pub best_direction: Option<usize>,
    pub solution: Vec<GridPoint>,
}

impl SolveRecord {
    pub fn new(outcome: &SearchOutcome, radius: i64, unit: f64) -> Self {
        Self {
            radius,
            unit,
            direction_count: outcome.sizes.len(),
            sizes: outcome.sizes.clone(),
            best_direction: outcome.best_direction,
            solution: outcome.best.iter().copied().map(GridPoint::from).collect(),
        }
    }

    pub fn points(&self) -> Vec<Point> {
        self.solution.iter().copied().map(Point::from).collect()
    }

    pub fn write(&self, path: &Path) -> Result<()> {
        fs::write(path, serde_json::to_vec_pretty(self)?)
            .with_context(|| format!("writing {}", path.display()))
    }

    pub fn read(path: &Path) -> Result<Self> {
        let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
        serde_json::from_slice(&bytes).with_context(|| format!("parsing {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn record_survives_disk() {
        let outcome = SearchOutcome {
            best: vec![Point::new(1, 2), Point::new(-5, 9)],
            sizes: vec![1, 2, 2],
            best_direction: Some(1),
        };
        let rec = SolveRecord::new(&outcome, 3, 0.5);
        assert_eq!(rec.direction_count, 3);
        let dir = tempdir().unwrap();
        let path = dir.path().join("r.json");
        rec.write(&path).unwrap();
        let back = SolveRecord::read(&path).unwrap();
        assert_eq!(back, rec);
        assert_eq!(back.points(), outcome.best);
    }
}
