use super::*;
use crate::geom::{ScaleCfg, DEFAULT_DIRECTION_SCALE};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn pts(raw: &[(i64, i64)]) -> Vec<Point> {
    raw.iter().map(|&(x, y)| Point::new(x, y)).collect()
}

fn east() -> Direction {
    Direction::new(DEFAULT_DIRECTION_SCALE, 0)
}

#[test]
fn take_min_follows_projection_then_point_order() {
    let points = pts(&[(3, 0), (1, 5), (1, -2), (2, 9)]);
    let mut set = CandidateSet::build(&points, east(), Exclusion::new(0).unwrap());
    assert_eq!(set.len(), 4);
    assert_eq!(set.peek_min(), Some(Point::new(1, -2)));
    let order: Vec<Point> = std::iter::from_fn(|| set.take_min()).collect();
    assert_eq!(order, pts(&[(1, -2), (1, 5), (2, 9), (3, 0)]));
    assert!(set.is_empty());
    assert_eq!(set.take_min(), None);
}

#[test]
fn duplicates_collapse() {
    let points = pts(&[(0, 0), (0, 0), (4, 4), (4, 4), (4, 4)]);
    let set = CandidateSet::build(&points, east(), Exclusion::new(1).unwrap());
    assert_eq!(set.len(), 2);
    assert!(set.contains(Point::new(4, 4)));
    assert!(!set.contains(Point::new(4, 5)));
}

#[test]
fn remove_conflicting_drops_center_and_neighbors_only() {
    let points = pts(&[(0, 0), (1, 0), (2, 0), (3, 0), (0, 2), (0, 3), (-2, 0)]);
    let mut set = CandidateSet::build(&points, east(), Exclusion::new(1).unwrap());
    let removed = set.remove_conflicting(Point::new(0, 0));
    // (0,0), (1,0), (2,0), (0,2), (-2,0) are within distance 2
    assert_eq!(removed, 5);
    let left: Vec<Point> = set.iter().collect();
    assert_eq!(left, pts(&[(0, 3), (3, 0)]));
}

#[test]
fn remove_conflicting_with_absent_center() {
    let points = pts(&[(10, 10), (11, 10), (20, 20)]);
    let mut set = CandidateSet::build(&points, east(), Exclusion::new(1).unwrap());
    assert_eq!(set.remove_conflicting(Point::new(12, 10)), 2);
    assert_eq!(set.iter().collect::<Vec<_>>(), pts(&[(20, 20)]));
}

#[test]
fn range_is_inclusive_and_ordered() {
    let d = Direction::new(1, 0);
    let points = pts(&[(0, 1), (1, 0), (1, 7), (2, -3), (3, 3)]);
    let set = CandidateSet::build(&points, d, Exclusion::new(0).unwrap());
    let got: Vec<Point> = set.range(1, 2).collect();
    assert_eq!(got, pts(&[(1, 0), (1, 7), (2, -3)]));
    assert_eq!(set.range(5, 9).count(), 0);
    assert_eq!(set.range(2, 1).count(), 0);
}

#[test]
fn find_conflicting_skips_center() {
    let points = pts(&[(0, 0), (5, 0), (6, 0)]);
    let set = CandidateSet::build(&points, east(), Exclusion::new(1).unwrap());
    assert_eq!(set.find_conflicting(Point::new(0, 0)), None);
    assert_eq!(set.find_conflicting(Point::new(5, 0)), Some(Point::new(6, 0)));
    assert_eq!(set.find_conflicting(Point::new(7, 0)), Some(Point::new(5, 0)));
    assert_eq!(set.find_conflicting(Point::new(7, 1)), Some(Point::new(6, 0)));
}

#[test]
fn removal_matches_brute_force_on_every_heading() {
    let mut rng = StdRng::seed_from_u64(7);
    let scale = ScaleCfg::default().direction_scale;
    for trial in 0..20 {
        let radius = rng.gen_range(0..6);
        let ex = Exclusion::new(radius).unwrap();
        let points: Vec<Point> = (0..200)
            .map(|_| Point::new(rng.gen_range(-30..30), rng.gen_range(-30..30)))
            .collect();
        for step in 0..16 {
            let d = Direction::from_turn(step, 16, scale);
            let center = points[rng.gen_range(0..points.len())];
            let mut set = CandidateSet::build(&points, d, ex);
            let before: BTreeSet<Point> = set.iter().collect();
            set.remove_conflicting(center);
            let after: BTreeSet<Point> = set.iter().collect();
            let expected: BTreeSet<Point> = before
                .iter()
                .copied()
                .filter(|&q| !ex.conflicts(center, q))
                .collect();
            assert_eq!(after, expected, "trial {trial} step {step} r={radius}");
        }
    }
}

#[test]
fn boundary_distance_is_caught_on_oblique_headings() {
    // pairs exactly 2r apart along awkward angles, e.g. (6,8) has length 10
    let ex = Exclusion::new(5).unwrap();
    let center = Point::new(0, 0);
    let ring = pts(&[(6, 8), (-6, 8), (8, -6), (-8, -6), (10, 0), (0, -10)]);
    let outside = pts(&[(7, 8), (0, 11), (-8, -7)]);
    let mut all = ring;
    all.extend(&outside);
    all.push(center);
    for count in [5usize, 7, 8, 11, 13] {
        for step in 0..count {
            let d = Direction::from_turn(step, count, DEFAULT_DIRECTION_SCALE);
            let mut set = CandidateSet::build(&all, d, ex);
            set.remove_conflicting(center);
            let left: BTreeSet<Point> = set.iter().collect();
            let want: BTreeSet<Point> = outside.iter().copied().collect();
            assert_eq!(left, want, "heading {step}/{count}");
        }
    }
}
