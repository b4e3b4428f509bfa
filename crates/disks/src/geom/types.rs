//! Basic integer types shared by the sweep machinery.
//!
//! - `Point`: grid point, ordered lexicographically `(x, y)`.
//! - `Direction`: scaled heading, never normalized; only projection order matters.
//! - `ScaleCfg`: the explicit direction scale.
//! - `Exclusion`: the conflict rule for one radius.

use nalgebra::Vector2;

use super::cfg::{DEFAULT_DIRECTION_SCALE, MAX_DIRECTION_SCALE};
use super::util::{ceil_sqrt, gcd};
use crate::error::SolveError;

/// Grid point. The derived order (x first, then y) is the tie-break used
/// whenever two points project to the same value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Point {
    pub x: i64,
    pub y: i64,
}

impl Point {
    pub const MIN: Point = Point::new(i64::MIN, i64::MIN);
    pub const MAX: Point = Point::new(i64::MAX, i64::MAX);

    #[inline]
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Exact `|self - other|²`, saturating at `i128::MAX` for points near
    /// opposite corners of the `i64` range.
    #[inline]
    pub fn squared_distance(self, other: Point) -> i128 {
        let dx = (self.x as i128 - other.x as i128).unsigned_abs();
        let dy = (self.y as i128 - other.y as i128).unsigned_abs();
        let sq = (dx * dx).saturating_add(dy * dy);
        sq.min(i128::MAX as u128) as i128
    }

    /// Quantize a real coordinate pair onto the grid of spacing `unit`
    /// (round to nearest). None if a coordinate is non-finite or leaves `i64`.
    pub fn from_real(v: Vector2<f64>, unit: f64) -> Option<Point> {
        let q = v / unit;
        Some(Point::new(quantize(q.x)?, quantize(q.y)?))
    }

    /// Back to real coordinates on a grid of spacing `unit`.
    #[inline]
    pub fn to_real(self, unit: f64) -> Vector2<f64> {
        Vector2::new(self.x as f64, self.y as f64) * unit
    }
}

fn quantize(v: f64) -> Option<i64> {
    let r = v.round();
    // 2^63 is exactly representable; everything strictly below fits
    if !r.is_finite() || r < i64::MIN as f64 || r >= i64::MAX as f64 {
        return None;
    }
    Some(r as i64)
}

/// Direction scale configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScaleCfg {
    /// Length of a direction vector before its components are rounded.
    pub direction_scale: i64,
}

impl Default for ScaleCfg {
    fn default() -> Self {
        Self {
            direction_scale: DEFAULT_DIRECTION_SCALE,
        }
    }
}

impl ScaleCfg {
    pub fn validate(&self) -> Result<(), SolveError> {
        if !(1..=MAX_DIRECTION_SCALE).contains(&self.direction_scale) {
            return Err(SolveError::DirectionScale(self.direction_scale));
        }
        Ok(())
    }
}

/// Scaled sweep heading `(round(S cos θ), round(S sin θ))`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Direction {
    pub x: i64,
    pub y: i64,
}

impl Direction {
    #[inline]
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Heading at angle `theta` (radians) with length `scale` before rounding.
    pub fn from_angle(theta: f64, scale: i64) -> Self {
        let v = Vector2::new(theta.cos(), theta.sin()) * scale as f64;
        Self::new(v.x.round() as i64, v.y.round() as i64)
    }

    /// Heading at `step / count` of a full turn. The fraction is reduced first,
    /// so equal angles from different counts give identical vectors.
    pub fn from_turn(step: usize, count: usize, scale: i64) -> Self {
        debug_assert!(count > 0, "from_turn needs a positive count");
        let step = step % count;
        let g = gcd(step, count).max(1);
        let (num, den) = (step / g, count / g);
        let theta = std::f64::consts::TAU * num as f64 / den as f64;
        Self::from_angle(theta, scale)
    }

    /// Projection key `p · d`.
    #[inline]
    pub fn project(self, p: Point) -> i128 {
        p.x as i128 * self.x as i128 + p.y as i128 * self.y as i128
    }

    #[inline]
    pub fn squared_norm(self) -> i128 {
        let (x, y) = (self.x as i128, self.y as i128);
        x * x + y * y
    }
}

/// Conflict rule for one radius: `p` and `q` conflict iff `|p - q|² ≤ (2r)²`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Exclusion {
    radius: i64,
    threshold: i128,
}

impl Exclusion {
    pub fn new(radius: i64) -> Result<Self, SolveError> {
        if radius < 0 {
            return Err(SolveError::NegativeRadius(radius));
        }
        let diameter = 2 * radius as i128;
        let threshold = diameter
            .checked_mul(diameter)
            .ok_or(SolveError::RadiusOverflow(radius))?;
        Ok(Self { radius, threshold })
    }

    #[inline]
    pub fn radius(&self) -> i64 {
        self.radius
    }

    /// `(2r)²`.
    #[inline]
    pub fn threshold(&self) -> i128 {
        self.threshold
    }

    #[inline]
    pub fn conflicts(&self, p: Point, q: Point) -> bool {
        p.squared_distance(q) <= self.threshold
    }

    /// Half-width `h` of the projection slab along `dir`: any `q` conflicting
    /// with `p` has `|proj(q) - proj(p)| ≤ h`.
    ///
    /// By Cauchy–Schwarz the offset is at most `2r·|d|`, so `h = ⌈2r·|d|⌉`,
    /// computed from the actual (rounded) direction length.
    pub fn slab_half_width(&self, dir: Direction) -> i128 {
        let norm_sq = dir.squared_norm() as u128;
        match (self.threshold as u128).checked_mul(norm_sq) {
            Some(n) if n <= i128::MAX as u128 => ceil_sqrt(n) as i128,
            // 2r·⌈|d|⌉ still bounds the offset and cannot overflow here
            _ => (2 * self.radius as i128).saturating_mul(ceil_sqrt(norm_sq) as i128),
        }
    }
}
