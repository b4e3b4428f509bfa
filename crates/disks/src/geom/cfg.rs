//! Scale defaults for integer projections.

/// Length of a sweep direction before rounding to integers. Large enough that
/// rounding keeps the eight default headings distinct and nearly unit-length
/// relative to each other.
pub const DEFAULT_DIRECTION_SCALE: i64 = 65_536;

/// Upper bound on the direction scale; keeps every projection of an `i64`
/// point well inside `i128`.
pub const MAX_DIRECTION_SCALE: i64 = 1 << 31;
