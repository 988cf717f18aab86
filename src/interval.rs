//! Admissible range for ray parameters.
//!
//! Intersection tests accept a root `k` only when it lies in `[min, max)`:
//! not behind the origin, and strictly closer than the best hit so far.

use crate::vector::Scalar;

/// Half-open interval `[min, max)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    /// Smallest admitted value (inclusive)
    pub min: Scalar,
    /// Upper bound (exclusive)
    pub max: Scalar,
}

impl Interval {
    /// Create a new interval with given min and max values
    pub fn new(min: Scalar, max: Scalar) -> Self {
        Self { min, max }
    }

    /// Interval of distances in front of a ray origin, closer than `budget`.
    pub fn ahead(budget: Scalar) -> Self {
        Self::new(0.0, budget)
    }

    /// Check if `x` is admitted: `min <= x < max`
    pub fn admits(&self, x: Scalar) -> bool {
        self.min <= x && x < self.max
    }
}
