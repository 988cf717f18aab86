//! Ray-object intersection protocol.
//!
//! Defines the [`Hittable`] trait for geometric primitives and the
//! [`NearestHit`] accumulator that keeps the closest hit across a sequence of
//! tests against different primitives.

use crate::interval::Interval;
use crate::ray::Ray;
use crate::vector::{Point3, Scalar, Vector3, Versor3};

/// Ray-object intersection information.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    /// Distance along the ray to the intersection point
    pub distance: Scalar,
    /// Point where the ray intersects the object
    pub position: Point3,
    /// Surface normal at the intersection point (unit vector)
    pub normal: Versor3,
}

/// Trait for objects that can be intersected by rays.
///
/// Must be thread-safe (Sync + Send) so frames can be rendered in parallel.
pub trait Hittable: Sync + Send {
    /// Test for ray intersection within the given parameter range.
    ///
    /// Returns the hit only if its distance is admitted by `range`.
    fn hit(&self, ray: &Ray, range: Interval) -> Option<Hit>;
}

/// Closest hit found so far together with the remaining distance budget.
///
/// The budget only ever shrinks, so offering primitives in any order ends
/// with the same nearest hit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NearestHit {
    budget: Scalar,
    hit: Option<Hit>,
}

impl NearestHit {
    /// Start a search where anything closer than `budget` may hit.
    pub fn new(budget: Scalar) -> Self {
        Self { budget, hit: None }
    }

    /// Current distance budget.
    pub fn budget(&self) -> Scalar {
        self.budget
    }

    /// The winning hit, if any.
    pub fn hit(&self) -> Option<&Hit> {
        self.hit.as_ref()
    }

    /// Whether any primitive has been hit.
    pub fn found(&self) -> bool {
        self.hit.is_some()
    }

    /// Hit position, or the origin when nothing was hit.
    pub fn position(&self) -> Point3 {
        self.hit.map_or(Vector3::ZERO, |h| h.position)
    }

    /// Hit normal, or the zero vector when nothing was hit.
    pub fn normal(&self) -> Vector3 {
        self.hit.map_or(Vector3::ZERO, |h| h.normal)
    }

    /// Range that a new candidate has to fall in.
    pub fn range(&self) -> Interval {
        Interval::ahead(self.budget)
    }

    /// Fold a candidate hit in. Returns `None` when it does not improve on
    /// the current state.
    pub fn merge(self, candidate: Hit) -> Option<Self> {
        if !self.range().admits(candidate.distance) {
            return None;
        }
        Some(Self {
            budget: candidate.distance,
            hit: Some(candidate),
        })
    }

    /// Test `object` and return the tightened accumulator.
    pub fn offer(self, ray: &Ray, object: &dyn Hittable) -> Self {
        object
            .hit(ray, self.range())
            .and_then(|candidate| self.merge(candidate))
            .unwrap_or(self)
    }
}
