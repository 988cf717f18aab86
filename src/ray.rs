//! Ray representation for raycasting.
//!
//! A ray is defined as r(k) = origin + k * direction, a half-line starting at
//! `origin`. The direction is normalized once at construction, so `k` is a
//! distance along the ray.

use crate::vector::{Point3, Scalar, Vector3, Versor3};

/// Ray in 3D space defined by origin and unit direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// Starting point of the ray.
    pub origin: Point3,

    /// Unit direction of the ray.
    ///
    /// Normalized in [`Ray::new`] and not re-checked afterwards.
    pub direction: Versor3,
}

impl Ray {
    /// Create a new ray, normalizing `direction`.
    ///
    /// # Panics
    ///
    /// Panics if `direction` is the zero vector.
    pub fn new(origin: Point3, direction: Vector3) -> Self {
        Self {
            origin,
            direction: direction.normalized(),
        }
    }

    /// Compute the point at distance `k` along the ray.
    pub fn at(&self, k: Scalar) -> Point3 {
        self.origin + self.direction * k
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vector::are_equal;

    #[test]
    fn test_direction_is_normalized() {
        let r = Ray::new(Vector3::ZERO, Vector3::new(0.0, 3.0, 4.0));
        assert!(are_equal(r.direction.norm(), 1.0));
        assert!(are_equal(r.at(5.0), Vector3::new(0.0, 3.0, 4.0)));
    }
}
