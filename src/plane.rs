//! Ray-plane intersection (closed-form).

use crate::hittable::{Hit, Hittable};
use crate::interval::Interval;
use crate::ray::Ray;
use crate::vector::{is_zero, Point3, Versor3};

/// Infinite plane through `point` with unit `normal`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    /// Any point on the plane.
    pub point: Point3,
    /// Unit normal. Supplied by the caller and never renormalized.
    pub normal: Versor3,
}

impl Plane {
    /// Create a plane from a point and an already normalized normal.
    pub fn new(point: Point3, normal: Versor3) -> Self {
        Self { point, normal }
    }
}

impl Hittable for Plane {
    /// The reported normal is the plane's own normal, whichever side the ray
    /// comes from.
    fn hit(&self, ray: &Ray, range: Interval) -> Option<Hit> {
        let dn = ray.direction.dot(self.normal);

        // Ray is parallel to plane
        if is_zero(dn) {
            return None;
        }

        let k = (self.point - ray.origin).dot(self.normal) / dn;
        if !range.admits(k) {
            return None;
        }

        Some(Hit {
            distance: k,
            position: ray.at(k),
            normal: self.normal,
        })
    }
}
