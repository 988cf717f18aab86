//! Sphere primitive for raycasting.
//!
//! Implements ray-sphere intersection with the closed-form quadratic. Only the
//! near root is tried: a ray that starts inside a sphere does not see it.

use crate::hittable::{Hit, Hittable};
use crate::interval::Interval;
use crate::ray::Ray;
use crate::transform::Transform;
use crate::vector::{Point3, Scalar};

/// Sphere primitive defined by center and radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    /// Center point of the sphere.
    pub center: Point3,

    /// Radius of the sphere.
    ///
    /// Expected to be positive. Zero or negative radii are accepted as-is and
    /// give undefined intersection results.
    pub radius: Scalar,
}

impl Sphere {
    /// Create a new sphere.
    pub fn new(center: Point3, radius: Scalar) -> Self {
        Self { center, radius }
    }

    /// This sphere mapped through `transform`.
    ///
    /// Transforms only carry uniform scale, so the image is again a sphere.
    pub fn transformed(&self, transform: &Transform) -> Self {
        Self {
            center: transform.transform_point(self.center),
            radius: transform.transform_scalar(self.radius),
        }
    }
}

impl Hittable for Sphere {
    fn hit(&self, ray: &Ray, range: Interval) -> Option<Hit> {
        // |origin + k*direction - center|^2 = r^2, with |direction| = 1
        let oc = ray.origin - self.center;
        let b = 2.0 * ray.direction.dot(oc);
        let c = oc.squared_norm() - self.radius * self.radius;

        let discriminant = b * b - 4.0 * c;
        if discriminant < 0.0 {
            return None;
        }

        let k = (-b - discriminant.sqrt()) / 2.0;
        if !range.admits(k) {
            return None;
        }

        let position = ray.at(k);
        Some(Hit {
            distance: k,
            position,
            normal: (position - self.center).normalized(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quaternion::Quaternion;
    use crate::vector::{are_equal, Vector3};

    #[test]
    fn test_ray_sphere_hit() {
        let ray = Ray::new(Vector3::ZERO, Vector3::UNIT_X);
        let sphere = Sphere::new(Vector3::new(5.0, 0.0, 0.0), 3.0);
        let hit = sphere.hit(&ray, Interval::ahead(1000.0)).unwrap();

        assert!(are_equal(hit.position, Vector3::new(2.0, 0.0, 0.0)));
        assert!(are_equal(hit.distance, 2.0));
        assert!(are_equal(hit.normal, Vector3::new(-1.0, 0.0, 0.0)));
    }

    #[test]
    fn test_ray_sphere_miss() {
        let ray = Ray::new(Vector3::ZERO, Vector3::UNIT_Y);
        let sphere = Sphere::new(Vector3::new(5.0, 0.0, 0.0), 3.0);
        assert!(sphere.hit(&ray, Interval::ahead(1000.0)).is_none());
    }

    #[test]
    fn test_sphere_behind_origin_is_ignored() {
        let ray = Ray::new(Vector3::ZERO, Vector3::UNIT_X);
        let sphere = Sphere::new(Vector3::new(-5.0, 0.0, 0.0), 3.0);
        assert!(sphere.hit(&ray, Interval::ahead(1000.0)).is_none());
    }

    #[test]
    fn test_origin_inside_sphere_misses() {
        // Near root is negative, far root positive: treated as a miss.
        let ray = Ray::new(Vector3::ZERO, Vector3::UNIT_X);
        let sphere = Sphere::new(Vector3::new(1.0, 0.0, 0.0), 3.0);
        assert!(sphere.hit(&ray, Interval::ahead(1000.0)).is_none());
    }

    #[test]
    fn test_hit_beyond_budget_is_rejected() {
        let ray = Ray::new(Vector3::ZERO, Vector3::UNIT_X);
        let sphere = Sphere::new(Vector3::new(5.0, 0.0, 0.0), 3.0);
        assert!(sphere.hit(&ray, Interval::ahead(2.0)).is_none());
        assert!(sphere.hit(&ray, Interval::ahead(2.5)).is_some());
    }

    #[test]
    fn test_transformed_sphere() {
        let t = Transform {
            scale: 2.0,
            translate: Vector3::new(0.0, 0.0, 10.0),
            rotate: Quaternion::from_angle_axis(90.0, Vector3::UNIT_Y),
        };
        let s = Sphere::new(Vector3::new(0.0, 0.0, 1.0), 0.5).transformed(&t);
        assert!(are_equal(s.center, Vector3::new(2.0, 0.0, 10.0)));
        assert!(are_equal(s.radius, 1.0));
    }
}
