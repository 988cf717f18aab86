//! Rigid transforms with uniform scale.
//!
//! A [`Transform`] maps `p ↦ rotate.apply(p * scale) + translate`: scale
//! first, then rotate, then translate. Scale is a single scalar, so spheres
//! stay spheres and unit directions only need the rotation.

use std::ops::Mul;

use crate::quaternion::Quaternion;
use crate::vector::{Point3, Scalar, Vector3, Versor3};

/// Uniform scale, then rotation, then translation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    /// Uniform scale factor.
    pub scale: Scalar,
    /// Translation applied last.
    pub translate: Vector3,
    /// Rotation, a unit quaternion.
    pub rotate: Quaternion,
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

impl Transform {
    /// The identity transform.
    pub const fn identity() -> Self {
        Self {
            scale: 1.0,
            translate: Vector3::ZERO,
            rotate: Quaternion::identity(),
        }
    }

    /// Pure translation.
    pub fn from_translation(translate: Vector3) -> Self {
        Self { translate, ..Self::identity() }
    }

    /// Pure rotation.
    pub fn from_rotation(rotate: Quaternion) -> Self {
        Self { rotate, ..Self::identity() }
    }

    /// Pure uniform scale.
    pub fn from_scale(scale: Scalar) -> Self {
        Self { scale, ..Self::identity() }
    }

    /// Map a point: scale, rotate, translate.
    pub fn transform_point(&self, p: Point3) -> Point3 {
        self.rotate.apply(p * self.scale) + self.translate
    }

    /// Map a displacement: scale and rotate, never translate.
    pub fn transform_vector(&self, v: Vector3) -> Vector3 {
        self.rotate.apply(v * self.scale)
    }

    /// Map a unit direction: rotation only.
    pub fn transform_versor(&self, v: Versor3) -> Versor3 {
        self.rotate.apply(v)
    }

    /// Map a length such as a radius.
    pub fn transform_scalar(&self, s: Scalar) -> Scalar {
        s * self.scale
    }

    /// Invert in place.
    ///
    /// The inverse of `p ↦ R(s·p) + t` is `q ↦ R⁻¹((q − t) / s)`, which
    /// is again a transform with scale `1/s`, rotation `R⁻¹` and translation
    /// `R⁻¹(−t / s)`.
    pub fn invert(&mut self) {
        self.scale = 1.0 / self.scale;
        self.rotate.conjugate();
        self.translate = self.rotate.apply(-self.translate * self.scale);
    }

    /// Return the inverse transform.
    pub fn inverse(&self) -> Self {
        let mut t = *self;
        t.invert();
        t
    }

    /// Local `+Z` expressed in the parent frame.
    pub fn forward_dir(&self) -> Versor3 {
        self.rotate.apply(Vector3::UNIT_Z)
    }
}

/// Composition. `a * b` applies `b` first, then `a`.
impl Mul for Transform {
    type Output = Self;
    fn mul(self, b: Self) -> Self {
        Self {
            scale: self.scale * b.scale,
            translate: self.transform_vector(b.translate) + self.translate,
            rotate: self.rotate * b.rotate,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vector::are_equal;

    fn sample_transforms() -> Vec<Transform> {
        vec![
            Transform::identity(),
            Transform::from_translation(Vector3::new(1.0, -2.0, 3.0)),
            Transform::from_scale(2.5),
            Transform {
                scale: 0.4,
                translate: Vector3::new(-7.0, 0.5, 12.0),
                rotate: Quaternion::from_angle_axis(33.0, Vector3::new(1.0, 2.0, 3.0)),
            },
            Transform {
                scale: 3.0,
                translate: Vector3::new(2.0, 2.0, -1.0),
                rotate: Quaternion::from_angle_axis(-140.0, Vector3::UNIT_X),
            },
        ]
    }

    fn sample_points() -> Vec<Point3> {
        vec![
            Vector3::ZERO,
            Vector3::new(1.0, 0.0, 0.0),
            Vector3::new(-4.0, 9.0, 2.5),
            Vector3::new(0.25, -0.75, 6.0),
        ]
    }

    #[test]
    fn test_point_order_is_scale_rotate_translate() {
        let t = Transform {
            scale: 2.0,
            translate: Vector3::new(10.0, 0.0, 0.0),
            rotate: Quaternion::from_angle_axis(90.0, Vector3::UNIT_Y),
        };
        // (0,0,1) -> scale (0,0,2) -> rotate (2,0,0) -> translate (12,0,0)
        assert!(are_equal(t.transform_point(Vector3::UNIT_Z), Vector3::new(12.0, 0.0, 0.0)));
        assert!(are_equal(t.transform_vector(Vector3::UNIT_Z), Vector3::new(2.0, 0.0, 0.0)));
        assert!(are_equal(t.transform_versor(Vector3::UNIT_Z), Vector3::new(1.0, 0.0, 0.0)));
        assert!(are_equal(t.transform_scalar(1.5), 3.0));
        assert!(are_equal(t.forward_dir(), Vector3::UNIT_X));
    }

    #[test]
    fn test_inverse_round_trip() {
        for t in sample_transforms() {
            let inv = t.inverse();
            for p in sample_points() {
                assert!(are_equal(inv.transform_point(t.transform_point(p)), p));
                assert!(are_equal(t.transform_point(inv.transform_point(p)), p));
            }
        }
    }

    #[test]
    fn test_invert_in_place_matches_inverse() {
        for t in sample_transforms() {
            let mut copy = t;
            copy.invert();
            for p in sample_points() {
                assert!(are_equal(copy.transform_point(t.transform_point(p)), p));
            }
            assert!(are_equal(copy.scale, t.inverse().scale));
        }
    }

    #[test]
    fn test_composition_applies_right_operand_first() {
        let transforms = sample_transforms();
        for a in &transforms {
            for b in &transforms {
                let ab = *a * *b;
                for p in sample_points() {
                    let expected = a.transform_point(b.transform_point(p));
                    assert!(are_equal(ab.transform_point(p), expected));
                }
            }
        }
    }

    #[test]
    fn test_composition_with_inverse_is_identity() {
        for t in sample_transforms() {
            let id = t * t.inverse();
            for p in sample_points() {
                assert!(are_equal(id.transform_point(p), p));
            }
            assert!(are_equal(id.scale, 1.0));
        }
    }
}
