//! Pinhole camera for primary ray generation.

use crate::ray::Ray;
use crate::vector::{Scalar, Vector3};

/// Pinhole camera sitting at the local origin and looking down `+Z`.
///
/// The image plane lies at distance `focal` and is sampled on a
/// `pixel_dim_x × pixel_dim_y` grid. The camera has no transform of its own:
/// to look from somewhere else, bring the scene into that frame instead
/// (see [`crate::scene::Scene::to_view`]).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    /// Distance of the image plane from the viewpoint
    pub focal: Scalar,
    /// Number of pixel columns
    pub pixel_dim_x: u32,
    /// Number of pixel rows
    pub pixel_dim_y: u32,
}

impl Camera {
    /// Creates a new camera.
    ///
    /// # Panics
    ///
    /// Panics if either pixel dimension is zero or `focal` is not a positive
    /// finite number.
    pub fn new(focal: Scalar, pixel_dim_x: u32, pixel_dim_y: u32) -> Self {
        assert!(pixel_dim_x > 0 && pixel_dim_y > 0, "camera pixel dimensions must be positive");
        assert!(
            focal > 0.0 && focal.is_finite(),
            "camera focal length must be positive and finite, got {}",
            focal
        );
        Self {
            focal,
            pixel_dim_x,
            pixel_dim_y,
        }
    }

    /// Ray from the viewpoint through pixel `(x, y)`.
    ///
    /// Pixel rows count downward while clip-space `y` points up, so the row
    /// index is flipped. Both clip coordinates land in `[-1, 1]`.
    pub fn primary_ray(&self, x: u32, y: u32) -> Ray {
        let clip_x = 2.0 * x as Scalar / self.pixel_dim_x as Scalar - 1.0;
        let clip_y = -2.0 * y as Scalar / self.pixel_dim_y as Scalar + 1.0;
        Ray::new(Vector3::ZERO, Vector3::new(clip_x, clip_y, self.focal))
    }
}
