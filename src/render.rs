//! Render pipeline: nearest-hit search per pixel, Lambertian shading and the
//! glyph table that turns a shading intensity into text.

use std::fmt;

use indicatif::ProgressBar;
use log::{debug, info};
use rayon::prelude::*;

use crate::camera::Camera;
use crate::hittable::NearestHit;
use crate::plane::Plane;
use crate::ray::Ray;
use crate::sphere::Sphere;
use crate::vector::{Scalar, Vector3, Versor3};

/// Two-character glyphs from darkest to lightest.
pub const GLYPHS: [&str; 9] = ["  ", " '", " +", " *", " #", "'#", "+#", "*#", "##"];

/// Initial distance budget for every pixel.
pub const DEFAULT_MAX_DISTANCE: Scalar = 1000.0;

/// Glyph for an intensity in `[0, 1]`. Values outside are clamped.
pub fn glyph(intensity: Scalar) -> &'static str {
    let last = GLYPHS.len() - 1;
    let bucket = (intensity.clamp(0.0, 1.0) * last as Scalar).round() as usize;
    GLYPHS[bucket.min(last)]
}

/// Everything needed to turn a list of spheres into a frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Renderer {
    /// Pinhole camera producing the primary rays
    pub camera: Camera,
    /// Ground plane tested for every pixel
    pub ground: Plane,
    /// Unit direction towards the light
    light: Versor3,
    /// Distance budget each pixel starts with
    pub max_distance: Scalar,
}

impl Default for Renderer {
    /// The reference setup: 30×30 pixels at focal 2, ground plane at
    /// `y = -1.5` and a light coming from `(1, 2, -2)`.
    fn default() -> Self {
        Self::new(
            Camera::new(2.0, 30, 30),
            Plane::new(Vector3::new(0.0, -1.5, 0.0), Vector3::UNIT_Y),
            Vector3::new(1.0, 2.0, -2.0),
        )
    }
}

impl Renderer {
    /// Create a renderer. `light_direction` only needs to be non-zero.
    pub fn new(camera: Camera, ground: Plane, light_direction: Vector3) -> Self {
        Self {
            camera,
            ground,
            light: light_direction.normalized(),
            max_distance: DEFAULT_MAX_DISTANCE,
        }
    }

    /// Unit direction towards the light.
    pub fn light_direction(&self) -> Versor3 {
        self.light
    }

    /// Nearest hit along `ray` among the ground plane and `spheres`.
    pub fn trace(&self, ray: &Ray, spheres: &[Sphere]) -> NearestHit {
        let nearest = NearestHit::new(self.max_distance).offer(ray, &self.ground);
        spheres
            .iter()
            .fold(nearest, |nearest, sphere| nearest.offer(ray, sphere))
    }

    /// Lambertian intensity for a surface normal, in `[0, 1]`.
    ///
    /// A zero normal, which is what a pixel without hits carries, shades to 0.
    pub fn shade(&self, normal: Vector3) -> Scalar {
        normal.dot(self.light).clamp(0.0, 1.0)
    }

    /// Shading intensity of pixel `(x, y)`.
    pub fn pixel(&self, x: u32, y: u32, spheres: &[Sphere]) -> Scalar {
        let ray = self.camera.primary_ray(x, y);
        self.shade(self.trace(&ray, spheres).normal())
    }

    /// Render a frame.
    pub fn render(&self, spheres: &[Sphere]) -> Frame {
        self.render_with_progress(spheres, &ProgressBar::hidden())
    }

    /// Render a frame, ticking `progress` once per finished row.
    ///
    /// Rows are computed in parallel; each pixel owns its own accumulator and
    /// rows are collected in order, so the result matches a sequential pass.
    pub fn render_with_progress(&self, spheres: &[Sphere], progress: &ProgressBar) -> Frame {
        let width = self.camera.pixel_dim_x;
        let height = self.camera.pixel_dim_y;
        debug!("Rendering {}x{} frame against {} spheres", width, height, spheres.len());

        let start = std::time::Instant::now();
        let rows: Vec<Vec<Scalar>> = (0..height)
            .into_par_iter()
            .map(|y| {
                let row = (0..width).map(|x| self.pixel(x, y, spheres)).collect();
                progress.inc(1);
                row
            })
            .collect();
        progress.finish_and_clear();
        info!("Frame rendered in {:.2?}", start.elapsed());

        Frame {
            width,
            height,
            intensities: rows.into_iter().flatten().collect(),
        }
    }
}

/// A rendered frame: one shading intensity per pixel, row-major, top row
/// first.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    width: u32,
    height: u32,
    intensities: Vec<Scalar>,
}

impl Frame {
    /// Number of pixel columns.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Number of pixel rows.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// All intensities, row-major.
    pub fn intensities(&self) -> &[Scalar] {
        &self.intensities
    }

    /// Intensity at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` lies outside the frame.
    pub fn intensity(&self, x: u32, y: u32) -> Scalar {
        assert!(
            x < self.width && y < self.height,
            "pixel ({}, {}) outside {}x{} frame",
            x,
            y,
            self.width,
            self.height
        );
        self.intensities[(y * self.width + x) as usize]
    }

    /// Iterate over rows of intensities, top row first.
    pub fn rows(&self) -> impl Iterator<Item = &[Scalar]> {
        self.intensities.chunks(self.width as usize)
    }

    /// Text rendition: one line per row, two glyph characters per pixel,
    /// every line terminated by `'\n'`.
    pub fn to_text(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for &intensity in row {
                f.write_str(glyph(intensity))?;
            }
            f.write_str("\n")?;
        }
        Ok(())
    }
}
