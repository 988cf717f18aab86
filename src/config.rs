//! Render and scene settings loaded from TOML.
//!
//! Every section and field is optional; missing values fall back to the
//! reference setup (30×30 glyph frame, focal 2, ground at `y = -1.5`).

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::camera::Camera;
use crate::plane::Plane;
use crate::render::{Renderer, DEFAULT_MAX_DISTANCE};
use crate::session::Controls;
use crate::vector::{is_zero, Scalar, Vector3};

/// Errors raised while loading settings.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The settings file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Read {
        /// File that was being read
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },
    /// The file is not valid TOML for [`Settings`].
    #[error("invalid settings: {0}")]
    Parse(#[from] toml::de::Error),
    /// A value is out of its allowed range.
    #[error("invalid settings: {0}")]
    Invalid(String),
}

/// Camera section.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CameraSettings {
    /// Distance of the image plane
    pub focal: Scalar,
    /// Pixel columns
    pub width: u32,
    /// Pixel rows
    pub height: u32,
    /// Initial distance budget per pixel
    pub max_distance: Scalar,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            focal: 2.0,
            width: 30,
            height: 30,
            max_distance: DEFAULT_MAX_DISTANCE,
        }
    }
}

/// Lighting section.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LightingSettings {
    /// Direction towards the light; normalized on use
    pub direction: [Scalar; 3],
}

impl Default for LightingSettings {
    fn default() -> Self {
        Self { direction: [1.0, 2.0, -2.0] }
    }
}

/// Ground plane section.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GroundSettings {
    /// A point on the ground plane
    pub point: [Scalar; 3],
    /// Unit normal of the ground plane
    pub normal: [Scalar; 3],
}

impl Default for GroundSettings {
    fn default() -> Self {
        Self {
            point: [0.0, -1.5, 0.0],
            normal: [0.0, 1.0, 0.0],
        }
    }
}

/// Scene population section.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SceneSettings {
    /// Number of entities to place
    pub entities: usize,
    /// Seed of the placement generator
    pub seed: u64,
    /// Entities are scattered within `±spread` on X and Z
    pub spread: Scalar,
    /// Distance of the scatter area in front of the origin
    pub depth: Scalar,
}

impl Default for SceneSettings {
    fn default() -> Self {
        Self {
            entities: 10,
            seed: 0,
            spread: 14.0,
            depth: 15.0,
        }
    }
}

/// Input step sizes section.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ControlSettings {
    /// Distance per step
    pub step: Scalar,
    /// Degrees per turn
    pub turn_degrees: Scalar,
    /// Scale factor per grow step
    pub scale_factor: Scalar,
}

impl Default for ControlSettings {
    fn default() -> Self {
        let controls = Controls::default();
        Self {
            step: controls.step,
            turn_degrees: controls.turn_degrees,
            scale_factor: controls.scale_factor,
        }
    }
}

/// Complete settings.
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Camera setup
    pub camera: CameraSettings,
    /// Light direction
    pub lighting: LightingSettings,
    /// Ground plane
    pub ground: GroundSettings,
    /// Scene population
    pub scene: SceneSettings,
    /// Input step sizes
    pub controls: ControlSettings,
}

impl Settings {
    /// Read and validate settings from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&text)
    }

    /// Parse and validate settings from TOML text.
    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        let settings: Self = toml::from_str(text)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Check every value that would otherwise trip a precondition later.
    ///
    /// Every scalar must be finite; infinities and NaN are rejected outright.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.camera.width == 0 || self.camera.height == 0 {
            return Err(ConfigError::Invalid(format!(
                "camera size must be positive, got {}x{}",
                self.camera.width, self.camera.height
            )));
        }
        positive("focal", self.camera.focal)?;
        positive("max_distance", self.camera.max_distance)?;

        let light = finite_vector("light direction", self.lighting.direction)?;
        let light_norm = light.norm();
        if !(light_norm > 0.0 && light_norm.is_finite()) {
            return Err(ConfigError::Invalid(format!(
                "light direction must have a positive finite length, got {:?}",
                self.lighting.direction
            )));
        }

        finite_vector("ground point", self.ground.point)?;
        let normal = finite_vector("ground normal", self.ground.normal)?;
        if !is_zero(normal.norm() - 1.0) {
            return Err(ConfigError::Invalid(format!(
                "ground normal must be a unit vector, got {:?}",
                self.ground.normal
            )));
        }

        finite("spread", self.scene.spread)?;
        if self.scene.spread < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "spread must not be negative, got {}",
                self.scene.spread
            )));
        }
        finite("depth", self.scene.depth)?;

        finite("step", self.controls.step)?;
        finite("turn_degrees", self.controls.turn_degrees)?;
        positive("scale_factor", self.controls.scale_factor)?;
        Ok(())
    }

    /// Build the renderer described by these settings.
    ///
    /// # Panics
    ///
    /// Panics on settings that [`Settings::validate`] would reject.
    pub fn renderer(&self) -> Renderer {
        let mut renderer = Renderer::new(
            Camera::new(self.camera.focal, self.camera.width, self.camera.height),
            Plane::new(self.ground.point.into(), self.ground.normal.into()),
            self.lighting.direction.into(),
        );
        renderer.max_distance = self.camera.max_distance;
        renderer
    }

    /// Input step sizes.
    pub fn controls(&self) -> Controls {
        Controls {
            step: self.controls.step,
            turn_degrees: self.controls.turn_degrees,
            scale_factor: self.controls.scale_factor,
        }
    }
}

fn finite(name: &str, value: Scalar) -> Result<Scalar, ConfigError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ConfigError::Invalid(format!("{} must be finite, got {}", name, value)))
    }
}

fn positive(name: &str, value: Scalar) -> Result<Scalar, ConfigError> {
    if finite(name, value)? > 0.0 {
        Ok(value)
    } else {
        Err(ConfigError::Invalid(format!("{} must be positive, got {}", name, value)))
    }
}

fn finite_vector(name: &str, value: [Scalar; 3]) -> Result<Vector3, ConfigError> {
    if value.iter().all(|c| c.is_finite()) {
        Ok(value.into())
    } else {
        Err(ConfigError::Invalid(format!("{} must be finite, got {:?}", name, value)))
    }
}
