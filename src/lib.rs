//! glyphcast raycaster
//!
//! A small geometric kernel (vectors, quaternions, rigid transforms with
//! uniform scale) and a raycasting pipeline that renders sphere scenes over a
//! ground plane as blocks of text glyphs.

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod vector;
pub mod quaternion;
pub mod transform;
pub mod ray;
pub mod interval;
pub mod hittable;
pub mod sphere;
pub mod plane;
pub mod camera;
pub mod scene;
pub mod render;
pub mod session;
pub mod config;

pub use camera::Camera;
pub use config::{ConfigError, Settings};
pub use hittable::{Hit, Hittable, NearestHit};
pub use plane::Plane;
pub use quaternion::Quaternion;
pub use ray::Ray;
pub use render::{Frame, Renderer};
pub use scene::{Entity, EntityId, Scene};
pub use session::{Command, Controls, Session, ViewMode};
pub use sphere::Sphere;
pub use transform::Transform;
pub use vector::{Point3, Scalar, Vector3, Versor3};
