//! Scene population.
//!
//! Scatters unit-sphere entities in front of the origin using a seeded
//! ChaCha20 PRNG, so a given seed always produces the same scene.

use log::debug;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

use glyphcast::config::SceneSettings;
use glyphcast::{Scalar, Scene, Sphere, Transform, Vector3};

/// Generate a random vector with components in [-extent, extent]
fn random_vector(rng: &mut impl Rng, extent: Scalar) -> Vector3 {
    Vector3::new(
        rng.random_range(-extent..=extent),
        rng.random_range(-extent..=extent),
        rng.random_range(-extent..=extent),
    )
}

/// Build a scene of `settings.entities` unit spheres resting on `y = 0`.
pub fn populate(settings: &SceneSettings) -> Scene {
    let mut rng = ChaCha20Rng::seed_from_u64(settings.seed);
    let mut scene = Scene::new();
    let body = Sphere::new(Vector3::ZERO, 1.0);

    for _ in 0..settings.entities {
        let mut translate =
            random_vector(&mut rng, settings.spread) + Vector3::new(0.0, 0.0, settings.depth);
        translate.y = 0.0;
        let id = scene.add_entity(Transform::from_translation(translate), body);
        debug!("Entity {} placed at {:?}", id.index(), translate);
    }

    scene
}
