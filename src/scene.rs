//! Scene composition.
//!
//! A [`Scene`] owns its entities in a flat arena and hands out [`EntityId`]
//! handles. Each entity is a local-space body sphere plus the transform that
//! places it in the world.

use crate::quaternion::Quaternion;
use crate::sphere::Sphere;
use crate::transform::Transform;
use crate::vector::{Scalar, Vector3};

/// Stable handle to an entity inside a [`Scene`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId(usize);

impl EntityId {
    /// Position of the entity in insertion order.
    pub fn index(self) -> usize {
        self.0
    }
}

/// Something placed in the scene.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Entity {
    /// Local-to-world transform.
    pub transform: Transform,
    /// Body in local space.
    pub body: Sphere,
}

impl Entity {
    /// Create an entity.
    pub fn new(transform: Transform, body: Sphere) -> Self {
        Self { transform, body }
    }

    /// Body sphere in world space.
    pub fn world_body(&self) -> Sphere {
        self.body.transformed(&self.transform)
    }

    /// Move `step` units along the entity's forward direction.
    pub fn advance(&mut self, step: Scalar) {
        self.transform.translate += self.transform.forward_dir() * step;
    }

    /// Move by a world-space offset.
    pub fn translate(&mut self, offset: Vector3) {
        self.transform.translate += offset;
    }

    /// Rotate by `delta` on top of the current orientation.
    pub fn turn(&mut self, delta: &Quaternion) {
        self.transform.rotate = *delta * self.transform.rotate;
    }

    /// Multiply the scale by `factor`.
    pub fn rescale(&mut self, factor: Scalar) {
        self.transform.scale *= factor;
    }
}

/// Collection of entities forming a scene.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    entities: Vec<Entity>,
}

impl Scene {
    /// Create a new empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entity and return its handle.
    pub fn add_entity(&mut self, transform: Transform, body: Sphere) -> EntityId {
        self.entities.push(Entity::new(transform, body));
        EntityId(self.entities.len() - 1)
    }

    /// Look up an entity.
    pub fn entity(&self, id: EntityId) -> Option<&Entity> {
        self.entities.get(id.0)
    }

    /// Look up an entity for modification.
    pub fn entity_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        self.entities.get_mut(id.0)
    }

    /// Number of entities.
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// Whether the scene has no entities.
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Iterate over entities with their handles, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (EntityId, &Entity)> {
        self.entities.iter().enumerate().map(|(i, e)| (EntityId(i), e))
    }

    /// Handle of the entity after `id`, wrapping around.
    pub fn next_id(&self, id: EntityId) -> Option<EntityId> {
        if self.entities.is_empty() {
            None
        } else {
            Some(EntityId((id.0 + 1) % self.entities.len()))
        }
    }

    /// Handle of the first entity.
    pub fn first_id(&self) -> Option<EntityId> {
        (!self.entities.is_empty()).then_some(EntityId(0))
    }

    /// Every body in world space, in insertion order.
    pub fn to_world(&self) -> Vec<Sphere> {
        self.entities.iter().map(Entity::world_body).collect()
    }

    /// Every body expressed in the local frame of `observer`.
    pub fn to_view(&self, observer: &Transform) -> Vec<Sphere> {
        let world_to_view = observer.inverse();
        self.entities
            .iter()
            .map(|e| e.world_body().transformed(&world_to_view))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vector::are_equal;

    fn unit_body() -> Sphere {
        Sphere::new(Vector3::ZERO, 1.0)
    }

    fn sample_scene() -> Scene {
        let mut scene = Scene::new();
        scene.add_entity(Transform::from_translation(Vector3::new(0.0, 0.0, 10.0)), unit_body());
        scene.add_entity(
            Transform {
                scale: 2.0,
                translate: Vector3::new(4.0, 0.0, 15.0),
                rotate: Quaternion::from_angle_axis(45.0, Vector3::UNIT_Y),
            },
            unit_body(),
        );
        scene
    }

    #[test]
    fn test_handles_follow_insertion_order() {
        let mut scene = Scene::new();
        assert!(scene.is_empty());
        assert_eq!(scene.first_id(), None);

        let a = scene.add_entity(Transform::identity(), unit_body());
        let b = scene.add_entity(Transform::from_scale(3.0), unit_body());
        assert_eq!(a.index(), 0);
        assert_eq!(b.index(), 1);
        assert_eq!(scene.len(), 2);
        assert_eq!(scene.next_id(a), Some(b));
        assert_eq!(scene.next_id(b), Some(a));
        assert_eq!(scene.entity(b).unwrap().transform.scale, 3.0);
    }

    #[test]
    fn test_to_world() {
        let world = sample_scene().to_world();
        assert_eq!(world.len(), 2);
        assert!(are_equal(world[0].center, Vector3::new(0.0, 0.0, 10.0)));
        assert!(are_equal(world[0].radius, 1.0));
        assert!(are_equal(world[1].center, Vector3::new(4.0, 0.0, 15.0)));
        assert!(are_equal(world[1].radius, 2.0));
    }

    #[test]
    fn test_to_view_from_identity_matches_world() {
        let scene = sample_scene();
        let world = scene.to_world();
        let view = scene.to_view(&Transform::identity());
        for (w, v) in world.iter().zip(&view) {
            assert!(are_equal(w.center, v.center));
            assert!(are_equal(w.radius, v.radius));
        }
    }

    #[test]
    fn test_to_view_expresses_bodies_in_observer_frame() {
        let scene = sample_scene();
        // Observer at the first entity, turned to face +X, scaled up.
        let observer = Transform {
            scale: 2.0,
            translate: Vector3::new(0.0, 0.0, 10.0),
            rotate: Quaternion::from_angle_axis(90.0, Vector3::UNIT_Y),
        };
        let view = scene.to_view(&observer);

        // Own body sits at the view origin, shrunk by the observer scale.
        assert!(are_equal(view[0].center, Vector3::ZERO));
        assert!(are_equal(view[0].radius, 0.5));

        // Mapping back to world recovers the world sphere.
        let world = scene.to_world();
        let back = view[1].transformed(&observer);
        assert!(are_equal(back.center, world[1].center));
        assert!(are_equal(back.radius, world[1].radius));

        // World +X is straight ahead (+Z) for the observer.
        assert!(view[1].center.z > 0.0);
    }

    #[test]
    fn test_entity_controls() {
        let mut scene = sample_scene();
        let id = scene.first_id().unwrap();
        let entity = scene.entity_mut(id).unwrap();

        entity.advance(2.0);
        assert!(are_equal(entity.transform.translate, Vector3::new(0.0, 0.0, 12.0)));

        entity.turn(&Quaternion::from_angle_axis(90.0, Vector3::UNIT_Y));
        assert!(are_equal(entity.transform.forward_dir(), Vector3::UNIT_X));
        entity.advance(1.0);
        assert!(are_equal(entity.transform.translate, Vector3::new(1.0, 0.0, 12.0)));

        entity.translate(Vector3::new(0.0, 1.0, 0.0));
        assert!(are_equal(entity.transform.translate, Vector3::new(1.0, 1.0, 12.0)));

        entity.rescale(1.5);
        entity.rescale(2.0);
        assert!(are_equal(entity.transform.scale, 3.0));
        assert!(are_equal(scene.to_world()[0].radius, 3.0));
    }
}
