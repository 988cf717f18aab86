use glyphcast::render::GLYPHS;
use glyphcast::vector::are_equal;
use glyphcast::{
    Camera, Command, Controls, Hittable, NearestHit, Plane, Quaternion, Ray, Renderer, Scene,
    Session, Sphere, Transform, Vector3,
};

fn reference_scene() -> Scene {
    let mut scene = Scene::new();
    let body = Sphere::new(Vector3::ZERO, 1.0);
    scene.add_entity(Transform::from_translation(Vector3::new(0.0, 0.0, 6.0)), body);
    scene.add_entity(Transform::from_translation(Vector3::new(-3.0, 0.0, 12.0)), body);
    scene.add_entity(
        Transform {
            scale: 1.5,
            translate: Vector3::new(4.0, 0.0, 15.0),
            rotate: Quaternion::from_angle_axis(30.0, Vector3::UNIT_Y),
        },
        body,
    );
    scene
}

#[test]
fn test_reference_frame_shape() {
    let renderer = Renderer::default();
    let text = renderer.render(&reference_scene().to_world()).to_text();

    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 30);
    for line in &lines {
        assert_eq!(line.len(), 60);
    }
    // Every two-character cell is a known glyph
    for line in &lines {
        for cell in line.as_bytes().chunks(2) {
            let cell = std::str::from_utf8(cell).unwrap();
            assert!(GLYPHS.contains(&cell), "unexpected glyph {:?}", cell);
        }
    }
}

#[test]
fn test_render_twice_is_byte_identical() {
    let renderer = Renderer::default();
    let spheres = reference_scene().to_world();
    assert_eq!(renderer.render(&spheres).to_text(), renderer.render(&spheres).to_text());
}

#[test]
fn test_parallel_render_matches_sequential_pixels() {
    let renderer = Renderer::default();
    let spheres = reference_scene().to_world();
    let frame = renderer.render(&spheres);
    for y in 0..renderer.camera.pixel_dim_y {
        for x in 0..renderer.camera.pixel_dim_x {
            assert_eq!(frame.intensity(x, y), renderer.pixel(x, y, &spheres));
        }
    }
}

#[test]
fn test_nearest_hit_is_global_minimum() {
    let spheres = reference_scene().to_world();
    let ground = Plane::new(Vector3::new(0.0, -1.5, 0.0), Vector3::UNIT_Y);
    let camera = Camera::new(2.0, 30, 30);

    for y in 0..30 {
        for x in 0..30 {
            let ray = camera.primary_ray(x, y);
            let mut objects: Vec<&dyn Hittable> = vec![&ground];
            objects.extend(spheres.iter().map(|s| s as &dyn Hittable));

            let start = NearestHit::new(1000.0);
            let forward = objects.iter().fold(start, |n, o| n.offer(&ray, *o));
            let backward = objects.iter().rev().fold(start, |n, o| n.offer(&ray, *o));
            assert_eq!(forward.hit().map(|h| h.distance), backward.hit().map(|h| h.distance));

            let minimum = objects
                .iter()
                .filter_map(|o| o.hit(&ray, NearestHit::new(1000.0).range()))
                .map(|h| h.distance)
                .fold(f64::INFINITY, f64::min);
            match forward.hit() {
                Some(hit) => assert!(are_equal(hit.distance, minimum)),
                None => assert!(minimum.is_infinite()),
            }
        }
    }
}

#[test]
fn test_first_person_sees_what_is_ahead() {
    let scene = reference_scene();
    let renderer = Renderer::default();
    let session = Session::new(scene, Controls::default());

    // From the world origin the first sphere fills the centre pixel.
    let third = session.render(&renderer);
    assert!(third.intensity(15, 15) > 0.0);

    // From inside the first entity its own body is a miss (origin inside
    // the sphere) and the second sphere is off to the left.
    let first = session.update(Command::ToggleView).render(&renderer);
    assert_eq!(first.intensity(15, 15), 0.0);
}

#[test]
fn test_observer_transform_matches_manual_inverse() {
    let scene = reference_scene();
    let observer = Transform {
        scale: 0.5,
        translate: Vector3::new(1.0, 2.0, -3.0),
        rotate: Quaternion::from_angle_axis(-65.0, Vector3::new(0.0, 1.0, 0.2)),
    };
    let view = scene.to_view(&observer);
    for (w, v) in scene.to_world().iter().zip(&view) {
        let ray_world = Ray::new(observer.translate, w.center - observer.translate);
        let ray_view = Ray::new(Vector3::ZERO, v.center);
        assert!(are_equal(observer.transform_versor(ray_view.direction), ray_world.direction));
        assert!(are_equal(observer.transform_scalar(v.radius), w.radius));
    }
}
