//! Scene Context Tests
//!
//! Tests for:
//! - Target registration, lookup, and property writes
//! - Transform look-at math and forward vectors
//! - Camera projection / aspect updates
//! - Starfield scatter determinism and bounds

use std::f32::consts::FRAC_PI_2;

use glam::Vec3;

use orrery::scene::starfield;
use orrery::{Camera, Error, Property, SceneContext, Transform};

const EPSILON: f32 = 1e-5;

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

fn approx_vec3(a: Vec3, b: Vec3) -> bool {
    (a - b).abs().max_element() < EPSILON
}

// ============================================================================
// Target registration and lookup
// ============================================================================

#[test]
fn insert_and_lookup_roundtrip() {
    let mut scene = SceneContext::new();
    let key = scene.insert("model").unwrap();

    assert!(scene.contains("model"));
    assert_eq!(scene.key_of("model"), Some(key));
    assert_eq!(scene.get("model").unwrap().name, "model");
    assert_eq!(scene.len(), 1);
    assert!(!scene.is_empty());
}

#[test]
fn duplicate_name_is_rejected() {
    let mut scene = SceneContext::new();
    scene.insert("model").unwrap();
    let err = scene.insert("model").unwrap_err();
    assert!(matches!(err, Error::DuplicateTarget(name) if name == "model"));
    assert_eq!(scene.len(), 1);
}

#[test]
fn absent_target_reads_as_none() {
    let scene = SceneContext::new();
    // Pending asynchronous loads look exactly like this.
    assert!(scene.get("room").is_none());
    assert!(scene.key_of("room").is_none());
}

#[test]
fn set_writes_the_named_property() {
    let mut scene = SceneContext::new();
    scene.insert("light").unwrap();

    scene
        .set("light", Property::Position, Vec3::new(10.0, 10.0, 5.0))
        .unwrap();
    scene
        .set("light", Property::Rotation, Vec3::new(0.1, 0.2, 0.3))
        .unwrap();

    let t = scene.get("light").unwrap().transform;
    assert!(approx_vec3(t.position, Vec3::new(10.0, 10.0, 5.0)));
    assert!(approx_vec3(t.rotation, Vec3::new(0.1, 0.2, 0.3)));

    let err = scene.set("missing", Property::Position, Vec3::ZERO).unwrap_err();
    assert!(matches!(err, Error::TargetNotReady(_)));
}

// ============================================================================
// Transform look-at
// ============================================================================

#[test]
fn look_at_down_negative_z_is_identity() {
    let mut t = Transform::from_position(Vec3::new(0.0, 0.0, 10.0));
    t.look_at(Vec3::ZERO);
    assert!(approx_vec3(t.rotation, Vec3::ZERO));
}

#[test]
fn look_at_from_positive_x_yaws_quarter_turn() {
    let mut t = Transform::from_position(Vec3::new(10.0, 0.0, 0.0));
    t.look_at(Vec3::ZERO);
    assert!(approx(t.rotation.x, 0.0));
    assert!(approx(t.rotation.y, FRAC_PI_2));
}

#[test]
fn look_at_forward_points_at_target() {
    let mut t = Transform::from_position(Vec3::new(5.0, 5.0, 10.0));
    let target = Vec3::new(0.0, 1.0, -2.0);
    t.look_at(target);

    let dir = (target - t.position).normalize();
    let fwd = t.forward();
    assert!(
        (fwd - dir).abs().max_element() < 1e-4,
        "forward {fwd:?} != dir {dir:?}"
    );
    // Roll stays zero.
    assert!(approx(t.rotation.z, 0.0));
}

#[test]
fn look_at_degenerate_direction_is_a_no_op() {
    let mut t = Transform::from_position(Vec3::new(1.0, 2.0, 3.0));
    t.rotation = Vec3::new(0.4, 0.5, 0.0);
    t.look_at(t.position);
    assert!(approx_vec3(t.rotation, Vec3::new(0.4, 0.5, 0.0)));
}

// ============================================================================
// Camera projection
// ============================================================================

#[test]
fn camera_stores_fov_in_radians() {
    let cam = Camera::new_perspective(75.0, 16.0 / 9.0, 0.1, 1000.0);
    assert!(approx(cam.fov, 75.0_f32.to_radians()));
}

#[test]
fn set_aspect_refreshes_projection() {
    let mut cam = Camera::new_perspective(75.0, 1.0, 0.1, 1000.0);
    let square = cam.projection_matrix();

    cam.set_aspect(2.0);
    let wide = cam.projection_matrix();
    assert!(approx(cam.aspect, 2.0));
    // Horizontal scale halves when the aspect doubles.
    assert!(approx(wide.x_axis.x, square.x_axis.x / 2.0));
    // Vertical scale is aspect-independent.
    assert!(approx(wide.y_axis.y, square.y_axis.y));
}

#[test]
fn view_matrix_inverts_the_camera_transform() {
    let mut t = Transform::from_position(Vec3::new(5.0, 5.0, 10.0));
    t.look_at(Vec3::ZERO);

    let view = Camera::view_matrix(&t);
    // The camera's own position maps to the view-space origin.
    let origin = view.transform_point3(t.position);
    assert!(origin.abs().max_element() < 1e-4);
}

// ============================================================================
// Starfield
// ============================================================================

#[test]
fn scatter_is_deterministic_per_seed() {
    let a = starfield::scatter(500, 50.0, 7);
    let b = starfield::scatter(500, 50.0, 7);
    let c = starfield::scatter(500, 50.0, 8);
    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn scatter_respects_count_and_bounds() {
    let extent = 25.0;
    let stars = starfield::scatter(1000, extent, 42);
    assert_eq!(stars.len(), 1000);
    for star in &stars {
        assert!(star.abs().max_element() <= extent);
    }
}
