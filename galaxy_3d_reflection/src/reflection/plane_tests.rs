use glam::{Mat4, Quat, Vec3};
use crate::camera::{Camera, CameraRole};
use super::*;

fn approx(a: Vec3, b: Vec3) -> bool {
    (a - b).length() < 1e-4
}

fn tilted_plane() -> ReflectivePlane {
    ReflectivePlane::new(Vec3::new(2.0, -1.0, 3.0), Vec3::new(0.3, 0.9, -0.4))
}

// ============================================================================
// Construction
// ============================================================================

#[test]
fn test_new_normalizes_normal() {
    let plane = ReflectivePlane::new(Vec3::ZERO, Vec3::new(0.0, 4.0, 0.0));
    assert_eq!(plane.normal(), Vec3::Y);
}

#[test]
fn test_zero_normal_falls_back_to_up() {
    let plane = ReflectivePlane::new(Vec3::ONE, Vec3::ZERO);
    assert_eq!(plane.normal(), Vec3::Y);
}

#[test]
fn test_from_world_matrix_uses_local_up() {
    let world = Mat4::from_rotation_translation(
        Quat::from_rotation_x(std::f32::consts::FRAC_PI_2),
        Vec3::new(0.0, 1.0, -3.0),
    );
    let plane = ReflectivePlane::from_world_matrix(&world);

    assert!(approx(plane.point(), Vec3::new(0.0, 1.0, -3.0)));
    assert!(approx(plane.normal(), Vec3::Z));
}

#[test]
fn test_from_world_matrix_ignores_scale() {
    let world = Mat4::from_scale(Vec3::new(5.0, 0.1, 5.0));
    let plane = ReflectivePlane::from_world_matrix(&world);
    assert!(approx(plane.normal(), Vec3::Y));
}

// ============================================================================
// Mirroring
// ============================================================================

#[test]
fn test_reflect_point_formula() {
    let plane = tilted_plane();
    let c = Vec3::new(7.0, 4.0, -2.0);

    let expected = c - 2.0 * plane.normal().dot(c - plane.point()) * plane.normal();
    assert!(approx(plane.reflect_point(c), expected));
}

#[test]
fn test_reflected_point_is_equidistant() {
    let plane = tilted_plane();
    let c = Vec3::new(-3.0, 8.0, 1.0);
    let mirrored = plane.reflect_point(c);

    assert!((plane.signed_distance(mirrored) + plane.signed_distance(c)).abs() < 1e-4);
}

#[test]
fn test_mirror_pose_is_involution() {
    let plane = tilted_plane();
    let position = Vec3::new(4.0, 6.0, -5.0);
    let forward = Vec3::new(0.2, -0.7, 0.4).normalize();
    let up = forward.any_orthonormal_vector();

    let once = plane.mirror_pose(position, forward, up);
    let twice = plane.mirror_pose(once.position, once.forward, once.up);

    assert!(approx(twice.position, position));
    assert!(approx(twice.forward, forward));
    assert!(approx(twice.up, up));
}

#[test]
fn test_mirror_camera_looking_down_at_floor() {
    let plane = ReflectivePlane::new(Vec3::ZERO, Vec3::Y);
    let pose = plane.mirror_pose(Vec3::new(0.0, 5.0, 0.0), Vec3::NEG_Y, Vec3::NEG_Z);

    assert!(approx(pose.position, Vec3::new(0.0, -5.0, 0.0)));
    assert!(approx(pose.forward, Vec3::Y));
    assert!(approx(pose.up, Vec3::NEG_Z));
}

#[test]
fn test_mirror_preserves_orthonormality() {
    let plane = tilted_plane();
    let forward = Vec3::new(1.0, -1.0, 0.5).normalize();
    let up = Vec3::Y.cross(forward).cross(forward).normalize();
    let pose = plane.mirror_pose(Vec3::ZERO, forward, up);

    assert!((pose.forward.length() - 1.0).abs() < 1e-5);
    assert!((pose.up.length() - 1.0).abs() < 1e-5);
    assert!(pose.forward.dot(pose.up).abs() < 1e-5);
}

// ============================================================================
// View-space plane
// ============================================================================

#[test]
fn test_view_space_plane_vanishes_on_plane_points() {
    let plane = tilted_plane();
    let mut camera = Camera::new("mirror", CameraRole::Reflection);
    camera.look_to(Vec3::new(-6.0, -4.0, 9.0), Vec3::new(0.5, 0.6, -0.6), Vec3::Y);

    let world_to_camera = camera.world_to_camera_matrix();
    let view_plane = plane.to_view_space(&world_to_camera);

    let tangent_a = plane.normal().any_orthonormal_vector();
    let tangent_b = plane.normal().cross(tangent_a);
    for (s, t) in [(0.0, 0.0), (3.0, -2.0), (-10.0, 7.5), (25.0, 25.0)] {
        let world_point = plane.point() + tangent_a * s + tangent_b * t;
        let view_point = world_to_camera.transform_point3(world_point);
        assert!(view_plane.dot(view_point.extend(1.0)).abs() < 1e-3);
    }
}

#[test]
fn test_view_space_plane_keeps_side() {
    let plane = tilted_plane();
    let mut camera = Camera::new("mirror", CameraRole::Reflection);
    camera.look_to(Vec3::new(1.0, 2.0, 3.0), Vec3::NEG_Z, Vec3::Y);

    let world_to_camera = camera.world_to_camera_matrix();
    let view_plane = plane.to_view_space(&world_to_camera);

    let above = plane.point() + plane.normal() * 2.0;
    let view_above = world_to_camera.transform_point3(above);
    assert!((view_plane.dot(view_above.extend(1.0)) - 2.0).abs() < 1e-3);
}

#[test]
fn test_equation_and_offset() {
    let plane = ReflectivePlane::new(Vec3::new(0.0, 2.0, 0.0), Vec3::Y);
    assert_eq!(plane.equation(), glam::Vec4::new(0.0, 1.0, 0.0, -2.0));

    let raised = plane.offset(0.5);
    assert!(approx(raised.point(), Vec3::new(0.0, 2.5, 0.0)));
    assert_eq!(raised.normal(), Vec3::Y);
}
