use glam::{Mat4, Vec3};
use super::*;

fn perspective_vp() -> Mat4 {
    let view = Mat4::look_at_rh(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO, Vec3::Y);
    let proj = Mat4::perspective_rh(std::f32::consts::FRAC_PI_4, 16.0 / 9.0, 0.1, 100.0);
    proj * view
}

// ============================================================================
// Plane extraction
// ============================================================================

#[test]
fn test_planes_are_normalized() {
    let frustum = Frustum::from_view_projection(&perspective_vp());
    for plane in &frustum.planes {
        let normal_len = Vec3::new(plane.x, plane.y, plane.z).length();
        assert!((normal_len - 1.0).abs() < 1e-4, "plane normal length {}", normal_len);
    }
}

#[test]
fn test_plane_count_and_indices() {
    let frustum = Frustum::from_view_projection(&perspective_vp());
    assert_eq!(frustum.planes.len(), 6);
    // Near and far normals point in opposite directions along the view axis
    let near = frustum.planes[PLANE_NEAR];
    let far = frustum.planes[PLANE_FAR];
    let dot = Vec3::new(near.x, near.y, near.z).dot(Vec3::new(far.x, far.y, far.z));
    assert!(dot < 0.0);
}

// ============================================================================
// Point containment
// ============================================================================

#[test]
fn test_point_in_front_of_camera_is_inside() {
    let frustum = Frustum::from_view_projection(&perspective_vp());
    // Camera at z=5 looking at the origin
    assert!(frustum.contains_point(Vec3::ZERO));
    assert!(frustum.contains_point(Vec3::new(0.0, 0.0, 2.0)));
}

#[test]
fn test_point_behind_camera_is_outside() {
    let frustum = Frustum::from_view_projection(&perspective_vp());
    assert!(!frustum.contains_point(Vec3::new(0.0, 0.0, 10.0)));
}

#[test]
fn test_point_beyond_far_plane_is_outside() {
    let frustum = Frustum::from_view_projection(&perspective_vp());
    assert!(!frustum.contains_point(Vec3::new(0.0, 0.0, -200.0)));
}

#[test]
fn test_orthographic_projection_works() {
    let view = Mat4::look_at_rh(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO, Vec3::Y);
    let proj = Mat4::orthographic_rh(-10.0, 10.0, -10.0, 10.0, 0.1, 100.0);
    let frustum = Frustum::from_view_projection(&(proj * view));

    assert!(frustum.contains_point(Vec3::ZERO));
    assert!(!frustum.contains_point(Vec3::new(50.0, 0.0, 0.0)));
}
