//! Oblique near-plane clipping.
//!
//! Replaces the near plane of a projection with an arbitrary
//! camera-space plane (Lengyel, "Oblique View Frustum Depth Projection
//! and Clipping"), here for a [0, 1] clip depth range. The far plane
//! is tilted as little as possible so depth precision survives.

use glam::{Mat4, Vec4};

/// Sign with a dead zone at zero (unlike `f32::signum`, which maps 0.0 to 1.0)
fn sgn(value: f32) -> f32 {
    if value > 0.0 {
        1.0
    } else if value < 0.0 {
        -1.0
    } else {
        0.0
    }
}

/// Build a projection whose near plane is `clip_plane`.
///
/// `clip_plane` is (A, B, C, D) in camera space, positive on the side
/// that stays visible. The camera origin must lie on the negative side
/// (it does for a mirrored camera behind its mirror). Points on the
/// plane land on clip depth 0; points behind it get negative depth and
/// are clipped.
///
/// Returns `projection` unchanged when the plane is degenerate for it
/// (parallel to the far corner direction, or non-finite).
pub fn oblique_projection(projection: &Mat4, clip_plane: Vec4) -> Mat4 {
    if !clip_plane.is_finite() || clip_plane.truncate().length_squared() == 0.0 {
        return *projection;
    }

    // Far frustum corner on the plane's positive side, in camera space
    let corner = Vec4::new(sgn(clip_plane.x), sgn(clip_plane.y), 1.0, 1.0);
    let q = projection.inverse() * corner;

    let denom = clip_plane.dot(q);
    if !denom.is_finite() || denom.abs() < f32::EPSILON {
        return *projection;
    }

    // New third row: the clip plane, scaled so the far plane passes through q
    let c = clip_plane * (1.0 / denom);

    let mut result = *projection;
    result.x_axis.z = c.x;
    result.y_axis.z = c.y;
    result.z_axis.z = c.z;
    result.w_axis.z = c.w;
    result
}

#[cfg(test)]
#[path = "oblique_tests.rs"]
mod tests;
