/// Frustum: six clipping planes extracted from a view-projection matrix.
///
/// Each plane is a Vec4 (A, B, C, D): (A, B, C) is the inward unit
/// normal and a point P is inside when dot(plane, (P, 1)) >= 0 for all
/// six planes.
///
/// Used to check what a reflection camera actually clips: with an
/// oblique projection the near plane is the mirror plane itself.

use glam::{Mat4, Vec3, Vec4};

/// Frustum plane indices
pub const PLANE_LEFT: usize = 0;
pub const PLANE_RIGHT: usize = 1;
pub const PLANE_BOTTOM: usize = 2;
pub const PLANE_TOP: usize = 3;
pub const PLANE_NEAR: usize = 4;
pub const PLANE_FAR: usize = 5;

/// Six frustum planes: left, right, bottom, top, near, far.
#[derive(Debug, Clone, Copy)]
pub struct Frustum {
    /// Frustum planes, normalized so that (A, B, C) is a unit vector
    pub planes: [Vec4; 6],
}

impl Frustum {
    /// Extract frustum planes from a view-projection matrix.
    ///
    /// Gribb & Hartmann for a [0, 1] clip depth range: the near plane is
    /// row 2 alone (z_clip >= 0), the far plane is row 3 - row 2.
    pub fn from_view_projection(vp: &Mat4) -> Self {
        let row0 = vp.row(0);
        let row1 = vp.row(1);
        let row2 = vp.row(2);
        let row3 = vp.row(3);

        let mut planes = [
            row3 + row0,
            row3 - row0,
            row3 + row1,
            row3 - row1,
            row2,
            row3 - row2,
        ];

        for plane in &mut planes {
            let normal_len = plane.truncate().length();
            if normal_len > 0.0 {
                *plane /= normal_len;
            }
        }

        Self { planes }
    }

    /// Near plane (A, B, C, D)
    pub fn near_plane(&self) -> Vec4 {
        self.planes[PLANE_NEAR]
    }

    /// Signed distance from a plane to a point (positive = inside)
    pub fn signed_distance(&self, plane_index: usize, point: Vec3) -> f32 {
        self.planes[plane_index].dot(point.extend(1.0))
    }

    /// Returns true if the point is inside or on all six planes,
    /// with `epsilon` of slack.
    pub fn contains_point(&self, point: Vec3, epsilon: f32) -> bool {
        let p = point.extend(1.0);
        self.planes.iter().all(|plane| plane.dot(p) >= -epsilon)
    }
}

#[cfg(test)]
#[path = "frustum_tests.rs"]
mod tests;
