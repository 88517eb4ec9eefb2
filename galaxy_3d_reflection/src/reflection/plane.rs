//! Reflective plane and mirroring.
//!
//! The plane is rebuilt from the owning surface's world matrix every
//! time it is needed; it carries no identity of its own.

use glam::{Mat4, Vec3, Vec4};

/// Reflect a direction across a plane with unit normal `normal`:
/// `v - 2·dot(v, n)·n`
pub fn reflect_direction(direction: Vec3, normal: Vec3) -> Vec3 {
    direction - 2.0 * direction.dot(normal) * normal
}

/// Mirrored camera pose
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MirroredPose {
    pub position: Vec3,
    pub forward: Vec3,
    pub up: Vec3,
}

/// An oriented plane: a point on it and its unit normal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReflectivePlane {
    point: Vec3,
    normal: Vec3,
}

impl ReflectivePlane {
    /// Plane through `point` facing `normal`.
    ///
    /// The normal is normalized; a zero normal falls back to +Y.
    pub fn new(point: Vec3, normal: Vec3) -> Self {
        let normal = normal.try_normalize().unwrap_or(Vec3::Y);
        Self { point, normal }
    }

    /// Plane of a surface: its world position, facing its local +Y axis
    pub fn from_world_matrix(world: &Mat4) -> Self {
        Self::new(world.w_axis.truncate(), world.transform_vector3(Vec3::Y))
    }

    /// A point on the plane
    pub fn point(&self) -> Vec3 {
        self.point
    }

    /// Unit normal
    pub fn normal(&self) -> Vec3 {
        self.normal
    }

    /// Same plane pushed `distance` along its normal
    pub fn offset(&self, distance: f32) -> Self {
        Self { point: self.point + self.normal * distance, normal: self.normal }
    }

    /// World plane equation (n.x, n.y, n.z, -dot(n, p))
    pub fn equation(&self) -> Vec4 {
        self.normal.extend(-self.normal.dot(self.point))
    }

    /// Signed distance of `point` along the normal: `dot(n, point - p)`
    pub fn signed_distance(&self, point: Vec3) -> f32 {
        self.normal.dot(point - self.point)
    }

    /// Reflect a point across the plane: `c - 2·d·n`
    pub fn reflect_point(&self, point: Vec3) -> Vec3 {
        point - 2.0 * self.signed_distance(point) * self.normal
    }

    /// Reflect a direction across the plane
    pub fn reflect_direction(&self, direction: Vec3) -> Vec3 {
        reflect_direction(direction, self.normal)
    }

    /// Mirror a camera pose. Applying it twice gives back the input.
    pub fn mirror_pose(&self, position: Vec3, forward: Vec3, up: Vec3) -> MirroredPose {
        MirroredPose {
            position: self.reflect_point(position),
            forward: self.reflect_direction(forward),
            up: self.reflect_direction(up),
        }
    }

    /// Plane equation in the space of `world_to_camera`.
    ///
    /// The point goes through the full transform, the normal through
    /// the linear part only. For a rigid view transform (rotation +
    /// translation) that is exactly the camera-space plane.
    pub fn to_view_space(&self, world_to_camera: &Mat4) -> Vec4 {
        let view_point = world_to_camera.transform_point3(self.point);
        let view_normal = world_to_camera.transform_vector3(self.normal).normalize_or_zero();
        view_normal.extend(-view_point.dot(view_normal))
    }
}

#[cfg(test)]
#[path = "plane_tests.rs"]
mod tests;
