/// Bounding volumes: axis-aligned boxes and the reflection activation volume.

use glam::{Mat4, Vec3};

// ===== AABB =====

/// Axis-Aligned Bounding Box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AABB {
    /// Minimum corner (x, y, z)
    pub min: Vec3,
    /// Maximum corner (x, y, z)
    pub max: Vec3,
}

impl AABB {
    /// Box from a center and half extents
    pub fn from_center_half_extents(center: Vec3, half_extents: Vec3) -> Self {
        let half_extents = half_extents.abs();
        Self { min: center - half_extents, max: center + half_extents }
    }

    /// Center point
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Transform this local-space AABB by a matrix, returning a new AABB.
    ///
    /// Arvo method: projects each matrix axis onto the extents for a
    /// tight result without transforming all 8 corners.
    pub fn transformed(&self, matrix: &Mat4) -> AABB {
        let translation = matrix.col(3).truncate();
        let mut new_min = translation;
        let mut new_max = translation;

        for i in 0..3 {
            let axis = matrix.col(i).truncate();
            let a = axis * self.min[i];
            let b = axis * self.max[i];
            new_min += a.min(b);
            new_max += a.max(b);
        }

        AABB { min: new_min, max: new_max }
    }

    /// Returns true if the point is inside or on the boundary
    pub fn contains_point(&self, point: Vec3) -> bool {
        point.cmpge(self.min).all() && point.cmple(self.max).all()
    }
}

// ===== ACTIVATION VOLUME =====

/// Region in which observer cameras trigger a reflection pass.
///
/// An oriented box: local bounds plus the world matrix of the object it
/// is attached to. Containment is tested against the world-space
/// bounds (the axis-aligned box enclosing the oriented one), which is
/// what the host's physics bounds report.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActivationVolume {
    local_bounds: AABB,
    world_matrix: Mat4,
}

impl ActivationVolume {
    /// Volume with the given local bounds at the world origin
    pub fn new(local_bounds: AABB) -> Self {
        Self { local_bounds, world_matrix: Mat4::IDENTITY }
    }

    /// Volume with local bounds placed by `world_matrix`
    pub fn with_transform(local_bounds: AABB, world_matrix: Mat4) -> Self {
        Self { local_bounds, world_matrix }
    }

    /// Local-space bounds
    pub fn local_bounds(&self) -> &AABB {
        &self.local_bounds
    }

    /// World matrix of the attached object
    pub fn world_matrix(&self) -> &Mat4 {
        &self.world_matrix
    }

    /// Move the volume (host side: the attached object moved)
    pub fn set_world_matrix(&mut self, world_matrix: Mat4) {
        self.world_matrix = world_matrix;
    }

    /// Current world-space bounds
    pub fn world_bounds(&self) -> AABB {
        self.local_bounds.transformed(&self.world_matrix)
    }

    /// Returns true if the world-space point lies within the current world bounds
    pub fn contains(&self, point: Vec3) -> bool {
        self.world_bounds().contains_point(point)
    }
}

#[cfg(test)]
#[path = "bounds_tests.rs"]
mod tests;
