/// Cameras that must never trigger a reflection pass

use rustc_hash::FxHashSet;
use crate::camera::CameraId;

/// Set of excluded camera identities.
///
/// Membership is by identity only. Adding twice is the same as adding
/// once, removing a non-member does nothing.
#[derive(Debug, Clone, Default)]
pub struct ExclusionSet {
    cameras: FxHashSet<CameraId>,
}

impl ExclusionSet {
    /// Create an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Exclude a camera. Returns false if it was already excluded.
    pub fn add(&mut self, camera: CameraId) -> bool {
        self.cameras.insert(camera)
    }

    /// Stop excluding a camera. Returns false if it was not excluded.
    pub fn remove(&mut self, camera: CameraId) -> bool {
        self.cameras.remove(&camera)
    }

    /// Remove every exclusion
    pub fn clear(&mut self) {
        self.cameras.clear();
    }

    pub fn contains(&self, camera: CameraId) -> bool {
        self.cameras.contains(&camera)
    }

    pub fn len(&self) -> usize {
        self.cameras.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cameras.is_empty()
    }
}

#[cfg(test)]
#[path = "exclusion_tests.rs"]
mod tests;
