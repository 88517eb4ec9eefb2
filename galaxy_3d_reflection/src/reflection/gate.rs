/// Reflection gate: does this camera need a reflection pass?
///
/// Pure predicate over the current component state. The activation
/// volume is tested first, so a camera outside the volume is skipped
/// whatever its role.

use crate::camera::{Camera, CameraId, CameraRole};
use crate::pipeline::RenderEventPhase;
use crate::scene::ActivationVolume;
use super::exclusion::ExclusionSet;

/// Why a camera gets no reflection pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Camera position is outside the activation volume
    OutsideVolume,
    /// Camera is itself a reflection camera (any instance's)
    ReflectionRole,
    /// Preview camera while previews are disallowed
    PreviewDisallowed,
    /// Camera identity is in the exclusion set
    Excluded,
    /// Camera is this instance's own virtual camera
    VirtualCamera,
}

/// Gate decision
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateVerdict {
    Render,
    Skip(SkipReason),
}

impl GateVerdict {
    pub fn is_skip(&self) -> bool {
        matches!(self, GateVerdict::Skip(_))
    }
}

/// Borrowed view of the state the gate decides on
#[derive(Debug, Clone, Copy)]
pub struct ReflectionGate<'a> {
    pub volume: &'a ActivationVolume,
    pub exclusions: &'a ExclusionSet,
    pub virtual_camera: Option<CameraId>,
    pub allow_preview: bool,
}

impl<'a> ReflectionGate<'a> {
    pub fn new(
        volume: &'a ActivationVolume,
        exclusions: &'a ExclusionSet,
        virtual_camera: Option<CameraId>,
        allow_preview: bool,
    ) -> Self {
        Self { volume, exclusions, virtual_camera, allow_preview }
    }

    /// Decide for `camera` at `phase`
    pub fn evaluate(&self, camera: &Camera, phase: RenderEventPhase) -> GateVerdict {
        let verdict = self.decide(camera);
        if let GateVerdict::Skip(reason) = verdict {
            crate::engine_trace!("galaxy3d::reflection::Gate",
                "{:?}: camera '{}' ({}) skipped: {:?}",
                phase, camera.name(), camera.id().raw(), reason);
        }
        verdict
    }

    /// True if `camera` gets no reflection pass
    pub fn should_skip(&self, camera: &Camera, phase: RenderEventPhase) -> bool {
        self.evaluate(camera, phase).is_skip()
    }

    fn decide(&self, camera: &Camera) -> GateVerdict {
        if !self.volume.contains(camera.position()) {
            return GateVerdict::Skip(SkipReason::OutsideVolume);
        }

        match camera.role() {
            CameraRole::Reflection => return GateVerdict::Skip(SkipReason::ReflectionRole),
            CameraRole::Preview if !self.allow_preview => {
                return GateVerdict::Skip(SkipReason::PreviewDisallowed);
            }
            _ => {}
        }

        if self.exclusions.contains(camera.id()) {
            return GateVerdict::Skip(SkipReason::Excluded);
        }

        if self.virtual_camera == Some(camera.id()) {
            return GateVerdict::Skip(SkipReason::VirtualCamera);
        }

        GateVerdict::Render
    }
}

#[cfg(test)]
#[path = "gate_tests.rs"]
mod tests;
