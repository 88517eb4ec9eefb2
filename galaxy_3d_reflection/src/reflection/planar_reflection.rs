/// Planar reflection component
///
/// One per reflective surface. Subscribes to the host's camera events
/// while enabled: on a camera's begin event the gate decides, and an
/// eligible camera gets a reflection rendered and published before its
/// own draw; the end event releases the target again.

use std::sync::{Arc, Mutex};
use glam::Mat4;
use crate::camera::{Camera, CameraId};
use crate::config::ReflectionConfig;
use crate::device::{RenderBackend, RenderContext};
use crate::error::Result;
use crate::pipeline::{
    CameraEventBus, CameraRenderObserver, RenderEventPhase, SharedObserver, SubscriptionKey,
};
use crate::scene::{ActivationVolume, SurfaceTargetList};
use super::exclusion::ExclusionSet;
use super::gate::{GateVerdict, ReflectionGate};
use super::plane::ReflectivePlane;
use super::synthesizer::{ReflectionCameraSynthesizer, ReflectionStats};

const LOG_SOURCE: &str = "galaxy3d::reflection::PlanarReflection";

/// A reflective surface and its reflection pass
#[derive(Debug)]
pub struct PlanarReflection {
    config: ReflectionConfig,
    volume: ActivationVolume,
    /// World matrix of the reflective surface; its local +Y is the mirror normal
    surface_transform: Mat4,
    exclusions: ExclusionSet,
    targets: SurfaceTargetList,
    synthesizer: ReflectionCameraSynthesizer,
    subscription: Option<SubscriptionKey>,
}

impl PlanarReflection {
    /// Create a disabled component with an identity surface transform
    /// and no target surfaces
    pub fn new(config: ReflectionConfig, volume: ActivationVolume) -> Self {
        Self {
            config,
            volume,
            surface_transform: Mat4::IDENTITY,
            exclusions: ExclusionSet::new(),
            targets: SurfaceTargetList::new(),
            synthesizer: ReflectionCameraSynthesizer::new(),
            subscription: None,
        }
    }

    /// Builder: set the surfaces receiving the reflection
    pub fn with_targets(mut self, targets: SurfaceTargetList) -> Self {
        self.targets = targets;
        self
    }

    /// Builder: place the reflective surface
    pub fn with_surface_transform(mut self, transform: Mat4) -> Self {
        self.surface_transform = transform;
        self
    }

    // ===== CONFIGURATION =====

    pub fn config(&self) -> &ReflectionConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut ReflectionConfig {
        &mut self.config
    }

    pub fn volume(&self) -> &ActivationVolume {
        &self.volume
    }

    pub fn volume_mut(&mut self) -> &mut ActivationVolume {
        &mut self.volume
    }

    pub fn targets(&self) -> &SurfaceTargetList {
        &self.targets
    }

    pub fn set_targets(&mut self, targets: SurfaceTargetList) {
        self.targets = targets;
    }

    pub fn surface_transform(&self) -> &Mat4 {
        &self.surface_transform
    }

    pub fn set_surface_transform(&mut self, transform: Mat4) {
        self.surface_transform = transform;
    }

    /// Mirror plane at the surface's current transform
    pub fn reflective_plane(&self) -> ReflectivePlane {
        ReflectivePlane::from_world_matrix(&self.surface_transform)
    }

    // ===== EXCLUSIONS =====

    /// Never trigger a reflection pass for `camera`
    pub fn add_excluded_camera(&mut self, camera: CameraId) {
        self.exclusions.add(camera);
    }

    pub fn remove_excluded_camera(&mut self, camera: CameraId) {
        self.exclusions.remove(camera);
    }

    pub fn clear_excluded_cameras(&mut self) {
        self.exclusions.clear();
    }

    pub fn is_camera_excluded(&self, camera: CameraId) -> bool {
        self.exclusions.contains(camera)
    }

    // ===== STATE =====

    /// Gate decision for `camera` against the current state
    pub fn evaluate(&self, camera: &Camera, phase: RenderEventPhase) -> GateVerdict {
        self.gate().evaluate(camera, phase)
    }

    /// The virtual camera, once a reflection has been rendered
    pub fn virtual_camera(&self) -> Option<&Camera> {
        self.synthesizer.virtual_camera()
    }

    pub fn stats(&self) -> ReflectionStats {
        self.synthesizer.stats()
    }

    /// Returns true while subscribed to camera events
    pub fn is_enabled(&self) -> bool {
        self.subscription.is_some()
    }

    fn gate(&self) -> ReflectionGate<'_> {
        ReflectionGate::new(
            &self.volume,
            &self.exclusions,
            self.synthesizer.virtual_camera_id(),
            self.config.allow_preview,
        )
    }

    // ===== LIFECYCLE =====

    /// Subscribe the component to `bus`.
    ///
    /// Enabling an enabled component returns its existing subscription.
    pub fn enable(this: &Arc<Mutex<Self>>, bus: &mut CameraEventBus) -> Result<SubscriptionKey> {
        let mut reflection = this.lock().map_err(|_| {
            crate::engine_err!(LOG_SOURCE, "Cannot enable: component lock is poisoned")
        })?;

        if let Some(key) = reflection.subscription {
            if bus.is_subscribed(key) {
                return Ok(key);
            }
        }

        let observer: SharedObserver = this.clone();
        let key = bus.subscribe(observer);
        reflection.subscription = Some(key);
        crate::engine_debug!(LOG_SOURCE, "Enabled ({} observers on bus)", bus.observer_count());
        Ok(key)
    }

    /// Unsubscribe from `bus` and destroy the virtual camera now.
    ///
    /// The virtual camera and its target are destroyed even when the
    /// component received events without `enable`. Disabling twice is a no-op.
    pub fn disable(&mut self, bus: &mut CameraEventBus, backend: &mut dyn RenderBackend) {
        if let Some(key) = self.subscription.take() {
            bus.unsubscribe(key);
            crate::engine_debug!(LOG_SOURCE, "Disabled");
        }
        self.synthesizer.teardown(backend);
    }

    /// Final teardown when the surface goes away; same as `disable`
    pub fn destroy(&mut self, bus: &mut CameraEventBus, backend: &mut dyn RenderBackend) {
        self.disable(bus, backend);
    }
}

impl CameraRenderObserver for PlanarReflection {
    fn on_begin_camera_rendering(
        &mut self,
        backend: &mut dyn RenderBackend,
        context: &RenderContext,
        camera: &Camera,
    ) -> Result<()> {
        if self.gate().should_skip(camera, RenderEventPhase::BeginCamera) {
            return Ok(());
        }

        let plane = self.reflective_plane();
        self.synthesizer.prepare(backend, context, camera, &plane, &self.config, &self.targets)
    }

    fn on_end_camera_rendering(
        &mut self,
        backend: &mut dyn RenderBackend,
        _context: &RenderContext,
        camera: &Camera,
    ) -> Result<()> {
        self.synthesizer.release_for(backend, camera.id());
        Ok(())
    }
}

#[cfg(test)]
#[path = "planar_reflection_tests.rs"]
mod tests;
