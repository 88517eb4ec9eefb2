/// Reflection camera synthesizer
///
/// Owns the virtual camera of one reflective surface and its current
/// target buffer. Each eligible frame it copies the source camera's
/// settings, mirrors its pose, allocates a fresh target, installs an
/// oblique projection clipped at the mirror, renders and publishes.
/// The matching end event releases the target.

use std::sync::Arc;
use crate::camera::{Camera, CameraFeatures, CameraId, CameraRole, ClearMode};
use crate::config::ReflectionConfig;
use crate::device::{
    MipmapMode, RenderBackend, RenderContext, RenderTexture, RenderTextureDesc, TextureFormat,
};
use crate::error::Result;
use crate::scene::SurfaceTargetList;
use super::oblique::oblique_projection;
use super::plane::ReflectivePlane;

const LOG_SOURCE: &str = "galaxy3d::reflection::Synthesizer";

/// Name given to every virtual camera
pub const VIRTUAL_CAMERA_NAME: &str = "Planar Reflection Camera";

/// Features never carried over to the reflection pass
const FORCED_OFF_FEATURES: CameraFeatures = CameraFeatures::HDR
    .union(CameraFeatures::MSAA)
    .union(CameraFeatures::PHYSICAL_LENS);

/// Synthesizer statistics, cumulative since creation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReflectionStats {
    /// Successful reflection renders
    pub renders: u64,
    /// Target buffers allocated
    pub allocations: u64,
    /// Target buffers released
    pub releases: u64,
    /// Surfaces that received a target
    pub publishes: u64,
    /// Target list entries skipped (empty entry or no texture input)
    pub publish_skips: u64,
}

impl ReflectionStats {
    /// Target buffers allocated and not yet released (0 or 1)
    pub fn live_targets(&self) -> u64 {
        self.allocations.saturating_sub(self.releases)
    }
}

/// Size of the reflection target for a source camera.
///
/// Width is `pixel_width * quality_scale` clamped to [1, max_size],
/// rounded toward zero. Height is `width / aspect`, rounded toward zero
/// and clamped to [1, max_size]. A zero, negative or non-finite aspect
/// gives a square target.
pub fn reflection_target_size(
    pixel_width: u32,
    aspect: f32,
    quality_scale: f32,
    max_size: u32,
) -> (u32, u32) {
    let max_size = max_size.max(1);

    let scaled = pixel_width as f32 * quality_scale;
    // NaN survives clamp and casts to 0
    let width = (scaled.clamp(1.0, max_size as f32) as u32).clamp(1, max_size);

    let height = if aspect.is_finite() && aspect > 0.0 {
        (width as f32 / aspect) as u32
    } else {
        width
    };

    (width, height.clamp(1, max_size))
}

/// Builds, renders and releases the virtual camera of one surface.
#[derive(Debug, Default)]
pub struct ReflectionCameraSynthesizer {
    virtual_camera: Option<Camera>,
    serving: Option<CameraId>,
    stats: ReflectionStats,
}

impl ReflectionCameraSynthesizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// The virtual camera, once created
    pub fn virtual_camera(&self) -> Option<&Camera> {
        self.virtual_camera.as_ref()
    }

    /// Identity of the virtual camera, once created
    pub fn virtual_camera_id(&self) -> Option<CameraId> {
        self.virtual_camera.as_ref().map(Camera::id)
    }

    /// Source camera the current target was rendered for
    pub fn serving(&self) -> Option<CameraId> {
        self.serving
    }

    /// Returns true if a target buffer is attached
    pub fn has_target(&self) -> bool {
        self.virtual_camera
            .as_ref()
            .is_some_and(|camera| camera.target_texture().is_some())
    }

    pub fn stats(&self) -> ReflectionStats {
        self.stats
    }

    /// Render the reflection of `plane` as seen from `source`.
    ///
    /// The caller has already run the gate. Any target left from an
    /// earlier event is released first. On allocation or render failure
    /// nothing stays allocated and the error is returned.
    pub fn prepare(
        &mut self,
        backend: &mut dyn RenderBackend,
        context: &RenderContext,
        source: &Camera,
        plane: &ReflectivePlane,
        config: &ReflectionConfig,
        targets: &SurfaceTargetList,
    ) -> Result<()> {
        self.release(backend);

        let camera = self.virtual_camera.get_or_insert_with(|| {
            let camera = Camera::new(VIRTUAL_CAMERA_NAME, CameraRole::Reflection);
            crate::engine_debug!(LOG_SOURCE,
                "Created virtual camera {} (first source: '{}')",
                camera.id().raw(), source.name());
            camera
        });

        propagate_settings(camera, source, config);

        let pose = plane.mirror_pose(source.position(), source.forward(), source.up());
        camera.look_to(pose.position, pose.forward, pose.up);

        let (width, height) = reflection_target_size(
            source.pixel_width(),
            source.aspect(),
            config.clamped_quality_scale(),
            config.clamped_max_texture_size(),
        );
        let desc = RenderTextureDesc {
            name: format!("PlanarReflection_{}", camera.id().raw()),
            width,
            height,
            color_format: TextureFormat::R8G8B8A8_UNORM,
            depth_format: Some(TextureFormat::D24_UNORM_S8_UINT),
            mipmap: MipmapMode::Generate,
            samples: 1,
        };
        let texture = backend.create_render_texture(&desc)?;
        self.stats.allocations += 1;
        crate::engine_trace!(LOG_SOURCE, "Allocated target '{}' {}x{}", desc.name, width, height);
        camera.set_target_texture(Some(Arc::clone(&texture)));
        camera.set_pixel_size(width, height);
        camera.set_aspect(source.aspect());

        let clip_plane = plane
            .offset(config.clip_plane_offset)
            .to_view_space(&camera.world_to_camera_matrix());
        let projection = oblique_projection(&camera.base_projection_matrix(), clip_plane);
        camera.set_projection_override(Some(projection));

        if let Err(err) = backend.render_single_camera(context, camera) {
            self.release(backend);
            return Err(err);
        }
        self.stats.renders += 1;
        self.serving = Some(source.id());

        self.publish(backend, &texture, &config.texture_parameter, targets);
        Ok(())
    }

    /// Release the current target, if any.
    ///
    /// Without a virtual camera or target this does nothing.
    pub fn release(&mut self, backend: &mut dyn RenderBackend) {
        self.serving = None;

        let Some(texture) = self.virtual_camera.as_mut().and_then(|camera| camera.take_target_texture()) else {
            return;
        };
        let info = texture.info();
        crate::engine_trace!(LOG_SOURCE, "Releasing target {}x{}", info.width, info.height);
        backend.release_render_texture(texture);
        self.stats.releases += 1;
    }

    /// Release the target only if it was rendered for `source`.
    ///
    /// Returns true if a target was released.
    pub fn release_for(&mut self, backend: &mut dyn RenderBackend, source: CameraId) -> bool {
        if self.serving != Some(source) {
            return false;
        }
        let released_before = self.stats.releases;
        self.release(backend);
        self.stats.releases > released_before
    }

    /// Destroy the virtual camera and its target now.
    pub fn teardown(&mut self, backend: &mut dyn RenderBackend) {
        self.release(backend);
        if let Some(camera) = self.virtual_camera.take() {
            crate::engine_debug!(LOG_SOURCE, "Destroyed virtual camera {}", camera.id().raw());
        }
    }

    fn publish(
        &mut self,
        backend: &mut dyn RenderBackend,
        texture: &Arc<dyn RenderTexture>,
        parameter: &str,
        targets: &SurfaceTargetList,
    ) {
        for (index, entry) in targets.iter().enumerate() {
            match entry {
                Some(surface) if backend.publish_texture(surface, parameter, texture) => {
                    self.stats.publishes += 1;
                }
                Some(surface) => {
                    self.stats.publish_skips += 1;
                    crate::engine_debug!(LOG_SOURCE,
                        "Surface {} has no '{}' input, skipped", surface.0, parameter);
                }
                None => {
                    self.stats.publish_skips += 1;
                    crate::engine_debug!(LOG_SOURCE, "Target entry {} is empty, skipped", index);
                }
            }
        }
    }
}

/// Copy the source camera's render settings onto the virtual camera
fn propagate_settings(camera: &mut Camera, source: &Camera, config: &ReflectionConfig) {
    camera.set_fov_y(source.fov_y());
    camera.set_aspect(source.aspect());
    camera.set_orthographic(source.is_orthographic(), source.orthographic_size());
    camera.set_clip_planes(source.near_clip(), config.clamped_far_clip(source.near_clip()));

    camera.set_culling_mask(source.culling_mask() & config.reflection_layers);
    camera.set_rendering_layer_mask(source.rendering_layer_mask());
    camera.set_features(source.features().difference(FORCED_OFF_FEATURES));
    camera.set_auto_render(false);

    if config.render_background {
        camera.set_clear_mode(source.clear_mode());
        camera.set_background_color(source.background_color());
        camera.set_skybox(source.skybox().clone());
    } else {
        camera.set_clear_mode(ClearMode::Nothing);
    }
}

#[cfg(test)]
#[path = "synthesizer_tests.rs"]
mod tests;
