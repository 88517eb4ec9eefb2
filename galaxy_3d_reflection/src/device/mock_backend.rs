/// Mock RenderBackend for unit tests (no GPU required)
///
/// Records every allocation, release, render and publish so tests can
/// check buffer lifecycles and what the virtual camera looked like at
/// render time.

#[cfg(test)]
use std::sync::Arc;
#[cfg(test)]
use glam::{Mat4, Quat, Vec3};
#[cfg(test)]
use rustc_hash::FxHashSet;

#[cfg(test)]
use crate::camera::{Camera, CameraId, ClearMode, CameraFeatures};
#[cfg(test)]
use crate::device::{RenderBackend, RenderContext, RenderTexture, RenderTextureDesc, RenderTextureInfo};
#[cfg(test)]
use crate::error::{Error, Result};
#[cfg(test)]
use crate::scene::SurfaceId;

// ============================================================================
// Mock RenderTexture
// ============================================================================

#[cfg(test)]
#[derive(Debug)]
pub struct MockRenderTexture {
    pub info: RenderTextureInfo,
    pub name: String,
}

#[cfg(test)]
impl RenderTexture for MockRenderTexture {
    fn info(&self) -> &RenderTextureInfo {
        &self.info
    }
}

// ============================================================================
// Render record
// ============================================================================

/// Snapshot of a camera passed to `render_single_camera`
#[cfg(test)]
#[derive(Debug, Clone)]
pub struct RenderRecord {
    pub frame_index: u64,
    pub camera_id: CameraId,
    pub position: Vec3,
    pub rotation: Quat,
    pub projection: Mat4,
    pub world_to_camera: Mat4,
    pub target_size: Option<(u32, u32)>,
    pub clear_mode: ClearMode,
    pub features: CameraFeatures,
    pub culling_mask: u32,
    pub far_clip: f32,
    pub auto_render: bool,
}

// ============================================================================
// Mock RenderBackend
// ============================================================================

#[cfg(test)]
#[derive(Debug, Default)]
pub struct MockRenderBackend {
    /// Names of created textures, in creation order
    pub created: Vec<String>,
    /// Names of released textures, in release order
    pub released: Vec<String>,
    /// Every render_single_camera call
    pub renders: Vec<RenderRecord>,
    /// Successful publishes: (surface, parameter, texture name)
    pub published: Vec<(SurfaceId, String, String)>,
    /// Surfaces whose material has the reflection input
    pub bindable_surfaces: FxHashSet<SurfaceId>,
    /// Make create_render_texture fail
    pub fail_allocation: bool,
    /// Make render_single_camera fail
    pub fail_render: bool,
}

#[cfg(test)]
impl MockRenderBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mock whose listed surfaces accept the reflection texture
    pub fn with_surfaces(surfaces: &[SurfaceId]) -> Self {
        let mut backend = Self::new();
        backend.bindable_surfaces.extend(surfaces.iter().copied());
        backend
    }

    /// Textures created but not yet released
    pub fn live_textures(&self) -> usize {
        self.created.len() - self.released.len()
    }
}

#[cfg(test)]
impl RenderBackend for MockRenderBackend {
    fn create_render_texture(&mut self, desc: &RenderTextureDesc) -> Result<Arc<dyn RenderTexture>> {
        if self.fail_allocation {
            return Err(Error::OutOfMemory);
        }
        let name = format!("{}#{}_{}x{}", desc.name, self.created.len(), desc.width, desc.height);
        self.created.push(name.clone());
        Ok(Arc::new(MockRenderTexture {
            info: RenderTextureInfo::from_desc(desc),
            name,
        }))
    }

    fn release_render_texture(&mut self, texture: Arc<dyn RenderTexture>) {
        let info = texture.info();
        self.released.push(format!("{}x{}", info.width, info.height));
    }

    fn render_single_camera(&mut self, context: &RenderContext, camera: &Camera) -> Result<()> {
        if self.fail_render {
            return Err(Error::RenderFailed("mock render failure".to_string()));
        }
        self.renders.push(RenderRecord {
            frame_index: context.frame_index(),
            camera_id: camera.id(),
            position: camera.position(),
            rotation: camera.rotation(),
            projection: camera.projection_matrix(),
            world_to_camera: camera.world_to_camera_matrix(),
            target_size: camera.target_texture().map(|t| (t.info().width, t.info().height)),
            clear_mode: camera.clear_mode(),
            features: camera.features(),
            culling_mask: camera.culling_mask(),
            far_clip: camera.far_clip(),
            auto_render: camera.auto_render(),
        });
        Ok(())
    }

    fn publish_texture(
        &mut self,
        surface: SurfaceId,
        parameter: &str,
        texture: &Arc<dyn RenderTexture>,
    ) -> bool {
        if !self.bindable_surfaces.contains(&surface) {
            return false;
        }
        let info = texture.info();
        self.published.push((
            surface,
            parameter.to_string(),
            format!("{}x{}", info.width, info.height),
        ));
        true
    }
}
