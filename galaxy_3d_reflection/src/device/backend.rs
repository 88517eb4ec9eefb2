/// RenderBackend trait - what the host renderer provides to reflections
///
/// The reflection code never rasterizes. It asks the host for a target,
/// asks it to render one camera into that target, hands the result to
/// surfaces, and gives the target back.

use std::sync::Arc;
use crate::camera::Camera;
use crate::error::Result;
use crate::scene::SurfaceId;
use super::texture::{RenderTexture, RenderTextureDesc};

/// Opaque per-event render context.
///
/// Forwarded unchanged from the camera event that triggered a
/// reflection pass to the nested `render_single_camera` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderContext {
    frame_index: u64,
}

impl RenderContext {
    /// Create a context for the given frame
    pub fn new(frame_index: u64) -> Self {
        Self { frame_index }
    }

    /// Frame this context belongs to
    pub fn frame_index(&self) -> u64 {
        self.frame_index
    }
}

/// Host renderer capabilities used by the reflection synthesizer.
///
/// All calls happen on the render thread, inside camera begin/end
/// events, so implementations need no internal locking.
pub trait RenderBackend {
    /// Allocate a render texture.
    ///
    /// `desc.width` and `desc.height` are always >= 1.
    fn create_render_texture(&mut self, desc: &RenderTextureDesc) -> Result<Arc<dyn RenderTexture>>;

    /// Release a render texture created by `create_render_texture`
    fn release_render_texture(&mut self, texture: Arc<dyn RenderTexture>);

    /// Render the scene from `camera` into its attached target, synchronously
    fn render_single_camera(&mut self, context: &RenderContext, camera: &Camera) -> Result<()>;

    /// Bind `texture` to the material input `parameter` of `surface`.
    ///
    /// Returns false if the surface has no material or the material
    /// has no such input. Not an error: the caller moves on to the
    /// next surface.
    fn publish_texture(
        &mut self,
        surface: SurfaceId,
        parameter: &str,
        texture: &Arc<dyn RenderTexture>,
    ) -> bool;
}
