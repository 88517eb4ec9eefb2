/// Camera: pose, lens and capture settings of a rendering viewpoint.
///
/// Matrices are derived from the pose and lens on demand. A projection
/// override, when set, replaces the lens projection.
///
/// Conventions: right-handed, camera looks down -Z with +Y up,
/// clip-space depth in [0, 1].

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use bitflags::bitflags;
use glam::{Mat3, Mat4, Quat, Vec3, Vec4};
use crate::device::RenderTexture;
use super::frustum::Frustum;

// ===== IDENTITY =====

static NEXT_CAMERA_ID: AtomicU64 = AtomicU64::new(1);

/// Process-unique camera identity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CameraId(u64);

impl CameraId {
    /// Allocate a fresh identity
    pub fn next() -> Self {
        Self(NEXT_CAMERA_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// Raw value (for logging)
    pub fn raw(&self) -> u64 {
        self.0
    }
}

// ===== CLASSIFICATION =====

/// What a camera is used for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CameraRole {
    /// Regular in-game camera
    Normal,
    /// Editor / preview camera
    Preview,
    /// Camera capturing a reflection
    Reflection,
}

/// What a camera clears its target to before drawing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClearMode {
    /// Clear to the skybox
    Skybox,
    /// Clear to the background color
    SolidColor,
    /// Clear depth only
    DepthOnly,
    /// Clear nothing
    Nothing,
}

/// Skybox used as background when clearing with `ClearMode::Skybox`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Skybox {
    /// Skybox material name (None = host default)
    pub material: Option<String>,
    /// Whether the skybox draws at all
    pub enabled: bool,
}

bitflags! {
    /// Optional rendering features of a camera
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct CameraFeatures: u32 {
        /// High dynamic range target
        const HDR                = 1 << 0;
        /// Multisample anti-aliasing
        const MSAA               = 1 << 1;
        /// Physical lens model (sensor size, focal length)
        const PHYSICAL_LENS      = 1 << 2;
        /// Occlusion culling
        const OCCLUSION_CULLING  = 1 << 3;
        /// Dynamic resolution scaling
        const DYNAMIC_RESOLUTION = 1 << 4;
    }
}

// ===== CAMERA =====

/// A rendering viewpoint.
#[derive(Debug, Clone)]
pub struct Camera {
    id: CameraId,
    name: String,
    role: CameraRole,

    // Pose
    position: Vec3,
    rotation: Quat,

    // Lens
    fov_y: f32,
    aspect: f32,
    near_clip: f32,
    far_clip: f32,
    orthographic: bool,
    orthographic_size: f32,
    pixel_width: u32,
    pixel_height: u32,
    projection_override: Option<Mat4>,

    // Capture settings
    culling_mask: u32,
    rendering_layer_mask: u32,
    clear_mode: ClearMode,
    background_color: Vec4,
    skybox: Skybox,
    features: CameraFeatures,
    auto_render: bool,
    target_texture: Option<Arc<dyn RenderTexture>>,
}

impl Camera {
    /// Create a camera at the origin looking down -Z.
    ///
    /// Defaults: 60° vertical FOV, 1920x1080, near 0.3, far 1000,
    /// skybox clear, everything culled in, auto-rendered.
    pub fn new(name: &str, role: CameraRole) -> Self {
        Self {
            id: CameraId::next(),
            name: name.to_string(),
            role,
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            fov_y: 60f32.to_radians(),
            aspect: 1920.0 / 1080.0,
            near_clip: 0.3,
            far_clip: 1000.0,
            orthographic: false,
            orthographic_size: 5.0,
            pixel_width: 1920,
            pixel_height: 1080,
            projection_override: None,
            culling_mask: u32::MAX,
            rendering_layer_mask: 1,
            clear_mode: ClearMode::Skybox,
            background_color: Vec4::new(0.19, 0.3, 0.47, 0.0),
            skybox: Skybox { material: None, enabled: true },
            features: CameraFeatures::OCCLUSION_CULLING,
            auto_render: true,
            target_texture: None,
        }
    }

    // ===== IDENTITY =====

    /// Unique identity
    pub fn id(&self) -> CameraId {
        self.id
    }

    /// Debug name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Role classification
    pub fn role(&self) -> CameraRole {
        self.role
    }

    /// Set the role classification
    pub fn set_role(&mut self, role: CameraRole) {
        self.role = role;
    }

    // ===== POSE =====

    /// World position
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// World orientation
    pub fn rotation(&self) -> Quat {
        self.rotation
    }

    /// Set the world position
    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    /// Set the world orientation (normalized on store)
    pub fn set_rotation(&mut self, rotation: Quat) {
        self.rotation = rotation.normalize();
    }

    /// Viewing direction (-Z in camera space)
    pub fn forward(&self) -> Vec3 {
        self.rotation * Vec3::NEG_Z
    }

    /// Up direction (+Y in camera space)
    pub fn up(&self) -> Vec3 {
        self.rotation * Vec3::Y
    }

    /// Right direction (+X in camera space)
    pub fn right(&self) -> Vec3 {
        self.rotation * Vec3::X
    }

    /// Place the camera at `position` looking along `forward`, with
    /// `up` resolving roll.
    ///
    /// `up` only needs to be non-parallel to `forward`; it is
    /// re-orthogonalized. A parallel `up` picks an arbitrary roll.
    /// A zero `forward` keeps the current orientation.
    pub fn look_to(&mut self, position: Vec3, forward: Vec3, up: Vec3) {
        self.position = position;

        let forward = forward.normalize_or_zero();
        if forward == Vec3::ZERO {
            return;
        }

        let mut right = forward.cross(up);
        if right.length_squared() < 1e-12 {
            right = forward.any_orthonormal_vector();
        }
        let right = right.normalize();
        let up = right.cross(forward);

        self.rotation = Quat::from_mat3(&Mat3::from_cols(right, up, -forward)).normalize();
    }

    // ===== LENS =====

    /// Vertical field of view (radians)
    pub fn fov_y(&self) -> f32 {
        self.fov_y
    }

    /// Width / height ratio
    pub fn aspect(&self) -> f32 {
        self.aspect
    }

    /// Near clip distance
    pub fn near_clip(&self) -> f32 {
        self.near_clip
    }

    /// Far clip distance
    pub fn far_clip(&self) -> f32 {
        self.far_clip
    }

    /// Orthographic projection instead of perspective
    pub fn is_orthographic(&self) -> bool {
        self.orthographic
    }

    /// Half height of the orthographic view volume
    pub fn orthographic_size(&self) -> f32 {
        self.orthographic_size
    }

    /// Target width in pixels
    pub fn pixel_width(&self) -> u32 {
        self.pixel_width
    }

    /// Target height in pixels
    pub fn pixel_height(&self) -> u32 {
        self.pixel_height
    }

    /// Set the vertical field of view (radians)
    pub fn set_fov_y(&mut self, fov_y: f32) {
        self.fov_y = fov_y;
    }

    /// Set the aspect ratio explicitly
    pub fn set_aspect(&mut self, aspect: f32) {
        self.aspect = aspect;
    }

    /// Set near and far clip distances
    pub fn set_clip_planes(&mut self, near: f32, far: f32) {
        self.near_clip = near;
        self.far_clip = far;
    }

    /// Switch between orthographic and perspective
    pub fn set_orthographic(&mut self, orthographic: bool, size: f32) {
        self.orthographic = orthographic;
        self.orthographic_size = size;
    }

    /// Set the pixel size; the aspect follows (0 when height is 0)
    pub fn set_pixel_size(&mut self, width: u32, height: u32) {
        self.pixel_width = width;
        self.pixel_height = height;
        self.aspect = if height > 0 { width as f32 / height as f32 } else { 0.0 };
    }

    // ===== MATRICES =====

    /// Camera-to-world transform
    pub fn camera_to_world_matrix(&self) -> Mat4 {
        Mat4::from_rotation_translation(self.rotation, self.position)
    }

    /// World-to-camera (view) transform
    pub fn world_to_camera_matrix(&self) -> Mat4 {
        Mat4::from_quat(self.rotation.conjugate()) * Mat4::from_translation(-self.position)
    }

    /// Projection built from the lens settings, ignoring any override.
    ///
    /// A non-positive or non-finite aspect is treated as 1.0.
    pub fn base_projection_matrix(&self) -> Mat4 {
        let aspect = if self.aspect.is_finite() && self.aspect > 0.0 { self.aspect } else { 1.0 };
        if self.orthographic {
            let half_h = self.orthographic_size;
            let half_w = half_h * aspect;
            Mat4::orthographic_rh(-half_w, half_w, -half_h, half_h, self.near_clip, self.far_clip)
        } else {
            Mat4::perspective_rh(self.fov_y, aspect, self.near_clip, self.far_clip)
        }
    }

    /// Effective projection: the override if set, else the base projection
    pub fn projection_matrix(&self) -> Mat4 {
        self.projection_override.unwrap_or_else(|| self.base_projection_matrix())
    }

    /// Projection override, if any
    pub fn projection_override(&self) -> Option<&Mat4> {
        self.projection_override.as_ref()
    }

    /// Set or clear the projection override
    pub fn set_projection_override(&mut self, projection: Option<Mat4>) {
        self.projection_override = projection;
    }

    /// Combined view-projection matrix (projection * view)
    pub fn view_projection_matrix(&self) -> Mat4 {
        self.projection_matrix() * self.world_to_camera_matrix()
    }

    /// World-space frustum of the effective projection
    pub fn frustum(&self) -> Frustum {
        Frustum::from_view_projection(&self.view_projection_matrix())
    }

    // ===== CAPTURE SETTINGS =====

    /// Layers drawn by this camera
    pub fn culling_mask(&self) -> u32 {
        self.culling_mask
    }

    /// Rendering layer mask
    pub fn rendering_layer_mask(&self) -> u32 {
        self.rendering_layer_mask
    }

    /// Clear behavior
    pub fn clear_mode(&self) -> ClearMode {
        self.clear_mode
    }

    /// Background color used by `ClearMode::SolidColor`
    pub fn background_color(&self) -> Vec4 {
        self.background_color
    }

    /// Skybox used by `ClearMode::Skybox`
    pub fn skybox(&self) -> &Skybox {
        &self.skybox
    }

    /// Optional rendering features
    pub fn features(&self) -> CameraFeatures {
        self.features
    }

    /// Rendered automatically by the pipeline every frame
    pub fn auto_render(&self) -> bool {
        self.auto_render
    }

    /// Attached render target (None = screen)
    pub fn target_texture(&self) -> Option<&Arc<dyn RenderTexture>> {
        self.target_texture.as_ref()
    }

    /// Set the culling mask
    pub fn set_culling_mask(&mut self, mask: u32) {
        self.culling_mask = mask;
    }

    /// Set the rendering layer mask
    pub fn set_rendering_layer_mask(&mut self, mask: u32) {
        self.rendering_layer_mask = mask;
    }

    /// Set the clear behavior
    pub fn set_clear_mode(&mut self, mode: ClearMode) {
        self.clear_mode = mode;
    }

    /// Set the background color
    pub fn set_background_color(&mut self, color: Vec4) {
        self.background_color = color;
    }

    /// Set the skybox
    pub fn set_skybox(&mut self, skybox: Skybox) {
        self.skybox = skybox;
    }

    /// Replace the feature set
    pub fn set_features(&mut self, features: CameraFeatures) {
        self.features = features;
    }

    /// Enable or disable automatic rendering
    pub fn set_auto_render(&mut self, auto_render: bool) {
        self.auto_render = auto_render;
    }

    /// Attach a render target, returning the previous one
    pub fn set_target_texture(
        &mut self,
        texture: Option<Arc<dyn RenderTexture>>,
    ) -> Option<Arc<dyn RenderTexture>> {
        std::mem::replace(&mut self.target_texture, texture)
    }

    /// Detach and return the render target
    pub fn take_target_texture(&mut self) -> Option<Arc<dyn RenderTexture>> {
        self.target_texture.take()
    }
}

#[cfg(test)]
#[path = "camera_tests.rs"]
mod tests;
