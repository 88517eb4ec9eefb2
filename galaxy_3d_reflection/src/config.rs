/// Planar reflection configuration
///
/// Authoring-time fields of a reflective surface. Plain data with
/// public fields; the clamping accessors are what the synthesizer reads.

/// Default `quality_scale`, also used when the configured value is not finite
pub const DEFAULT_QUALITY_SCALE: f32 = 0.5;
/// Lower bound of `quality_scale`
pub const MIN_QUALITY_SCALE: f32 = 0.05;
/// Upper bound of `quality_scale`
pub const MAX_QUALITY_SCALE: f32 = 1.0;
/// Default hard upper bound for the reflection target width/height
pub const DEFAULT_MAX_TEXTURE_SIZE: u32 = 8192;
/// Default material input receiving the reflection target
pub const DEFAULT_TEXTURE_PARAMETER: &str = "_ReflectionTex";

/// Planar reflection configuration
#[derive(Debug, Clone, PartialEq)]
pub struct ReflectionConfig {
    /// Fraction of the source camera's pixel width (0.05 - 1.0)
    pub quality_scale: f32,
    /// Far clip distance of the virtual camera, in world units.
    /// Independent of the source camera's far plane.
    pub far_clip: f32,
    /// Mirror the source camera's clear mode and skybox.
    /// When false, the virtual camera clears nothing.
    pub render_background: bool,
    /// Allow editor/preview cameras to trigger a reflection pass
    pub allow_preview: bool,
    /// Hard upper bound for the target width and height
    pub max_texture_size: u32,
    /// Distance the oblique clip plane is pushed along the plane normal
    pub clip_plane_offset: f32,
    /// Layers the reflection may draw (ANDed with the source culling mask)
    pub reflection_layers: u32,
    /// Material input that receives the rendered target
    pub texture_parameter: String,
}

impl Default for ReflectionConfig {
    fn default() -> Self {
        Self {
            quality_scale: DEFAULT_QUALITY_SCALE,
            far_clip: 100.0,
            render_background: true,
            allow_preview: false,
            max_texture_size: DEFAULT_MAX_TEXTURE_SIZE,
            clip_plane_offset: 0.0,
            reflection_layers: u32::MAX,
            texture_parameter: DEFAULT_TEXTURE_PARAMETER.to_string(),
        }
    }
}

impl ReflectionConfig {
    /// `quality_scale` clamped to [MIN_QUALITY_SCALE, MAX_QUALITY_SCALE].
    ///
    /// NaN/infinite values fall back to the default scale.
    pub fn clamped_quality_scale(&self) -> f32 {
        if self.quality_scale.is_finite() {
            self.quality_scale.clamp(MIN_QUALITY_SCALE, MAX_QUALITY_SCALE)
        } else {
            DEFAULT_QUALITY_SCALE
        }
    }

    /// `far_clip` kept strictly beyond `near_clip`.
    pub fn clamped_far_clip(&self, near_clip: f32) -> f32 {
        let min_far = near_clip + 0.01;
        if self.far_clip.is_finite() && self.far_clip > min_far {
            self.far_clip
        } else {
            min_far
        }
    }

    /// `max_texture_size`, never below 1
    pub fn clamped_max_texture_size(&self) -> u32 {
        self.max_texture_size.max(1)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
