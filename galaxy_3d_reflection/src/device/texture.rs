/// Render texture trait, descriptor, and info
///
/// A render texture is an off-screen color + depth buffer that a
/// camera renders into. The backend owns the GPU memory; this crate
/// only holds `Arc<dyn RenderTexture>` handles and gives them back
/// through `RenderBackend::release_render_texture`.

/// Texture format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(non_camel_case_types)]
pub enum TextureFormat {
    // Color formats
    R8G8B8A8_SRGB,
    R8G8B8A8_UNORM,
    R16G16B16A16_SFLOAT,

    // Depth formats
    D16_UNORM,
    D32_FLOAT,
    D24_UNORM_S8_UINT,
}

impl TextureFormat {
    /// Returns true for depth/stencil formats
    pub fn is_depth(&self) -> bool {
        matches!(
            self,
            TextureFormat::D16_UNORM | TextureFormat::D32_FLOAT | TextureFormat::D24_UNORM_S8_UINT
        )
    }
}

/// Mip chain handling for a render texture
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MipmapMode {
    /// Single level
    None,
    /// Full chain, regenerated by the backend after each render
    Generate,
}

/// Number of levels in a full mip chain for the given size
pub fn mip_level_count(width: u32, height: u32) -> u32 {
    32 - width.max(height).max(1).leading_zeros()
}

// ===== RENDER TEXTURE DESC =====

/// Descriptor for creating a render texture
#[derive(Debug, Clone, PartialEq)]
pub struct RenderTextureDesc {
    /// Debug name
    pub name: String,
    /// Width in pixels (>= 1)
    pub width: u32,
    /// Height in pixels (>= 1)
    pub height: u32,
    /// Color attachment format
    pub color_format: TextureFormat,
    /// Depth attachment format (None = color only)
    pub depth_format: Option<TextureFormat>,
    /// Mip chain handling
    pub mipmap: MipmapMode,
    /// MSAA sample count (1 = no multisampling)
    pub samples: u32,
}

// ===== RENDER TEXTURE INFO =====

/// Read-only properties of a created render texture
#[derive(Debug, Clone, PartialEq)]
pub struct RenderTextureInfo {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
    /// Color attachment format
    pub color_format: TextureFormat,
    /// Depth attachment format
    pub depth_format: Option<TextureFormat>,
    /// Number of mip levels actually allocated
    pub mip_levels: u32,
    /// MSAA sample count
    pub samples: u32,
}

impl RenderTextureInfo {
    /// Info a backend reports for a texture created from `desc`
    pub fn from_desc(desc: &RenderTextureDesc) -> Self {
        let mip_levels = match desc.mipmap {
            MipmapMode::None => 1,
            MipmapMode::Generate => mip_level_count(desc.width, desc.height),
        };
        Self {
            width: desc.width,
            height: desc.height,
            color_format: desc.color_format,
            depth_format: desc.depth_format,
            mip_levels,
            samples: desc.samples,
        }
    }
}

// ===== RENDER TEXTURE TRAIT =====

/// Render texture resource trait
///
/// Implemented by backend-specific types. Dropping the last handle
/// without going through `release_render_texture` is allowed, but the
/// backend may then reclaim the memory later than expected.
pub trait RenderTexture: Send + Sync + std::fmt::Debug {
    /// Read-only properties of this texture
    fn info(&self) -> &RenderTextureInfo;
}
