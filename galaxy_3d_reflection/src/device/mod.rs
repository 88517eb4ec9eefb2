/// Device module - host renderer seam: render textures and the backend trait

pub mod texture;
pub mod backend;

pub use texture::*;
pub use backend::*;

// Mock backend for tests (no GPU required)
#[cfg(test)]
pub mod mock_backend;
