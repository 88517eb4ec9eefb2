//! Camera module: pose, lens and capture settings, and the frustum.
//!
//! Cameras are owned by whoever drives them: the host owns its own
//! cameras, the reflection synthesizer owns its virtual camera.

mod camera;
mod frustum;

pub use camera::{Camera, CameraId, CameraRole, ClearMode, Skybox, CameraFeatures};
pub use frustum::{
    Frustum,
    PLANE_LEFT, PLANE_RIGHT, PLANE_BOTTOM, PLANE_TOP, PLANE_NEAR, PLANE_FAR,
};
