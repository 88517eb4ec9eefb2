/*!
# Galaxy 3D Reflection

Planar reflections for the Galaxy 3D rendering engine.

A reflective surface owns a virtual camera. Before a host camera
renders, the surface mirrors that camera across its plane, clips the
mirrored view at the plane with an oblique projection, renders the
scene into a fresh off-screen target through the host renderer, and
hands the target to the surfaces that sample it. After the host camera
rendered, the target is released.

This crate does not rasterize anything: the host supplies a
`RenderBackend` and raises camera begin/end events through a
`CameraEventBus`.

## Architecture

- **ReflectionGate**: decides which cameras get a reflection pass
- **ReflectionCameraSynthesizer**: virtual camera, target lifecycle, oblique projection
- **PlanarReflection**: the per-surface component subscribed to camera events
- **RenderBackend**: host renderer seam (targets, single-camera render, publish)
- **CameraEventBus**: host camera event subscriptions
*/

// Internal modules
mod error;
mod engine;
pub mod log;
pub mod config;
pub mod camera;
pub mod scene;
pub mod device;
pub mod pipeline;
pub mod reflection;

// Main galaxy3d namespace module
pub mod galaxy3d {
    // Error types
    pub use crate::error::{Error, Result};

    // Engine logging front-end
    pub use crate::engine::Engine;

    // Logging sub-module (types only, NOT macros)
    pub mod log {
        pub use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};
    }

    pub mod config {
        pub use crate::config::*;
    }

    pub mod camera {
        pub use crate::camera::*;
    }

    pub mod scene {
        pub use crate::scene::*;
    }

    // Host renderer seam
    pub mod device {
        pub use crate::device::*;
    }

    // Camera render events
    pub mod pipeline {
        pub use crate::pipeline::*;
    }

    pub mod reflection {
        pub use crate::reflection::*;
    }
}

// Re-export math library at crate root
pub use glam;
