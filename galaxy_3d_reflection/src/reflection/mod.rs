//! Reflection module
//!
//! Planar reflections: the mirror plane, oblique near-plane clipping,
//! the gate deciding which cameras get a reflection pass, the
//! synthesizer owning the virtual camera, and the component tying them
//! to the host's camera events.

mod plane;
mod oblique;
mod exclusion;
mod gate;
mod synthesizer;
mod planar_reflection;

pub use plane::{ReflectivePlane, MirroredPose, reflect_direction};
pub use oblique::oblique_projection;
pub use exclusion::ExclusionSet;
pub use gate::{ReflectionGate, GateVerdict, SkipReason};
pub use synthesizer::{
    ReflectionCameraSynthesizer, ReflectionStats, reflection_target_size, VIRTUAL_CAMERA_NAME,
};
pub use planar_reflection::PlanarReflection;
