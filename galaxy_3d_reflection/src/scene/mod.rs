//! Scene module
//!
//! The parts of the scene a reflective surface refers to: its
//! activation volume and the surfaces that sample its output.

mod bounds;
mod surface;

pub use bounds::{AABB, ActivationVolume};
pub use surface::{SurfaceId, SurfaceTargetList};
