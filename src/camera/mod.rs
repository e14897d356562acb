//! Camera module — passive camera data and culling parameters.
//!
//! Cameras are host-owned and read-only from the pipeline's perspective.
//! The host computes and sets all fields; the pipeline only derives the
//! per-camera clear state and culling parameters from them each frame.

mod camera;
mod frustum;

pub use camera::{Camera, ClearMode, ClearState, CullingParameters};
pub use frustum::{
    Frustum,
    PLANE_LEFT, PLANE_RIGHT, PLANE_BOTTOM, PLANE_TOP, PLANE_NEAR, PLANE_FAR,
};
