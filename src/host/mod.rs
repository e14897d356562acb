//! Host capability interfaces.
//!
//! Everything that does real graphics work — culling, camera setup,
//! command execution, draw submission — is supplied by the host engine
//! through these traits. The pipeline never talks to a GPU directly,
//! which keeps the orchestration testable without one.

mod context;
mod culling;
pub mod mock_context;

pub use context::{RenderContext, CommandBuffer, GpuBuffer, ClearTargets, Viewport};
pub use culling::{CullingResults, RenderObjectKey};
