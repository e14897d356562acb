//! Pipeline factory and per-frame orchestrator.
//!
//! A [`PipelineAsset`] is configuration owned by the host's asset
//! system; its one job is to produce a [`ForwardPipeline`]. The
//! pipeline instance is a stateless per-frame function: given a render
//! context and the active cameras, it executes a fixed sequence of
//! host-delegated operations per camera.

mod asset;
mod forward;
mod observer;

pub use asset::{PipelineAsset, PipelineRegistry};
pub use forward::ForwardPipeline;
pub use observer::FrameObserver;
