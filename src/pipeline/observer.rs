/// Frame lifecycle observers.
///
/// Extension points for unrelated systems (profilers, stats overlays,
/// editor tooling). Observers are invoked synchronously on the render
/// thread, in registration order, and must not assume any GPU state.

use crate::camera::Camera;

/// Synchronous frame/camera lifecycle hooks.
///
/// All methods default to no-ops; implementors override only what they
/// need. `camera_begin` fires for every camera handed to the pipeline,
/// including cameras later skipped for missing culling parameters;
/// `camera_end` fires only for cameras that actually rendered.
pub trait FrameObserver: Send + Sync {
    /// Called once at the start of a frame, before any GPU command.
    fn frame_begin(&self, _cameras: &[Camera]) {}

    /// Called before a camera's render block.
    fn camera_begin(&self, _camera: &Camera) {}

    /// Called after a camera's work has been submitted.
    fn camera_end(&self, _camera: &Camera) {}

    /// Called once after all cameras, before the frame returns.
    fn frame_end(&self, _cameras: &[Camera]) {}
}

#[cfg(test)]
#[path = "observer_tests.rs"]
mod tests;
