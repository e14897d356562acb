/// Host capability traits — the contract any host engine must supply.
///
/// Implemented by the host's backend (Vulkan, Direct3D 12, etc.) or by
/// a mock for tests. The pipeline holds a `&mut dyn RenderContext` for
/// exactly one frame and issues the fixed call sequence against it.

use std::sync::Arc;

use crate::camera::{Camera, CullingParameters};
use crate::draw::{DrawSettings, FilterSettings};
use crate::error::Result;
use super::culling::CullingResults;

bitflags::bitflags! {
    /// Which attachments a clear command touches.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct ClearTargets: u32 {
        const COLOR = 1 << 0;
        const DEPTH = 1 << 1;
    }
}

/// Viewport dimensions and depth range
#[derive(Debug, Clone, Copy)]
pub struct Viewport {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub min_depth: f32,
    pub max_depth: f32,
}

/// Per-frame rendering context supplied by the host.
///
/// Submission order is GPU order: the pipeline calls these strictly
/// sequentially, one camera at a time, on the render thread.
pub trait RenderContext: Send + Sync {
    /// Run culling for one camera and return its visible set.
    ///
    /// Called at most once per camera per frame. The result is consumed
    /// by `draw_renderers` the same frame and never persisted.
    fn cull(&mut self, params: &CullingParameters) -> CullingResults;

    /// Apply camera-intrinsic properties (view/projection matrices,
    /// viewport) to the context's global shader state.
    fn setup_camera_properties(&mut self, camera: &Camera) -> Result<()>;

    /// Create an empty command buffer for recording.
    fn create_command_buffer(&self, name: &str) -> Box<dyn CommandBuffer>;

    /// Execute a recorded command buffer, consuming it.
    fn execute_command_buffer(&mut self, cmd: Box<dyn CommandBuffer>) -> Result<()>;

    /// Draw the skybox for a camera.
    fn draw_skybox(&mut self, camera: &Camera) -> Result<()>;

    /// Submit sorted, filtered draws for the visible set.
    ///
    /// The host applies `draw.sorting()` and restricts submission to
    /// renderers whose queue falls inside `filter.queue_range()`.
    fn draw_renderers(
        &mut self,
        cull: &CullingResults,
        draw: &DrawSettings,
        filter: &FilterSettings,
    ) -> Result<()>;

    /// Flush all work queued since the last submit to the device.
    fn submit(&mut self) -> Result<()>;
}

/// Command buffer for recording frame-setup commands.
///
/// Recording is CPU-side and infallible; failures surface when the
/// buffer is executed on the context.
pub trait CommandBuffer: Send + Sync {
    /// Buffer name (shows up in host-side captures and diagnostics).
    fn name(&self) -> &str;

    /// Record a clear of the given attachments. `color` is used only
    /// when `targets` contains `COLOR`.
    fn clear_render_target(&mut self, targets: ClearTargets, color: [f32; 4]);

    /// Record an upload of a named global constant block.
    fn set_global_constants(&mut self, name: &str, data: &[u8]);

    /// Record a binding of a named global buffer.
    fn set_global_buffer(&mut self, name: &str, buffer: &Arc<dyn GpuBuffer>);
}

/// GPU-visible buffer supplied by the host.
///
/// Used by the debug-print channel: shaders append tagged words, the
/// manager reads them back at end of frame.
pub trait GpuBuffer: Send + Sync {
    /// Buffer size in bytes.
    fn size(&self) -> u64;

    /// Write bytes at the given offset.
    fn write(&self, offset: u64, data: &[u8]) -> Result<()>;

    /// Read bytes at the given offset into `dest`.
    fn read(&self, offset: u64, dest: &mut [u8]) -> Result<()>;
}
