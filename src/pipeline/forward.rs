/// ForwardPipeline — the per-frame render orchestrator.
///
/// Stateless per-frame function over a host-supplied `RenderContext`:
/// holds only configuration (pass tag, observers), mutates nothing
/// across frames, and is reusable frame after frame with no reset.
///
/// All real graphics work is delegated to the host; the pipeline's job
/// is the fixed call sequence and its ordering invariants.

use std::sync::Arc;

use crate::camera::Camera;
use crate::draw::{DrawSettings, FilterSettings, RenderQueueRange, SortingCriterion};
use crate::error::Result;
use crate::host::{ClearTargets, RenderContext};
#[cfg(feature = "shader-debug-print")]
use crate::debug_print::DebugPrintManager;
use super::observer::FrameObserver;

const SOURCE: &str = "nova::ForwardPipeline";

/// Per-frame render orchestrator produced by a `PipelineAsset`.
pub struct ForwardPipeline {
    pass_tag: String,
    observers: Vec<Arc<dyn FrameObserver>>,
}

impl ForwardPipeline {
    /// Create a pipeline instance submitting draws under `pass_tag`.
    pub fn new(pass_tag: impl Into<String>) -> Self {
        Self {
            pass_tag: pass_tag.into(),
            observers: Vec::new(),
        }
    }

    /// Shader pass tag this pipeline submits draws under.
    pub fn pass_tag(&self) -> &str {
        &self.pass_tag
    }

    /// Subscribe a frame observer. Observers are invoked synchronously
    /// in registration order.
    pub fn add_observer(&mut self, observer: Arc<dyn FrameObserver>) {
        self.observers.push(observer);
    }

    /// Render exactly one frame across all active cameras, in the order
    /// the host supplied them.
    ///
    /// Cameras without usable culling parameters are skipped silently
    /// (they contribute nothing to the command stream); any failure
    /// reported by the host aborts the frame and propagates.
    pub fn render(&self, ctx: &mut dyn RenderContext, cameras: &[Camera]) -> Result<()> {
        for observer in &self.observers {
            observer.frame_begin(cameras);
        }

        // Debug-print bindings are frame-global: they must be in place
        // before any camera records a draw that might emit output.
        #[cfg(feature = "shader-debug-print")]
        {
            let mut cmd = ctx.create_command_buffer("Shader Debug Print");
            let manager = DebugPrintManager::instance();
            manager.set_input_constants(cmd.as_mut());
            manager.set_bindings(cmd.as_mut())?;
            ctx.execute_command_buffer(cmd)?;
        }

        for camera in cameras {
            for observer in &self.observers {
                observer.camera_begin(camera);
            }

            // Inactive or mis-configured cameras must not abort the frame.
            let Some(culling_params) = camera.culling_parameters() else {
                crate::pipeline_debug!(SOURCE,
                    "camera '{}' has no usable culling parameters, skipping", camera.name());
                continue;
            };

            crate::pipeline_trace!(SOURCE, "rendering camera '{}'", camera.name());

            let cull = ctx.cull(&culling_params);
            ctx.setup_camera_properties(camera)?;

            // Derived fresh per camera, never cached across cameras.
            let clear = camera.clear_state();

            let mut clear_targets = ClearTargets::empty();
            if clear.clear_depth {
                clear_targets |= ClearTargets::DEPTH;
            }
            if clear.clear_color {
                clear_targets |= ClearTargets::COLOR;
            }

            let mut cmd = ctx.create_command_buffer("Clear");
            if !clear_targets.is_empty() {
                cmd.clear_render_target(clear_targets, camera.background_color());
            }
            ctx.execute_command_buffer(cmd)?;

            if clear.draw_skybox {
                ctx.draw_skybox(camera)?;
            }

            // Opaque first, then transparent: re-sort and re-filter the
            // same settings objects, as the two batches differ only in
            // ordering rule and queue range.
            let mut draw_settings =
                DrawSettings::new(self.pass_tag.clone(), SortingCriterion::CommonOpaque);
            let mut filter_settings = FilterSettings::new(RenderQueueRange::OPAQUE);
            ctx.draw_renderers(&cull, &draw_settings, &filter_settings)?;

            draw_settings.set_sorting(SortingCriterion::CommonTransparent);
            filter_settings.set_queue_range(RenderQueueRange::TRANSPARENT);
            ctx.draw_renderers(&cull, &draw_settings, &filter_settings)?;

            ctx.submit()?;

            for observer in &self.observers {
                observer.camera_end(camera);
            }
        }

        for observer in &self.observers {
            observer.frame_end(cameras);
        }

        #[cfg(feature = "shader-debug-print")]
        DebugPrintManager::instance().end_frame()?;

        Ok(())
    }
}

#[cfg(test)]
#[path = "forward_tests.rs"]
mod tests;
