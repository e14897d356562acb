/// CullingResults — the host's answer to a per-camera cull request.
///
/// Produced by `RenderContext::cull` from one camera's culling
/// parameters. Ephemeral: lives for one camera's render block and is
/// consumed by `draw_renderers`. No Arc, no Mutex.

use slotmap::new_key_type;

new_key_type! {
    /// Key identifying a renderable object in the host's scene storage.
    pub struct RenderObjectKey;
}

/// Result of culling one camera. Ephemeral — lives for one frame.
///
/// Contains the source camera's name (for diagnostics and command
/// attribution) and the keys of the visible objects.
#[derive(Debug, Clone)]
pub struct CullingResults {
    camera_name: String,
    visible: Vec<RenderObjectKey>,
}

impl CullingResults {
    /// Create culling results. Called by host `RenderContext::cull`
    /// implementations.
    pub fn new(camera_name: impl Into<String>, visible: Vec<RenderObjectKey>) -> Self {
        Self {
            camera_name: camera_name.into(),
            visible,
        }
    }

    /// Name of the camera these results were culled for.
    pub fn camera_name(&self) -> &str {
        &self.camera_name
    }

    /// Keys of the visible objects.
    pub fn visible(&self) -> &[RenderObjectKey] {
        &self.visible
    }

    /// Number of visible objects.
    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }
}

#[cfg(test)]
#[path = "culling_tests.rs"]
mod tests;
