/// Camera — host-owned passive data container.
///
/// The Camera computes almost nothing. The host is responsible for
/// computing and setting all fields: view matrix, projection matrix,
/// viewport, clear mode, and background color. The pipeline reads them
/// once per frame and derives the clear state and culling parameters.

use glam::Mat4;
use crate::host::Viewport;
use super::frustum::Frustum;

/// How a camera clears its render target before drawing.
///
/// Four-way enumeration; the three per-camera clear booleans are derived
/// from it each frame (see [`ClearState`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClearMode {
    /// Clear depth, then fill the background with the skybox
    Skybox,
    /// Clear depth and color (using the camera's background color)
    Color,
    /// Clear depth only
    DepthOnly,
    /// Clear nothing (overdraw the previous contents)
    Nothing,
}

/// Per-camera clear decisions derived from [`ClearMode`].
///
/// Computed fresh for every camera, never cached across cameras.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClearState {
    /// Fill the background with the skybox after clearing
    pub draw_skybox: bool,
    /// Clear the depth attachment
    pub clear_depth: bool,
    /// Clear the color attachment with the camera's background color
    pub clear_color: bool,
}

impl ClearState {
    /// Derive the three clear decisions from a clear mode.
    ///
    /// `DepthOnly` clears depth and nothing else.
    pub fn from_mode(mode: ClearMode) -> Self {
        Self {
            draw_skybox: mode == ClearMode::Skybox,
            clear_depth: mode != ClearMode::Nothing,
            clear_color: mode == ClearMode::Color,
        }
    }
}

/// Per-camera culling input, handed to the host's culling service.
///
/// Ephemeral: derived at the start of a camera's render block and
/// consumed by `RenderContext::cull` the same frame.
#[derive(Debug, Clone)]
pub struct CullingParameters {
    /// Name of the source camera (for diagnostics and command attribution)
    pub camera_name: String,
    /// Culling frustum extracted from the view-projection matrix
    pub frustum: Frustum,
    /// View matrix at derivation time
    pub view_matrix: Mat4,
    /// Projection matrix at derivation time
    pub projection_matrix: Mat4,
}

/// Host-owned camera. A passive data container — computes almost nothing.
///
/// The host computes view/projection from its own high-level parameters
/// (position, rotation, FOV, etc.) and stores the results here.
#[derive(Debug, Clone)]
pub struct Camera {
    name: String,
    view_matrix: Mat4,
    projection_matrix: Mat4,
    viewport: Viewport,
    clear_mode: ClearMode,
    background_color: [f32; 4],
}

impl Camera {
    /// Create a new camera.
    ///
    /// Clear mode defaults to `Skybox`, background color to opaque black.
    pub fn new(name: impl Into<String>, view: Mat4, projection: Mat4, viewport: Viewport) -> Self {
        Self {
            name: name.into(),
            view_matrix: view,
            projection_matrix: projection,
            viewport,
            clear_mode: ClearMode::Skybox,
            background_color: [0.0, 0.0, 0.0, 1.0],
        }
    }

    // ===== GETTERS =====

    /// Camera name (used for diagnostics and command attribution).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// View matrix (inverse of the camera's world transform).
    pub fn view_matrix(&self) -> &Mat4 {
        &self.view_matrix
    }

    /// Projection matrix (perspective or orthographic).
    pub fn projection_matrix(&self) -> &Mat4 {
        &self.projection_matrix
    }

    /// Combined view-projection matrix (projection * view).
    pub fn view_projection_matrix(&self) -> Mat4 {
        self.projection_matrix * self.view_matrix
    }

    /// Viewport dimensions and depth range.
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Clear mode for this camera.
    pub fn clear_mode(&self) -> ClearMode {
        self.clear_mode
    }

    /// Background color used when the clear mode is `Color`.
    pub fn background_color(&self) -> [f32; 4] {
        self.background_color
    }

    /// Derive the per-frame clear decisions from the clear mode.
    pub fn clear_state(&self) -> ClearState {
        ClearState::from_mode(self.clear_mode)
    }

    /// Derive culling parameters for this camera.
    ///
    /// Returns `None` — not an error — when the camera cannot be culled:
    /// a degenerate viewport (non-positive width or height), or a
    /// non-finite / non-invertible view-projection matrix. Callers are
    /// expected to skip such cameras and continue the frame.
    pub fn culling_parameters(&self) -> Option<CullingParameters> {
        if self.viewport.width <= 0.0 || self.viewport.height <= 0.0 {
            return None;
        }

        let vp = self.view_projection_matrix();
        if !vp.is_finite() || vp.determinant() == 0.0 {
            return None;
        }

        Some(CullingParameters {
            camera_name: self.name.clone(),
            frustum: Frustum::from_view_projection(&vp),
            view_matrix: self.view_matrix,
            projection_matrix: self.projection_matrix,
        })
    }

    // ===== SETTERS — store, compute nothing =====

    /// Set the view matrix.
    pub fn set_view(&mut self, matrix: Mat4) {
        self.view_matrix = matrix;
    }

    /// Set the projection matrix.
    pub fn set_projection(&mut self, matrix: Mat4) {
        self.projection_matrix = matrix;
    }

    /// Set the viewport.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    /// Set the clear mode.
    pub fn set_clear_mode(&mut self, mode: ClearMode) {
        self.clear_mode = mode;
    }

    /// Set the background color.
    pub fn set_background_color(&mut self, color: [f32; 4]) {
        self.background_color = color;
    }
}

#[cfg(test)]
#[path = "camera_tests.rs"]
mod tests;
