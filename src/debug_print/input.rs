/// Per-frame debug print input constants.
///
/// Uploaded once per frame as a global constant block so shaders can
/// correlate their output with the frame and react to cursor input
/// (e.g. print only for the pixel under the cursor).

use bytemuck::{Pod, Zeroable};

/// Number of frames the debug output cycles over before wrapping.
///
/// Matches the host's frames-in-flight depth so a shader can tell
/// which in-flight frame a message belongs to.
pub const FRAMES_IN_FLIGHT: u32 = 4;

/// GPU-visible input constants for the debug print channel.
///
/// 16 bytes, tightly packed; uploaded verbatim via
/// `CommandBuffer::set_global_constants`.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct DebugPrintConstants {
    /// Frame index modulo [`FRAMES_IN_FLIGHT`]
    pub frame_cycle: u32,
    /// Cursor x position in surface pixels
    pub cursor_x: f32,
    /// Cursor y position in surface pixels
    pub cursor_y: f32,
    /// Host-defined button state bitmask
    pub button_mask: u32,
}

#[cfg(test)]
#[path = "input_tests.rs"]
mod tests;
