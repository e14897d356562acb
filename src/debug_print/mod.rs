//! GPU-side debug print channel (feature `shader-debug-print`).
//!
//! Shaders append tagged words to a host-supplied buffer during the
//! frame; the pipeline brackets every frame with bind-setup at the start
//! and readback at the end. The whole module is compiled in only when
//! the `shader-debug-print` cargo feature is enabled — there is no
//! runtime switch.

mod input;
mod manager;

pub use input::{DebugPrintConstants, FRAMES_IN_FLIGHT};
pub use manager::{
    DebugPrintManager, DebugPrintValue, decode_stream,
    INPUT_CONSTANTS_NAME, OUTPUT_BUFFER_NAME,
};
