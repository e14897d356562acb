/*!
# Nova Render Pipeline

A minimal custom frame render pipeline for trait-based 3D engine hosts.

This crate is a thin orchestration layer: per-frame culling, clearing, and
opaque/transparent draw submission, with an optional GPU-side debug-print
bracket. All real graphics work — culling, sorting, shader binding, buffer
submission — is delegated to a host engine through the capability traits in
[`host`]. Backend implementations (Vulkan, Direct3D 12, etc.) live on the
host's side of that seam.

## Architecture

- **RenderContext**: host capability trait — culling, camera setup, command
  buffer execution, draw submission
- **PipelineAsset**: configuration object; produces one pipeline instance
- **ForwardPipeline**: stateless per-frame orchestrator
- **FrameObserver**: synchronous frame/camera lifecycle hooks
- **DebugPrintManager**: process-wide GPU debug-print channel (compiled in
  only with the `shader-debug-print` feature)
*/

// Internal modules
mod error;
pub mod log;
pub mod camera;
pub mod host;
pub mod draw;
pub mod pipeline;
#[cfg(feature = "shader-debug-print")]
pub mod debug_print;

// Main nova namespace module
pub mod nova {
    // Error types
    pub use crate::error::{Error, Result};

    // Logging sub-module (types only, NOT macros)
    pub mod log {
        pub use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};
        // Note: pipeline_* macros are NOT re-exported here - they are internal only
    }

    // Camera sub-module
    pub mod camera {
        pub use crate::camera::*;
    }

    // Host capability sub-module
    pub mod host {
        pub use crate::host::*;
    }

    // Draw submission settings
    pub mod draw {
        pub use crate::draw::*;
    }

    // Pipeline factory and per-frame orchestrator
    pub mod pipeline {
        pub use crate::pipeline::*;
    }

    // GPU debug print channel
    #[cfg(feature = "shader-debug-print")]
    pub mod debug_print {
        pub use crate::debug_print::*;
    }
}

// Re-export math library at crate root
pub use glam;
