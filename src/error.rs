//! Error types for the Nova render pipeline
//!
//! The pipeline itself has almost no failure surface: a camera without
//! usable culling parameters is skipped, not reported. These types carry
//! host-side failures (device errors, bad resources) across the
//! capability seam.

use std::fmt;

/// Result type for render pipeline operations
pub type Result<T> = std::result::Result<T, Error>;

/// Render pipeline errors
#[derive(Debug, Clone)]
pub enum Error {
    /// Backend-specific error reported by the host (Vulkan, DirectX, etc.)
    BackendError(String),

    /// Out of GPU memory
    OutOfMemory,

    /// Invalid resource (buffer, binding, debug stream, etc.)
    InvalidResource(String),

    /// Initialization failed (registry, debug print channel)
    InitializationFailed(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::BackendError(msg) => write!(f, "Backend error: {}", msg),
            Error::OutOfMemory => write!(f, "Out of GPU memory"),
            Error::InvalidResource(msg) => write!(f, "Invalid resource: {}", msg),
            Error::InitializationFailed(msg) => write!(f, "Initialization failed: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
