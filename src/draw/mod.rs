//! Draw submission settings.
//!
//! Ephemeral per-camera configuration describing which render-queue
//! range to submit and in what order. Recreated every frame; no
//! cross-frame state.

mod settings;

pub use settings::{DrawSettings, FilterSettings, RenderQueueRange, SortingCriterion};
