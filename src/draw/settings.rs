/// Draw and filter settings for sorted draw submission.
///
/// The pipeline builds one `DrawSettings`/`FilterSettings` pair per
/// camera, submits the opaque queue with it, then re-sorts the same pair
/// for the transparent queue. How each criterion orders draws (exact
/// tie-breaks, state-change minimization) is the host's business.

/// Ordering rule applied by the host before submitting a batch of draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortingCriterion {
    /// Front-to-back, state-minimizing order for opaque geometry
    /// (maximizes early-z rejection).
    CommonOpaque,
    /// Back-to-front by camera distance for transparent geometry
    /// (required for correct alpha blending).
    CommonTransparent,
}

/// Inclusive render-queue interval used to partition draw submission.
///
/// Objects declare a queue number; submission only includes objects
/// whose queue falls inside the active range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderQueueRange {
    min: u32,
    max: u32,
}

impl RenderQueueRange {
    /// Opaque geometry queues.
    pub const OPAQUE: Self = Self { min: 0, max: 2500 };

    /// Transparent geometry queues.
    pub const TRANSPARENT: Self = Self { min: 2501, max: 5000 };

    /// Every queue.
    pub const ALL: Self = Self { min: 0, max: 5000 };

    /// Create an arbitrary inclusive range. `min` must not exceed `max`.
    pub fn new(min: u32, max: u32) -> Self {
        debug_assert!(min <= max, "queue range min {} > max {}", min, max);
        Self { min, max }
    }

    /// Lower bound (inclusive).
    pub fn min(&self) -> u32 {
        self.min
    }

    /// Upper bound (inclusive).
    pub fn max(&self) -> u32 {
        self.max
    }

    /// Whether a queue number falls inside this range.
    pub fn contains(&self, queue: u32) -> bool {
        queue >= self.min && queue <= self.max
    }
}

/// Per-camera draw submission settings. Recreated every frame.
#[derive(Debug, Clone)]
pub struct DrawSettings {
    pass_tag: String,
    sorting: SortingCriterion,
}

impl DrawSettings {
    /// Create draw settings for a shader pass tag with an initial
    /// sorting criterion.
    pub fn new(pass_tag: impl Into<String>, sorting: SortingCriterion) -> Self {
        Self {
            pass_tag: pass_tag.into(),
            sorting,
        }
    }

    /// Shader pass tag the host matches materials against.
    pub fn pass_tag(&self) -> &str {
        &self.pass_tag
    }

    /// Active sorting criterion.
    pub fn sorting(&self) -> SortingCriterion {
        self.sorting
    }

    /// Re-sort these settings for a different batch (the pipeline flips
    /// the same object from opaque to transparent order).
    pub fn set_sorting(&mut self, sorting: SortingCriterion) {
        self.sorting = sorting;
    }
}

/// Per-camera submission filter. Recreated every frame.
#[derive(Debug, Clone, Copy)]
pub struct FilterSettings {
    queue_range: RenderQueueRange,
}

impl FilterSettings {
    /// Create a filter restricted to the given queue range.
    pub fn new(queue_range: RenderQueueRange) -> Self {
        Self { queue_range }
    }

    /// Active queue range.
    pub fn queue_range(&self) -> RenderQueueRange {
        self.queue_range
    }

    /// Restrict to a different queue range.
    pub fn set_queue_range(&mut self, queue_range: RenderQueueRange) {
        self.queue_range = queue_range;
    }
}

#[cfg(test)]
#[path = "settings_tests.rs"]
mod tests;
