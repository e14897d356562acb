/// Mock host for unit tests (no GPU required)
///
/// Records every host call into a single ordered command stream so tests
/// can assert the pipeline's sequencing properties: which camera each
/// command belongs to, opaque-before-transparent, debug bracket
/// placement, and the total absence of commands for skipped cameras.

#[cfg(test)]
use std::sync::{Arc, Mutex};

#[cfg(test)]
use crate::camera::{Camera, CullingParameters};
#[cfg(test)]
use crate::draw::{DrawSettings, FilterSettings};
#[cfg(test)]
use crate::error::{Error, Result};
#[cfg(test)]
use super::context::{ClearTargets, CommandBuffer, GpuBuffer, RenderContext};
#[cfg(test)]
use super::culling::{CullingResults, RenderObjectKey};

/// Shared, ordered record of every host call in a frame
#[cfg(test)]
pub type CommandStream = Arc<Mutex<Vec<String>>>;

// ============================================================================
// Mock CommandBuffer
// ============================================================================

/// Command buffer that records into the shared stream at record time,
/// tagged with the buffer name
#[cfg(test)]
pub struct MockCommandBuffer {
    name: String,
    stream: CommandStream,
}

#[cfg(test)]
impl CommandBuffer for MockCommandBuffer {
    fn name(&self) -> &str {
        &self.name
    }

    fn clear_render_target(&mut self, targets: ClearTargets, color: [f32; 4]) {
        self.stream.lock().unwrap().push(format!(
            "cmd[{}]: clear_render_target(depth={}, color={}, {:?})",
            self.name,
            targets.contains(ClearTargets::DEPTH),
            targets.contains(ClearTargets::COLOR),
            color,
        ));
    }

    fn set_global_constants(&mut self, name: &str, data: &[u8]) {
        self.stream.lock().unwrap().push(format!(
            "cmd[{}]: set_global_constants({}, {} bytes)",
            self.name,
            name,
            data.len(),
        ));
    }

    fn set_global_buffer(&mut self, name: &str, _buffer: &Arc<dyn GpuBuffer>) {
        self.stream
            .lock()
            .unwrap()
            .push(format!("cmd[{}]: set_global_buffer({})", self.name, name));
    }
}

// ============================================================================
// Mock GpuBuffer
// ============================================================================

/// In-memory GPU buffer stand-in
#[cfg(test)]
pub struct MockGpuBuffer {
    data: Mutex<Vec<u8>>,
}

#[cfg(test)]
impl MockGpuBuffer {
    /// Create a zero-filled buffer of `size` bytes
    pub fn new(size: usize) -> Self {
        Self {
            data: Mutex::new(vec![0; size]),
        }
    }

    /// Test helper: write little-endian words starting at a word offset
    pub fn write_words(&self, word_offset: usize, words: &[u32]) {
        let mut data = self.data.lock().unwrap();
        for (i, word) in words.iter().enumerate() {
            let at = (word_offset + i) * 4;
            data[at..at + 4].copy_from_slice(&word.to_le_bytes());
        }
    }

    /// Test helper: read one little-endian word at a word offset
    pub fn read_word(&self, word_offset: usize) -> u32 {
        let data = self.data.lock().unwrap();
        let at = word_offset * 4;
        u32::from_le_bytes(data[at..at + 4].try_into().unwrap())
    }
}

#[cfg(test)]
impl GpuBuffer for MockGpuBuffer {
    fn size(&self) -> u64 {
        self.data.lock().unwrap().len() as u64
    }

    fn write(&self, offset: u64, data: &[u8]) -> Result<()> {
        let mut stored = self.data.lock().unwrap();
        let end = offset as usize + data.len();
        if end > stored.len() {
            return Err(Error::InvalidResource(format!(
                "write of {} bytes at offset {} exceeds buffer size {}",
                data.len(),
                offset,
                stored.len()
            )));
        }
        stored[offset as usize..end].copy_from_slice(data);
        Ok(())
    }

    fn read(&self, offset: u64, dest: &mut [u8]) -> Result<()> {
        let stored = self.data.lock().unwrap();
        let end = offset as usize + dest.len();
        if end > stored.len() {
            return Err(Error::InvalidResource(format!(
                "read of {} bytes at offset {} exceeds buffer size {}",
                dest.len(),
                offset,
                stored.len()
            )));
        }
        dest.copy_from_slice(&stored[offset as usize..end]);
        Ok(())
    }
}

// ============================================================================
// Mock RenderContext
// ============================================================================

/// Mock host context recording every call into its command stream
#[cfg(test)]
pub struct MockContext {
    stream: CommandStream,
    scene: Vec<RenderObjectKey>,
    fail_on_submit: bool,
}

#[cfg(test)]
impl MockContext {
    pub fn new() -> Self {
        Self {
            stream: Arc::new(Mutex::new(Vec::new())),
            scene: Vec::new(),
            fail_on_submit: false,
        }
    }

    /// Context whose cull calls report the given visible set
    pub fn with_scene(scene: Vec<RenderObjectKey>) -> Self {
        Self {
            scene,
            ..Self::new()
        }
    }

    /// Make every submit fail, to exercise error propagation
    pub fn fail_on_submit(mut self) -> Self {
        self.fail_on_submit = true;
        self
    }

    /// Snapshot of the recorded command stream
    pub fn stream(&self) -> Vec<String> {
        self.stream.lock().unwrap().clone()
    }
}

#[cfg(test)]
impl RenderContext for MockContext {
    fn cull(&mut self, params: &CullingParameters) -> CullingResults {
        self.stream
            .lock()
            .unwrap()
            .push(format!("cull({})", params.camera_name));
        CullingResults::new(params.camera_name.clone(), self.scene.clone())
    }

    fn setup_camera_properties(&mut self, camera: &Camera) -> Result<()> {
        self.stream
            .lock()
            .unwrap()
            .push(format!("setup_camera_properties({})", camera.name()));
        Ok(())
    }

    fn create_command_buffer(&self, name: &str) -> Box<dyn CommandBuffer> {
        Box::new(MockCommandBuffer {
            name: name.to_string(),
            stream: self.stream.clone(),
        })
    }

    fn execute_command_buffer(&mut self, cmd: Box<dyn CommandBuffer>) -> Result<()> {
        self.stream
            .lock()
            .unwrap()
            .push(format!("execute_command_buffer({})", cmd.name()));
        Ok(())
    }

    fn draw_skybox(&mut self, camera: &Camera) -> Result<()> {
        self.stream
            .lock()
            .unwrap()
            .push(format!("draw_skybox({})", camera.name()));
        Ok(())
    }

    fn draw_renderers(
        &mut self,
        cull: &CullingResults,
        draw: &DrawSettings,
        filter: &FilterSettings,
    ) -> Result<()> {
        self.stream.lock().unwrap().push(format!(
            "draw_renderers({}, {:?}, queue {}..={})",
            cull.camera_name(),
            draw.sorting(),
            filter.queue_range().min(),
            filter.queue_range().max(),
        ));
        Ok(())
    }

    fn submit(&mut self) -> Result<()> {
        if self.fail_on_submit {
            return Err(Error::BackendError("injected submit failure".to_string()));
        }
        self.stream.lock().unwrap().push("submit".to_string());
        Ok(())
    }
}
