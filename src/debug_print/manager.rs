/// Debug print manager — process-wide singleton for the GPU debug
/// print channel.
///
/// Owns the per-frame bracket state: the registered output buffer, the
/// running frame index, and optional cursor input. The pipeline is the
/// sole caller of the begin/end bracket, so no locking discipline
/// beyond the internal mutex is required; correctness rests on the
/// ordering invariant that `set_bindings` precedes all draws of a frame
/// and `end_frame` follows them.
///
/// Buffer wire format (u32 words, little-endian):
/// - word 0: count of payload words written by shaders this frame
/// - words 1..: sequence of `[type_tag, payload...]` entries

use std::fmt;
use std::sync::{Arc, Mutex, OnceLock};

use crate::error::{Error, Result};
use crate::host::{CommandBuffer, GpuBuffer};
use crate::{pipeline_error, pipeline_info, pipeline_warn};
use super::input::{DebugPrintConstants, FRAMES_IN_FLIGHT};

const SOURCE: &str = "nova::DebugPrint";

/// Name of the global constant block carrying [`DebugPrintConstants`]
pub const INPUT_CONSTANTS_NAME: &str = "debug_print_input";

/// Name of the global buffer binding shaders append messages to
pub const OUTPUT_BUFFER_NAME: &str = "debug_print_output";

// Payload word counts per tag
const TAG_UINT: u32 = 1;
const TAG_INT: u32 = 2;
const TAG_FLOAT: u32 = 3;
const TAG_FLOAT2: u32 = 4;
const TAG_FLOAT3: u32 = 5;
const TAG_FLOAT4: u32 = 6;

/// One decoded shader debug message
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DebugPrintValue {
    Uint(u32),
    Int(i32),
    Float(f32),
    Float2([f32; 2]),
    Float3([f32; 3]),
    Float4([f32; 4]),
}

impl fmt::Display for DebugPrintValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DebugPrintValue::Uint(v) => write!(f, "{}u", v),
            DebugPrintValue::Int(v) => write!(f, "{}", v),
            DebugPrintValue::Float(v) => write!(f, "{}", v),
            DebugPrintValue::Float2(v) => write!(f, "({}, {})", v[0], v[1]),
            DebugPrintValue::Float3(v) => write!(f, "({}, {}, {})", v[0], v[1], v[2]),
            DebugPrintValue::Float4(v) => {
                write!(f, "({}, {}, {}, {})", v[0], v[1], v[2], v[3])
            }
        }
    }
}

/// Decode a tagged word stream into debug values.
///
/// # Errors
///
/// Returns `Error::InvalidResource` on an unknown tag or a payload
/// truncated by the end of the stream.
pub fn decode_stream(words: &[u32]) -> Result<Vec<DebugPrintValue>> {
    let mut values = Vec::new();
    let mut at = 0usize;

    while at < words.len() {
        let tag = words[at];
        let payload_words = match tag {
            TAG_UINT | TAG_INT | TAG_FLOAT => 1,
            TAG_FLOAT2 => 2,
            TAG_FLOAT3 => 3,
            TAG_FLOAT4 => 4,
            _ => {
                return Err(Error::InvalidResource(format!(
                    "unknown debug print tag {} at word {}",
                    tag, at
                )));
            }
        };
        if at + 1 + payload_words > words.len() {
            return Err(Error::InvalidResource(format!(
                "truncated debug print payload for tag {} at word {}",
                tag, at
            )));
        }

        let float_at = |i: usize| f32::from_bits(words[at + 1 + i]);
        let value = match tag {
            TAG_UINT => DebugPrintValue::Uint(words[at + 1]),
            TAG_INT => DebugPrintValue::Int(words[at + 1] as i32),
            TAG_FLOAT => DebugPrintValue::Float(float_at(0)),
            TAG_FLOAT2 => DebugPrintValue::Float2([float_at(0), float_at(1)]),
            TAG_FLOAT3 => DebugPrintValue::Float3([float_at(0), float_at(1), float_at(2)]),
            _ => DebugPrintValue::Float4([float_at(0), float_at(1), float_at(2), float_at(3)]),
        };
        values.push(value);
        at += 1 + payload_words;
    }

    Ok(values)
}

struct ManagerState {
    frame_index: u32,
    cursor: [f32; 2],
    button_mask: u32,
    output_buffer: Option<Arc<dyn GpuBuffer>>,
}

/// Process-wide debug print singleton
pub struct DebugPrintManager {
    state: Mutex<ManagerState>,
}

static INSTANCE: OnceLock<DebugPrintManager> = OnceLock::new();

impl DebugPrintManager {
    /// Get the process-wide instance.
    pub fn instance() -> &'static DebugPrintManager {
        INSTANCE.get_or_init(|| DebugPrintManager {
            state: Mutex::new(ManagerState {
                frame_index: 0,
                cursor: [0.0, 0.0],
                button_mask: 0,
                output_buffer: None,
            }),
        })
    }

    /// Register the GPU-visible output buffer shaders write to.
    ///
    /// # Errors
    ///
    /// Returns an error if the buffer cannot hold the count word plus at
    /// least one message word.
    pub fn set_output_buffer(&self, buffer: Arc<dyn GpuBuffer>) -> Result<()> {
        if buffer.size() < 8 {
            let message = format!(
                "debug print buffer of {} bytes is too small (need at least 8)",
                buffer.size()
            );
            pipeline_error!(SOURCE, "{}", message);
            return Err(Error::InvalidResource(message));
        }
        self.state.lock().unwrap().output_buffer = Some(buffer);
        Ok(())
    }

    /// Unregister the output buffer; the bracket becomes a no-op.
    pub fn clear_output_buffer(&self) {
        self.state.lock().unwrap().output_buffer = None;
    }

    /// Push host cursor input for the next frame's constants.
    pub fn set_cursor_input(&self, x: f32, y: f32, button_mask: u32) {
        let mut state = self.state.lock().unwrap();
        state.cursor = [x, y];
        state.button_mask = button_mask;
    }

    /// Frames completed since process start (advanced by `end_frame`).
    pub fn frame_index(&self) -> u32 {
        self.state.lock().unwrap().frame_index
    }

    /// Current input constants.
    pub fn input_constants(&self) -> DebugPrintConstants {
        let state = self.state.lock().unwrap();
        DebugPrintConstants {
            frame_cycle: state.frame_index % FRAMES_IN_FLIGHT,
            cursor_x: state.cursor[0],
            cursor_y: state.cursor[1],
            button_mask: state.button_mask,
        }
    }

    /// Record the per-frame input constant upload.
    pub fn set_input_constants(&self, cmd: &mut dyn CommandBuffer) {
        let constants = self.input_constants();
        cmd.set_global_constants(INPUT_CONSTANTS_NAME, bytemuck::bytes_of(&constants));
    }

    /// Record the output buffer binding and reset its count word for
    /// the new frame. No-op when no buffer is registered.
    pub fn set_bindings(&self, cmd: &mut dyn CommandBuffer) -> Result<()> {
        let state = self.state.lock().unwrap();
        if let Some(buffer) = &state.output_buffer {
            buffer.write(0, &0u32.to_le_bytes())?;
            cmd.set_global_buffer(OUTPUT_BUFFER_NAME, buffer);
        }
        Ok(())
    }

    /// End-of-frame flush: read back this frame's messages, log them,
    /// and advance the frame index. No-op readback when no buffer is
    /// registered. A stream that fails to decode is logged and
    /// discarded; only host read failures propagate.
    pub fn end_frame(&self) -> Result<()> {
        let mut state = self.state.lock().unwrap();

        if let Some(buffer) = state.output_buffer.clone() {
            let mut header = [0u8; 4];
            buffer.read(0, &mut header)?;
            let mut count = u64::from(u32::from_le_bytes(header));

            let capacity_words = buffer.size() / 4 - 1;
            if count > capacity_words {
                pipeline_warn!(SOURCE,
                    "shader debug output truncated: {} words written, buffer holds {}",
                    count, capacity_words);
                count = capacity_words;
            }

            let mut bytes = vec![0u8; (count * 4) as usize];
            buffer.read(4, &mut bytes)?;
            let words: Vec<u32> = bytes
                .chunks_exact(4)
                .map(|chunk| u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]))
                .collect();

            let frame = state.frame_index;
            match decode_stream(&words) {
                Ok(values) => {
                    for value in values {
                        pipeline_info!(SOURCE, "frame {}: {}", frame, value);
                    }
                }
                // A corrupt stream must not stall the frame cycle
                Err(err) => {
                    pipeline_error!(SOURCE, "discarding debug output of frame {}: {}", frame, err);
                }
            }
        }

        state.frame_index = state.frame_index.wrapping_add(1);
        Ok(())
    }

    /// Test hook: drop the buffer and rewind all per-frame state.
    #[cfg(test)]
    pub fn reset_for_testing(&self) {
        let mut state = self.state.lock().unwrap();
        state.frame_index = 0;
        state.cursor = [0.0, 0.0];
        state.button_mask = 0;
        state.output_buffer = None;
    }
}

#[cfg(test)]
#[path = "manager_tests.rs"]
mod tests;
