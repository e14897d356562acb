//! Tests for the debug print manager and stream decoding
//!
//! IMPORTANT: DebugPrintManager is a process-wide singleton; tests
//! using it are marked #[serial] and reset its state first. The pure
//! decoding tests need no serialization.

use std::sync::{Arc, Mutex};

use serial_test::serial;

use crate::host::RenderContext;
use crate::host::mock_context::{MockContext, MockGpuBuffer};
use crate::log::{DefaultLogger, LogEntry, Logger, set_logger};
use super::*;

// ============================================================================
// Stream decoding (pure)
// ============================================================================

#[test]
fn test_decode_empty_stream() {
    assert_eq!(decode_stream(&[]).unwrap(), Vec::new());
}

#[test]
fn test_decode_mixed_stream() {
    let words = [
        1, 42,                                  // Uint(42)
        2, (-7i32) as u32,                      // Int(-7)
        3, 1.5f32.to_bits(),                    // Float(1.5)
        4, 1.0f32.to_bits(), 2.0f32.to_bits(),  // Float2
    ];
    let values = decode_stream(&words).unwrap();
    assert_eq!(
        values,
        vec![
            DebugPrintValue::Uint(42),
            DebugPrintValue::Int(-7),
            DebugPrintValue::Float(1.5),
            DebugPrintValue::Float2([1.0, 2.0]),
        ]
    );
}

#[test]
fn test_decode_wide_vectors() {
    let b = |v: f32| v.to_bits();
    let words = [
        5, b(1.0), b(2.0), b(3.0),
        6, b(0.0), b(0.5), b(1.0), b(1.0),
    ];
    let values = decode_stream(&words).unwrap();
    assert_eq!(values[0], DebugPrintValue::Float3([1.0, 2.0, 3.0]));
    assert_eq!(values[1], DebugPrintValue::Float4([0.0, 0.5, 1.0, 1.0]));
}

#[test]
fn test_decode_unknown_tag_fails() {
    let result = decode_stream(&[99, 0]);
    assert!(matches!(result, Err(crate::nova::Error::InvalidResource(_))));
}

#[test]
fn test_decode_truncated_payload_fails() {
    // Float2 needs two payload words, only one present
    let result = decode_stream(&[4, 1.0f32.to_bits()]);
    assert!(matches!(result, Err(crate::nova::Error::InvalidResource(_))));
}

#[test]
fn test_value_display() {
    assert_eq!(DebugPrintValue::Uint(3).to_string(), "3u");
    assert_eq!(DebugPrintValue::Int(-2).to_string(), "-2");
    assert_eq!(DebugPrintValue::Float2([1.0, 2.5]).to_string(), "(1, 2.5)");
}

// ============================================================================
// Manager (singleton — #[serial])
// ============================================================================

struct CaptureLogger {
    messages: Arc<Mutex<Vec<String>>>,
}

impl Logger for CaptureLogger {
    fn log(&self, entry: &LogEntry) {
        // Non-serial tests elsewhere log through the global slot too;
        // only the debug-print channel's entries count here
        if entry.source == "nova::DebugPrint" {
            self.messages.lock().unwrap().push(entry.message.clone());
        }
    }
}

#[test]
#[serial]
fn test_input_constants_cycle_over_frames_in_flight() {
    let manager = DebugPrintManager::instance();
    manager.reset_for_testing();

    assert_eq!(manager.input_constants().frame_cycle, 0);
    for _ in 0..FRAMES_IN_FLIGHT + 1 {
        manager.end_frame().unwrap();
    }
    // 5 completed frames with FRAMES_IN_FLIGHT = 4
    assert_eq!(manager.frame_index(), 5);
    assert_eq!(manager.input_constants().frame_cycle, 1);
}

#[test]
#[serial]
fn test_cursor_input_flows_into_constants() {
    let manager = DebugPrintManager::instance();
    manager.reset_for_testing();

    manager.set_cursor_input(320.0, 240.0, 0b1);
    let constants = manager.input_constants();
    assert_eq!(constants.cursor_x, 320.0);
    assert_eq!(constants.cursor_y, 240.0);
    assert_eq!(constants.button_mask, 0b1);
}

#[test]
#[serial]
fn test_set_output_buffer_rejects_undersized_buffer() {
    let manager = DebugPrintManager::instance();
    manager.reset_for_testing();

    let result = manager.set_output_buffer(Arc::new(MockGpuBuffer::new(4)));
    assert!(result.is_err());
}

#[test]
#[serial]
fn test_set_bindings_binds_buffer_and_resets_count() {
    let manager = DebugPrintManager::instance();
    manager.reset_for_testing();

    let buffer = Arc::new(MockGpuBuffer::new(64));
    buffer.write_words(0, &[17]); // stale count from a previous frame
    manager.set_output_buffer(buffer.clone()).unwrap();

    let ctx = MockContext::new();
    let mut cmd = ctx.create_command_buffer("Shader Debug Print");
    manager.set_bindings(cmd.as_mut()).unwrap();

    assert_eq!(buffer.read_word(0), 0);
    assert!(ctx.stream().iter().any(|e| {
        e == "cmd[Shader Debug Print]: set_global_buffer(debug_print_output)"
    }));

    manager.reset_for_testing();
}

#[test]
#[serial]
fn test_set_bindings_without_buffer_is_a_no_op() {
    let manager = DebugPrintManager::instance();
    manager.reset_for_testing();

    let ctx = MockContext::new();
    let mut cmd = ctx.create_command_buffer("Shader Debug Print");
    manager.set_bindings(cmd.as_mut()).unwrap();

    assert!(ctx.stream().is_empty());
}

#[test]
#[serial]
fn test_set_input_constants_records_upload() {
    let manager = DebugPrintManager::instance();
    manager.reset_for_testing();

    let ctx = MockContext::new();
    let mut cmd = ctx.create_command_buffer("Shader Debug Print");
    manager.set_input_constants(cmd.as_mut());

    assert!(ctx.stream().iter().any(|e| {
        e == "cmd[Shader Debug Print]: set_global_constants(debug_print_input, 16 bytes)"
    }));
}

#[test]
#[serial]
fn test_end_frame_reads_back_and_logs_messages() {
    let manager = DebugPrintManager::instance();
    manager.reset_for_testing();

    let buffer = Arc::new(MockGpuBuffer::new(64));
    manager.set_output_buffer(buffer.clone()).unwrap();

    // Shader wrote Uint(7) and Float(0.5): 4 payload words
    buffer.write_words(0, &[4, 1, 7, 3, 0.5f32.to_bits()]);

    let messages = Arc::new(Mutex::new(Vec::new()));
    set_logger(Box::new(CaptureLogger {
        messages: messages.clone(),
    }));

    manager.end_frame().unwrap();

    {
        let logged = messages.lock().unwrap();
        assert_eq!(logged.len(), 2);
        assert!(logged[0].contains("7u"));
        assert!(logged[1].contains("0.5"));
    }
    assert_eq!(manager.frame_index(), 1);

    set_logger(Box::new(DefaultLogger));
    manager.reset_for_testing();
}

#[test]
#[serial]
fn test_end_frame_clamps_overflowing_count() {
    let manager = DebugPrintManager::instance();
    manager.reset_for_testing();

    // 20 bytes: count word + 4 payload words
    let buffer = Arc::new(MockGpuBuffer::new(20));
    manager.set_output_buffer(buffer.clone()).unwrap();

    // Shader claims 100 words; only 4 fit. Payload: Uint(5), Uint(6).
    buffer.write_words(0, &[100, 1, 5, 1, 6]);

    let messages = Arc::new(Mutex::new(Vec::new()));
    set_logger(Box::new(CaptureLogger {
        messages: messages.clone(),
    }));

    manager.end_frame().unwrap();

    {
        let logged = messages.lock().unwrap();
        // Truncation warning + two decoded messages
        assert_eq!(logged.len(), 3);
        assert!(logged[0].contains("truncated"));
    }

    set_logger(Box::new(DefaultLogger));
    manager.reset_for_testing();
}

#[test]
#[serial]
fn test_end_frame_discards_corrupt_stream_and_advances() {
    let manager = DebugPrintManager::instance();
    manager.reset_for_testing();

    let buffer = Arc::new(MockGpuBuffer::new(64));
    manager.set_output_buffer(buffer.clone()).unwrap();

    // Unknown tag 99 in the payload
    buffer.write_words(0, &[2, 99, 0]);

    let messages = Arc::new(Mutex::new(Vec::new()));
    set_logger(Box::new(CaptureLogger {
        messages: messages.clone(),
    }));

    manager.end_frame().unwrap();

    // The frame cycle stays in sync with the host
    assert_eq!(manager.frame_index(), 1);
    {
        let logged = messages.lock().unwrap();
        assert_eq!(logged.len(), 1);
        assert!(logged[0].contains("discarding"));
    }

    set_logger(Box::new(DefaultLogger));
    manager.reset_for_testing();
}

#[test]
#[serial]
fn test_end_frame_without_buffer_still_advances_frame() {
    let manager = DebugPrintManager::instance();
    manager.reset_for_testing();

    manager.end_frame().unwrap();
    assert_eq!(manager.frame_index(), 1);
}
