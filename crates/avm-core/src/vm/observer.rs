//! Execution Observers
//!
//! Optional instrumentation hooks for the decode/dispatch loop. Observers see
//! events but cannot influence execution.

use tracing::{debug, trace};

use super::result::ExecutionResult;
use super::value::Value;

/// Receives execution events. All hooks default to no-ops.
pub trait ExecutionObserver: Send + Sync {
    /// Called for every tag byte read, before it is decoded
    fn on_opcode(&self, _offset: usize, _byte: u8) {}

    /// Called after an `Immediate` operand has been read
    fn on_immediate(&self, _offset: usize, _value: Value, _raw: &[u8]) {}

    /// Called once per `execute` with the final outcome
    fn on_finish(&self, _result: &ExecutionResult) {}
}

/// Observer that ignores every event
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl ExecutionObserver for NoopObserver {}

/// Observer that forwards events to `tracing`
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl ExecutionObserver for TracingObserver {
    fn on_opcode(&self, offset: usize, byte: u8) {
        trace!(offset, opcode = byte, "decoded opcode");
    }

    fn on_immediate(&self, offset: usize, value: Value, raw: &[u8]) {
        let bytes = raw
            .iter()
            .map(|b| format!("{:02x}", b))
            .collect::<Vec<_>>()
            .join(" ");
        trace!(offset, %value, bytes = %bytes, "immediate value");
    }

    fn on_finish(&self, result: &ExecutionResult) {
        debug!(status = ?result.status, value = ?result.value, "execution finished");
    }
}
