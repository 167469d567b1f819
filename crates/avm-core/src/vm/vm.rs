//! Virtual Machine Core
//!
//! Decodes a raw instruction stream one opcode at a time and evaluates it
//! against a fresh operand stack. `execute` never panics on malformed input:
//! every failure is reported through the returned status.

use std::fmt;

use crate::bytecode::opcode::OpCode;
use crate::bytecode::reader::ByteReader;
use crate::config::VmConfig;
use crate::error::{VmError, VmResult};

use super::context::Context;
use super::observer::{ExecutionObserver, NoopObserver};
use super::result::ExecutionResult;
use super::value::Value;

/// Outcome of a single dispatch
enum Step {
    Continue,
    Return(Option<Value>),
}

/// Arithmetic Virtual Machine
///
/// Holds configuration only. Each call to `execute` owns its own `Context`,
/// so one machine can run independent buffers from several threads.
pub struct VirtualMachine {
    config: VmConfig,
    observer: Box<dyn ExecutionObserver>,
}

impl VirtualMachine {
    /// Create a VM with default limits and no instrumentation
    pub fn new() -> Self {
        Self::with_config(VmConfig::default())
    }

    pub fn with_config(config: VmConfig) -> Self {
        VirtualMachine {
            config,
            observer: Box::new(NoopObserver),
        }
    }

    /// Attach an observer, replacing the current one
    pub fn with_observer(mut self, observer: Box<dyn ExecutionObserver>) -> Self {
        self.observer = observer;
        self
    }

    /// Execute a serialized instruction stream
    pub fn execute(&self, bytes: &[u8]) -> ExecutionResult {
        let result = match self.try_execute(bytes) {
            Ok(value) => ExecutionResult::ok(value),
            Err(err) => ExecutionResult::from(err),
        };
        self.observer.on_finish(&result);
        result
    }

    /// Execute and report the precise failure instead of a status.
    ///
    /// `Ok(None)` means `Return` ran on an empty stack.
    pub fn try_execute(&self, bytes: &[u8]) -> VmResult<Option<Value>> {
        let mut context = Context::new(self.config.max_stack_size);
        let mut reader = ByteReader::new(bytes);

        loop {
            if reader.is_empty() {
                return Err(VmError::MissingReturn);
            }
            if let Step::Return(value) = self.step(&mut reader, &mut context)? {
                return Ok(value);
            }
        }
    }

    /// Decode and execute a single instruction
    fn step(&self, reader: &mut ByteReader<'_>, context: &mut Context) -> VmResult<Step> {
        let offset = reader.position();
        let byte = reader.read_u8()?;
        self.observer.on_opcode(offset, byte);

        let opcode = OpCode::from_u8(byte)
            .ok_or(VmError::UnknownOpcode { opcode: byte, offset })?;

        match opcode {
            // An empty stack is a valid "no value" return
            OpCode::Return => return Ok(Step::Return(context.pop())),

            OpCode::Immediate => {
                let raw = reader.read_operand()?;
                let value = Value::from_le_bytes(raw);
                self.observer.on_immediate(offset, value, &raw);
                context.push(value)?;
            }

            OpCode::Negate => {
                let value = Self::pop(context, opcode)?;
                context.push(-value)?;
            }

            OpCode::Add | OpCode::Subtract | OpCode::Multiply | OpCode::Divide => {
                let rhs = Self::pop(context, opcode)?;
                let lhs = Self::pop(context, opcode)?;
                let value = match opcode {
                    OpCode::Add => lhs + rhs,
                    OpCode::Subtract => lhs - rhs,
                    OpCode::Multiply => lhs * rhs,
                    _ => lhs / rhs,
                };
                context.push(value)?;
            }
        }

        Ok(Step::Continue)
    }

    fn pop(context: &mut Context, opcode: OpCode) -> VmResult<Value> {
        context.pop().ok_or(VmError::StackUnderflow { opcode })
    }
}

impl Default for VirtualMachine {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for VirtualMachine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VirtualMachine")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
