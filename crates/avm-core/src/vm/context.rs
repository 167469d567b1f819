//! Execution Context
//!
//! Operand stack for a single `execute` call.
//! No execution semantics.

use crate::error::{VmError, VmResult};
use super::value::Value;

/// LIFO operand stack, discarded when execution ends
#[derive(Debug)]
pub struct Context {
    values: Vec<Value>,
    max_size: usize,
}

impl Context {
    /// Create new context with maximum stack depth
    pub fn new(max_size: usize) -> Self {
        Context {
            values: Vec::new(),
            max_size,
        }
    }

    /// Push value onto stack
    pub fn push(&mut self, value: Value) -> VmResult<()> {
        if self.values.len() >= self.max_size {
            return Err(VmError::StackOverflow { limit: self.max_size });
        }
        self.values.push(value);
        Ok(())
    }

    /// Pop value from stack; `None` when empty
    pub fn pop(&mut self) -> Option<Value> {
        self.values.pop()
    }
}
