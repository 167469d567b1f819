//! AVM Error Types
//!
//! Defines the core error conditions produced while decoding or executing
//! arithmetic bytecode. These never escape `VirtualMachine::execute`; they are
//! folded into a `Status` at that boundary.

use thiserror::Error;

use crate::bytecode::opcode::OpCode;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VmError {
    // Bytecode errors
    #[error("unknown opcode 0x{opcode:02x} at offset {offset}")]
    UnknownOpcode { opcode: u8, offset: usize },

    #[error("bytecode ended unexpectedly at offset {offset}")]
    UnexpectedEnd { offset: usize },

    #[error("bytecode ended without a return")]
    MissingReturn,

    // VM execution errors
    #[error("stack underflow in {opcode:?}")]
    StackUnderflow { opcode: OpCode },

    #[error("stack overflow: limit is {limit} values")]
    StackOverflow { limit: usize },
}

pub type VmResult<T> = Result<T, VmError>;
