//! Bytecode Opcode Definitions
//!
//! Defines the raw opcode set for arithmetic bytecode.
//! This file contains no execution semantics.
//! Opcode values are an eternal contract.

use crate::vm::value::VALUE_SIZE;

/// Bytecode opcodes
///
/// Each tag is written as a single byte. This matches the low-order byte of
/// the ordinal stored as a little-endian 32-bit integer.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OpCode {
    Return = 0x01,
    Immediate = 0x02,

    // Arithmetic
    Negate = 0x03,
    Add = 0x04,
    Subtract = 0x05,
    Multiply = 0x06,
    Divide = 0x07,
}

impl OpCode {
    /// Convert raw byte to opcode
    pub fn from_u8(byte: u8) -> Option<Self> {
        match byte {
            0x01 => Some(OpCode::Return),
            0x02 => Some(OpCode::Immediate),

            0x03 => Some(OpCode::Negate),
            0x04 => Some(OpCode::Add),
            0x05 => Some(OpCode::Subtract),
            0x06 => Some(OpCode::Multiply),
            0x07 => Some(OpCode::Divide),

            _ => None,
        }
    }

    /// Wire tag byte
    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    pub const fn serialize(self) -> [u8; 1] {
        [self as u8]
    }

    /// Number of operand bytes following the tag
    pub const fn operand_len(self) -> usize {
        match self {
            OpCode::Immediate => VALUE_SIZE,
            _ => 0,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            OpCode::Return => "Return",
            OpCode::Immediate => "Immediate",
            OpCode::Negate => "Negate",
            OpCode::Add => "Add",
            OpCode::Subtract => "Subtract",
            OpCode::Multiply => "Multiply",
            OpCode::Divide => "Divide",
        }
    }
}
