//! Bytecode Reader
//!
//! Cursor over a raw instruction stream, plus a structural decoder.
//! The wire format has no header: instruction boundaries are recovered
//! only by reading one opcode at a time.

use crate::error::{VmError, VmResult};
use crate::vm::value::{Value, VALUE_SIZE};

use super::instruction::Instruction;
use super::opcode::OpCode;

/// Forward-only cursor over a byte buffer
#[derive(Debug, Clone)]
pub struct ByteReader<'a> {
    bytes: &'a [u8],
    cursor: usize,
}

impl<'a> ByteReader<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        ByteReader { bytes, cursor: 0 }
    }

    /// Offset of the next unread byte
    pub fn position(&self) -> usize {
        self.cursor
    }

    pub fn is_empty(&self) -> bool {
        self.cursor >= self.bytes.len()
    }

    pub fn read_u8(&mut self) -> VmResult<u8> {
        let byte = *self
            .bytes
            .get(self.cursor)
            .ok_or(VmError::UnexpectedEnd { offset: self.cursor })?;
        self.cursor += 1;
        Ok(byte)
    }

    /// Read a 4-byte operand exactly as it appears on the wire
    pub fn read_operand(&mut self) -> VmResult<[u8; VALUE_SIZE]> {
        let end = self.cursor + VALUE_SIZE;
        if end > self.bytes.len() {
            return Err(VmError::UnexpectedEnd { offset: self.cursor });
        }
        let mut raw = [0u8; VALUE_SIZE];
        raw.copy_from_slice(&self.bytes[self.cursor..end]);
        self.cursor = end;
        Ok(raw)
    }

    /// Read a little-endian f32 operand
    pub fn read_f32_le(&mut self) -> VmResult<Value> {
        self.read_operand().map(Value::from_le_bytes)
    }
}

/// Decode a whole wire buffer back into instructions.
///
/// Fails on the first unknown tag or truncated operand.
pub fn decode_instructions(bytes: &[u8]) -> VmResult<Vec<Instruction>> {
    let mut reader = ByteReader::new(bytes);
    let mut instructions = Vec::new();

    while !reader.is_empty() {
        let offset = reader.position();
        let byte = reader.read_u8()?;
        let opcode = OpCode::from_u8(byte)
            .ok_or(VmError::UnknownOpcode { opcode: byte, offset })?;

        let instruction = match opcode {
            OpCode::Return => Instruction::Return,
            OpCode::Immediate => Instruction::Immediate(reader.read_f32_le()?),
            OpCode::Negate => Instruction::Negate,
            OpCode::Add => Instruction::Add,
            OpCode::Subtract => Instruction::Subtract,
            OpCode::Multiply => Instruction::Multiply,
            OpCode::Divide => Instruction::Divide,
        };
        instructions.push(instruction);
    }

    Ok(instructions)
}
