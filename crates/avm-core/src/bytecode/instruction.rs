//! Bytecode Instruction Representation
//!
//! Defines the instruction set and its wire encoding.
//! This layer contains no execution semantics.

use std::fmt;

use super::opcode::OpCode;
use crate::vm::value::Value;

/// Decoded instruction. Only `Immediate` carries an operand.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Instruction {
    Return,
    Immediate(Value),
    Negate,
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Instruction {
    pub fn opcode(&self) -> OpCode {
        match self {
            Instruction::Return => OpCode::Return,
            Instruction::Immediate(_) => OpCode::Immediate,
            Instruction::Negate => OpCode::Negate,
            Instruction::Add => OpCode::Add,
            Instruction::Subtract => OpCode::Subtract,
            Instruction::Multiply => OpCode::Multiply,
            Instruction::Divide => OpCode::Divide,
        }
    }

    /// Total encoded size in bytes (tag plus operand)
    pub fn encoded_len(&self) -> usize {
        1 + self.opcode().operand_len()
    }

    /// Append the wire encoding to `out`
    pub fn encode_into(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(&self.opcode().serialize());
        if let Instruction::Immediate(value) = self {
            out.extend_from_slice(&value.serialize());
        }
    }

    pub fn serialize(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.encoded_len());
        self.encode_into(&mut out);
        out
    }

    pub fn disassemble(&self) -> String {
        match self {
            Instruction::Immediate(value) => {
                format!("{} {}", OpCode::Immediate.name(), value.disassemble())
            }
            other => other.opcode().name().to_string(),
        }
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.disassemble())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SIMPLE: [(Instruction, &str); 6] = [
        (Instruction::Return, "Return"),
        (Instruction::Negate, "Negate"),
        (Instruction::Add, "Add"),
        (Instruction::Subtract, "Subtract"),
        (Instruction::Multiply, "Multiply"),
        (Instruction::Divide, "Divide"),
    ];

    #[test]
    fn immediate_serialize() {
        let serialized = Instruction::Immediate(Value::new(5.0)).serialize();
        let mut expected = vec![OpCode::Immediate.as_u8()];
        expected.extend_from_slice(&5.0f32.to_le_bytes());
        assert_eq!(serialized, expected);
        assert_eq!(serialized.len(), 5);
    }

    #[test]
    fn immediate_round_trips_through_f32() {
        for a in [0.0f32, -0.0, 1.2, -3.4, f32::MAX, f32::MIN_POSITIVE, f32::INFINITY] {
            let bytes = Instruction::Immediate(Value::new(a)).serialize();
            assert_eq!(bytes.len(), 5);
            let decoded = f32::from_le_bytes([bytes[1], bytes[2], bytes[3], bytes[4]]);
            assert_eq!(decoded.to_bits(), a.to_bits());
        }
    }

    #[test]
    fn immediate_disassemble() {
        assert_eq!(
            Instruction::Immediate(Value::new(5.0)).disassemble(),
            "Immediate 5.0"
        );
    }

    #[test]
    fn simple_instructions_are_one_byte() {
        for (instruction, _) in SIMPLE {
            let serialized = instruction.serialize();
            assert_eq!(serialized, instruction.opcode().serialize().to_vec());
            assert_eq!(instruction.encoded_len(), 1);
        }
    }

    #[test]
    fn simple_instructions_disassemble_to_name() {
        for (instruction, text) in SIMPLE {
            assert_eq!(instruction.disassemble(), text);
            assert_eq!(instruction.to_string(), text);
        }
    }
}
