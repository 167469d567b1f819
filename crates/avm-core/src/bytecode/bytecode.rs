//! Instruction Container
//!
//! Ordered instructions paired with the source line each came from.
//! Lines are metadata for the disassembly listing; they are never serialized.

use std::fmt;

use super::instruction::Instruction;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ByteCode {
    instructions: Vec<Instruction>,
    lines: Vec<usize>,
}

impl ByteCode {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an instruction. No validation is performed.
    pub fn add_instruction(&mut self, instruction: Instruction, line: usize) {
        self.instructions.push(instruction);
        self.lines.push(line);
    }

    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    pub fn lines(&self) -> &[usize] {
        &self.lines
    }

    /// Iterate `(instruction, line)` pairs in append order
    pub fn iter(&self) -> impl Iterator<Item = (&Instruction, usize)> + '_ {
        self.instructions.iter().zip(self.lines.iter().copied())
    }

    /// Concatenated wire encoding. No header, length prefix or version tag.
    pub fn serialize(&self) -> Vec<u8> {
        let size = self.instructions.iter().map(Instruction::encoded_len).sum();
        let mut out = Vec::with_capacity(size);
        for instruction in &self.instructions {
            instruction.encode_into(&mut out);
        }
        out
    }

    /// Human-readable listing, one line per instruction:
    ///
    /// ```text
    /// 0    1 0x02 00 00 a0 40 Immediate 5.0
    /// 5    | 0x01 Return
    /// ```
    ///
    /// The first column is the byte offset of the instruction. The line column
    /// shows `|` when the source line repeats the previous instruction's.
    pub fn disassemble(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ByteCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut offset = 0usize;
        let mut previous_line = None;

        for (instruction, line) in self.iter() {
            let bytes = instruction.serialize();
            let hex = bytes
                .iter()
                .map(|b| format!("{:02x}", b))
                .collect::<Vec<_>>()
                .join(" ");

            let line_column = if previous_line == Some(line) {
                "|".to_string()
            } else {
                line.to_string()
            };

            writeln!(f, "{} {:>4} 0x{} {}", offset, line_column, hex, instruction)?;

            offset += bytes.len();
            previous_line = Some(line);
        }

        Ok(())
    }
}

impl FromIterator<(Instruction, usize)> for ByteCode {
    fn from_iter<I: IntoIterator<Item = (Instruction, usize)>>(iter: I) -> Self {
        let mut code = ByteCode::new();
        for (instruction, line) in iter {
            code.add_instruction(instruction, line);
        }
        code
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bytecode::reader::decode_instructions;
    use crate::vm::value::Value;

    fn sample() -> ByteCode {
        let mut code = ByteCode::new();
        code.add_instruction(Instruction::Immediate(Value::new(5.0)), 1);
        code.add_instruction(Instruction::Return, 1);
        code.add_instruction(Instruction::Return, 2);
        code
    }

    #[test]
    fn disassemble_listing() {
        assert_eq!(
            sample().disassemble(),
            "0    1 0x02 00 00 a0 40 Immediate 5.0\n\
             5    | 0x01 Return\n\
             6    2 0x01 Return\n"
        );
    }

    #[test]
    fn disassemble_empty() {
        assert_eq!(ByteCode::new().disassemble(), "");
        assert!(ByteCode::new().serialize().is_empty());
    }

    #[test]
    fn line_marker_only_compares_with_previous() {
        let code: ByteCode = [
            (Instruction::Add, 3),
            (Instruction::Negate, 4),
            (Instruction::Return, 3),
        ]
        .into_iter()
        .collect();
        assert_eq!(
            code.disassemble(),
            "0    3 0x04 Add\n1    4 0x03 Negate\n2    3 0x01 Return\n"
        );
    }

    #[test]
    fn non_finite_immediates_are_listed() {
        let nan = Value::from_le_bytes([0x00, 0x00, 0xc0, 0x7f]);
        let mut code = ByteCode::new();
        code.add_instruction(Instruction::Immediate(nan), 1);
        code.add_instruction(Instruction::Immediate(Value::new(f32::NEG_INFINITY)), 1);
        assert_eq!(
            code.disassemble(),
            "0    1 0x02 00 00 c0 7f Immediate NaN\n\
             5    | 0x02 00 00 80 ff Immediate -inf\n"
        );
    }

    #[test]
    fn wide_line_numbers_are_not_truncated() {
        let mut code = ByteCode::new();
        code.add_instruction(Instruction::Return, 12345);
        assert_eq!(code.disassemble(), "0 12345 0x01 Return\n");
    }

    #[test]
    fn serialize_is_stable() {
        let code = sample();
        let first = code.serialize();
        assert_eq!(first, vec![0x02, 0x00, 0x00, 0xa0, 0x40, 0x01, 0x01]);
        assert_eq!(first, code.serialize());
    }

    #[test]
    fn lines_track_instructions() {
        let code = sample();
        assert_eq!(code.len(), 3);
        assert_eq!(code.lines(), &[1, 1, 2]);
        assert_eq!(code.instructions().len(), code.lines().len());
    }

    #[test]
    fn serialized_form_decodes_back() {
        let code = sample();
        let decoded = decode_instructions(&code.serialize()).expect("decode failed");
        assert_eq!(decoded, code.instructions());
    }
}
