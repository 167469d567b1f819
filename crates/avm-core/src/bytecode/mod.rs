pub mod bytecode;
pub mod instruction;
pub mod opcode;
pub mod reader;

pub use bytecode::ByteCode;
pub use instruction::Instruction;
pub use opcode::OpCode;
pub use reader::{decode_instructions, ByteReader};
