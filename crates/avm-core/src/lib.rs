//! Arithmetic Virtual Machine - Core Library
//!
//! Instruction encoding, the `ByteCode` container with its disassembler, and
//! the stack-based execution engine.

pub mod error;
pub mod config;
pub mod bytecode;
pub mod vm;

// Re-export commonly used types
pub use error::{VmError, VmResult};
pub use config::VmConfig;
pub use bytecode::{ByteCode, Instruction, OpCode};
pub use vm::{
	ExecutionObserver, ExecutionResult, NoopObserver, Status, TracingObserver, Value, VirtualMachine,
};

#[cfg(test)]
mod tests {
	use super::*;

	fn build(instructions: &[Instruction]) -> ByteCode {
		let mut code = ByteCode::new();
		for instruction in instructions {
			code.add_instruction(*instruction, 1);
		}
		code
	}

	#[test]
	fn serialized_bytecode_executes() {
		let code = build(&[
			Instruction::Immediate(Value::new(5.0)),
			Instruction::Immediate(Value::new(5.0)),
			Instruction::Multiply,
			Instruction::Return,
		]);
		let vm = VirtualMachine::new();
		let res = vm.execute(&code.serialize());
		assert_eq!(res, ExecutionResult::ok(Some(Value::new(25.0))));
	}

	#[test]
	fn execution_never_consults_lines() {
		let mut a = ByteCode::new();
		a.add_instruction(Instruction::Immediate(Value::new(1.0)), 1);
		a.add_instruction(Instruction::Return, 1);
		let mut b = ByteCode::new();
		b.add_instruction(Instruction::Immediate(Value::new(1.0)), 7);
		b.add_instruction(Instruction::Return, 9);

		assert_eq!(a.serialize(), b.serialize());
		assert_ne!(a.disassemble(), b.disassemble());
	}

	#[test]
	fn compile_error_is_never_produced() {
		let vm = VirtualMachine::new();
		for byte in 0u8..=255 {
			let res = vm.execute(&[byte]);
			assert_ne!(res.status, Status::CompileError);
		}
	}

	#[test]
	fn explicit_noop_observer_matches_default() {
		let bytes = [0x02, 0x00, 0x00, 0xa0, 0x40, 0x03, 0x01];
		let quiet = VirtualMachine::new().with_observer(Box::new(NoopObserver));
		assert_eq!(quiet.execute(&bytes), VirtualMachine::new().execute(&bytes));
	}

	#[test]
	fn vm_is_shareable_across_threads() {
		fn assert_send_sync<T: Send + Sync>() {}
		assert_send_sync::<VirtualMachine>();
	}
}
