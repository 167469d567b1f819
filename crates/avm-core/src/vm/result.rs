//! Execution Outcome
//!
//! Four-valued status plus the optional value left by `Return`.

use crate::error::VmError;
use super::value::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    Ok,
    /// Reserved for a compiler front end; never produced by the VM.
    CompileError,
    RuntimeError,
    NotImplemented,
}

impl From<&VmError> for Status {
    fn from(err: &VmError) -> Self {
        match err {
            VmError::UnknownOpcode { .. } => Status::NotImplemented,
            VmError::UnexpectedEnd { .. }
            | VmError::MissingReturn
            | VmError::StackUnderflow { .. }
            | VmError::StackOverflow { .. } => Status::RuntimeError,
        }
    }
}

/// Result of one `execute` call.
///
/// Two results are equal when their statuses match and they either both lack
/// a value or carry equal values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExecutionResult {
    pub status: Status,
    pub value: Option<Value>,
}

impl ExecutionResult {
    pub fn new(status: Status, value: Option<Value>) -> Self {
        ExecutionResult { status, value }
    }

    /// Successful return, with or without a value
    pub fn ok(value: Option<Value>) -> Self {
        Self::new(Status::Ok, value)
    }

    pub fn error(status: Status) -> Self {
        Self::new(status, None)
    }
}

impl From<VmError> for ExecutionResult {
    fn from(err: VmError) -> Self {
        ExecutionResult::error(Status::from(&err))
    }
}
