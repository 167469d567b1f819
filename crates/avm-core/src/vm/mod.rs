pub mod context;
pub mod observer;
pub mod result;
pub mod value;
pub mod vm;

pub use vm::VirtualMachine;
pub use value::Value;
pub use result::{ExecutionResult, Status};
pub use observer::{ExecutionObserver, NoopObserver, TracingObserver};
