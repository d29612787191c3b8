/*!
## Tiny-C Machine Module

This Rust module linearizes the syntax tree into stack-machine
instructions and executes them on a virtual machine.

*/

/// Instruction index in a compiled program.
pub type Address = usize;

mod codegen;
mod compile;
mod opcode;
mod runtime;
mod stack;
mod var;

pub use codegen::generate;
pub use compile::compile;
pub use compile::DEFAULT_STACK_SIZE;
pub use opcode::Opcode;
pub use runtime::Runtime;
pub use runtime::State;
pub use stack::Stack;
pub use var::Var;
pub use var::VARIABLE_COUNT;
