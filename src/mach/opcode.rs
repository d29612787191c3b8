use super::Address;
use crate::lang::ast::NodeId;

/// ## Virtual machine instruction set
///
/// The Tiny-C virtual machine has no registers. Every operation works
/// on the value stack; `a = b + 1` compiles to
/// `[IFETCH(b), IPUSH(1), IADD, ISTORE(a)]`.
///
/// Value-carrying instructions reference the syntax tree node whose
/// payload they read. Branches carry a resolved instruction index.
///
/// See <https://en.wikipedia.org/wiki/Reverse_Polish_notation>
#[derive(Clone, PartialEq)]
pub enum Opcode {
    // *** Stack manipulation
    /// Push the value of the operand node's variable slot.
    Fetch(NodeId),
    /// Push the operand node's literal value.
    Push(NodeId),
    /// Pop the stack into the operand node's variable slot.
    Store(NodeId),
    /// Discard the top of the stack.
    Pop,

    // *** Expression operations
    Add,
    Sub,
    Less,

    // *** Branch control
    /// Unconditional branch.
    Jump(Address),
    /// Pop the stack and branch if the value is zero.
    JumpZero(Address),
    /// Pop the stack and branch if the value is not zero.
    JumpNotZero(Address),

    // *** Statements
    /// No-op emitted for empty statement bodies.
    Empty,
    /// Stop the execution loop.
    Halt,
}

impl std::fmt::Debug for Opcode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_string())
    }
}

impl std::fmt::Display for Opcode {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Opcode::*;
        match self {
            Fetch(n) => write!(f, "IFETCH({})", n),
            Push(n) => write!(f, "IPUSH({})", n),
            Store(n) => write!(f, "ISTORE({})", n),
            Pop => write!(f, "IPOP"),
            Add => write!(f, "IADD"),
            Sub => write!(f, "ISUB"),
            Less => write!(f, "ILT"),
            Jump(a) => write!(f, "JMP({})", a),
            JumpZero(a) => write!(f, "JZ({})", a),
            JumpNotZero(a) => write!(f, "JNZ({})", a),
            Empty => write!(f, "EMPTY"),
            Halt => write!(f, "HALT"),
        }
    }
}
