use super::{Address, Opcode, Stack, Var};
use crate::error;
use crate::lang::ast::{NodeId, Tree};
use crate::lang::Error;

type Result<T> = std::result::Result<T, Error>;

/// Execution state. The only transition is `Running` to `Halted`, on
/// executing `HALT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    Running,
    Halted,
}

/// ## Virtual machine
///
/// Executes a finite instruction list against the variable bank and a
/// fixed-capacity value stack. The program counter advances before
/// dispatch, so branch instructions simply overwrite it. There is no
/// runaway guard: a program without a reachable `HALT` runs forever.
///
/// Malformed programs are not tolerated: stack overflow or underflow,
/// an out-of-range variable slot, and a value-less operand node all
/// abort the run with an error instead of computing silently-wrong
/// results.
#[derive(Debug)]
pub struct Runtime {
    tree: Tree,
    code: Vec<Opcode>,
    variables: Var,
    stack: Stack,
    program_counter: Address,
    state: State,
}

impl Runtime {
    /// Take ownership of a compiled program. A `HALT` is appended if
    /// the instruction list does not already contain one, so
    /// termination is always reachable.
    pub fn new(tree: Tree, mut code: Vec<Opcode>, stack_size: usize) -> Runtime {
        if !code.contains(&Opcode::Halt) {
            code.push(Opcode::Halt);
        }
        Runtime {
            tree,
            code,
            variables: Var::new(),
            stack: Stack::new(stack_size),
            program_counter: 0,
            state: State::Running,
        }
    }

    /// Run the fetch-decode-execute loop to completion.
    pub fn run(&mut self) -> Result<()> {
        loop {
            let op = match self.code.get(self.program_counter) {
                Some(op) => op.clone(),
                None => return Err(error!(InternalError; "PROGRAM COUNTER OUT OF BOUNDS")),
            };
            self.program_counter += 1;
            match op {
                Opcode::Halt => {
                    self.state = State::Halted;
                    return Ok(());
                }
                Opcode::Fetch(node) => {
                    let slot = self.operand(node)?;
                    let value = self.variables.fetch(slot)?;
                    self.stack.push(value)?;
                }
                Opcode::Push(node) => {
                    let value = self.operand(node)?;
                    self.stack.push(value)?;
                }
                Opcode::Store(node) => {
                    let slot = self.operand(node)?;
                    let value = self.stack.pop()?;
                    self.variables.store(slot, value)?;
                }
                Opcode::Pop => {
                    self.stack.pop()?;
                }
                Opcode::Add => self.stack.combine(|lhs, rhs| match lhs.checked_add(rhs) {
                    Some(n) => Ok(n),
                    None => Err(error!(Overflow)),
                })?,
                Opcode::Sub => self.stack.combine(|lhs, rhs| match lhs.checked_sub(rhs) {
                    Some(n) => Ok(n),
                    None => Err(error!(Overflow)),
                })?,
                Opcode::Less => self.stack.combine(|lhs, rhs| Ok((lhs < rhs) as i64))?,
                Opcode::Jump(address) => self.program_counter = address,
                Opcode::JumpZero(address) => {
                    if self.stack.pop()? == 0 {
                        self.program_counter = address;
                    }
                }
                Opcode::JumpNotZero(address) => {
                    if self.stack.pop()? != 0 {
                        self.program_counter = address;
                    }
                }
                Opcode::Empty => {}
            }
        }
    }

    fn operand(&self, node: NodeId) -> Result<i64> {
        match self.tree.get(node).and_then(|n| n.value()) {
            Some(value) => Ok(value),
            None => Err(error!(InternalError; "OPERAND NODE HAS NO VALUE")),
        }
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn variables(&self) -> &Var {
        &self.variables
    }

    pub fn stack(&self) -> &Stack {
        &self.stack
    }

    pub fn code(&self) -> &[Opcode] {
        &self.code
    }
}
