use crate::error;
use crate::lang::Error;

type Result<T> = std::result::Result<T, Error>;

/// ## Fixed-capacity value stack
///
/// All slots are allocated up front and marked empty. Popping only
/// moves the stack pointer, so a popped slot retains its stale value
/// until the next push overwrites it.
pub struct Stack {
    slots: Vec<Option<i64>>,
    pointer: usize,
}

impl std::fmt::Debug for Stack {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?} sp={}", self.slots, self.pointer)
    }
}

impl Stack {
    pub fn new(size: usize) -> Stack {
        Stack {
            slots: vec![None; size],
            pointer: 0,
        }
    }

    /// Index of the next free slot.
    pub fn pointer(&self) -> usize {
        self.pointer
    }

    pub fn slots(&self) -> &[Option<i64>] {
        &self.slots
    }

    pub fn push(&mut self, value: i64) -> Result<()> {
        if self.pointer == self.slots.len() {
            return Err(error!(StackOverflow));
        }
        self.slots[self.pointer] = Some(value);
        self.pointer += 1;
        Ok(())
    }

    pub fn pop(&mut self) -> Result<i64> {
        let value = self.top()?;
        self.pointer -= 1;
        Ok(value)
    }

    fn top(&self) -> Result<i64> {
        if self.pointer == 0 {
            return Err(error!(StackUnderflow));
        }
        match self.slots[self.pointer - 1] {
            Some(value) => Ok(value),
            None => Err(error!(InternalError; "EMPTY STACK SLOT")),
        }
    }

    /// Replace the two top values with `f(lhs, rhs)` where `lhs` is
    /// the earlier-pushed of the two. The result lands in the `lhs`
    /// slot; the `rhs` slot keeps its stale value.
    pub fn combine<F>(&mut self, f: F) -> Result<()>
    where
        F: FnOnce(i64, i64) -> Result<i64>,
    {
        let rhs = self.pop()?;
        let lhs = self.top()?;
        self.slots[self.pointer - 1] = Some(f(lhs, rhs)?);
        Ok(())
    }
}
