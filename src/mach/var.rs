use crate::error;
use crate::lang::Error;
use std::convert::TryFrom;

type Result<T> = std::result::Result<T, Error>;

/// Number of variable slots, one per letter `a` through `z`.
pub const VARIABLE_COUNT: usize = 26;

/// ## Variable memory
///
/// A fixed bank of integer slots, all zero at construction. Slot
/// numbers arrive as node payloads, so range checking happens here.
#[derive(Debug)]
pub struct Var {
    slots: [i64; VARIABLE_COUNT],
}

impl Default for Var {
    fn default() -> Var {
        Var::new()
    }
}

impl Var {
    pub fn new() -> Var {
        Var {
            slots: [0; VARIABLE_COUNT],
        }
    }

    pub fn fetch(&self, slot: i64) -> Result<i64> {
        Ok(self.slots[Var::index(slot)?])
    }

    pub fn store(&mut self, slot: i64, value: i64) -> Result<()> {
        self.slots[Var::index(slot)?] = value;
        Ok(())
    }

    pub fn get(&self, index: usize) -> Option<i64> {
        self.slots.get(index).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = i64> + '_ {
        self.slots.iter().copied()
    }

    fn index(slot: i64) -> Result<usize> {
        match usize::try_from(slot) {
            Ok(index) if index < VARIABLE_COUNT => Ok(index),
            _ => Err(error!(UndefinedVariable)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::ErrorCode;

    #[test]
    fn test_store_fetch() {
        let mut var = Var::new();
        assert_eq!(0, var.fetch(25).unwrap());
        var.store(25, 55).unwrap();
        assert_eq!(55, var.fetch(25).unwrap());
    }

    #[test]
    fn test_out_of_range() {
        let mut var = Var::new();
        assert_eq!(ErrorCode::UndefinedVariable, var.fetch(26).unwrap_err().code());
        assert_eq!(ErrorCode::UndefinedVariable, var.store(-1, 0).unwrap_err().code());
    }
}
