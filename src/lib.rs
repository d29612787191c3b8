//! # Tiny-C
//!
//! A teaching-scale interpreter for the Tiny-C language: twenty-six
//! integer variables named `a` through `z`, assignment, addition,
//! subtraction, less-than comparison, and the `if`, `while`, and `do`
//! statements.
//!
//! Source text is lexed and parsed into a homogeneous syntax tree,
//! linearized into stack-machine instructions, and executed by a
//! virtual machine with a fixed-capacity value stack.
//!
//! ```
//! use tinyc::mach;
//!
//! let mut runtime = mach::compile("{ a = 3; b = a + 4; }", 100).unwrap();
//! runtime.run().unwrap();
//! assert_eq!(Some(7), runtime.variables().get(1));
//! ```

pub mod lang;
pub mod mach;
