/*!
## Tiny-C Language Module

This Rust module provides lexical analysis and parsing of Tiny-C
source text into a homogeneous abstract syntax tree.

*/

/// Char range of a token or error in the source text.
pub type Column = std::ops::Range<usize>;

#[macro_use]
mod error;
mod build;
mod lex;
mod parse;
mod token;

pub mod ast;

pub use build::Builder;
pub use build::Symbol;
pub use error::Error;
pub use error::ErrorCode;
pub use lex::lex;
pub use parse::parse;
pub use token::Operator;
pub use token::Token;
pub use token::Word;
