//! Expression parser module.
//!
//! This module transforms a stream of tokens into an expression tree. It
//! uses a stack of open expression parts with numeric operator priorities
//! and handles:
//!
//! - Unary/binary disambiguation based on operand availability
//! - Left-associative merging of same-priority operator chains
//! - Parenthesized sub-expressions
//! - Typed parse errors, with no partial tree on failure
//!
//! Statement parsing is not implemented; a top-level parse consumes exactly
//! one expression and leaves trailing tokens in the tokenizer.

pub mod expr;
pub mod lookups;
pub mod parser;

#[cfg(test)]
mod tests;
