//! Lexical analysis module for the front end.
//!
//! This module contains the tokenizer that converts source text into a
//! stream of tokens for parsing. It handles:
//!
//! - Indentation-based blocks via synthetic Indent/Dedent tokens
//! - Recognition of keywords, identifiers, literals, and operators
//! - Token offset tracking for error reporting
//! - Comments and whitespace handling

pub mod lexer;
pub mod tokens;
