//! Error types and error handling for the front end.
//!
//! This module defines the error types used by the tokenizer and the
//! expression parser. It includes:
//!
//! - Error structures with source offset information
//! - Specific error variants for lexical and parse failures
//! - Error formatting and display functionality
//! - Helpful error messages and suggestions

pub mod errors;
