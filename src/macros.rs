//! Utility macros for the front end.
//!
//! This module defines helper macros used throughout the lexer:
//!
//! - `MK_TOKEN!` - Creates a Token instance, with or without a payload
//!
//! These macros reduce boilerplate in the tokenizer implementation.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$offset` - The byte offset of the token in the source text
/// * `$value` - The token's payload (omitted for payload-free tokens)
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Int, 7, TokenValue::Int(42));
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $offset:expr) => {
        Token {
            kind: $kind,
            offset: $offset,
            value: TokenValue::None,
        }
    };
    ($kind:expr, $offset:expr, $value:expr) => {
        Token {
            kind: $kind,
            offset: $offset,
            value: $value,
        }
    };
}
