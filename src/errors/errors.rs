use std::fmt::Display;

use thiserror::Error;

/// An error produced by the tokenizer or the expression parser.
///
/// Pairs the error kind with the byte offset in the source text where it
/// was detected. The core never aborts the process; every failure is
/// returned to the caller, who decides how to report it.
#[derive(Debug, Clone)]
pub struct Error {
    internal_error: ErrorImpl,
    offset: u32,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, offset: u32) -> Self {
        Error {
            internal_error: error_impl,
            offset,
        }
    }

    pub fn get_offset(&self) -> u32 {
        self.offset
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedCharacter { .. } => "UnrecognisedCharacter",
            ErrorImpl::IndentNotAligned { .. } => "IndentNotAligned",
            ErrorImpl::IndentTooDeep { .. } => "IndentTooDeep",
            ErrorImpl::InvalidEscape { .. } => "InvalidEscape",
            ErrorImpl::UnterminatedString => "UnterminatedString",
            ErrorImpl::NumberParseError { .. } => "NumberParseError",
            ErrorImpl::MissingOperand { .. } => "MissingOperand",
            ErrorImpl::UnmatchedParenthesis { .. } => "UnmatchedParenthesis",
            ErrorImpl::IncompatibleOperator { .. } => "IncompatibleOperator",
            ErrorImpl::DanglingOperator { .. } => "DanglingOperator",
            ErrorImpl::EmptyExpression => "EmptyExpression",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnrecognisedCharacter { .. } => ErrorTip::None,
            ErrorImpl::IndentNotAligned { width } => ErrorTip::Suggestion(format!(
                "Leading run of {} spaces, but blocks are indented in multiples of 4",
                width
            )),
            ErrorImpl::IndentTooDeep { from, to } => ErrorTip::Suggestion(format!(
                "Indentation jumps from depth {} to depth {}, but may only rise one level per line",
                from, to
            )),
            ErrorImpl::InvalidEscape { character } => ErrorTip::Suggestion(format!(
                "Unknown escape `\\{}`, only `\\n`, `\\r`, `\\\\` and `\\\"` are supported",
                character
            )),
            ErrorImpl::UnterminatedString => {
                ErrorTip::Suggestion(String::from("String literal is missing a closing `\"`"))
            }
            ErrorImpl::NumberParseError { token } => ErrorTip::Suggestion(format!(
                "Invalid number: `{}`, is it above the integer limit?",
                token
            )),
            ErrorImpl::MissingOperand { token } => ErrorTip::Suggestion(format!(
                "Operator `{}` has no operand on its left and no unary reading",
                token
            )),
            ErrorImpl::UnmatchedParenthesis { token } => ErrorTip::Suggestion(format!(
                "Expected `)` to close the parenthesized expression, found `{}`",
                token
            )),
            ErrorImpl::IncompatibleOperator { token } => ErrorTip::Suggestion(format!(
                "`{}` cannot follow a complete operand here",
                token
            )),
            ErrorImpl::DanglingOperator { token } => ErrorTip::Suggestion(format!(
                "Operator `{}` is missing its final operand",
                token
            )),
            ErrorImpl::EmptyExpression => {
                ErrorTip::Suggestion(String::from("Expected an expression here"))
            }
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} at offset {}", self.internal_error, self.offset)
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

/// The two error taxonomies: lexical errors fail the whole token stream,
/// parse errors fail the one expression being parsed. Neither is retried.
#[derive(Error, Debug, Clone)]
pub enum ErrorImpl {
    #[error("unrecognised character: {character:?}")]
    UnrecognisedCharacter { character: char },
    #[error("indentation of {width:?} spaces is not a multiple of 4")]
    IndentNotAligned { width: usize },
    #[error("indentation jumps from depth {from:?} to depth {to:?}")]
    IndentTooDeep { from: u32, to: u32 },
    #[error("invalid escape sequence: \\{character}")]
    InvalidEscape { character: char },
    #[error("unterminated string literal")]
    UnterminatedString,
    #[error("error parsing number: {token:?}")]
    NumberParseError { token: String },
    #[error("missing operand before operator {token:?}")]
    MissingOperand { token: String },
    #[error("unmatched parenthesis: expected `)`, found {token:?}")]
    UnmatchedParenthesis { token: String },
    #[error("incompatible operator: {token:?}")]
    IncompatibleOperator { token: String },
    #[error("dangling operator: {token:?}")]
    DanglingOperator { token: String },
    #[error("empty expression")]
    EmptyExpression,
}
