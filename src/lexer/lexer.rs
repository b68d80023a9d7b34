use lazy_static::lazy_static;
use regex::Regex;

use crate::{
    errors::errors::{Error, ErrorImpl},
    MK_TOKEN,
};

use super::tokens::{Token, TokenKind, TokenValue, RESERVED_LOOKUP};

lazy_static! {
    static ref IDENTIFIER_PATTERN: Regex = Regex::new("^[a-zA-Z_][a-zA-Z0-9_]*").unwrap();
    static ref DIGITS_PATTERN: Regex = Regex::new("^[0-9]+").unwrap();
}

/// A pull tokenizer over borrowed source text.
///
/// `next()` produces one token per call until `EOF`. The source view only
/// ever shrinks; `offset` tracks how many bytes have been consumed. Indent
/// depth may rise by at most one level per line, but may drop by several
/// levels at once, in which case the extra `Dedent` tokens are replayed on
/// later calls with the offset recorded when the drop was detected.
pub struct Tokenizer<'src> {
    source: &'src str,
    offset: u32,
    indent_level: u32,
    pending_dedents: u32,
    dedent_offset: u32,
}

impl<'src> Tokenizer<'src> {
    pub fn new(source: &'src str) -> Tokenizer<'src> {
        Tokenizer {
            source,
            offset: 0,
            indent_level: 0,
            pending_dedents: 0,
            dedent_offset: 0,
        }
    }

    fn trim(&mut self, trim_size: usize) {
        self.source = &self.source[trim_size..];
        self.offset += trim_size as u32;
    }

    fn trim_spaces(&mut self) -> usize {
        let count = self.source.bytes().take_while(|b| *b == b' ').count();
        self.trim(count);
        count
    }

    fn trim_comment(&mut self) {
        // Everything through (not including) the newline
        let count = self.source.bytes().take_while(|b| *b != b'\n').count();
        self.trim(count);
    }

    // Drains one indentation level per call before the terminal EOF token.
    fn handle_eof(&mut self) -> Token {
        if self.indent_level > 0 {
            self.indent_level -= 1;
            MK_TOKEN!(TokenKind::Dedent, self.offset)
        } else {
            MK_TOKEN!(TokenKind::EOF, self.offset)
        }
    }

    fn handle_indentation(&mut self, width: usize) -> Result<Option<Token>, Error> {
        if width % 4 != 0 {
            return Err(Error::new(ErrorImpl::IndentNotAligned { width }, self.offset));
        }

        let depth = (width / 4) as u32;
        if depth > self.indent_level {
            if depth - self.indent_level != 1 {
                return Err(Error::new(
                    ErrorImpl::IndentTooDeep {
                        from: self.indent_level,
                        to: depth,
                    },
                    self.offset,
                ));
            }
            self.indent_level = depth;
            Ok(Some(MK_TOKEN!(TokenKind::Indent, self.offset)))
        } else if depth < self.indent_level {
            // One Dedent now, the rest replayed on later calls
            self.indent_level -= 1;
            self.pending_dedents = self.indent_level - depth;
            self.dedent_offset = self.offset;
            Ok(Some(MK_TOKEN!(TokenKind::Dedent, self.offset)))
        } else {
            Ok(None)
        }
    }

    pub fn next(&mut self) -> Result<Token, Error> {
        if self.pending_dedents > 0 {
            self.pending_dedents -= 1;
            self.indent_level -= 1;
            return Ok(MK_TOKEN!(TokenKind::Dedent, self.dedent_offset));
        }

        self.trim_spaces();

        loop {
            let Some(first) = self.source.bytes().next() else {
                return Ok(self.handle_eof());
            };

            match first {
                b'#' => self.trim_comment(),
                b'\n' => {
                    self.trim(1);
                    let width = self.trim_spaces();

                    let Some(next) = self.source.bytes().next() else {
                        return Ok(self.handle_eof());
                    };

                    // Blank and comment-only lines carry no indentation
                    if next == b'\n' || next == b'#' {
                        continue;
                    }

                    if let Some(token) = self.handle_indentation(width)? {
                        return Ok(token);
                    }
                    break;
                }
                _ => break,
            }
        }

        let token_offset = self.offset;

        if let Some(matched) = IDENTIFIER_PATTERN.find(self.source) {
            let text = matched.as_str();
            let token = match RESERVED_LOOKUP.get(text) {
                Some(kind) => MK_TOKEN!(*kind, token_offset),
                None => MK_TOKEN!(
                    TokenKind::Identifier,
                    token_offset,
                    TokenValue::Text(String::from(text))
                ),
            };
            self.trim(text.len());
            return Ok(token);
        }

        if let Some(matched) = DIGITS_PATTERN.find(self.source) {
            let digits = matched.as_str();
            let int_value = digits
                .bytes()
                .try_fold(0i64, |acc, b| {
                    acc.checked_mul(10)?.checked_add(i64::from(b - b'0'))
                })
                .ok_or_else(|| {
                    Error::new(
                        ErrorImpl::NumberParseError {
                            token: String::from(digits),
                        },
                        token_offset,
                    )
                })?;

            if self.source.as_bytes().get(digits.len()) == Some(&b'.') {
                let (fraction, fraction_size) = scan_fraction(&self.source[digits.len() + 1..]);
                self.trim(digits.len() + 1 + fraction_size);
                return Ok(MK_TOKEN!(
                    TokenKind::Float,
                    token_offset,
                    TokenValue::Float(int_value as f64 + fraction)
                ));
            }

            self.trim(digits.len());
            return Ok(MK_TOKEN!(
                TokenKind::Int,
                token_offset,
                TokenValue::Int(int_value)
            ));
        }

        match self.source.as_bytes()[0] {
            b'"' => self.scan_string(),
            b'.' => {
                let (fraction, fraction_size) = scan_fraction(&self.source[1..]);
                if fraction_size > 0 {
                    self.trim(1 + fraction_size);
                    Ok(MK_TOKEN!(
                        TokenKind::Float,
                        token_offset,
                        TokenValue::Float(fraction)
                    ))
                } else {
                    Ok(self.make_operator(TokenKind::Dot, 1))
                }
            }
            b'(' => Ok(self.make_operator(TokenKind::OpenParen, 1)),
            b')' => Ok(self.make_operator(TokenKind::CloseParen, 1)),
            b'[' => Ok(self.make_operator(TokenKind::OpenBracket, 1)),
            b']' => Ok(self.make_operator(TokenKind::CloseBracket, 1)),
            b'{' => Ok(self.make_operator(TokenKind::OpenCurly, 1)),
            b'}' => Ok(self.make_operator(TokenKind::CloseCurly, 1)),
            b':' => Ok(self.make_operator(TokenKind::Colon, 1)),
            b',' => Ok(self.make_operator(TokenKind::Comma, 1)),
            b'=' => match self.source.as_bytes().get(1) {
                Some(b'=') => Ok(self.make_operator(TokenKind::Equals, 2)),
                _ => Ok(self.make_operator(TokenKind::Assignment, 1)),
            },
            b'!' => match self.source.as_bytes().get(1) {
                Some(b'=') => Ok(self.make_operator(TokenKind::NotEquals, 2)),
                _ => Err(Error::new(
                    ErrorImpl::UnrecognisedCharacter { character: '!' },
                    token_offset,
                )),
            },
            b'<' => match self.source.as_bytes().get(1) {
                Some(b'=') => Ok(self.make_operator(TokenKind::LessEquals, 2)),
                _ => Ok(self.make_operator(TokenKind::Less, 1)),
            },
            b'>' => match self.source.as_bytes().get(1) {
                Some(b'=') => Ok(self.make_operator(TokenKind::GreaterEquals, 2)),
                _ => Ok(self.make_operator(TokenKind::Greater, 1)),
            },
            b'+' => match self.source.as_bytes().get(1) {
                Some(b'=') => Ok(self.make_operator(TokenKind::PlusEquals, 2)),
                _ => Ok(self.make_operator(TokenKind::Plus, 1)),
            },
            b'-' => match self.source.as_bytes().get(1) {
                Some(b'=') => Ok(self.make_operator(TokenKind::MinusEquals, 2)),
                _ => Ok(self.make_operator(TokenKind::Dash, 1)),
            },
            b'*' => match (self.source.as_bytes().get(1), self.source.as_bytes().get(2)) {
                (Some(b'*'), Some(b'=')) => Ok(self.make_operator(TokenKind::StarStarEquals, 3)),
                (Some(b'*'), _) => Ok(self.make_operator(TokenKind::StarStar, 2)),
                (Some(b'='), _) => Ok(self.make_operator(TokenKind::StarEquals, 2)),
                _ => Ok(self.make_operator(TokenKind::Star, 1)),
            },
            b'/' => match (self.source.as_bytes().get(1), self.source.as_bytes().get(2)) {
                (Some(b'/'), Some(b'=')) => Ok(self.make_operator(TokenKind::SlashSlashEquals, 3)),
                (Some(b'/'), _) => Ok(self.make_operator(TokenKind::SlashSlash, 2)),
                (Some(b'='), _) => Ok(self.make_operator(TokenKind::SlashEquals, 2)),
                _ => Ok(self.make_operator(TokenKind::Slash, 1)),
            },
            b'^' => match self.source.as_bytes().get(1) {
                Some(b'=') => Ok(self.make_operator(TokenKind::CaretEquals, 2)),
                _ => Ok(self.make_operator(TokenKind::Caret, 1)),
            },
            _ => {
                let character = self.source.chars().next().unwrap_or('\0');
                Err(Error::new(
                    ErrorImpl::UnrecognisedCharacter { character },
                    token_offset,
                ))
            }
        }
    }

    fn make_operator(&mut self, kind: TokenKind, size: usize) -> Token {
        let token = MK_TOKEN!(kind, self.offset);
        self.trim(size);
        token
    }

    fn scan_string(&mut self) -> Result<Token, Error> {
        let token_offset = self.offset;
        let mut value = String::new();
        let mut chars = self.source.char_indices();
        chars.next(); // opening quote

        loop {
            match chars.next() {
                None => {
                    return Err(Error::new(ErrorImpl::UnterminatedString, token_offset));
                }
                Some((end, '"')) => {
                    self.trim(end + 1);
                    return Ok(MK_TOKEN!(
                        TokenKind::String,
                        token_offset,
                        TokenValue::Text(value)
                    ));
                }
                Some((_, '\\')) => match chars.next() {
                    Some((_, 'n')) => value.push('\n'),
                    Some((_, 'r')) => value.push('\r'),
                    Some((_, '\\')) => value.push('\\'),
                    Some((_, '"')) => value.push('"'),
                    Some((position, character)) => {
                        return Err(Error::new(
                            ErrorImpl::InvalidEscape { character },
                            self.offset + position as u32,
                        ));
                    }
                    None => {
                        return Err(Error::new(ErrorImpl::UnterminatedString, token_offset));
                    }
                },
                Some((_, character)) => value.push(character),
            }
        }
    }
}

// Fractional digit run, accumulated by successive division by 10.
fn scan_fraction(source: &str) -> (f64, usize) {
    let mut value = 0.0;
    let mut scale = 1.0;
    let mut size = 0;

    for b in source.bytes() {
        if !b.is_ascii_digit() {
            break;
        }
        scale /= 10.0;
        value += scale * f64::from(b - b'0');
        size += 1;
    }

    (value, size)
}

/// Runs the tokenizer over the whole source, collecting every token up to
/// and including EOF.
pub fn tokenize(source: &str) -> Result<Vec<Token>, Error> {
    let mut tokenizer = Tokenizer::new(source);
    let mut tokens = vec![];

    loop {
        let token = tokenizer.next()?;
        let at_eof = token.kind == TokenKind::EOF;
        tokens.push(token);
        if at_eof {
            return Ok(tokens);
        }
    }
}
