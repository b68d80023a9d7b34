use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("def", TokenKind::Def);
        map.insert("class", TokenKind::Class);
        map.insert("let", TokenKind::Let);
        map.insert("for", TokenKind::For);
        map.insert("while", TokenKind::While);
        map.insert("if", TokenKind::If);
        map.insert("else", TokenKind::Else);
        map.insert("elif", TokenKind::Elif);
        map.insert("return", TokenKind::Return);
        map.insert("in", TokenKind::In);
        map.insert("not", TokenKind::Not);
        map.insert("or", TokenKind::Or);
        map.insert("and", TokenKind::And);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EOF,
    Identifier,

    // Synthetic block markers in lieu of explicit delimiters
    Indent,
    Dedent,

    Int,
    Float,
    String,

    OpenBracket,
    CloseBracket,
    OpenCurly,
    CloseCurly,
    OpenParen,
    CloseParen,

    Colon,
    Comma,
    Dot,

    Assignment, // =
    Equals,     // ==
    NotEquals,  // !=

    Less,
    LessEquals,
    Greater,
    GreaterEquals,

    Plus,
    Dash,
    Star,
    Slash,
    SlashSlash,
    StarStar,
    Caret,

    PlusEquals,
    MinusEquals,
    StarEquals,
    SlashEquals,
    SlashSlashEquals,
    StarStarEquals,
    CaretEquals,

    // Reserved
    Def,
    Class,
    Let,
    For,
    While,
    If,
    Else,
    Elif,
    Return,
    In,
    Not,
    Or,
    And,
}

impl TokenKind {
    /// The source spelling of the token kind, used by the diagnostic
    /// serializer and in error messages. Kinds without a fixed spelling
    /// return a descriptive placeholder.
    pub fn lexeme(&self) -> &'static str {
        match self {
            TokenKind::EOF => "end of input",
            TokenKind::Identifier => "identifier",
            TokenKind::Indent => "indent",
            TokenKind::Dedent => "dedent",
            TokenKind::Int => "integer",
            TokenKind::Float => "float",
            TokenKind::String => "string",
            TokenKind::OpenBracket => "[",
            TokenKind::CloseBracket => "]",
            TokenKind::OpenCurly => "{",
            TokenKind::CloseCurly => "}",
            TokenKind::OpenParen => "(",
            TokenKind::CloseParen => ")",
            TokenKind::Colon => ":",
            TokenKind::Comma => ",",
            TokenKind::Dot => ".",
            TokenKind::Assignment => "=",
            TokenKind::Equals => "==",
            TokenKind::NotEquals => "!=",
            TokenKind::Less => "<",
            TokenKind::LessEquals => "<=",
            TokenKind::Greater => ">",
            TokenKind::GreaterEquals => ">=",
            TokenKind::Plus => "+",
            TokenKind::Dash => "-",
            TokenKind::Star => "*",
            TokenKind::Slash => "/",
            TokenKind::SlashSlash => "//",
            TokenKind::StarStar => "**",
            TokenKind::Caret => "^",
            TokenKind::PlusEquals => "+=",
            TokenKind::MinusEquals => "-=",
            TokenKind::StarEquals => "*=",
            TokenKind::SlashEquals => "/=",
            TokenKind::SlashSlashEquals => "//=",
            TokenKind::StarStarEquals => "**=",
            TokenKind::CaretEquals => "^=",
            TokenKind::Def => "def",
            TokenKind::Class => "class",
            TokenKind::Let => "let",
            TokenKind::For => "for",
            TokenKind::While => "while",
            TokenKind::If => "if",
            TokenKind::Else => "else",
            TokenKind::Elif => "elif",
            TokenKind::Return => "return",
            TokenKind::In => "in",
            TokenKind::Not => "not",
            TokenKind::Or => "or",
            TokenKind::And => "and",
        }
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// The payload carried by a token: nothing for punctuation and keywords,
/// text for identifiers and strings, numbers for numeric literals.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenValue {
    None,
    Text(String),
    Int(i64),
    Float(f64),
}

impl Display for TokenValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenValue::None => Ok(()),
            TokenValue::Text(text) => write!(f, "{}", text),
            TokenValue::Int(value) => write!(f, "{}", value),
            TokenValue::Float(value) => write!(f, "{}", value),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub offset: u32,
    pub value: TokenValue,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Token {{\nkind: {},\noffset: {},\nvalue: {}}}",
            self.kind, self.offset, self.value
        )
    }
}

impl Token {
    fn is_one_of_many(&self, tokens: Vec<TokenKind>) -> bool {
        for token in tokens {
            if token == self.kind {
                return true;
            }
        }

        false
    }

    pub fn debug(&self) {
        if self.is_one_of_many(vec![
            TokenKind::String,
            TokenKind::Identifier,
            TokenKind::Int,
            TokenKind::Float,
        ]) {
            println!("{} ({})", self.kind, self.value);
        } else {
            println!("{} ()", self.kind);
        }
    }
}
