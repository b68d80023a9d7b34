use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::lexer::tokens::TokenKind;

// Binding priorities: higher binds tighter. A token's role - unary or
// binary - depends on whether a left operand is available when it is seen.
lazy_static! {
    pub static ref UNARY_PRIORITY: HashMap<TokenKind, i32> = {
        let mut map = HashMap::new();
        map.insert(TokenKind::Not, 3);
        map.insert(TokenKind::Plus, 11);
        map.insert(TokenKind::Dash, 11);
        map
    };

    pub static ref BINARY_PRIORITY: HashMap<TokenKind, i32> = {
        let mut map = HashMap::new();
        map.insert(TokenKind::Or, 1);
        map.insert(TokenKind::And, 2);

        map.insert(TokenKind::In, 4);
        map.insert(TokenKind::Equals, 4);
        map.insert(TokenKind::NotEquals, 4);
        map.insert(TokenKind::Less, 4);
        map.insert(TokenKind::LessEquals, 4);
        map.insert(TokenKind::Greater, 4);
        map.insert(TokenKind::GreaterEquals, 4);

        map.insert(TokenKind::Caret, 6);

        map.insert(TokenKind::Plus, 9);
        map.insert(TokenKind::Dash, 9);
        map.insert(TokenKind::Star, 10);
        map.insert(TokenKind::Slash, 10);
        map.insert(TokenKind::SlashSlash, 10);

        map.insert(TokenKind::StarStar, 13);
        map.insert(TokenKind::Dot, 14);
        map
    };
}

pub fn unary_priority(kind: TokenKind) -> Option<i32> {
    UNARY_PRIORITY.get(&kind).copied()
}

pub fn binary_priority(kind: TokenKind) -> Option<i32> {
    BINARY_PRIORITY.get(&kind).copied()
}

pub fn is_operator(kind: TokenKind) -> bool {
    unary_priority(kind).is_some() || binary_priority(kind).is_some()
}

pub fn is_bracket(kind: TokenKind) -> bool {
    matches!(
        kind,
        TokenKind::OpenParen
            | TokenKind::CloseParen
            | TokenKind::OpenBracket
            | TokenKind::CloseBracket
            | TokenKind::OpenCurly
            | TokenKind::CloseCurly
    )
}

/// A token can extend an rvalue iff it is an operator, an identifier, or
/// any bracket (open or close).
pub fn can_extend_rvalue(kind: TokenKind) -> bool {
    is_operator(kind) || kind == TokenKind::Identifier || is_bracket(kind)
}

/// Expression separators end the expression without being consumed; they
/// belong to an enclosing context.
pub fn is_expression_separator(kind: TokenKind) -> bool {
    matches!(kind, TokenKind::CloseParen | TokenKind::Comma)
}
