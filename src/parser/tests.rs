//! Unit tests for the expression parser.
//!
//! This module contains tests for:
//! - Operator precedence and associativity
//! - Flat same-priority chains
//! - Unary operators and the absent-operand sentinel
//! - Parenthesized sub-expressions
//! - Expression separators
//! - Parse error cases

use crate::{
    ast::node::Node,
    errors::errors::Error,
    lexer::{lexer::Tokenizer, tokens::TokenKind},
};

use super::{
    expr::parse_expression,
    lookups::{can_extend_rvalue, is_expression_separator},
    parser::TokenizerView,
};

fn parse(source: &str) -> Result<Node, Error> {
    let mut tokenizer = Tokenizer::new(source);
    parse_expression(&mut tokenizer)
}

#[test]
fn test_parse_single_identifier() {
    let node = parse("a").unwrap();

    assert!(node.is_leaf());
    assert_eq!(node.to_string(), "a");
}

#[test]
fn test_parse_simple_binary() {
    let node = parse("a + b").unwrap();

    assert_eq!(node.to_string(), "(a + b)");
}

#[test]
fn test_parse_precedence_right_tighter() {
    let node = parse("a + b * c").unwrap();

    assert_eq!(node.to_string(), "(a + (b * c))");
}

#[test]
fn test_parse_precedence_left_tighter() {
    let node = parse("a * b + c").unwrap();

    assert_eq!(node.to_string(), "((a * b) + c)");
}

#[test]
fn test_parse_flat_same_priority_chain() {
    let node = parse("a + b + c").unwrap();

    assert_eq!(node.to_string(), "(a + b + c)");

    // One node, not a nested pair
    let Node::Operator(operator_node) = node else {
        panic!("expected an operator node");
    };
    assert_eq!(operator_node.operators.len(), 2);
    assert_eq!(operator_node.children.len(), 3);
    assert!(operator_node.is_complete());
}

#[test]
fn test_parse_mixed_same_priority_chain() {
    let node = parse("a + b - c + d").unwrap();

    assert_eq!(node.to_string(), "(a + b - c + d)");
}

#[test]
fn test_parse_unary_not() {
    let node = parse("not a").unwrap();

    assert!(node.is_unary());
    assert_eq!(node.to_string(), "(NULL not a)");
}

#[test]
fn test_parse_unary_minus() {
    let node = parse("- a").unwrap();

    assert_eq!(node.to_string(), "(NULL - a)");
}

#[test]
fn test_parse_unary_inside_binary() {
    let node = parse("a + - b").unwrap();

    assert_eq!(node.to_string(), "(a + (NULL - b))");
}

#[test]
fn test_parse_stacked_unary() {
    let node = parse("not not a").unwrap();

    assert_eq!(node.to_string(), "(NULL not (NULL not a))");
}

#[test]
fn test_parse_unary_binds_below_or() {
    let node = parse("not a or b").unwrap();

    assert_eq!(node.to_string(), "((NULL not a) or b)");
}

#[test]
fn test_parse_and_binds_tighter_than_or() {
    let node = parse("a or b and c").unwrap();

    assert_eq!(node.to_string(), "(a or (b and c))");
}

#[test]
fn test_parse_cascading_collapse_rejoins_flat_chain() {
    // The `==` and `and` levels both close over `d` before the second
    // `or` merges into the open chain at the bottom of the stack
    let node = parse("a or b and c == d or e").unwrap();

    assert_eq!(node.to_string(), "(a or (b and (c == d)) or e)");
}

#[test]
fn test_parse_comparison_binds_tighter_than_or() {
    let node = parse("a == b or c").unwrap();

    assert_eq!(node.to_string(), "((a == b) or c)");
}

#[test]
fn test_parse_in_operator() {
    let node = parse("a in b").unwrap();

    assert_eq!(node.to_string(), "(a in b)");
}

#[test]
fn test_parse_power_chain_is_flat() {
    let node = parse("a ** b ** c").unwrap();

    assert_eq!(node.to_string(), "(a ** b ** c)");
}

#[test]
fn test_parse_dot_binds_tighter_than_power() {
    let node = parse("a . b ** c").unwrap();

    assert_eq!(node.to_string(), "((a . b) ** c)");
}

#[test]
fn test_parse_parentheses_override_precedence() {
    let node = parse("(a + b) * c").unwrap();

    assert_eq!(node.to_string(), "((a + b) * c)");
}

#[test]
fn test_parse_nested_parentheses_add_no_node() {
    let node = parse("((a))").unwrap();

    assert!(node.is_leaf());
    assert_eq!(node.to_string(), "a");
}

#[test]
fn test_parse_stops_at_comma() {
    // The comma belongs to an enclosing context
    let node = parse("a , b").unwrap();

    assert_eq!(node.to_string(), "a");
}

#[test]
fn test_parse_round_trip() {
    let node = parse("a + b * (c - d)").unwrap();
    let serialized = node.to_string();
    assert_eq!(serialized, "(a + (b * (c - d)))");

    // Offsets differ, so compare the serialized form
    let reparsed = parse(&serialized).unwrap();
    assert_eq!(reparsed.to_string(), serialized);
}

#[test]
fn test_parse_empty_input() {
    let result = parse("");

    assert!(result.is_err());
    assert_eq!(result.err().unwrap().get_error_name(), "EmptyExpression");
}

#[test]
fn test_parse_dangling_operator() {
    let result = parse("a +");

    assert!(result.is_err());
    let error = result.err().unwrap();
    assert_eq!(error.get_error_name(), "DanglingOperator");
    assert_eq!(error.get_offset(), 3);
}

#[test]
fn test_parse_missing_left_operand() {
    // `or` has no unary reading
    let result = parse("or a");

    assert!(result.is_err());
    assert_eq!(result.err().unwrap().get_error_name(), "MissingOperand");
}

#[test]
fn test_parse_empty_parentheses() {
    let result = parse("()");

    assert!(result.is_err());
    assert_eq!(result.err().unwrap().get_error_name(), "MissingOperand");
}

#[test]
fn test_parse_unclosed_parenthesis() {
    let result = parse("(a + b");

    assert!(result.is_err());
    assert_eq!(
        result.err().unwrap().get_error_name(),
        "UnmatchedParenthesis"
    );
}

#[test]
fn test_parse_comma_inside_parentheses() {
    let result = parse("(a, b)");

    assert!(result.is_err());
    assert_eq!(
        result.err().unwrap().get_error_name(),
        "UnmatchedParenthesis"
    );
}

#[test]
fn test_parse_operand_after_operand() {
    let result = parse("a b");

    assert!(result.is_err());
    assert_eq!(
        result.err().unwrap().get_error_name(),
        "IncompatibleOperator"
    );
}

#[test]
fn test_parse_operator_without_binary_reading() {
    let result = parse("a not b");

    assert!(result.is_err());
    assert_eq!(
        result.err().unwrap().get_error_name(),
        "IncompatibleOperator"
    );
}

#[test]
fn test_view_expect() {
    let mut tokenizer = Tokenizer::new("( a");
    let mut view = TokenizerView::new(&mut tokenizer).unwrap();

    let token = view.expect(TokenKind::OpenParen).unwrap();
    assert_eq!(token.kind, TokenKind::OpenParen);
    assert_eq!(view.current_token_kind(), TokenKind::Identifier);

    // A mismatch reports the offending token and consumes nothing
    let error = view.expect(TokenKind::CloseParen).err().unwrap();
    assert_eq!(error.get_error_name(), "UnmatchedParenthesis");
    assert_eq!(view.current_token_kind(), TokenKind::Identifier);
}

#[test]
fn test_can_extend_rvalue() {
    assert!(can_extend_rvalue(TokenKind::Identifier));
    assert!(can_extend_rvalue(TokenKind::Plus));
    assert!(can_extend_rvalue(TokenKind::Not));
    assert!(can_extend_rvalue(TokenKind::OpenParen));
    assert!(can_extend_rvalue(TokenKind::CloseParen));
    assert!(can_extend_rvalue(TokenKind::OpenBracket));

    assert!(!can_extend_rvalue(TokenKind::Int));
    assert!(!can_extend_rvalue(TokenKind::Comma));
    assert!(!can_extend_rvalue(TokenKind::Colon));
    assert!(!can_extend_rvalue(TokenKind::EOF));
    assert!(!can_extend_rvalue(TokenKind::Indent));
}

#[test]
fn test_is_expression_separator() {
    assert!(is_expression_separator(TokenKind::CloseParen));
    assert!(is_expression_separator(TokenKind::Comma));

    assert!(!is_expression_separator(TokenKind::OpenParen));
    assert!(!is_expression_separator(TokenKind::EOF));
}
