use crate::{
    ast::node::{Node, OperatorNode},
    errors::errors::{Error, ErrorImpl},
    lexer::{lexer::Tokenizer, tokens::TokenKind},
};

use super::{
    lookups::{binary_priority, can_extend_rvalue, is_expression_separator, unary_priority},
    parser::TokenizerView,
};

/// Parses one expression from the tokenizer, returning the root of its
/// tree. Consumes exactly the tokens belonging to the expression: a
/// closing parenthesis or comma of an enclosing context is never consumed,
/// and trailing tokens are left for a future statement-level parser.
pub fn parse_expression(tokenizer: &mut Tokenizer) -> Result<Node, Error> {
    let mut view = TokenizerView::new(tokenizer)?;
    parse_expr(&mut view)
}

/// Parses one atomic operand at the current token.
///
/// No element is not an error: it marks a unary context or the end of the
/// expression. Parentheses recurse into a full sub-expression and add no
/// node of their own.
fn parse_element(view: &mut TokenizerView<'_, '_>) -> Result<Option<Node>, Error> {
    let token = view.current_token();
    if !can_extend_rvalue(token.kind) {
        return Ok(None);
    }

    match token.kind {
        TokenKind::Identifier => {
            let value = token.value.clone();
            view.advance()?;
            Ok(Some(Node::leaf(value)))
        }
        TokenKind::OpenParen => {
            view.advance()?;
            let inner = parse_expr(view)?;
            view.expect(TokenKind::CloseParen)?;
            Ok(Some(inner))
        }
        // Any other bracket, or an operator token
        _ => Ok(None),
    }
}

pub fn parse_expr(view: &mut TokenizerView<'_, '_>) -> Result<Node, Error> {
    // Open expression parts: every entry is an operator node still
    // awaiting its final operand.
    let mut parts: Vec<OperatorNode> = vec![];
    // Set once the expression's final operand (possibly absent) is seen.
    let mut tail: Option<Option<Node>> = None;

    while can_extend_rvalue(view.current_token_kind()) {
        let mut element = parse_element(view)?;

        let cur_token = view.current_token().clone();
        if !can_extend_rvalue(cur_token.kind) || is_expression_separator(cur_token.kind) {
            tail = Some(element);
            break;
        }

        // The current token is the next operator; its role depends on
        // whether an operand is available on its left.
        let priority = if element.is_none() {
            match unary_priority(cur_token.kind) {
                Some(priority) => priority,
                None => {
                    return Err(Error::new(
                        ErrorImpl::MissingOperand {
                            token: String::from(cur_token.kind.lexeme()),
                        },
                        cur_token.offset,
                    ));
                }
            }
        } else {
            match binary_priority(cur_token.kind) {
                Some(priority) => priority,
                None => {
                    return Err(Error::new(
                        ErrorImpl::IncompatibleOperator {
                            token: String::from(cur_token.kind.lexeme()),
                        },
                        cur_token.offset,
                    ));
                }
            }
        };

        // Anything on the stack binding tighter than this operator closes
        // over the element and becomes the element itself.
        while parts
            .last()
            .map_or(false, |top| top.priority().unwrap_or(-1) > priority)
        {
            let Some(child) = element.take() else {
                return Err(Error::new(
                    ErrorImpl::MissingOperand {
                        token: String::from(cur_token.kind.lexeme()),
                    },
                    cur_token.offset,
                ));
            };
            let Some(mut top) = parts.pop() else {
                break;
            };
            top.push_operand(child);
            element = Some(Node::Operator(top));
        }

        // Operators of equal priority merge into one flat,
        // left-associative chain; unary nodes never absorb a sibling.
        let merged = match parts.last_mut() {
            Some(top) if !top.is_unary() && top.priority() == Some(priority) => {
                top.push_operator_operand(cur_token.clone(), element.take());
                true
            }
            _ => false,
        };

        if !merged {
            // A new, tighter level - or a unary operator, recognizable
            // later by its absent first child.
            let mut node = OperatorNode::new();
            node.push_operator_operand(cur_token.clone(), element.take());
            parts.push(node);
        }

        view.advance()?;
    }

    match tail {
        // The loop ran out without seeing a final operand: either nothing
        // was parsed at all, or the top operator is left dangling.
        None => match parts.pop() {
            None => Err(Error::new(
                ErrorImpl::EmptyExpression,
                view.current_token().offset,
            )),
            Some(top) => {
                let token = top
                    .operators
                    .last()
                    .map(|oper| oper.kind.lexeme())
                    .unwrap_or("?");
                Err(Error::new(
                    ErrorImpl::DanglingOperator {
                        token: String::from(token),
                    },
                    view.current_token().offset,
                ))
            }
        },
        Some(None) => Err(Error::new(
            ErrorImpl::MissingOperand {
                token: String::from(view.current_token_kind().lexeme()),
            },
            view.current_token().offset,
        )),
        Some(Some(element)) => {
            // Collapse: each open part takes the tree built so far as its
            // final operand, innermost first.
            let mut result = element;
            while let Some(mut top) = parts.pop() {
                top.push_operand(result);
                result = Node::Operator(top);
            }
            Ok(result)
        }
    }
}
