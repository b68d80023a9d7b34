use std::fmt::Display;

use crate::lexer::tokens::{Token, TokenValue};
use crate::parser::lookups::{binary_priority, unary_priority};

/// One node of an expression tree: either a leaf carrying a literal or
/// identifier payload, or an operator node.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Leaf(TokenValue),
    Operator(OperatorNode),
}

/// An operator node holds a parallel pair of lists: operands (children)
/// and operators. The first operand slot may hold the explicit absent
/// sentinel (`None`), which marks a unary-prefix node. A node is complete
/// when it has exactly one more child than it has operators.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct OperatorNode {
    pub operators: Vec<Token>,
    pub children: Vec<Option<Node>>,
}

impl OperatorNode {
    pub fn new() -> OperatorNode {
        OperatorNode {
            operators: vec![],
            children: vec![],
        }
    }

    /// Appends a child with no accompanying operator. Used to close the
    /// final tail of a parse, completing the node.
    pub fn push_operand(&mut self, child: Node) {
        self.children.push(Some(child));
    }

    /// Appends one operator and its following child atomically, keeping
    /// the two lists in lock-step. An absent child here is only ever the
    /// first slot of a unary node.
    pub fn push_operator_operand(&mut self, oper: Token, child: Option<Node>) {
        self.operators.push(oper);
        self.children.push(child);
    }

    pub fn is_unary(&self) -> bool {
        matches!(self.children.first(), Some(None))
    }

    pub fn is_complete(&self) -> bool {
        self.children.len() == self.operators.len() + 1
    }

    /// Binding priority of the defining (first) operator, looked up as
    /// unary when the first operand slot is absent.
    pub fn priority(&self) -> Option<i32> {
        let oper = self.operators.first()?;
        if self.is_unary() {
            unary_priority(oper.kind)
        } else {
            binary_priority(oper.kind)
        }
    }
}

impl Node {
    pub fn leaf(value: TokenValue) -> Node {
        Node::Leaf(value)
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf(_))
    }

    pub fn is_unary(&self) -> bool {
        match self {
            Node::Leaf(_) => false,
            Node::Operator(node) => node.is_unary(),
        }
    }

    /// Leaves are trivially complete.
    pub fn is_complete(&self) -> bool {
        match self {
            Node::Leaf(_) => true,
            Node::Operator(node) => node.is_complete(),
        }
    }

    pub fn priority(&self) -> Option<i32> {
        match self {
            Node::Leaf(_) => None,
            Node::Operator(node) => node.priority(),
        }
    }
}

/// Diagnostic serializer: a leaf renders as its literal, an operator node
/// as `( left {op right}* )`. An incomplete node renders as `INCOMPLETE`
/// and a present-but-absent child as `NULL` - intentional diagnostic
/// sentinels, not silent failures.
impl Display for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Node::Leaf(value) => write!(f, "{}", value),
            Node::Operator(node) => {
                if !node.is_complete() {
                    return write!(f, "INCOMPLETE");
                }

                write!(f, "(")?;
                match &node.children[0] {
                    Some(child) => write!(f, "{}", child)?,
                    None => write!(f, "NULL")?,
                }
                for (oper, child) in node.operators.iter().zip(node.children.iter().skip(1)) {
                    write!(f, " {} ", oper.kind.lexeme())?;
                    match child {
                        Some(child) => write!(f, "{}", child)?,
                        None => write!(f, "NULL")?,
                    }
                }
                write!(f, ")")
            }
        }
    }
}
