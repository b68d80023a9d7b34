/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the expression tree structure
///
/// Submodules:
/// - node: The expression tree node and its diagnostic serializer
pub mod node;
