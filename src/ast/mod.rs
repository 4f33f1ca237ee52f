/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: The closed `Expr` node type
/// - expressions: Definitions for the individual node kinds
/// - render: Canonical source rendering of a tree
pub mod ast;
pub mod expressions;
pub mod render;
