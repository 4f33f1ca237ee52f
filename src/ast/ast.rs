use std::fmt::Display;

use crate::Span;

use super::{
    expressions::{
        AssignmentExpr, BlockExpr, CallExpr, FnExpr, InfixCallExpr, InvokeExpr, LiteralExpr,
        SymbolExpr,
    },
    render::render,
};

/// Expression Types
///
/// Names the kind of an expression without borrowing its contents.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum ExprType {
    Literal,
    Symbol,
    Function,
    Block,
    Assignment,
    Call,
    InfixCall,
    Invoke,
}

/// A node of the syntax tree.
///
/// The set of node kinds is closed; consumers match on it exhaustively.
/// Every node owns its children.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Literal(LiteralExpr),
    Symbol(SymbolExpr),
    Function(FnExpr),
    Block(BlockExpr),
    Assignment(AssignmentExpr),
    Call(CallExpr),
    InfixCall(InfixCallExpr),
    Invoke(InvokeExpr),
}

impl Expr {
    pub fn get_expr_type(&self) -> ExprType {
        match self {
            Expr::Literal(_) => ExprType::Literal,
            Expr::Symbol(_) => ExprType::Symbol,
            Expr::Function(_) => ExprType::Function,
            Expr::Block(_) => ExprType::Block,
            Expr::Assignment(_) => ExprType::Assignment,
            Expr::Call(_) => ExprType::Call,
            Expr::InfixCall(_) => ExprType::InfixCall,
            Expr::Invoke(_) => ExprType::Invoke,
        }
    }

    pub fn get_span(&self) -> &Span {
        match self {
            Expr::Literal(expr) => &expr.span,
            Expr::Symbol(expr) => &expr.span,
            Expr::Function(expr) => &expr.span,
            Expr::Block(expr) => &expr.span,
            Expr::Assignment(expr) => &expr.span,
            Expr::Call(expr) => &expr.span,
            Expr::InfixCall(expr) => &expr.span,
            Expr::Invoke(expr) => &expr.span,
        }
    }
}

impl Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", render(self))
    }
}
