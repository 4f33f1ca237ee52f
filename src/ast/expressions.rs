use crate::Span;

use super::ast::Expr;

// LITERALS

#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Integer(i64),
    Decimal(f64),
    String(String),
}

/// Literal Expression
/// Represents a number or string literal in the AST.
#[derive(Debug, Clone, PartialEq)]
pub struct LiteralExpr {
    pub value: Literal,
    pub span: Span,
}

/// Symbol Expression
/// Represents a reference to a name. Operator symbols such as `+` are names too.
#[derive(Debug, Clone, PartialEq)]
pub struct SymbolExpr {
    pub name: String,
    pub span: Span,
}

// FUNCTIONS AND BLOCKS

/// Function Expression
/// `fn name (a, b) body`; both the name and the parameter list are optional.
#[derive(Debug, Clone, PartialEq)]
pub struct FnExpr {
    pub name: Option<String>,
    pub parameters: Vec<String>,
    pub body: Box<Expr>,
    pub span: Span,
}

/// Block Expression
/// `{ ... }` opens a new scope (`scoped`), `( ... )` does not.
/// Its value is the last statement, or the empty sentinel when there are none.
#[derive(Debug, Clone, PartialEq)]
pub struct BlockExpr {
    pub scoped: bool,
    pub statements: Vec<Expr>,
    pub span: Span,
}

impl BlockExpr {
    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    pub fn last(&self) -> Option<&Expr> {
        self.statements.last()
    }
}

/// Assignment Expression
/// `let name value`, or `letrec name value` when `name` is visible inside `value`.
#[derive(Debug, Clone, PartialEq)]
pub struct AssignmentExpr {
    pub recursive: bool,
    pub name: String,
    pub value: Box<Expr>,
    pub span: Span,
}

// APPLICATION

/// Call Expression
/// Juxtaposition: `callee arg1 arg2 ...`. Never has zero arguments.
#[derive(Debug, Clone, PartialEq)]
pub struct CallExpr {
    pub callee: Box<Expr>,
    pub arguments: Vec<Expr>,
    pub span: Span,
}

/// One `` `op extra1 extra2 `` step of an infix chain.
#[derive(Debug, Clone, PartialEq)]
pub struct InfixStep {
    pub operator: Expr,
    pub extra_args: Vec<Expr>,
}

/// Infix Call Expression
/// `seed `f a `g` applies `f` to the seed and `a`, then `g` to that result.
#[derive(Debug, Clone, PartialEq)]
pub struct InfixCallExpr {
    pub seed: Box<Expr>,
    pub chain: Vec<InfixStep>,
    pub span: Span,
}

/// Invoke Expression
/// `target!`, a call with zero arguments.
#[derive(Debug, Clone, PartialEq)]
pub struct InvokeExpr {
    pub target: Box<Expr>,
    pub span: Span,
}
