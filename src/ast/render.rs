//! Canonical source rendering.
//!
//! Output re-parses to a structurally equal tree for anything the parser
//! produces.

use super::{
    ast::Expr,
    expressions::{BlockExpr, FnExpr, InfixCallExpr, Literal},
};

/// Renders `expr` as it would appear at the top of a program or statement.
pub fn render(expr: &Expr) -> String {
    match expr {
        Expr::Literal(literal) => render_literal(&literal.value),
        Expr::Symbol(symbol) => symbol.name.clone(),
        Expr::Function(function) => render_fn(function),
        Expr::Block(block) => render_block(block),
        Expr::Assignment(assignment) => format!(
            "{} {} {}",
            if assignment.recursive { "letrec" } else { "let" },
            assignment.name,
            render(&assignment.value)
        ),
        Expr::Call(call) => {
            let mut parts = vec![render_operand(&call.callee)];
            parts.extend(call.arguments.iter().map(render_operand));
            parts.join(" ")
        }
        Expr::InfixCall(infix) => render_infix(infix),
        Expr::Invoke(invoke) => format!("{}!", render_operand(&invoke.target)),
    }
}

/// Renders `expr` where it must not absorb or be absorbed by its neighbours.
fn render_operand(expr: &Expr) -> String {
    match expr {
        Expr::Literal(_) | Expr::Symbol(_) | Expr::Block(_) | Expr::Invoke(_) => render(expr),
        _ => format!("({})", render(expr)),
    }
}

fn render_literal(literal: &Literal) -> String {
    match literal {
        Literal::Integer(value) => value.to_string(),
        Literal::Decimal(value) => {
            let text = value.to_string();
            if text.contains('.') {
                text
            } else {
                format!("{}.0", text)
            }
        }
        // No escapes exist, so a value holding both quote kinds cannot round-trip.
        Literal::String(value) if value.contains('"') => format!("'{}'", value),
        Literal::String(value) => format!("\"{}\"", value),
    }
}

fn render_fn(function: &FnExpr) -> String {
    let mut text = String::from("fn");

    if let Some(name) = &function.name {
        text.push(' ');
        text.push_str(name);
    }
    text.push_str(&format!(" ({}) ", function.parameters.join(", ")));

    match function.body.as_ref() {
        Expr::Block(block) if block.scoped => text.push_str(&render_block(block)),
        body => text.push_str(&render_operand(body)),
    }

    text
}

fn render_block(block: &BlockExpr) -> String {
    let statements = block.statements.iter().map(render).collect::<Vec<_>>();

    if block.scoped {
        format!("{{{}}}", statements.join("; "))
    } else if statements.is_empty() {
        String::from("()")
    } else {
        // The trailing `;` keeps a one-statement block from reading as a grouping.
        format!("({};)", statements.join("; "))
    }
}

fn render_infix(infix: &InfixCallExpr) -> String {
    let mut text = render_operand(&infix.seed);

    for step in &infix.chain {
        text.push_str(" `");
        text.push_str(&render_operand(&step.operator));
        for arg in &step.extra_args {
            text.push(' ');
            text.push_str(&render_operand(arg));
        }
    }

    text
}
