use std::collections::HashMap;

use crate::{ast::ast::Expr, errors::errors::Error, lexer::tokens::TokenKind};

use super::{expr::*, parser::Parser, stmt::*};

/// Binding powers, weakest first.
///
/// Juxtaposition binds weaker than an infix step, which binds weaker than a
/// postfix `!`.
#[derive(PartialEq, PartialOrd, Clone, Copy, Debug)]
pub enum BindingPower {
    Default,
    Call,
    Infix,
    Postfix,
}

pub type StmtHandler = fn(&mut Parser) -> Result<Expr, Error>;
pub type NUDHandler = fn(&mut Parser) -> Result<Expr, Error>;
pub type LEDHandler = fn(&mut Parser, Expr, BindingPower) -> Result<Expr, Error>;

/// Tokens that can start an operand.
pub const OPERAND_START: [TokenKind; 7] = [
    TokenKind::Integer,
    TokenKind::Decimal,
    TokenKind::String,
    TokenKind::Symbol,
    TokenKind::Fn,
    TokenKind::OpenCurly,
    TokenKind::OpenParen,
];

pub fn create_token_lookups(parser: &mut Parser) {
    // Postfix and infix
    parser.led(TokenKind::Bang, BindingPower::Postfix, parse_invoke_expr);
    parser.led(TokenKind::Backtick, BindingPower::Infix, parse_infix_expr);

    // An operand following an operand is an application
    for kind in OPERAND_START {
        parser.led(kind, BindingPower::Call, parse_call_expr);
    }

    // Literals and symbols
    parser.nud(TokenKind::Integer, parse_primary_expr);
    parser.nud(TokenKind::Decimal, parse_primary_expr);
    parser.nud(TokenKind::String, parse_primary_expr);
    parser.nud(TokenKind::Symbol, parse_primary_expr);
    parser.nud(TokenKind::Fn, parse_fn_expr);
    parser.nud(TokenKind::OpenCurly, parse_brace_block_expr);
    parser.nud(TokenKind::OpenParen, parse_paren_block_expr);

    // Statements
    parser.stmt(TokenKind::Let, parse_assignment_stmt);
    parser.stmt(TokenKind::LetRec, parse_assignment_stmt);
}

// Lookup tables inside parser struct, so it's easier
pub type StmtLookup = HashMap<TokenKind, StmtHandler>;
pub type NUDLookup = HashMap<TokenKind, NUDHandler>;
pub type LEDLookup = HashMap<TokenKind, LEDHandler>;
pub type BPLookup = HashMap<TokenKind, BindingPower>;
