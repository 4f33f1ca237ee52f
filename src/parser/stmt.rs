use crate::{
    ast::{
        ast::Expr,
        expressions::{AssignmentExpr, BlockExpr},
    },
    errors::errors::Error,
    lexer::tokens::TokenKind,
    parser::{expr::parse_expr, lookups::BindingPower},
    Span,
};

use super::parser::Parser;

/// Parses a full expression: an assignment or anything built from operands.
pub fn parse_stmt(parser: &mut Parser) -> Result<Expr, Error> {
    parser.descend()?;
    let stmt = parse_nested_stmt(parser);
    parser.ascend();

    stmt
}

fn parse_nested_stmt(parser: &mut Parser) -> Result<Expr, Error> {
    if let Some(handler) = parser
        .get_stmt_lookup()
        .get(&parser.current_token_kind())
        .copied()
    {
        return handler(parser);
    }

    parse_expr(parser, BindingPower::Default)
}

pub fn parse_assignment_stmt(parser: &mut Parser) -> Result<Expr, Error> {
    let start_token = parser.advance()?;
    let recursive = start_token.kind == TokenKind::LetRec;

    let error = parser.unexpected_detailed(&format!(
        "expected identifier after `{}`",
        start_token.lexeme
    ));
    let name = parser.expect_error(TokenKind::Symbol, Some(error))?.lexeme;

    let value = parse_stmt(parser)?;

    Ok(Expr::Assignment(AssignmentExpr {
        recursive,
        name,
        span: Span {
            start: start_token.span.start,
            end: parser.get_last_end(),
        },
        value: Box::new(value),
    }))
}

/// Statements up to `close`, separated by `;` with an optional trailing `;`.
///
/// Returns the statements and whether the last one was followed by `;`.
fn parse_block_body(parser: &mut Parser, close: TokenKind) -> Result<(Vec<Expr>, bool), Error> {
    let mut statements = vec![];
    let mut trailing_semicolon = false;

    while parser.current_token_kind() != close {
        statements.push(parse_stmt(parser)?);

        if parser.current_token_kind() == TokenKind::Semicolon {
            parser.advance()?;
            trailing_semicolon = true;
        } else {
            trailing_semicolon = false;
            break;
        }
    }

    if parser.current_token_kind() != close {
        return Err(parser.unexpected(&[TokenKind::Semicolon, close]));
    }
    parser.advance()?;

    Ok((statements, trailing_semicolon))
}

pub fn parse_brace_block_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let start = parser.expect(TokenKind::OpenCurly)?.span.start;
    let (statements, _) = parse_block_body(parser, TokenKind::CloseCurly)?;

    Ok(Expr::Block(BlockExpr {
        scoped: true,
        statements,
        span: Span {
            start,
            end: parser.get_last_end(),
        },
    }))
}

/// `(e)` is a grouping and yields `e`; any other paren form is an unscoped block.
pub fn parse_paren_block_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let start = parser.expect(TokenKind::OpenParen)?.span.start;
    let (mut statements, trailing_semicolon) = parse_block_body(parser, TokenKind::CloseParen)?;

    if statements.len() == 1 && !trailing_semicolon {
        if let Some(inner) = statements.pop() {
            return Ok(inner);
        }
    }

    Ok(Expr::Block(BlockExpr {
        scoped: false,
        statements,
        span: Span {
            start,
            end: parser.get_last_end(),
        },
    }))
}
