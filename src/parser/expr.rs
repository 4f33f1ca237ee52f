use crate::{
    ast::{
        ast::Expr,
        expressions::{
            CallExpr, FnExpr, InfixCallExpr, InfixStep, InvokeExpr, Literal, LiteralExpr,
            SymbolExpr,
        },
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{TokenKind, TokenValue},
    Span,
};

use super::{
    lookups::BindingPower,
    parser::Parser,
    stmt::{parse_brace_block_expr, parse_stmt},
};

pub fn parse_expr(parser: &mut Parser, bp: BindingPower) -> Result<Expr, Error> {
    parser.descend()?;
    let expr = parse_nested_expr(parser, bp);
    parser.ascend();

    expr
}

fn parse_nested_expr(parser: &mut Parser, bp: BindingPower) -> Result<Expr, Error> {
    // First parse NUD
    let token_kind = parser.current_token_kind();
    let Some(nud) = parser.get_nud_lookup().get(&token_kind).copied() else {
        let mut expected = parser.get_nud_lookup().keys().copied().collect::<Vec<_>>();
        if bp == BindingPower::Default {
            expected.extend(parser.get_stmt_lookup().keys().copied());
        }
        return Err(parser.unexpected(&expected));
    };

    let mut left = nud(parser)?;

    // While the current token binds tighter than the caller, keep extending lhs
    loop {
        let token_kind = parser.current_token_kind();
        let next_bp = match parser.get_bp_lookup().get(&token_kind).copied() {
            Some(next_bp) if next_bp > bp => next_bp,
            _ => break,
        };

        let Some(led) = parser.get_led_lookup().get(&token_kind).copied() else {
            return Err(parser.unexpected(&[]));
        };

        left = led(parser, left, next_bp)?;
    }

    Ok(left)
}

pub fn parse_primary_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let token = parser.advance()?;

    match token.value {
        TokenValue::Integer(value) => Ok(Expr::Literal(LiteralExpr {
            value: Literal::Integer(value),
            span: token.span,
        })),
        TokenValue::Decimal(value) => Ok(Expr::Literal(LiteralExpr {
            value: Literal::Decimal(value),
            span: token.span,
        })),
        TokenValue::String(value) => Ok(Expr::Literal(LiteralExpr {
            value: Literal::String(value),
            span: token.span,
        })),
        TokenValue::Symbol(name) => Ok(Expr::Symbol(SymbolExpr {
            name,
            span: token.span,
        })),
        TokenValue::None => Err(Error::new(
            ErrorImpl::UnexpectedToken {
                token: token.describe(),
                expected: vec![],
            },
            token.span.start,
        )),
    }
}

/// `callee arg1 arg2 ...` where each argument may carry infix steps and `!`
/// but never another application.
pub fn parse_call_expr(parser: &mut Parser, left: Expr, bp: BindingPower) -> Result<Expr, Error> {
    let mut arguments = vec![];

    while parser.at_operand() {
        arguments.push(parse_expr(parser, bp)?);
    }

    Ok(Expr::Call(CallExpr {
        span: Span {
            start: left.get_span().start.clone(),
            end: parser.get_last_end(),
        },
        callee: Box::new(left),
        arguments,
    }))
}

/// One `` `op extra... `` step. A seed that is already an infix chain (from a
/// parenthesised group) is extended instead of nested.
pub fn parse_infix_expr(parser: &mut Parser, left: Expr, bp: BindingPower) -> Result<Expr, Error> {
    parser.expect(TokenKind::Backtick)?;

    let operator = parse_expr(parser, bp)?;
    let mut extra_args = vec![];
    while parser.at_operand() {
        extra_args.push(parse_expr(parser, bp)?);
    }

    let step = InfixStep {
        operator,
        extra_args,
    };
    let end = parser.get_last_end();

    match left {
        Expr::InfixCall(mut infix) => {
            infix.chain.push(step);
            infix.span.end = end;
            Ok(Expr::InfixCall(infix))
        }
        seed => Ok(Expr::InfixCall(InfixCallExpr {
            span: Span {
                start: seed.get_span().start.clone(),
                end,
            },
            seed: Box::new(seed),
            chain: vec![step],
        })),
    }
}

pub fn parse_invoke_expr(parser: &mut Parser, left: Expr, _bp: BindingPower) -> Result<Expr, Error> {
    let bang = parser.expect(TokenKind::Bang)?;

    Ok(Expr::Invoke(InvokeExpr {
        span: left.get_span().to(&bang.span),
        target: Box::new(left),
    }))
}

pub fn parse_fn_expr(parser: &mut Parser) -> Result<Expr, Error> {
    // fn name (a, b) body
    let start = parser.expect(TokenKind::Fn)?.span.start;

    let name = match parser.current_token_kind() {
        TokenKind::Symbol => Some(parser.advance()?.lexeme),
        _ => None,
    };

    let mut parameters = vec![];
    if parser.current_token_kind() == TokenKind::OpenParen {
        parser.advance()?;

        while parser.current_token_kind() != TokenKind::CloseParen {
            if !parameters.is_empty() {
                parser.expect(TokenKind::Comma)?;
            }

            let error = parser.unexpected_detailed("expected parameter name");
            parameters.push(parser.expect_error(TokenKind::Symbol, Some(error))?.lexeme);

            if !parser
                .current_token()
                .is_one_of_many(&[TokenKind::Comma, TokenKind::CloseParen])
            {
                return Err(parser.unexpected(&[TokenKind::Comma, TokenKind::CloseParen]));
            }
        }

        parser.expect(TokenKind::CloseParen)?;
    }

    let body = if parser.current_token_kind() == TokenKind::OpenCurly {
        parse_brace_block_expr(parser)?
    } else {
        parse_stmt(parser)?
    };

    Ok(Expr::Function(FnExpr {
        name,
        parameters,
        span: Span {
            start,
            end: parser.get_last_end(),
        },
        body: Box::new(body),
    }))
}
