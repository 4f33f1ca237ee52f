//! Integration tests for the whole front end.
//!
//! Source text goes through the token source, the lexer and the parser; the
//! resulting tree is rendered back to canonical text and parsed again.

use std::io::Cursor;

use juxt::{
    ast::ast::{Expr, ExprType},
    errors::errors::ErrorKind,
    lexer::{lexer::tokenize, source::TokenSource, tokens::TokenKind},
    parse_reader, parse_source,
    parser::parser::parse,
    render_error,
};

const PROGRAMS: &[&str] = &[
    "x",
    "42",
    "0.125",
    "'single' `++ \"double\"",
    "f x y!",
    "f x `* y",
    "f x! `* y",
    "2 `+ 3",
    "(f `g) `h",
    "a `f b c `g d e `h",
    "f (g x) (h y z)! w",
    "(g x) `f a",
    "a `(b `c) d",
    "x!!",
    "(f x)!",
    "{ let x 2 ; let y 3 ; x }",
    "{ letrec fact fn (n) n `* (fact (n `- 1)); fact 5 }",
    "(a; b; c)",
    "(a;)",
    "()",
    "{}",
    "{ {}; (); ({ a }) }",
    "fn {x}",
    "fn add (a, b) a `+ b",
    "fn (x) x y",
    "fn () {x} y",
    "fn () (a;)",
    "map fn (x) {x `* 2} xs",
    "f (fn (x) x) y",
    "let a let b 1",
    "f (let x 1) x",
    "{ let show fn (v) print v; show! }",
];

fn parse_str(source: &str) -> Expr {
    parse_source(source.to_string(), Some("it.jx".to_string()))
        .unwrap_or_else(|err| panic!("failed to parse {:?}: {}", source, err))
}

#[test]
fn test_round_trip_preserves_structure() {
    for source in PROGRAMS {
        let ast = parse_str(source);
        let rendered = ast.to_string();
        let reparsed = parse_str(&rendered);

        assert_eq!(ast, reparsed, "{:?} rendered as {:?}", source, rendered);
        // Canonical form is a fixed point.
        assert_eq!(reparsed.to_string(), rendered);
    }
}

#[test]
fn test_formatting_does_not_matter() {
    let compact = parse_str("{let x 2;f x `+ 1!}");
    let spaced = parse_str("{\n  let x 2 ;\n  # comment\n  f x\n    `+ 1 !\n}");

    assert_eq!(compact, spaced);
}

#[test]
fn test_reader_and_string_agree() {
    let source = "{ let x 2; f x `+ 3 }";

    let from_reader = parse_reader(Cursor::new(source), Some("it.jx".to_string())).unwrap();
    let from_string = parse_str(source);

    assert_eq!(from_reader, from_string);
}

#[test]
fn test_token_source_feeds_parser() {
    let tokens = TokenSource::from_string("f x y!".to_string(), None);
    let ast = parse(tokens).unwrap();

    assert_eq!(ast.get_expr_type(), ExprType::Call);
    assert_eq!(ast.to_string(), "f x y!");
}

#[test]
fn test_whitespace_only_input_has_no_tokens() {
    let tokens = tokenize(" \n\t ".to_string(), None).unwrap();

    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::EOF);
}

#[test]
fn test_errors_are_located_and_rendered() {
    let source = "{ let x 2;\n  f x `+ 1. }";
    let error = parse_source(source.to_string(), Some("bad.jx".to_string())).unwrap_err();

    assert_eq!(error.kind(), ErrorKind::Lexical);
    assert_eq!(error.get_position().line, 2);
    assert_eq!(error.get_position().column, 11);

    let rendered = render_error(&error, source);
    assert!(rendered.starts_with("Error: UnrecognisedToken\n-> bad.jx:2:11\n"));
    assert!(rendered.contains("2 | f x `+ 1. }"));
}

#[test]
fn test_syntax_error_stops_the_parse() {
    let error = parse_source("{ a; b".to_string(), Some("bad.jx".to_string())).unwrap_err();

    assert_eq!(error.kind(), ErrorKind::Syntax);
    assert!(render_error(&error, "{ a; b").contains("end of input"));
}
