//! Unit tests for the lexer module.

use std::io::Cursor;

use super::{
    lexer::tokenize,
    source::TokenSource,
    tokens::{TokenKind, TokenValue},
};
use crate::errors::errors::ErrorImpl;

#[test]
fn test_tokenize_keywords() {
    let source = "let letrec fn".to_string();
    let tokens = tokenize(source, Some("test.jx".to_string())).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Let);
    assert_eq!(tokens[1].kind, TokenKind::LetRec);
    assert_eq!(tokens[2].kind, TokenKind::Fn);
    assert_eq!(tokens[3].kind, TokenKind::EOF);
    assert_eq!(tokens.len(), 4);
}

#[test]
fn test_keyword_prefixes_are_symbols() {
    let source = "letx fnord lets rec".to_string();
    let tokens = tokenize(source, None).unwrap();

    for token in &tokens[..4] {
        assert_eq!(token.kind, TokenKind::Symbol);
    }
    assert_eq!(tokens[0].value, TokenValue::Symbol("letx".to_string()));
    assert_eq!(tokens[1].value, TokenValue::Symbol("fnord".to_string()));
}

#[test]
fn test_tokenize_symbols() {
    let source = "foo bar2 CamelCase + <= `* x".to_string();
    let tokens = tokenize(source, None).unwrap();

    assert_eq!(tokens[0].value, TokenValue::Symbol("foo".to_string()));
    assert_eq!(tokens[1].value, TokenValue::Symbol("bar2".to_string()));
    assert_eq!(tokens[2].value, TokenValue::Symbol("CamelCase".to_string()));
    assert_eq!(tokens[3].value, TokenValue::Symbol("+".to_string()));
    assert_eq!(tokens[4].value, TokenValue::Symbol("<=".to_string()));
    assert_eq!(tokens[5].kind, TokenKind::Backtick);
    assert_eq!(tokens[6].value, TokenValue::Symbol("*".to_string()));
    assert_eq!(tokens[7].kind, TokenKind::Symbol);
    assert_eq!(tokens[8].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_integers() {
    for n in [0_i64, 7, 42, 1234567890, i64::MAX] {
        let tokens = tokenize(n.to_string(), None).unwrap();

        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].kind, TokenKind::Integer);
        assert_eq!(tokens[0].value, TokenValue::Integer(n));
        assert_eq!(tokens[0].span.end.offset as usize, n.to_string().len());
        assert_eq!(tokens[0].span.start.column, 1);
    }
}

#[test]
fn test_tokenize_decimals() {
    let source = "2.75 .5 0.0".to_string();
    let tokens = tokenize(source, None).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Decimal);
    assert_eq!(tokens[0].value, TokenValue::Decimal(2.75));
    assert_eq!(tokens[0].lexeme, "2.75");
    assert_eq!(tokens[1].value, TokenValue::Decimal(0.5));
    assert_eq!(tokens[2].value, TokenValue::Decimal(0.0));
}

#[test]
fn test_trailing_dot_is_rejected() {
    let error = tokenize("12.".to_string(), None).unwrap_err();

    assert_eq!(
        error.get_impl(),
        &ErrorImpl::UnrecognisedToken {
            token: ".".to_string()
        }
    );
    assert_eq!(error.get_position().column, 3);

    // Same rule mid-expression.
    assert!(tokenize("f 1. x".to_string(), None).is_err());
}

#[test]
fn test_integer_overflow() {
    let error = tokenize("99999999999999999999".to_string(), None).unwrap_err();

    assert!(matches!(error.get_impl(), ErrorImpl::NumberParseError { .. }));
}

#[test]
fn test_decimal_overflow() {
    let source = format!("f {}.5", "9".repeat(400));
    let error = tokenize(source.clone(), None).unwrap_err();

    assert_eq!(
        error.get_impl(),
        &ErrorImpl::NumberParseError {
            token: source[2..].to_string()
        }
    );
    assert_eq!(error.get_position().column, 3);

    // Large but finite values still lex.
    let tokens = tokenize(format!("{}.5", "9".repeat(300)), None).unwrap();
    assert_eq!(tokens[0].kind, TokenKind::Decimal);
}

#[test]
fn test_tokenize_strings() {
    for body in ["hello", "multiple words", "", "with `tick` and ; punctuation"] {
        for delimiter in ['"', '\''] {
            let source = format!("{delimiter}{body}{delimiter}");
            let tokens = tokenize(source.clone(), None).unwrap();

            assert_eq!(tokens.len(), 2);
            assert_eq!(tokens[0].kind, TokenKind::String);
            assert_eq!(tokens[0].value, TokenValue::String(body.to_string()));
            assert_eq!(tokens[0].lexeme, source);
        }
    }
}

#[test]
fn test_strings_hold_the_other_delimiter() {
    let tokens = tokenize(r#""it's" 'say "hi"'"#.to_string(), None).unwrap();

    assert_eq!(tokens[0].value, TokenValue::String("it's".to_string()));
    assert_eq!(tokens[1].value, TokenValue::String("say \"hi\"".to_string()));
}

#[test]
fn test_no_escape_processing() {
    let tokens = tokenize(r#""a\nb""#.to_string(), None).unwrap();

    assert_eq!(tokens[0].value, TokenValue::String("a\\nb".to_string()));
}

#[test]
fn test_unterminated_string() {
    let error = tokenize("f 'open".to_string(), None).unwrap_err();

    assert_eq!(
        error.get_impl(),
        &ErrorImpl::UnterminatedString { delimiter: '\'' }
    );
    assert_eq!(error.get_position().column, 3);
}

#[test]
fn test_tokenize_punctuation() {
    let source = "( ) { } ` ; , !".to_string();
    let tokens = tokenize(source, None).unwrap();
    let kinds = tokens.iter().map(|t| t.kind).collect::<Vec<_>>();

    assert_eq!(
        kinds,
        vec![
            TokenKind::OpenParen,
            TokenKind::CloseParen,
            TokenKind::OpenCurly,
            TokenKind::CloseCurly,
            TokenKind::Backtick,
            TokenKind::Semicolon,
            TokenKind::Comma,
            TokenKind::Bang,
            TokenKind::EOF,
        ]
    );
    assert!(tokens.iter().all(|t| t.value == TokenValue::None));
}

#[test]
fn test_bang_never_joins_an_operator() {
    let tokens = tokenize("x!=y".to_string(), None).unwrap();

    assert_eq!(tokens[1].kind, TokenKind::Bang);
    assert_eq!(tokens[2].value, TokenValue::Symbol("=".to_string()));
}

#[test]
fn test_whitespace_only_input() {
    for source in ["", "   ", "\n\t  \r\n", "# just a comment\n"] {
        let tokens = tokenize(source.to_string(), None).unwrap();

        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::EOF);
    }
}

#[test]
fn test_comments_are_skipped() {
    let tokens = tokenize("f # call f\n x".to_string(), None).unwrap();

    assert_eq!(tokens.len(), 3);
    assert_eq!(tokens[1].value, TokenValue::Symbol("x".to_string()));
}

#[test]
fn test_locations() {
    let source = "let x\n  {y}".to_string();
    let tokens = tokenize(source, Some("loc.jx".to_string())).unwrap();

    assert_eq!((tokens[0].span.start.line, tokens[0].span.start.column), (1, 1));
    assert_eq!(tokens[0].span.end.offset - tokens[0].span.start.offset, 3);
    assert_eq!((tokens[1].span.start.line, tokens[1].span.start.column), (1, 5));
    assert_eq!((tokens[2].span.start.line, tokens[2].span.start.column), (2, 3));
    assert_eq!((tokens[3].span.start.line, tokens[3].span.start.column), (2, 4));
    assert_eq!(tokens[3].span.start.offset, 9);
    assert_eq!(*tokens[3].span.start.file, "loc.jx");
}

#[test]
fn test_columns_count_characters() {
    let tokens = tokenize("'héllo' x".to_string(), None).unwrap();

    assert_eq!(tokens[1].span.start.column, 9);
}

#[test]
fn test_unrecognised_character() {
    let error = tokenize("f x\n  [y]".to_string(), Some("bad.jx".to_string())).unwrap_err();

    assert_eq!(
        error.get_impl(),
        &ErrorImpl::UnrecognisedToken {
            token: "[".to_string()
        }
    );
    assert_eq!(error.get_position().line, 2);
    assert_eq!(error.get_position().column, 3);
    assert_eq!(*error.get_position().file, "bad.jx");
}

#[test]
fn test_token_source_from_reader() {
    let mut source = TokenSource::from_reader(Cursor::new("f 1"), Some("stream".to_string())).unwrap();

    assert_eq!(source.next_token().unwrap().kind, TokenKind::Symbol);
    assert_eq!(source.next_token().unwrap().kind, TokenKind::Integer);
    assert_eq!(source.next_token().unwrap().kind, TokenKind::EOF);
    // Pulling past the end keeps yielding EOF.
    assert_eq!(source.next_token().unwrap().kind, TokenKind::EOF);
    assert_eq!(*source.file(), "stream");
}

#[test]
fn test_token_source_default_label() {
    let source = TokenSource::from_string(String::new(), None);

    assert_eq!(*source.file(), crate::DEFAULT_SOURCE_LABEL);
}
