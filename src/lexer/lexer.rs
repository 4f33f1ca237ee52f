use std::rc::Rc;

use lazy_static::lazy_static;
use regex::Regex;

use crate::{
    errors::errors::{Error, ErrorImpl},
    Span, MK_DEFAULT_HANDLER, MK_TOKEN,
};

use super::{
    source::{SourceCursor, TokenSource},
    tokens::{Token, TokenKind, TokenValue, RESERVED_LOOKUP},
};

pub type RegexHandler = fn(&mut Lexer, &str) -> Result<Option<Token>, Error>;

#[derive(Clone)]
pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

lazy_static! {
    // Tried in order, first match wins. Every pattern is anchored at the cursor.
    static ref PATTERNS: Vec<RegexPattern> = vec![
        RegexPattern { regex: Regex::new(r"^\s+").unwrap(), handler: skip_handler },
        RegexPattern { regex: Regex::new(r"^#[^\n]*").unwrap(), handler: skip_handler },
        RegexPattern { regex: Regex::new(r"^[0-9]*\.[0-9]+").unwrap(), handler: decimal_handler },
        RegexPattern { regex: Regex::new(r"^[0-9]+").unwrap(), handler: integer_handler },
        RegexPattern { regex: Regex::new(r#"^"[^"]*""#).unwrap(), handler: string_handler },
        RegexPattern { regex: Regex::new(r"^'[^']*'").unwrap(), handler: string_handler },
        RegexPattern { regex: Regex::new(r#"^["']"#).unwrap(), handler: unterminated_string_handler },
        RegexPattern { regex: Regex::new(r"^\{").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::OpenCurly) },
        RegexPattern { regex: Regex::new(r"^\}").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::CloseCurly) },
        RegexPattern { regex: Regex::new(r"^\(").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::OpenParen) },
        RegexPattern { regex: Regex::new(r"^\)").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::CloseParen) },
        RegexPattern { regex: Regex::new(r"^`").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Backtick) },
        RegexPattern { regex: Regex::new(r"^;").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Semicolon) },
        RegexPattern { regex: Regex::new(r"^,").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Comma) },
        RegexPattern { regex: Regex::new(r"^!").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Bang) },
        RegexPattern { regex: Regex::new(r"^[a-zA-Z][a-zA-Z0-9]*").unwrap(), handler: symbol_handler },
        RegexPattern { regex: Regex::new(r"^[-+*/%<>=&|^~?:@$\\]+").unwrap(), handler: symbol_handler },
    ];
}

/// Regex driven scanner over a `SourceCursor`.
///
/// Produces one token per call and skips whitespace and comments without
/// emitting anything for them.
#[derive(Clone)]
pub struct Lexer {
    cursor: SourceCursor,
}

impl Lexer {
    pub fn new(cursor: SourceCursor) -> Lexer {
        Lexer { cursor }
    }

    pub fn file(&self) -> Rc<String> {
        Rc::clone(&self.cursor.position().file)
    }

    /// Builds a token for `matched` at the cursor and moves past it.
    pub fn emit(&mut self, kind: TokenKind, matched: &str, value: TokenValue) -> Token {
        let start = self.cursor.position();
        self.cursor.advance(matched);

        MK_TOKEN!(
            kind,
            String::from(matched),
            value,
            Span {
                start,
                end: self.cursor.position()
            }
        )
    }

    pub fn skip(&mut self, matched: &str) {
        self.cursor.advance(matched);
    }

    pub fn next_token(&mut self) -> Result<Token, Error> {
        while !self.cursor.at_eof() {
            let remainder = self.cursor.remainder();
            let found = PATTERNS.iter().find_map(|pattern| {
                pattern
                    .regex
                    .find(remainder)
                    .map(|m| (pattern.handler, String::from(m.as_str())))
            });

            let Some((handler, matched)) = found else {
                let token = self.cursor.at().map(String::from).unwrap_or_default();
                return Err(Error::new(
                    ErrorImpl::UnrecognisedToken { token },
                    self.cursor.position(),
                ));
            };

            if let Some(token) = handler(self, &matched)? {
                return Ok(token);
            }
        }

        Ok(self.emit(TokenKind::EOF, "", TokenValue::None))
    }
}

fn skip_handler(lexer: &mut Lexer, matched: &str) -> Result<Option<Token>, Error> {
    lexer.skip(matched);
    Ok(None)
}

fn integer_handler(lexer: &mut Lexer, matched: &str) -> Result<Option<Token>, Error> {
    let Ok(value) = matched.parse::<i64>() else {
        return Err(Error::new(
            ErrorImpl::NumberParseError {
                token: String::from(matched),
            },
            lexer.cursor.position(),
        ));
    };

    Ok(Some(lexer.emit(TokenKind::Integer, matched, TokenValue::Integer(value))))
}

fn decimal_handler(lexer: &mut Lexer, matched: &str) -> Result<Option<Token>, Error> {
    // Out of range decimals parse to infinity rather than failing.
    let Some(value) = matched.parse::<f64>().ok().filter(|value| value.is_finite()) else {
        return Err(Error::new(
            ErrorImpl::NumberParseError {
                token: String::from(matched),
            },
            lexer.cursor.position(),
        ));
    };

    Ok(Some(lexer.emit(TokenKind::Decimal, matched, TokenValue::Decimal(value))))
}

// No escape sequences: the value is the raw text between the delimiters.
fn string_handler(lexer: &mut Lexer, matched: &str) -> Result<Option<Token>, Error> {
    let value = String::from(&matched[1..matched.len() - 1]);

    Ok(Some(lexer.emit(TokenKind::String, matched, TokenValue::String(value))))
}

fn unterminated_string_handler(lexer: &mut Lexer, matched: &str) -> Result<Option<Token>, Error> {
    Err(Error::new(
        ErrorImpl::UnterminatedString {
            delimiter: matched.chars().next().unwrap_or('"'),
        },
        lexer.cursor.position(),
    ))
}

fn symbol_handler(lexer: &mut Lexer, matched: &str) -> Result<Option<Token>, Error> {
    if let Some(kind) = RESERVED_LOOKUP.get(matched) {
        return Ok(Some(lexer.emit(*kind, matched, TokenValue::None)));
    }

    Ok(Some(lexer.emit(
        TokenKind::Symbol,
        matched,
        TokenValue::Symbol(String::from(matched)),
    )))
}

/// Lexes a whole source into a token vector ending with `EOF`.
pub fn tokenize(source: String, file: Option<String>) -> Result<Vec<Token>, Error> {
    TokenSource::from_string(source, file).collect()
}
