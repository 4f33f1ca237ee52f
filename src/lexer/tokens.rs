use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Span;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("let", TokenKind::Let);
        map.insert("letrec", TokenKind::LetRec);
        map.insert("fn", TokenKind::Fn);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, PartialOrd, Ord)]
pub enum TokenKind {
    EOF,
    Integer,
    Decimal,
    String,
    Symbol,

    OpenCurly,
    CloseCurly,
    OpenParen,
    CloseParen,

    Backtick,
    Semicolon,
    Comma,
    Bang,

    // Reserved
    Let,
    LetRec,
    Fn,
}

impl TokenKind {
    /// How the kind is spelled in source, for diagnostics.
    pub fn describe(&self) -> &'static str {
        match self {
            TokenKind::EOF => "end of input",
            TokenKind::Integer => "integer",
            TokenKind::Decimal => "decimal",
            TokenKind::String => "string",
            TokenKind::Symbol => "symbol",
            TokenKind::OpenCurly => "`{`",
            TokenKind::CloseCurly => "`}`",
            TokenKind::OpenParen => "`(`",
            TokenKind::CloseParen => "`)`",
            TokenKind::Backtick => "`` ` ``",
            TokenKind::Semicolon => "`;`",
            TokenKind::Comma => "`,`",
            TokenKind::Bang => "`!`",
            TokenKind::Let => "`let`",
            TokenKind::LetRec => "`letrec`",
            TokenKind::Fn => "`fn`",
        }
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Parsed payload of a token. Punctuation and keywords carry none.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenValue {
    None,
    Integer(i64),
    Decimal(f64),
    String(String),
    Symbol(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    pub value: TokenValue,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.value {
            TokenValue::None => write!(f, "{} {}", self.span.start, self.kind),
            TokenValue::Integer(value) => write!(f, "{} {} ({})", self.span.start, self.kind, value),
            TokenValue::Decimal(value) => write!(f, "{} {} ({})", self.span.start, self.kind, value),
            TokenValue::String(value) | TokenValue::Symbol(value) => {
                write!(f, "{} {} ({:?})", self.span.start, self.kind, value)
            }
        }
    }
}

impl Token {
    pub fn is_one_of_many(&self, kinds: &[TokenKind]) -> bool {
        kinds.contains(&self.kind)
    }

    /// Text used when reporting this token as unexpected.
    pub fn describe(&self) -> String {
        if self.kind == TokenKind::EOF {
            String::from(self.kind.describe())
        } else {
            self.lexeme.clone()
        }
    }
}
