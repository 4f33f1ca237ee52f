//! Utility macros for the front end.
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_DEFAULT_HANDLER!` - Creates a default lexer handler for punctuation
//!
//! These macros reduce boilerplate in the lexer implementation.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$lexeme` - The raw matched text
/// * `$value` - The parsed TokenValue
/// * `$span` - The source span
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Integer, "42".to_string(), TokenValue::Integer(42), span);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $lexeme:expr, $value:expr, $span:expr) => {
        Token {
            kind: $kind,
            lexeme: $lexeme,
            value: $value,
            span: $span,
        }
    };
}

/// Creates a default lexer handler for a fixed punctuation form.
///
/// The generated handler emits a token of the given kind with no value and
/// moves the cursor past the matched text.
///
/// # Example
///
/// ```ignore
/// RegexPattern {
///     regex: Regex::new("^;").unwrap(),
///     handler: MK_DEFAULT_HANDLER!(TokenKind::Semicolon),
/// }
/// ```
#[macro_export]
macro_rules! MK_DEFAULT_HANDLER {
    ($kind:expr) => {
        |lexer: &mut Lexer, matched: &str| -> Result<Option<Token>, Error> {
            Ok(Some(lexer.emit($kind, matched, TokenValue::None)))
        }
    };
}
