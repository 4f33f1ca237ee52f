//! Lexical analysis.
//!
//! Converts source text into located tokens:
//!
//! - Tokenization of source code using anchored regex patterns
//! - Recognition of keywords, symbols, numbers and strings
//! - Line/column tracking and source labels for error reporting
//! - Whitespace and `#` comments are skipped

pub mod lexer;
pub mod source;
pub mod tokens;

#[cfg(test)]
mod tests;
