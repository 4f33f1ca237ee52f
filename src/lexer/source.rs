//! Token source adapter.
//!
//! Wraps a character stream for the parser: the `SourceCursor` counts lines
//! and columns from the start of input and stamps every position with the
//! source label, and `TokenSource` pulls tokens out of the lexer one at a
//! time.

use std::{io::Read, rc::Rc};

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position, DEFAULT_SOURCE_LABEL,
};

use super::{
    lexer::Lexer,
    tokens::{Token, TokenKind},
};

/// Read position inside a fully buffered source text.
#[derive(Debug, Clone)]
pub struct SourceCursor {
    text: String,
    offset: usize,
    line: u32,
    column: u32,
    file: Rc<String>,
}

impl SourceCursor {
    pub fn new(text: String, file: Rc<String>) -> Self {
        SourceCursor {
            text,
            offset: 0,
            line: 1,
            column: 1,
            file,
        }
    }

    pub fn remainder(&self) -> &str {
        &self.text[self.offset..]
    }

    pub fn at_eof(&self) -> bool {
        self.offset >= self.text.len()
    }

    /// Character under the cursor, if any.
    pub fn at(&self) -> Option<char> {
        self.remainder().chars().next()
    }

    pub fn position(&self) -> Position {
        Position {
            offset: self.offset as u32,
            line: self.line,
            column: self.column,
            file: Rc::clone(&self.file),
        }
    }

    /// Moves past `text`, which must be a prefix of the remainder.
    pub fn advance(&mut self, text: &str) {
        debug_assert!(self.remainder().starts_with(text));

        for ch in text.chars() {
            if ch == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
        self.offset += text.len();
    }
}

/// Pull-based token provider used by the parser.
///
/// Once end of input is reached every further pull yields another `EOF`
/// token.
pub struct TokenSource {
    lexer: Lexer,
    finished: bool,
}

impl TokenSource {
    pub fn from_string(source: String, file: Option<String>) -> Self {
        let file_name = Rc::new(file.unwrap_or_else(|| String::from(DEFAULT_SOURCE_LABEL)));

        TokenSource {
            lexer: Lexer::new(SourceCursor::new(source, file_name)),
            finished: false,
        }
    }

    /// Reads the whole stream before lexing; blocking on the reader is
    /// expected.
    pub fn from_reader<R: Read>(mut reader: R, file: Option<String>) -> Result<Self, Error> {
        let mut source = String::new();

        if let Err(err) = reader.read_to_string(&mut source) {
            let file_name = Rc::new(file.unwrap_or_else(|| String::from(DEFAULT_SOURCE_LABEL)));
            return Err(Error::new(
                ErrorImpl::Io {
                    message: err.to_string(),
                },
                Position::start(file_name),
            ));
        }

        Ok(TokenSource::from_string(source, file))
    }

    pub fn file(&self) -> Rc<String> {
        self.lexer.file()
    }

    pub fn next_token(&mut self) -> Result<Token, Error> {
        let token = self.lexer.next_token()?;
        log::trace!("token {}", token);

        Ok(token)
    }
}

impl Iterator for TokenSource {
    type Item = Result<Token, Error>;

    /// Yields every token up to and including the first `EOF`, or the first
    /// error.
    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let token = self.next_token();
        match &token {
            Ok(token) if token.kind != TokenKind::EOF => {}
            _ => self.finished = true,
        }

        Some(token)
    }
}
