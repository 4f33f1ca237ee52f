#![allow(clippy::module_inception)]

use std::{fmt::Display, io::Read, rc::Rc};

use crate::{
    ast::ast::Expr,
    errors::errors::{Error, ErrorTip},
    lexer::source::TokenSource,
};

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

extern crate regex;

/// Label used for sources that were not read from a named file.
pub const DEFAULT_SOURCE_LABEL: &str = "<input>";

/// A point in the source text.
///
/// `offset` is a byte offset, `line` and `column` are 1-based and count
/// characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    pub offset: u32,
    pub line: u32,
    pub column: u32,
    pub file: Rc<String>,
}

impl Position {
    pub fn start(file: Rc<String>) -> Self {
        Position {
            offset: 0,
            line: 1,
            column: 1,
            file,
        }
    }

    #[cfg(test)]
    pub fn null() -> Self {
        Position::start(Rc::new(String::from("<null>")))
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}:{}", self.file, self.line, self.column)
    }
}

/// Source range covered by a token or a node.
///
/// Spans never take part in tree equality: two spans always compare equal,
/// so ASTs built from differently formatted sources compare by structure.
#[derive(Debug, Clone)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

impl Span {
    /// Span from the start of `self` to the end of `other`.
    pub fn to(&self, other: &Span) -> Span {
        Span {
            start: self.start.clone(),
            end: other.end.clone(),
        }
    }
}

impl PartialEq for Span {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

/// Lexes and parses an in-memory program.
pub fn parse_source(source: String, file: Option<String>) -> Result<Expr, Error> {
    parser::parser::parse(TokenSource::from_string(source, file))
}

/// Lexes and parses a program read from `reader`.
pub fn parse_reader<R: Read>(reader: R, file: Option<String>) -> Result<Expr, Error> {
    parser::parser::parse(TokenSource::from_reader(reader, file)?)
}

/// Returns the 1-based line `line` of `source`, without its line terminator.
pub fn get_line(source: &str, line: u32) -> Option<&str> {
    source
        .split('\n')
        .nth(line.checked_sub(1)? as usize)
        .map(|text| text.strip_suffix('\r').unwrap_or(text))
}

pub fn render_error(error: &Error, source: &str) -> String {
    /*
        Error: UnexpectedToken (Unexpected token: `)`, expected one of ...)
        -> main.jx:2:9
          |
        2 | let a #
          | ------^
    */

    let position = error.get_position();
    let mut output = String::new();

    if let ErrorTip::None = error.get_tip() {
        output.push_str(&format!("Error: {}\n", error.get_error_name()));
    } else {
        output.push_str(&format!(
            "Error: {} ({})\n",
            error.get_error_name(),
            error.get_tip()
        ));
    }
    output.push_str(&format!("-> {}\n", position));

    let Some(line_text) = get_line(source, position.line) else {
        return output;
    };

    let line_string = position.line.to_string();
    let padding = line_string.len() + 2;

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(line_text);
    let arrows = (position.column as usize).saturating_sub(removed_whitespace).max(1);

    output.push_str(&format!("{:>padding$}\n", "|"));
    output.push_str(&format!("{} | {}\n", line_string, line_text_removed.trim_end()));
    output.push_str(&format!("{:>padding$} {:->arrows$}\n", "|", "^"));

    output
}

fn remove_starting_whitespace(string: &str) -> (&str, usize) {
    let start = string.chars().take_while(|c| *c == ' ' || *c == '\t').count();

    (&string[start..], start)
}
