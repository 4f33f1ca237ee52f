//! Parser implementation for building the Abstract Syntax Tree.
//!
//! The parser pulls tokens from a `TokenSource` one at a time and keeps a
//! single token of lookahead. Expressions are parsed Pratt style with NUD
//! handlers for operands and LED handlers for application, infix steps and
//! postfix invocation.
//!
//! It maintains lookup tables for:
//! - Statement handlers (assignments)
//! - NUD (null denotation) handlers for operands
//! - LED (left denotation) handlers for everything that extends an operand
//! - Binding powers for precedence

use std::{collections::HashMap, rc::Rc};

use crate::{
    ast::ast::Expr,
    errors::errors::{Error, ErrorImpl},
    lexer::{
        source::TokenSource,
        tokens::{Token, TokenKind},
    },
    Position,
};

use super::{
    lookups::{
        create_token_lookups, BPLookup, BindingPower, LEDHandler, LEDLookup, NUDHandler, NUDLookup,
        StmtHandler, StmtLookup,
    },
    stmt::parse_stmt,
};

/// How many expressions and statements may be open at once.
pub const MAX_NESTING_DEPTH: usize = 256;

/// The main parser structure that maintains parsing state.
pub struct Parser {
    /// Where tokens are pulled from
    tokens: TokenSource,
    /// The lookahead token
    current: Token,
    /// End of the most recently consumed token
    last_end: Position,
    /// Expressions and statements currently being parsed
    depth: usize,
    /// Lookup table for statement parsing handlers
    stmt_lookup: StmtLookup,
    /// Lookup table for null denotation (operand) handlers
    nud_lookup: NUDLookup,
    /// Lookup table for left denotation handlers
    led_lookup: LEDLookup,
    /// Lookup table for binding powers (precedence)
    binding_power_lookup: BPLookup,
}

impl Parser {
    /// Creates a new Parser and pulls the first token.
    pub fn new(mut tokens: TokenSource) -> Result<Self, Error> {
        let current = tokens.next_token()?;
        let last_end = Position::start(tokens.file());

        Ok(Parser {
            tokens,
            current,
            last_end,
            depth: 0,
            stmt_lookup: HashMap::new(),
            nud_lookup: HashMap::new(),
            led_lookup: HashMap::new(),
            binding_power_lookup: HashMap::new(),
        })
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.current
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current.kind
    }

    /// Enters one level of nesting, failing once `MAX_NESTING_DEPTH` is passed.
    pub fn descend(&mut self) -> Result<(), Error> {
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(self.unexpected_detailed("nesting too deep"));
        }
        self.depth += 1;

        Ok(())
    }

    pub fn ascend(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// Advances to the next token and returns the previous one.
    pub fn advance(&mut self) -> Result<Token, Error> {
        let next = self.tokens.next_token()?;
        let previous = std::mem::replace(&mut self.current, next);
        self.last_end = previous.span.end.clone();

        Ok(previous)
    }

    /// Expects a token of the specified kind, with optional custom error.
    pub fn expect_error(
        &mut self,
        expected_kind: TokenKind,
        error: Option<Error>,
    ) -> Result<Token, Error> {
        if self.current_token_kind() != expected_kind {
            match error {
                Some(error) => Err(error),
                None => Err(self.unexpected(&[expected_kind])),
            }
        } else {
            self.advance()
        }
    }

    /// Expects a token of the specified kind with default error message.
    pub fn expect(&mut self, expected_kind: TokenKind) -> Result<Token, Error> {
        self.expect_error(expected_kind, None)
    }

    /// Builds an error for the current token, listing what would have been accepted.
    pub fn unexpected(&self, expected: &[TokenKind]) -> Error {
        let mut expected = expected.to_vec();
        expected.sort();
        expected.dedup();

        let error = Error::new(
            ErrorImpl::UnexpectedToken {
                token: self.current.describe(),
                expected: expected.iter().map(|kind| kind.describe().to_string()).collect(),
            },
            self.get_position(),
        );
        log::debug!("syntax error: {}", error);

        error
    }

    /// Builds an error for the current token with a hand written explanation.
    pub fn unexpected_detailed(&self, message: &str) -> Error {
        Error::new(
            ErrorImpl::UnexpectedTokenDetailed {
                token: self.current.describe(),
                message: String::from(message),
            },
            self.get_position(),
        )
    }

    /// Checks if the current token can start an operand.
    pub fn at_operand(&self) -> bool {
        self.nud_lookup.contains_key(&self.current.kind)
    }

    /// Returns a reference to the statement lookup table.
    pub fn get_stmt_lookup(&self) -> &StmtLookup {
        &self.stmt_lookup
    }

    /// Returns a reference to the NUD (null denotation) lookup table.
    pub fn get_nud_lookup(&self) -> &NUDLookup {
        &self.nud_lookup
    }

    /// Returns a reference to the LED (left denotation) lookup table.
    pub fn get_led_lookup(&self) -> &LEDLookup {
        &self.led_lookup
    }

    /// Returns a reference to the binding power lookup table.
    pub fn get_bp_lookup(&self) -> &BPLookup {
        &self.binding_power_lookup
    }

    /// Registers a left denotation handler for a token.
    pub fn led(&mut self, kind: TokenKind, binding_power: BindingPower, led_fn: LEDHandler) {
        self.binding_power_lookup.insert(kind, binding_power);
        self.led_lookup.insert(kind, led_fn);
    }

    /// Registers a null denotation handler for a token.
    pub fn nud(&mut self, kind: TokenKind, nud_fn: NUDHandler) {
        self.nud_lookup.insert(kind, nud_fn);
    }

    /// Registers a statement handler for a token.
    pub fn stmt(&mut self, kind: TokenKind, stmt_fn: StmtHandler) {
        self.stmt_lookup.insert(kind, stmt_fn);
    }

    /// Returns the position of the current token.
    pub fn get_position(&self) -> Position {
        self.current.span.start.clone()
    }

    /// Returns the end of the last consumed token.
    pub fn get_last_end(&self) -> Position {
        self.last_end.clone()
    }

    pub fn file(&self) -> Rc<String> {
        self.tokens.file()
    }
}

/// Parses a whole program: a single expression followed by end of input.
///
/// This is the main entry point for parsing. It creates a parser instance,
/// initializes the lookup tables and stops at the first error.
pub fn parse(tokens: TokenSource) -> Result<Expr, Error> {
    let mut parser = Parser::new(tokens)?;
    create_token_lookups(&mut parser);

    let root = parse_stmt(&mut parser)?;

    // Anything with a LED could still have extended the program here.
    if parser.current_token_kind() != TokenKind::EOF {
        let mut expected = parser.get_led_lookup().keys().copied().collect::<Vec<_>>();
        expected.push(TokenKind::EOF);
        return Err(parser.unexpected(&expected));
    }

    log::debug!("parsed {} as {:?}", parser.file(), root.get_expr_type());
    Ok(root)
}
