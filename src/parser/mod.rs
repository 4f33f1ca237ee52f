//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! Transforms the token stream into a single root expression. Precedence,
//! tightest first:
//!
//! - operands: literals, symbols, `fn` definitions, `{}` and `()` blocks
//! - postfix `!` (invoke with no arguments)
//! - infix steps: `` seed `op extra... ``
//! - juxtaposition: `callee arg...`
//! - assignments: `let name value`, `letrec name value`
//!
//! The parser uses NUD (null denotation) and LED (left denotation) functions
//! with binding powers for precedence handling.

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;
