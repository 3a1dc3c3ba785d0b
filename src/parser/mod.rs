//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the parser that transforms the token stream into a
//! `Program`. It pulls tokens lazily from its own lexer and handles:
//!
//! - Statement parsing (declarations, assignments, print, if, while)
//! - Arithmetic expressions with a binding power per operator tier
//! - Conditions and logical chains for `if` and `while`
//!
//! The parser fails fast: the first unexpected token is returned as an
//! error and nothing after it is parsed.

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;

#[cfg(test)]
mod tests;
