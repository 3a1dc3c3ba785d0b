//! Semantic analysis module.
//!
//! This module walks the AST once, in program order, and enforces the
//! language's static rules:
//!
//! - Variables are declared before use and never declared twice
//! - Arithmetic works on Integers, `concat` on Text
//! - Comparisons take Integers, logical operators take Booleans
//! - `if` and `while` conditions are Boolean
//!
//! All declarations live in one flat `SymbolTable`. An assignment re-types
//! its target to the type of the assigned value.

pub mod analyzer;
pub mod symbol_table;
