//! Lexical analysis module.
//!
//! This module contains the lexer (tokenizer) that converts VLS source text
//! into a stream of tokens for parsing. It handles:
//!
//! - Tokenization of source code using anchored regex patterns
//! - Recognition of keywords, identifiers, numbers and strings
//! - Line and column tracking for error reporting
//! - Whitespace skipping
//!
//! The parser pulls tokens one at a time through `Lexer::next_token`;
//! `tokenize` collects the whole stream for tooling.

pub mod lexer;
pub mod tokens;
