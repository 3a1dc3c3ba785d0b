use std::fmt::Display;

use thiserror::Error;

use crate::Position;

#[derive(Error, Debug, Clone, PartialEq)]
#[error("{internal_error}")]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_internal_error(&self) -> &ErrorImpl {
        &self.internal_error
    }

    /// The pipeline stage that raised this error.
    pub fn stage(&self) -> ErrorStage {
        match &self.internal_error {
            ErrorImpl::InvalidCharacter { .. }
            | ErrorImpl::UnterminatedString
            | ErrorImpl::NumberParseError { .. } => ErrorStage::Lexical,
            ErrorImpl::UnexpectedToken { .. } => ErrorStage::Syntax,
            ErrorImpl::UndeclaredVariable { .. }
            | ErrorImpl::DuplicateDeclaration { .. }
            | ErrorImpl::InvalidAssignment { .. }
            | ErrorImpl::TypeMismatch { .. } => ErrorStage::Semantic,
        }
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::InvalidCharacter { .. } => "InvalidCharacter",
            ErrorImpl::UnterminatedString => "UnterminatedString",
            ErrorImpl::NumberParseError { .. } => "NumberParseError",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::UndeclaredVariable { .. } => "UndeclaredVariable",
            ErrorImpl::DuplicateDeclaration { .. } => "DuplicateDeclaration",
            ErrorImpl::InvalidAssignment { .. } => "InvalidAssignment",
            ErrorImpl::TypeMismatch { .. } => "TypeMismatch",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::InvalidCharacter { .. } => ErrorTip::None,
            ErrorImpl::UnterminatedString => ErrorTip::Suggestion(String::from(
                "String literal is never closed, did you miss a `\"`?",
            )),
            ErrorImpl::NumberParseError { token } => ErrorTip::Suggestion(format!(
                "Invalid number: `{}`, is it above the integer limit?",
                token
            )),
            ErrorImpl::UnexpectedToken { token, expected } => ErrorTip::Suggestion(format!(
                "Unexpected token: `{}`, expected {}",
                token, expected
            )),
            ErrorImpl::UndeclaredVariable { variable } => ErrorTip::Suggestion(format!(
                "Variable `{}` not declared, add `var {}` before using it",
                variable, variable
            )),
            ErrorImpl::DuplicateDeclaration { variable } => {
                ErrorTip::Suggestion(format!("Variable `{}` already declared", variable))
            }
            ErrorImpl::InvalidAssignment { variable, received } => ErrorTip::Suggestion(format!(
                "Cannot assign a value of type `{}` to `{}`",
                received, variable
            )),
            ErrorImpl::TypeMismatch {
                node,
                expected,
                received,
            } => ErrorTip::Suggestion(format!(
                "{} expects `{}`, received {}",
                node, expected, received
            )),
        }
    }
}

/// Which stage of the pipeline failed.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ErrorStage {
    Lexical,
    Syntax,
    Semantic,
}

impl Display for ErrorStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorStage::Lexical => write!(f, "lexical error"),
            ErrorStage::Syntax => write!(f, "syntax error"),
            ErrorStage::Semantic => write!(f, "semantic error"),
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("invalid character: {character:?}")]
    InvalidCharacter { character: char },
    #[error("unterminated string literal")]
    UnterminatedString,
    #[error("error parsing number: {token:?}")]
    NumberParseError { token: String },
    #[error("unexpected token {token:?}, expected {expected}")]
    UnexpectedToken { token: String, expected: String },
    #[error("variable {variable:?} not declared")]
    UndeclaredVariable { variable: String },
    #[error("variable {variable:?} already declared")]
    DuplicateDeclaration { variable: String },
    #[error("cannot assign a value of type {received} to variable {variable:?}")]
    InvalidAssignment { variable: String, received: String },
    #[error("type mismatch in {node}: expected {expected}, received {received}")]
    TypeMismatch {
        node: String,
        expected: String,
        received: String,
    },
}
