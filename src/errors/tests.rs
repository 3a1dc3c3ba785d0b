//! Unit tests for error handling.
//!
//! This module contains tests for error types and error reporting.

use crate::errors::errors::{Error, ErrorImpl, ErrorStage, ErrorTip};
use crate::Position;

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::InvalidCharacter { character: '@' },
        Position::new(10, 2, 4),
    );

    assert_eq!(error.get_error_name(), "InvalidCharacter");
    assert_eq!(error.stage(), ErrorStage::Lexical);
}

#[test]
fn test_error_position() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            token: "x".to_string(),
            expected: "Semicolon".to_string(),
        },
        Position::new(42, 3, 7),
    );

    assert_eq!(error.get_position().offset, 42);
    assert_eq!(error.get_position().line, 3);
    assert_eq!(error.get_position().column, 7);
}

#[test]
fn test_error_stages() {
    let cases = [
        (ErrorImpl::UnterminatedString, ErrorStage::Lexical),
        (
            ErrorImpl::NumberParseError {
                token: "99999999999999999999".to_string(),
            },
            ErrorStage::Lexical,
        ),
        (
            ErrorImpl::UnexpectedToken {
                token: "end_if".to_string(),
                expected: "statement".to_string(),
            },
            ErrorStage::Syntax,
        ),
        (
            ErrorImpl::UndeclaredVariable {
                variable: "x".to_string(),
            },
            ErrorStage::Semantic,
        ),
        (
            ErrorImpl::DuplicateDeclaration {
                variable: "x".to_string(),
            },
            ErrorStage::Semantic,
        ),
        (
            ErrorImpl::InvalidAssignment {
                variable: "x".to_string(),
                received: "Boolean".to_string(),
            },
            ErrorStage::Semantic,
        ),
    ];

    for (error_impl, stage) in cases {
        assert_eq!(Error::new(error_impl, Position::start()).stage(), stage);
    }
}

#[test]
fn test_type_mismatch_error() {
    let error = Error::new(
        ErrorImpl::TypeMismatch {
            node: "BinaryOp `add`".to_string(),
            expected: "Integer".to_string(),
            received: "`Integer` and `Text`".to_string(),
        },
        Position::start(),
    );

    assert_eq!(error.get_error_name(), "TypeMismatch");
    assert_eq!(
        error.to_string(),
        "type mismatch in BinaryOp `add`: expected Integer, received `Integer` and `Text`"
    );
}

#[test]
fn test_error_display() {
    let error = Error::new(
        ErrorImpl::InvalidCharacter { character: '#' },
        Position::start(),
    );
    assert_eq!(error.to_string(), "invalid character: '#'");

    let error = Error::new(
        ErrorImpl::UndeclaredVariable {
            variable: "x".to_string(),
        },
        Position::start(),
    );
    assert_eq!(error.to_string(), "variable \"x\" not declared");
}

#[test]
fn test_error_tip_none() {
    let error = Error::new(
        ErrorImpl::InvalidCharacter { character: '@' },
        Position::start(),
    );

    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_error_tip_suggestion() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            token: "print".to_string(),
            expected: "Semicolon".to_string(),
        },
        Position::start(),
    );

    match error.get_tip() {
        ErrorTip::Suggestion(tip) => {
            assert_eq!(tip, "Unexpected token: `print`, expected Semicolon")
        }
        _ => panic!("Expected suggestion tip"),
    }
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(tip.to_string(), "Try this instead");

    let tip = ErrorTip::None;
    assert_eq!(tip.to_string(), "");
}

#[test]
fn test_error_stage_display() {
    assert_eq!(ErrorStage::Lexical.to_string(), "lexical error");
    assert_eq!(ErrorStage::Syntax.to_string(), "syntax error");
    assert_eq!(ErrorStage::Semantic.to_string(), "semantic error");
}
