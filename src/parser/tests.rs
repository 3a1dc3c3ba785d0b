//! Unit tests for the parser module.
//!
//! This module contains tests for parsing various language constructs including:
//! - Variable declarations and assignments
//! - Operator precedence and associativity
//! - Conditions and logical chains
//! - Control flow blocks
//! - Syntax errors

use crate::{
    ast::{
        ast::{Expr, Stmt},
        expressions::{BinaryOperator, ComparisonOperator, LogicalOperator},
    },
    errors::errors::{ErrorImpl, ErrorStage},
};

use super::parser::parse;

/// Value of the last assignment in `source`.
fn assigned_value(source: &str) -> Expr {
    let program = parse(source).unwrap();
    match program.body.last() {
        Some(Stmt::Assignment(assignment)) => assignment.value.clone(),
        other => panic!("expected assignment, found {:?}", other),
    }
}

fn number(expr: &Expr) -> i64 {
    match expr {
        Expr::Number(number) => number.value,
        other => panic!("expected number, found {:?}", other),
    }
}

fn expected_of(source: &str) -> (String, String) {
    let error = parse(source).unwrap_err();
    assert_eq!(error.stage(), ErrorStage::Syntax);
    match error.get_internal_error() {
        ErrorImpl::UnexpectedToken { token, expected } => (token.clone(), expected.clone()),
        other => panic!("expected syntax error, found {:?}", other),
    }
}

#[test]
fn test_parse_variable_declaration() {
    let program = parse("var x;").unwrap();

    assert_eq!(program.body.len(), 1);
    match &program.body[0] {
        Stmt::VarDecl(decl) => assert_eq!(decl.identifier, "x"),
        other => panic!("expected declaration, found {:?}", other),
    }
}

#[test]
fn test_parse_simple_program() {
    let program = parse("var x; x = 5; print(x);").unwrap();

    assert!(matches!(program.body[0], Stmt::VarDecl(_)));
    assert!(matches!(program.body[1], Stmt::Assignment(_)));
    assert!(matches!(program.body[2], Stmt::Print(_)));
}

#[test]
fn test_parse_empty_program() {
    assert!(parse("").unwrap().body.is_empty());
    assert!(parse("   \n ").unwrap().body.is_empty());
}

#[test]
fn test_parse_assignment_target_and_value() {
    let program = parse("var s; s = \"hi\";").unwrap();

    match &program.body[1] {
        Stmt::Assignment(assignment) => {
            assert_eq!(assignment.assignee.value, "s");
            assert!(matches!(&assignment.value, Expr::String(s) if s.value == "hi"));
        }
        other => panic!("expected assignment, found {:?}", other),
    }
}

#[test]
fn test_multiplication_binds_tighter_than_addition() {
    let value = assigned_value("var r; r = 5 add 3 mul 2;");

    match value {
        Expr::Binary(add) => {
            assert_eq!(add.operator, BinaryOperator::Add);
            assert_eq!(number(&add.left), 5);
            match *add.right {
                Expr::Binary(mul) => {
                    assert_eq!(mul.operator, BinaryOperator::Mul);
                    assert_eq!(number(&mul.left), 3);
                    assert_eq!(number(&mul.right), 2);
                }
                other => panic!("expected mul, found {:?}", other),
            }
        }
        other => panic!("expected add, found {:?}", other),
    }
}

#[test]
fn test_power_is_left_associative() {
    let value = assigned_value("var a; a = 2 pow 3 pow 2;");

    match value {
        Expr::Binary(outer) => {
            assert_eq!(outer.operator, BinaryOperator::Pow);
            assert_eq!(number(&outer.right), 2);
            match *outer.left {
                Expr::Binary(inner) => {
                    assert_eq!(inner.operator, BinaryOperator::Pow);
                    assert_eq!(number(&inner.left), 2);
                    assert_eq!(number(&inner.right), 3);
                }
                other => panic!("expected pow, found {:?}", other),
            }
        }
        other => panic!("expected pow, found {:?}", other),
    }
}

#[test]
fn test_subtraction_is_left_associative() {
    let value = assigned_value("var a; a = 10 sub 4 sub 3;");

    match value {
        Expr::Binary(outer) => {
            assert_eq!(outer.operator, BinaryOperator::Sub);
            assert_eq!(number(&outer.right), 3);
            assert!(matches!(*outer.left, Expr::Binary(ref inner) if inner.operator == BinaryOperator::Sub));
        }
        other => panic!("expected sub, found {:?}", other),
    }
}

#[test]
fn test_multiplication_binds_tighter_than_power() {
    // power := term ('pow' term)*, so `2 mul 3 pow 2` is `(2 mul 3) pow 2`
    let value = assigned_value("var a; a = 2 mul 3 pow 2;");

    match value {
        Expr::Binary(pow) => {
            assert_eq!(pow.operator, BinaryOperator::Pow);
            assert!(matches!(*pow.left, Expr::Binary(ref mul) if mul.operator == BinaryOperator::Mul));
            assert_eq!(number(&pow.right), 2);
        }
        other => panic!("expected pow, found {:?}", other),
    }
}

#[test]
fn test_concat_binds_tighter_than_addition() {
    let value = assigned_value("var a; a = x add y concat z;");

    match value {
        Expr::Binary(add) => {
            assert_eq!(add.operator, BinaryOperator::Add);
            assert!(matches!(*add.left, Expr::Symbol(ref s) if s.value == "x"));
            assert!(matches!(*add.right, Expr::Binary(ref c) if c.operator == BinaryOperator::Concat));
        }
        other => panic!("expected add, found {:?}", other),
    }
}

#[test]
fn test_parentheses_override_precedence() {
    let value = assigned_value("var a; a = (5 add 3) mul 2;");

    match value {
        Expr::Binary(mul) => {
            assert_eq!(mul.operator, BinaryOperator::Mul);
            assert!(matches!(*mul.left, Expr::Binary(ref add) if add.operator == BinaryOperator::Add));
            assert_eq!(number(&mul.right), 2);
        }
        other => panic!("expected mul, found {:?}", other),
    }
}

#[test]
fn test_parse_if_statement() {
    let program = parse("var x; if (x greater 1) then print(x); x = 0; end_if").unwrap();

    assert_eq!(program.body.len(), 2);
    match &program.body[1] {
        Stmt::If(if_stmt) => {
            assert_eq!(if_stmt.then_body.len(), 2);
            assert!(if_stmt.else_body.is_none());
            match &if_stmt.condition {
                Expr::Comparison(comparison) => {
                    assert_eq!(comparison.operator, ComparisonOperator::Greater)
                }
                other => panic!("expected comparison, found {:?}", other),
            }
        }
        other => panic!("expected if, found {:?}", other),
    }
}

#[test]
fn test_parse_while_statement() {
    let program = parse("var i; i = 0; while (i less 10) do i = i add 1; end_while print(i);").unwrap();

    assert_eq!(program.body.len(), 4);
    match &program.body[2] {
        Stmt::While(while_stmt) => {
            assert_eq!(while_stmt.body.len(), 1);
            assert!(matches!(while_stmt.condition, Expr::Comparison(_)));
        }
        other => panic!("expected while, found {:?}", other),
    }
}

#[test]
fn test_parse_nested_blocks() {
    let source = "var i; while (i less 3) do if (i equal 1) then print(i); end_if i = i add 1; end_while";
    let program = parse(source).unwrap();

    match &program.body[1] {
        Stmt::While(while_stmt) => {
            assert!(matches!(while_stmt.body[0], Stmt::If(_)));
            assert!(matches!(while_stmt.body[1], Stmt::Assignment(_)));
        }
        other => panic!("expected while, found {:?}", other),
    }
}

#[test]
fn test_parse_empty_block() {
    let program = parse("if (1 equal 1) then end_if").unwrap();

    assert!(matches!(&program.body[0], Stmt::If(s) if s.then_body.is_empty()));
}

#[test]
fn test_logical_chain_is_left_associative() {
    let program = parse("if (1 less 2 and 2 less 3 or 3 less 4) then end_if").unwrap();

    match &program.body[0] {
        Stmt::If(if_stmt) => match &if_stmt.condition {
            Expr::Logical(or) => {
                assert_eq!(or.operator, LogicalOperator::Or);
                assert!(matches!(*or.left, Expr::Logical(ref and) if and.operator == LogicalOperator::And));
                assert!(matches!(*or.right, Expr::Comparison(_)));
            }
            other => panic!("expected logical, found {:?}", other),
        },
        other => panic!("expected if, found {:?}", other),
    }
}

#[test]
fn test_bare_expression_condition_is_accepted() {
    let program = parse("var x; if (x add 1) then end_if").unwrap();

    assert!(matches!(&program.body[1], Stmt::If(s) if matches!(s.condition, Expr::Binary(_))));
}

#[test]
fn test_comparison_spans_arithmetic_operands() {
    let program = parse("while (1 add 2 greater_equal 3 mul 4) do end_while").unwrap();

    match &program.body[0] {
        Stmt::While(while_stmt) => match &while_stmt.condition {
            Expr::Comparison(comparison) => {
                assert_eq!(comparison.operator, ComparisonOperator::GreaterEqual);
                assert!(matches!(*comparison.left, Expr::Binary(_)));
                assert!(matches!(*comparison.right, Expr::Binary(_)));
            }
            other => panic!("expected comparison, found {:?}", other),
        },
        other => panic!("expected while, found {:?}", other),
    }
}

#[test]
fn test_missing_semicolon() {
    let (token, expected) = expected_of("var x x = 1;");

    assert_eq!(token, "x");
    assert_eq!(expected, "Semicolon");
}

#[test]
fn test_missing_semicolon_at_end_of_input() {
    let (token, expected) = expected_of("print(1)");

    assert_eq!(token, "EOF");
    assert_eq!(expected, "Semicolon");
}

#[test]
fn test_if_without_end_keyword() {
    let (token, expected) = expected_of("if (1 less 2) then print(1);");

    assert_eq!(token, "EOF");
    assert_eq!(expected, "EndIf");
}

#[test]
fn test_while_without_do() {
    let (token, expected) = expected_of("while (1 less 2) print(1); end_while");

    assert_eq!(token, "print");
    assert_eq!(expected, "Do");
}

#[test]
fn test_semicolon_after_end_if_is_rejected() {
    let (token, expected) = expected_of("if (1 less 2) then end_if;");

    assert_eq!(token, ";");
    assert_eq!(expected, "statement");
}

#[test]
fn test_comparison_outside_condition_is_rejected() {
    let (token, expected) = expected_of("var b; b = 1 less 2;");

    assert_eq!(token, "less");
    assert_eq!(expected, "Semicolon");
}

#[test]
fn test_chained_comparison_is_rejected() {
    let (token, expected) = expected_of("if (1 less 2 less 3) then end_if");

    assert_eq!(token, "less");
    assert_eq!(expected, "RParen");
}

#[test]
fn test_var_without_identifier() {
    let (token, expected) = expected_of("var 5;");

    assert_eq!(token, "5");
    assert_eq!(expected, "identifier during variable declaration");
}

#[test]
fn test_missing_operand() {
    let (token, expected) = expected_of("var x; x = 1 add;");

    assert_eq!(token, ";");
    assert_eq!(expected, "expression");
}

#[test]
fn test_unclosed_parenthesis() {
    let (_, expected) = expected_of("var x; x = (1 add 2;");

    assert_eq!(expected, "RParen");
}

#[test]
fn test_statement_cannot_start_with_number() {
    let (token, expected) = expected_of("5;");

    assert_eq!(token, "5");
    assert_eq!(expected, "statement");
}

#[test]
fn test_lexical_error_surfaces_through_parser() {
    let error = parse("var x; x = \"open").unwrap_err();

    assert_eq!(error.stage(), ErrorStage::Lexical);
    assert_eq!(error.get_internal_error(), &ErrorImpl::UnterminatedString);
}

#[test]
fn test_statement_spans() {
    let program = parse("var x;\nx = 1 add 2;").unwrap();

    let assignment = program.body[1].get_span();
    assert_eq!(assignment.start.line, 2);
    assert_eq!(assignment.start.column, 1);
    assert_eq!(assignment.end.column, 13);
}
