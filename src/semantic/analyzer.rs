use tracing::{debug, trace};

use crate::{
    ast::{
        ast::{Expr, Program, Stmt},
        expressions::{BinaryExpr, BinaryOperator},
        statements::AssignmentStmt,
        types::Type,
    },
    errors::errors::{Error, ErrorImpl},
    Position,
};

use super::symbol_table::SymbolTable;

/// Single-pass type checker over a `Program`.
#[derive(Debug, Default)]
pub struct SemanticAnalyzer {
    symbol_table: SymbolTable,
}

impl SemanticAnalyzer {
    pub fn new() -> Self {
        SemanticAnalyzer {
            symbol_table: SymbolTable::new(),
        }
    }

    /// Symbols as recorded by the last run.
    pub fn symbol_table(&self) -> &SymbolTable {
        &self.symbol_table
    }

    /// Checks every statement in program order, stopping at the first error.
    ///
    /// Each run starts from an empty symbol table, so analyzing the same
    /// program twice gives the same result.
    pub fn analyze(&mut self, program: &Program) -> Result<(), Error> {
        self.symbol_table = SymbolTable::new();

        self.analyze_body(&program.body)?;
        debug!(symbols = self.symbol_table.len(), "semantic analysis passed");

        Ok(())
    }

    fn analyze_body(&mut self, body: &[Stmt]) -> Result<(), Error> {
        for stmt in body {
            self.analyze_stmt(stmt)?;
        }
        Ok(())
    }

    pub fn analyze_stmt(&mut self, stmt: &Stmt) -> Result<(), Error> {
        match stmt {
            Stmt::VarDecl(decl) => {
                self.symbol_table
                    .declare(&decl.identifier, Type::Integer, decl.span.start)?;
                trace!(variable = %decl.identifier, "declared");
                Ok(())
            }
            Stmt::Assignment(assignment) => self.analyze_assignment(assignment),
            Stmt::Print(print) => {
                self.analyze_expr(&print.value)?;
                Ok(())
            }
            Stmt::If(if_stmt) => {
                self.expect_condition(stmt.node_name(), &if_stmt.condition)?;
                self.analyze_body(&if_stmt.then_body)?;
                if let Some(else_body) = &if_stmt.else_body {
                    self.analyze_body(else_body)?;
                }
                Ok(())
            }
            Stmt::While(while_stmt) => {
                self.expect_condition(stmt.node_name(), &while_stmt.condition)?;
                self.analyze_body(&while_stmt.body)
            }
        }
    }

    fn analyze_assignment(&mut self, assignment: &AssignmentStmt) -> Result<(), Error> {
        let target = &assignment.assignee;
        if self.symbol_table.lookup(&target.value).is_none() {
            return Err(Error::new(
                ErrorImpl::UndeclaredVariable {
                    variable: target.value.clone(),
                },
                target.span.start,
            ));
        }

        let value_type = self.analyze_expr(&assignment.value)?;
        if value_type == Type::Boolean {
            return Err(Error::new(
                ErrorImpl::InvalidAssignment {
                    variable: target.value.clone(),
                    received: value_type.to_string(),
                },
                assignment.value.get_span().start,
            ));
        }

        // Variables take the type of whatever was last assigned to them
        self.symbol_table
            .retype(&target.value, value_type, target.span.start)?;
        trace!(variable = %target.value, %value_type, "assigned");

        Ok(())
    }

    fn expect_condition(&self, node: &str, condition: &Expr) -> Result<(), Error> {
        let condition_type = self.analyze_expr(condition)?;
        if condition_type != Type::Boolean {
            return Err(type_mismatch(
                format!("{} condition", node),
                Type::Boolean,
                format!("`{}`", condition_type),
                condition.get_span().start,
            ));
        }
        Ok(())
    }

    /// Returns the type of `expr`.
    pub fn analyze_expr(&self, expr: &Expr) -> Result<Type, Error> {
        match expr {
            Expr::Number(_) => Ok(Type::Integer),
            Expr::String(_) => Ok(Type::Text),
            Expr::Symbol(symbol) => match self.symbol_table.lookup(&symbol.value) {
                Some(found) => Ok(found.symbol_type),
                None => Err(Error::new(
                    ErrorImpl::UndeclaredVariable {
                        variable: symbol.value.clone(),
                    },
                    symbol.span.start,
                )),
            },
            Expr::Binary(binary) => self.analyze_binary(expr.node_name(), binary),
            Expr::Comparison(comparison) => {
                let left = self.analyze_expr(&comparison.left)?;
                let right = self.analyze_expr(&comparison.right)?;
                expect_operands(
                    format!("{} `{}`", expr.node_name(), comparison.operator),
                    Type::Integer,
                    left,
                    right,
                    comparison.span.start,
                )?;
                Ok(Type::Boolean)
            }
            Expr::Logical(logical) => {
                let left = self.analyze_expr(&logical.left)?;
                let right = self.analyze_expr(&logical.right)?;
                expect_operands(
                    format!("{} `{}`", expr.node_name(), logical.operator),
                    Type::Boolean,
                    left,
                    right,
                    logical.span.start,
                )?;
                Ok(Type::Boolean)
            }
        }
    }

    fn analyze_binary(&self, node: &str, binary: &BinaryExpr) -> Result<Type, Error> {
        let left = self.analyze_expr(&binary.left)?;
        let right = self.analyze_expr(&binary.right)?;

        let operand_type = match binary.operator {
            BinaryOperator::Concat => Type::Text,
            BinaryOperator::Add
            | BinaryOperator::Sub
            | BinaryOperator::Mul
            | BinaryOperator::Div
            | BinaryOperator::Pow => Type::Integer,
        };

        expect_operands(
            format!("{} `{}`", node, binary.operator),
            operand_type,
            left,
            right,
            binary.span.start,
        )?;

        Ok(operand_type)
    }
}

fn expect_operands(
    node: String,
    expected: Type,
    left: Type,
    right: Type,
    position: Position,
) -> Result<(), Error> {
    if left != expected || right != expected {
        return Err(type_mismatch(
            node,
            expected,
            format!("`{}` and `{}`", left, right),
            position,
        ));
    }
    Ok(())
}

fn type_mismatch(node: String, expected: Type, received: String, position: Position) -> Error {
    Error::new(
        ErrorImpl::TypeMismatch {
            node,
            expected: expected.to_string(),
            received,
        },
        position,
    )
}

/// Analyzes `program` with a fresh symbol table.
pub fn analyze(program: &Program) -> Result<(), Error> {
    SemanticAnalyzer::new().analyze(program)
}
