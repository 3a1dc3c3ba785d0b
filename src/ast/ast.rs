use crate::Span;

use super::{
    expressions::{BinaryExpr, ComparisonExpr, LogicalExpr, NumberExpr, StringExpr, SymbolExpr},
    statements::{AssignmentStmt, IfStmt, PrintStmt, VarDeclStmt, WhileStmt},
};

/// Expression nodes. Each variant exclusively owns its children.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Number(NumberExpr),
    String(StringExpr),
    Symbol(SymbolExpr),
    Binary(BinaryExpr),
    Comparison(ComparisonExpr),
    Logical(LogicalExpr),
}

impl Expr {
    pub fn get_span(&self) -> &Span {
        match self {
            Expr::Number(expr) => &expr.span,
            Expr::String(expr) => &expr.span,
            Expr::Symbol(expr) => &expr.span,
            Expr::Binary(expr) => &expr.span,
            Expr::Comparison(expr) => &expr.span,
            Expr::Logical(expr) => &expr.span,
        }
    }

    /// Node kind name used in diagnostics.
    pub fn node_name(&self) -> &'static str {
        match self {
            Expr::Number(_) => "NumberLiteral",
            Expr::String(_) => "StringLiteral",
            Expr::Symbol(_) => "VariableRef",
            Expr::Binary(_) => "BinaryOp",
            Expr::Comparison(_) => "Comparison",
            Expr::Logical(_) => "LogicalOp",
        }
    }
}

/// Statement nodes.
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    VarDecl(VarDeclStmt),
    Assignment(AssignmentStmt),
    Print(PrintStmt),
    If(IfStmt),
    While(WhileStmt),
}

impl Stmt {
    pub fn get_span(&self) -> &Span {
        match self {
            Stmt::VarDecl(stmt) => &stmt.span,
            Stmt::Assignment(stmt) => &stmt.span,
            Stmt::Print(stmt) => &stmt.span,
            Stmt::If(stmt) => &stmt.span,
            Stmt::While(stmt) => &stmt.span,
        }
    }

    pub fn node_name(&self) -> &'static str {
        match self {
            Stmt::VarDecl(_) => "VarDeclaration",
            Stmt::Assignment(_) => "Assignment",
            Stmt::Print(_) => "PrintStatement",
            Stmt::If(_) => "If",
            Stmt::While(_) => "While",
        }
    }
}

/// An ordered sequence of top-level statements.
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    pub body: Vec<Stmt>,
    pub span: Span,
}
