use tracing::trace;

use crate::{
    ast::{
        ast::Stmt,
        expressions::SymbolExpr,
        statements::{AssignmentStmt, IfStmt, PrintStmt, VarDeclStmt, WhileStmt},
    },
    errors::errors::Error,
    lexer::tokens::TokenKind,
    parser::{
        expr::{parse_expr, parse_logical_expr},
        lookups::BindingPower,
    },
    Span,
};

use super::parser::Parser;

pub fn parse_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let kind = parser.current_token_kind();
    let Some(handler) = parser.get_stmt_lookup().get(&kind).copied() else {
        return Err(parser.unexpected("statement"));
    };

    let stmt = handler(parser)?;
    trace!(node = stmt.node_name(), at = %stmt.get_span().start, "parsed statement");

    Ok(stmt)
}

/// Parses statements until `terminator`, then consumes it.
///
/// Reaching end of input first fails on the terminator's `expect`.
fn parse_block(parser: &mut Parser, terminator: TokenKind) -> Result<(Vec<Stmt>, Span), Error> {
    let mut body = vec![];
    while parser.current_token_kind() != terminator && parser.has_tokens() {
        body.push(parse_stmt(parser)?);
    }

    let end = parser.expect(terminator)?;

    Ok((body, end.span))
}

pub fn parse_var_decl_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let start = parser.advance()?.span.start;

    let error = parser.unexpected("identifier during variable declaration");
    let identifier = parser
        .expect_error(TokenKind::Identifier, Some(error))?
        .value;

    let end = parser.expect(TokenKind::Semicolon)?.span.end;

    Ok(Stmt::VarDecl(VarDeclStmt {
        identifier,
        span: Span { start, end },
    }))
}

pub fn parse_assignment_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let target = parser.expect(TokenKind::Identifier)?;
    parser.expect(TokenKind::Assign)?;

    let value = parse_expr(parser, BindingPower::Default)?;
    let end = parser.expect(TokenKind::Semicolon)?.span.end;

    Ok(Stmt::Assignment(AssignmentStmt {
        span: Span {
            start: target.span.start,
            end,
        },
        assignee: SymbolExpr {
            value: target.value,
            span: target.span,
        },
        value,
    }))
}

pub fn parse_print_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let start = parser.advance()?.span.start;

    parser.expect(TokenKind::LParen)?;
    let value = parse_expr(parser, BindingPower::Default)?;
    parser.expect(TokenKind::RParen)?;

    let end = parser.expect(TokenKind::Semicolon)?.span.end;

    Ok(Stmt::Print(PrintStmt {
        value,
        span: Span { start, end },
    }))
}

pub fn parse_if_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let start = parser.advance()?.span.start;

    parser.expect(TokenKind::LParen)?;
    let condition = parse_logical_expr(parser)?;
    parser.expect(TokenKind::RParen)?;
    parser.expect(TokenKind::Then)?;

    let (then_body, end) = parse_block(parser, TokenKind::EndIf)?;

    Ok(Stmt::If(IfStmt {
        condition,
        then_body,
        else_body: None,
        span: Span {
            start,
            end: end.end,
        },
    }))
}

pub fn parse_while_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let start = parser.advance()?.span.start;

    parser.expect(TokenKind::LParen)?;
    let condition = parse_logical_expr(parser)?;
    parser.expect(TokenKind::RParen)?;
    parser.expect(TokenKind::Do)?;

    let (body, end) = parse_block(parser, TokenKind::EndWhile)?;

    Ok(Stmt::While(WhileStmt {
        condition,
        body,
        span: Span {
            start,
            end: end.end,
        },
    }))
}
