use crate::{
    ast::{
        ast::Expr,
        expressions::{
            BinaryExpr, BinaryOperator, ComparisonExpr, ComparisonOperator, LogicalExpr,
            LogicalOperator, NumberExpr, StringExpr, SymbolExpr,
        },
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
    Span,
};

use super::{lookups::BindingPower, parser::Parser};

pub fn parse_expr(parser: &mut Parser, bp: BindingPower) -> Result<Expr, Error> {
    // First parse NUD
    let token_kind = parser.current_token_kind();
    let Some(nud) = parser.get_nud_lookup().get(&token_kind).copied() else {
        return Err(parser.unexpected("expression"));
    };

    let mut left = nud(parser)?;

    // While the current token binds tighter than `bp`, keep extending lhs
    loop {
        let token_kind = parser.current_token_kind();
        let token_bp = parser
            .get_bp_lookup()
            .get(&token_kind)
            .copied()
            .unwrap_or(BindingPower::Default);
        if token_bp <= bp {
            break;
        }

        let Some(led) = parser.get_led_lookup().get(&token_kind).copied() else {
            return Err(parser.unexpected("operator"));
        };

        left = led(parser, left, token_bp)?;
    }

    Ok(left)
}

pub fn parse_primary_expr(parser: &mut Parser) -> Result<Expr, Error> {
    match parser.current_token_kind() {
        TokenKind::Number => {
            let token = parser.advance()?;
            let value = token.value.parse().map_err(|_| {
                Error::new(
                    ErrorImpl::NumberParseError {
                        token: token.value.clone(),
                    },
                    token.span.start,
                )
            })?;

            Ok(Expr::Number(NumberExpr {
                value,
                span: token.span,
            }))
        }
        TokenKind::String => {
            let token = parser.advance()?;
            Ok(Expr::String(StringExpr {
                value: token.value,
                span: token.span,
            }))
        }
        TokenKind::Identifier => {
            let token = parser.advance()?;
            Ok(Expr::Symbol(SymbolExpr {
                value: token.value,
                span: token.span,
            }))
        }
        _ => Err(parser.unexpected("expression")),
    }
}

pub fn parse_binary_expr(
    parser: &mut Parser,
    left: Expr,
    bp: BindingPower,
) -> Result<Expr, Error> {
    let Some(operator) = BinaryOperator::from_token_kind(parser.current_token_kind()) else {
        return Err(parser.unexpected("operator"));
    };
    parser.advance()?;

    // Same binding power on the right keeps every tier left-associative
    let right = parse_expr(parser, bp)?;

    Ok(Expr::Binary(BinaryExpr {
        span: Span {
            start: left.get_span().start,
            end: right.get_span().end,
        },
        left: Box::new(left),
        operator,
        right: Box::new(right),
    }))
}

pub fn parse_grouping_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parser.advance()?;
    let expr = parse_expr(parser, BindingPower::Default)?;
    parser.expect(TokenKind::RParen)?;

    Ok(expr)
}

/// `logicalExpr := condition (('and'|'or') condition)*`
pub fn parse_logical_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let mut left = parse_condition(parser)?;

    while let Some(operator) = LogicalOperator::from_token_kind(parser.current_token_kind()) {
        parser.advance()?;
        let right = parse_condition(parser)?;

        left = Expr::Logical(LogicalExpr {
            span: Span {
                start: left.get_span().start,
                end: right.get_span().end,
            },
            left: Box::new(left),
            operator,
            right: Box::new(right),
        });
    }

    Ok(left)
}

/// `condition := expr (comparison expr)?`
///
/// Without a comparison operator the expression passes through unchanged.
pub fn parse_condition(parser: &mut Parser) -> Result<Expr, Error> {
    let left = parse_expr(parser, BindingPower::Default)?;

    let Some(operator) = ComparisonOperator::from_token_kind(parser.current_token_kind()) else {
        return Ok(left);
    };
    parser.advance()?;
    let right = parse_expr(parser, BindingPower::Default)?;

    Ok(Expr::Comparison(ComparisonExpr {
        span: Span {
            start: left.get_span().start,
            end: right.get_span().end,
        },
        left: Box::new(left),
        operator,
        right: Box::new(right),
    }))
}
