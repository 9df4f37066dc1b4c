use crate::{
    ast::{
        ast::Expression,
        types::{LiteralValue, Operator},
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::{lookups::BindingPower, parser::Parser};

pub fn parse_expr(parser: &mut Parser, bp: BindingPower) -> Result<Expression, Error> {
    // First parse NUD
    let token_kind = parser.current_token_kind();
    let nud = parser.get_nud_handler(token_kind).ok_or_else(|| {
        Error::new(
            ErrorImpl::UnexpectedToken {
                token: parser.current_token().value.clone(),
            },
            parser.get_position(),
        )
    })?;

    let mut left = nud(parser)?;

    // While LED and current BP is less than BP of current token, continue parsing lhs
    while parser.get_binding_power(parser.current_token_kind()) > bp {
        let token_kind = parser.current_token_kind();
        let led = parser.get_led_handler(token_kind).ok_or_else(|| {
            Error::new(
                ErrorImpl::UnexpectedToken {
                    token: parser.current_token().value.clone(),
                },
                parser.get_position(),
            )
        })?;

        let binding_power = parser.get_binding_power(token_kind);
        left = led(parser, left, binding_power)?;
    }

    Ok(left)
}

/// Parses the text of a number token: integral text is an `int`, anything with
/// a fractional part is a `float`.
pub fn parse_number(text: &str) -> Option<LiteralValue> {
    if text.contains('.') {
        text.parse().ok().map(LiteralValue::Float)
    } else {
        text.parse().ok().map(LiteralValue::Int)
    }
}

pub fn parse_primary_expr(parser: &mut Parser) -> Result<Expression, Error> {
    match parser.current_token_kind() {
        TokenKind::Number => {
            let position = parser.get_position();
            let token = parser.advance();
            match parse_number(&token.value) {
                Some(value) => Ok(Expression::Literal(value)),
                None => Err(Error::new(
                    ErrorImpl::NumberParseError { token: token.value },
                    position,
                )),
            }
        }
        TokenKind::Identifier => Ok(Expression::Variable(parser.advance().value)),
        TokenKind::String => Ok(Expression::Literal(LiteralValue::Str(parser.advance().value))),
        _ => Err(Error::new(
            ErrorImpl::UnexpectedToken {
                token: parser.current_token().value.clone(),
            },
            parser.get_position(),
        )),
    }
}

/// `-` directly in front of a number literal.
pub fn parse_negative_number_expr(parser: &mut Parser) -> Result<Expression, Error> {
    let position = parser.get_position();
    parser.advance();

    let error = Error::new(
        ErrorImpl::UnexpectedTokenDetailed {
            token: parser.current_token().value.clone(),
            message: String::from("`-` can only prefix a number literal"),
        },
        parser.get_position(),
    );
    let token = parser.expect_error(TokenKind::Number, Some(error))?;

    let text = format!("-{}", token.value);
    parse_number(&text)
        .map(Expression::Literal)
        .ok_or_else(|| Error::new(ErrorImpl::NumberParseError { token: text }, position))
}

pub fn parse_binary_expr(
    parser: &mut Parser,
    left: Expression,
    bp: BindingPower,
) -> Result<Expression, Error> {
    let operator_token = parser.advance();
    let operator = match operator_token.kind {
        TokenKind::Plus => Operator::Add,
        TokenKind::Dash => Operator::Sub,
        TokenKind::Star => Operator::Mul,
        TokenKind::Slash => Operator::Div,
        _ => {
            return Err(Error::new(
                ErrorImpl::UnexpectedToken {
                    token: operator_token.value,
                },
                operator_token.span.position(),
            ))
        }
    };

    let right = parse_expr(parser, bp)?;

    Ok(Expression::binary(left, operator, right))
}

pub fn parse_grouping_expr(parser: &mut Parser) -> Result<Expression, Error> {
    parser.expect(TokenKind::OpenParen)?;
    let expr = parse_expr(parser, BindingPower::Default)?;
    parser.expect(TokenKind::CloseParen)?;

    Ok(expr)
}
