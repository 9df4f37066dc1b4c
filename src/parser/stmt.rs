use crate::{
    ast::{
        ast::{Expression, Statement},
        types::{LiteralValue, PrimitiveType},
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
    parser::{expr::parse_expr, lookups::BindingPower},
};

use super::parser::Parser;

pub fn parse_stmt(parser: &mut Parser) -> Result<Statement, Error> {
    match parser.get_stmt_handler(parser.current_token_kind()) {
        Some(handler) => handler(parser),
        None => Err(Error::new(
            ErrorImpl::UnexpectedTokenDetailed {
                token: parser.current_token().value.clone(),
                message: String::from("expected an assignment or a print statement"),
            },
            parser.get_position(),
        )),
    }
}

/// `[let] name: type = expression;`
pub fn parse_assignment_stmt(parser: &mut Parser) -> Result<Statement, Error> {
    if parser.current_token_kind() == TokenKind::Let {
        parser.advance();
    }

    let error = Error::new(
        ErrorImpl::UnexpectedTokenDetailed {
            token: parser.current_token().value.clone(),
            message: String::from("expected identifier during variable declaration"),
        },
        parser.get_position(),
    );
    let name = parser.expect_error(TokenKind::Identifier, Some(error))?.value;

    let error = Error::new(
        ErrorImpl::UnexpectedTokenDetailed {
            token: parser.current_token().value.clone(),
            message: format!("expected `:` and a type after `{}`", name),
        },
        parser.get_position(),
    );
    parser.expect_error(TokenKind::Colon, Some(error))?;

    let type_token = parser.expect(TokenKind::Identifier)?;
    let declared_type = type_token
        .value
        .parse::<PrimitiveType>()
        .map_err(|e| Error::new(e, type_token.span.position()))?;

    parser.expect(TokenKind::Assignment)?;

    let value = match parse_lone_number(parser, declared_type)? {
        Some(value) => value,
        None => parse_expr(parser, BindingPower::Default)?,
    };

    parser.expect(TokenKind::Semicolon)?;

    Ok(Statement::Assignment {
        name,
        declared_type,
        value,
    })
}

/// A right-hand side made of a single number literal is converted to the
/// declared type as it is read, e.g. `5` declared `float` becomes `5.0`.
///
/// Returns `None` without consuming anything for any other right-hand side.
fn parse_lone_number(
    parser: &mut Parser,
    declared_type: PrimitiveType,
) -> Result<Option<Expression>, Error> {
    let negative = parser.current_token_kind() == TokenKind::Dash;
    let number_offset = if negative { 1 } else { 0 };

    if parser.peek_kind(number_offset) != TokenKind::Number
        || parser.peek_kind(number_offset + 1) != TokenKind::Semicolon
    {
        return Ok(None);
    }

    let position = parser.get_position();
    if negative {
        parser.advance();
    }
    let token = parser.advance();
    let text = if negative {
        format!("-{}", token.value)
    } else {
        token.value
    };

    let value = match (declared_type, text.contains('.')) {
        // A fractional literal is never silently truncated
        (PrimitiveType::Int, true) => {
            return Err(Error::new(
                ErrorImpl::LiteralCoercion {
                    value: text,
                    type_: declared_type,
                },
                position,
            ))
        }
        (PrimitiveType::Int, false) => LiteralValue::coerce_number(&text, declared_type)
            .map_err(|_| Error::new(ErrorImpl::NumberParseError { token: text.clone() }, position))?,
        _ => LiteralValue::coerce_number(&text, declared_type)
            .map_err(|e| Error::new(e, position))?,
    };

    Ok(Some(Expression::Literal(value)))
}

/// `print expression;`, usually written `print(name);`
pub fn parse_print_stmt(parser: &mut Parser) -> Result<Statement, Error> {
    parser.expect(TokenKind::Print)?;
    let target = parse_expr(parser, BindingPower::Default)?;
    parser.expect(TokenKind::Semicolon)?;

    Ok(Statement::Print { target })
}
