use std::fmt::Display;

use thiserror::Error;

use crate::{
    ast::types::{Operator, PrimitiveType},
    Position,
};

/// An error together with where it happened.
///
/// Displays as `Error on line <n>: <message>`, which is the diagnostic line
/// format of an analysis run.
#[derive(Debug, Clone, PartialEq)]
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

    pub fn get_line(&self) -> u32 {
        self.position.line
    }

    pub fn get_internal_error(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_kind(&self) -> ErrorKind {
        self.internal_error.kind()
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => "UnrecognisedToken",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::UnexpectedTokenDetailed { .. } => "UnexpectedTokenDetailed",
            ErrorImpl::NumberParseError { .. } => "NumberParseError",
            ErrorImpl::UnknownType { .. } => "UnknownType",
            ErrorImpl::LiteralCoercion { .. } => "LiteralCoercion",
            ErrorImpl::VariableAlreadyDeclared { .. } => "DuplicateDeclaration",
            ErrorImpl::VariableNotDeclared { .. } => "UndeclaredVariable",
            ErrorImpl::OperatorTypeMismatch { .. } => "TypeMismatch",
            ErrorImpl::DeclaredTypeMismatch { .. } => "TypeMismatch",
            ErrorImpl::InvalidVariableName { .. } => "InvalidInputShape",
            ErrorImpl::InvalidLiteral { .. } => "InvalidInputShape",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => ErrorTip::None,
            ErrorImpl::UnexpectedToken { token } => ErrorTip::Suggestion(format!(
                "Unexpected token: `{}`, did you miss a semicolon?",
                token
            )),
            ErrorImpl::UnexpectedTokenDetailed { token, message } => {
                ErrorTip::Suggestion(format!("Unexpected token: `{}`, {}", token, message))
            }
            ErrorImpl::NumberParseError { token } => ErrorTip::Suggestion(format!(
                "Invalid number: `{}`, is it above the integer limit?",
                token
            )),
            ErrorImpl::UnknownType { .. } => {
                ErrorTip::Suggestion(String::from("Known types are `int`, `float` and `str`"))
            }
            ErrorImpl::LiteralCoercion { value, type_ } => ErrorTip::Suggestion(format!(
                "Declare the variable as `float`, or write `{}` as a whole {} value",
                value, type_
            )),
            ErrorImpl::VariableAlreadyDeclared { variable } => ErrorTip::Suggestion(format!(
                "Variables cannot be redeclared, choose a new name instead of `{}`",
                variable
            )),
            ErrorImpl::VariableNotDeclared { variable } => ErrorTip::Suggestion(format!(
                "Declare `{}` on an earlier line before using it",
                variable
            )),
            ErrorImpl::OperatorTypeMismatch { operator, .. } => match operator {
                Operator::Add => ErrorTip::Suggestion(String::from(
                    "`+` adds two numbers or joins two strings",
                )),
                Operator::Mul => ErrorTip::Suggestion(String::from(
                    "`*` multiplies two numbers or repeats a string by an int",
                )),
                Operator::Sub | Operator::Div => ErrorTip::Suggestion(format!(
                    "`{}` only accepts `int` and `float` operands",
                    operator
                )),
            },
            ErrorImpl::DeclaredTypeMismatch { declared, .. } => ErrorTip::Suggestion(format!(
                "Change the declared type or make the value a `{}`",
                declared
            )),
            ErrorImpl::InvalidVariableName { .. } => ErrorTip::Suggestion(String::from(
                "Variable names start with a letter or `_` followed by letters, digits or `_`",
            )),
            ErrorImpl::InvalidLiteral { .. } => ErrorTip::None,
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error on line {}: {}", self.position.line, self.internal_error)
    }
}

impl std::error::Error for Error {}

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

/// Coarse classification of errors.
///
/// The first four are recovered from at the statement boundary during
/// analysis. `Syntax` errors come from the script reader.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    DuplicateDeclaration,
    UndeclaredVariable,
    TypeMismatch,
    InvalidInputShape,
    Syntax,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("unrecognised token: {token:?}")]
    UnrecognisedToken { token: String },
    #[error("unexpected token: {token:?}")]
    UnexpectedToken { token: String },
    #[error("unexpected token ({message}): {token:?}")]
    UnexpectedTokenDetailed { token: String, message: String },
    #[error("error parsing number: {token:?}")]
    NumberParseError { token: String },
    #[error("unknown type {type_:?}")]
    UnknownType { type_: String },
    #[error("cannot convert {value:?} to {type_}")]
    LiteralCoercion { value: String, type_: PrimitiveType },
    #[error("'{variable}' already declared")]
    VariableAlreadyDeclared { variable: String },
    #[error("'{variable}' used before declaration")]
    VariableNotDeclared { variable: String },
    #[error("type mismatch in '{expression}' ({left} {operator} {right} not allowed)")]
    OperatorTypeMismatch {
        left: PrimitiveType,
        operator: Operator,
        right: PrimitiveType,
        expression: String,
    },
    #[error("type mismatch for '{variable}': declared {declared}, but value is {received}")]
    DeclaredTypeMismatch {
        variable: String,
        declared: PrimitiveType,
        received: PrimitiveType,
    },
    #[error("invalid variable name {name:?}")]
    InvalidVariableName { name: String },
    #[error("invalid literal {value}")]
    InvalidLiteral { value: String },
}

impl ErrorImpl {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ErrorImpl::VariableAlreadyDeclared { .. } => ErrorKind::DuplicateDeclaration,
            ErrorImpl::VariableNotDeclared { .. } => ErrorKind::UndeclaredVariable,
            ErrorImpl::OperatorTypeMismatch { .. } | ErrorImpl::DeclaredTypeMismatch { .. } => {
                ErrorKind::TypeMismatch
            }
            ErrorImpl::InvalidVariableName { .. } | ErrorImpl::InvalidLiteral { .. } => {
                ErrorKind::InvalidInputShape
            }
            ErrorImpl::UnrecognisedToken { .. }
            | ErrorImpl::UnexpectedToken { .. }
            | ErrorImpl::UnexpectedTokenDetailed { .. }
            | ErrorImpl::NumberParseError { .. }
            | ErrorImpl::UnknownType { .. }
            | ErrorImpl::LiteralCoercion { .. } => ErrorKind::Syntax,
        }
    }
}
