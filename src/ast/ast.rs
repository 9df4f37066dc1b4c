//! Statement records and untyped expression trees.
//!
//! These are the inputs of the semantic pass. They carry no inferred types;
//! only literals know their type, through their value.

use std::fmt::Display;

use super::types::{LiteralValue, Operator, PrimitiveType};

/// An untyped expression tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Literal(LiteralValue),
    Variable(String),
    Binary {
        operator: Operator,
        left: Box<Expression>,
        right: Box<Expression>,
    },
}

impl Expression {
    pub fn int(value: i64) -> Self {
        Expression::Literal(LiteralValue::Int(value))
    }

    pub fn float(value: f64) -> Self {
        Expression::Literal(LiteralValue::Float(value))
    }

    pub fn string(value: &str) -> Self {
        Expression::Literal(LiteralValue::Str(value.to_string()))
    }

    pub fn variable(name: &str) -> Self {
        Expression::Variable(name.to_string())
    }

    pub fn binary(left: Expression, operator: Operator, right: Expression) -> Self {
        Expression::Binary {
            operator,
            left: Box::new(left),
            right: Box::new(right),
        }
    }
}

fn precedence(operator: Operator) -> u8 {
    match operator {
        Operator::Add | Operator::Sub => 1,
        Operator::Mul | Operator::Div => 2,
    }
}

fn fmt_operand(
    f: &mut std::fmt::Formatter<'_>,
    operand: &Expression,
    parent: Operator,
    is_right: bool,
) -> std::fmt::Result {
    if let Expression::Binary { operator, .. } = operand {
        let needs_parens = precedence(*operator) < precedence(parent)
            || (is_right && precedence(*operator) == precedence(parent));
        if needs_parens {
            return write!(f, "({})", operand);
        }
    }
    write!(f, "{}", operand)
}

/// Source form of the expression. String literals are quoted.
impl Display for Expression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Expression::Literal(LiteralValue::Str(value)) => write!(f, "{:?}", value),
            Expression::Literal(value) => write!(f, "{}", value),
            Expression::Variable(name) => write!(f, "{}", name),
            Expression::Binary {
                operator,
                left,
                right,
            } => {
                fmt_operand(f, left, *operator, false)?;
                write!(f, " {} ", operator)?;
                fmt_operand(f, right, *operator, true)
            }
        }
    }
}

/// A statement record handed to the analyzer.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Assignment {
        name: String,
        declared_type: PrimitiveType,
        value: Expression,
    },
    Print {
        target: Expression,
    },
}

impl Statement {
    pub fn assignment(name: &str, declared_type: PrimitiveType, value: Expression) -> Self {
        Statement::Assignment {
            name: name.to_string(),
            declared_type,
            value,
        }
    }

    /// A print of a single variable.
    pub fn print(name: &str) -> Self {
        Statement::Print {
            target: Expression::variable(name),
        }
    }

    pub fn print_expr(target: Expression) -> Self {
        Statement::Print { target }
    }
}
