//! Operator typing rules.
//!
//! | Operator | int,int | float,float | mixed numeric | str,str | str,int / int,str |
//! |----------|---------|-------------|---------------|---------|-------------------|
//! | `+`      | int     | float       | float         | str     | -                 |
//! | `-`      | int     | float       | float         | -       | -                 |
//! | `*`      | int     | float       | float         | -       | str               |
//! | `/`      | float   | float       | float         | -       | -                 |

use std::fmt::Display;

use crate::{
    ast::types::{Operator, PrimitiveType},
    errors::errors::ErrorImpl,
};

/// Result type of `left operator right`, or `None` if the combination is not allowed.
pub fn type_of(left: PrimitiveType, right: PrimitiveType, operator: Operator) -> Option<PrimitiveType> {
    match operator {
        Operator::Add => match (left, right) {
            (PrimitiveType::Str, PrimitiveType::Str) => Some(PrimitiveType::Str),
            _ => promote(left, right),
        },
        Operator::Sub => promote(left, right),
        Operator::Mul => match (left, right) {
            (PrimitiveType::Str, PrimitiveType::Int) | (PrimitiveType::Int, PrimitiveType::Str) => {
                Some(PrimitiveType::Str)
            }
            _ => promote(left, right),
        },
        Operator::Div => promote(left, right).map(|_| PrimitiveType::Float),
    }
}

/// Numeric promotion: `int` with `int` stays `int`, any `float` operand makes it `float`.
fn promote(left: PrimitiveType, right: PrimitiveType) -> Option<PrimitiveType> {
    if !(left.is_numeric() && right.is_numeric()) {
        None
    } else if left == PrimitiveType::Float || right == PrimitiveType::Float {
        Some(PrimitiveType::Float)
    } else {
        Some(PrimitiveType::Int)
    }
}

/// Applies [`type_of`], describing `expression` in the error when it fails.
pub fn check_operation(
    left: PrimitiveType,
    operator: Operator,
    right: PrimitiveType,
    expression: &dyn Display,
) -> Result<PrimitiveType, ErrorImpl> {
    type_of(left, right, operator).ok_or_else(|| ErrorImpl::OperatorTypeMismatch {
        left,
        operator,
        right,
        expression: expression.to_string(),
    })
}
