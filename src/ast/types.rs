//! Primitive types, operators and literal values of the statement language.
//!
//! The type set is closed: every value and every expression resolves to one of
//! `int`, `float` or `str`. Operators are likewise limited to the four
//! arithmetic operators.

use std::{fmt::Display, str::FromStr};

use crate::errors::errors::ErrorImpl;

/// The closed set of types a variable or expression can have.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveType {
    Int,
    Float,
    Str,
}

impl PrimitiveType {
    pub fn name(&self) -> &'static str {
        match self {
            PrimitiveType::Int => "int",
            PrimitiveType::Float => "float",
            PrimitiveType::Str => "str",
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, PrimitiveType::Int | PrimitiveType::Float)
    }
}

impl Display for PrimitiveType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for PrimitiveType {
    type Err = ErrorImpl;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "int" => Ok(PrimitiveType::Int),
            "float" => Ok(PrimitiveType::Float),
            "str" => Ok(PrimitiveType::Str),
            _ => Err(ErrorImpl::UnknownType {
                type_: s.to_string(),
            }),
        }
    }
}

/// Binary arithmetic operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
}

impl Operator {
    pub fn symbol(&self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Sub => "-",
            Operator::Mul => "*",
            Operator::Div => "/",
        }
    }
}

impl Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A literal value. Its type is fixed by the variant.
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    Int(i64),
    Float(f64),
    Str(String),
}

impl LiteralValue {
    pub fn get_type(&self) -> PrimitiveType {
        match self {
            LiteralValue::Int(_) => PrimitiveType::Int,
            LiteralValue::Float(_) => PrimitiveType::Float,
            LiteralValue::Str(_) => PrimitiveType::Str,
        }
    }

    /// Converts the text of a numeric literal into a value of `target`.
    ///
    /// Mirrors how typed-in values are converted on entry: a number becomes a
    /// float or its own text freely, but only an integral literal is an `int`.
    pub fn coerce_number(text: &str, target: PrimitiveType) -> Result<LiteralValue, ErrorImpl> {
        let coercion_error = || ErrorImpl::LiteralCoercion {
            value: text.to_string(),
            type_: target,
        };

        match target {
            PrimitiveType::Int => text
                .parse::<i64>()
                .map(LiteralValue::Int)
                .map_err(|_| coercion_error()),
            PrimitiveType::Float => text
                .parse::<f64>()
                .map(LiteralValue::Float)
                .map_err(|_| coercion_error()),
            PrimitiveType::Str => Ok(LiteralValue::Str(text.to_string())),
        }
    }
}

/// Prints the raw value, the way it is shown in the symbol table.
///
/// Floats always keep a fractional part so `2.0` is not shown as `2`.
impl Display for LiteralValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LiteralValue::Int(value) => write!(f, "{}", value),
            LiteralValue::Float(value) => write!(f, "{:?}", value),
            LiteralValue::Str(value) => write!(f, "{}", value),
        }
    }
}
