//! Typed AST produced by the type checker.
//!
//! Every node carries the type inferred for it. Binary nodes are only built by
//! the checker after their children, so their type always follows from the
//! children's types and the operator.

use std::fmt::Display;

use crate::{
    ast::{
        ast::Expression,
        types::{LiteralValue, Operator, PrimitiveType},
    },
    errors::errors::ErrorImpl,
};

use super::rules::check_operation;

#[derive(Debug, Clone, PartialEq)]
pub enum TypedExpr {
    Literal {
        value: LiteralValue,
    },
    Variable {
        name: String,
        var_type: PrimitiveType,
    },
    Binary {
        operator: Operator,
        left: Box<TypedExpr>,
        right: Box<TypedExpr>,
        result_type: PrimitiveType,
    },
}

impl TypedExpr {
    pub fn get_type(&self) -> PrimitiveType {
        match self {
            TypedExpr::Literal { value } => value.get_type(),
            TypedExpr::Variable { var_type, .. } => *var_type,
            TypedExpr::Binary { result_type, .. } => *result_type,
        }
    }

    /// Recomputes this node's type from its children through the operator rules.
    pub fn recheck(&self) -> Result<PrimitiveType, ErrorImpl> {
        match self {
            TypedExpr::Binary {
                operator,
                left,
                right,
                ..
            } => check_operation(left.recheck()?, *operator, right.recheck()?, self),
            _ => Ok(self.get_type()),
        }
    }

    /// The untyped expression this node was checked from.
    pub fn to_expression(&self) -> Expression {
        match self {
            TypedExpr::Literal { value } => Expression::Literal(value.clone()),
            TypedExpr::Variable { name, .. } => Expression::Variable(name.clone()),
            TypedExpr::Binary {
                operator,
                left,
                right,
                ..
            } => Expression::binary(left.to_expression(), *operator, right.to_expression()),
        }
    }
}

impl Display for TypedExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_expression())
    }
}

/// The assigned-to side of an assignment.
#[derive(Debug, Clone, PartialEq)]
pub struct TypedVariable {
    pub name: String,
    pub var_type: PrimitiveType,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TypedAssignmentStmt {
    pub variable: TypedVariable,
    pub value: TypedExpr,
    pub var_type: PrimitiveType,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TypedPrintStmt {
    pub target: TypedExpr,
    pub var_type: PrimitiveType,
}

#[derive(Debug, Clone, PartialEq)]
pub enum TypedStmt {
    Assignment(TypedAssignmentStmt),
    Print(TypedPrintStmt),
}

impl TypedStmt {
    pub fn node_kind(&self) -> &'static str {
        match self {
            TypedStmt::Assignment(_) => "Assignment",
            TypedStmt::Print(_) => "Print",
        }
    }

    /// What the statement is about: the assigned name, or the printed expression.
    pub fn subject(&self) -> String {
        match self {
            TypedStmt::Assignment(assignment) => assignment.variable.name.clone(),
            TypedStmt::Print(print) => print.target.to_string(),
        }
    }

    pub fn get_type(&self) -> PrimitiveType {
        match self {
            TypedStmt::Assignment(assignment) => assignment.var_type,
            TypedStmt::Print(print) => print.var_type,
        }
    }
}

/// Renders as `<NodeKind>(<subject>, Type: <type>)`.
impl Display for TypedStmt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}({}, Type: {})",
            self.node_kind(),
            self.subject(),
            self.get_type()
        )
    }
}
