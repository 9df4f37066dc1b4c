use lazy_static::lazy_static;
use log::trace;
use regex::Regex;

use crate::{
    ast::{
        ast::{Expression, Statement},
        types::LiteralValue,
    },
    errors::errors::{Error, ErrorImpl},
    Position,
};

use super::{
    rules::check_operation,
    symbol_table::SymbolTable,
    typed_ast::{TypedAssignmentStmt, TypedExpr, TypedPrintStmt, TypedStmt, TypedVariable},
};

lazy_static! {
    static ref IDENTIFIER: Regex = Regex::new("^[a-zA-Z_][a-zA-Z0-9_]*$").unwrap();
}

pub fn validate_name(name: &str) -> Result<(), ErrorImpl> {
    if IDENTIFIER.is_match(name) {
        Ok(())
    } else {
        Err(ErrorImpl::InvalidVariableName {
            name: name.to_string(),
        })
    }
}

/// Builds typed nodes for statements on one line, reading from the symbol table.
///
/// The checker only ever borrows the table immutably; declaring is up to the caller.
pub struct TypeChecker<'a> {
    symbol_table: &'a SymbolTable,
    position: Position,
}

impl<'a> TypeChecker<'a> {
    pub fn new(symbol_table: &'a SymbolTable, line: u32) -> Self {
        TypeChecker {
            symbol_table,
            position: Position::line(line),
        }
    }

    fn error(&self, error_impl: ErrorImpl) -> Error {
        Error::new(error_impl, self.position)
    }

    pub fn check_expr(&self, expr: &Expression) -> Result<TypedExpr, Error> {
        let typed = match expr {
            Expression::Literal(value) => {
                if let LiteralValue::Float(float) = value {
                    if !float.is_finite() {
                        return Err(self.error(ErrorImpl::InvalidLiteral {
                            value: value.to_string(),
                        }));
                    }
                }
                TypedExpr::Literal {
                    value: value.clone(),
                }
            }
            Expression::Variable(name) => {
                validate_name(name).map_err(|e| self.error(e))?;
                let entry = self.symbol_table.lookup(name, self.position)?;
                TypedExpr::Variable {
                    name: name.clone(),
                    var_type: entry.var_type,
                }
            }
            Expression::Binary {
                operator,
                left,
                right,
            } => {
                let left = self.check_expr(left)?;
                let right = self.check_expr(right)?;
                let result_type =
                    check_operation(left.get_type(), *operator, right.get_type(), expr)
                        .map_err(|e| self.error(e))?;

                TypedExpr::Binary {
                    operator: *operator,
                    left: Box::new(left),
                    right: Box::new(right),
                    result_type,
                }
            }
        };

        trace!("`{}` is {}", expr, typed.get_type());
        Ok(typed)
    }

    pub fn check_stmt(&self, stmt: &Statement) -> Result<TypedStmt, Error> {
        match stmt {
            Statement::Assignment {
                name,
                declared_type,
                value,
            } => {
                validate_name(name).map_err(|e| self.error(e))?;
                if self.symbol_table.contains(name) {
                    return Err(self.error(ErrorImpl::VariableAlreadyDeclared {
                        variable: name.clone(),
                    }));
                }

                let value = self.check_expr(value)?;
                if value.get_type() != *declared_type {
                    return Err(self.error(ErrorImpl::DeclaredTypeMismatch {
                        variable: name.clone(),
                        declared: *declared_type,
                        received: value.get_type(),
                    }));
                }

                Ok(TypedStmt::Assignment(TypedAssignmentStmt {
                    variable: TypedVariable {
                        name: name.clone(),
                        var_type: *declared_type,
                    },
                    var_type: value.get_type(),
                    value,
                }))
            }
            Statement::Print { target } => {
                let target = self.check_expr(target)?;
                Ok(TypedStmt::Print(TypedPrintStmt {
                    var_type: target.get_type(),
                    target,
                }))
            }
        }
    }
}
