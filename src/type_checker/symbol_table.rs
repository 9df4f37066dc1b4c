//! Run-scoped symbol table.
//!
//! Entries are kept in declaration order and never removed. A name can be
//! declared once; its type is fixed from then on.

use std::{collections::HashMap, fmt::Display};

use log::trace;

use crate::{
    ast::{
        ast::Expression,
        types::{LiteralValue, PrimitiveType},
    },
    errors::errors::{Error, ErrorImpl},
    Position,
};

const COLUMN_WIDTH: usize = 10;

#[derive(Debug, Clone, PartialEq)]
pub struct SymbolEntry {
    pub name: String,
    pub var_type: PrimitiveType,
    pub value: Expression,
}

impl SymbolEntry {
    /// The value as shown in the table: literals raw, anything else in source
    /// form. Control characters in strings are escaped to keep the row on one line.
    pub fn render_value(&self) -> String {
        match &self.value {
            Expression::Literal(LiteralValue::Str(value)) => value.escape_debug().to_string(),
            Expression::Literal(literal) => literal.to_string(),
            expression => expression.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct SymbolTable {
    entries: Vec<SymbolEntry>,
    lookup: HashMap<String, usize>,
}

impl SymbolTable {
    pub fn new() -> Self {
        SymbolTable::default()
    }

    pub fn declare(
        &mut self,
        name: String,
        var_type: PrimitiveType,
        value: Expression,
        current_position: Position,
    ) -> Result<(), Error> {
        if self.lookup.contains_key(&name) {
            return Err(Error::new(
                ErrorImpl::VariableAlreadyDeclared { variable: name },
                current_position,
            ));
        }

        trace!("declaring `{}` as {}", name, var_type);
        self.lookup.insert(name.clone(), self.entries.len());
        self.entries.push(SymbolEntry {
            name,
            var_type,
            value,
        });
        Ok(())
    }

    pub fn lookup(&self, name: &str, current_position: Position) -> Result<&SymbolEntry, Error> {
        self.get(name).ok_or_else(|| {
            Error::new(
                ErrorImpl::VariableNotDeclared {
                    variable: name.to_string(),
                },
                current_position,
            )
        })
    }

    pub fn get(&self, name: &str) -> Option<&SymbolEntry> {
        self.lookup.get(name).map(|index| &self.entries[*index])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.lookup.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Renders the table as `Variable | Type | Value` columns, one row per
    /// entry in declaration order.
    pub fn render(&self) -> String {
        let mut rows = vec![render_row("Variable", "Type", "Value")];
        for entry in self.entries.iter() {
            rows.push(render_row(
                &entry.name,
                entry.var_type.name(),
                &entry.render_value(),
            ));
        }
        rows.join("\n")
    }
}

fn render_row(name: &str, type_name: &str, value: &str) -> String {
    format!(
        "{:<width$} {:<width$} {}",
        name,
        type_name,
        value,
        width = COLUMN_WIDTH
    )
}

impl Display for SymbolTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.render())
    }
}
