//! Statement-by-statement semantic analysis.
//!
//! The analyzer walks statements in order, keeping the symbol table, the
//! typed nodes of statements that passed and one diagnostic per statement
//! that failed. A failing statement never stops the run.

use log::{debug, info, warn};

use crate::{ast::ast::Statement, errors::errors::Error, Position};

use super::{symbol_table::SymbolTable, type_checker::TypeChecker, typed_ast::TypedStmt};

/// Everything a finished run produced.
#[derive(Debug, Clone)]
pub struct Analysis {
    pub symbol_table: SymbolTable,
    pub typed_ast: Vec<TypedStmt>,
    pub diagnostics: Vec<Error>,
}

impl Analysis {
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn render_diagnostics(&self) -> String {
        self.diagnostics
            .iter()
            .map(|diagnostic| diagnostic.to_string())
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn render_ast(&self) -> String {
        self.typed_ast
            .iter()
            .map(|node| node.to_string())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[derive(Debug)]
pub struct SemanticAnalyzer {
    symbol_table: SymbolTable,
    typed_ast: Vec<TypedStmt>,
    diagnostics: Vec<Error>,
    line_number: u32,
}

impl Default for SemanticAnalyzer {
    fn default() -> Self {
        SemanticAnalyzer::new()
    }
}

impl SemanticAnalyzer {
    pub fn new() -> Self {
        SemanticAnalyzer {
            symbol_table: SymbolTable::new(),
            typed_ast: vec![],
            diagnostics: vec![],
            line_number: 1,
        }
    }

    pub fn symbol_table(&self) -> &SymbolTable {
        &self.symbol_table
    }

    pub fn typed_ast(&self) -> &[TypedStmt] {
        &self.typed_ast
    }

    pub fn diagnostics(&self) -> &[Error] {
        &self.diagnostics
    }

    /// Line number the next statement will be reported on.
    pub fn line_number(&self) -> u32 {
        self.line_number
    }

    fn process(&mut self, statement: &Statement) -> Result<TypedStmt, Error> {
        let checker = TypeChecker::new(&self.symbol_table, self.line_number);
        let node = checker.check_stmt(statement)?;

        if let Statement::Assignment {
            name,
            declared_type,
            value,
        } = statement
        {
            self.symbol_table.declare(
                name.clone(),
                *declared_type,
                value.clone(),
                Position::line(self.line_number),
            )?;
        }

        Ok(node)
    }

    /// Analyses one statement. `report` is called right away if it fails.
    pub fn analyze_statement<F>(&mut self, statement: &Statement, mut report: F) -> bool
    where
        F: FnMut(&Error),
    {
        debug!("line {}: {:?}", self.line_number, statement);

        let succeeded = match self.process(statement) {
            Ok(node) => {
                debug!("line {}: {}", self.line_number, node);
                self.typed_ast.push(node);
                true
            }
            Err(error) => {
                warn!("{} ({})", error, error.get_error_name());
                report(&error);
                self.diagnostics.push(error);
                false
            }
        };

        self.line_number += 1;
        succeeded
    }

    pub fn analyze<F>(&mut self, statements: &[Statement], mut report: F)
    where
        F: FnMut(&Error),
    {
        for statement in statements {
            self.analyze_statement(statement, &mut report);
        }
    }

    pub fn finish(self) -> Analysis {
        info!(
            "analysed {} statements: {} declared, {} typed, {} diagnostics",
            self.line_number - 1,
            self.symbol_table.len(),
            self.typed_ast.len(),
            self.diagnostics.len()
        );

        Analysis {
            symbol_table: self.symbol_table,
            typed_ast: self.typed_ast,
            diagnostics: self.diagnostics,
        }
    }
}

/// Runs a fresh analysis over `statements`, calling `report` for each diagnostic as it happens.
pub fn analyze_with<F>(statements: &[Statement], report: F) -> Analysis
where
    F: FnMut(&Error),
{
    let mut analyzer = SemanticAnalyzer::new();
    analyzer.analyze(statements, report);
    analyzer.finish()
}

pub fn analyze(statements: &[Statement]) -> Analysis {
    analyze_with(statements, |_| {})
}
