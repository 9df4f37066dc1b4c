#![allow(clippy::module_inception)]

//! Static semantic analysis for a small statement language of typed
//! variable assignments and print statements over `int`, `float` and `str`.
//!
//! The crate is organised as a pipeline:
//!
//! - `lexer` / `parser` read statement scripts into [`ast::ast::Statement`] records
//! - `type_checker` owns the symbol table, the operator rule table and the
//!   [`type_checker::analyzer::SemanticAnalyzer`] that produces a typed AST plus diagnostics

use std::fmt::Display;

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;
pub mod type_checker;

extern crate regex;

/// A location used for diagnostics.
///
/// `line` is 1-based. For analysis errors it is the statement number within the
/// run; for script reader errors it is the source line, and `column` points at
/// the offending token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub line: u32,
    pub column: Option<u32>,
}

impl Position {
    pub fn line(line: u32) -> Self {
        Position { line, column: None }
    }

    pub fn at(line: u32, column: u32) -> Self {
        Position {
            line,
            column: Some(column),
        }
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.column {
            Some(column) => write!(f, "{}:{}", self.line, column),
            None => write!(f, "{}", self.line),
        }
    }
}

/// Byte range of a token in the source, along with the line it starts on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: u32,
    pub end: u32,
    pub line: u32,
    pub column: u32,
}

impl Span {
    pub fn position(&self) -> Position {
        Position::at(self.line, self.column)
    }
}

/// Returns the text of the 1-based `line` in `content`, without its line ending.
pub fn get_line(content: &str, line: u32) -> Option<&str> {
    if line == 0 {
        return None;
    }

    content
        .split_inclusive('\n')
        .nth((line - 1) as usize)
        .map(|text| text.trim_end_matches(['\n', '\r']))
}
