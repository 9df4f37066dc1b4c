//! Type checking and semantic analysis module.
//!
//! This module performs the semantic pass over statement records. It turns
//! untyped statements into a typed AST while:
//!
//! - Maintaining the symbol table of declared variables
//! - Rejecting redeclarations and use before declaration
//! - Inferring expression types through the operator rule table
//! - Checking declared types against the inferred ones
//!
//! Each statement is checked on its own line; errors are collected as
//! diagnostics instead of ending the run.

pub mod analyzer;
pub mod rules;
pub mod symbol_table;
pub mod type_checker;
pub mod typed_ast;

#[cfg(test)]
mod tests;
