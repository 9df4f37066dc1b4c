//! Parser module for reading statement scripts.
//!
//! This module transforms a stream of tokens into statement records for the
//! semantic pass. It uses a Pratt parser for expressions with operator
//! precedence and handles:
//!
//! - Assignment statements with a declared type
//! - Print statements
//! - Arithmetic expressions, literals and variable references
//!
//! The parser uses NUD (null denotation) and LED (left denotation) functions
//! for expression parsing with binding power for precedence handling.

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;
