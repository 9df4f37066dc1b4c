//! Lexical analysis for statement scripts.
//!
//! Converts script text into a stream of tokens for the parser. It handles:
//!
//! - Tokenization using anchored regex patterns
//! - Recognition of keywords, identifiers, literals and operators
//! - Line and column tracking for error reporting
//! - Comments and whitespace handling

pub mod lexer;
pub mod tokens;
