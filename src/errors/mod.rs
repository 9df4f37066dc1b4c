//! Error types and error handling.
//!
//! This module defines the errors raised while reading statement scripts and
//! while analysing statements. It includes:
//!
//! - Error structures carrying the line they refer to
//! - Specific error variants for the reader and the semantic pass
//! - Error formatting and display functionality
//! - Helpful error messages and suggestions

pub mod errors;
