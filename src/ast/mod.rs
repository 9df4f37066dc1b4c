/// AST (Abstract Syntax Tree) module
/// Contains the untyped statement records consumed by the type checker
///
/// Submodules:
/// - ast: Statement records and expression trees
/// - types: Primitive types, operators and literal values
pub mod ast;
pub mod types;
