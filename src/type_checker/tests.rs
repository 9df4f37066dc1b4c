//! Unit tests for the type checker module.
//!
//! This module contains tests for:
//! - The operator rule table
//! - Symbol table declaration and lookup
//! - Typed AST construction
//! - Whole-run analysis and diagnostics

use pretty_assertions::assert_eq;

use super::{
    analyzer::{analyze, analyze_with, SemanticAnalyzer},
    rules::type_of,
    symbol_table::SymbolTable,
    type_checker::{validate_name, TypeChecker},
    typed_ast::{TypedExpr, TypedStmt},
};
use crate::{
    ast::{
        ast::{Expression, Statement},
        types::{Operator, PrimitiveType},
    },
    errors::errors::{ErrorImpl, ErrorKind},
    Position,
};

const TYPES: [PrimitiveType; 3] = [PrimitiveType::Int, PrimitiveType::Float, PrimitiveType::Str];
const OPERATORS: [Operator; 4] = [Operator::Add, Operator::Sub, Operator::Mul, Operator::Div];

#[test]
fn test_numeric_operations_never_fail() {
    for left in [PrimitiveType::Int, PrimitiveType::Float] {
        for right in [PrimitiveType::Int, PrimitiveType::Float] {
            for operator in OPERATORS {
                assert!(
                    type_of(left, right, operator).is_some(),
                    "{} {} {} should be allowed",
                    left,
                    operator,
                    right
                );
            }
            assert_eq!(type_of(left, right, Operator::Div), Some(PrimitiveType::Float));
        }
    }
}

#[test]
fn test_numeric_promotion() {
    use PrimitiveType::*;

    assert_eq!(type_of(Int, Int, Operator::Add), Some(Int));
    assert_eq!(type_of(Int, Int, Operator::Sub), Some(Int));
    assert_eq!(type_of(Int, Int, Operator::Mul), Some(Int));
    assert_eq!(type_of(Float, Float, Operator::Add), Some(Float));
    assert_eq!(type_of(Int, Float, Operator::Sub), Some(Float));
    assert_eq!(type_of(Float, Int, Operator::Mul), Some(Float));
}

#[test]
fn test_string_rules() {
    use PrimitiveType::*;

    assert_eq!(type_of(Str, Str, Operator::Add), Some(Str));
    assert_eq!(type_of(Str, Int, Operator::Mul), Some(Str));
    assert_eq!(type_of(Int, Str, Operator::Mul), Some(Str));

    assert_eq!(type_of(Str, Str, Operator::Sub), None);
    assert_eq!(type_of(Str, Str, Operator::Mul), None);
    assert_eq!(type_of(Str, Str, Operator::Div), None);
    assert_eq!(type_of(Str, Int, Operator::Add), None);
    assert_eq!(type_of(Int, Str, Operator::Add), None);
    assert_eq!(type_of(Str, Float, Operator::Mul), None);
    assert_eq!(type_of(Float, Str, Operator::Mul), None);
    assert_eq!(type_of(Str, Int, Operator::Div), None);
}

#[test]
fn test_every_str_with_float_combination_fails() {
    for operator in OPERATORS {
        assert_eq!(type_of(PrimitiveType::Str, PrimitiveType::Float, operator), None);
        assert_eq!(type_of(PrimitiveType::Float, PrimitiveType::Str, operator), None);
    }
}

#[test]
fn test_rule_table_covers_all_pairs() {
    let mut allowed = 0;
    for left in TYPES {
        for right in TYPES {
            for operator in OPERATORS {
                if type_of(left, right, operator).is_some() {
                    allowed += 1;
                }
            }
        }
    }

    // 16 numeric combinations, str + str, str * int, int * str
    assert_eq!(allowed, 19);
}

#[test]
fn test_symbol_table_declare_and_lookup() {
    let mut table = SymbolTable::new();
    table
        .declare("x".to_string(), PrimitiveType::Int, Expression::int(5), Position::line(1))
        .unwrap();

    let entry = table.lookup("x", Position::line(2)).unwrap();
    assert_eq!(entry.var_type, PrimitiveType::Int);
    assert_eq!(entry.value, Expression::int(5));
}

#[test]
fn test_symbol_table_rejects_duplicates() {
    let mut table = SymbolTable::new();
    table
        .declare("x".to_string(), PrimitiveType::Int, Expression::int(5), Position::line(1))
        .unwrap();

    let error = table
        .declare("x".to_string(), PrimitiveType::Float, Expression::float(2.0), Position::line(2))
        .unwrap_err();

    assert_eq!(error.get_kind(), ErrorKind::DuplicateDeclaration);
    assert_eq!(error.get_line(), 2);
    assert_eq!(table.len(), 1);
    assert_eq!(table.get("x").unwrap().var_type, PrimitiveType::Int);
}

#[test]
fn test_symbol_table_lookup_missing() {
    let table = SymbolTable::new();
    let error = table.lookup("y", Position::line(1)).unwrap_err();

    assert_eq!(error.get_kind(), ErrorKind::UndeclaredVariable);
    assert!(table.is_empty());
}

#[test]
fn test_symbol_table_render_keeps_declaration_order() {
    let mut table = SymbolTable::new();
    table
        .declare("zeta".to_string(), PrimitiveType::Str, Expression::string("hi"), Position::line(1))
        .unwrap();
    table
        .declare("alpha".to_string(), PrimitiveType::Float, Expression::float(2.0), Position::line(2))
        .unwrap();
    table
        .declare(
            "mid".to_string(),
            PrimitiveType::Int,
            Expression::binary(Expression::variable("a"), Operator::Add, Expression::int(1)),
            Position::line(3),
        )
        .unwrap();

    assert_eq!(
        table.render(),
        [
            "Variable   Type       Value",
            "zeta       str        hi",
            "alpha      float      2.0",
            "mid        int        a + 1",
        ]
        .join("\n")
    );
}

#[test]
fn test_symbol_table_render_escapes_control_characters() {
    let mut table = SymbolTable::new();
    table
        .declare("s".to_string(), PrimitiveType::Str, Expression::string("a\nb\tc"), Position::line(1))
        .unwrap();
    table
        .declare("t".to_string(), PrimitiveType::Int, Expression::int(1), Position::line(2))
        .unwrap();

    let rendered = table.render();
    assert_eq!(rendered.lines().count(), 1 + table.len());
    assert_eq!(rendered.lines().nth(1), Some("s          str        a\\nb\\tc"));
}

#[test]
fn test_validate_name() {
    assert!(validate_name("x").is_ok());
    assert!(validate_name("_tmp1").is_ok());
    assert!(validate_name("").is_err());
    assert!(validate_name("1x").is_err());
    assert!(validate_name("a b").is_err());
}

#[test]
fn test_check_expr_builds_typed_tree() {
    let mut table = SymbolTable::new();
    table
        .declare("x".to_string(), PrimitiveType::Int, Expression::int(5), Position::line(1))
        .unwrap();

    let checker = TypeChecker::new(&table, 2);
    let expr = Expression::binary(Expression::variable("x"), Operator::Mul, Expression::float(1.5));
    let typed = checker.check_expr(&expr).unwrap();

    assert_eq!(typed.get_type(), PrimitiveType::Float);
    match &typed {
        TypedExpr::Binary { left, right, .. } => {
            assert_eq!(left.get_type(), PrimitiveType::Int);
            assert_eq!(right.get_type(), PrimitiveType::Float);
        }
        other => panic!("Expected binary node, got {:?}", other),
    }
    assert_eq!(typed.to_expression(), expr);
}

#[test]
fn test_check_expr_reports_nested_mismatch() {
    let table = SymbolTable::new();
    let checker = TypeChecker::new(&table, 4);
    let expr = Expression::binary(
        Expression::int(1),
        Operator::Add,
        Expression::binary(Expression::string("a"), Operator::Sub, Expression::int(2)),
    );

    let error = checker.check_expr(&expr).unwrap_err();
    assert_eq!(error.get_line(), 4);
    match error.get_internal_error() {
        ErrorImpl::OperatorTypeMismatch {
            left,
            operator,
            right,
            expression,
        } => {
            assert_eq!(*left, PrimitiveType::Str);
            assert_eq!(*operator, Operator::Sub);
            assert_eq!(*right, PrimitiveType::Int);
            assert_eq!(expression, "\"a\" - 2");
        }
        other => panic!("Expected operator type mismatch, got {:?}", other),
    }
}

#[test]
fn test_check_stmt_does_not_declare() {
    let table = SymbolTable::new();
    let checker = TypeChecker::new(&table, 1);
    let node = checker
        .check_stmt(&Statement::assignment("x", PrimitiveType::Int, Expression::int(5)))
        .unwrap();

    assert_eq!(node.to_string(), "Assignment(x, Type: int)");
    assert!(table.is_empty());
}

#[test]
fn test_non_finite_float_is_invalid_input() {
    let table = SymbolTable::new();
    let checker = TypeChecker::new(&table, 1);
    let error = checker.check_expr(&Expression::float(f64::NAN)).unwrap_err();

    assert_eq!(error.get_kind(), ErrorKind::InvalidInputShape);
}

#[test]
fn test_scenario_declare_then_print() {
    let analysis = analyze(&[
        Statement::assignment("x", PrimitiveType::Int, Expression::int(5)),
        Statement::print("x"),
    ]);

    assert!(analysis.is_clean());
    assert_eq!(analysis.symbol_table.render(), "Variable   Type       Value\nx          int        5");
    assert_eq!(
        analysis.render_ast(),
        "Assignment(x, Type: int)\nPrint(x, Type: int)"
    );
}

#[test]
fn test_scenario_redeclaration() {
    let analysis = analyze(&[
        Statement::assignment("x", PrimitiveType::Int, Expression::int(5)),
        Statement::assignment("x", PrimitiveType::Float, Expression::float(2.0)),
    ]);

    assert_eq!(analysis.diagnostics.len(), 1);
    assert_eq!(
        analysis.diagnostics[0].to_string(),
        "Error on line 2: 'x' already declared"
    );
    assert_eq!(analysis.symbol_table.len(), 1);
    assert_eq!(analysis.symbol_table.get("x").unwrap().var_type, PrimitiveType::Int);
    assert_eq!(analysis.symbol_table.get("x").unwrap().value, Expression::int(5));
}

#[test]
fn test_scenario_print_undeclared() {
    let analysis = analyze(&[Statement::print("y")]);

    assert_eq!(analysis.diagnostics.len(), 1);
    assert_eq!(
        analysis.diagnostics[0].to_string(),
        "Error on line 1: 'y' used before declaration"
    );
    assert!(analysis.symbol_table.is_empty());
    assert!(analysis.typed_ast.is_empty());
}

#[test]
fn test_scenario_int_plus_str() {
    let analysis = analyze(&[Statement::print_expr(Expression::binary(
        Expression::int(5),
        Operator::Add,
        Expression::string("a"),
    ))]);

    assert_eq!(analysis.diagnostics.len(), 1);
    let diagnostic = &analysis.diagnostics[0];
    assert_eq!(diagnostic.get_kind(), ErrorKind::TypeMismatch);
    assert_eq!(
        diagnostic.to_string(),
        "Error on line 1: type mismatch in '5 + \"a\"' (int + str not allowed)"
    );
}

#[test]
fn test_scenario_string_repetition() {
    let analysis = analyze(&[Statement::assignment(
        "s",
        PrimitiveType::Str,
        Expression::binary(Expression::string("a"), Operator::Mul, Expression::int(3)),
    )]);

    assert!(analysis.is_clean());
    assert_eq!(analysis.typed_ast[0].get_type(), PrimitiveType::Str);
}

#[test]
fn test_declared_type_must_match_value() {
    let analysis = analyze(&[
        Statement::assignment(
            "ratio",
            PrimitiveType::Int,
            Expression::binary(Expression::int(1), Operator::Div, Expression::int(2)),
        ),
        Statement::print("ratio"),
    ]);

    assert_eq!(analysis.diagnostics.len(), 2);
    assert!(matches!(
        analysis.diagnostics[0].get_internal_error(),
        ErrorImpl::DeclaredTypeMismatch {
            declared: PrimitiveType::Int,
            received: PrimitiveType::Float,
            ..
        }
    ));
    assert_eq!(analysis.diagnostics[1].get_kind(), ErrorKind::UndeclaredVariable);
    assert!(analysis.symbol_table.is_empty());
}

#[test]
fn test_failed_assignment_leaves_no_entry() {
    let analysis = analyze(&[Statement::assignment(
        "x",
        PrimitiveType::Int,
        Expression::binary(Expression::variable("x"), Operator::Add, Expression::int(1)),
    )]);

    assert_eq!(analysis.diagnostics.len(), 1);
    assert_eq!(analysis.diagnostics[0].get_kind(), ErrorKind::UndeclaredVariable);
    assert!(analysis.symbol_table.is_empty());
}

#[test]
fn test_invalid_names_are_reported() {
    let analysis = analyze(&[
        Statement::assignment("", PrimitiveType::Int, Expression::int(1)),
        Statement::print("not a name"),
    ]);

    assert_eq!(analysis.diagnostics.len(), 2);
    for diagnostic in analysis.diagnostics.iter() {
        assert_eq!(diagnostic.get_kind(), ErrorKind::InvalidInputShape);
    }
}

#[test]
fn test_diagnostic_and_node_counts() {
    let statements = vec![
        Statement::assignment("a", PrimitiveType::Int, Expression::int(1)),
        Statement::assignment("b", PrimitiveType::Float, Expression::float(2.5)),
        Statement::assignment("a", PrimitiveType::Int, Expression::int(3)),
        Statement::print("c"),
        Statement::assignment(
            "c",
            PrimitiveType::Float,
            Expression::binary(Expression::variable("a"), Operator::Add, Expression::variable("b")),
        ),
        Statement::print("c"),
        Statement::print_expr(Expression::binary(
            Expression::variable("a"),
            Operator::Sub,
            Expression::string("x"),
        )),
    ];

    let mut reported = vec![];
    let analysis = analyze_with(&statements, |error| reported.push(error.get_line()));

    assert_eq!(reported, vec![3, 4, 7]);
    assert_eq!(analysis.diagnostics.len(), 3);
    assert_eq!(analysis.typed_ast.len(), statements.len() - 3);
    assert_eq!(
        analysis.render_diagnostics(),
        [
            "Error on line 3: 'a' already declared",
            "Error on line 4: 'c' used before declaration",
            "Error on line 7: type mismatch in 'a - \"x\"' (int - str not allowed)",
        ]
        .join("\n")
    );
}

#[test]
fn test_typed_nodes_recheck_to_same_type() {
    let analysis = analyze(&[
        Statement::assignment("a", PrimitiveType::Int, Expression::int(2)),
        Statement::assignment("b", PrimitiveType::Float, Expression::float(0.5)),
        Statement::assignment(
            "c",
            PrimitiveType::Float,
            Expression::binary(
                Expression::binary(Expression::variable("a"), Operator::Mul, Expression::variable("b")),
                Operator::Div,
                Expression::variable("a"),
            ),
        ),
        Statement::assignment(
            "s",
            PrimitiveType::Str,
            Expression::binary(
                Expression::string("ab"),
                Operator::Add,
                Expression::binary(Expression::variable("a"), Operator::Mul, Expression::string("c")),
            ),
        ),
    ]);

    assert!(analysis.is_clean());
    for node in analysis.typed_ast.iter() {
        if let TypedStmt::Assignment(assignment) = node {
            assert_eq!(assignment.value.recheck().unwrap(), assignment.var_type);
            assert_eq!(assignment.value.recheck().unwrap(), assignment.value.recheck().unwrap());
        }
    }
}

#[test]
fn test_print_compound_target() {
    let analysis = analyze(&[
        Statement::assignment("x", PrimitiveType::Int, Expression::int(5)),
        Statement::print_expr(Expression::binary(
            Expression::variable("x"),
            Operator::Div,
            Expression::int(2),
        )),
    ]);

    assert!(analysis.is_clean());
    assert_eq!(analysis.typed_ast[1].to_string(), "Print(x / 2, Type: float)");
}

#[test]
fn test_independent_runs_do_not_share_state() {
    let mut first = SemanticAnalyzer::new();
    let mut second = SemanticAnalyzer::new();

    first.analyze(
        &[Statement::assignment("x", PrimitiveType::Int, Expression::int(1))],
        |_| {},
    );
    second.analyze(&[Statement::print("x")], |_| {});

    assert_eq!(first.symbol_table().len(), 1);
    assert!(first.diagnostics().is_empty());
    assert!(second.symbol_table().is_empty());
    assert_eq!(second.diagnostics().len(), 1);
}

#[test]
fn test_line_numbers_continue_across_batches() {
    let mut analyzer = SemanticAnalyzer::new();
    analyzer.analyze(
        &[Statement::assignment("x", PrimitiveType::Int, Expression::int(1))],
        |_| {},
    );
    assert_eq!(analyzer.line_number(), 2);

    analyzer.analyze(&[Statement::print("y")], |_| {});
    let analysis = analyzer.finish();

    assert_eq!(analysis.diagnostics[0].get_line(), 2);
}
