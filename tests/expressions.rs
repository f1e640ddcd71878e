use std::collections::HashMap;

use formulon::{
    env::{
        function::Function,
        operator::{Associativity, Operator},
        registry::Registry,
    },
    error::{FormulaError, LexError, SyntaxError, UnknownSymbol},
    evaluate_expression, evaluate_expression_with,
    formula::Formula,
};

fn eval(source: &str) -> f64 {
    evaluate_expression(source).unwrap_or_else(|e| panic!("'{source}' failed: {e}"))
}

fn eval_with(source: &str, variables: &[(&str, f64)]) -> f64 {
    let variables: HashMap<String, f64> = variables.iter()
                                                   .map(|(name, value)| {
                                                       ((*name).to_owned(), *value)
                                                   })
                                                   .collect();
    let registry = Registry::with_builtins();

    evaluate_expression_with(source, &variables, &registry)
        .unwrap_or_else(|e| panic!("'{source}' failed: {e}"))
}

fn eval_err(source: &str) -> FormulaError {
    match evaluate_expression(source) {
        Ok(value) => panic!("'{source}' evaluated to {value} but was expected to fail"),
        Err(e) => e,
    }
}

#[test]
fn simple_operations() {
    assert_eq!(eval("2 + 3"), 2.0 + 3.0);
    assert_eq!(eval("10 - 4"), 10.0 - 4.0);
    assert_eq!(eval("8.5 * 5"), 8.5 * 5.0);
    assert_eq!(eval("64 / 8"), 64.0 / 8.0);
    assert_eq!(eval("2^10"), 1024.0);
}

#[test]
fn operators_match_native_float_semantics() {
    assert_eq!(eval("1.5 + 2.25"), 1.5 + 2.25);
    assert_eq!(eval("7.5 - 0.125"), 7.5 - 0.125);
    assert_eq!(eval("2.5 * 2.5"), 2.5 * 2.5);
    assert_eq!(eval("1 / 3"), 1.0 / 3.0);
    assert_eq!(eval("2 ^ 0.5"), 2.0_f64.powf(0.5));
}

#[test]
fn expressions_with_parentheses() {
    assert_eq!(eval("2 * (3 + 4)"), 14.0);
    assert_eq!(eval("(2 * 3) + 4"), 10.0);
    assert_eq!(eval("(3 - 2) * (4 + 5)"), 9.0);
    assert_eq!(eval("(2 * (3 + 4) + 8) / 5"), (2.0 * (3.0 + 4.0) + 8.0) / 5.0);
    assert_eq!(eval("((2))"), 2.0);
}

#[test]
fn exponentiation_is_right_associative() {
    assert_eq!(eval("2^3^2"), 512.0);
    assert_eq!(eval("(2^3)^2"), 64.0);
}

#[test]
fn implicit_multiplication() {
    assert_eq!(eval("2(3 + 4)"), 14.0);
    assert_eq!(eval("(2)(3)"), 6.0);
    assert_eq!(eval("(2)(3)(4)"), 24.0);
    assert_eq!(eval("2pi"), 2.0 * std::f64::consts::PI);
    assert_eq!(eval("2 sin(0) + 1"), 1.0);
    assert_eq!(eval_with("2x", &[("x", 5.0)]), 10.0);
    assert_eq!(eval_with("x y", &[("x", 3.0), ("y", 4.0)]), 12.0);
}

#[test]
fn whitespace_only_separates() {
    assert_eq!(eval("3+6"), 9.0);
    assert_eq!(eval("3 + 6"), 9.0);
    assert_eq!(eval("  3\t+\n6  "), 9.0);
}

#[test]
fn unary_minus() {
    assert_eq!(eval("-5"), -5.0);
    assert_eq!(eval("3*-1"), -3.0);
    assert_eq!(eval("3 * - 1"), -3.0);
    assert_eq!(eval("(-5)"), -5.0);
    assert_eq!(eval("-(2 + 3)"), -5.0);
    assert_eq!(eval("-sin(0)"), 0.0);
    assert_eq!(eval("2^-1"), 0.5);
    assert_eq!(eval("min(-3, 2)"), -3.0);
    assert_eq!(eval("2--3"), 5.0);
    // Negation binds looser than exponentiation, like a leading `-` in
    // mathematical writing.
    assert_eq!(eval("-2^2"), -4.0);
    assert_eq!(eval("(-2)^2"), 4.0);
}

#[test]
fn subtraction_is_not_negation() {
    assert_eq!(eval("5-2"), 3.0);
    assert_eq!(eval("5 -2"), 3.0);
    assert_eq!(eval("(3)-2"), 1.0);
    assert_eq!(eval("max(1, 5)-2"), 3.0);
    assert_eq!(eval_with("x-2", &[("x", 7.0)]), 5.0);
}

#[test]
fn builtin_functions() {
    assert_eq!(eval("sqrt(16)"), 4.0);
    assert_eq!(eval("min(2, 5)"), 2.0);
    assert_eq!(eval("max(2, 5)"), 5.0);
    assert_eq!(eval("cos(0)"), 1.0);
    assert_eq!(eval("tan(0)"), 0.0);
    assert!(eval("sin(pi)").abs() < 1e-15);
}

#[test]
fn names_are_case_insensitive() {
    assert_eq!(eval("SQRT(16)"), 4.0);
    assert_eq!(eval("Min(2, 5)"), 2.0);
    assert_eq!(eval("PI"), std::f64::consts::PI);
    assert_eq!(eval_with("X + x", &[("x", 1.0)]), 2.0);
}

#[test]
fn constants_and_overlay_precedence() {
    assert_eq!(eval("pi"), std::f64::consts::PI);
    assert_eq!(eval("e"), std::f64::consts::E);
    // The overlay shadows the registry variable without mutating it.
    assert_eq!(eval_with("pi", &[("pi", 1.0)]), 1.0);
    assert_eq!(eval("pi"), std::f64::consts::PI);
}

#[test]
fn formulas_are_reusable() {
    let registry = Registry::with_builtins();
    let formula = Formula::new("x^2 + 1", &registry).expect("parse failed");

    for x in [-2.0, 0.0, 3.5] {
        let mut variables = HashMap::new();
        variables.insert("x".to_owned(), x);
        assert_eq!(formula.evaluate_with(&variables).expect("evaluation failed"),
                   x * x + 1.0);
    }
}

#[test]
fn parsing_and_evaluation_are_idempotent() {
    let registry = Registry::with_builtins();
    let first = Formula::new("2 * (3 + 4) / sin(pi)", &registry).expect("parse failed");
    let second = Formula::new("2 * (3 + 4) / sin(pi)", &registry).expect("parse failed");

    assert_eq!(first.rpn(), second.rpn());
    assert_eq!(first.evaluate().expect("evaluation failed"),
               first.evaluate().expect("evaluation failed"));
}

#[test]
fn concurrent_evaluation() {
    let registry = Registry::with_builtins();
    let formula = Formula::new("x^2 + 1", &registry).expect("parse failed");

    std::thread::scope(|scope| {
        for i in 0..4 {
            let formula = &formula;
            scope.spawn(move || {
                let mut variables = HashMap::new();
                variables.insert("x".to_owned(), f64::from(i));
                assert_eq!(formula.evaluate_with(&variables).expect("evaluation failed"),
                           f64::from(i * i + 1));
            });
        }
    });
}

#[test]
fn custom_registry_extends_the_environment() {
    let mut registry = Registry::with_builtins();
    registry.define_operator(Operator::new("%", 2, Associativity::Left, 3, |args| {
                 args[0] % args[1]
             }));
    registry.define_function(Function::new("avg", 2, |args| (args[0] + args[1]) / 2.0));
    registry.define_function(Function::new("sub", 2, |args| args[0] - args[1]));
    registry.define_variable("answer", 42.0);

    let empty = HashMap::new();
    assert_eq!(evaluate_expression_with("7 % 4", &empty, &registry).unwrap(), 3.0);
    assert_eq!(evaluate_expression_with("avg(1, 5)", &empty, &registry).unwrap(), 3.0);
    // Arguments arrive in source order: the most recently pushed value is
    // the last argument.
    assert_eq!(evaluate_expression_with("sub(10, 4)", &empty, &registry).unwrap(), 6.0);
    assert_eq!(evaluate_expression_with("answer / 2", &empty, &registry).unwrap(), 21.0);
}

#[test]
fn later_definitions_overwrite_earlier_ones() {
    let mut registry = Registry::with_builtins();
    registry.define_variable("pi", 3.0);
    registry.define_function(Function::new("sqrt", 1, |args| args[0]));

    let empty = HashMap::new();
    assert_eq!(evaluate_expression_with("pi", &empty, &registry).unwrap(), 3.0);
    assert_eq!(evaluate_expression_with("sqrt(16)", &empty, &registry).unwrap(), 16.0);
}

#[test]
fn sandboxed_registry_rejects_unregistered_symbols() {
    let registry = Registry::new();
    let empty = HashMap::new();

    let error = evaluate_expression_with("1 + 1", &empty, &registry)
        .expect_err("'+' should be unknown in an empty registry");
    assert!(matches!(error,
                     FormulaError::UnknownSymbol(UnknownSymbol::Operator { .. })));
}

#[test]
fn mismatched_parentheses_are_rejected() {
    assert!(matches!(eval_err("2+(3"),
                     FormulaError::Syntax(SyntaxError::MismatchedParentheses)));
    assert!(matches!(eval_err("2)"),
                     FormulaError::Syntax(SyntaxError::MismatchedParentheses)));
    assert!(matches!(eval_err("min(2, 5"),
                     FormulaError::Syntax(SyntaxError::MismatchedParentheses)));
    // A separator outside any group drains the stack dry.
    assert!(matches!(eval_err("1, 2"),
                     FormulaError::Syntax(SyntaxError::MismatchedParentheses)));
}

#[test]
fn non_reducing_programs_are_rejected() {
    assert!(matches!(eval_err("2 3"),
                     FormulaError::Syntax(SyntaxError::InvalidExpression)));
    assert!(matches!(eval_err("2 +"),
                     FormulaError::Syntax(SyntaxError::InvalidExpression)));
    assert!(matches!(eval_err("*2"),
                     FormulaError::Syntax(SyntaxError::InvalidExpression)));
}

#[test]
fn unknown_names_are_rejected() {
    assert!(matches!(eval_err("2+foo_unknown(3)"),
                     FormulaError::UnknownSymbol(UnknownSymbol::Variable { .. })));
    assert!(matches!(eval_err("nope + 1"),
                     FormulaError::UnknownSymbol(UnknownSymbol::Variable { .. })));
    assert!(matches!(eval_err("2 $ 3"),
                     FormulaError::UnknownSymbol(UnknownSymbol::Operator { .. })));
}

#[test]
fn untokenizable_input_is_rejected() {
    assert!(matches!(eval_err(""), FormulaError::Lex(LexError::Empty)));
    assert!(matches!(eval_err("   "), FormulaError::Lex(LexError::Empty)));
    assert!(matches!(eval_err("_x + 1"),
                     FormulaError::Lex(LexError::UnrecognizedInput { .. })));
}
