//! # formulon
//!
//! formulon is an arithmetic-formula interpreter written in Rust.
//! It tokenizes an expression such as `2 * (3 + 4) / sin(pi)`, parses it into
//! operator-precedence-correct postfix form, and evaluates it against a
//! configurable environment of operators, functions, and variables.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use std::collections::HashMap;

use crate::{env::registry::Registry, formula::Formula};

/// Defines the environment expressions are interpreted against.
///
/// This module declares the operator and function descriptors and the
/// registry that holds them together with named variables. A registry
/// parameterizes both parsing (precedence, associativity, which identifiers
/// are functions) and evaluation (handlers, variable values).
///
/// # Responsibilities
/// - Describes operators and functions as immutable records with handlers.
/// - Maps names to descriptors and values, with well-defined case rules.
/// - Provides the standard builtin environment.
pub mod env;
/// Provides unified error types for lexing, parsing, and evaluation.
///
/// This module defines all errors that can be raised while interpreting a
/// formula. It standardizes error reporting across the pipeline stages and
/// keeps the three error kinds individually matchable.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Carries the offending text or name for user feedback.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Defines the parsed, reusable formula type.
///
/// A formula is parsed once against a registry and owns the resulting
/// reverse-Polish token queue; it can then be evaluated repeatedly with
/// different variable overlays.
///
/// # Responsibilities
/// - Couples an RPN queue with the registry it was parsed against.
/// - Re-evaluates without re-parsing.
pub mod formula;
/// Orchestrates the interpretation pipeline.
///
/// This module ties together the lexer, the shunting-yard parser, and the
/// stack-machine evaluator that turn formula text into a numeric result.
///
/// # Responsibilities
/// - Coordinates the three pipeline stages.
/// - Exposes each stage for callers that want to drive it directly.
pub mod interpreter;

/// Parses and evaluates an expression in one shot against the standard
/// builtin environment.
///
/// Equivalent to constructing a [`Formula`] with
/// [`Registry::with_builtins`] and evaluating it once without an overlay.
/// Callers that evaluate repeatedly, need variables, or extend the symbol set
/// should hold their own [`Registry`] and use [`Formula`] or
/// [`evaluate_expression_with`] instead.
///
/// # Errors
/// Returns an error if the expression cannot be tokenized, is structurally
/// invalid, or uses a name the builtin environment does not define.
///
/// # Examples
/// ```
/// use formulon::evaluate_expression;
///
/// assert_eq!(evaluate_expression("2 * (3 + 4)").unwrap(), 14.0);
/// assert_eq!(evaluate_expression("2^3^2").unwrap(), 512.0);
///
/// // Structurally broken input is rejected, not best-effort evaluated.
/// assert!(evaluate_expression("2 + (3").is_err());
/// ```
pub fn evaluate_expression(source: &str) -> Result<f64, error::FormulaError> {
    let registry = Registry::with_builtins();

    Formula::new(source, &registry)?.evaluate()
}

/// Parses and evaluates an expression in one shot with an explicit variable
/// overlay and registry.
///
/// # Errors
/// Returns an error if the expression cannot be tokenized, is structurally
/// invalid, or uses a name that neither the overlay nor the registry defines.
///
/// # Examples
/// ```
/// use std::collections::HashMap;
///
/// use formulon::{env::registry::Registry, evaluate_expression_with};
///
/// let registry = Registry::with_builtins();
/// let mut variables = HashMap::new();
/// variables.insert("x".to_owned(), 5.0);
///
/// assert_eq!(evaluate_expression_with("2x", &variables, &registry).unwrap(),
///            10.0);
/// ```
pub fn evaluate_expression_with(source: &str,
                                variables: &HashMap<String, f64>,
                                registry: &Registry)
                                -> Result<f64, error::FormulaError> {
    Formula::new(source, registry)?.evaluate_with(variables)
}
