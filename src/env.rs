/// Operator descriptors.
///
/// Defines the immutable record describing an infix (or synthesized unary)
/// operator: its symbol, arity, associativity, precedence, and the numeric
/// handler invoked during evaluation.
pub mod operator;

/// Function descriptors.
///
/// Defines the immutable record describing a named function: its
/// case-insensitive name, arity, and numeric handler.
pub mod function;

/// The environment registry.
///
/// Holds the named operators, functions, and variables that parameterize both
/// parsing and evaluation, together with the standard builtin environment.
pub mod registry;
