/// Lexical errors.
///
/// Defines the error type raised when raw input cannot be tokenized at all,
/// either because it is empty or because it contains characters no lexical
/// rule covers.
pub mod lex_error;
/// Structural errors.
///
/// Contains the error type for token sequences that are lexically fine but
/// structurally invalid: mismatched parentheses, stray separators, or
/// programs whose evaluation stack does not reduce to a single value.
pub mod syntax_error;
/// Name-resolution errors.
///
/// Contains the error type raised when an operator symbol, function name, or
/// variable name is not present in the registry (or overlay) being consulted.
pub mod unknown_symbol;

/// Unified error type.
///
/// Wraps the three error kinds above into a single enum so that the public
/// parse and evaluate entry points return one error type while keeping each
/// kind individually matchable.
pub mod formula_error;

pub use formula_error::FormulaError;
pub use lex_error::LexError;
pub use syntax_error::SyntaxError;
pub use unknown_symbol::UnknownSymbol;
