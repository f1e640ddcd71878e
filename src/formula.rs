use std::collections::HashMap;

use crate::{
    env::registry::Registry,
    error::FormulaError,
    interpreter::{
        evaluator::evaluate,
        lexer::{Token, tokenize},
        parser::parse,
    },
};

/// A parsed, reusable formula.
///
/// A `Formula` owns the reverse-Polish token queue produced by one parse of a
/// source expression and keeps a reference to the registry it was parsed
/// against. Parsing happens once, in [`Formula::new`]; after that the formula
/// may be evaluated any number of times, each time with a fresh variable
/// overlay, without re-parsing.
///
/// The queue is immutable after construction and evaluation never mutates the
/// registry, so a `Formula` can be evaluated from several threads at once
/// with independent overlays.
///
/// # Example
/// ```
/// use std::collections::HashMap;
///
/// use formulon::{env::registry::Registry, formula::Formula};
///
/// let registry = Registry::with_builtins();
/// let formula = Formula::new("2x + 1", &registry).unwrap();
///
/// let mut x = HashMap::new();
/// x.insert("x".to_owned(), 5.0);
/// assert_eq!(formula.evaluate_with(&x).unwrap(), 11.0);
///
/// x.insert("x".to_owned(), -1.0);
/// assert_eq!(formula.evaluate_with(&x).unwrap(), -1.0);
/// ```
pub struct Formula<'r> {
    registry: &'r Registry,
    queue:    Vec<Token>,
}

impl<'r> Formula<'r> {
    /// Parses a source expression against a registry.
    ///
    /// # Parameters
    /// - `source`: The formula text.
    /// - `registry`: The environment the formula is parsed against and later
    ///   evaluated with.
    ///
    /// # Errors
    /// - `FormulaError::Lex` if the text cannot be tokenized.
    /// - `FormulaError::Syntax` for mismatched parentheses or stray
    ///   separators.
    /// - `FormulaError::UnknownSymbol` for an operator symbol the registry
    ///   does not define.
    pub fn new(source: &str, registry: &'r Registry) -> Result<Self, FormulaError> {
        let tokens = tokenize(source)?;
        let queue = parse(&tokens, registry)?;

        Ok(Self { registry, queue })
    }

    /// Evaluates the formula with no variable overlay.
    ///
    /// # Errors
    /// Returns an error if a name cannot be resolved or the program does not
    /// reduce to a single value; see
    /// [`evaluate`](crate::interpreter::evaluator::evaluate).
    pub fn evaluate(&self) -> Result<f64, FormulaError> {
        self.evaluate_with(&HashMap::new())
    }

    /// Evaluates the formula with a variable overlay.
    ///
    /// Overlay entries are matched case-insensitively and shadow the
    /// registry's variables for this call only.
    ///
    /// # Errors
    /// Returns an error if a name cannot be resolved or the program does not
    /// reduce to a single value; see
    /// [`evaluate`](crate::interpreter::evaluator::evaluate).
    pub fn evaluate_with(&self, variables: &HashMap<String, f64>) -> Result<f64, FormulaError> {
        evaluate(&self.queue, self.registry, variables)
    }

    /// Returns the reverse-Polish token queue this formula runs.
    #[must_use]
    pub fn rpn(&self) -> &[Token] {
        &self.queue
    }

    /// Returns the registry this formula was parsed against.
    #[must_use]
    pub const fn registry(&self) -> &Registry {
        self.registry
    }
}
