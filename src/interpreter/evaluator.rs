use std::collections::HashMap;

use crate::{
    env::registry::Registry,
    error::{FormulaError, SyntaxError, UnknownSymbol},
    interpreter::lexer::Token,
};

/// Result type used by the evaluator.
pub type EvalResult<T> = Result<T, FormulaError>;

/// Executes a reverse-Polish token queue and returns the final value.
///
/// The evaluator is a plain stack machine. Numbers push their parsed value.
/// Identifiers are resolved case-insensitively, in this order: the caller's
/// `variables` overlay, then the registry's variables, then the registry's
/// functions; functions pop their arity's worth of arguments, with the most
/// recently pushed value as the last argument. Operators pop their operands
/// the same way, so for binary operators the first-popped value is the
/// right-hand side and `a - b` computes left minus right.
///
/// The overlay never mutates the registry; it only shadows its variables for
/// the duration of this call.
///
/// # Parameters
/// - `queue`: The reverse-Polish queue, as produced by
///   [`parse`](crate::interpreter::parser::parse).
/// - `registry`: The environment to resolve names against.
/// - `variables`: The per-call variable overlay.
///
/// # Returns
/// The single value left on the stack after the whole queue ran.
///
/// # Errors
/// - `UnknownSymbol` if a name resolves to neither an overlay entry, a
///   registry variable, a registry function, nor a registry operator.
/// - `SyntaxError::InvalidExpression` if the stack does not reduce to
///   exactly one value, such as for `2 2`.
pub fn evaluate(queue: &[Token],
                registry: &Registry,
                variables: &HashMap<String, f64>)
                -> EvalResult<f64> {
    let overlay: HashMap<String, f64> = variables.iter()
                                                 .map(|(name, value)| {
                                                     (name.to_lowercase(), *value)
                                                 })
                                                 .collect();
    let mut stack: Vec<f64> = Vec::new();

    for token in queue {
        match token {
            Token::Number(text) => {
                let value = text.parse::<f64>()
                                .map_err(|_| SyntaxError::InvalidExpression)?;
                stack.push(value);
            },
            Token::Identifier(name) => {
                let key = name.to_lowercase();

                if let Some(value) = overlay.get(&key) {
                    stack.push(*value);
                } else if registry.is_variable(&key) {
                    stack.push(registry.get_variable(&key)?);
                } else if registry.is_function(&key) {
                    registry.get_function(&key)?.apply_to_stack(&mut stack)?;
                } else {
                    return Err(UnknownSymbol::Variable { name: name.clone() }.into());
                }
            },
            Token::Operator(symbol) => {
                registry.get_operator(symbol)?.apply_to_stack(&mut stack)?;
            },
            // A parser-produced queue never contains structural tokens; a
            // hand-built one that does is an ill-formed program.
            Token::LeftParen | Token::RightParen | Token::Separator => {
                return Err(SyntaxError::InvalidExpression.into());
            },
        }
    }

    match stack.as_slice() {
        [value] => Ok(*value),
        _ => Err(SyntaxError::InvalidExpression.into()),
    }
}
