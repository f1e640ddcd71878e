use crate::error::SyntaxError;

/// The reserved symbol under which the unary negation operator is registered.
///
/// Operator tokens produced by the lexer are always runs of non-alphanumeric
/// characters, so this symbol can never appear in source text; it is only ever
/// synthesized by the parser when it resolves a leading minus sign.
pub const NEGATION_SYMBOL: &str = "neg";

/// The numeric handler attached to an operator.
///
/// Receives the popped operands in left-to-right order and returns the result
/// to push. Handlers must be pure; this is trusted, not validated.
pub type OperatorHandler = Box<dyn Fn(&[f64]) -> f64 + Send + Sync>;

/// Determines how operators of equal precedence group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Associativity {
    /// Repeated application groups left-to-right: `a - b - c` is
    /// `(a - b) - c`.
    Left,
    /// Repeated application groups right-to-left: `a ^ b ^ c` is
    /// `a ^ (b ^ c)`.
    Right,
}

/// Describes a single operator known to a registry.
///
/// An `Operator` is immutable once constructed. The parser consults its
/// precedence and associativity while converting to postfix form; the
/// evaluator pops `arity` operands off the operand stack and applies the
/// handler.
pub struct Operator {
    /// The symbol the operator is written as, such as `*`.
    pub symbol:        String,
    /// How many operands the operator consumes from the evaluation stack.
    pub arity:         usize,
    /// Whether equal-precedence chains group to the left or to the right.
    pub associativity: Associativity,
    /// Binding strength; higher binds tighter.
    pub precedence:    u8,
    handler:           OperatorHandler,
}

impl Operator {
    /// Creates a new operator descriptor.
    ///
    /// # Parameters
    /// - `symbol`: The operator symbol, matched case-sensitively.
    /// - `arity`: The number of operands consumed during evaluation.
    /// - `associativity`: Grouping direction for equal-precedence chains.
    /// - `precedence`: Binding strength; higher binds tighter.
    /// - `handler`: The pure numeric handler applied to the operands.
    ///
    /// # Example
    /// ```
    /// use formulon::env::operator::{Associativity, Operator};
    ///
    /// let modulo = Operator::new("%", 2, Associativity::Left, 3, |args| args[0] % args[1]);
    /// assert_eq!(modulo.execute(&[7.0, 4.0]), 3.0);
    /// ```
    #[must_use]
    pub fn new(symbol: &str,
               arity: usize,
               associativity: Associativity,
               precedence: u8,
               handler: impl Fn(&[f64]) -> f64 + Send + Sync + 'static)
               -> Self {
        Self { symbol: symbol.to_owned(),
               arity,
               associativity,
               precedence,
               handler: Box::new(handler), }
    }

    /// Applies the handler to an operand slice.
    #[must_use]
    pub fn execute(&self, args: &[f64]) -> f64 {
        (self.handler)(args)
    }

    /// Pops this operator's operands off the evaluation stack, applies the
    /// handler, and pushes the result.
    ///
    /// Operands are passed to the handler in the order they were pushed, so
    /// for a binary operator the first-popped value is the right-hand side.
    ///
    /// # Errors
    /// Returns `SyntaxError::InvalidExpression` if the stack holds fewer than
    /// `arity` values, which indicates an ill-formed postfix program.
    pub fn apply_to_stack(&self, stack: &mut Vec<f64>) -> Result<(), SyntaxError> {
        if stack.len() < self.arity {
            return Err(SyntaxError::InvalidExpression);
        }

        let args = stack.split_off(stack.len() - self.arity);
        stack.push(self.execute(&args));

        Ok(())
    }
}
