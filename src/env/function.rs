use crate::error::SyntaxError;

/// The numeric handler attached to a function.
///
/// Receives the call arguments in left-to-right order and returns the result
/// to push. Handlers must be pure; this is trusted, not validated.
pub type FunctionHandler = Box<dyn Fn(&[f64]) -> f64 + Send + Sync>;

/// Describes a single named function known to a registry.
///
/// Function names are case-insensitive; the name is stored lower-cased and
/// all lookups lower-case their argument before comparing.
pub struct Function {
    /// The lower-cased name the function is called by.
    pub name:  String,
    /// How many arguments the function consumes from the evaluation stack.
    pub arity: usize,
    handler:   FunctionHandler,
}

impl Function {
    /// Creates a new function descriptor. The name is lower-cased on the way
    /// in.
    ///
    /// # Example
    /// ```
    /// use formulon::env::function::Function;
    ///
    /// let average = Function::new("Avg", 2, |args| (args[0] + args[1]) / 2.0);
    /// assert_eq!(average.name, "avg");
    /// assert_eq!(average.execute(&[1.0, 5.0]), 3.0);
    /// ```
    #[must_use]
    pub fn new(name: &str,
               arity: usize,
               handler: impl Fn(&[f64]) -> f64 + Send + Sync + 'static)
               -> Self {
        Self { name: name.to_lowercase(),
               arity,
               handler: Box::new(handler), }
    }

    /// Applies the handler to an argument slice.
    #[must_use]
    pub fn execute(&self, args: &[f64]) -> f64 {
        (self.handler)(args)
    }

    /// Pops this function's arguments off the evaluation stack, applies the
    /// handler, and pushes the result.
    ///
    /// Arguments are passed to the handler in the order they were pushed: the
    /// most recently pushed value is the last argument.
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
