use std::collections::HashMap;

use crate::{
    env::{
        function::Function,
        operator::{Associativity, NEGATION_SYMBOL, Operator},
    },
    error::UnknownSymbol,
};

/// Stores the environment an expression is interpreted against.
///
/// A `Registry` holds three independent mappings: operators keyed by their
/// exact symbol, and functions and variables keyed by their lower-cased
/// names. Within each mapping names are unique; a later definition overwrites
/// an earlier one.
///
/// ## Usage
///
/// A `Registry` is created once and then shared by reference with every parse
/// and evaluation that should see its symbol set. [`Registry::with_builtins`]
/// returns the standard environment; [`Registry::new`] returns an empty one
/// for callers that want to sandbox the available symbols.
pub struct Registry {
    operators: HashMap<String, Operator>,
    functions: HashMap<String, Function>,
    variables: HashMap<String, f64>,
}

impl Registry {
    /// Creates an empty registry with no operators, functions, or variables.
    #[must_use]
    pub fn new() -> Self {
        Self { operators: HashMap::new(),
               functions: HashMap::new(),
               variables: HashMap::new(), }
    }

    /// Creates a registry populated with the standard environment:
    ///
    /// - constants `pi` and `e`;
    /// - operators `+` and `-` (precedence 2, left-associative), `*` and `/`
    ///   (precedence 3, left-associative), and `^` (precedence 4,
    ///   right-associative);
    /// - unary negation (precedence 4, right-associative), registered under
    ///   the reserved symbol [`NEGATION_SYMBOL`] and reachable only through
    ///   a leading minus sign;
    /// - functions `sin`, `cos`, `tan`, `sqrt`, `min`, and `max`.
    ///
    /// # Example
    /// ```
    /// use formulon::env::registry::Registry;
    ///
    /// let registry = Registry::with_builtins();
    /// assert!(registry.is_operator("+"));
    /// assert!(registry.is_function("SQRT"));
    /// assert_eq!(registry.get_variable("pi").unwrap(), std::f64::consts::PI);
    /// ```
    #[must_use]
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();

        registry.define_variable("pi", std::f64::consts::PI);
        registry.define_variable("e", std::f64::consts::E);

        registry.define_operator(Operator::new("+", 2, Associativity::Left, 2, |args| {
                     args[0] + args[1]
                 }));
        registry.define_operator(Operator::new("-", 2, Associativity::Left, 2, |args| {
                     args[0] - args[1]
                 }));
        registry.define_operator(Operator::new("*", 2, Associativity::Left, 3, |args| {
                     args[0] * args[1]
                 }));
        registry.define_operator(Operator::new("/", 2, Associativity::Left, 3, |args| {
                     args[0] / args[1]
                 }));
        registry.define_operator(Operator::new("^", 2, Associativity::Right, 4, |args| {
                     args[0].powf(args[1])
                 }));
        registry.define_operator(Operator::new(NEGATION_SYMBOL,
                                               1,
                                               Associativity::Right,
                                               4,
                                               |args| -args[0]));

        registry.define_function(Function::new("sin", 1, |args| args[0].sin()));
        registry.define_function(Function::new("cos", 1, |args| args[0].cos()));
        registry.define_function(Function::new("tan", 1, |args| args[0].tan()));
        registry.define_function(Function::new("sqrt", 1, |args| args[0].sqrt()));
        registry.define_function(Function::new("min", 2, |args| args[0].min(args[1])));
        registry.define_function(Function::new("max", 2, |args| args[0].max(args[1])));

        registry
    }

    /// Returns `true` when an operator is registered under `symbol`.
    /// The comparison is case-sensitive.
    #[must_use]
    pub fn is_operator(&self, symbol: &str) -> bool {
        self.operators.contains_key(symbol)
    }

    /// Looks up the operator registered under `symbol`.
    ///
    /// # Errors
    /// Returns `UnknownSymbol::Operator` if no such operator exists.
    pub fn get_operator(&self, symbol: &str) -> Result<&Operator, UnknownSymbol> {
        self.operators
            .get(symbol)
            .ok_or_else(|| UnknownSymbol::Operator { symbol: symbol.to_owned() })
    }

    /// Registers an operator, replacing any previous one with the same
    /// symbol.
    pub fn define_operator(&mut self, operator: Operator) {
        self.operators.insert(operator.symbol.clone(), operator);
    }

    /// Returns `true` when a function is registered under `name`.
    /// The comparison is case-insensitive.
    #[must_use]
    pub fn is_function(&self, name: &str) -> bool {
        self.functions.contains_key(&name.to_lowercase())
    }

    /// Looks up the function registered under `name`, case-insensitively.
    ///
    /// # Errors
    /// Returns `UnknownSymbol::Function` if no such function exists.
    pub fn get_function(&self, name: &str) -> Result<&Function, UnknownSymbol> {
        self.functions
            .get(&name.to_lowercase())
            .ok_or_else(|| UnknownSymbol::Function { name: name.to_owned() })
    }

    /// Registers a function, replacing any previous one with the same name.
    pub fn define_function(&mut self, function: Function) {
        self.functions.insert(function.name.clone(), function);
    }

    /// Returns `true` when a variable is registered under `name`.
    /// The comparison is case-insensitive.
    #[must_use]
    pub fn is_variable(&self, name: &str) -> bool {
        self.variables.contains_key(&name.to_lowercase())
    }

    /// Looks up the value of the variable registered under `name`,
    /// case-insensitively.
    ///
    /// # Errors
    /// Returns `UnknownSymbol::Variable` if no such variable exists.
    pub fn get_variable(&self, name: &str) -> Result<f64, UnknownSymbol> {
        self.variables
            .get(&name.to_lowercase())
            .copied()
            .ok_or_else(|| UnknownSymbol::Variable { name: name.to_owned() })
    }

    /// Registers a variable, replacing any previous one with the same name.
    /// The name is lower-cased on the way in.
    pub fn define_variable(&mut self, name: &str, value: f64) {
        self.variables.insert(name.to_lowercase(), value);
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::with_builtins()
    }
}
