#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents a name that could not be resolved against the environment.
pub enum UnknownSymbol {
    /// An operator symbol is not registered.
    Operator {
        /// The symbol that was looked up.
        symbol: String,
    },
    /// A function name is not registered.
    Function {
        /// The name that was looked up.
        name: String,
    },
    /// A variable name is neither in the overlay nor in the registry.
    Variable {
        /// The name that was looked up.
        name: String,
    },
}

impl std::fmt::Display for UnknownSymbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Operator { symbol } => write!(f, "Unknown operator '{symbol}'."),
            Self::Function { name } => write!(f, "Unknown function '{name}'."),
            Self::Variable { name } => write!(f, "Unknown variable '{name}'."),
        }
    }
}

impl std::error::Error for UnknownSymbol {}
