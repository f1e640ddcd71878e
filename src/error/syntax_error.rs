#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors caused by a structurally invalid token sequence.
pub enum SyntaxError {
    /// A parenthesis was opened but never closed, closed but never opened,
    /// or a separator appeared outside any parenthesized group.
    MismatchedParentheses,
    /// The expression passed parsing but its evaluation stack did not reduce
    /// to exactly one value, such as `2 2` or a dangling operator.
    InvalidExpression,
}

impl std::fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MismatchedParentheses => write!(f, "Mismatched parentheses."),
            Self::InvalidExpression => write!(f, "Invalid expression."),
        }
    }
}

impl std::error::Error for SyntaxError {}
