#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while tokenizing raw input.
pub enum LexError {
    /// The input contained no tokens at all (empty or whitespace-only).
    Empty,
    /// A stretch of input matched no lexical rule.
    UnrecognizedInput {
        /// The text that could not be tokenized.
        fragment: String,
    },
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "Expression contains no tokens."),
            Self::UnrecognizedInput { fragment } => {
                write!(f, "Cannot tokenize input at '{fragment}'.")
            },
        }
    }
}

impl std::error::Error for LexError {}
