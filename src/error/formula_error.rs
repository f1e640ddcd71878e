use crate::error::{LexError, SyntaxError, UnknownSymbol};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Any error a parse or evaluation can produce.
///
/// Each stage of the pipeline reports through its own error kind; this enum
/// carries whichever one occurred so that `?` composes across stages. All
/// variants are terminal for the call that raised them: there are no partial
/// results and no recovery mode.
pub enum FormulaError {
    /// The input could not be tokenized.
    Lex(LexError),
    /// The token sequence was structurally invalid.
    Syntax(SyntaxError),
    /// A name could not be resolved against the environment.
    UnknownSymbol(UnknownSymbol),
}

impl std::fmt::Display for FormulaError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lex(e) => e.fmt(f),
            Self::Syntax(e) => e.fmt(f),
            Self::UnknownSymbol(e) => e.fmt(f),
        }
    }
}

impl std::error::Error for FormulaError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Lex(e) => Some(e),
            Self::Syntax(e) => Some(e),
            Self::UnknownSymbol(e) => Some(e),
        }
    }
}

impl From<LexError> for FormulaError {
    fn from(value: LexError) -> Self {
        Self::Lex(value)
    }
}

impl From<SyntaxError> for FormulaError {
    fn from(value: SyntaxError) -> Self {
        Self::Syntax(value)
    }
}

impl From<UnknownSymbol> for FormulaError {
    fn from(value: UnknownSymbol) -> Self {
        Self::UnknownSymbol(value)
    }
}
