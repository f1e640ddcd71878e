use logos::Logos;

use crate::error::LexError;

/// Represents a lexical token in a formula.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens.
#[derive(Logos, Debug, Clone, PartialEq, Eq)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum Token {
    /// Numeric literal tokens such as `42`, `3.14`, or `-2`. The leading
    /// minus sign is captured greedily; [`tokenize`] splits it back off when
    /// the literal follows an operand, and the parser resolves the remaining
    /// signed cases.
    #[regex(r"-?[0-9]+(\.[0-9]+)?", |lex| lex.slice().to_owned(), priority = 3)]
    Number(String),
    /// Identifier tokens; variable or function names such as `x` or `sqrt`.
    /// Stored case-preserving and compared case-insensitively downstream.
    #[regex(r"[a-zA-Z][a-zA-Z0-9_]*", |lex| lex.slice().to_owned())]
    Identifier(String),
    /// Operator tokens: any run of characters that are neither alphanumeric,
    /// underscore, parenthesis, comma, nor whitespace. The run is validated
    /// against the registry later, by the parser. A `-` always lexes on its
    /// own rather than joining a run, so that the digits after `*-` can form
    /// a signed number.
    #[token("-", |lex| lex.slice().to_owned())]
    #[regex(r"[^a-zA-Z0-9_(), \t\r\n\f-]+", |lex| lex.slice().to_owned())]
    Operator(String),
    /// `(`
    #[token("(")]
    LeftParen,
    /// `)`
    #[token(")")]
    RightParen,
    /// `,`, separating the arguments of a function call.
    #[token(",")]
    Separator,
}

/// Converts a formula into its token sequence.
///
/// Whitespace only separates tokens and is discarded. The returned sequence
/// has already been normalized: a number whose text captured a leading `-`
/// even though it follows an operand is split into a `-` operator and an
/// unsigned number, so `5-2` means subtraction rather than the two literals
/// `5` and `-2`.
///
/// # Parameters
/// - `source`: The raw formula text.
///
/// # Returns
/// The normalized token sequence, in source order.
///
/// # Errors
/// - `LexError::UnrecognizedInput` if a stretch of input matches no rule.
/// - `LexError::Empty` if the input contains no tokens at all.
///
/// # Example
/// ```
/// use formulon::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("1-2").unwrap();
/// assert_eq!(tokens,
///            vec![Token::Number("1".to_owned()),
///                 Token::Operator("-".to_owned()),
///                 Token::Number("2".to_owned())]);
/// ```
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(source);

    while let Some(token) = lexer.next() {
        match token {
            Ok(token) => tokens.push(token),
            Err(()) => {
                return Err(LexError::UnrecognizedInput { fragment: lexer.slice().to_owned() });
            },
        }
    }

    if tokens.is_empty() {
        return Err(LexError::Empty);
    }

    Ok(normalize(tokens))
}

/// Splits signed numbers back into subtraction where the sign cannot have
/// been unary: a `-`-prefixed number directly after a number, an identifier,
/// or a closing parenthesis becomes a `-` operator followed by the unsigned
/// number.
fn normalize(tokens: Vec<Token>) -> Vec<Token> {
    let mut normalized: Vec<Token> = Vec::with_capacity(tokens.len());

    for token in tokens {
        if let Token::Number(text) = &token
           && let Some(unsigned) = text.strip_prefix('-')
           && normalized.last().is_some_and(ends_operand)
        {
            let unsigned = unsigned.to_owned();
            normalized.push(Token::Operator("-".to_owned()));
            normalized.push(Token::Number(unsigned));
        } else {
            normalized.push(token);
        }
    }

    normalized
}

/// Returns `true` when a token can be the last token of an operand.
const fn ends_operand(token: &Token) -> bool {
    matches!(token,
             Token::Number(_) | Token::Identifier(_) | Token::RightParen)
}
