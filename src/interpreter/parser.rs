use crate::{
    env::{
        operator::{Associativity, NEGATION_SYMBOL},
        registry::Registry,
    },
    error::{FormulaError, SyntaxError},
    interpreter::lexer::Token,
};

/// Result type used by the parser.
pub type ParseResult<T> = Result<T, FormulaError>;

/// Converts a token sequence into a reverse-Polish token queue.
///
/// This is the shunting-yard algorithm, parameterized by the registry that
/// defines which identifiers are functions and which symbols are operators
/// with which precedence and associativity. Beyond the classic algorithm it
/// resolves two surface conveniences:
///
/// - **Implicit multiplication**: an opening parenthesis or an identifier
///   directly after an operand denotes multiplication, so `2(3+4)`, `(2)(3)`,
///   and `2x` all multiply. The synthesized `*` is pushed straight onto the
///   operator stack, which makes juxtaposition bind tighter than any written
///   operator.
/// - **Unary minus**: a `-`-prefixed number at the start of the expression,
///   after `(`, or after a separator is rewritten into the registry's unary
///   negation operator, as is a bare `-` anywhere no operand precedes it.
///   A `-`-prefixed number directly after an operator stays a signed literal,
///   so `3*-1` is `3 * (-1)`.
///
/// # Parameters
/// - `tokens`: The normalized token sequence, as produced by
///   [`tokenize`](crate::interpreter::lexer::tokenize).
/// - `registry`: The environment to resolve operators and functions against.
///
/// # Returns
/// The output queue in reverse-Polish order: every operator and function
/// follows its operands.
///
/// # Errors
/// - `SyntaxError::MismatchedParentheses` for unbalanced parentheses or a
///   separator outside any parenthesized group.
/// - `UnknownSymbol::Operator` for an operator symbol the registry does not
///   define.
pub fn parse(tokens: &[Token], registry: &Registry) -> ParseResult<Vec<Token>> {
    let mut queue: Vec<Token> = Vec::with_capacity(tokens.len());
    let mut stack: Vec<Token> = Vec::new();
    let mut previous: Option<&Token> = None;

    for token in tokens {
        match token {
            Token::Number(text) => {
                if let Some(unsigned) = text.strip_prefix('-')
                   && unary_position(previous)
                {
                    queue.push(Token::Number(unsigned.to_owned()));
                    push_operator(NEGATION_SYMBOL, &mut queue, &mut stack, registry)?;
                } else {
                    queue.push(token.clone());
                }
            },
            Token::Identifier(name) => {
                if follows_operand(previous, registry) {
                    stack.push(Token::Operator("*".to_owned()));
                }

                if registry.is_function(name) {
                    stack.push(token.clone());
                } else {
                    queue.push(token.clone());
                }
            },
            Token::Operator(symbol) => {
                let negation = symbol == "-"
                               && (unary_position(previous)
                                   || matches!(previous, Some(Token::Operator(_))));

                if negation {
                    push_operator(NEGATION_SYMBOL, &mut queue, &mut stack, registry)?;
                } else {
                    push_operator(symbol, &mut queue, &mut stack, registry)?;
                }
            },
            Token::LeftParen => {
                if follows_operand(previous, registry) {
                    stack.push(Token::Operator("*".to_owned()));
                }

                stack.push(Token::LeftParen);
            },
            Token::RightParen => close_group(&mut queue, &mut stack, registry)?,
            Token::Separator => next_argument(&mut queue, &mut stack)?,
        }

        previous = Some(token);
    }

    while let Some(top) = stack.pop() {
        if matches!(top, Token::LeftParen | Token::RightParen) {
            return Err(SyntaxError::MismatchedParentheses.into());
        }

        queue.push(top);
    }

    Ok(queue)
}

/// Returns `true` in the positions where a minus sign can only be unary:
/// at the very start, after `(`, or after an argument separator.
const fn unary_position(previous: Option<&Token>) -> bool {
    matches!(previous, None | Some(Token::LeftParen | Token::Separator))
}

/// Returns `true` when the previous token ends an operand, which is what
/// makes a following parenthesis or identifier an implicit multiplication.
/// An identifier only counts if it is not a function name; `sin(x)` is a
/// call, not a product.
fn follows_operand(previous: Option<&Token>, registry: &Registry) -> bool {
    match previous {
        Some(Token::Number(_) | Token::RightParen) => true,
        Some(Token::Identifier(name)) => !registry.is_function(name),
        _ => false,
    }
}

/// Pushes an operator onto the stack, first popping every stacked operator
/// that binds at least as tightly (for left-associative operators) or
/// strictly tighter (for right-associative ones). Right associativity not
/// popping equal precedence is what lets `2^3^2` group as `2^(3^2)`.
fn push_operator(symbol: &str,
                 queue: &mut Vec<Token>,
                 stack: &mut Vec<Token>,
                 registry: &Registry)
                 -> ParseResult<()> {
    let operator = registry.get_operator(symbol)?;

    while let Some(Token::Operator(top)) = stack.last() {
        let top = registry.get_operator(top)?;
        let pops = match operator.associativity {
            Associativity::Left => operator.precedence <= top.precedence,
            Associativity::Right => operator.precedence < top.precedence,
        };

        if !pops {
            break;
        }

        if let Some(token) = stack.pop() {
            queue.push(token);
        }
    }

    stack.push(Token::Operator(symbol.to_owned()));

    Ok(())
}

/// Handles a closing parenthesis: pops stack entries to the queue until the
/// matching `(`, discards it, and, if a function name now tops the stack,
/// pops that too, which places the call right after its arguments in the
/// queue.
fn close_group(queue: &mut Vec<Token>,
               stack: &mut Vec<Token>,
               registry: &Registry)
               -> ParseResult<()> {
    loop {
        match stack.pop() {
            Some(Token::LeftParen) => break,
            Some(token) => queue.push(token),
            None => return Err(SyntaxError::MismatchedParentheses.into()),
        }
    }

    let call = matches!(stack.last(), Some(Token::Identifier(name)) if registry.is_function(name));

    if call && let Some(name) = stack.pop() {
        queue.push(name);
    }

    Ok(())
}

/// Handles an argument separator: pops stack entries to the queue until the
/// enclosing `(`, which stays in place for the arguments still to come.
fn next_argument(queue: &mut Vec<Token>, stack: &mut Vec<Token>) -> ParseResult<()> {
    while let Some(top) = stack.last() {
        if matches!(top, Token::LeftParen) {
            return Ok(());
        }

        if let Some(token) = stack.pop() {
            queue.push(token);
        }
    }

    Err(SyntaxError::MismatchedParentheses.into())
}
