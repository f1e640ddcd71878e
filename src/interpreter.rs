/// The lexer module tokenizes a formula for further parsing.
///
/// The lexer reads the raw source text and produces a stream of tokens:
/// numbers, identifiers, operator symbols, parentheses, and argument
/// separators. A normalization pass then resolves the ambiguity between a
/// signed numeric literal and binary subtraction at the lexical level.
///
/// # Responsibilities
/// - Converts the input character stream into typed tokens.
/// - Skips whitespace and rejects input no rule covers.
/// - Splits signed numbers that follow an operand into subtraction.
pub mod lexer;
/// The parser module converts the token stream into postfix form.
///
/// The parser runs the shunting-yard algorithm against a registry: it
/// resolves operator precedence and associativity, inserts implicit
/// multiplication for juxtaposed operands, finalizes function calls at their
/// closing parenthesis, and rewrites leading minus signs into the dedicated
/// unary negation operator.
///
/// # Responsibilities
/// - Produces the reverse-Polish token queue evaluation runs on.
/// - Validates parenthesis structure and operator symbols.
/// - Resolves unary minus and implicit multiplication.
pub mod parser;
/// The evaluator module executes a postfix token queue.
///
/// The evaluator is a stack machine: numbers push their value, identifiers
/// resolve against the caller's overlay, then the registry's variables, then
/// its functions, and operators apply their handler to popped operands. A
/// well-formed program leaves exactly one value on the stack.
///
/// # Responsibilities
/// - Computes the numeric result of a parsed formula.
/// - Resolves names case-insensitively at evaluation time.
/// - Reports ill-formed programs and unresolvable names.
pub mod evaluator;
