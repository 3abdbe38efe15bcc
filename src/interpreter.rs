/// The lexer module tokenizes expressions for further processing.
///
/// The lexer reads the raw expression text and produces a sequence of
/// tokens: numbers, identifiers, operators and parentheses. It is the first
/// stage of the pipeline and never fails.
pub mod lexer;
/// Tokens and their classification.
///
/// Declares the [`token::Kind`] categories (which also drive the lexer's
/// automaton), the borrowed [`token::Token`] type and the classifier that
/// categorises a lone token string.
pub mod token;
/// The operator table.
///
/// Precedence, associativity and the arithmetic of each binary operator,
/// plus the comparison the shunting-yard loop is built on.
pub mod operator;
/// Grammar validation of infix token sequences.
///
/// # Responsibilities
/// - Rejects invalid tokens and misplaced operators or parentheses.
/// - Checks global parenthesis balance before anything else.
/// - Reports the first violation only, as a typed error.
pub mod validator;
/// Infix-to-postfix conversion with the shunting-yard algorithm.
pub mod converter;
/// Postfix evaluation on an operand stack.
///
/// Pops operands for each operator, applies it, and checks that exactly one
/// value remains.
pub mod evaluator;
/// The numeric value type produced by evaluation.
///
/// Integers while every operation is exact, reals otherwise.
pub mod value;
