//! # shunt
//!
//! shunt is an infix arithmetic calculator written in Rust.
//! It lexes an expression, validates its grammar, converts it to postfix
//! (Reverse Polish) form with the shunting-yard algorithm, and evaluates the
//! postfix form on an operand stack.
//!
//! Each stage is a plain function over token slices, so callers can stop at
//! any point: [`lex`], [`validate`], [`to_postfix`] and
//! [`evaluate_postfix`]. [`evaluate_infix`] runs all four.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::error::{ExpressionError, StageError};

/// Provides typed errors for every stage of the pipeline.
///
/// Each stage fails fast with its own error enum, so callers can match on the
/// cause instead of parsing message text. [`error::ExpressionError`] wraps
/// whichever stage failed together with the expression text.
///
/// # Responsibilities
/// - Defines one error enum per stage (validation, conversion, evaluation).
/// - Attaches the offending token and its position where one exists.
/// - Composes stage errors into a single expression-level error.
pub mod error;
/// The expression pipeline.
///
/// This module holds the lexer, the token classifier, the operator table,
/// the grammar validator, the shunting-yard converter, the postfix evaluator
/// and the numeric value type they produce.
///
/// # Responsibilities
/// - Turns raw text into tokens and categorises them.
/// - Checks infix well-formedness and reorders tokens into postfix.
/// - Computes the value of a postfix sequence.
pub mod interpreter;
/// The interactive calculator.
///
/// Assembles lines continued with a trailing `\` into whole expressions and
/// runs the read-evaluate-print loop used by the `shunt` binary.
pub mod repl;
/// General utilities: numeric conversions and logging setup.
pub mod util;

pub use interpreter::{
    converter::to_postfix,
    evaluator::evaluate_postfix,
    lexer::lex,
    token::{Kind, Token, format_tokens},
    validator::validate,
    value::Number,
};

/// Evaluates an infix expression.
///
/// Runs [`lex`], [`validate`], [`to_postfix`] and [`evaluate_postfix`] in
/// turn, stopping at the first stage that fails.
///
/// # Errors
/// An [`ExpressionError`] carrying `expression` and the stage error. An empty
/// expression fails, since it has no value.
///
/// # Examples
/// ```
/// use shunt::evaluate_infix;
///
/// assert_eq!(evaluate_infix("(100 * (2 + 12)) / 14").unwrap(), 100);
/// assert_eq!(evaluate_infix("3 + 4 * 2 / ( 1 - 5 ) ^ 2 ^ 3").unwrap(), 3.0001220703125);
///
/// assert!(evaluate_infix("3 + ").is_err());
/// assert!(evaluate_infix("").is_err());
/// ```
pub fn evaluate_infix(expression: &str) -> Result<Number, ExpressionError> {
    tracing::debug!(expression, "evaluating infix expression");
    let tokens = lex(expression);
    checked_postfix(&tokens).and_then(|postfix| Ok(evaluate_postfix(&postfix)?))
                            .map_err(|cause| ExpressionError::new(expression, cause))
}

/// Converts an infix expression to a space-separated postfix string.
///
/// # Errors
/// An [`ExpressionError`] if the expression is malformed.
///
/// # Examples
/// ```
/// use shunt::convert_infix_to_postfix;
///
/// assert_eq!(convert_infix_to_postfix("A * (B + C * D) - E / F").unwrap(),
///            "A B C D * + * E F / -");
/// assert_eq!(convert_infix_to_postfix("").unwrap(), "");
/// ```
pub fn convert_infix_to_postfix(expression: &str) -> Result<String, ExpressionError> {
    let tokens = lex(expression);
    checked_postfix(&tokens).map(|postfix| format_tokens(&postfix))
                            .map_err(|cause| ExpressionError::new(expression, cause))
}

/// Evaluates a space-separated postfix expression such as `"1 35 2 * +"`.
///
/// # Errors
/// An [`ExpressionError`] wrapping the [`error::EvaluationError`].
///
/// # Examples
/// ```
/// use shunt::evaluate_postfix_expression;
///
/// assert_eq!(evaluate_postfix_expression("10 5 - 2 /").unwrap(), 2.5);
/// assert!(evaluate_postfix_expression("3 A +").is_err());
/// ```
pub fn evaluate_postfix_expression(expression: &str) -> Result<Number, ExpressionError> {
    evaluate_postfix(&lex(expression)).map_err(|cause| ExpressionError::new(expression, cause))
}

/// Validates infix tokens and converts them to postfix.
fn checked_postfix<'src>(tokens: &[Token<'src>]) -> Result<Vec<Token<'src>>, StageError> {
    validate(tokens)?;
    Ok(to_postfix(tokens)?)
}
