use crate::{
    error::{EvalResult, EvaluationError},
    interpreter::{
        token::{Kind, Token},
        value::Number,
    },
};

/// Evaluates a postfix token sequence on an operand stack.
///
/// Numbers are pushed; an operator pops its right operand, then its left
/// one, and pushes the result. Exactly one value must remain at the end.
///
/// Identifiers are accepted by every earlier stage but have no value, so
/// here they are rejected like parentheses and invalid text.
///
/// # Parameters
/// - `tokens`: The postfix sequence, usually from [`crate::to_postfix`].
///
/// # Errors
/// - `InvalidPostfixToken` for anything that is neither a number nor an
///   operator.
/// - `InsufficientOperands` when an operator finds fewer than two values, or
///   the sequence produces none.
/// - `TooManyOperands` when more than one value is left.
/// - `LiteralTooLarge` for a number that does not fit in an `i64`.
/// - `Overflow` when an operation's result does not fit.
/// - `DivisionByZero` when the right operand of `/` is zero.
///
/// # Example
/// ```
/// use shunt::{error::EvaluationError, evaluate_postfix, interpreter::token::Token};
///
/// let tokens: Vec<_> = ["2", "3", "^", "4", "*"].into_iter().map(Token::new).collect();
/// assert_eq!(evaluate_postfix(&tokens).unwrap(), 32);
///
/// let tokens: Vec<_> = ["5", "0", "/"].into_iter().map(Token::new).collect();
/// assert!(matches!(evaluate_postfix(&tokens),
///                  Err(EvaluationError::DivisionByZero { position: 2 })));
/// ```
pub fn evaluate_postfix(tokens: &[Token<'_>]) -> EvalResult<Number> {
    let mut operands: Vec<Number> = Vec::with_capacity(tokens.len());

    for (position, token) in tokens.iter().enumerate() {
        match (token.kind(), token.operator()) {
            (Kind::Number, _) => {
                let value = Number::from_literal(token.text()).ok_or_else(|| {
                                EvaluationError::LiteralTooLarge { token: token.text().to_string(),
                                                                   position }
                            })?;
                tracing::trace!(%value, "push operand");
                operands.push(value);
            },
            (Kind::Operator, Some(op)) => {
                let found = operands.len();
                let (Some(right), Some(left)) = (operands.pop(), operands.pop()) else {
                    return Err(EvaluationError::InsufficientOperands { position,
                                                                       needed: 2,
                                                                       found });
                };
                let value = op.apply(left, right, position)?;
                tracing::trace!(%left, %op, %right, %value, "apply operator");
                operands.push(value);
            },
            _ => return Err(invalid(token, position)),
        }
    }

    match operands.as_slice() {
        [value] => {
            tracing::debug!(%value, "evaluated postfix expression");
            Ok(*value)
        },
        [] => Err(EvaluationError::InsufficientOperands { position: tokens.len(),
                                                          needed:   1,
                                                          found:    0, }),
        rest => Err(EvaluationError::TooManyOperands { count: rest.len() }),
    }
}

fn invalid(token: &Token<'_>, position: usize) -> EvaluationError {
    EvaluationError::InvalidPostfixToken { token: token.text().to_string(),
                                           position }
}
