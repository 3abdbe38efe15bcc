use thiserror::Error;

/// Result type used by the postfix evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// `EvaluationError` describing the failure.
pub type EvalResult<T> = Result<T, EvaluationError>;

/// Represents all errors that can occur while evaluating a postfix sequence.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvaluationError {
    /// A token with no numeric meaning: a parenthesis, an identifier, or text
    /// that is not a token at all.
    #[error("Invalid postfix token '{token}' at position {position}.")]
    InvalidPostfixToken {
        /// The offending text.
        token:    String,
        /// Where it occurred.
        position: usize,
    },
    /// Fewer values on the operand stack than required.
    ///
    /// Raised by an operator with fewer than two operands, and at the end of
    /// an expression that produced no value (`position` is then the sequence
    /// length).
    #[error("Invalid postfix expression: not enough operands at position {position} (needed \
             {needed}, found {found}).")]
    InsufficientOperands {
        /// Where the shortage was noticed.
        position: usize,
        /// Operands required.
        needed:   usize,
        /// Operands available.
        found:    usize,
    },
    /// More than one value left once every token is consumed.
    #[error("Invalid postfix expression: too many operands left ({count}).")]
    TooManyOperands {
        /// Values remaining on the stack.
        count: usize,
    },
    /// A number literal too large for a 64-bit integer.
    #[error("Literal '{token}' at position {position} is too large.")]
    LiteralTooLarge {
        /// The literal text.
        token:    String,
        /// Where it occurred.
        position: usize,
    },
    /// An operation whose result does not fit: integer overflow, or a real
    /// result that is infinite or not a number.
    #[error("Arithmetic overflow in '{operator}' at position {position}.")]
    Overflow {
        /// The operator symbol.
        operator: String,
        /// Position of the operator token.
        position: usize,
    },
    /// The right operand of `/` is zero, or `0` is raised to a negative
    /// power.
    #[error("Division by zero is not allowed (position {position}).")]
    DivisionByZero {
        /// Position of the `/` or `^` token.
        position: usize,
    },
}
