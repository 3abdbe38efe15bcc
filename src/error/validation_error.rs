use thiserror::Error;

use crate::interpreter::token::Kind;

/// Result type used by the validator.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Represents every way an infix token sequence can be malformed.
///
/// Positions are zero-based indices into the token sequence.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A token matches none of the recognised shapes.
    #[error("The expression contains an invalid token '{token}' at position {position}. Only \
             numbers, identifiers, operators, and parentheses are allowed.")]
    InvalidToken {
        /// The offending text.
        token:    String,
        /// Where it occurred.
        position: usize,
    },
    /// The first token is an operator.
    #[error("Expression cannot start with an operator ('{token}'). An operator must follow a \
             valid operand or parenthesis.")]
    LeadingOperator {
        /// The leading operator.
        token: String,
    },
    /// The last token is an operator.
    #[error("Expression cannot end with an operator ('{token}' at position {position}). The \
             expression should end with a number, identifier, or closing parenthesis.")]
    TrailingOperator {
        /// The trailing operator.
        token:    String,
        /// Where it occurred.
        position: usize,
    },
    /// An operator directly after `(`.
    #[error("An operator cannot follow an opening parenthesis ('{token}' at position \
             {position}). Operators must follow numbers or identifiers.")]
    OperatorAfterOpenParen {
        /// The misplaced operator.
        token:    String,
        /// Where it occurred.
        position: usize,
    },
    /// A `)` directly after an operator.
    #[error("A closing parenthesis cannot follow an operator directly (position {position}). \
             Check for misplaced parentheses.")]
    CloseParenAfterOperator {
        /// Position of the closing parenthesis.
        position: usize,
    },
    /// `()` with nothing inside.
    #[error("Empty parentheses are not allowed (position {position}). Ensure there is an \
             expression inside the parentheses.")]
    EmptyParentheses {
        /// Position of the closing parenthesis.
        position: usize,
    },
    /// Two numbers, identifiers or operators in a row.
    #[error("Invalid expression: consecutive {kind}s are not allowed ('{token}' at position \
             {position}).")]
    ConsecutiveSameKind {
        /// The repeated kind.
        kind:     Kind,
        /// The second token of the pair.
        token:    String,
        /// Position of the second token.
        position: usize,
    },
    /// Parentheses do not pair up.
    #[error("Invalid parentheses usage in the expression! Make sure parentheses are balanced.")]
    UnbalancedParentheses,
}
