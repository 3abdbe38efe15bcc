use thiserror::Error;

/// Result type used by the infix-to-postfix converter.
pub type ConversionResult<T> = Result<T, ConversionError>;

/// Parenthesis mismatches found while converting to postfix.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    /// A `)` with no `(` waiting on the operator stack.
    #[error("Unmatched closing parenthesis in expression at position {position}!")]
    UnmatchedCloseParen {
        /// Position of the closing parenthesis.
        position: usize,
    },
    /// A `(` still on the operator stack at the end of input.
    #[error("Unmatched opening parenthesis in expression at position {position}!")]
    UnmatchedOpenParen {
        /// Position of the opening parenthesis.
        position: usize,
    },
}
