use thiserror::Error;

use crate::error::{ConversionError, EvaluationError, ValidationError};

/// The stage of the pipeline that rejected an expression.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StageError {
    /// The token sequence is not a well-formed infix expression.
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// Conversion to postfix failed.
    #[error(transparent)]
    Conversion(#[from] ConversionError),
    /// The postfix sequence could not be evaluated.
    #[error(transparent)]
    Evaluation(#[from] EvaluationError),
}

/// A failure to process an expression, carrying the expression text and the
/// underlying cause.
///
/// # Example
/// ```
/// use shunt::{
///     error::{EvaluationError, StageError},
///     evaluate_infix,
/// };
///
/// let err = evaluate_infix("1 / 0").unwrap_err();
/// assert_eq!(err.expression(), "1 / 0");
/// assert!(matches!(err.cause(),
///                  StageError::Evaluation(EvaluationError::DivisionByZero { .. })));
/// assert!(err.to_string().starts_with("Error processing expression '1 / 0'"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Error processing expression '{expression}': {cause}")]
pub struct ExpressionError {
    expression: String,
    #[source]
    cause:      StageError,
}

impl ExpressionError {
    /// Wraps a stage failure with the expression it occurred in.
    pub fn new(expression: &str, cause: impl Into<StageError>) -> Self {
        Self { expression: expression.to_string(),
               cause:      cause.into(), }
    }

    /// The expression that failed.
    #[must_use]
    pub fn expression(&self) -> &str {
        &self.expression
    }

    /// The stage error that caused the failure.
    #[must_use]
    pub const fn cause(&self) -> &StageError {
        &self.cause
    }

    /// Consumes the error, returning the stage error.
    #[must_use]
    pub fn into_cause(self) -> StageError {
        self.cause
    }
}
