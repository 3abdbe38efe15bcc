/// Grammar validation errors.
///
/// Raised while checking that a token sequence is a well-formed infix
/// expression: invalid tokens, misplaced operators, empty or unbalanced
/// parentheses.
pub mod validation_error;
/// Infix-to-postfix conversion errors.
///
/// Only parenthesis mismatches can stop a conversion. Validated input never
/// produces them.
pub mod conversion_error;
/// Postfix evaluation errors.
///
/// Covers operand count mismatches, division by zero and tokens that have no
/// value.
pub mod evaluation_error;
/// The error reported for a whole expression.
///
/// Wraps whichever stage failed together with the expression text.
pub mod expression_error;

pub use conversion_error::{ConversionError, ConversionResult};
pub use evaluation_error::{EvalResult, EvaluationError};
pub use expression_error::{ExpressionError, StageError};
pub use validation_error::{ValidationError, ValidationResult};
