use crate::{
    error::{ValidationError, ValidationResult},
    interpreter::token::{Kind, Token},
};

/// Checks that a token sequence is a well-formed infix expression.
///
/// Parenthesis balance is checked first, over the whole sequence. The tokens
/// are then scanned once, left to right, and the first violation wins:
///
/// 1. an invalid token;
/// 2. an operator as the first token;
/// 3. `)` right after an operator;
/// 4. an operator right after `(`;
/// 5. `()` with nothing inside;
/// 6. two numbers, identifiers or operators in a row;
/// 7. an operator as the last token.
///
/// An empty sequence is accepted; it simply has no value to evaluate.
///
/// # Parameters
/// - `tokens`: The infix token sequence, usually from [`crate::lex`].
///
/// # Errors
/// The [`ValidationError`] for the first rule broken.
///
/// # Example
/// ```
/// use shunt::{error::ValidationError, lex, validate};
///
/// assert!(validate(&lex("(x + 1) * 2")).is_ok());
/// assert!(matches!(validate(&lex("+ A * B")),
///                  Err(ValidationError::LeadingOperator { .. })));
/// assert_eq!(validate(&lex("(1 + 2")), Err(ValidationError::UnbalancedParentheses));
/// ```
pub fn validate(tokens: &[Token<'_>]) -> ValidationResult<()> {
    let result = check(tokens);
    if let Err(err) = &result {
        tracing::debug!(%err, "rejected infix expression");
    }
    result
}

fn check(tokens: &[Token<'_>]) -> ValidationResult<()> {
    if !is_balanced(tokens) {
        return Err(ValidationError::UnbalancedParentheses);
    }

    let mut previous: Option<Kind> = None;
    for (position, token) in tokens.iter().enumerate() {
        let current = token.kind();
        check_transition(previous, current, token, position)?;
        previous = Some(current);
    }

    if let Some(last) = tokens.last()
       && last.kind() == Kind::Operator
    {
        return Err(ValidationError::TrailingOperator { token:    last.text().to_string(),
                                                       position: tokens.len() - 1, });
    }

    Ok(())
}

/// Applies the per-token rules to one step of the scan.
fn check_transition(previous: Option<Kind>,
                    current: Kind,
                    token: &Token<'_>,
                    position: usize)
                    -> ValidationResult<()> {
    use Kind::{CloseParen, Invalid, OpenParen, Operator};

    match (previous, current) {
        (_, Invalid) => Err(ValidationError::InvalidToken { token: token.text().to_string(),
                                                            position }),
        (None, Operator) => {
            Err(ValidationError::LeadingOperator { token: token.text().to_string() })
        },
        (Some(Operator), CloseParen) => Err(ValidationError::CloseParenAfterOperator { position }),
        (Some(OpenParen), Operator) => {
            Err(ValidationError::OperatorAfterOpenParen { token: token.text().to_string(),
                                                          position })
        },
        (Some(OpenParen), CloseParen) => Err(ValidationError::EmptyParentheses { position }),
        (Some(prev), current) if prev == current && !current.is_paren() => {
            Err(ValidationError::ConsecutiveSameKind { kind: current,
                                                       token: token.text().to_string(),
                                                       position })
        },
        _ => Ok(()),
    }
}

/// Whether every `(` is closed by a later `)` and no `)` closes nothing.
///
/// # Example
/// ```
/// use shunt::{interpreter::validator::is_balanced, lex};
///
/// assert!(is_balanced(&lex("((a) (b))")));
/// assert!(!is_balanced(&lex(")(")));
/// ```
#[must_use]
pub fn is_balanced(tokens: &[Token<'_>]) -> bool {
    let mut depth = 0usize;
    for token in tokens {
        match token.kind() {
            Kind::OpenParen => depth += 1,
            Kind::CloseParen => match depth.checked_sub(1) {
                Some(d) => depth = d,
                None => return false,
            },
            _ => {},
        }
    }
    depth == 0
}
