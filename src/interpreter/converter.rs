use crate::{
    error::{ConversionError, ConversionResult},
    interpreter::{
        operator::Operator,
        token::{Kind, Token},
    },
};

/// An entry on the converter's operator stack.
///
/// A group binds looser than any operator, so an incoming operator never pops
/// past one.
#[derive(Debug, Clone, Copy)]
enum Pending<'src> {
    /// An open parenthesis, remembered by its position.
    Group { position: usize },
    /// An operator together with the token that spelled it.
    Operator(Operator, Token<'src>),
}

/// Converts an infix token sequence to postfix with the shunting-yard
/// algorithm.
///
/// Operands go straight to the output. Operators wait on a stack until an
/// operator that binds no tighter arrives (or, for the right-associative `^`,
/// one that binds strictly looser), and parentheses only steer that stack:
/// they never reach the output, so the result is shorter than the input by
/// exactly the number of parentheses.
///
/// The input is expected to have passed [`crate::validate`]; the two
/// parenthesis mismatches are still reported rather than assumed away.
///
/// # Parameters
/// - `tokens`: The infix token sequence.
///
/// # Errors
/// - `UnmatchedCloseParen` if a `)` has no open group to close.
/// - `UnmatchedOpenParen` if a `(` is never closed.
///
/// # Example
/// ```
/// use shunt::{lex, to_postfix};
///
/// assert_eq!(to_postfix(&lex("A + B * C")).unwrap(), ["A", "B", "C", "*", "+"]);
/// assert_eq!(to_postfix(&lex("A ^ B ^ C")).unwrap(), ["A", "B", "C", "^", "^"]);
/// assert_eq!(to_postfix(&lex("(A + B) * C")).unwrap(), ["A", "B", "+", "C", "*"]);
/// ```
pub fn to_postfix<'src>(tokens: &[Token<'src>]) -> ConversionResult<Vec<Token<'src>>> {
    let mut output = Vec::with_capacity(tokens.len());
    let mut stack: Vec<Pending<'src>> = Vec::new();

    for (position, token) in tokens.iter().enumerate() {
        match (token.kind(), token.operator()) {
            (Kind::OpenParen, _) => stack.push(Pending::Group { position }),
            (Kind::CloseParen, _) => close_group(&mut stack, &mut output, position)?,
            (_, Some(incoming)) => {
                while let Some(&Pending::Operator(top, top_token)) = stack.last()
                      && incoming.yields_to(top)
                {
                    tracing::trace!(%top, %incoming, "pop operator");
                    output.push(top_token);
                    stack.pop();
                }
                stack.push(Pending::Operator(incoming, *token));
            },
            _ => output.push(*token),
        }
    }

    while let Some(pending) = stack.pop() {
        match pending {
            Pending::Group { position } => {
                return Err(ConversionError::UnmatchedOpenParen { position });
            },
            Pending::Operator(_, token) => output.push(token),
        }
    }

    tracing::debug!(input = tokens.len(), output = output.len(), "converted to postfix");
    Ok(output)
}

/// Moves operators to the output until the innermost open group is reached,
/// then discards that group.
fn close_group<'src>(stack: &mut Vec<Pending<'src>>,
                     output: &mut Vec<Token<'src>>,
                     position: usize)
                     -> ConversionResult<()> {
    loop {
        match stack.pop() {
            Some(Pending::Operator(_, token)) => output.push(token),
            Some(Pending::Group { .. }) => return Ok(()),
            None => return Err(ConversionError::UnmatchedCloseParen { position }),
        }
    }
}
