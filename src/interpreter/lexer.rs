use logos::Logos;

use crate::interpreter::token::{Kind, Token};

/// Splits an expression into tokens.
///
/// Digits group into a single number token and letters into a single
/// identifier token; each of `+ - * / ^ ( )` is always a token of its own.
/// Whitespace separates tokens and is discarded.
///
/// Lexing never fails. Characters that start no known token are kept rather
/// than dropped: every maximal run of them becomes one [`Kind::Invalid`]
/// token, which the validator then reports.
///
/// # Parameters
/// - `expression`: The raw infix (or postfix) expression.
///
/// # Returns
/// The tokens in source order. An empty or all-whitespace input yields an
/// empty vector.
///
/// # Example
/// ```
/// use shunt::{interpreter::token::Kind, lex};
///
/// let tokens = lex("12+(x - 3)");
/// assert_eq!(tokens, ["12", "+", "(", "x", "-", "3", ")"]);
///
/// let tokens = lex("2 @# 3");
/// assert_eq!(tokens[1].kind(), Kind::Invalid);
/// assert_eq!(tokens[1].text(), "@#");
/// ```
#[must_use]
pub fn lex(expression: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut lexer = Kind::lexer(expression);
    // End of the last unrecognised run, so errors inside it are not reported
    // twice.
    let mut run_end = 0;

    while let Some(result) = lexer.next() {
        let span = lexer.span();
        match result {
            Ok(kind) => tokens.push(Token::with_kind(&expression[span], kind)),
            Err(()) if span.start < run_end => {},
            Err(()) => {
                let rest = &expression[span.start..];
                let run = &rest[..unrecognised_run_len(rest)];
                run_end = span.start + run.len();
                // Whitespace the skip pattern missed is still only a separator.
                if !run.trim().is_empty() {
                    tokens.push(Token::with_kind(run, Kind::Invalid));
                }
            },
        }
    }

    tracing::trace!(count = tokens.len(), "lexed expression");
    tokens
}

/// Length in bytes of the unrecognised characters at the start of `rest`.
///
/// Always covers at least the first character, so the run is never empty.
fn unrecognised_run_len(rest: &str) -> usize {
    let mut chars = rest.chars();
    let first = chars.next().map_or(0, char::len_utf8);
    first
    + chars.take_while(|&c| !starts_token(c))
           .map(char::len_utf8)
           .sum::<usize>()
}

/// Whether `c` can begin a token or separate two tokens.
fn starts_token(c: char) -> bool {
    c.is_ascii_alphanumeric()
    || c.is_whitespace()
    || matches!(c, '+' | '-' | '*' | '/' | '^' | '(' | ')')
}
