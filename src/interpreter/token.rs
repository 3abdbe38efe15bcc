use std::fmt;

use logos::Logos;

use crate::interpreter::operator::Operator;

/// The category a token belongs to.
///
/// The lexer derives its automaton from this enum, and
/// [`Kind::classify`] reuses the same automaton to categorise arbitrary
/// strings, so the two can never disagree about what a token looks like.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[logos(skip r"\s+")]
pub enum Kind {
    /// One or more ASCII digits, such as `42`.
    #[regex(r"[0-9]+")]
    Number,
    /// One or more ASCII letters, such as `x` or `rate`. Identifiers are
    /// opaque operands; they are never bound to a value.
    #[regex(r"[a-zA-Z]+")]
    Identifier,
    /// One of `+ - * / ^`.
    #[token("+")]
    #[token("-")]
    #[token("*")]
    #[token("/")]
    #[token("^")]
    Operator,
    /// `(`
    #[token("(")]
    OpenParen,
    /// `)`
    #[token(")")]
    CloseParen,
    /// Text matching none of the shapes above.
    Invalid,
}

impl Kind {
    /// Categorises a single token string.
    ///
    /// The whole string must form exactly one token: surrounding whitespace,
    /// mixed shapes such as `1x`, and the empty string are all `Invalid`.
    ///
    /// # Example
    /// ```
    /// use shunt::interpreter::token::Kind;
    ///
    /// assert_eq!(Kind::classify("123"), Kind::Number);
    /// assert_eq!(Kind::classify("var"), Kind::Identifier);
    /// assert_eq!(Kind::classify("^"), Kind::Operator);
    /// assert_eq!(Kind::classify("123abc"), Kind::Invalid);
    /// assert_eq!(Kind::classify("!@#"), Kind::Invalid);
    /// assert_eq!(Kind::classify(""), Kind::Invalid);
    /// ```
    #[must_use]
    pub fn classify(text: &str) -> Self {
        let mut lexer = Self::lexer(text);
        match lexer.next() {
            Some(Ok(kind)) if lexer.span() == (0..text.len()) => kind,
            _ => Self::Invalid,
        }
    }

    /// Returns `true` for `OpenParen` and `CloseParen`.
    #[must_use]
    pub const fn is_paren(self) -> bool {
        matches!(self, Self::OpenParen | Self::CloseParen)
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Number => "number",
            Self::Identifier => "identifier",
            Self::Operator => "operator",
            Self::OpenParen => "opening parenthesis",
            Self::CloseParen => "closing parenthesis",
            Self::Invalid => "invalid token",
        };
        f.write_str(name)
    }
}

/// A lexical token: a slice of the source text plus its [`Kind`].
///
/// Tokens borrow from the expression they were read from and are cheap to
/// copy, so every stage of the pipeline can hand out fresh vectors of them
/// without cloning any text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Token<'src> {
    text: &'src str,
    kind: Kind,
}

impl<'src> Token<'src> {
    /// Builds a token from arbitrary text, classifying it with
    /// [`Kind::classify`].
    ///
    /// # Example
    /// ```
    /// use shunt::interpreter::token::{Kind, Token};
    ///
    /// let token = Token::new("17");
    /// assert_eq!(token.kind(), Kind::Number);
    /// assert_eq!(token.text(), "17");
    /// ```
    #[must_use]
    pub fn new(text: &'src str) -> Self {
        Self { text,
               kind: Kind::classify(text) }
    }

    /// Builds a token whose kind is already known to the caller.
    pub(crate) const fn with_kind(text: &'src str, kind: Kind) -> Self {
        Self { text, kind }
    }

    /// The source text of the token.
    #[must_use]
    pub const fn text(&self) -> &'src str {
        self.text
    }

    /// The category of the token.
    #[must_use]
    pub const fn kind(&self) -> Kind {
        self.kind
    }

    /// The operator this token denotes, if it is one.
    #[must_use]
    pub fn operator(&self) -> Option<Operator> {
        match self.kind {
            Kind::Operator => Operator::from_symbol(self.text),
            _ => None,
        }
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text)
    }
}

impl PartialEq<&str> for Token<'_> {
    fn eq(&self, other: &&str) -> bool {
        self.text == *other
    }
}

/// Joins the text of `tokens` with single spaces.
///
/// # Example
/// ```
/// use shunt::{format_tokens, lex};
///
/// assert_eq!(format_tokens(&lex("(1+2)*x")), "( 1 + 2 ) * x");
/// ```
#[must_use]
pub fn format_tokens(tokens: &[Token<'_>]) -> String {
    tokens.iter()
          .map(Token::text)
          .collect::<Vec<_>>()
          .join(" ")
}
